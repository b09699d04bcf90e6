use std::path::{Path, PathBuf};

use hyg_config::PROJECT_DIR;

/// Walk upwards from `start` until a `.hygiene` directory is found.
#[must_use]
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(PROJECT_DIR).is_dir())
        .map(Path::to_path_buf)
}

/// Resolve the project root from `--project`, discovery, or the current
/// directory when no `.hygiene` directory exists yet.
///
/// # Errors
///
/// Fails if `--project` names a directory that does not exist or the current
/// directory cannot be read.
pub fn resolve_project_root(project_override: Option<&str>) -> anyhow::Result<PathBuf> {
    if let Some(path) = project_override {
        let explicit = PathBuf::from(path);
        if explicit.file_name().is_some_and(|name| name == PROJECT_DIR) {
            if let Some(parent) = explicit.parent() {
                return Ok(parent.to_path_buf());
            }
        }
        anyhow::ensure!(
            explicit.is_dir(),
            "invalid --project '{}': directory does not exist",
            explicit.display()
        );
        return Ok(explicit);
    }

    let cwd = std::env::current_dir()
        .map_err(|error| anyhow::anyhow!("failed to read current directory: {error}"))?;
    Ok(find_project_root(&cwd).unwrap_or(cwd))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::{find_project_root, resolve_project_root};

    #[test]
    fn finds_project_root_in_parent_directory() {
        let temp = TempDir::new().expect("tempdir should create");
        std::fs::create_dir(temp.path().join(".hygiene")).expect(".hygiene should create");
        std::fs::create_dir_all(temp.path().join("a/b")).expect("nested dirs should create");

        let found = find_project_root(&temp.path().join("a/b"));
        assert_eq!(found.as_deref(), Some(temp.path()));
    }

    #[test]
    fn returns_none_when_not_found() {
        let temp = TempDir::new().expect("tempdir should create");
        assert!(find_project_root(temp.path()).is_none());
    }

    #[test]
    fn project_flag_accepts_state_dir() {
        let temp = TempDir::new().expect("tempdir should create");
        let state = temp.path().join(".hygiene");
        std::fs::create_dir(&state).expect(".hygiene should create");

        let root = resolve_project_root(state.to_str()).expect("should resolve");
        assert_eq!(root, temp.path());
    }

    #[test]
    fn project_flag_rejects_missing_dir() {
        let temp = TempDir::new().expect("tempdir should create");
        let missing = temp.path().join("nope");
        assert!(resolve_project_root(missing.to_str()).is_err());
    }
}
