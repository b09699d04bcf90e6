use std::path::Path;

use anyhow::Context;

use hyg_config::HygConfig;

/// Load `.env` from the project root (if any), then the layered config.
pub fn load_config(project_root: &Path) -> anyhow::Result<HygConfig> {
    let env_path = project_root.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }

    HygConfig::load_from(project_root).context("failed to load hygiene configuration")
}
