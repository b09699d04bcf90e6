use std::path::{Path, PathBuf};

use anyhow::Context;

use hyg_auth::CredentialStore;
use hyg_config::HygConfig;
use hyg_core::access::AccessPolicy;
use hyg_core::entities::Actor;
use hyg_db::service::HygService;
use hyg_db::session::SessionContext;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: HygService,
    pub session: SessionContext,
    pub config: HygConfig,
}

impl AppContext {
    /// Open the store and start a session for the logged-in actor.
    pub async fn init(project_root: &Path, config: HygConfig, actor: Actor) -> anyhow::Result<Self> {
        let db_path = resolve_store_path(project_root, &config)?;
        let policy = AccessPolicy::new(chrono::Duration::hours(config.access.edit_window_hours));

        let service = HygService::open_local(&db_path, policy)
            .await
            .with_context(|| format!("failed to open hygiene database at {db_path}"))?
            .with_default_limit(config.cache.default_limit);
        let session = SessionContext::new(actor, config.cache.ttl());
        tracing::debug!(root = %project_root.display(), store = %db_path, "store opened");

        Ok(Self {
            service,
            session,
            config,
        })
    }
}

/// Relative store paths live under the project root. Creates the parent
/// directory of an on-disk store.
fn resolve_store_path(project_root: &Path, config: &HygConfig) -> anyhow::Result<String> {
    if config.store.is_in_memory() {
        return Ok(config.store.path.clone());
    }

    let path = PathBuf::from(&config.store.path);
    let path = if path.is_absolute() {
        path
    } else {
        project_root.join(path)
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    Ok(path.to_string_lossy().into_owned())
}

/// Verify `--user`/`--password` against the configured credential records.
///
/// Falls back to `HYGIENE_USER`/`HYGIENE_PASSWORD` read after `.env` loading.
pub fn login(config: &HygConfig, flags: &GlobalFlags) -> anyhow::Result<Actor> {
    anyhow::ensure!(
        config.auth.is_configured(),
        "no users configured; add [auth.users.<name>] records (see `hyg hash-password`)"
    );

    let user = flags
        .user
        .clone()
        .or_else(|| std::env::var("HYGIENE_USER").ok())
        .context("missing --user (or HYGIENE_USER)")?;
    let password = flags
        .password
        .clone()
        .or_else(|| std::env::var("HYGIENE_PASSWORD").ok())
        .context("missing --password (or HYGIENE_PASSWORD)")?;

    let store = CredentialStore::from_config(&config.auth);
    Ok(store.login(&user, &password)?)
}
