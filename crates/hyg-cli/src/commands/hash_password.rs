use std::io::BufRead;

use anyhow::Context;
use serde::Serialize;

use hyg_config::{AuthConfig, UserRecord};
use hyg_core::enums::Role;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::HashPasswordArgs;
use crate::commands::shared::parse::parse_enum;
use crate::output::output;

/// The `[auth.users."<name>"]` table alone, as it appears in `config.toml`.
#[derive(Debug, Serialize)]
struct ConfigSnippet {
    auth: AuthConfig,
}

#[derive(Debug, Serialize)]
struct HashPasswordResponse {
    username: String,
    role: Role,
    password_hash: String,
    /// Ready to paste into `.hygiene/config.toml`.
    config: String,
}

/// Handle `hyg hash-password`. The password comes from `--password` or the
/// first line of stdin.
pub fn handle(args: &HashPasswordArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let role: Role = parse_enum(&args.role, "role")?;
    let password = match &flags.password {
        Some(password) => password.clone(),
        None => read_password(&mut std::io::stdin().lock())?,
    };
    anyhow::ensure!(!password.is_empty(), "password must not be empty");

    let password_hash = hyg_auth::hash_password(&password)?;
    output(
        &credential_record(&args.username, role, password_hash)?,
        flags.format,
    )
}

fn read_password(input: &mut impl BufRead) -> anyhow::Result<String> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn credential_record(
    username: &str,
    role: Role,
    password_hash: String,
) -> anyhow::Result<HashPasswordResponse> {
    let mut auth = AuthConfig::default();
    auth.users.insert(
        username.to_string(),
        UserRecord {
            password_hash: password_hash.clone(),
            role,
        },
    );
    let config = toml::to_string(&ConfigSnippet { auth })
        .context("failed to render credential record as TOML")?;

    Ok(HashPasswordResponse {
        username: username.to_string(),
        role,
        password_hash,
        config,
    })
}
