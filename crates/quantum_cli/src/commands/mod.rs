mod debug;
mod history;
mod providers;

use std::path::PathBuf;

use anyhow::{Context, Result};
use quantum_core::SqliteStore;

use crate::cli::{Cli, Command};

pub async fn handle(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Debug(args) => debug::run(args).await,
        Command::History { action } => history::run(action),
        Command::Providers { action } => providers::run(action).await,
    }
}

/// History DB location: QDBG_DB_PATH, or ~/.qdbg/qdbg.db.
fn db_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("QDBG_DB_PATH") {
        return Ok(PathBuf::from(path));
    }
    let home = dirs::home_dir().context("cannot determine home directory")?;
    Ok(home.join(".qdbg").join("qdbg.db"))
}

/// The store is owned here, at the composition layer, and handed to the
/// commands that need it.
pub(crate) fn open_store() -> Result<SqliteStore> {
    let path = db_path()?;
    SqliteStore::open_at(&path).with_context(|| format!("open history db at {}", path.display()))
}
