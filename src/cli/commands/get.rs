//! `vaultkeep get` — print a single item's stored value.

use crate::cli::{open_store, Cli};
use crate::errors::{Result, VaultKeepError};

/// Execute the `get` command.
pub fn execute(cli: &Cli, id: &str) -> Result<()> {
    let store = open_store(cli)?;

    let item = store
        .get(id)
        .ok_or_else(|| VaultKeepError::ItemNotFound(id.to_string()))?;

    // Value only, so the output can be piped.
    println!("{}", item.value);

    Ok(())
}
