//! `vaultkeep init` — create a new vault snapshot seeded with examples.

use crate::cli::output;
use crate::cli::{open_store, snapshot_path, Cli};
use crate::errors::{Result, VaultKeepError};

/// Execute the `init` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let path = snapshot_path(cli)?;

    if path.exists() {
        return Err(VaultKeepError::VaultAlreadyExists(path));
    }

    // Opening an absent slot seeds the default set and persists it.
    let store = open_store(cli)?;

    output::success(&format!(
        "Vault created at {} with {} example item(s)",
        path.display(),
        store.len()
    ));

    output::tip("Run `vaultkeep add <TITLE>` to add an item.");
    output::tip("Run `vaultkeep list` to see all items.");
    output::tip("Run `vaultkeep search <QUERY>` to find items.");

    Ok(())
}
