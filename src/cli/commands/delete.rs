//! `vaultkeep delete` — remove an item from the vault.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{open_store, Cli};
use crate::errors::{Result, VaultKeepError};

/// Execute the `delete` command.
pub fn execute(cli: &Cli, id: &str, force: bool) -> Result<()> {
    // Unless --force is set, ask for confirmation before deleting.
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete item '{id}'?"))
            .default(false)
            .interact()
            .map_err(|e| VaultKeepError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    let mut store = open_store(cli)?;

    if store.delete_item(id)? {
        output::success(&format!("Deleted item '{id}' ({} left)", store.len()));
    } else {
        output::warning(&format!("No item with id '{id}' — nothing deleted."));
    }

    Ok(())
}
