//! `vaultkeep update` — apply a partial update to an existing item.

use crate::cli::output;
use crate::cli::{open_store, Cli};
use crate::errors::Result;
use crate::store::ItemPatch;

/// Execute the `update` command.
pub fn execute(cli: &Cli, id: &str, patch: ItemPatch) -> Result<()> {
    if patch.is_empty() {
        output::warning("Nothing to update — pass at least one field flag.");
        output::tip("Example: vaultkeep update <ID> --title \"New title\"");
        return Ok(());
    }

    let mut store = open_store(cli)?;

    if store.update_item(id, patch)? {
        output::success(&format!("Updated item '{id}'"));
    } else {
        // Unknown id is a no-op in the store; tell the user anyway.
        output::warning(&format!("No item with id '{id}' — nothing changed."));
    }

    Ok(())
}
