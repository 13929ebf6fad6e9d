//! `vaultkeep favorite` — toggle an item's favorite flag.

use crate::cli::output;
use crate::cli::{open_store, Cli};
use crate::errors::Result;

/// Execute the `favorite` command.
pub fn execute(cli: &Cli, id: &str) -> Result<()> {
    let mut store = open_store(cli)?;

    if !store.toggle_favorite(id)? {
        output::warning(&format!("No item with id '{id}' — nothing changed."));
        return Ok(());
    }

    // Report the state the toggle landed on.
    let now_favorite = store.get(id).is_some_and(|i| i.favorite);
    if now_favorite {
        output::success(&format!("Item '{id}' marked as favorite"));
    } else {
        output::success(&format!("Item '{id}' removed from favorites"));
    }

    Ok(())
}
