//! `vaultkeep search` — find items by title, service, or note.

use crate::cli::output;
use crate::cli::{open_store, Cli};
use crate::errors::Result;

/// Execute the `search` command.
pub fn execute(cli: &Cli, query: &str) -> Result<()> {
    let store = open_store(cli)?;

    let matches = store.search(query);

    output::info(&format!("{} match(es) for '{}'", matches.len(), query.trim()));
    output::print_items_table(&matches);

    Ok(())
}
