//! `vaultkeep list` — display items in a table.

use crate::cli::output;
use crate::cli::{open_store, Cli};
use crate::errors::Result;
use crate::store::CategoryFilter;

/// Execute the `list` command.
pub fn execute(cli: &Cli, category: CategoryFilter, favorites: bool) -> Result<()> {
    let store = open_store(cli)?;

    let mut items = store.items_by_category(category);
    if favorites {
        items.retain(|i| i.favorite);
    }

    output::info(&format!("{} item(s)", items.len()));
    output::print_items_table(&items);

    Ok(())
}
