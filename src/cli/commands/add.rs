//! `vaultkeep add` — add a new item to the vault.

use std::io::{self, IsTerminal, Read};

use crate::cli::output;
use crate::cli::{open_store, Cli};
use crate::errors::Result;
use crate::store::{Category, NewItem};

/// Execute the `add` command.
#[allow(clippy::too_many_arguments)]
pub fn execute(
    cli: &Cli,
    title: &str,
    category: Category,
    service: &str,
    value: Option<&str>,
    note: Option<&str>,
    favorite: bool,
) -> Result<()> {
    // Determine the item value from one of three sources.
    let item_value = if let Some(v) = value {
        // Source 1: Inline value on the command line.
        output::warning("Value provided on command line — it may appear in shell history.");
        v.to_string()
    } else if !io::stdin().is_terminal() {
        // Source 2: Piped input (stdin is not a terminal).
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf.trim_end().to_string()
    } else {
        // Source 3: Interactive hidden prompt (default).
        dialoguer::Password::new()
            .with_prompt(format!("Enter value for '{title}'"))
            .interact()
            .map_err(|e| {
                crate::errors::VaultKeepError::CommandFailed(format!("input prompt: {e}"))
            })?
    };

    let mut store = open_store(cli)?;

    let item = store.add_item(NewItem {
        title: title.to_string(),
        value: item_value,
        category,
        service: service.to_string(),
        favorite,
        note: note.map(str::to_string),
    })?;

    output::success(&format!(
        "Added '{}' ({}) — id {} ({} total)",
        item.title,
        item.category,
        item.id,
        store.len()
    ));
    output::tip("Run `vaultkeep list` to see all items.");

    Ok(())
}
