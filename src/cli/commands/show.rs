//! `vaultkeep show` — display full details for one item.

use console::style;

use crate::cli::{open_store, Cli};
use crate::errors::{Result, VaultKeepError};
use crate::logos;

/// Execute the `show` command.
pub fn execute(cli: &Cli, id: &str) -> Result<()> {
    let store = open_store(cli)?;

    let item = store
        .get(id)
        .ok_or_else(|| VaultKeepError::ItemNotFound(id.to_string()))?;

    let label = |s: &str| style(format!("{s:>10}")).dim().to_string();

    println!("{} {}", label("ID"), item.id);
    println!("{} {}", label("Title"), item.title);
    println!("{} {}", label("Category"), item.category);
    println!("{} {}", label("Service"), item.service);
    println!("{} {}", label("Value"), item.value);
    println!(
        "{} {}",
        label("Favorite"),
        if item.favorite { "yes" } else { "no" }
    );
    if let Some(note) = &item.note {
        println!("{} {}", label("Note"), note);
    }
    println!(
        "{} {}",
        label("Created"),
        item.created_at.format("%Y-%m-%d %H:%M:%S")
    );
    println!(
        "{} {}",
        label("Updated"),
        item.updated_at.format("%Y-%m-%d %H:%M:%S")
    );
    if let Some(logo) = logos::logo_path(&item.service) {
        println!("{} {}", label("Logo"), logo);
    }

    Ok(())
}
