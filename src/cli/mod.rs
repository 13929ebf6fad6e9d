//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;

use crate::config::Settings;
use crate::errors::Result;
use crate::store::{Category, CategoryFilter, FileSlot, UuidIds, VaultStore};

/// VaultKeep CLI: local vault organizer for passwords, API keys, codes, and notes.
#[derive(Parser)]
#[command(
    name = "vaultkeep",
    about = "Local vault organizer for passwords, API keys, codes, and notes",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vault directory (default: .vaultkeep, or vault_dir from .vaultkeep.toml)
    #[arg(long, global = true)]
    pub vault_dir: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Create a new vault seeded with example items
    Init,

    /// Add a new item
    Add {
        /// Display title (e.g. "Personal GitHub")
        title: String,

        /// Category: password, api, code, or note
        #[arg(short, long, default_value = "password")]
        category: Category,

        /// Service label used for logo lookup and search (e.g. github)
        #[arg(short, long, default_value = "")]
        service: String,

        /// Item value (omit for interactive prompt)
        #[arg(long)]
        value: Option<String>,

        /// Free-text note
        #[arg(short, long)]
        note: Option<String>,

        /// Mark the new item as a favorite
        #[arg(short, long)]
        favorite: bool,
    },

    /// Print an item's stored value
    Get {
        /// Item id
        id: String,
    },

    /// Show full details for one item
    Show {
        /// Item id
        id: String,
    },

    /// List items in a table
    List {
        /// Filter by category (password, api, code, note, or all)
        #[arg(short, long, default_value = "all")]
        category: CategoryFilter,

        /// Only show favorites
        #[arg(short, long)]
        favorites: bool,
    },

    /// Search items by title, service, or note
    Search {
        /// Case-insensitive substring to look for
        query: String,
    },

    /// Update fields on an existing item
    Update {
        /// Item id
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New value
        #[arg(long)]
        value: Option<String>,

        /// New category
        #[arg(long)]
        category: Option<Category>,

        /// New service label
        #[arg(long)]
        service: Option<String>,

        /// New note
        #[arg(long)]
        note: Option<String>,

        /// Remove the note entirely
        #[arg(long, conflicts_with = "note")]
        clear_note: bool,

        /// Set the favorite flag (true or false)
        #[arg(long)]
        favorite: Option<bool>,
    },

    /// Delete an item
    Delete {
        /// Item id
        id: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Toggle an item's favorite flag
    Favorite {
        /// Item id
        id: String,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Build the full path to the snapshot file from CLI args + settings.
///
/// `--vault-dir` beats the config file when given explicitly.
///
/// Example: `<cwd>/.vaultkeep/vault.json`
pub fn snapshot_path(cli: &Cli) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;
    let vault_dir = cli
        .vault_dir
        .clone()
        .unwrap_or_else(|| settings.vault_dir.clone());
    Ok(cwd.join(vault_dir).join(settings.snapshot_file))
}

/// Open the store at the CLI-selected slot with the production wiring
/// (file slot + uuid ids).
///
/// Seeds a fresh slot, and prints a warning when an unreadable snapshot
/// had to be replaced with the seed set.
pub fn open_store(cli: &Cli) -> Result<VaultStore> {
    let path = snapshot_path(cli)?;
    let store = VaultStore::open(Box::new(FileSlot::new(path)), Box::new(UuidIds))?;

    if let Some(reason) = store.recovered_from() {
        output::warning(&format!(
            "Snapshot could not be read ({reason}) — restored the default seed set."
        ));
    }

    Ok(store)
}
