use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, VaultKeepError};

/// Project-level configuration, loaded from `.vaultkeep.toml`.
///
/// Every field has a sensible default so VaultKeep works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory (relative to project root) where the snapshot is stored.
    #[serde(default = "default_vault_dir")]
    pub vault_dir: String,

    /// File name of the snapshot slot inside the vault directory.
    #[serde(default = "default_snapshot_file")]
    pub snapshot_file: String,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_vault_dir() -> String {
    ".vaultkeep".to_string()
}

fn default_snapshot_file() -> String {
    "vault.json".to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            vault_dir: default_vault_dir(),
            snapshot_file: default_snapshot_file(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the project root.
    const FILE_NAME: &'static str = ".vaultkeep.toml";

    /// Load settings from `<project_dir>/.vaultkeep.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            VaultKeepError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Build the full path to the snapshot file.
    ///
    /// Example: `project_dir/.vaultkeep/vault.json`
    pub fn snapshot_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.vault_dir).join(&self.snapshot_file)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
