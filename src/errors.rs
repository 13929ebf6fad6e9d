use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in VaultKeep.
#[derive(Debug, Error)]
pub enum VaultKeepError {
    // --- Snapshot errors ---
    #[error("Malformed snapshot: {0}")]
    MalformedSnapshot(String),

    #[error("Vault already exists at {0} — use `vaultkeep add` to put items into it")]
    VaultAlreadyExists(PathBuf),

    #[error("Item '{0}' not found")]
    ItemNotFound(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for VaultKeep results.
pub type Result<T> = std::result::Result<T, VaultKeepError>;
