//! Configuration module — project settings from `.vaultkeep.toml`.

pub mod settings;

pub use settings::Settings;
