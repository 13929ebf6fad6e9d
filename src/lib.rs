pub mod cli;
pub mod config;
pub mod errors;
pub mod logos;
pub mod store;
