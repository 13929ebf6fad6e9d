//! One module per subcommand; each exposes a single `execute`
//! function called from `main`.

pub mod add;
pub mod completions;
pub mod delete;
pub mod favorite;
pub mod get;
pub mod init;
pub mod list;
pub mod search;
pub mod show;
pub mod update;
