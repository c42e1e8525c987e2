//! CLI command handlers.

mod completions;
mod config;
mod generate;
mod man;

pub use completions::run_completions;
pub use config::run_config;
pub use generate::run_generate;
pub use man::run_man;
