//! Command implementations.

mod ask;
mod config;
mod extract;
mod history;
mod show;

pub use ask::execute_ask;
pub use config::execute_config;
pub use extract::execute_extract;
pub use history::execute_history;
pub use show::execute_show;
