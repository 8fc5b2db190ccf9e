//! CLI command implementations

mod ask;
mod config;
mod coordinate;

pub use ask::cmd_ask;
pub use config::cmd_config_show;
pub use coordinate::cmd_coordinate;
