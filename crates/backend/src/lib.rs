pub mod actor;

mod domain;
pub use domain::{config, frequency};
