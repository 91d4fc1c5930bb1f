// Run configuration for sitecopy

#[allow(clippy::module_inception)]
pub mod config;

pub use config::{RunConfig, RunMode, ROOT_ENV_VAR};
