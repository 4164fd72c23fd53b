pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::ProfileConfig;
pub use core::demo::{CloneDemo, DemoReport, Mutation, Scenario};
pub use core::report::{OutputFormat, StepOutcome};
pub use domain::{
    duplicate, CopyMode, DeepClone, Hobby, Programmer, ProgrammerSnapshot, ShallowCopy, Shared,
};
pub use utils::error::{DemoError, Result};
