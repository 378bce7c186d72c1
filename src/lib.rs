pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::DemoConfig;
pub use crate::core::{
    counter::{global as counter, Counter},
    demo::{Demo, DemoReport},
    handlers::{LoggingHandler, ValidatingHandler, ValidationRules},
    proxy::RecordProxy,
};
pub use domain::model::{Field, ReadOutcome, Record, WriteOutcome};
pub use domain::ports::AccessHandler;
pub use utils::error::{ProxyError, Result};
