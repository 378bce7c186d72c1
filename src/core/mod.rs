pub mod counter;
pub mod demo;
pub mod handlers;
pub mod proxy;

pub use crate::domain::model::{Field, ReadOutcome, Record, WriteOutcome};
pub use crate::domain::ports::AccessHandler;
pub use crate::utils::error::Result;
