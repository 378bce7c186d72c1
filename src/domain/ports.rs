use crate::domain::model::{Field, ReadOutcome, Record, WriteOutcome};
use crate::utils::error::Result;
use serde_json::Value;

/// Traps invoked by a `RecordProxy` around every access to its target.
pub trait AccessHandler {
    fn get(&self, target: &Record, field: Field) -> ReadOutcome;

    /// Must leave `target` untouched when it returns an error.
    fn set(&self, target: &mut Record, field: Field, value: Value) -> Result<WriteOutcome>;
}

impl<H: AccessHandler + ?Sized> AccessHandler for &H {
    fn get(&self, target: &Record, field: Field) -> ReadOutcome {
        (**self).get(target, field)
    }

    fn set(&self, target: &mut Record, field: Field, value: Value) -> Result<WriteOutcome> {
        (**self).set(target, field, value)
    }
}

impl<H: AccessHandler + ?Sized> AccessHandler for Box<H> {
    fn get(&self, target: &Record, field: Field) -> ReadOutcome {
        (**self).get(target, field)
    }

    fn set(&self, target: &mut Record, field: Field, value: Value) -> Result<WriteOutcome> {
        (**self).set(target, field, value)
    }
}
