use crate::domain::model::{Field, ReadOutcome, Record, WriteOutcome};
use crate::domain::ports::AccessHandler;
use crate::utils::error::Result;
use serde_json::Value;

/// Mediator that routes every read and write on a record through a handler.
pub struct RecordProxy<'r, H: AccessHandler> {
    target: &'r mut Record,
    handler: H,
}

impl<'r, H: AccessHandler> RecordProxy<'r, H> {
    pub fn new(target: &'r mut Record, handler: H) -> Self {
        Self { target, handler }
    }

    pub fn read(&self, field: Field) -> ReadOutcome {
        self.handler.get(&*self.target, field)
    }

    pub fn write(&mut self, field: Field, value: impl Into<Value>) -> Result<WriteOutcome> {
        self.handler.set(&mut *self.target, field, value.into())
    }

    pub fn read_key(&self, key: &str) -> Result<ReadOutcome> {
        let field = key.parse::<Field>()?;
        Ok(self.read(field))
    }

    pub fn write_key(&mut self, key: &str, value: impl Into<Value>) -> Result<WriteOutcome> {
        let field = key.parse::<Field>()?;
        self.write(field, value)
    }

    /// Direct view of the target, bypassing the handler.
    pub fn record(&self) -> &Record {
        &*self.target
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::handlers::LoggingHandler;
    use crate::utils::error::ProxyError;
    use serde_json::json;
    use std::cell::Cell;

    struct CountingHandler {
        gets: Cell<usize>,
        sets: Cell<usize>,
    }

    impl AccessHandler for CountingHandler {
        fn get(&self, target: &Record, field: Field) -> ReadOutcome {
            self.gets.set(self.gets.get() + 1);
            ReadOutcome::Present(target.get(field).clone())
        }

        fn set(&self, target: &mut Record, field: Field, value: Value) -> Result<WriteOutcome> {
            self.sets.set(self.sets.get() + 1);
            let old = target.set(field, value.clone());
            Ok(WriteOutcome { field, old, new: value })
        }
    }

    #[test]
    fn test_every_access_goes_through_handler() {
        let mut record = Record::default();
        let handler = CountingHandler {
            gets: Cell::new(0),
            sets: Cell::new(0),
        };
        let mut proxy = RecordProxy::new(&mut record, &handler);

        proxy.read(Field::Name);
        proxy.read(Field::Age);
        proxy.write(Field::Age, 45).unwrap();

        assert_eq!(handler.gets.get(), 2);
        assert_eq!(handler.sets.get(), 1);
        assert_eq!(record.age, json!(45));
    }

    #[test]
    fn test_key_access_rejects_unknown_field() {
        let mut record = Record::default();
        let mut proxy = RecordProxy::new(&mut record, LoggingHandler);

        assert!(matches!(proxy.read_key("height"), Err(ProxyError::UnknownField(_))));
        assert!(matches!(
            proxy.write_key("height", 180),
            Err(ProxyError::UnknownField(_))
        ));
        assert_eq!(proxy.record(), &Record::default());
    }

    #[test]
    fn test_key_access_dispatches_to_field() {
        let mut record = Record::default();
        let mut proxy = RecordProxy::new(&mut record, LoggingHandler);

        let outcome = proxy.write_key("nationality", "Dutch").unwrap();
        assert_eq!(outcome.old, json!("American"));
        assert_eq!(
            proxy.read_key("nationality").unwrap(),
            ReadOutcome::Present(json!("Dutch"))
        );
    }
}
