use crate::config::DemoConfig;
use crate::core::counter::Counter;
use crate::core::handlers::{LoggingHandler, ValidatingHandler};
use crate::core::proxy::RecordProxy;
use crate::domain::model::{Field, ReadOutcome, Record, WriteOutcome};
use crate::utils::error::{ProxyError, Result};

#[derive(Debug)]
pub struct DemoReport {
    pub name_read: ReadOutcome,
    pub plain_write: WriteOutcome,
    pub rejected_write: Option<ProxyError>,
    pub counter_values: Vec<i64>,
    pub record: Record,
}

/// Runs the two pattern walkthroughs against a given counter.
pub struct Demo<'c> {
    config: DemoConfig,
    counter: &'c Counter,
}

impl<'c> Demo<'c> {
    pub fn new(config: DemoConfig, counter: &'c Counter) -> Self {
        Self { config, counter }
    }

    pub fn run(&self, increments: u32) -> Result<DemoReport> {
        tracing::info!("Starting proxy walkthrough");
        let mut record = self.config.initial_record();

        let (name_read, plain_write) = {
            let mut proxy = RecordProxy::new(&mut record, LoggingHandler);
            let name_read = proxy.read(Field::Name);
            let plain_write = proxy.write(Field::Age, 45)?;
            (name_read, plain_write)
        };

        let rejected_write = {
            let mut proxy = RecordProxy::new(
                &mut record,
                ValidatingHandler::new(self.config.validation.clone()),
            );
            match proxy.write(Field::Age, "54") {
                Ok(outcome) => {
                    tracing::warn!("Expected rejection but {} was written", outcome.field);
                    None
                }
                Err(e) if e.is_validation() => Some(e),
                Err(e) => return Err(e),
            }
        };

        tracing::info!("Starting singleton walkthrough");
        let counter_values = (0..increments).map(|_| self.counter.increment()).collect();

        Ok(DemoReport {
            name_read,
            plain_write,
            rejected_write,
            counter_values,
            record,
        })
    }
}
