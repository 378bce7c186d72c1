use crate::domain::model::{display_value, is_truthy, Field, ReadOutcome, Record, WriteOutcome};
use crate::domain::ports::AccessHandler;
use crate::utils::error::{ProxyError, Result};
use crate::utils::validation::has_min_chars;
use serde::{Deserialize, Serialize};
use serde_json::Value;

fn commit(target: &mut Record, field: Field, value: Value) -> WriteOutcome {
    let old = target.set(field, value.clone());
    tracing::info!(
        "Changed {} from {} to {}",
        field,
        display_value(&old),
        display_value(&value)
    );
    WriteOutcome {
        field,
        old,
        new: value,
    }
}

/// Logs every access and lets all writes through.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingHandler;

impl AccessHandler for LoggingHandler {
    fn get(&self, target: &Record, field: Field) -> ReadOutcome {
        let value = target.get(field);
        tracing::info!("The value of {} is {}", field, display_value(value));
        ReadOutcome::Present(value.clone())
    }

    fn set(&self, target: &mut Record, field: Field, value: Value) -> Result<WriteOutcome> {
        Ok(commit(target, field, value))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationRules {
    #[serde(default = "default_min_name_length")]
    pub min_name_length: usize,
}

fn default_min_name_length() -> usize {
    2
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_name_length: default_min_name_length(),
        }
    }
}

/// Rejects non-numeric ages and too-short names; reports falsy fields as missing.
#[derive(Debug, Clone, Default)]
pub struct ValidatingHandler {
    rules: ValidationRules,
}

impl ValidatingHandler {
    pub fn new(rules: ValidationRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    fn check(&self, field: Field, value: &Value) -> Result<()> {
        match field {
            Field::Age if !value.is_number() => {
                tracing::warn!("Sorry, you can only pass numeric values for age.");
                Err(ProxyError::validation(
                    field.as_str(),
                    "Sorry, you can only pass numeric values for age.",
                ))
            }
            Field::Name => {
                let long_enough = value
                    .as_str()
                    .map(|name| has_min_chars(name, self.rules.min_name_length))
                    .unwrap_or(false);
                if long_enough {
                    Ok(())
                } else {
                    tracing::warn!("You need to provide a valid name.");
                    Err(ProxyError::validation(
                        field.as_str(),
                        format!(
                            "You need to provide a valid name (at least {} characters).",
                            self.rules.min_name_length
                        ),
                    ))
                }
            }
            _ => Ok(()),
        }
    }
}

impl AccessHandler for ValidatingHandler {
    fn get(&self, target: &Record, field: Field) -> ReadOutcome {
        let value = target.get(field);
        if !is_truthy(value) {
            tracing::info!("Hmm.. this property doesn't seem to exist on the target object");
            return ReadOutcome::Missing;
        }
        tracing::info!("The value of {} is {}", field, display_value(value));
        ReadOutcome::Present(value.clone())
    }

    fn set(&self, target: &mut Record, field: Field, value: Value) -> Result<WriteOutcome> {
        self.check(field, &value)?;
        Ok(commit(target, field, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_logging_handler_accepts_any_type() {
        let mut record = Record::default();
        let outcome = LoggingHandler
            .set(&mut record, Field::Age, json!("fifty"))
            .unwrap();
        assert_eq!(outcome.old, json!(42));
        assert_eq!(record.age, json!("fifty"));
    }

    #[test]
    fn test_logging_handler_reads_falsy_values() {
        let mut record = Record::default();
        record.set(Field::Age, json!(0));
        assert_eq!(
            LoggingHandler.get(&record, Field::Age),
            ReadOutcome::Present(json!(0))
        );
    }

    #[test]
    fn test_validating_handler_rejects_string_age() {
        let mut record = Record::default();
        let err = ValidatingHandler::default()
            .set(&mut record, Field::Age, json!("54"))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(record.age, json!(42));
    }

    #[test]
    fn test_validating_handler_accepts_float_age() {
        let mut record = Record::default();
        ValidatingHandler::default()
            .set(&mut record, Field::Age, json!(42.5))
            .unwrap();
        assert_eq!(record.age, json!(42.5));
    }

    #[test]
    fn test_validating_handler_name_rules() {
        let handler = ValidatingHandler::default();
        let mut record = Record::default();

        assert!(handler.set(&mut record, Field::Name, json!("J")).is_err());
        assert!(handler.set(&mut record, Field::Name, json!("")).is_err());
        assert!(handler.set(&mut record, Field::Name, json!(12345)).is_err());
        assert_eq!(record.name, json!("Jhon Doe"));

        handler.set(&mut record, Field::Name, json!("Jo")).unwrap();
        assert_eq!(record.name, json!("Jo"));
    }

    #[test]
    fn test_custom_min_name_length() {
        let handler = ValidatingHandler::new(ValidationRules { min_name_length: 5 });
        let mut record = Record::default();

        assert!(handler.set(&mut record, Field::Name, json!("Anna")).is_err());
        handler.set(&mut record, Field::Name, json!("Annie")).unwrap();
        assert_eq!(record.name, json!("Annie"));
    }

    #[test]
    fn test_nationality_is_unvalidated() {
        let mut record = Record::default();
        ValidatingHandler::default()
            .set(&mut record, Field::Nationality, json!(""))
            .unwrap();
        assert_eq!(
            ValidatingHandler::default().get(&record, Field::Nationality),
            ReadOutcome::Missing
        );
    }
}
