use crate::utils::error::ProxyError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Age,
    Nationality,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Age, Field::Nationality];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Age => "age",
            Field::Nationality => "nationality",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = ProxyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "age" => Ok(Field::Age),
            "nationality" => Ok(Field::Nationality),
            other => Err(ProxyError::UnknownField(other.to_string())),
        }
    }
}

/// A person record with a fixed set of dynamically typed fields.
///
/// Values are kept as JSON values so a caller may attempt writes of the
/// wrong type; enforcing types is the job of an access handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: Value,
    pub age: Value,
    pub nationality: Value,
}

impl Record {
    pub fn new(name: impl Into<String>, age: i64, nationality: impl Into<String>) -> Self {
        Self {
            name: Value::String(name.into()),
            age: Value::from(age),
            nationality: Value::String(nationality.into()),
        }
    }

    pub fn get(&self, field: Field) -> &Value {
        match field {
            Field::Name => &self.name,
            Field::Age => &self.age,
            Field::Nationality => &self.nationality,
        }
    }

    /// Stores `value` and hands back the previous one.
    pub fn set(&mut self, field: Field, value: Value) -> Value {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Age => &mut self.age,
            Field::Nationality => &mut self.nationality,
        };
        std::mem::replace(slot, value)
    }

    pub fn snapshot(&self) -> Value {
        serde_json::json!({
            "name": self.name,
            "age": self.age,
            "nationality": self.nationality,
        })
    }
}

impl Default for Record {
    fn default() -> Self {
        Self::new("Jhon Doe", 42, "American")
    }
}

/// `null`, `false`, zero and the empty string are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Renders a value the way the access log shows it: text unquoted.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "undefined".to_string(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReadOutcome {
    Present(Value),
    Missing,
}

impl ReadOutcome {
    pub fn value(&self) -> Option<&Value> {
        match self {
            ReadOutcome::Present(v) => Some(v),
            ReadOutcome::Missing => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WriteOutcome {
    pub field: Field,
    pub old: Value,
    pub new: Value,
}
