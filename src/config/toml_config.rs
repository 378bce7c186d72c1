use crate::core::handlers::ValidationRules;
use crate::domain::model::Record;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_one_of, validate_positive_number, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default)]
    pub record: RecordConfig,
    #[serde(default)]
    pub validation: ValidationRules,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordConfig {
    pub name: String,
    pub age: i64,
    pub nationality: String,
}

impl Default for RecordConfig {
    fn default() -> Self {
        Self {
            name: "Jhon Doe".to_string(),
            age: 42,
            nationality: "American".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            level: default_log_level(),
        }
    }
}

impl DemoConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// 依設定建立初始紀錄
    pub fn initial_record(&self) -> Record {
        Record::new(
            self.record.name.clone(),
            self.record.age,
            self.record.nationality.clone(),
        )
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("record.name", &self.record.name)?;
        validate_positive_number(
            "validation.min_name_length",
            self.validation.min_name_length,
            1,
        )?;
        validate_one_of("logging.level", &self.logging.level, &LOG_LEVELS)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ProxyError;
    use serde_json::json;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = DemoConfig::from_toml_str("").unwrap();
        assert_eq!(config.validation.min_name_length, 2);
        assert_eq!(config.logging.format, LogFormat::Compact);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.initial_record(), Record::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_full_toml() {
        let config = DemoConfig::from_toml_str(
            r#"
[record]
name = "Jane Roe"
age = 31
nationality = "Canadian"

[validation]
min_name_length = 3

[logging]
format = "json"
level = "debug"
"#,
        )
        .unwrap();

        let record = config.initial_record();
        assert_eq!(record.name, json!("Jane Roe"));
        assert_eq!(record.age, json!(31));
        assert_eq!(config.validation.min_name_length, 3);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_log_format_is_parse_error() {
        let err = DemoConfig::from_toml_str("[logging]\nformat = \"xml\"\n").unwrap_err();
        assert!(matches!(err, ProxyError::TomlParse(_)));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = DemoConfig::default();
        config.validation.min_name_length = 0;
        assert!(matches!(
            config.validate(),
            Err(ProxyError::InvalidConfigValue { ref field, .. }) if field == "validation.min_name_length"
        ));

        let mut config = DemoConfig::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());

        let mut config = DemoConfig::default();
        config.record.name = " ".to_string();
        assert!(config.validate().is_err());
    }
}
