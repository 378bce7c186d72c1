use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("Validation error on `{field}`: {reason}")]
    Validation { field: String, reason: String },

    #[error("Cannot modify operation `{operation}`: counter handle is frozen")]
    FrozenState { operation: String },

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Invalid configuration value for '{field}': '{value}' - {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl ProxyError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn frozen(operation: impl Into<String>) -> Self {
        Self::FrozenState {
            operation: operation.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    pub fn is_frozen(&self) -> bool {
        matches!(self, Self::FrozenState { .. })
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Validation { reason, .. } => reason.clone(),
            Self::FrozenState { operation } => {
                format!("The counter cannot be changed (tried to modify `{}`)", operation)
            }
            Self::UnknownField(name) => {
                format!("`{}` is not a field of this record (expected name, age or nationality)", name)
            }
            Self::UnknownOperation(name) => {
                format!("`{}` is not a counter operation (expected increment or decrement)", name)
            }
            Self::InvalidConfigValue { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            Self::Io(e) => format!("Could not read file: {}", e),
            Self::TomlParse(e) => format!("Configuration file is not valid TOML: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProxyError>;
