use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Clone not supported for type {type_name}")]
    CloneUnsupported { type_name: &'static str },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl DemoError {
    pub fn unsupported<T: ?Sized>() -> Self {
        DemoError::CloneUnsupported {
            type_name: std::any::type_name::<T>(),
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::CloneUnsupported { type_name } => {
                format!("Cannot clone {}: the type does not opt in to copying", type_name)
            }
            DemoError::IoError(e) => format!("Failed to write demo output: {}", e),
            DemoError::SerializationError(e) => format!("Failed to encode snapshot: {}", e),
            DemoError::ConfigError { message } => format!("Invalid profile: {}", message),
            DemoError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid profile field '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DemoError::CloneUnsupported { .. } => {
                "Implement ShallowCopy::shallow_copy for the type before cloning it"
            }
            DemoError::IoError(_) => "Check that stdout is writable",
            DemoError::SerializationError(_) => "Re-run with --format text",
            DemoError::ConfigError { .. } | DemoError::InvalidConfigValueError { .. } => {
                "Fix the profile TOML file or run without --profile"
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            DemoError::CloneUnsupported { .. } => 3,
            DemoError::IoError(_) | DemoError::SerializationError(_) => 1,
            _ => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
