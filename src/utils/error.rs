use thiserror::Error;

#[derive(Error, Debug)]
pub enum PowError {
    #[error("Use {program} base power to calc!")]
    UsageError { program: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config file '{path}': {message}")]
    ConfigParseError { path: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl PowError {
    pub fn exit_code(&self) -> i32 {
        match self {
            PowError::UsageError { .. }
            | PowError::IoError(_)
            | PowError::ConfigParseError { .. }
            | PowError::InvalidConfigValueError { .. } => 1,
        }
    }

    /// Message shown to the user; usage text goes to stdout, the rest to stderr.
    pub fn user_friendly_message(&self) -> String {
        match self {
            PowError::UsageError { .. } => self.to_string(),
            PowError::IoError(e) => format!("Could not read configuration: {}", e),
            PowError::ConfigParseError { path, .. } => {
                format!("Config file '{}' is not valid TOML: {}", path, self)
            }
            PowError::InvalidConfigValueError { field, reason, .. } => {
                format!("Check '{}' in your configuration: {}", field, reason)
            }
        }
    }

    pub fn is_usage(&self) -> bool {
        matches!(self, PowError::UsageError { .. })
    }
}

pub type Result<T> = std::result::Result<T, PowError>;
