use crate::utils::error::{PowError, Result};
use tracing_subscriber::EnvFilter;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(PowError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PowError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_filter_directive(field_name: &str, directive: &str) -> Result<()> {
    if directive.trim().is_empty() {
        return Err(PowError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: directive.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }

    EnvFilter::try_new(directive)
        .map(|_| ())
        .map_err(|e| PowError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: directive.to_string(),
            reason: format!("Invalid log filter: {}", e),
        })
}
