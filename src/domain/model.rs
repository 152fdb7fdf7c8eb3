use serde::{Deserialize, Serialize};
use std::fmt;

/// Which exponentiation routine computes the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// `f64::powf`
    #[default]
    Std,
    /// The crate's own power routine.
    Custom,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Std => write!(f, "std"),
            Backend::Custom => write!(f, "custom"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PowerRequest {
    pub base_arg: String,
    pub power_arg: String,
    pub base: f64,
    pub power: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PowerOutcome {
    pub request: PowerRequest,
    pub result: f64,
    pub backend: Backend,
}
