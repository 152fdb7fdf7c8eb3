pub mod custom_power;
pub mod engine;
pub mod format;
pub mod parse;
pub mod std_power;

pub use crate::domain::model::{Backend, PowerOutcome, PowerRequest};
pub use crate::domain::ports::{ConfigProvider, PowerStrategy};
pub use crate::utils::error::Result;
