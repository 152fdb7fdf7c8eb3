pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::Settings;
pub use core::custom_power::CustomPower;
pub use core::engine::PowerEngine;
pub use core::std_power::StdPower;
pub use domain::model::Backend;
pub use domain::ports::PowerStrategy;
pub use utils::error::{PowError, Result};
