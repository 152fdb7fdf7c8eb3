use crate::config::Settings;
use crate::domain::model::Backend;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use std::ffi::OsString;

#[derive(Debug, Clone, Parser)]
#[command(name = "powcalc")]
#[command(about = "Raise a base to a power and print the result")]
pub struct CliConfig {
    /// Base followed by power; anything after the power is ignored
    #[arg(value_name = "BASE POWER", allow_hyphen_values = true, trailing_var_arg = true)]
    pub args: Vec<OsString>,

    /// Exponentiation routine to use
    #[arg(long, value_enum, env = "POWCALC_BACKEND")]
    pub backend: Option<Backend>,

    /// Path to an optional TOML configuration file
    #[arg(short, long, env = "POWCALC_CONFIG")]
    pub config: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    /// 位置參數轉成字串，非 UTF-8 位元組以替代字元顯示
    pub fn positionals(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }

    /// Merges the command line with the config file it points at, if any.
    pub fn settings(&self) -> Result<Settings> {
        Settings::resolve(self.backend, self.config.as_deref())
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}
