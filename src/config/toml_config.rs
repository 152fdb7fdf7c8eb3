use crate::domain::model::Backend;
use crate::utils::error::{PowError, Result};
use crate::utils::validation::{validate_filter_directive, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub calc: Option<CalcConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalcConfig {
    pub backend: Option<Backend>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content, &path.as_ref().display().to_string())
    }

    /// `origin` names the source in error messages.
    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed = Self::substitute_env_vars(content, origin)?;

        toml::from_str(&processed).map_err(|e| PowError::ConfigParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay as written.
    fn substitute_env_vars(content: &str, origin: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PowError::ConfigParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn backend(&self) -> Option<Backend> {
        self.calc.as_ref().and_then(|c| c.backend)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(level) = self.log_level() {
            validate_filter_directive("logging.level", level)?;
        }
        Ok(())
    }
}
