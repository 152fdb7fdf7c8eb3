#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::Backend;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

/// Effective configuration after merging flags, environment and config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    pub backend: Backend,
    pub log_level: Option<String>,
}

impl Settings {
    /// `backend_override` comes from the flag or its environment variable and
    /// wins over the file.
    pub fn resolve(backend_override: Option<Backend>, config_path: Option<&str>) -> Result<Self> {
        // 載入並驗證設定檔 (未指定則使用空設定)
        let file = match config_path {
            Some(path) => {
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                config
            }
            None => TomlConfig::default(),
        };

        // 優先順序: 命令列/環境變數 > 設定檔 > 預設值
        Ok(Self {
            backend: backend_override.or(file.backend()).unwrap_or_default(),
            log_level: file.log_level().map(str::to_string),
        })
    }
}

impl ConfigProvider for Settings {
    fn backend(&self) -> Backend {
        self.backend
    }

    fn log_level(&self) -> Option<&str> {
        self.log_level.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn config_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_to_std() {
        let settings = Settings::resolve(None, None).unwrap();
        assert_eq!(settings.backend(), Backend::Std);
        assert_eq!(settings.log_level(), None);
    }

    #[test]
    fn test_file_backend_is_used() {
        let file = config_file("[calc]\nbackend = \"custom\"\n");
        let settings = Settings::resolve(None, file.path().to_str()).unwrap();
        assert_eq!(settings.backend(), Backend::Custom);
    }

    #[test]
    fn test_override_wins_over_file() {
        let file = config_file("[calc]\nbackend = \"custom\"\n[logging]\nlevel = \"info\"\n");
        let settings = Settings::resolve(Some(Backend::Std), file.path().to_str()).unwrap();
        assert_eq!(settings.backend(), Backend::Std);
        assert_eq!(settings.log_level(), Some("info"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::resolve(None, Some("/nonexistent/powcalc.toml")).unwrap_err();
        assert!(matches!(err, crate::utils::error::PowError::IoError(_)));
    }
}
