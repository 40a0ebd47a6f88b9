//! FormTab configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the database file
    pub database_path: PathBuf,
    /// Log filter used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Reactivate the tab remembered in the settings store
    pub remember_active_tab: bool,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            database_path: data_dir.join("formtab.db"),
            log_filter: "info".to_string(),
            remember_active_tab: true,
        }
    }

    pub fn data_dir() -> PathBuf {
        std::env::var_os("XDG_DATA_HOME")
            .map(|d| PathBuf::from(d).join("formtab"))
            .unwrap_or_else(|| PathBuf::from(".formtab"))
    }

    /// Read a TOML configuration file; missing keys keep their defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.database_path.as_os_str().is_empty() {
            return Err(CoreError::Config("database_path cannot be empty".to_string()));
        }
        if self.log_filter.trim().is_empty() {
            return Err(CoreError::Config("log_filter cannot be empty".to_string()));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_toml("remember_active_tab = false").unwrap();
        assert!(!config.remember_active_tab);
        assert_eq!(config.log_filter, "info");
        assert!(config.database_path.ends_with("formtab.db"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "database_path = \"/tmp/forms.db\"").unwrap();
        writeln!(file, "log_filter = \"formtab_tabs=debug\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.database_path, PathBuf::from("/tmp/forms.db"));
        assert_eq!(config.log_filter, "formtab_tabs=debug");
        assert!(config.remember_active_tab);
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            Config::from_toml("remember_active_tab = \"yes\""),
            Err(CoreError::ConfigParse(_))
        ));
        assert!(matches!(
            Config::from_toml("log_filter = \"  \""),
            Err(CoreError::Config(_))
        ));
        assert!(matches!(
            Config::load("/definitely/not/here.toml"),
            Err(CoreError::Io(_))
        ));
    }
}
