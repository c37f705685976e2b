//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, Result};
use std::path::Path;

/// Configuration wrapper
#[derive(Debug, Clone)]
pub struct Config {
    pub schema: ConfigSchema,
    pub path: Option<String>,
}

impl Config {
    /// Load configuration from a file path or use defaults
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = path.map(String::from).or_else(find_config_file);

        let schema = if let Some(ref p) = config_path {
            load_config_file(p)?
        } else {
            ConfigSchema::default()
        };

        Ok(Self {
            schema,
            path: config_path,
        })
    }

    /// Load with defaults only (no file)
    pub fn default() -> Self {
        Self {
            schema: ConfigSchema::default(),
            path: None,
        }
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<String> {
    let candidates = [
        ".ishaai-tools.toml",
        "ishaai-tools.toml",
        ".config/ishaai-tools.toml",
    ];

    for candidate in candidates {
        if Path::new(candidate).exists() {
            return Some(candidate.to_string());
        }
    }

    None
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &str) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::config(format!("Failed to read config file {}: {}", path, e)))?;

    toml::from_str(&content)
        .map_err(|e| Error::config(format!("Failed to parse config file {}: {}", path, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.path.is_none());
        assert!(!config.schema.android.use_debug_keys_for_release);
    }

    #[test]
    fn test_config_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ishaai-tools.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[android]").unwrap();
        writeln!(file, "key_properties = \"app/key.properties\"").unwrap();

        let config = Config::load(path.to_str()).unwrap();
        assert_eq!(config.schema.android.key_properties, "app/key.properties");
        assert!(config.path.is_some());
    }

    #[test]
    fn test_config_load_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ishaai-tools.toml");
        std::fs::write(&path, "android = nope").unwrap();

        assert!(Config::load(path.to_str()).is_err());
    }
}
