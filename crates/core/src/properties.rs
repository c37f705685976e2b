//! Java `.properties`-style file parsing
//!
//! Android projects keep signing credentials in `key.properties` and
//! Flutter-managed values in `local.properties`. Both are plain-text
//! `key=value` files. A missing file is a valid empty configuration,
//! not an error: projects without release keys build debug variants
//! without any properties file present.

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Parsed contents of a `.properties` file.
///
/// Read-only after load. Keys keep their original case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeystoreProperties {
    entries: BTreeMap<String, String>,
    /// Path the properties were loaded from, if the file existed.
    pub path: Option<PathBuf>,
}

impl KeystoreProperties {
    /// Load properties from a file path.
    ///
    /// A nonexistent path yields the empty configuration. IO failures on
    /// an existing file and malformed lines are errors.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read {}: {}", path.display(), e)).with_source(e)
        })?;

        let mut props = Self::parse(&content, path)?;
        props.path = Some(path.to_path_buf());
        Ok(props)
    }

    /// Parse properties from already-read content.
    fn parse(content: &str, path: &Path) -> Result<Self> {
        let mut entries = BTreeMap::new();

        for (idx, raw_line) in content.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            // Split on the first '='; values may themselves contain '='.
            let Some((key, value)) = line.split_once('=') else {
                return Err(Error::properties_parse(path, idx + 1, raw_line));
            };

            entries.insert(key.trim().to_string(), value.trim().to_string());
        }

        Ok(Self {
            entries,
            path: None,
        })
    }

    /// Look up a property value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether no properties were loaded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of loaded properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Build properties from key/value pairs (test fixtures, overrides).
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_missing_file_is_empty() {
        let props = KeystoreProperties::load(Path::new("/nonexistent/key.properties")).unwrap();
        assert!(props.is_empty());
        assert!(props.path.is_none());
    }

    #[test]
    fn test_load_key_properties() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("key.properties");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "# release signing").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "keyAlias=upload").unwrap();
        writeln!(file, "keyPassword = hunter2 ").unwrap();
        writeln!(file, "storeFile=/keys/upload.jks").unwrap();

        let props = KeystoreProperties::load(&path).unwrap();
        assert_eq!(props.len(), 3);
        assert_eq!(props.get("keyAlias"), Some("upload"));
        assert_eq!(props.get("keyPassword"), Some("hunter2"));
        assert_eq!(props.get("storePassword"), None);
        assert_eq!(props.path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_value_may_contain_equals() {
        let props =
            KeystoreProperties::parse("keyPassword=a=b=c\n", Path::new("key.properties")).unwrap();
        assert_eq!(props.get("keyPassword"), Some("a=b=c"));
    }

    #[test]
    fn test_bang_comments_skipped() {
        let props =
            KeystoreProperties::parse("! legacy comment\nkeyAlias=a\n", Path::new("p")).unwrap();
        assert_eq!(props.len(), 1);
    }

    #[test]
    fn test_malformed_line_is_error() {
        let err = KeystoreProperties::parse("keyAlias\n", Path::new("key.properties")).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::ConfigParseError);
        assert!(err.message.contains("key.properties:1"));
    }

    #[test]
    fn test_from_pairs() {
        let props = KeystoreProperties::from_pairs([("keyAlias", "a")]);
        assert_eq!(props.get("keyAlias"), Some("a"));
    }
}
