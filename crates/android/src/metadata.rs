//! Flutter-supplied build metadata
//!
//! SDK levels and version metadata are owned by the Flutter tooling, which
//! writes them into `local.properties`. This module forwards them without
//! computing anything: absent keys stay absent, and the only validation is
//! that numeric fields actually parse as integers.

use ishaai_core::error::{Error, Result};
use ishaai_core::properties::KeystoreProperties;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Build metadata forwarded from the Flutter tooling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlutterMetadata {
    /// Minimum supported Android API level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_sdk: Option<u32>,
    /// Target Android API level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_sdk: Option<u32>,
    /// API level the app compiles against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compile_sdk: Option<u32>,
    /// Monotonic version code for the store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_code: Option<u32>,
    /// Human-readable version string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_name: Option<String>,
}

impl FlutterMetadata {
    /// Read forwarded metadata from a `local.properties` file.
    ///
    /// A missing file yields empty metadata, same as properties loading.
    pub fn from_local_properties(path: &Path) -> Result<Self> {
        let props = KeystoreProperties::load(path)?;
        Self::from_properties(&props)
    }

    /// Extract forwarded metadata from already-loaded properties.
    pub fn from_properties(props: &KeystoreProperties) -> Result<Self> {
        Ok(Self {
            min_sdk: parse_u32(props, "flutter.minSdkVersion")?,
            target_sdk: parse_u32(props, "flutter.targetSdkVersion")?,
            compile_sdk: parse_u32(props, "flutter.compileSdkVersion")?,
            version_code: parse_u32(props, "flutter.versionCode")?,
            version_name: props.get("flutter.versionName").map(String::from),
        })
    }

    /// Whether the Flutter tooling supplied anything at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn parse_u32(props: &KeystoreProperties, key: &str) -> Result<Option<u32>> {
    props
        .get(key)
        .map(|v| {
            v.parse::<u32>()
                .map_err(|_| Error::invalid_value(key, v, "a non-negative integer"))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty_metadata() {
        let meta =
            FlutterMetadata::from_local_properties(Path::new("/nonexistent/local.properties"))
                .unwrap();
        assert!(meta.is_empty());
    }

    #[test]
    fn test_forwarded_values() {
        let props = KeystoreProperties::from_pairs([
            ("flutter.minSdkVersion", "21"),
            ("flutter.targetSdkVersion", "34"),
            ("flutter.compileSdkVersion", "34"),
            ("flutter.versionCode", "42"),
            ("flutter.versionName", "1.4.0"),
            ("sdk.dir", "/opt/android-sdk"),
        ]);

        let meta = FlutterMetadata::from_properties(&props).unwrap();
        assert_eq!(meta.min_sdk, Some(21));
        assert_eq!(meta.target_sdk, Some(34));
        assert_eq!(meta.compile_sdk, Some(34));
        assert_eq!(meta.version_code, Some(42));
        assert_eq!(meta.version_name.as_deref(), Some("1.4.0"));
    }

    #[test]
    fn test_partial_metadata_stays_partial() {
        let props = KeystoreProperties::from_pairs([("flutter.versionName", "1.0.0")]);
        let meta = FlutterMetadata::from_properties(&props).unwrap();
        assert!(meta.min_sdk.is_none());
        assert_eq!(meta.version_name.as_deref(), Some("1.0.0"));
    }

    #[test]
    fn test_non_numeric_sdk_is_error() {
        let props = KeystoreProperties::from_pairs([("flutter.minSdkVersion", "latest")]);
        let err = FlutterMetadata::from_properties(&props).unwrap_err();
        assert_eq!(err.code, ishaai_core::ErrorCode::InvalidConfigValue);
        assert!(err.message.contains("flutter.minSdkVersion"));
    }
}
