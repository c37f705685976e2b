//! Signing configuration resolution
//!
//! Resolves which signing credential a build variant uses, from the
//! `key.properties` file Android projects keep next to the Gradle build.
//! Debug builds always use the platform debug keystore; release builds use
//! the configured upload key unless the caller explicitly asks for debug
//! keys (local dev builds that never reach the store).
//!
//! Resolution is a pure function over the loaded properties. Nothing here
//! touches the keystore on disk: a `storeFile` that points nowhere is left
//! for the signer to reject, matching the lazy validation of the Gradle
//! config this replaces.

use ishaai_core::error::{Error, Result};
use ishaai_core::properties::KeystoreProperties;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Property keys expected in `key.properties`.
pub const KEY_ALIAS: &str = "keyAlias";
/// Key password property.
pub const KEY_PASSWORD: &str = "keyPassword";
/// Keystore path property (optional).
pub const STORE_FILE: &str = "storeFile";
/// Keystore password property.
pub const STORE_PASSWORD: &str = "storePassword";

/// A build variant with distinct signing behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildVariant {
    /// Local development builds, debug-signed.
    Debug,
    /// Store-bound builds, release-signed by default.
    Release,
}

impl fmt::Display for BuildVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debug => write!(f, "debug"),
            Self::Release => write!(f, "release"),
        }
    }
}

impl FromStr for BuildVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "debug" => Ok(Self::Debug),
            "release" => Ok(Self::Release),
            _ => Err(Error::invalid_value("variant", s, "debug or release")),
        }
    }
}

/// Key material a build variant signs with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningCredential {
    /// Alias of the key inside the keystore.
    pub key_alias: String,
    /// Password for the key.
    pub key_password: String,
    /// Path to the keystore file. `None` when the configuration does not
    /// reference one; existence is not checked here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_file: Option<PathBuf>,
    /// Password for the keystore.
    pub store_password: String,
}

impl SigningCredential {
    /// Whether this is the platform debug credential.
    pub fn is_debug(&self) -> bool {
        self.key_alias == "androiddebugkey"
    }
}

/// The platform-default debug credential.
///
/// Every Android SDK install signs debug builds with the same well-known
/// key: alias `androiddebugkey`, both passwords `android`, keystore at
/// `~/.android/debug.keystore`. No external configuration is consulted.
pub fn debug_credential() -> SigningCredential {
    SigningCredential {
        key_alias: "androiddebugkey".to_string(),
        key_password: "android".to_string(),
        store_file: dirs::home_dir().map(|home| home.join(".android").join("debug.keystore")),
        store_password: "android".to_string(),
    }
}

/// Resolve the signing credential for a build variant.
///
/// - `Debug` always gets the platform debug credential; `props` is ignored.
/// - `Release` with `use_debug_for_release` gets the debug credential too,
///   even when release keys are fully configured.
/// - `Release` otherwise requires `keyAlias`, `keyPassword`, and
///   `storePassword` in `props` and fails naming the first missing field.
///   `storeFile` is optional and gets `~` expansion when present.
///
/// Pure over its inputs; identical inputs resolve identically.
pub fn resolve_credential(
    variant: BuildVariant,
    props: &KeystoreProperties,
    use_debug_for_release: bool,
) -> Result<SigningCredential> {
    match variant {
        BuildVariant::Debug => Ok(debug_credential()),
        BuildVariant::Release if use_debug_for_release => Ok(debug_credential()),
        BuildVariant::Release => {
            let required = |key: &str| -> Result<String> {
                props
                    .get(key)
                    .map(String::from)
                    .ok_or_else(|| Error::missing_credential_field(key))
            };

            Ok(SigningCredential {
                key_alias: required(KEY_ALIAS)?,
                key_password: required(KEY_PASSWORD)?,
                store_file: props
                    .get(STORE_FILE)
                    .map(|p| PathBuf::from(shellexpand::tilde(p).into_owned())),
                store_password: required(STORE_PASSWORD)?,
            })
        }
    }
}

/// Findings from checking release signing readiness.
#[derive(Debug, Clone, Serialize)]
pub struct SigningCheck {
    /// Fields required for release signing that are absent.
    pub missing_fields: Vec<String>,
    /// Whether a `storeFile` value is configured at all.
    pub store_file_set: bool,
    /// Configured `storeFile` that does not exist on disk, if any.
    pub missing_keystore: Option<PathBuf>,
    /// Whether a properties file was found at all.
    pub properties_present: bool,
}

impl SigningCheck {
    /// Whether release resolution would succeed.
    ///
    /// Gated on the required fields only. `storeFile` and its presence on
    /// disk are advisory; resolution accepts a configuration without them.
    pub fn is_ready(&self) -> bool {
        self.missing_fields.is_empty()
    }
}

/// Check whether the loaded properties can sign a release build.
///
/// Unlike [`resolve_credential`], this reports every missing required
/// field at once. It also notes an unset `storeFile` and a configured
/// keystore that does not exist on disk, but both stay advisory here;
/// resolution itself never checks them.
pub fn check_release_signing(props: &KeystoreProperties) -> SigningCheck {
    let missing_fields = [KEY_ALIAS, KEY_PASSWORD, STORE_PASSWORD]
        .into_iter()
        .filter(|key| props.get(key).is_none())
        .map(String::from)
        .collect();

    let missing_keystore = props
        .get(STORE_FILE)
        .map(|p| PathBuf::from(shellexpand::tilde(p).into_owned()))
        .filter(|p| !p.exists());

    SigningCheck {
        missing_fields,
        store_file_set: props.get(STORE_FILE).is_some(),
        missing_keystore,
        properties_present: props.path.is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_props() -> KeystoreProperties {
        KeystoreProperties::from_pairs([
            (KEY_ALIAS, "a"),
            (KEY_PASSWORD, "b"),
            (STORE_FILE, "/k.jks"),
            (STORE_PASSWORD, "c"),
        ])
    }

    #[test]
    fn test_debug_ignores_config() {
        let resolved = resolve_credential(BuildVariant::Debug, &full_props(), false).unwrap();
        assert_eq!(resolved, debug_credential());
        assert!(resolved.is_debug());

        let empty = KeystoreProperties::default();
        assert_eq!(
            resolve_credential(BuildVariant::Debug, &empty, false).unwrap(),
            debug_credential()
        );
    }

    #[test]
    fn test_release_with_debug_fallback() {
        let resolved = resolve_credential(BuildVariant::Release, &full_props(), true).unwrap();
        assert_eq!(resolved, debug_credential());
    }

    #[test]
    fn test_release_resolves_configured_keys() {
        let resolved = resolve_credential(BuildVariant::Release, &full_props(), false).unwrap();
        assert_eq!(resolved.key_alias, "a");
        assert_eq!(resolved.key_password, "b");
        assert_eq!(resolved.store_file.as_deref(), Some(std::path::Path::new("/k.jks")));
        assert_eq!(resolved.store_password, "c");
    }

    #[test]
    fn test_release_missing_store_password_fails() {
        let props = KeystoreProperties::from_pairs([
            (KEY_ALIAS, "a"),
            (KEY_PASSWORD, "b"),
            (STORE_FILE, "/k.jks"),
        ]);

        let err = resolve_credential(BuildVariant::Release, &props, false).unwrap_err();
        assert_eq!(err.code, ishaai_core::ErrorCode::MissingCredentialField);
        assert!(err.message.contains(STORE_PASSWORD));
    }

    #[test]
    fn test_release_empty_config_names_first_field() {
        let empty = KeystoreProperties::default();
        let err = resolve_credential(BuildVariant::Release, &empty, false).unwrap_err();
        assert!(err.message.contains(KEY_ALIAS));
    }

    #[test]
    fn test_release_store_file_stays_optional() {
        let props = KeystoreProperties::from_pairs([
            (KEY_ALIAS, "a"),
            (KEY_PASSWORD, "b"),
            (STORE_PASSWORD, "c"),
        ]);

        let resolved = resolve_credential(BuildVariant::Release, &props, false).unwrap();
        assert!(resolved.store_file.is_none());
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let props = full_props();
        let first = resolve_credential(BuildVariant::Release, &props, false).unwrap();
        let second = resolve_credential(BuildVariant::Release, &props, false).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_variant_from_str() {
        assert_eq!("debug".parse::<BuildVariant>().unwrap(), BuildVariant::Debug);
        assert_eq!("release".parse::<BuildVariant>().unwrap(), BuildVariant::Release);
        assert!("profile".parse::<BuildVariant>().is_err());
    }

    #[test]
    fn test_check_reports_all_missing_fields() {
        let props = KeystoreProperties::from_pairs([(KEY_ALIAS, "a")]);
        let check = check_release_signing(&props);
        assert!(!check.is_ready());
        assert_eq!(
            check.missing_fields,
            vec![KEY_PASSWORD.to_string(), STORE_PASSWORD.to_string()]
        );
    }

    #[test]
    fn test_check_absent_keystore_is_advisory() {
        // /k.jks does not exist, but all required fields are set: the
        // check warns without gating readiness, matching resolution.
        let props = full_props();
        let check = check_release_signing(&props);
        assert_eq!(
            check.missing_keystore.as_deref(),
            Some(std::path::Path::new("/k.jks"))
        );
        assert!(check.missing_fields.is_empty());
        assert!(check.is_ready());
        assert!(resolve_credential(BuildVariant::Release, &props, false).is_ok());
    }

    #[test]
    fn test_check_unset_store_file_is_advisory() {
        let props = KeystoreProperties::from_pairs([
            (KEY_ALIAS, "a"),
            (KEY_PASSWORD, "b"),
            (STORE_PASSWORD, "c"),
        ]);

        let check = check_release_signing(&props);
        assert!(!check.store_file_set);
        assert!(check.missing_keystore.is_none());
        assert!(check.is_ready());
    }

    #[test]
    fn test_check_ready_with_existing_keystore() {
        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().join("upload.jks");
        std::fs::write(&store, b"jks").unwrap();

        let store_str = store.to_str().unwrap();
        let props = KeystoreProperties::from_pairs([
            (KEY_ALIAS, "upload"),
            (KEY_PASSWORD, "pw"),
            (STORE_FILE, store_str),
            (STORE_PASSWORD, "pw"),
        ]);

        let check = check_release_signing(&props);
        assert!(check.is_ready());
    }
}
