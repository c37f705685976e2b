//! Configuration schema definitions

use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub android: AndroidConfig,
}

/// General project configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Project name
    #[serde(default = "default_project_name")]
    pub project_name: String,

    /// Android application id
    #[serde(default = "default_application_id")]
    pub application_id: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            project_name: default_project_name(),
            application_id: default_application_id(),
        }
    }
}

fn default_project_name() -> String {
    "IshaAI".to_string()
}

fn default_application_id() -> String {
    "com.humancloud.ishaai".to_string()
}

/// Android signing and build configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AndroidConfig {
    /// Path to the signing credentials file
    #[serde(default = "default_key_properties")]
    pub key_properties: String,

    /// Path to the Flutter-managed properties file
    #[serde(default = "default_local_properties")]
    pub local_properties: String,

    /// Sign release builds with the debug keystore (local dev only)
    #[serde(default)]
    pub use_debug_keys_for_release: bool,
}

impl Default for AndroidConfig {
    fn default() -> Self {
        Self {
            key_properties: default_key_properties(),
            local_properties: default_local_properties(),
            use_debug_keys_for_release: false,
        }
    }
}

fn default_key_properties() -> String {
    "android/key.properties".to_string()
}

fn default_local_properties() -> String {
    "android/local.properties".to_string()
}
