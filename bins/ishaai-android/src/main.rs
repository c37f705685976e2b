//! Isha AI Android CLI
//!
//! Resolves and inspects the Android build configuration: signing
//! credentials per variant and the Flutter-forwarded build metadata.

use anyhow::Result;
use clap::{Parser, Subcommand};
use ishaai_android::{metadata::FlutterMetadata, signing, BuildVariant};
use ishaai_cli::output::{print_credential, print_field, Status};
use ishaai_core::config::Config;
use ishaai_core::error::exit_codes;
use ishaai_core::properties::KeystoreProperties;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ishaai-android")]
#[command(about = "Android build configuration tools for Isha AI")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Signing configuration
    Signing {
        #[command(subcommand)]
        action: SigningAction,
    },

    /// Print Flutter-forwarded build metadata
    Metadata {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Diagnose build configuration
    Doctor,
}

#[derive(Subcommand)]
enum SigningAction {
    /// Resolve the credential a variant would sign with
    Resolve {
        /// Build variant: debug, release
        #[arg(long, default_value = "release")]
        variant: String,
        /// Sign release with the debug keystore
        #[arg(long)]
        use_debug_keys: bool,
        /// Path to key.properties (overrides config)
        #[arg(long)]
        properties: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check release signing readiness
    Check {
        /// Path to key.properties (overrides config)
        #[arg(long)]
        properties: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        owo_colors::set_override(false);
    }

    let config = Config::load(cli.config.as_deref().and_then(Path::to_str))?;

    let exit_code = match cli.command {
        Commands::Signing { action } => match action {
            SigningAction::Resolve {
                variant,
                use_debug_keys,
                properties,
                json,
            } => run_resolve(&variant, use_debug_keys, properties.as_deref(), json, &config),
            SigningAction::Check { properties } => run_check(properties.as_deref(), &config),
        },
        Commands::Metadata { json } => run_metadata(json, &config),
        Commands::Doctor => run_doctor(&config),
    };

    std::process::exit(exit_code);
}

fn key_properties_path<'a>(override_path: Option<&'a Path>, config: &'a Config) -> &'a Path {
    override_path.unwrap_or_else(|| Path::new(&config.schema.android.key_properties))
}

fn run_resolve(
    variant: &str,
    use_debug_keys: bool,
    properties: Option<&Path>,
    json: bool,
    config: &Config,
) -> i32 {
    let variant: BuildVariant = match variant.parse() {
        Ok(v) => v,
        Err(e) => {
            Status::error(&format!("{}", e));
            return exit_codes::FAILURE;
        }
    };

    let path = key_properties_path(properties, config);
    let props = match KeystoreProperties::load(path) {
        Ok(p) => p,
        Err(e) => {
            Status::error(&format!("Failed to load {}: {}", path.display(), e));
            return exit_codes::CONFIG_ERROR;
        }
    };

    let use_debug = use_debug_keys || config.schema.android.use_debug_keys_for_release;

    match signing::resolve_credential(variant, &props, use_debug) {
        Ok(credential) => {
            if json {
                match serde_json::to_string_pretty(&credential) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        Status::error(&format!("Serialization error: {}", e));
                        return exit_codes::FAILURE;
                    }
                }
            } else {
                print_credential(&variant.to_string(), &credential);
                if variant == BuildVariant::Release && credential.is_debug() {
                    Status::warning("Release variant is using debug keys; not store-ready");
                }
            }
            exit_codes::SUCCESS
        }
        Err(e) => {
            Status::error(&format!("{}", e));
            exit_codes::for_error(&e)
        }
    }
}

fn run_check(properties: Option<&Path>, config: &Config) -> i32 {
    let path = key_properties_path(properties, config);
    let props = match KeystoreProperties::load(path) {
        Ok(p) => p,
        Err(e) => {
            Status::error(&format!("Failed to load {}: {}", path.display(), e));
            return exit_codes::CONFIG_ERROR;
        }
    };

    if props.path.is_none() {
        Status::warning(&format!(
            "{} not found; release builds cannot be signed",
            path.display()
        ));
    }

    let check = signing::check_release_signing(&props);

    for field in &check.missing_fields {
        Status::error(&format!("Missing field: {}", field));
    }
    if !check.store_file_set {
        Status::warning("storeFile is not set; the signer has no keystore to use");
    } else if let Some(store) = &check.missing_keystore {
        Status::warning(&format!("Keystore does not exist: {}", store.display()));
    }

    if check.is_ready() {
        Status::success("Release signing is ready");
        exit_codes::SUCCESS
    } else {
        Status::error("Release signing is not ready");
        exit_codes::SIGNING_ERROR
    }
}

fn run_metadata(json: bool, config: &Config) -> i32 {
    let path = Path::new(&config.schema.android.local_properties);

    match FlutterMetadata::from_local_properties(path) {
        Ok(meta) => {
            if json {
                match serde_json::to_string_pretty(&meta) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        Status::error(&format!("Serialization error: {}", e));
                        return exit_codes::FAILURE;
                    }
                }
            } else if meta.is_empty() {
                Status::info("No Flutter metadata found; run a Flutter build first");
            } else {
                Status::header("Flutter build metadata");
                print_optional("minSdk", meta.min_sdk.map(|v| v.to_string()));
                print_optional("targetSdk", meta.target_sdk.map(|v| v.to_string()));
                print_optional("compileSdk", meta.compile_sdk.map(|v| v.to_string()));
                print_optional("versionCode", meta.version_code.map(|v| v.to_string()));
                print_optional("versionName", meta.version_name.clone());
            }
            exit_codes::SUCCESS
        }
        Err(e) => {
            Status::error(&format!("{}", e));
            exit_codes::CONFIG_ERROR
        }
    }
}

fn print_optional(label: &str, value: Option<String>) {
    print_field(label, value.as_deref().unwrap_or("(not set)"));
}

fn run_doctor(config: &Config) -> i32 {
    println!("Build Configuration Check");
    println!();

    let mut failures = 0;

    let key_props = Path::new(&config.schema.android.key_properties);
    if key_props.exists() {
        Status::success(&format!("{}: present", key_props.display()));
    } else {
        Status::warning(&format!(
            "{}: not found (release signing unavailable)",
            key_props.display()
        ));
    }

    match KeystoreProperties::load(key_props) {
        Ok(props) => {
            let check = signing::check_release_signing(&props);
            if props.path.is_some() {
                if check.missing_fields.is_empty() {
                    Status::success("key.properties: required signing fields set");
                } else {
                    Status::error(&format!(
                        "key.properties: missing {}",
                        check.missing_fields.join(", ")
                    ));
                    failures += 1;
                }
                if !check.store_file_set {
                    Status::warning("key.properties: storeFile not set");
                } else if let Some(store) = &check.missing_keystore {
                    Status::warning(&format!("keystore missing on disk: {}", store.display()));
                }
            }
        }
        Err(e) => {
            Status::error(&format!("key.properties: {}", e));
            failures += 1;
        }
    }

    let local_props = Path::new(&config.schema.android.local_properties);
    if local_props.exists() {
        Status::success(&format!("{}: present", local_props.display()));
    } else {
        Status::warning(&format!("{}: not found", local_props.display()));
    }

    let debug_keystore = dirs::home_dir().map(|h| h.join(".android").join("debug.keystore"));
    match debug_keystore {
        Some(path) if path.exists() => {
            Status::success("debug keystore: present");
        }
        Some(path) => {
            Status::warning(&format!(
                "debug keystore: not found at {} (created on first debug build)",
                path.display()
            ));
        }
        None => {
            Status::warning("debug keystore: no home directory");
        }
    }

    if failures == 0 {
        exit_codes::SUCCESS
    } else {
        exit_codes::FAILURE
    }
}
