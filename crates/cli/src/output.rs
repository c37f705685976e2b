//! Terminal output utilities
//!
//! Consistent formatting for CLI output. Anything that prints key material
//! goes through [`mask_secret`]; full passwords never reach the terminal.

use ishaai_android::SigningCredential;
use owo_colors::OwoColorize;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.len()));
    }
}

/// Mask a secret for display, keeping only the first character.
pub fn mask_secret(secret: &str) -> String {
    match secret.chars().next() {
        Some(first) if secret.chars().count() > 1 => {
            format!("{}{}", first, "*".repeat(secret.chars().count() - 1))
        }
        Some(_) => "*".to_string(),
        None => String::new(),
    }
}

/// Print a labelled field, dimming the label.
pub fn print_field(label: &str, value: &str) {
    println!("  {:<14} {}", label.dimmed(), value);
}

/// Render a resolved credential with passwords masked.
pub fn print_credential(variant: &str, credential: &SigningCredential) {
    println!("{} signing:", variant.bold());
    print_field("keyAlias", &credential.key_alias);
    print_field("keyPassword", &mask_secret(&credential.key_password));
    print_field(
        "storeFile",
        &credential
            .store_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
    );
    print_field("storePassword", &mask_secret(&credential.store_password));
}
