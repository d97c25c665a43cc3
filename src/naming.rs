//! Display-name and section-name derivation from artifact file names.
//!
//! Installer artifacts rarely come with friendly names — they look like
//! `my_app-v2.1_setup.exe`. When the user supplies no explicit override,
//! both the human-readable `Name` and the machine-safe section header are
//! derived from the file's base name (final path component, last `.suffix`
//! removed) by the same tokenization with different joins:
//!
//! - Display: `my_cool-app_2` → "My Cool App 2"
//! - Section: `My Cool App!!2` → "my-cool-app-2"
//!
//! Tokens are runs of ASCII alphanumerics; everything else (underscores,
//! dashes, dots, punctuation) separates tokens and is dropped.

use std::path::Path;

/// Final path component with extension — the `ServerFileName` value.
///
/// `"dist/my_app-setup.exe"` → `"my_app-setup.exe"`. Empty for paths with
/// no final component (`".."`, `"/"`).
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Final path component with only the last `.suffix` removed.
///
/// `"dist/my_app-v2.1_setup.exe"` → `"my_app-v2.1_setup"`. Only the final
/// suffix is stripped, so inner dots survive and feed name derivation.
pub fn base_name(path: &Path) -> String {
    path.file_stem()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Derive a human-readable display name from a base name.
///
/// Splits on runs of non-alphanumeric characters, lowercases each token,
/// uppercases its first letter, and joins with single spaces:
/// - `"my_app-v2"` → "My App V2"
/// - `"SETUP"` → "Setup"
/// - `"!!"` → "" (no tokens)
pub fn englishify(base: &str) -> String {
    tokens(base)
        .map(|t| {
            let mut word = t.to_ascii_lowercase();
            // Tokens are non-empty ASCII alphanumeric runs
            word[..1].make_ascii_uppercase();
            word
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Derive a machine-safe section name from a base name.
///
/// Same tokenization as [`englishify`], all lowercase, hyphen-joined:
/// - `"My Cool App!!2"` → "my-cool-app-2"
/// - `"my_app-v2"` → "my-app-v2"
pub fn section_name(base: &str) -> String {
    tokens(base)
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Non-empty runs of ASCII alphanumerics within `base`.
fn tokens(base: &str) -> impl Iterator<Item = &str> {
    base.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| !t.is_empty())
}
