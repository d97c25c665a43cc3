//! Data model shared by the pipeline stages.
//!
//! The CLI adapts whatever surface syntax the user typed (`SECTION:` path
//! prefixes, positional option lists) onto these types; everything past
//! `main.rs` works only with structured values.
//!
//! [`OutputDocument`] preserves insertion order — section order in the
//! rendered file matches input order, which is observable output — and
//! rejects duplicate section names at insertion time.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("Empty section name in input '{0}'")]
    EmptySection(String),
    #[error("Missing path after section name in input '{0}'")]
    MissingPath(String),
    #[error("Duplicate section name '{0}' — use --id to disambiguate")]
    DuplicateSection(String),
}

/// One input artifact: its path plus the per-artifact overrides.
#[derive(Debug, Clone)]
pub struct ArtifactSpec {
    pub path: PathBuf,
    /// Display name override; derived from the file name when absent.
    pub name: Option<String>,
    /// Section name override; derived from the file name when absent.
    pub section: Option<String>,
    /// Registry key where the installed version is recorded.
    pub registry_key: String,
    /// Extra updater flags, copied verbatim into the section.
    pub flags: Option<String>,
}

/// Run-level configuration shared by every artifact.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Specific version number, written to every section's `Version` key.
    pub version: String,
    /// `ProductVersion` override; falls back to `version` when absent.
    pub product_version: Option<String>,
    /// Full download URL, used verbatim. Single-artifact runs only.
    pub full_url: Option<String>,
    /// Server folder URL; the artifact file name is appended.
    pub base_url: Option<String>,
    /// Emit the `;aiu;` marker line before the first section.
    pub emit_marker: bool,
}

/// Everything the updater needs to know about one artifact.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateDescriptor {
    pub section_name: String,
    pub display_name: String,
    pub product_version: String,
    pub url: String,
    pub size_bytes: u64,
    pub sha256: String,
    pub md5: String,
    pub server_file_name: String,
    pub flags: Option<String>,
    pub registry_key: String,
    pub version: String,
}

/// Ordered collection of descriptors with unique section names.
///
/// Built once by [`assemble`](crate::assemble::assemble), then rendered.
/// Insertion order is the serialization order.
#[derive(Debug)]
pub struct OutputDocument {
    emit_marker: bool,
    descriptors: Vec<UpdateDescriptor>,
}

impl OutputDocument {
    pub fn new(emit_marker: bool) -> Self {
        Self {
            emit_marker,
            descriptors: Vec::new(),
        }
    }

    /// Append a descriptor, rejecting a section name already present.
    ///
    /// A unique-key mapping would silently drop the earlier entry; in a
    /// file whose whole point is to enumerate artifacts, that is data
    /// loss, so collisions are fatal.
    pub fn push(&mut self, descriptor: UpdateDescriptor) -> Result<(), InputError> {
        if self
            .descriptors
            .iter()
            .any(|d| d.section_name == descriptor.section_name)
        {
            return Err(InputError::DuplicateSection(descriptor.section_name));
        }
        self.descriptors.push(descriptor);
        Ok(())
    }

    /// Descriptors in insertion (= serialization) order.
    pub fn descriptors(&self) -> &[UpdateDescriptor] {
        &self.descriptors
    }

    pub fn emit_marker(&self) -> bool {
        self.emit_marker
    }
}

/// Parse a positional `[SECTION:]PATH` input argument.
///
/// The `SECTION:` prefix is recognized when both sides of the first `:`
/// are non-empty. A one-character prefix is treated as a Windows drive
/// letter, not a section name, so `C:\Users\me\setup.exe` passes through
/// untouched.
///
/// - `"app:dist/setup.exe"` → `(Some("app"), "dist/setup.exe")`
/// - `"dist/setup.exe"` → `(None, "dist/setup.exe")`
/// - `":setup.exe"` → empty-section error
/// - `"app:"` → missing-path error
pub fn parse_input_arg(arg: &str) -> Result<(Option<String>, PathBuf), InputError> {
    let Some(colon) = arg.find(':') else {
        return Ok((None, PathBuf::from(arg)));
    };
    if colon == 0 {
        return Err(InputError::EmptySection(arg.to_string()));
    }
    if colon == 1 {
        // Drive letter, not a section prefix
        return Ok((None, PathBuf::from(arg)));
    }
    let (section, rest) = (&arg[..colon], &arg[colon + 1..]);
    if rest.is_empty() {
        return Err(InputError::MissingPath(arg.to_string()));
    }
    Ok((Some(section.to_string()), PathBuf::from(rest)))
}
