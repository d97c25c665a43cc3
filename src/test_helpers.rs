//! Shared test utilities for the aiu-gen test suite.
//!
//! Fixture builders for the three things almost every test needs: a real
//! artifact file on disk, a run configuration with a usable URL source,
//! and a fully populated descriptor with predictable values.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::descriptor::{ArtifactSpec, RunConfig, UpdateDescriptor};
use crate::naming;

/// Write an artifact file with the given content into `tmp` and return
/// its path.
pub fn write_artifact(tmp: &TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = tmp.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// A run configuration with a base URL folder and no overrides.
pub fn run_config(version: &str) -> RunConfig {
    RunConfig {
        version: version.to_string(),
        product_version: None,
        full_url: None,
        base_url: Some("https://x.io/dl".to_string()),
        emit_marker: false,
    }
}

/// An artifact spec for `path` with no overrides and a fixed registry key.
pub fn spec_for(path: &Path) -> ArtifactSpec {
    ArtifactSpec {
        path: path.to_path_buf(),
        name: None,
        section: None,
        registry_key: "SOFTWARE\\Test\\Version".to_string(),
        flags: None,
    }
}

/// A descriptor whose values are all derived from `section`, for tests
/// that only care about document structure, not digest content.
pub fn descriptor_named(section: &str) -> UpdateDescriptor {
    UpdateDescriptor {
        section_name: section.to_string(),
        display_name: naming::englishify(section),
        product_version: "1.0".to_string(),
        url: format!("https://x.io/dl/{section}.exe"),
        size_bytes: 3,
        sha256: "abc".to_string(),
        md5: "def".to_string(),
        server_file_name: format!("{section}.exe"),
        flags: None,
        registry_key: "SOFTWARE\\X\\Version".to_string(),
        version: "1.0".to_string(),
    }
}
