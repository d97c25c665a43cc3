//! # aiu-gen
//!
//! Builds the updates descriptor file consumed by Advanced Installer style
//! updaters. For each local installer artifact, aiu-gen computes identifying
//! metadata — content digests, size, version, download URL — and emits it as
//! one section of a deterministically ordered key-value document:
//!
//! ```text
//! [my-app]
//! Name = My App
//! ProductVersion = 2.1.3
//! URL = https://updates.example.com/downloads/my_app-setup.exe
//! Size = 48211456
//! SHA256 = 9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08
//! MD5 = 5d41402abc4b2a76b9719d911017c592
//! ServerFileName = my_app-setup.exe
//! RegistryKey = SOFTWARE\Example\MyApp\Version
//! Version = 2.1.3
//! ```
//!
//! # Architecture: Resolve → Assemble → Render
//!
//! The pipeline is three pure stages behind a thin CLI:
//!
//! ```text
//! 1. Resolve   path + overrides  →  names, URL       (naming)
//! 2. Assemble  artifact specs    →  OutputDocument   (assemble, digest)
//! 3. Render    OutputDocument    →  descriptor text  (render)
//! ```
//!
//! The stages are pure functions over explicit inputs: the CLI parses flags
//! into [`descriptor::RunConfig`] and [`descriptor::ArtifactSpec`] values,
//! and the only I/O inside the pipeline is reading the artifact bytes for
//! hashing. This keeps every naming rule and the exact output format unit
//! testable without a binary invocation.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`descriptor`] | Data model (`ArtifactSpec`, `RunConfig`, `UpdateDescriptor`, `OutputDocument`) and `[SECTION:]PATH` input parsing |
//! | [`naming`] | Display-name and section-name derivation from artifact file names |
//! | [`digest`] | Content digests: size, SHA-256, MD5 of an artifact file |
//! | [`assemble`] | Orchestrates resolution + hashing across all artifacts into an ordered document |
//! | [`render`] | Serializes the document to the exact sectioned key-value wire format |
//!
//! # Design Decisions
//!
//! ## Raw Values, Fixed Key Order
//!
//! The output format is a wire contract with the downstream updater: keys
//! appear in a fixed order, values are written without quoting or escaping,
//! and equal inputs always produce byte-identical output. [`render`] is the
//! only place that knows the format, and it is covered by byte-exact tests.
//!
//! ## Fail-Fast, No Partial Documents
//!
//! The first artifact that cannot be read, or the first configuration
//! conflict (no URL source, duplicate section names, a full URL spread over
//! several artifacts), aborts the whole run. A descriptor file listing only
//! some of the requested artifacts would be worse than no file at all, so
//! nothing is written to the final destination on error.
//!
//! ## Structured Specs at the Seam
//!
//! The CLI supports `SECTION:` path prefixes and positional per-artifact
//! option lists, but none of that syntax reaches the pipeline: everything is
//! adapted onto [`descriptor::ArtifactSpec`] before assembly. New calling
//! conventions only ever touch `main.rs`.

pub mod assemble;
pub mod descriptor;
pub mod digest;
pub mod naming;
pub mod render;

#[cfg(test)]
pub(crate) mod test_helpers;
