//! Descriptor assembly — one [`UpdateDescriptor`] per input artifact.
//!
//! Applies the resolution rules for each artifact, hashes its content, and
//! accumulates the results into an [`OutputDocument`] in input order.
//!
//! ## Resolution rules
//!
//! - Display name: explicit override, else derived from the base name
//!   ([`naming::englishify`]).
//! - Section name: explicit override, else derived from the base name
//!   ([`naming::section_name`]).
//! - URL: the full URL verbatim if given, else base URL + `/` + file name.
//!   One of the two must be supplied.
//! - `ProductVersion`: run-level override, else the version number.
//!
//! Assembly fails fast: the first artifact that errors aborts the run, and
//! no document is produced.

use crate::descriptor::{ArtifactSpec, InputError, OutputDocument, RunConfig, UpdateDescriptor};
use crate::{digest, naming};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssembleError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Either a URL or URL_FOLDER must be supplied")]
    MissingUrlSource,
    #[error("A full URL applies the same address to every artifact; use a URL folder for multi-artifact runs")]
    FullUrlWithMultipleArtifacts,
    #[error(transparent)]
    Input(#[from] InputError),
}

/// Build the output document for a run.
///
/// Artifacts are processed strictly in input order, which becomes section
/// order in the rendered file.
pub fn assemble(
    run: &RunConfig,
    specs: &[ArtifactSpec],
) -> Result<OutputDocument, AssembleError> {
    if run.full_url.is_none() && run.base_url.is_none() {
        return Err(AssembleError::MissingUrlSource);
    }
    if run.full_url.is_some() && specs.len() > 1 {
        return Err(AssembleError::FullUrlWithMultipleArtifacts);
    }

    let mut doc = OutputDocument::new(run.emit_marker);
    for spec in specs {
        doc.push(build_descriptor(run, spec)?)?;
    }
    Ok(doc)
}

fn build_descriptor(
    run: &RunConfig,
    spec: &ArtifactSpec,
) -> Result<UpdateDescriptor, AssembleError> {
    let base = naming::base_name(&spec.path);
    let server_file_name = naming::file_name(&spec.path);

    let url = match (&run.full_url, &run.base_url) {
        (Some(full), _) => full.clone(),
        (None, Some(folder)) => format!("{folder}/{server_file_name}"),
        (None, None) => return Err(AssembleError::MissingUrlSource),
    };

    let digests = digest::digest_file(&spec.path).map_err(|source| AssembleError::Io {
        path: spec.path.clone(),
        source,
    })?;

    Ok(UpdateDescriptor {
        section_name: spec
            .section
            .clone()
            .unwrap_or_else(|| naming::section_name(&base)),
        display_name: spec
            .name
            .clone()
            .unwrap_or_else(|| naming::englishify(&base)),
        product_version: run
            .product_version
            .clone()
            .unwrap_or_else(|| run.version.clone()),
        url,
        size_bytes: digests.size,
        sha256: digests.sha256,
        md5: digests.md5,
        server_file_name,
        flags: spec.flags.clone(),
        registry_key: spec.registry_key.clone(),
        version: run.version.clone(),
    })
}
