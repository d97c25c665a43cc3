//! Artifact content digests.
//!
//! The updater identifies an installer by its exact byte content: size,
//! SHA-256, and MD5 (the legacy digest some consumers still verify).
//! The file is streamed once in fixed-size chunks feeding both hashers —
//! installers run to hundreds of MB, so the artifact is never buffered
//! whole. `size` is the byte count actually hashed; there is no
//! metadata/content race with a file being replaced mid-run.

use sha2::{Digest, Sha256};
use std::io::{self, Read};
use std::path::Path;

/// Read chunk size. Matches the usual digest-streaming buffer; the exact
/// value only affects syscall count, not output.
const CHUNK_SIZE: usize = 8192;

/// Content identity of one artifact file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDigests {
    /// Exact byte length, no rounding or unit conversion.
    pub size: u64,
    /// Lowercase hex, 64 chars.
    pub sha256: String,
    /// Lowercase hex, 32 chars.
    pub md5: String,
}

/// Stream a file once and return its size and content digests.
///
/// Any open or read failure is returned unchanged; callers treat it as
/// fatal for the whole run.
pub fn digest_file(path: &Path) -> io::Result<FileDigests> {
    let mut file = std::fs::File::open(path)?;
    let mut sha256 = Sha256::new();
    let mut md5_ctx = md5::Context::new();
    let mut size = 0u64;
    let mut chunk = [0u8; CHUNK_SIZE];

    loop {
        let n = file.read(&mut chunk)?;
        if n == 0 {
            break;
        }
        sha256.update(&chunk[..n]);
        md5_ctx.consume(&chunk[..n]);
        size += n as u64;
    }

    Ok(FileDigests {
        size,
        sha256: format!("{:x}", sha256.finalize()),
        md5: format!("{:x}", md5_ctx.compute()),
    })
}
