//! # File Export
//!
//! Writes generation results to disk:
//!
//! | Artifact | Name | Content |
//! |----------|------|---------|
//! | Header | `<identifier>.h` | exactly [`Generated::code`] |
//! | Binary | caller-chosen | [`Packed::to_bytes`] |
//!
//! Batch export runs independent requests on the rayon thread pool. Each
//! request packs and renders its own buffer, so no state is shared.

use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

use crate::codegen::{self, GenerateRequest, Generated, sanitize_identifier};
use crate::error::Result;
use crate::pack::{Endian, Packed};

/// `.h` file name for an asset name.
///
/// ```
/// use spritepack::export::header_filename;
///
/// assert_eq!(header_filename("sprite name"), "sprite_name.h");
/// ```
pub fn header_filename(name: &str) -> String {
    format!("{}.h", sanitize_identifier(name))
}

/// Write `generated.code` to `dir/<identifier>.h`, returning the path.
pub fn write_header(dir: &Path, generated: &Generated) -> Result<PathBuf> {
    let path = dir.join(&generated.filename);
    fs::write(&path, &generated.code)?;
    tracing::info!(path = %path.display(), bytes = generated.code.len(), "wrote header");
    Ok(path)
}

/// Write the raw packed sequence to `path`.
pub fn write_binary(path: &Path, packed: &Packed, endian: Endian) -> Result<()> {
    let bytes = packed.to_bytes(endian);
    fs::write(path, &bytes)?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), %endian, "wrote binary");
    Ok(())
}

/// Generate every request in parallel. Results keep the input order.
pub fn generate_batch(requests: &[GenerateRequest<'_>]) -> Vec<Result<Generated>> {
    requests.par_iter().map(codegen::generate).collect()
}
