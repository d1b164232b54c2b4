//! Public classification entry points.
//!
//! Signature matching runs first; ambiguous families go through the subtype
//! resolver; a miss falls back to the extension table when a filename is
//! available. All paths end in a concrete type or `None`, never an error —
//! the only fallible operation is the file read in [`filetype`].

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::extensions;
use crate::resolver;
use crate::signature::{self, Outcome};

/// Identifies a byte buffer with no filename available.
///
/// Ambiguous container families degrade to their default subtype (generic
/// ZIP, standard PNG, word-processing OOXML); a CFBF file without a readable
/// sub-header yields `None`.
pub fn identify_bytes(data: &[u8]) -> Option<&'static str> {
    identify_bytes_with_name(data, "")
}

/// Identifies a byte buffer, using `filename` to break ties the bytes alone
/// cannot. Falls back to extension lookup when no signature matches.
pub fn identify_bytes_with_name(data: &[u8], filename: &str) -> Option<&'static str> {
    let extension = extensions::extension_of(filename);
    match signature::match_signature(data) {
        Some(Outcome::Mime(mimetype)) => {
            log::debug!("signature match: {}", mimetype);
            Some(mimetype)
        }
        Some(Outcome::Resolve(tag)) => {
            log::debug!(
                "ambiguous signature {:?}, resolving with extension {:?}",
                tag,
                extension
            );
            resolver::resolve(tag, data, &extension)
        }
        None => extensions::lookup(&extension),
    }
}

/// Identifies by filename or bare extension alone, no bytes consulted.
pub fn identify_filename(name: &str) -> Option<&'static str> {
    extensions::lookup(&extensions::extension_of(name))
}

/// Reads `path` in full and identifies it, using the path's own filename for
/// tie-breaking. Read failures surface unmodified; they are never collapsed
/// into the `None` outcome.
pub fn filetype(path: impl AsRef<Path>) -> Result<Option<&'static str>> {
    let path = path.as_ref();
    let data = fs::read(path)?;
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    Ok(identify_bytes_with_name(&data, name))
}
