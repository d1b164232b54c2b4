//! Subtype resolution for container formats that share an outer signature.
//!
//! A ZIP local-file header may open a plain archive, an OOXML document or an
//! OpenDocument container; the CFBF magic covers four legacy Office formats;
//! PNG and APNG are byte-identical up front. Resolution peeks further into
//! the buffer (CFBF) or consults the filename extension, and falls back to
//! the extension table whenever the byte evidence is inconclusive.

use crate::extensions;
use crate::signature::{Segment, segments_match};

/// Intermediate outcome of the signature scan: the format family is known,
/// the exact type is not. Handled exhaustively by the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionTag {
    /// ZIP container; could be a plain archive, JAR or OpenDocument file.
    MaybeZip,
    /// PNG signature; APNG shares it and differs only by extension.
    MaybePng,
    /// OOXML document; .docx/.xlsx/.pptx split by extension.
    Ooxml,
    /// CFBF compound file; subtype read from the sector past the header.
    Docfile,
}

const MSWORD: &str = "application/msword";
const MSEXCEL: &str = "application/vnd.ms-excel";
const MSPOWERPOINT: &str = "application/vnd.ms-powerpoint";
const MSOUTLOOK: &str = "application/vnd.ms-outlook";

/// The CFBF directory sector starts at byte 512; reading the window two
/// bytes early puts the leading NUL of its first UTF-16LE entry name in
/// view, which is what the mail patterns below key on.
const DOCFILE_WINDOW_OFFSET: usize = 510;
const DOCFILE_WINDOW_LEN: usize = 24;

struct SubtypeRule {
    pattern: &'static [Segment],
    mimetype: &'static str,
}

use Segment::{Bytes, Skip};

/// Sub-header patterns for the CFBF window, in priority order. Grouped by
/// document type; the first hit in any group wins.
static DOCFILE_RULES: &[SubtypeRule] = &[
    // PowerPoint presentation.
    SubtypeRule {
        pattern: &[Bytes(&[0xA0, 0x46, 0x1D, 0xF0])],
        mimetype: MSPOWERPOINT,
    },
    SubtypeRule {
        pattern: &[Bytes(&[0x00, 0x6E, 0x1E, 0xF0])],
        mimetype: MSPOWERPOINT,
    },
    SubtypeRule {
        pattern: &[Bytes(&[0xFD, 0xFF, 0xFF, 0xFF]), Skip(2), Bytes(&[0x00, 0x00])],
        mimetype: MSPOWERPOINT,
    },
    // Word document.
    SubtypeRule {
        pattern: &[Bytes(&[0xEC, 0xA5, 0xC1, 0x00])],
        mimetype: MSWORD,
    },
    // Excel workbook: the BIFF8 stream header, two discriminated forms of
    // the substream marker, and the BIFF4 stream header.
    SubtypeRule {
        pattern: &[Bytes(&[0x09, 0x08, 0x10, 0x00, 0x00, 0x06, 0x05, 0x00])],
        mimetype: MSEXCEL,
    },
    SubtypeRule {
        pattern: &[Bytes(&[0xFD, 0xFF, 0xFF, 0xFF]), Skip(1), Bytes(&[0x00])],
        mimetype: MSEXCEL,
    },
    SubtypeRule {
        pattern: &[Bytes(&[0xFD, 0xFF, 0xFF, 0xFF]), Skip(1), Bytes(&[0x02])],
        mimetype: MSEXCEL,
    },
    SubtypeRule {
        pattern: &[Bytes(&[0x09, 0x04, 0x06, 0x00, 0x00, 0x00, 0x10, 0x00])],
        mimetype: MSEXCEL,
    },
    // Outlook message: "Root Entry" as seen two bytes before the directory
    // sector, plus the directly-aligned prefix of the same entry name.
    SubtypeRule {
        pattern: &[Bytes(&[
            0x00, 0x52, 0x00, 0x6F, 0x00, 0x6F, 0x00, 0x74, 0x00, 0x20, 0x00, 0x45, 0x00, 0x6E,
            0x00, 0x74, 0x00, 0x72, 0x00, 0x79,
        ])],
        mimetype: MSOUTLOOK,
    },
    SubtypeRule {
        pattern: &[Bytes(&[0x52, 0x00, 0x6F, 0x00])],
        mimetype: MSOUTLOOK,
    },
    SubtypeRule {
        pattern: &[Bytes(&[0x0D, 0x44, 0x4F, 0x43])],
        mimetype: MSOUTLOOK,
    },
];

/// Narrows a resolution tag to a concrete type. Never fails: every branch
/// ends in a concrete type or in the extension table's own not-found result.
/// `extension` is lowercased, dotted, possibly empty.
pub(crate) fn resolve(
    tag: ResolutionTag,
    data: &[u8],
    extension: &str,
) -> Option<&'static str> {
    match tag {
        ResolutionTag::MaybeZip => Some(resolve_zip(extension)),
        ResolutionTag::MaybePng => Some(resolve_png(extension)),
        ResolutionTag::Ooxml => Some(resolve_ooxml(extension)),
        ResolutionTag::Docfile => resolve_docfile(data, extension),
    }
}

fn resolve_zip(extension: &str) -> &'static str {
    match extension {
        ".jar" => "application/java-archive",
        ".odt" => "application/vnd.oasis.opendocument.text",
        ".odp" => "application/vnd.oasis.opendocument.presentation",
        ".oxps" => "application/oxps",
        _ => "application/zip",
    }
}

fn resolve_png(extension: &str) -> &'static str {
    if extension == ".apng" {
        "image/apng"
    } else {
        "image/png"
    }
}

fn resolve_ooxml(extension: &str) -> &'static str {
    match extension {
        ".xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        ".pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        // Word processing is the default, .docx included.
        _ => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    }
}

/// Tests the sub-header window at offset 510 against the rule table. A
/// buffer too short to supply the window carries no byte-level signal and
/// falls through to extension lookup, same as an unmatched window.
fn resolve_docfile(data: &[u8], extension: &str) -> Option<&'static str> {
    if let Some(tail) = data.get(DOCFILE_WINDOW_OFFSET..) {
        let window = &tail[..tail.len().min(DOCFILE_WINDOW_LEN)];
        for rule in DOCFILE_RULES {
            if segments_match(rule.pattern, window) {
                log::debug!("CFBF sub-header matched as {}", rule.mimetype);
                return Some(rule.mimetype);
            }
        }
    }
    extensions::lookup(extension)
}
