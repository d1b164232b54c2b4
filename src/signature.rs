//! Magic-number signature table and first-match scanning.
//!
//! Signatures are anchored at offset 0 and scanned in declaration order.
//! The table is not prefix-disjoint (the OOXML local-file header is a strict
//! superset of the generic ZIP one), so declaration order is the priority
//! order: more specific entries come first and the scan stops at the first
//! fully-satisfied signature.

use crate::resolver::ResolutionTag;

/// One element of a signature pattern: an exact byte run, or a fixed-length
/// gap whose content is unconstrained (e.g. the RIFF chunk-size field).
#[derive(Debug, Clone, Copy)]
pub(crate) enum Segment {
    Bytes(&'static [u8]),
    Skip(usize),
}

/// What a successful signature match means for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The signature pins down a single concrete type.
    Mime(&'static str),
    /// Format family identified, exact subtype still ambiguous.
    Resolve(ResolutionTag),
}

pub(crate) struct Signature {
    segments: &'static [Segment],
    outcome: Outcome,
}

/// Checks `segments` against `data` starting at offset 0. A `Bytes` run must
/// compare equal at the cumulative offset; a `Skip` only requires that many
/// bytes to exist. A buffer shorter than the pattern fails the pattern.
pub(crate) fn segments_match(segments: &[Segment], data: &[u8]) -> bool {
    let mut offset = 0usize;
    for segment in segments {
        match *segment {
            Segment::Bytes(expected) => {
                let end = offset + expected.len();
                match data.get(offset..end) {
                    Some(actual) if actual == expected => offset = end,
                    _ => return false,
                }
            }
            Segment::Skip(len) => {
                offset += len;
                if data.len() < offset {
                    return false;
                }
            }
        }
    }
    true
}

impl Signature {
    const fn new(segments: &'static [Segment], outcome: Outcome) -> Self {
        Self {
            segments,
            outcome,
        }
    }

    fn matches(&self, data: &[u8]) -> bool {
        segments_match(self.segments, data)
    }
}

use Outcome::{Mime, Resolve};
use Segment::{Bytes, Skip};

/// Ordered signature table. Declaration order is semantically load-bearing:
/// OOXML before generic ZIP, the generic ZIP trio before the other archive
/// formats, and so on. Append-only within a priority band; never reorder.
static SIGNATURES: &[Signature] = &[
    // Unambiguous fixed strings.
    Signature::new(&[Bytes(b"%PDF")], Mime("application/pdf")),
    Signature::new(&[Bytes(b"From: ")], Mime("message/rfc822")),
    // OOXML writes an extended ZIP local-file header; this 8-byte form must
    // be tried before the generic 4-byte ZIP entries below.
    Signature::new(
        &[Bytes(&[0x50, 0x4B, 0x03, 0x04, 0x14, 0x00, 0x06, 0x00])],
        Resolve(ResolutionTag::Ooxml),
    ),
    // CFBF compound file (.doc/.xls/.ppt/.msg); subtype read at offset 510.
    Signature::new(
        &[Bytes(&[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1])],
        Resolve(ResolutionTag::Docfile),
    ),
    // Generic ZIP: local-file, end-of-central-directory, data-descriptor.
    Signature::new(&[Bytes(b"PK\x03\x04")], Resolve(ResolutionTag::MaybeZip)),
    Signature::new(&[Bytes(b"PK\x05\x06")], Resolve(ResolutionTag::MaybeZip)),
    Signature::new(&[Bytes(b"PK\x07\x08")], Resolve(ResolutionTag::MaybeZip)),
    Signature::new(&[Bytes(b"Rar!\x1A\x07")], Mime("application/vnd.rar")),
    Signature::new(
        &[Bytes(&[0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C])],
        Mime("application/x-7z-compressed"),
    ),
    Signature::new(&[Bytes(b"BM")], Mime("image/bmp")),
    Signature::new(&[Bytes(&[0xFF, 0xD8, 0xFF])], Mime("image/jpeg")),
    // PNG and APNG share this signature; only the extension can tell them
    // apart, hence the resolution tag.
    Signature::new(
        &[Bytes(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A])],
        Resolve(ResolutionTag::MaybePng),
    ),
    // RIFF container: the 4-byte chunk size between the tags varies.
    Signature::new(
        &[Bytes(b"RIFF"), Skip(4), Bytes(b"WEBP")],
        Mime("image/webp"),
    ),
    Signature::new(&[Bytes(b"GIF87a")], Mime("image/gif")),
    Signature::new(&[Bytes(b"GIF89a")], Mime("image/gif")),
    // EBML magic; Matroska and WebM both report as video/webm.
    Signature::new(&[Bytes(&[0x1A, 0x45, 0xDF, 0xA3])], Mime("video/webm")),
    // MP4 brand/box layout variants.
    Signature::new(&[Bytes(b"\x00\x00\x00\x14ftypisom")], Mime("video/mp4")),
    Signature::new(&[Bytes(b"\x00\x00\x00\x18ftyp3gp5")], Mime("video/mp4")),
    Signature::new(&[Bytes(b"\x00\x00\x00\x1CftypMSNV")], Mime("video/mp4")),
    Signature::new(
        &[Bytes(b"RIFF"), Skip(4), Bytes(b"AVI ")],
        Mime("video/x-msvideo"),
    ),
];

/// Scans the table in priority order and returns the first match, or `None`
/// when no signature applies. Absence of a match is a normal outcome, not a
/// failure; callers decide whether to fall back to extension lookup.
pub fn match_signature(data: &[u8]) -> Option<Outcome> {
    SIGNATURES
        .iter()
        .find(|signature| signature.matches(data))
        .map(|signature| signature.outcome)
}
