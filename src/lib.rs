//! Magic-number based MIME type identification.
//!
//! Classifies a byte buffer (or a file on disk) by scanning its leading
//! bytes against an ordered table of magic-number signatures. Container
//! families that share an outer signature (ZIP-based archives, OOXML
//! documents, legacy CFBF compound files, PNG/APNG) go through a second
//! resolution stage that peeks further into the buffer or consults the
//! filename extension, falling back to a static extension table whenever the
//! byte evidence is inconclusive.
//!
//! ```
//! assert_eq!(typesniff::identify_bytes(b"%PDF-1.7"), Some("application/pdf"));
//! assert_eq!(
//!     typesniff::identify_bytes_with_name(b"\x89PNG\r\n\x1a\n", "frame.apng"),
//!     Some("image/apng"),
//! );
//! ```

mod detect;
mod error;
mod extensions;
mod resolver;
mod signature;

pub use detect::{filetype, identify_bytes, identify_bytes_with_name, identify_filename};
pub use error::{DetectError, Result};
pub use resolver::ResolutionTag;
pub use signature::{Outcome, match_signature};
