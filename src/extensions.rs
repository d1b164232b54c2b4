//! Static extension-to-MIME table, the fallback classifier.
//!
//! Consulted whenever signature evidence is absent or inconclusive. Keys are
//! lowercased and carry the leading dot; lookup is a pure total function
//! over a compile-time map.

use phf::phf_map;

static EXTENSIONS: phf::Map<&'static str, &'static str> = phf_map! {
    ".7z" => "application/x-7z-compressed",
    ".apng" => "image/apng",
    ".avi" => "video/x-msvideo",
    ".bin" => "application/octet-stream",
    ".bmp" => "image/bmp",
    ".css" => "text/css",
    ".csv" => "text/csv",
    ".doc" => "application/msword",
    ".docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ".eml" => "message/rfc822",
    ".gif" => "image/gif",
    ".htm" => "text/html",
    ".html" => "text/html",
    ".jar" => "application/java-archive",
    ".jpeg" => "image/jpeg",
    ".jpg" => "image/jpeg",
    ".js" => "text/javascript",
    ".json" => "application/json",
    ".md" => "text/markdown",
    ".mkv" => "video/webm",
    ".mp3" => "audio/mpeg",
    ".mp4" => "video/mp4",
    ".msg" => "application/vnd.ms-outlook",
    ".odp" => "application/vnd.oasis.opendocument.presentation",
    ".ods" => "application/vnd.oasis.opendocument.spreadsheet",
    ".odt" => "application/vnd.oasis.opendocument.text",
    ".oxps" => "application/oxps",
    ".pdf" => "application/pdf",
    ".png" => "image/png",
    ".ppt" => "application/vnd.ms-powerpoint",
    ".pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    ".rar" => "application/vnd.rar",
    ".svg" => "image/svg+xml",
    ".txt" => "text/plain",
    ".wav" => "audio/wav",
    ".webm" => "video/webm",
    ".webp" => "image/webp",
    ".xls" => "application/vnd.ms-excel",
    ".xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    ".xml" => "application/xml",
    ".zip" => "application/zip",
};

/// Looks up a lowercased, dotted extension. Empty or unknown extensions are
/// simply not found; that is the caller's "unidentified" outcome.
pub(crate) fn lookup(extension: &str) -> Option<&'static str> {
    EXTENSIONS.get(extension).copied()
}

/// Extracts the lowercased, dotted extension from a path, a bare filename or
/// an extension itself ("report.XLSX", "/tmp/a.pdf" and ".pdf" all work).
/// Returns an empty string when there is none.
pub(crate) fn extension_of(name: &str) -> String {
    let basename = name.rsplit(['/', '\\']).next().unwrap_or(name);
    match basename.rfind('.') {
        Some(idx) => basename[idx..].to_ascii_lowercase(),
        None => String::new(),
    }
}
