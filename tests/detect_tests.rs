use typesniff::{filetype, identify_bytes, identify_bytes_with_name, identify_filename};

const OOXML_HEADER: &[u8] = &[0x50, 0x4B, 0x03, 0x04, 0x14, 0x00, 0x06, 0x00];
const CFBF_MAGIC: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

#[test]
fn test_ooxml_extension_splits_subtype() {
    assert_eq!(
        identify_bytes_with_name(OOXML_HEADER, "report.xlsx"),
        Some("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
    );
    assert_eq!(
        identify_bytes_with_name(OOXML_HEADER, "deck.pptx"),
        Some("application/vnd.openxmlformats-officedocument.presentationml.presentation"),
    );
    // No filename: the word-processing type is the default branch.
    assert_eq!(
        identify_bytes(OOXML_HEADER),
        Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
    );
}

#[test]
fn test_ooxml_never_misclassifies_as_generic_zip() {
    // The buffer satisfies both the 8-byte OOXML pattern and the 4-byte ZIP
    // pattern; the more specific entry must win.
    assert_ne!(identify_bytes(OOXML_HEADER), Some("application/zip"));
}

#[test]
fn test_zip_family_by_extension() {
    let zip = b"PK\x03\x04\x0A\x00\x00\x00";
    assert_eq!(
        identify_bytes_with_name(zip, "app.jar"),
        Some("application/java-archive"),
    );
    assert_eq!(
        identify_bytes_with_name(zip, "letter.odt"),
        Some("application/vnd.oasis.opendocument.text"),
    );
    assert_eq!(identify_bytes(zip), Some("application/zip"));
    assert_eq!(
        identify_bytes_with_name(zip, "whatever.unknown"),
        Some("application/zip"),
    );
}

#[test]
fn test_png_vs_apng_by_extension() {
    let png = b"\x89PNG\r\n\x1a\n";
    assert_eq!(identify_bytes_with_name(png, "pic.png"), Some("image/png"));
    assert_eq!(
        identify_bytes_with_name(png, "pic.apng"),
        Some("image/apng"),
    );
    assert_eq!(identify_bytes(png), Some("image/png"));
}

#[test]
fn test_cfbf_word_subheader_literal() {
    // CFBF magic, filler up to offset 510, then the Word sub-header.
    let mut data = CFBF_MAGIC.to_vec();
    data.resize(510, 0);
    data.extend_from_slice(&[0xEC, 0xA5, 0xC1, 0x00]);
    assert_eq!(identify_bytes(&data), Some("application/msword"));
}

#[test]
fn test_cfbf_excel_biff_stream_headers() {
    // BIFF4 and BIFF8 stream headers both identify a legacy workbook.
    for window in [
        &[0x09, 0x04, 0x06, 0x00, 0x00, 0x00, 0x10, 0x00],
        &[0x09, 0x08, 0x10, 0x00, 0x00, 0x06, 0x05, 0x00],
    ] {
        let mut data = CFBF_MAGIC.to_vec();
        data.resize(510, 0);
        data.extend_from_slice(window);
        assert_eq!(
            identify_bytes(&data),
            Some("application/vnd.ms-excel"),
            "{window:02X?}"
        );
    }
    // A substream marker whose trailing bytes are 00 00 belongs to the
    // presentation group, which is tested first.
    let mut data = CFBF_MAGIC.to_vec();
    data.resize(510, 0);
    data.extend_from_slice(&[0xFD, 0xFF, 0xFF, 0xFF, 0x20, 0x00, 0x00, 0x00]);
    assert_eq!(identify_bytes(&data), Some("application/vnd.ms-powerpoint"));
}

#[test]
fn test_cfbf_mail_subheader_beats_filename() {
    let mut data = CFBF_MAGIC.to_vec();
    data.resize(510, 0);
    data.extend_from_slice(&[
        0x00, 0x52, 0x00, 0x6F, 0x00, 0x6F, 0x00, 0x74, 0x00, 0x20, 0x00, 0x45, 0x00, 0x6E, 0x00,
        0x74, 0x00, 0x72, 0x00, 0x79,
    ]);
    assert_eq!(
        identify_bytes_with_name(&data, "mislabeled.xls"),
        Some("application/vnd.ms-outlook"),
    );
}

#[test]
fn test_cfbf_truncated_uses_extension() {
    // Too short to supply the sub-header window.
    assert_eq!(
        identify_bytes_with_name(CFBF_MAGIC, "old.ppt"),
        Some("application/vnd.ms-powerpoint"),
    );
    assert_eq!(identify_bytes(CFBF_MAGIC), None);
}

#[test]
fn test_unrecognized_bytes_fall_back_to_extension() {
    let noise = [0x01u8; 16];
    assert_eq!(
        identify_bytes_with_name(&noise, "notes.txt"),
        Some("text/plain"),
    );
    assert_eq!(identify_bytes_with_name(&noise, "notes.xyz"), None);
    assert_eq!(identify_bytes(&noise), None);
}

#[test]
fn test_identify_filename_direct_lookup() {
    assert_eq!(identify_filename("slides.pptx"), Some(
        "application/vnd.openxmlformats-officedocument.presentationml.presentation"
    ));
    assert_eq!(identify_filename(".pdf"), Some("application/pdf"));
    assert_eq!(identify_filename("/srv/media/clip.webm"), Some("video/webm"));
    assert_eq!(identify_filename("README"), None);
}

#[test]
fn test_filetype_reads_and_classifies() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.pdf");
    std::fs::write(&path, b"%PDF-1.4 trailing").unwrap();
    assert_eq!(filetype(&path).unwrap(), Some("application/pdf"));

    // Extension from the path participates in resolution.
    let path = dir.path().join("report.xlsx");
    std::fs::write(&path, OOXML_HEADER).unwrap();
    assert_eq!(
        filetype(&path).unwrap(),
        Some("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
    );
}

#[test]
fn test_filetype_missing_file_is_an_error() {
    let err = filetype("/no/such/path/whatsoever.bin");
    assert!(err.is_err());
}

#[test]
fn test_email_and_archive_fixed_strings() {
    assert_eq!(
        identify_bytes(b"From: alice@example.com\r\n"),
        Some("message/rfc822"),
    );
    assert_eq!(identify_bytes(b"Rar!\x1A\x07\x01\x00"), Some("application/vnd.rar"));
    assert_eq!(
        identify_bytes(b"7z\xBC\xAF\x27\x1C\x00\x04"),
        Some("application/x-7z-compressed"),
    );
}

#[test]
fn test_riff_family_discriminated_by_trailing_tag() {
    assert_eq!(
        identify_bytes(b"RIFF\x24\x00\x00\x00WEBPVP8 "),
        Some("image/webp"),
    );
    assert_eq!(
        identify_bytes(b"RIFF\x24\x00\x00\x00AVI LIST"),
        Some("video/x-msvideo"),
    );
    // RIFF with an unknown chunk tag is not claimed by either entry.
    assert_eq!(identify_bytes(b"RIFF\x24\x00\x00\x00WAVEfmt "), None);
}

#[test]
fn test_matroska_and_webm_share_one_type() {
    let ebml = b"\x1A\x45\xDF\xA3\x01\x00\x00\x00";
    assert_eq!(identify_bytes_with_name(ebml, "clip.webm"), Some("video/webm"));
    assert_eq!(identify_bytes_with_name(ebml, "clip.mkv"), Some("video/webm"));
}
