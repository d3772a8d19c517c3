//! Upload rules for the three file-backed columns.
//!
//! Files live under the configured media root, one subdirectory per column.
//! The database stores the path relative to the media root.

use crate::error::CoreError;

/// Default upper bound on a single uploaded file (10 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Name of the multipart field carrying the file.
pub const UPLOAD_FIELD: &str = "file";

/// Which column an upload is destined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    /// `authors.photo_file`
    AuthorPhoto,
    /// `heroes.photo_file`
    HeroPhoto,
    /// `compositions.file_source`
    CompositionSource,
}

impl UploadKind {
    /// Subdirectory of the media root.
    pub fn directory(self) -> &'static str {
        match self {
            UploadKind::AuthorPhoto => "authors",
            UploadKind::HeroPhoto => "heroes",
            UploadKind::CompositionSource => "compositions",
        }
    }

    /// Photo columns only accept decodable images.
    pub fn requires_image(self) -> bool {
        matches!(self, UploadKind::AuthorPhoto | UploadKind::HeroPhoto)
    }
}

/// Reduce a client-supplied file name to a safe basename.
///
/// Path components are dropped, characters outside `[A-Za-z0-9._-]` become
/// `_`, and leading dots are stripped so the result is never hidden or a
/// parent reference. An empty result falls back to `upload`.
pub fn sanitize_file_name(name: &str) -> String {
    let basename = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let cleaned: String = basename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let trimmed = cleaned.trim_start_matches('.');
    if trimmed.is_empty() {
        "upload".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Relative storage path for an upload: `<dir>/<millis>_<sanitized name>`.
pub fn stored_path(kind: UploadKind, original_name: &str, stamp_millis: i64) -> String {
    format!(
        "{}/{}_{}",
        kind.directory(),
        stamp_millis,
        sanitize_file_name(original_name)
    )
}

/// Reject empty, oversized, or (for photo columns) non-image content.
pub fn check_content(kind: UploadKind, bytes: &[u8], max_bytes: usize) -> Result<(), CoreError> {
    if bytes.is_empty() {
        return Err(CoreError::Validation("Uploaded file is empty".into()));
    }
    if bytes.len() > max_bytes {
        return Err(CoreError::Validation(format!(
            "Uploaded file exceeds the {max_bytes} byte limit"
        )));
    }
    if kind.requires_image() && image::guess_format(bytes).is_err() {
        return Err(CoreError::Validation(
            "Uploaded file is not a recognised image".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

    #[test]
    fn sanitize_strips_directories_and_odd_characters() {
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("C:\\photos\\my face.jpg"), "my_face.jpg");
        assert_eq!(sanitize_file_name(".hidden"), "hidden");
        assert_eq!(sanitize_file_name("кот.png"), "___.png");
        assert_eq!(sanitize_file_name(""), "upload");
        assert_eq!(sanitize_file_name("..."), "upload");
    }

    #[test]
    fn stored_path_uses_kind_directory() {
        assert_eq!(
            stored_path(UploadKind::HeroPhoto, "aragorn.png", 1700),
            "heroes/1700_aragorn.png"
        );
        assert_eq!(
            stored_path(UploadKind::CompositionSource, "book.epub", 5),
            "compositions/5_book.epub"
        );
    }

    #[test]
    fn photo_upload_requires_image_bytes() {
        assert_matches!(
            check_content(UploadKind::AuthorPhoto, b"plain text", 1024),
            Err(CoreError::Validation(_))
        );
        assert!(check_content(UploadKind::AuthorPhoto, PNG_HEADER, 1024).is_ok());
    }

    #[test]
    fn composition_source_accepts_any_bytes() {
        assert!(check_content(UploadKind::CompositionSource, b"%PDF-1.7", 1024).is_ok());
    }

    #[test]
    fn empty_and_oversized_uploads_are_rejected() {
        assert_matches!(
            check_content(UploadKind::CompositionSource, b"", 1024),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            check_content(UploadKind::CompositionSource, &[0u8; 16], 8),
            Err(CoreError::Validation(_))
        );
    }
}
