//! Cabin images

use std::path::Path;

/// Photo attached to a cabin draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CabinImage {
    /// Reference to an already stored photo, kept as-is.
    Existing(String),

    /// Freshly selected file that still has to be uploaded.
    Upload(ImageUpload),
}

/// Raw file payload selected for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// Original file name.
    pub file_name: String,

    /// MIME type sent with the upload.
    pub content_type: String,

    /// File contents.
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Build an upload, deriving the content type from the file extension.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = content_type_for(&file_name).to_string();

        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    /// Object name safe to use as a storage path segment.
    ///
    /// `/` is stripped so the name never introduces a sub-folder.
    pub fn object_name(&self, prefix: &str) -> String {
        format!("{prefix}-{}", self.file_name).replace('/', "")
    }
}

fn content_type_for(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("avif") => "image/avif",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
