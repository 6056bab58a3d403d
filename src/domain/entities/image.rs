use actix_web::web::Bytes;

use crate::errors::AppError;

/// Resource type passed to the upload collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Image,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Image => "image",
        }
    }
}

/// An uploaded file held entirely in memory.
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub data: Bytes,
    pub file_name: Option<String>,
}

impl ImageFile {
    pub fn new(data: Bytes, file_name: Option<String>) -> Self {
        ImageFile { data, file_name }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Sniffs the magic bytes and returns the detected MIME type.
    pub fn ensure_image(&self) -> Result<&'static str, AppError> {
        match infer::get(&self.data) {
            Some(kind) if kind.matcher_type() == infer::MatcherType::Image => Ok(kind.mime_type()),
            Some(kind) => Err(AppError::validation(
                "image",
                &format!("Unsupported file type {}, an image is required", kind.mime_type()),
            )),
            None => Err(AppError::validation("image", "File is not a recognised image")),
        }
    }
}

/// What the upload collaborator hands back.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedImage {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0x0D];

    #[test]
    fn detects_png() {
        let file = ImageFile::new(Bytes::from_static(PNG_HEADER), Some("shot.png".into()));
        assert_eq!(file.ensure_image().unwrap(), "image/png");
    }

    #[test]
    fn rejects_non_images() {
        let file = ImageFile::new(Bytes::from_static(b"%PDF-1.7 not an image"), None);
        assert!(matches!(file.ensure_image(), Err(AppError::ValidationError(_))));

        let text = ImageFile::new(Bytes::from_static(b"hello"), None);
        assert!(text.ensure_image().is_err());
    }
}
