use crate::error::{Result, SheetError};
use image::DynamicImage;
use std::path::{Path, PathBuf};
use tracing::debug;

/// An input image for sheet processing, sourced either from a file on disk or
/// from an already-decoded in-memory image. The two sources are mutually
/// exclusive; the variants make the both/neither states unrepresentable.
///
/// A path-backed image is decoded eagerly at construction. A file that exists
/// but cannot be decoded yields an empty pixel result rather than an error,
/// matching the lenient loading contract of the scanning pipeline this feeds.
#[derive(Debug, Clone)]
pub enum InputImage {
    /// Image referenced by a file path, with its eagerly-decoded pixels.
    Path {
        /// Location the image was loaded from
        path: PathBuf,
        /// Decoded pixels, or `None` if the file could not be decoded
        image: Option<DynamicImage>,
    },
    /// Image already decoded in memory.
    Memory(DynamicImage),
}

impl InputImage {
    /// Builds an input image from optional sources, enforcing that exactly
    /// one of `path` and `image` is provided.
    pub fn new(path: Option<PathBuf>, image: Option<DynamicImage>) -> Result<Self> {
        match (path, image) {
            (None, None) => Err(SheetError::InvalidImageSource(
                "either a path or an image must be provided".to_string(),
            )),
            (Some(_), Some(_)) => Err(SheetError::InvalidImageSource(
                "only one of path or image should be provided".to_string(),
            )),
            (Some(path), None) => Ok(Self::from_path(path)),
            (None, Some(image)) => Ok(Self::from_memory(image)),
        }
    }

    /// Builds a path-backed input image, decoding the file immediately.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let image = match image::open(&path) {
            Ok(img) => Some(img),
            Err(e) => {
                debug!("failed to decode image {}: {}", path.display(), e);
                None
            }
        };
        InputImage::Path { path, image }
    }

    /// Wraps an already-decoded image.
    pub fn from_memory(image: DynamicImage) -> Self {
        InputImage::Memory(image)
    }

    /// The decoded pixels, if any.
    pub fn image(&self) -> Option<&DynamicImage> {
        match self {
            InputImage::Path { image, .. } => image.as_ref(),
            InputImage::Memory(image) => Some(image),
        }
    }

    /// The source path, for path-backed images.
    pub fn path(&self) -> Option<&Path> {
        match self {
            InputImage::Path { path, .. } => Some(path),
            InputImage::Memory(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, RgbImage};
    use std::fs;

    fn sample_image() -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::new(4, 4))
    }

    #[test]
    fn test_neither_source_is_rejected() {
        let result = InputImage::new(None, None);
        assert!(matches!(result, Err(SheetError::InvalidImageSource(_))));
    }

    #[test]
    fn test_both_sources_are_rejected() {
        let result = InputImage::new(Some(PathBuf::from("a.png")), Some(sample_image()));
        assert!(matches!(result, Err(SheetError::InvalidImageSource(_))));
    }

    #[test]
    fn test_memory_source_succeeds() {
        let input = InputImage::new(None, Some(sample_image())).unwrap();
        assert!(input.image().is_some());
        assert!(input.path().is_none());
    }

    #[test]
    fn test_path_source_decodes_eagerly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixel.png");
        sample_image().save(&path).unwrap();

        let input = InputImage::new(Some(path.clone()), None).unwrap();
        assert!(input.image().is_some());
        assert_eq!(input.path(), Some(path.as_path()));
    }

    #[test]
    fn test_undecodable_path_yields_empty_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not_an_image.png");
        fs::write(&path, b"this is not image data").unwrap();

        let input = InputImage::from_path(&path);
        assert!(input.image().is_none());
        assert_eq!(input.path(), Some(path.as_path()));
    }
}
