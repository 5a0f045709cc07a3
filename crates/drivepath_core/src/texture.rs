//! CPU-side texture data
//!
//! Images are decoded with the `image` crate into tightly packed RGBA8 rows,
//! ready for upload by the renderer.

use std::path::Path;

use drivepath_math::Vec2;

use crate::asset_error::AssetError;

/// Decoded RGBA8 image
#[derive(Clone, PartialEq)]
pub struct TextureData {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl TextureData {
    /// Read and decode an image file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let image = image::load_from_memory(&bytes).map_err(|e| AssetError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        if width == 0 || height == 0 {
            return Err(AssetError::Empty(path.to_path_buf()));
        }

        log::info!("Loaded texture '{}' ({}x{})", path.display(), width, height);

        Ok(Self {
            width,
            height,
            rgba: rgba.into_raw(),
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Size in texels as a vector
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Raw RGBA8 bytes, row-major, no padding
    #[inline]
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }
}

impl std::fmt::Debug for TextureData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextureData")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgba.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("car.png");
        image::RgbaImage::from_pixel(4, 2, image::Rgba([255, 0, 0, 255]))
            .save(&path)
            .unwrap();

        let texture = TextureData::load(&path).unwrap();

        assert_eq!(texture.width(), 4);
        assert_eq!(texture.height(), 2);
        assert_eq!(texture.size(), Vec2::new(4.0, 2.0));
        assert_eq!(texture.rgba().len(), 4 * 2 * 4);
        assert_eq!(&texture.rgba()[..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_missing_file_is_io_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = TextureData::load(dir.path().join("missing.png")).unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("missing.png"));
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("car.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        match TextureData::load(&path) {
            Err(AssetError::Decode { path: p, .. }) => assert_eq!(p, path),
            other => panic!("Expected Decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_debug_omits_pixels() {
        let texture = TextureData {
            width: 1,
            height: 1,
            rgba: vec![1, 2, 3, 4],
        };
        let debug = format!("{:?}", texture);
        assert!(debug.contains("width: 1"));
        assert!(debug.contains("bytes: 4"));
    }
}
