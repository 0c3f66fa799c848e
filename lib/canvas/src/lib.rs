pub mod gradient;
pub mod resize;
pub mod shape;
pub mod text;

pub use ab_glyph::FontVec;
pub use gradient::Gradient;
pub use image::{Rgba, RgbaImage};
pub use resize::{resize, upscale_2x};
pub use shape::{Airplane, Ellipse, Polygon};
pub use text::{FontSource, TextOverlay};

pub type CanvasResult<T> = Result<T, CanvasError>;

#[derive(thiserror::Error, Debug)]
pub enum CanvasError {
    #[error("Invalid canvas size: {0}x{1}")]
    InvalidSize(u32, u32),

    #[error("Failed to load font {path}: {reason}")]
    Font { path: String, reason: String },

    #[error("Image processing error: {0}")]
    ImageError(String),

    #[error("Fast image buffer error: {0}")]
    FastImageBufferError(#[from] fast_image_resize::ImageBufferError),

    #[error("Fast image resize error: {0}")]
    FastImageResizeError(#[from] fast_image_resize::ResizeError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// RGB triple used for gradient stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn to_rgba(self, alpha: u8) -> Rgba<u8> {
        Rgba([self.0, self.1, self.2, alpha])
    }
}

/// Fully transparent canvas of the given size.
pub fn transparent(width: u32, height: u32) -> CanvasResult<RgbaImage> {
    check_size(width, height)?;
    Ok(RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0])))
}

pub(crate) fn check_size(width: u32, height: u32) -> CanvasResult<()> {
    if width == 0 || height == 0 {
        return Err(CanvasError::InvalidSize(width, height));
    }

    Ok(())
}
