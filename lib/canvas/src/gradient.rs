use crate::{CanvasResult, Rgb, check_size};
use derivative::Derivative;
use derive_setters::Setters;
use image::RgbaImage;

/// Vertical two-stop gradient, filled one scanline at a time.
#[derive(Debug, Clone, Copy, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct Gradient {
    /// Color of row 0
    #[derivative(Default(value = "Rgb(135, 206, 235)"))]
    pub top: Rgb,

    /// Color of the last row
    #[derivative(Default(value = "Rgb(173, 216, 230)"))]
    pub bottom: Rgb,
}

impl Gradient {
    pub fn new(top: Rgb, bottom: Rgb) -> Self {
        Self { top, bottom }
    }

    /// Color of row `y` out of `height` rows. Integer interpolation, truncating toward zero.
    pub fn row_color(&self, y: u32, height: u32) -> Rgb {
        let span = height.saturating_sub(1) as i32;
        if span == 0 {
            return self.top;
        }

        let y = y.min(height - 1) as i32;
        let lerp = |a: u8, b: u8| (a as i32 + (b as i32 - a as i32) * y / span) as u8;

        Rgb(
            lerp(self.top.0, self.bottom.0),
            lerp(self.top.1, self.bottom.1),
            lerp(self.top.2, self.bottom.2),
        )
    }

    pub fn render(&self, width: u32, height: u32) -> CanvasResult<RgbaImage> {
        check_size(width, height)?;

        let mut img = RgbaImage::new(width, height);
        for (y, row) in img.rows_mut().enumerate() {
            let color = self.row_color(y as u32, height).to_rgba(255);
            for pixel in row {
                *pixel = color;
            }
        }

        log::debug!("gradient rendered: {width}x{height}");
        Ok(img)
    }
}
