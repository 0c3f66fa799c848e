use crate::{CanvasError, CanvasResult};
use ab_glyph::{FontVec, PxScale};
use derivative::Derivative;
use derive_setters::Setters;
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Well-known font locations, tried in order.
pub const DEFAULT_FONT_CANDIDATES: [&str; 3] = [
    "/System/Library/Fonts/Helvetica.ttc",
    "/System/Library/Fonts/SFCompact.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
];

/// Ordered list of candidate font files. The first one that exists wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSource {
    pub candidates: Vec<PathBuf>,
}

impl Default for FontSource {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_CANDIDATES)
    }
}

impl FontSource {
    pub fn new<P: Into<PathBuf>>(candidates: impl IntoIterator<Item = P>) -> Self {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }

    pub fn first_existing(&self) -> Option<&Path> {
        self.candidates
            .iter()
            .map(PathBuf::as_path)
            .find(|path| path.exists())
    }

    /// Loads the first existing candidate.
    ///
    /// Returns `Ok(None)` when no candidate exists on this system, and an error when
    /// one exists but can not be read or parsed.
    pub fn resolve(&self) -> CanvasResult<Option<FontVec>> {
        let Some(path) = self.first_existing() else {
            log::debug!("no font found in {:?}", self.candidates);
            return Ok(None);
        };

        log::debug!("loading font: {}", path.display());
        load_font(path).map(Some)
    }
}

pub fn load_font(path: impl AsRef<Path>) -> CanvasResult<FontVec> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|e| CanvasError::Font {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    // Face 0 also covers the `.ttc` collections in the candidate list
    FontVec::try_from_vec_and_index(data, 0).map_err(|e| CanvasError::Font {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Single line of text with a drop shadow.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct TextOverlay {
    #[derivative(Default(value = "String::new()"))]
    pub text: String,

    #[derivative(Default(value = "Rgba([255, 255, 255, 255])"))]
    pub color: Rgba<u8>,

    #[derivative(Default(value = "Rgba([0, 0, 0, 150])"))]
    pub shadow_color: Rgba<u8>,

    /// Shadow displacement to the right and down, in pixels
    #[derivative(Default(value = "1"))]
    pub shadow_offset: i32,

    /// Font pixel height
    #[derivative(Default(value = "24.0"))]
    pub height: f32,
}

impl TextOverlay {
    pub fn new(text: impl Into<String>) -> Self {
        Self::default().with_text(text.into())
    }

    fn scale(&self) -> PxScale {
        PxScale::from(self.height)
    }

    /// Rendered extent of the text as `(width, height)`.
    pub fn measure(&self, font: &FontVec) -> (u32, u32) {
        text_size(self.scale(), font, &self.text)
    }

    pub fn draw(&self, image: &mut RgbaImage, font: &FontVec, x: i32, y: i32) {
        if self.text.is_empty() {
            return;
        }

        let scale = self.scale();
        draw_text_mut(
            image,
            self.shadow_color,
            x + self.shadow_offset,
            y + self.shadow_offset,
            scale,
            font,
            &self.text,
        );
        draw_text_mut(image, self.color, x, y, scale, font, &self.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_no_candidate_resolves_to_none() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let fonts = FontSource::new([dir.path().join("missing.ttf")]);

        assert!(fonts.first_existing().is_none());
        assert!(fonts.resolve()?.is_none());
        Ok(())
    }

    #[test]
    fn test_empty_candidate_list() -> Result<()> {
        assert!(FontSource::new(Vec::<PathBuf>::new()).resolve()?.is_none());
        Ok(())
    }

    #[test]
    fn test_first_existing_candidate_wins() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let first = dir.path().join("a.ttf");
        let second = dir.path().join("b.ttf");
        fs::write(&second, b"b")?;
        fs::write(&first, b"a")?;

        let fonts = FontSource::new([dir.path().join("none.ttf"), first.clone(), second]);
        assert_eq!(fonts.first_existing(), Some(first.as_path()));
        Ok(())
    }

    #[test]
    fn test_unparsable_font_is_an_error() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("broken.ttf");
        fs::write(&path, b"definitely not a font")?;

        let err = FontSource::new([path]).resolve();
        assert!(matches!(err, Err(CanvasError::Font { .. })));
        Ok(())
    }

    #[test]
    fn test_default_candidates() {
        let fonts = FontSource::default();
        assert_eq!(fonts.candidates.len(), 3);
        assert!(fonts.candidates[2].ends_with("DejaVuSans-Bold.ttf"));
    }

    #[test]
    fn test_text_overlay_draw_shadow_under_text() -> Result<()> {
        let Some(font) = FontSource::default().resolve()? else {
            return Ok(());
        };

        let overlay = TextOverlay::new("H")
            .with_height(48.0)
            .with_shadow_offset(6);
        let (width, height) = overlay.measure(&font);
        assert!(width > 0 && height > 0);

        let clear = Rgba([0, 0, 0, 0]);
        let mut img = RgbaImage::from_pixel(80, 80, clear);
        overlay.draw(&mut img, &font, 10, 10);

        // same glyph drawn alone at the text and shadow positions
        let mut text_only = RgbaImage::from_pixel(80, 80, clear);
        draw_text_mut(&mut text_only, overlay.color, 10, 10, overlay.scale(), &font, "H");
        let mut shadow_only = RgbaImage::from_pixel(80, 80, clear);
        draw_text_mut(&mut shadow_only, overlay.color, 16, 16, overlay.scale(), &font, "H");

        // near full glyph coverage, allowing for rasterizer rounding
        let solid = |i: &RgbaImage, x, y| i.get_pixel(x, y)[3] >= 250;
        let (mut overlap, mut shadow_visible) = (0, 0);
        for (x, y, pixel) in img.enumerate_pixels() {
            if solid(&text_only, x, y) {
                assert!(
                    pixel[0] >= 245 && pixel[3] >= 245,
                    "text must cover the shadow at ({x}, {y}): {pixel:?}"
                );
                if solid(&shadow_only, x, y) {
                    overlap += 1;
                }
            } else if solid(&shadow_only, x, y) && text_only.get_pixel(x, y)[3] == 0 {
                assert!(pixel[0] <= 5, "shadow at ({x}, {y}): {pixel:?}");
                assert!(pixel[3].abs_diff(overlay.shadow_color[3]) <= 5);
                shadow_visible += 1;
            }
        }

        assert!(overlap > 0);
        assert!(shadow_visible > 0);
        Ok(())
    }

    #[test]
    fn test_text_overlay_config() {
        let overlay = TextOverlay::new("FLIGHT TRACKER").with_height(28.0);

        assert_eq!(overlay.text, "FLIGHT TRACKER");
        assert_eq!(overlay.height, 28.0);
        assert_eq!(overlay.shadow_offset, 1);
        assert_eq!(overlay.shadow_color, Rgba([0, 0, 0, 150]));
    }
}
