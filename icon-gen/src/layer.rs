use canvas::{
    Airplane, CanvasResult, Ellipse, FontSource, Gradient, Rgba, RgbaImage, TextOverlay,
};
use std::fmt;

pub const PLANE_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const PLANE_SHADOW_COLOR: Rgba<u8> = Rgba([0, 0, 0, 100]);
pub const PLANE_SHADOW_OFFSET: i32 = 2;
pub const CLOUD_COLOR: Rgba<u8> = Rgba([255, 255, 255, 80]);

/// Cloud bounding boxes as fractions of the canvas size.
pub const CLOUDS: [[f32; 4]; 2] = [[0.1, 0.3, 0.3, 0.5], [0.7, 0.4, 0.9, 0.6]];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Front,
    Back,
    Middle,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Layer::Front, Layer::Back, Layer::Middle];

    pub fn name(self) -> &'static str {
        match self {
            Layer::Front => "Front",
            Layer::Back => "Back",
            Layer::Middle => "Middle",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub struct FrontLayer {
    pub image: RgbaImage,
    pub text_drawn: bool,
}

/// Sky gradient and nothing else.
pub fn back(width: u32, height: u32) -> CanvasResult<RgbaImage> {
    Gradient::default().render(width, height)
}

pub fn airplane(width: u32, height: u32) -> Airplane {
    let center = ((width / 2) as i32, (height / 2) as i32 - 20);
    Airplane::new(center, (width.min(height) / 4) as i32)
}

/// Top-left corner of the title: centered horizontally, a fifth of the height above the bottom.
pub fn text_origin(width: u32, height: u32, text_width: u32) -> (i32, i32) {
    let x = (width as i32 - text_width as i32).div_euclid(2);
    let y = height as i32 - (height as f32 * 0.2) as i32;
    (x, y)
}

/// Airplane with its drop shadow and, when a font is available, the title.
pub fn front(
    width: u32,
    height: u32,
    fonts: &FontSource,
    title: &str,
) -> CanvasResult<FrontLayer> {
    let mut image = canvas::transparent(width, height)?;

    let plane = airplane(width, height);
    let (cx, cy) = plane.center;
    plane
        .with_center((cx + PLANE_SHADOW_OFFSET, cy + PLANE_SHADOW_OFFSET))
        .draw(&mut image, PLANE_SHADOW_COLOR);
    plane.draw(&mut image, PLANE_COLOR);

    let text_drawn = match fonts.resolve() {
        Ok(Some(font)) => {
            let overlay = TextOverlay::new(title).with_height((height as f32 * 0.12).trunc());
            let (text_width, _) = overlay.measure(&font);
            let (x, y) = text_origin(width, height, text_width);

            overlay.draw(&mut image, &font, x, y);
            true
        }
        Ok(None) => {
            log::info!("No font available, front layer has no text");
            false
        }
        Err(e) => {
            log::warn!("Could not add text: {e}");
            false
        }
    };

    Ok(FrontLayer { image, text_drawn })
}

/// Two translucent clouds on a transparent canvas.
pub fn middle(width: u32, height: u32) -> CanvasResult<RgbaImage> {
    let mut image = canvas::transparent(width, height)?;

    for bbox in CLOUDS {
        Ellipse::proportional(width, height, bbox).fill(&mut image, CLOUD_COLOR);
    }

    Ok(image)
}
