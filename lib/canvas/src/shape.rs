use derivative::Derivative;
use derive_setters::Setters;
use image::{Rgba, RgbaImage};
use imageproc::{
    drawing::{draw_filled_ellipse_mut, draw_polygon_mut},
    point::Point,
};

/// Closed polygon given by its vertices. Pixels inside are replaced, not blended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
    pub points: Vec<(i32, i32)>,
}

impl Polygon {
    pub fn new(points: Vec<(i32, i32)>) -> Self {
        Self { points }
    }

    /// Returns the polygon moved by `(dx, dy)`.
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            points: self.points.iter().map(|&(x, y)| (x + dx, y + dy)).collect(),
        }
    }

    fn is_drawable(&self) -> bool {
        // imageproc panics on an explicitly closed polygon
        self.points.len() >= 3 && self.points.first() != self.points.last()
    }

    pub fn fill(&self, image: &mut RgbaImage, color: Rgba<u8>) {
        if !self.is_drawable() {
            log::debug!("skip degenerate polygon: {:?}", self.points);
            return;
        }

        let points = self
            .points
            .iter()
            .map(|&(x, y)| Point::new(x, y))
            .collect::<Vec<_>>();

        draw_polygon_mut(image, &points, color);
    }
}

/// Ellipse inscribed in the bounding box `(x0, y0)..(x1, y1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl Ellipse {
    pub fn from_bbox(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Bounding box given as fractions of the canvas size.
    pub fn proportional(width: u32, height: u32, bbox: [f32; 4]) -> Self {
        let (w, h) = (width as f32, height as f32);
        Self::from_bbox(bbox[0] * w, bbox[1] * h, bbox[2] * w, bbox[3] * h)
    }

    pub fn center(&self) -> (i32, i32) {
        (
            ((self.x0 + self.x1) / 2.0).round() as i32,
            ((self.y0 + self.y1) / 2.0).round() as i32,
        )
    }

    pub fn radii(&self) -> (i32, i32) {
        (
            ((self.x1 - self.x0).abs() / 2.0).round() as i32,
            ((self.y1 - self.y0).abs() / 2.0).round() as i32,
        )
    }

    pub fn fill(&self, image: &mut RgbaImage, color: Rgba<u8>) {
        let (rx, ry) = self.radii();
        if rx <= 0 || ry <= 0 {
            log::debug!("skip empty ellipse: {:?}", self);
            return;
        }

        draw_filled_ellipse_mut(image, self.center(), rx, ry, color);
    }
}

/// Stylized airplane seen from above, nose pointing up.
#[derive(Debug, Clone, Copy, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct Airplane {
    #[derivative(Default(value = "(0, 0)"))]
    pub center: (i32, i32),

    /// Half the wingspan in pixels
    #[derivative(Default(value = "60"))]
    pub size: i32,
}

impl Airplane {
    pub fn new(center: (i32, i32), size: i32) -> Self {
        Self { center, size }
    }

    pub fn fuselage(&self) -> Polygon {
        let ((cx, cy), s) = (self.center, self.size);
        Polygon::new(vec![
            (cx, cy - s),
            (cx + s / 6, cy + s / 2),
            (cx, cy + s / 3),
            (cx - s / 6, cy + s / 2),
        ])
    }

    pub fn wings(&self) -> Polygon {
        let ((cx, cy), s) = (self.center, self.size);
        Polygon::new(vec![
            (cx - s, cy - s / 4),
            (cx - s / 3, cy),
            (cx + s / 3, cy),
            (cx + s, cy - s / 4),
        ])
    }

    pub fn tail(&self) -> Polygon {
        let ((cx, cy), s) = (self.center, self.size);
        Polygon::new(vec![
            (cx - s / 3, cy + s / 3),
            (cx, cy + s / 2),
            (cx + s / 3, cy + s / 3),
        ])
    }

    pub fn polygons(&self) -> [Polygon; 3] {
        [self.fuselage(), self.wings(), self.tail()]
    }

    pub fn draw(&self, image: &mut RgbaImage, color: Rgba<u8>) {
        for polygon in self.polygons() {
            polygon.fill(image, color);
        }
    }
}
