//! Asset-catalog imagesets: one folder per image holding the 1x and 2x PNGs and a
//! `Contents.json` descriptor.

pub mod contents;
pub mod export;

pub use contents::{Contents, ImageEntry, Info};
pub use export::{ImagesetReport, save_imageset, save_png};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Canvas error: {0}")]
    Canvas(#[from] canvas::CanvasError),
}
