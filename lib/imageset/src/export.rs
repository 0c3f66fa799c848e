use crate::{
    Result,
    contents::{Contents, filename_1x, filename_2x},
};
use image::{ImageFormat, RgbaImage};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Files written for one imageset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagesetReport {
    pub dir: PathBuf,
    pub image_1x: PathBuf,
    pub image_2x: PathBuf,
    pub contents: PathBuf,
}

impl ImagesetReport {
    pub fn files(&self) -> [&Path; 3] {
        [&self.image_1x, &self.image_2x, &self.contents]
    }
}

pub fn save_png(image: &RgbaImage, path: impl AsRef<Path>) -> Result<()> {
    image.save_with_format(path.as_ref(), ImageFormat::Png)?;
    Ok(())
}

/// Writes `base_dir/{name}.imageset/` with `{name}.png`, a Lanczos upscaled
/// `{name}@2x.png` and `Contents.json`. Existing files are overwritten.
pub fn save_imageset(
    image: &RgbaImage,
    base_dir: impl AsRef<Path>,
    name: &str,
    idiom: &str,
) -> Result<ImagesetReport> {
    let dir = base_dir.as_ref().join(format!("{name}.imageset"));
    fs::create_dir_all(&dir)?;

    let image_1x = dir.join(filename_1x(name));
    save_png(image, &image_1x)?;

    let image_2x = dir.join(filename_2x(name));
    let upscaled = canvas::upscale_2x(image)?;
    save_png(&upscaled, &image_2x)?;

    let contents = dir.join("Contents.json");
    fs::write(&contents, Contents::for_image(name, idiom).to_json()?)?;

    log::info!(
        "Created {name} @ 1x ({}x{}) and 2x ({}x{})",
        image.width(),
        image.height(),
        upscaled.width(),
        upscaled.height()
    );

    Ok(ImagesetReport {
        dir,
        image_1x,
        image_2x,
        contents,
    })
}
