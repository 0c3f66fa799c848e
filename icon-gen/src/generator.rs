use crate::{
    config::{Config, Resolution},
    layer::{self, Layer},
};
use anyhow::{Context, Result};
use canvas::RgbaImage;
use imageset::ImagesetReport;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Everything written for one resolution.
#[derive(Debug, Clone)]
pub struct ResolutionSummary {
    pub resolution: Resolution,
    pub text_drawn: bool,
    pub previews: Vec<PathBuf>,
    pub imagesets: Vec<ImagesetReport>,
}

#[derive(Debug, Clone)]
pub struct Summary {
    pub output_dir: PathBuf,
    pub resolutions: Vec<ResolutionSummary>,
}

impl Summary {
    pub fn files(&self) -> Vec<&Path> {
        self.resolutions
            .iter()
            .flat_map(|r| {
                r.previews
                    .iter()
                    .map(PathBuf::as_path)
                    .chain(r.imagesets.iter().flat_map(|s| s.files()))
            })
            .collect()
    }
}

pub fn layer_name(layer: Layer, resolution: &Resolution) -> String {
    format!("{}{}", layer.name(), resolution.suffix)
}

pub fn preview_filename(layer: Layer, resolution: &Resolution) -> String {
    format!("{}-preview.png", layer_name(layer, resolution))
}

pub struct Generator {
    config: Config,
}

impl Generator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn run(&self) -> Result<Summary> {
        let output_dir = &self.config.output_dir;
        fs::create_dir_all(output_dir)
            .with_context(|| format!("create output directory {}", output_dir.display()))?;

        let mut summary = Summary {
            output_dir: output_dir.clone(),
            resolutions: vec![],
        };

        for resolution in &self.config.resolutions {
            summary.resolutions.push(self.run_resolution(resolution)?);
        }

        log::info!("✓ Done! Generated icon layers in {}", output_dir.display());
        Ok(summary)
    }

    fn run_resolution(&self, resolution: &Resolution) -> Result<ResolutionSummary> {
        let (width, height) = (resolution.width, resolution.height);
        log::info!(
            "Generating {width}x{height} {} icon layers...",
            resolution.name
        );

        let front = layer::front(width, height, &self.config.fonts, &self.config.title)
            .context("render front layer")?;
        let text_drawn = front.text_drawn;
        let back = layer::back(width, height).context("render back layer")?;
        let middle = layer::middle(width, height).context("render middle layer")?;

        let layers: [(Layer, RgbaImage); 3] = [
            (Layer::Front, front.image),
            (Layer::Back, back),
            (Layer::Middle, middle),
        ];

        let mut previews = vec![];
        let mut imagesets = vec![];
        for (layer, image) in &layers {
            let preview = self
                .config
                .output_dir
                .join(preview_filename(*layer, resolution));
            imageset::save_png(image, &preview)
                .with_context(|| format!("save preview {}", preview.display()))?;
            previews.push(preview);

            let name = layer_name(*layer, resolution);
            let report =
                imageset::save_imageset(image, &self.config.output_dir, &name, &self.config.idiom)
                    .with_context(|| format!("save imageset {name}"))?;
            imagesets.push(report);
        }

        log::info!(
            "✓ Preview images saved to {}/",
            self.config.output_dir.display()
        );

        Ok(ResolutionSummary {
            resolution: *resolution,
            text_drawn,
            previews,
            imagesets,
        })
    }
}

/// Manual steps for assembling the exported layers into the app icon stacks.
pub fn next_steps(summary: &Summary) -> String {
    let mut steps = vec![
        "Next steps:".to_string(),
        "1. Open Xcode and navigate to:".to_string(),
        "   FlightTracker/Assets.xcassets/App Icon & Top Shelf Image.brandassets/".to_string(),
    ];

    for (index, r) in summary.resolutions.iter().enumerate() {
        let stack = if r.resolution.suffix.is_empty() {
            "App Icon".to_string()
        } else {
            format!("App Icon - {}", r.resolution.name)
        };

        steps.push(String::new());
        steps.push(format!("{}. For '{stack}.imagestack':", index + 2));
        for layer in Layer::ALL {
            steps.push(format!(
                "   - {layer}.imagestacklayer/Content.imageset: drag {} to the 1x slot",
                preview_filename(layer, &r.resolution)
            ));
        }
    }

    let n = summary.resolutions.len() + 2;
    steps.push(String::new());
    steps.push(format!("{n}. Clean build (Shift+Cmd+K) and rebuild"));
    steps.push(format!("{}. Delete the app from the Apple TV and reinstall", n + 1));

    steps.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_and_preview_names() {
        assert_eq!(layer_name(Layer::Front, &Resolution::STANDARD), "Front");
        assert_eq!(
            layer_name(Layer::Back, &Resolution::APP_STORE),
            "Back-AppStore"
        );
        assert_eq!(
            preview_filename(Layer::Middle, &Resolution::APP_STORE),
            "Middle-AppStore-preview.png"
        );
    }

    #[test]
    fn test_next_steps_lists_every_preview() {
        let summary = Summary {
            output_dir: PathBuf::from("AppIconAssets"),
            resolutions: Resolution::builtin()
                .into_iter()
                .map(|resolution| ResolutionSummary {
                    resolution,
                    text_drawn: false,
                    previews: vec![],
                    imagesets: vec![],
                })
                .collect(),
        };

        let steps = next_steps(&summary);
        assert!(steps.contains("'App Icon.imagestack'"));
        assert!(steps.contains("'App Icon - App Store.imagestack'"));
        for name in [
            "Front-preview.png",
            "Back-preview.png",
            "Middle-preview.png",
            "Front-AppStore-preview.png",
            "Back-AppStore-preview.png",
            "Middle-AppStore-preview.png",
        ] {
            assert!(steps.contains(name), "missing {name}");
        }
        assert!(steps.contains("4. Clean build"));
    }
}
