use canvas::FontSource;
use derivative::Derivative;
use derive_setters::Setters;
use std::path::PathBuf;

/// Named output size. `suffix` is appended to every file and folder name of
/// the layers rendered at this size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
    pub suffix: &'static str,
}

impl Resolution {
    pub const STANDARD: Resolution = Resolution::new("Standard", 400, 240, "");
    pub const APP_STORE: Resolution = Resolution::new("App Store", 1280, 768, "-AppStore");

    pub const fn new(name: &'static str, width: u32, height: u32, suffix: &'static str) -> Self {
        Self {
            name,
            width,
            height,
            suffix,
        }
    }

    pub fn builtin() -> [Resolution; 2] {
        [Self::STANDARD, Self::APP_STORE]
    }
}

#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct Config {
    /// Every preview and imageset is written below this directory
    #[setters(into)]
    #[derivative(Default(value = "PathBuf::from(\"AppIconAssets\")"))]
    pub output_dir: PathBuf,

    #[derivative(Default(value = "Resolution::builtin().to_vec()"))]
    pub resolutions: Vec<Resolution>,

    #[derivative(Default(value = "FontSource::default()"))]
    pub fonts: FontSource,

    /// Text drawn near the bottom of the front layer
    #[setters(into)]
    #[derivative(Default(value = "\"FLIGHT TRACKER\".to_string()"))]
    pub title: String,

    #[setters(into)]
    #[derivative(Default(value = "\"tv\".to_string()"))]
    pub idiom: String,
}
