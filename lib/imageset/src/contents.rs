use crate::Result;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    pub filename: String,
    pub idiom: String,
    pub scale: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Info {
    pub author: String,
    pub version: u32,
}

impl Default for Info {
    fn default() -> Self {
        Self {
            author: "xcode".to_string(),
            version: 1,
        }
    }
}

/// `Contents.json` of an imageset.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Contents {
    pub images: Vec<ImageEntry>,
    pub info: Info,
}

impl Contents {
    /// Descriptor listing `{name}.png` at 1x and `{name}@2x.png` at 2x.
    pub fn for_image(name: &str, idiom: &str) -> Self {
        let entry = |filename: String, scale: &str| ImageEntry {
            filename,
            idiom: idiom.to_string(),
            scale: scale.to_string(),
        };

        Self {
            images: vec![
                entry(filename_1x(name), "1x"),
                entry(filename_2x(name), "2x"),
            ],
            info: Info::default(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn filename_1x(name: &str) -> String {
    format!("{name}.png")
}

pub fn filename_2x(name: &str) -> String {
    format!("{name}@2x.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contents_has_two_entries() {
        for name in ["Front", "Back-AppStore", "x"] {
            let contents = Contents::for_image(name, "tv");
            assert_eq!(contents.images.len(), 2);
            assert_eq!(contents.images[0].scale, "1x");
            assert_eq!(contents.images[1].scale, "2x");
        }
    }

    #[test]
    fn test_contents_filenames() {
        let contents = Contents::for_image("Middle", "tv");
        assert_eq!(contents.images[0].filename, "Middle.png");
        assert_eq!(contents.images[1].filename, "Middle@2x.png");
        assert!(contents.images.iter().all(|e| e.idiom == "tv"));
        assert_eq!(contents.info, Info::default());
    }

    #[test]
    fn test_contents_json_layout() {
        let json = Contents::for_image("Front", "tv").to_json().unwrap();
        let expected = r#"{
  "images": [
    {
      "filename": "Front.png",
      "idiom": "tv",
      "scale": "1x"
    },
    {
      "filename": "Front@2x.png",
      "idiom": "tv",
      "scale": "2x"
    }
  ],
  "info": {
    "author": "xcode",
    "version": 1
  }
}"#;

        assert_eq!(json, expected);
    }

    #[test]
    fn test_contents_json_parses_back() {
        let contents = Contents::for_image("Back", "tv");
        let parsed: Contents = serde_json::from_str(&contents.to_json().unwrap()).unwrap();
        assert_eq!(parsed, contents);
    }
}
