//! Configuration for the two generators.  The defaults reproduce the project's checked-in assets
//! exactly; the CLI only ever overrides where files go and what sizes they are.

use std::path::PathBuf;

use crate::{icon::LOGICAL_SIZE, palette::Palette};

/// Configuration for how the icon should be written out
#[derive(Debug, Clone)]
pub struct IconConfig {
    /// The width and height of the SVG document.  Defaults to the logical canvas size, so that
    /// the SVG's coordinates are exactly the logical ones.
    pub output_size: f32,
    /// One PNG is rendered at each of these sizes (in pixels)
    pub raster_sizes: Vec<u32>,
    /// The directory that receives `icon.svg` and the `icon<size>.png` files.  It must exist.
    pub out_dir: PathBuf,
    pub palette: Palette,
}

impl IconConfig {
    pub fn svg_path(&self) -> PathBuf {
        self.out_dir.join("icon.svg")
    }

    pub fn png_path(&self, size: u32) -> PathBuf {
        self.out_dir.join(format!("icon{}.png", size))
    }
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            output_size: LOGICAL_SIZE,
            raster_sizes: vec![16, 32, 48, 128],
            out_dir: PathBuf::from("src/static/icons"),
            palette: Palette::default(),
        }
    }
}

/// Configuration for how the audio asset map is built
#[derive(Debug, Clone)]
pub struct AssetMapConfig {
    /// Directory whose sub-directories are the asset categories
    pub root: PathBuf,
    /// Only files ending in this suffix are listed
    pub suffix: String,
    /// Categories whose entries are listed without `suffix`
    pub strip_suffix_in: Vec<String>,
    /// Where to write the JSON.  `None` means `<root>/assetMap.json`.
    pub out_file: Option<PathBuf>,
}

impl AssetMapConfig {
    pub fn out_path(&self) -> PathBuf {
        self.out_file
            .clone()
            .unwrap_or_else(|| self.root.join("assetMap.json"))
    }
}

impl Default for AssetMapConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("assets"),
            suffix: ".mp3".to_owned(),
            strip_suffix_in: vec!["moves".to_owned(), "pokemon".to_owned()],
            out_file: None,
        }
    }
}
