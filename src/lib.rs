use vector2d::Vector2D;

pub mod asset_map;
pub mod config;
pub mod export;
pub mod icon;
pub mod image;
pub mod palette;
pub mod utils;

pub use asset_map::{generate_asset_map, write_asset_map, AssetMap};
pub use config::{AssetMapConfig, IconConfig};
pub use export::{generate_icon, IconOutputs};

/// Type alias for 2D floating point vectors (in the geometric sense, unlike [`Vec`])
pub type V2 = Vector2D<f32>;
