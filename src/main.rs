use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use guzzgen::{generate_asset_map, generate_icon, write_asset_map, AssetMapConfig, IconConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate Guzztool's icon and audio asset map", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw the icon, writing `icon.svg` and one `icon<size>.png` per raster size
    Icon {
        /// Directory to write the icon files into (must already exist)
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Width and height of the SVG document
        #[arg(long)]
        size: Option<f32>,
        /// Comma-separated pixel sizes of the PNG renditions
        #[arg(long, value_delimiter = ',')]
        raster_sizes: Option<Vec<u32>>,
    },
    /// Index the audio assets into a JSON map of category -> file names
    AssetMap {
        /// Directory whose sub-directories are the asset categories
        #[arg(long)]
        root: Option<PathBuf>,
        /// Output file (defaults to `<root>/assetMap.json`)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match args.command {
        Command::Icon {
            out_dir,
            size,
            raster_sizes,
        } => {
            let mut cfg = IconConfig::default();
            if let Some(out_dir) = out_dir {
                cfg.out_dir = out_dir;
            }
            if let Some(size) = size {
                cfg.output_size = size;
            }
            if let Some(raster_sizes) = raster_sizes {
                cfg.raster_sizes = raster_sizes;
            }
            generate_icon(&cfg)?;
        }
        Command::AssetMap { root, out } => {
            let mut cfg = AssetMapConfig::default();
            if let Some(root) = root {
                cfg.root = root;
            }
            cfg.out_file = out;
            let map = generate_asset_map(&cfg)?;
            write_asset_map(&map, &cfg.out_path())?;
        }
    }
    Ok(())
}
