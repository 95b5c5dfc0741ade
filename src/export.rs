//! Writing the icon to disk: the SVG document first, then PNG renditions of that document

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use log::{debug, info};
use resvg::{tiny_skia, usvg};
use simple_xml_builder::XMLElement;

use crate::{config::IconConfig, icon, image::svg};

/// The files written by [`generate_icon`]
#[derive(Debug, Clone)]
pub struct IconOutputs {
    pub svg: PathBuf,
    pub pngs: Vec<PathBuf>,
}

/// Draws the icon, writes it as an SVG file and then renders that file once per raster size
pub fn generate_icon(cfg: &IconConfig) -> Result<IconOutputs> {
    if !(cfg.output_size > 0.0) {
        bail!("SVG size must be positive, got {}", cfg.output_size);
    }
    if cfg.raster_sizes.contains(&0) {
        bail!("raster sizes must be non-zero, got {:?}", cfg.raster_sizes);
    }

    let image = icon::compose();
    debug!("Composed icon from {} elements", image.elements().len());
    let root = svg::gen_svg(&image.lower(&cfg.palette), cfg.output_size);
    let svg_path = cfg.svg_path();
    write_svg(&root, &svg_path)?;
    info!(
        "Wrote {} ({}x{})",
        svg_path.display(),
        cfg.output_size,
        cfg.output_size
    );

    // Rasterise the file we just wrote, so the PNGs always match what's on disk
    let tree = load_svg(&svg_path)?;
    let mut pngs = Vec::with_capacity(cfg.raster_sizes.len());
    for &size in &cfg.raster_sizes {
        let png_path = cfg.png_path(size);
        render_png(&tree, size)?
            .save_png(&png_path)
            .with_context(|| format!("write {}", png_path.display()))?;
        info!("Wrote {} ({}x{})", png_path.display(), size, size);
        pngs.push(png_path);
    }

    Ok(IconOutputs {
        svg: svg_path,
        pngs,
    })
}

/// Writes an SVG root element to `path`, with an XML declaration
pub fn write_svg(root: &XMLElement, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    root.write(&mut writer)
        .and_then(|()| writer.flush())
        .with_context(|| format!("write {}", path.display()))
}

/// Reads and parses an SVG file
pub fn load_svg(path: &Path) -> Result<usvg::Tree> {
    let data = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    usvg::Tree::from_data(&data, &usvg::Options::default())
        .with_context(|| format!("parse {}", path.display()))
}

/// Renders a parsed SVG onto a transparent `size`x`size` pixmap, stretching the document to fill
/// it
pub fn render_png(tree: &usvg::Tree, size: u32) -> Result<tiny_skia::Pixmap> {
    let mut pixmap = tiny_skia::Pixmap::new(size, size)
        .with_context(|| format!("allocate {}x{} pixmap", size, size))?;
    let svg_size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        size as f32 / svg_size.width(),
        size as f32 / svg_size.height(),
    );
    resvg::render(tree, transform, &mut pixmap.as_mut());
    Ok(pixmap)
}

#[cfg(test)]
mod tests {
    use crate::palette::Palette;

    use super::*;

    fn icon_tree() -> usvg::Tree {
        let svg = icon::compose().svg_string(&Palette::default(), 1000.0);
        usvg::Tree::from_str(&svg, &usvg::Options::default()).unwrap()
    }

    #[test]
    fn rendered_size_matches_request() {
        let tree = icon_tree();
        for size in [16, 32, 48, 128] {
            let pixmap = render_png(&tree, size).unwrap();
            assert_eq!((pixmap.width(), pixmap.height()), (size, size));
        }
    }

    #[test]
    fn centre_is_bullseye_and_corners_are_clear() {
        let pixmap = render_png(&icon_tree(), 48).unwrap();
        let centre = pixmap.pixel(24, 24).unwrap();
        assert_eq!(
            (centre.red(), centre.green(), centre.blue(), centre.alpha()),
            (0x64, 0xd1, 0xef, 0xff)
        );
        assert_eq!(pixmap.pixel(0, 0).unwrap().alpha(), 0);
        assert_eq!(pixmap.pixel(47, 47).unwrap().alpha(), 0);
    }

    #[test]
    fn zero_raster_size_is_rejected() {
        let cfg = IconConfig {
            raster_sizes: vec![16, 0],
            out_dir: PathBuf::from("/nonexistent"),
            ..IconConfig::default()
        };
        let err = generate_icon(&cfg).unwrap_err();
        assert!(err.to_string().contains("non-zero"));
    }
}
