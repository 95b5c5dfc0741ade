//! Image specification and rendering utilities.  This is an intermediate representation (IR) for
//! vector images: drawing code emits IR in logical units with symbolic colours, which is then
//! 'lowered' to concrete colours and translated to an output format (SVG) at any size.

mod ir;
mod lowering;
pub mod svg;

pub use ir::{FillStyle, Path, PathCmd, Placed, StrokeStyle, Transform, TransformOp};

use rgb::RGB8;

use crate::palette::{Palette, Swatch};

/// Re-export of [`ir::Image`] with the colour type used by drawing code
pub type Image = ir::Image<Swatch>;
/// Version of [`ir::Image`] where all the colours are fully specified
pub type LoweredImage = ir::Image<RGB8>;

/// Re-export of [`ir::Elem`] with the colour type used by drawing code
pub type Elem = ir::Elem<Swatch>;
/// Version of [`ir::Elem`] where all the colours are fully specified
pub type LoweredElem = ir::Elem<RGB8>;

/// Re-export of [`ir::Style`] with the colour type used by drawing code
pub type Style = ir::Style<Swatch>;
/// Version of [`ir::Style`] where all the colours are fully specified
pub type LoweredStyle = ir::Style<RGB8>;

/// Helper methods for easy conversions to various formats
impl Image {
    pub fn lower(&self, palette: &Palette) -> LoweredImage {
        lowering::lower(self, palette)
    }

    /// Lower this `Image` and render it to a pretty-printed SVG document whose width and height
    /// are `output_size`
    pub fn svg_string(&self, palette: &Palette, output_size: f32) -> String {
        svg::gen_svg_string(&self.lower(palette), output_size)
    }
}
