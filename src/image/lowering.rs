use itertools::Itertools;

use crate::palette::Palette;

use super::{ir::Placed, Image, LoweredImage};

/// 'Lower' an [`Image`] to a [`LoweredImage`] - i.e. use the [`Palette`] to replace every
/// symbolic [`Swatch`](crate::palette::Swatch) with a concrete colour.  The [`LoweredImage`] can
/// then be unambiguously converted to an image file, and the [`Palette`] is no longer needed.
pub(super) fn lower(image: &Image, palette: &Palette) -> LoweredImage {
    LoweredImage {
        logical_size: image.logical_size,
        elements: image
            .elements
            .iter()
            .map(|placed| Placed {
                elem: placed.elem.map_colors(|swatch| palette.get(*swatch)),
                transform: placed.transform.clone(),
            })
            .collect_vec(),
        view_box: image.view_box,
    }
}
