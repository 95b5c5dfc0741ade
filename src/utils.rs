//! Miscellaneous utility functions, usually related to vectors and to the conversion between
//! logical and output coordinates.

use angle::{Angle, Deg};

use crate::V2;

/// Extra methods for [`V2`] which [`vector2d`] doesn't provide
pub trait V2Ext {
    /// The point `radius` units away from `centre` in the direction of `angle`.  Angles are
    /// measured **clockwise** from the positive x-axis, because our y-axis points down.
    fn from_polar(centre: V2, radius: f32, angle: Deg<f32>) -> V2;

    /// The unit vector pointing in the direction of `angle` (see [`V2Ext::from_polar`])
    fn direction(angle: Deg<f32>) -> V2;
}

impl V2Ext for V2 {
    fn from_polar(centre: V2, radius: f32, angle: Deg<f32>) -> V2 {
        centre + Self::direction(angle) * radius
    }

    fn direction(angle: Deg<f32>) -> V2 {
        V2::new(angle.cos(), angle.sin())
    }
}

/// An axis-aligned rectangle, stored as its top-left corner and its size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect2 {
    min: V2,
    size: V2,
}

impl Rect2 {
    pub fn from_min_size(min: V2, size: V2) -> Self {
        Self { min, size }
    }

    pub fn min(&self) -> V2 {
        self.min
    }

    pub fn size(&self) -> V2 {
        self.size
    }
}

/// Converts lengths between the fixed logical space that all geometry is authored in and the
/// space of the emitted image.  Everything - points, radii, stroke widths - goes through the same
/// ratio, so the image is a uniform rescale of the logical drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaling {
    logical_size: f32,
    output_size: f32,
}

impl Scaling {
    pub fn new(logical_size: f32, output_size: f32) -> Self {
        Self {
            logical_size,
            output_size,
        }
    }

    /// Logical length -> output length
    pub fn to_output(&self, v: f32) -> f32 {
        v * self.output_size / self.logical_size
    }

    /// Output length -> logical length
    pub fn to_logical(&self, v: f32) -> f32 {
        v * self.logical_size / self.output_size
    }

    pub fn point_to_output(&self, pt: V2) -> V2 {
        V2::new(self.to_output(pt.x), self.to_output(pt.y))
    }
}
