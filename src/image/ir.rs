//! An intermediate representation for vector images

use angle::Deg;

use crate::{utils::Rect2, V2};

/// A full [`Image`], composed of many [`Elem`]ents.  All coordinates are in logical units; the
/// image is only scaled to its output size when it is converted to a file format.  `C` is the type
/// used for colours: [`Swatch`](crate::palette::Swatch) before lowering, [`RGB8`](rgb::RGB8)
/// after.
#[derive(Debug, Clone)]
pub struct Image<C> {
    /// The side length of the (square) logical canvas
    pub(super) logical_size: f32,
    /// Elements in draw order, i.e. later elements are drawn on top of earlier ones
    pub(super) elements: Vec<Placed<C>>,
    /// The sub-region of the canvas which is actually visible
    pub(super) view_box: Option<Rect2>,
}

impl<C> Image<C> {
    /// Creates an empty `Image` (i.e. one which contains no [`Elem`]s)
    pub fn empty(logical_size: f32) -> Self {
        Self {
            logical_size,
            elements: vec![],
            view_box: None,
        }
    }

    /// Adds a new untransformed [`Elem`] on top of this `Image`
    pub fn add(&mut self, elem: Elem<C>) {
        self.add_transformed(elem, Transform::identity())
    }

    /// Adds a new [`Elem`] on top of this `Image`, drawn through a given [`Transform`]
    pub fn add_transformed(&mut self, elem: Elem<C>, transform: Transform) {
        self.elements.push(Placed { elem, transform })
    }

    /// Adds every [`Elem`] from an iterator, all sharing the same [`Transform`]
    pub fn add_iter(&mut self, elems: impl IntoIterator<Item = Elem<C>>, transform: &Transform) {
        for elem in elems {
            self.add_transformed(elem, transform.clone());
        }
    }

    /// Crops the visible part of this `Image` to `rect`
    pub fn set_view_box(&mut self, rect: Rect2) {
        self.view_box = Some(rect);
    }

    pub fn view_box(&self) -> Option<Rect2> {
        self.view_box
    }

    pub fn logical_size(&self) -> f32 {
        self.logical_size
    }

    pub fn elements(&self) -> &[Placed<C>] {
        self.elements.as_slice()
    }
}

/// An [`Elem`] along with the [`Transform`] that places it on the canvas
#[derive(Debug, Clone)]
pub struct Placed<C> {
    pub elem: Elem<C>,
    pub transform: Transform,
}

/// The shape of an item in an [`Image`]
#[derive(Debug, Clone, PartialEq)]
pub enum Elem<C> {
    Circle {
        centre: V2,
        radius: f32,
        style: Style<C>,
    },
    /// A straight line between two points.  Lines can only be stroked.
    LineSegment(V2, V2, StrokeStyle<C>),
    /// A closed polygon through the given vertices
    Polygon(Vec<V2>, Style<C>),
    Path(Path, Style<C>),
}

impl<C> Elem<C> {
    /// Creates a circle centred on `centre`
    pub fn circle(centre: V2, radius: f32, style: Style<C>) -> Self {
        Elem::Circle {
            centre,
            radius,
            style,
        }
    }

    /// Every point used to define this `Elem`, including control points of curves
    pub fn points(&self) -> Vec<V2> {
        match self {
            Elem::Circle { centre, .. } => vec![*centre],
            Elem::LineSegment(p1, p2, _) => vec![*p1, *p2],
            Elem::Polygon(verts, _) => verts.clone(),
            Elem::Path(path, _) => path.points(),
        }
    }

    /// Converts every colour in this `Elem` using `f`
    pub fn map_colors<D>(&self, mut f: impl FnMut(&C) -> D) -> Elem<D> {
        match self {
            Elem::Circle {
                centre,
                radius,
                style,
            } => Elem::Circle {
                centre: *centre,
                radius: *radius,
                style: style.map_colors(&mut f),
            },
            Elem::LineSegment(p1, p2, stroke) => {
                Elem::LineSegment(*p1, *p2, stroke.map_color(&mut f))
            }
            Elem::Polygon(verts, style) => Elem::Polygon(verts.clone(), style.map_colors(&mut f)),
            Elem::Path(path, style) => Elem::Path(path.clone(), style.map_colors(&mut f)),
        }
    }

    pub fn fill_style(&self) -> Option<&FillStyle<C>> {
        match self {
            Elem::LineSegment(_, _, _) => None, // Line segments can't be filled
            Elem::Circle { style, .. } | Elem::Polygon(_, style) | Elem::Path(_, style) => {
                style.fill_style()
            }
        }
    }

    pub fn stroke_style(&self) -> Option<&StrokeStyle<C>> {
        match self {
            Elem::LineSegment(_, _, stroke_style) => Some(stroke_style),
            Elem::Circle { style, .. } | Elem::Polygon(_, style) | Elem::Path(_, style) => {
                style.stroke_style()
            }
        }
    }
}

///////////
// PATHS //
///////////

/// A single drawing command of a [`Path`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCmd {
    MoveTo(V2),
    LineTo(V2),
    /// An elliptical arc with equal radii, ending at `to`
    ArcTo {
        radius: f32,
        large_arc: bool,
        sweep: bool,
        to: V2,
    },
    /// A cubic Bézier curve with two control points, ending at the last point
    CubicTo(V2, V2, V2),
    Close,
}

/// A sequence of [`PathCmd`]s, built up with a builder-style API
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    cmds: Vec<PathCmd>,
}

impl Path {
    pub fn starting_at(pt: V2) -> Self {
        Self {
            cmds: vec![PathCmd::MoveTo(pt)],
        }
    }

    pub fn line_to(mut self, pt: V2) -> Self {
        self.cmds.push(PathCmd::LineTo(pt));
        self
    }

    pub fn arc_to(mut self, radius: f32, large_arc: bool, sweep: bool, to: V2) -> Self {
        self.cmds.push(PathCmd::ArcTo {
            radius,
            large_arc,
            sweep,
            to,
        });
        self
    }

    pub fn cubic_to(mut self, c1: V2, c2: V2, to: V2) -> Self {
        self.cmds.push(PathCmd::CubicTo(c1, c2, to));
        self
    }

    pub fn close(mut self) -> Self {
        self.cmds.push(PathCmd::Close);
        self
    }

    pub fn cmds(&self) -> &[PathCmd] {
        &self.cmds
    }

    /// Every point mentioned by this `Path`'s commands, in order
    pub fn points(&self) -> Vec<V2> {
        let mut pts = Vec::new();
        for cmd in &self.cmds {
            match *cmd {
                PathCmd::MoveTo(p) | PathCmd::LineTo(p) => pts.push(p),
                PathCmd::ArcTo { to, .. } => pts.push(to),
                PathCmd::CubicTo(c1, c2, p) => pts.extend([c1, c2, p]),
                PathCmd::Close => {}
            }
        }
        pts
    }
}

////////////////
// TRANSFORMS //
////////////////

/// A single step of a [`Transform`]
#[derive(Debug, Clone, Copy)]
pub enum TransformOp {
    /// Rotate **clockwise** by `angle` around `about`
    Rotate { angle: Deg<f32>, about: V2 },
    Translate(V2),
    /// Scale by a unitless factor along each axis
    Scale(V2),
}

/// A list of [`TransformOp`]s.  As in SVG, the ops are written outermost-first: the last op is
/// applied to the element's coordinates first.
#[derive(Debug, Clone, Default)]
pub struct Transform {
    ops: Vec<TransformOp>,
}

impl Transform {
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn rotate(angle: Deg<f32>, about: V2) -> Self {
        Self::identity().then_rotate(angle, about)
    }

    pub fn then_rotate(mut self, angle: Deg<f32>, about: V2) -> Self {
        self.ops.push(TransformOp::Rotate { angle, about });
        self
    }

    pub fn then_translate(mut self, by: V2) -> Self {
        self.ops.push(TransformOp::Translate(by));
        self
    }

    pub fn then_scale(mut self, factors: V2) -> Self {
        self.ops.push(TransformOp::Scale(factors));
        self
    }

    /// Mirror horizontally across the vertical line `x = axis_x`
    pub fn then_mirror_x(self, axis_x: f32) -> Self {
        self.then_translate(V2::new(axis_x * 2.0, 0.0))
            .then_scale(V2::new(-1.0, 1.0))
    }

    pub fn is_identity(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn ops(&self) -> &[TransformOp] {
        &self.ops
    }

    /// Is any part of this transform a reflection?
    pub fn is_mirrored(&self) -> bool {
        let flips = self
            .ops
            .iter()
            .filter(|op| matches!(op, TransformOp::Scale(f) if f.x * f.y < 0.0))
            .count();
        flips % 2 == 1
    }
}

/////////////
// STYLING //
/////////////

/// The full styling of an [`Elem`], which is either filled or stroked (invisible elements are not
/// possible).
#[derive(Debug, Clone, PartialEq)]
pub enum Style<C> {
    JustFill(FillStyle<C>),
    JustStroke(StrokeStyle<C>),
}

impl<C> Style<C> {
    /// Shorthand for a solid fill with no outline
    pub fn fill(color: C) -> Self {
        Style::JustFill(FillStyle { fill_color: color })
    }

    /// Shorthand for an outline with no fill
    pub fn stroke(color: C, line_width: f32) -> Self {
        Style::JustStroke(StrokeStyle::new(color, line_width))
    }

    pub fn fill_style(&self) -> Option<&FillStyle<C>> {
        match self {
            Self::JustFill(f) => Some(f),
            Self::JustStroke(_) => None,
        }
    }

    pub fn stroke_style(&self) -> Option<&StrokeStyle<C>> {
        match self {
            Self::JustFill(_) => None,
            Self::JustStroke(s) => Some(s),
        }
    }

    fn map_colors<D>(&self, f: &mut impl FnMut(&C) -> D) -> Style<D> {
        match self {
            Self::JustFill(fill) => Style::JustFill(fill.map_color(f)),
            Self::JustStroke(stroke) => Style::JustStroke(stroke.map_color(f)),
        }
    }
}

/// The visual style of the body of an [`Elem`]
#[derive(Debug, Clone, PartialEq)]
pub struct FillStyle<C> {
    pub fill_color: C,
}

impl<C> FillStyle<C> {
    fn map_color<D>(&self, f: &mut impl FnMut(&C) -> D) -> FillStyle<D> {
        FillStyle {
            fill_color: f(&self.fill_color),
        }
    }
}

/// The visual style of the outline of an [`Elem`]
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle<C> {
    /// Width of the line, in logical units
    pub line_width: f32,
    pub stroke_color: C,
}

impl<C> StrokeStyle<C> {
    pub fn new(stroke_color: C, line_width: f32) -> Self {
        Self {
            line_width,
            stroke_color,
        }
    }

    fn map_color<D>(&self, f: &mut impl FnMut(&C) -> D) -> StrokeStyle<D> {
        StrokeStyle {
            line_width: self.line_width,
            stroke_color: f(&self.stroke_color),
        }
    }
}
