//! Code to convert an [`Image`](super::Image) to an SVG document

use itertools::Itertools;
use rgb::RGB8;
use simple_xml_builder::XMLElement;

use crate::{palette::hex_string, utils::Scaling, V2};

use super::{
    ir::{FillStyle, StrokeStyle},
    LoweredElem, LoweredImage, Path, PathCmd, Transform, TransformOp,
};

/// Generate an SVG root element for a [`LoweredImage`], scaled so that the logical canvas is
/// `output_size` units wide and high.
pub fn gen_svg(image: &LoweredImage, output_size: f32) -> XMLElement {
    let scaling = Scaling::new(image.logical_size, output_size);
    let size_str = scaling.to_output(image.logical_size).to_string();

    // Generate the root SVG element
    let mut root = XMLElement::new("svg");
    root.add_attribute("width", &size_str);
    root.add_attribute("height", &size_str);
    root.add_attribute("xmlns", "http://www.w3.org/2000/svg");
    // Translate all `Elem`s to SVG's `XMLElement`s
    for placed in image.elements() {
        let mut xml_elem = gen_svg_elem(&placed.elem, scaling);
        if !placed.transform.is_identity() {
            xml_elem.add_attribute("transform", &transform_str(&placed.transform, scaling));
        }
        root.add_child(xml_elem);
    }
    // Crop out the transparent margin
    if let Some(view_box) = image.view_box() {
        let min = scaling.point_to_output(view_box.min());
        let size = scaling.point_to_output(view_box.size());
        let view_box_str = format!("{} {} {} {}", min.x, min.y, size.x, size.y);
        root.add_attribute("viewBox", &view_box_str);
    }

    root
}

/// Generate the full text of an SVG file for a [`LoweredImage`]
pub fn gen_svg_string(image: &LoweredImage, output_size: f32) -> String {
    gen_svg(image, output_size).to_string()
}

/// Creates an [`XMLElement`] for a given [`LoweredElem`]
fn gen_svg_elem(elem: &LoweredElem, scaling: Scaling) -> XMLElement {
    let len = |v: f32| scaling.to_output(v).to_string();

    // Create an unstyled XML element
    let mut xml_elem = match elem {
        LoweredElem::Circle { centre, radius, .. } => {
            let mut elem = XMLElement::new("circle");
            elem.add_attribute("cx", &len(centre.x));
            elem.add_attribute("cy", &len(centre.y));
            elem.add_attribute("r", &len(*radius));
            elem
        }
        LoweredElem::LineSegment(p1, p2, _) => {
            let mut elem = XMLElement::new("line");
            elem.add_attribute("x1", &len(p1.x));
            elem.add_attribute("y1", &len(p1.y));
            elem.add_attribute("x2", &len(p2.x));
            elem.add_attribute("y2", &len(p2.y));
            elem
        }
        LoweredElem::Polygon(vertices, _) => {
            // A whitespace-delimited list of `x,y` pairs
            let coord_string = vertices
                .iter()
                .map(|vert| point_str(*vert, scaling))
                .join(" ");
            let mut elem = XMLElement::new("polygon");
            elem.add_attribute("points", &coord_string);
            elem
        }
        LoweredElem::Path(path, _) => {
            let mut elem = XMLElement::new("path");
            elem.add_attribute("d", &path_data(path, scaling));
            elem
        }
    };
    // Add styles.  Lines have no interior, so never get a `fill`
    if !matches!(elem, LoweredElem::LineSegment(..)) {
        add_fill_style_attrs(elem.fill_style(), &mut xml_elem);
    }
    if let Some(stroke) = elem.stroke_style() {
        add_stroke_style_attrs(stroke, scaling, &mut xml_elem);
    }
    xml_elem
}

fn point_str(pt: V2, scaling: Scaling) -> String {
    let pt = scaling.point_to_output(pt);
    format!("{},{}", pt.x, pt.y)
}

/// Generates the `d` attribute of an SVG `<path>`
pub(crate) fn path_data(path: &Path, scaling: Scaling) -> String {
    path.cmds()
        .iter()
        .map(|cmd| match *cmd {
            PathCmd::MoveTo(pt) => format!("M {}", point_str(pt, scaling)),
            PathCmd::LineTo(pt) => format!("L {}", point_str(pt, scaling)),
            PathCmd::ArcTo {
                radius,
                large_arc,
                sweep,
                to,
            } => {
                let r = scaling.to_output(radius);
                format!(
                    "A {},{} 0 {},{} {}",
                    r,
                    r,
                    large_arc as u8,
                    sweep as u8,
                    point_str(to, scaling)
                )
            }
            PathCmd::CubicTo(c1, c2, to) => format!(
                "C {} {} {}",
                point_str(c1, scaling),
                point_str(c2, scaling),
                point_str(to, scaling)
            ),
            PathCmd::Close => "Z".to_owned(),
        })
        .join(" ")
}

/// Generates an SVG `transform` attribute.  Rotation pivots and translations are lengths (so get
/// scaled); angles and scale factors are not.
fn transform_str(transform: &Transform, scaling: Scaling) -> String {
    transform
        .ops()
        .iter()
        .map(|op| match *op {
            TransformOp::Rotate { angle, about } => {
                let about = scaling.point_to_output(about);
                format!("rotate({} {} {})", angle.0, about.x, about.y)
            }
            TransformOp::Translate(by) => {
                let by = scaling.point_to_output(by);
                format!("translate({}, {})", by.x, by.y)
            }
            TransformOp::Scale(factors) => format!("scale({}, {})", factors.x, factors.y),
        })
        .join(" ")
}

/// Add SVG attributes to give an [`XMLElement`] a given [`FillStyle`]
fn add_fill_style_attrs(style: Option<&FillStyle<RGB8>>, xml_elem: &mut XMLElement) {
    match style {
        Some(s) => xml_elem.add_attribute("fill", &hex_string(s.fill_color)),
        None => xml_elem.add_attribute("fill", "none"), // We need `fill="none"` to disable the fill
    }
}

/// Add SVG attributes to give an [`XMLElement`] a given [`StrokeStyle`]
fn add_stroke_style_attrs(style: &StrokeStyle<RGB8>, scaling: Scaling, xml_elem: &mut XMLElement) {
    xml_elem.add_attribute("stroke", &hex_string(style.stroke_color));
    xml_elem.add_attribute("stroke-width", &scaling.to_output(style.line_width).to_string());
}

#[cfg(test)]
mod tests {
    use angle::Deg;
    use rgb::RGB8;

    use crate::{
        image::{LoweredStyle, Path},
        utils::Rect2,
    };

    use super::*;

    fn test_image() -> LoweredImage {
        let red = RGB8::new(255, 0, 0);
        let mut image = LoweredImage::empty(1000.0);
        image.add(LoweredElem::circle(
            V2::new(500.0, 500.0),
            337.5,
            LoweredStyle::stroke(red, 75.0),
        ));
        image.add_transformed(
            LoweredElem::Path(
                Path::starting_at(V2::new(500.0, 225.0))
                    .cubic_to(V2::new(480.0, 175.0), V2::new(520.0, 175.0), V2::new(500.0, 225.0)),
                LoweredStyle::fill(red),
            ),
            Transform::rotate(Deg(45.0), V2::new(500.0, 500.0)).then_mirror_x(500.0),
        );
        image.set_view_box(Rect2::from_min_size(
            V2::new(50.0, 50.0),
            V2::new(900.0, 900.0),
        ));
        image
    }

    #[test]
    fn full_size_document() {
        let svg = gen_svg_string(&test_image(), 1000.0);
        assert!(svg.contains(r#"width="1000""#));
        assert!(svg.contains(r#"height="1000""#));
        assert!(svg.contains(r#"viewBox="50 50 900 900""#));
        assert!(svg.contains(r#"r="337.5""#));
        assert!(svg.contains(r#"fill="none""#));
        assert!(svg.contains(r##"stroke="#ff0000""##));
        assert!(svg.contains(r#"stroke-width="75""#));
        assert!(svg.contains("rotate(45 500 500) translate(1000, 0) scale(-1, 1)"));
    }

    #[test]
    fn half_size_document_scales_every_length() {
        let svg = gen_svg_string(&test_image(), 500.0);
        assert!(svg.contains(r#"width="500""#));
        assert!(svg.contains(r#"cx="250""#));
        assert!(svg.contains(r#"r="168.75""#));
        assert!(svg.contains(r#"stroke-width="37.5""#));
        assert!(svg.contains(r#"viewBox="25 25 450 450""#));
        // Angles and scale factors are unitless
        assert!(svg.contains("rotate(45 250 250) translate(500, 0) scale(-1, 1)"));
    }

    #[test]
    fn lines_have_no_fill() {
        let line = LoweredElem::LineSegment(
            V2::new(0.0, 500.0),
            V2::new(1000.0, 500.0),
            StrokeStyle::new(RGB8::new(0x45, 0x47, 0x4c), 30.0),
        );
        let xml = gen_svg_elem(&line, Scaling::new(1000.0, 1000.0)).to_string();
        assert!(xml.contains(r##"stroke="#45474c""##));
        assert!(xml.contains(r#"stroke-width="30""#));
        assert!(!xml.contains("fill"));
    }

    #[test]
    fn path_commands() {
        let path = Path::starting_at(V2::new(0.0, 0.0))
            .arc_to(10.0, false, true, V2::new(10.0, 10.0))
            .line_to(V2::new(0.0, 10.0))
            .cubic_to(V2::new(1.0, 2.0), V2::new(3.0, 4.0), V2::new(5.0, 6.0))
            .close();
        assert_eq!(
            path_data(&path, Scaling::new(1000.0, 2000.0)),
            "M 0,0 A 20,20 0 0,1 20,20 L 0,20 C 2,4 6,8 10,12 Z"
        );
    }
}
