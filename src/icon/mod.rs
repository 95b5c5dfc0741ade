//! Procedural drawing of the icon.  Everything is drawn on a 1000x1000 logical canvas, back to
//! front, as a sequence of circles, rings, wedges and curved shapes arranged around the centre.

mod spike;

pub use spike::{is_shadow_inverted, spike_elems, spike_transform, SpikeColors, SpikeProfile};

use angle::Deg;
use itertools::Itertools;

use crate::{
    image::{Elem, Image, Path, StrokeStyle, Style, Transform},
    palette::Swatch,
    utils::{Rect2, V2Ext},
    V2,
};

/// Side length of the logical canvas
pub const LOGICAL_SIZE: f32 = 1000.0;

const BACKGROUND_RADIUS: f32 = 450.0;

/// Angular spacing of the candidate wedge positions
const WEDGE_SPACING: u32 = 30;
/// Angular width of each wedge (degrees)
const WEDGE_THICKNESS: f32 = 3.0;
/// How far each wedge extends underneath the white ring
const WEDGE_BUFFER: f32 = 10.0;

const WHITE_RING_OUTER_RADIUS: f32 = 375.0;
const WHITE_RING_INNER_RADIUS: f32 = 300.0;
const YELLOW_RING_OUTER_RADIUS: f32 = 225.0;
const YELLOW_RING_INNER_RADIUS: f32 = 150.0;
const YELLOW_RING_GAP_THICKNESS: f32 = 30.0;
const YELLOW_RING_GAP_ANGLES: [f32; 3] = [0.0, 45.0, 135.0];

const BULLSEYE_RADIUS: f32 = 75.0;
const BULLSEYE_RING_RADIUS: f32 = 40.0;
const BULLSEYE_RING_THICKNESS: f32 = 10.0;

const TEARDROP_RADIUS: f32 = 85.0;
const TEARDROP_HALF_WIDTH: f32 = 20.0;
const TEARDROP_HEIGHT: f32 = 50.0;

/// Distance from the centre to the base of each spike
const SPIKE_RADIUS: f32 = 275.0;
/// Length of each spike
const SPIKE_LENGTH: f32 = 140.0;
const SPIKE_COLORS: SpikeColors = SpikeColors {
    main: Swatch::Yellow,
    off: Swatch::LightYellow,
    nub: Swatch::DarkBlue,
};

/// Width of the transparent border which is cropped away from each side of the canvas
const CROP_MARGIN: f32 = 50.0;

/// Number of teardrops and spikes around the centre
const RADIAL_COPIES: u32 = 8;

/// The centre of the logical canvas
pub fn centre() -> V2 {
    V2::new(LOGICAL_SIZE / 2.0, LOGICAL_SIZE / 2.0)
}

/// Composes the whole icon, bottom layer first
pub fn compose() -> Image {
    let centre = centre();
    let mut image = Image::empty(LOGICAL_SIZE);

    image.add(Elem::circle(
        centre,
        BACKGROUND_RADIUS,
        Style::fill(Swatch::Grey),
    ));
    // The wedges go under the white ring, which hides their inner ends
    image.add_iter(
        radial_wedges(centre, BACKGROUND_RADIUS, WHITE_RING_OUTER_RADIUS),
        &Transform::identity(),
    );
    image.add(annulus(
        centre,
        WHITE_RING_OUTER_RADIUS,
        WHITE_RING_INNER_RADIUS,
        Swatch::White,
    ));
    image.add(annulus(
        centre,
        YELLOW_RING_OUTER_RADIUS,
        YELLOW_RING_INNER_RADIUS,
        Swatch::Yellow,
    ));
    image.add_iter(
        ring_gap_bars(centre, YELLOW_RING_OUTER_RADIUS),
        &Transform::identity(),
    );
    image.add_iter(bullseye(centre), &Transform::identity());

    let teardrop_base = V2::new(centre.x, centre.y - TEARDROP_RADIUS);
    for angle in radial_angles() {
        image.add_transformed(teardrop(teardrop_base), Transform::rotate(angle, centre));
    }

    let spike_base = V2::new(centre.x, centre.y - SPIKE_RADIUS);
    let profile = SpikeProfile::default();
    for angle in radial_angles() {
        image.add_iter(
            spike_elems(spike_base, SPIKE_LENGTH, &profile, SPIKE_COLORS),
            &spike_transform(angle, centre, spike_base.x),
        );
    }

    image.set_view_box(Rect2::from_min_size(
        V2::new(CROP_MARGIN, CROP_MARGIN),
        V2::new(LOGICAL_SIZE - CROP_MARGIN * 2.0, LOGICAL_SIZE - CROP_MARGIN * 2.0),
    ));
    image
}

/// The angles of the radially repeated teardrops and spikes
pub fn radial_angles() -> impl Iterator<Item = Deg<f32>> {
    (0..360)
        .step_by((360 / RADIAL_COPIES) as usize)
        .map(|a| Deg(a as f32))
}

/// The angles at which [`radial_wedges`] draws a wedge: every [`WEDGE_SPACING`] degrees, except
/// for the four cardinal directions
pub fn wedge_angles() -> Vec<Deg<f32>> {
    (0..360)
        .step_by(WEDGE_SPACING as usize)
        .filter(|a| a % 90 != 0)
        .map(|a| Deg(a as f32))
        .collect_vec()
}

/// Thin wedges which run inwards from the edge of a circle of radius `outer_radius` until they
/// are [`WEDGE_BUFFER`] units underneath a ring whose outer radius is `ring_outer_radius`.  Each
/// wedge's outer edge follows the circle so that it lines up exactly with the background.
pub fn radial_wedges(centre: V2, outer_radius: f32, ring_outer_radius: f32) -> Vec<Elem> {
    let half_thickness = WEDGE_THICKNESS / 2.0;
    let inward_offset = outer_radius - ring_outer_radius + WEDGE_BUFFER;
    wedge_angles()
        .into_iter()
        .map(|angle| {
            let p1 = V2::from_polar(centre, outer_radius, Deg(angle.0 - half_thickness));
            let p2 = V2::from_polar(centre, outer_radius, Deg(angle.0 + half_thickness));
            let inward = V2::direction(angle) * inward_offset;
            let path = Path::starting_at(p1)
                .arc_to(outer_radius, false, true, p2)
                .line_to(p2 - inward)
                .line_to(p1 - inward)
                .close();
            Elem::Path(path, Style::fill(Swatch::DarkBlue))
        })
        .collect_vec()
}

/// A ring covering the radii between `inner_radius` and `outer_radius`, drawn as a circle with a
/// thick stroke along the middle of the ring
pub fn annulus(centre: V2, outer_radius: f32, inner_radius: f32, swatch: Swatch) -> Elem {
    Elem::circle(
        centre,
        (outer_radius + inner_radius) / 2.0,
        Style::stroke(swatch, outer_radius - inner_radius),
    )
}

/// Background-coloured bars across the full diameter of a ring, which split it into segments.
/// The bars overshoot the ring so their ends never show.
pub fn ring_gap_bars(centre: V2, ring_outer_radius: f32) -> Vec<Elem> {
    let half_length = ring_outer_radius + YELLOW_RING_GAP_THICKNESS;
    YELLOW_RING_GAP_ANGLES
        .iter()
        .map(|&angle| {
            let half = V2::direction(Deg(angle)) * half_length;
            Elem::LineSegment(
                centre - half,
                centre + half,
                StrokeStyle::new(Swatch::Grey, YELLOW_RING_GAP_THICKNESS),
            )
        })
        .collect_vec()
}

/// A filled disc with a thin ring inside it
pub fn bullseye(centre: V2) -> Vec<Elem> {
    vec![
        Elem::circle(centre, BULLSEYE_RADIUS, Style::fill(Swatch::Blue)),
        Elem::circle(
            centre,
            BULLSEYE_RING_RADIUS,
            Style::stroke(Swatch::DarkBlue, BULLSEYE_RING_THICKNESS),
        ),
    ]
}

/// A teardrop pointing downwards from `base` (its narrow end), bulging up above it
pub fn teardrop(base: V2) -> Elem {
    let c1 = V2::new(base.x - TEARDROP_HALF_WIDTH, base.y - TEARDROP_HEIGHT);
    let c2 = V2::new(base.x + TEARDROP_HALF_WIDTH, base.y - TEARDROP_HEIGHT);
    Elem::Path(
        Path::starting_at(base).cubic_to(c1, c2, base),
        Style::fill(Swatch::LightGrey),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-3, "{} != {}", a, b);
    }

    #[test]
    fn eight_wedges_skip_cardinals() {
        let angles = wedge_angles().iter().map(|a| a.0 as u32).collect_vec();
        assert_eq!(angles, vec![30, 60, 120, 150, 210, 240, 300, 330]);
        assert_eq!(radial_wedges(centre(), 450.0, 375.0).len(), 8);
    }

    #[test]
    fn wedge_reaches_under_ring() {
        let wedges = radial_wedges(centre(), 450.0, 375.0);
        // The first wedge is at 30 degrees
        let pts = wedges[0].points();
        assert_eq!(pts.len(), 4);
        let dist = |p: V2| (p - centre()).length();
        assert_close(dist(pts[0]), 450.0);
        assert_close(dist(pts[1]), 450.0);
        // Each inner corner is 450 - 375 + 10 units straight in from its outer corner
        let inward = V2::direction(Deg(30.0)) * 85.0;
        for (outer, inner) in [(pts[1], pts[2]), (pts[0], pts[3])] {
            let offset = outer - inner;
            assert_close(offset.x, inward.x);
            assert_close(offset.y, inward.y);
        }
        assert!(dist(pts[2]) < 375.0 && dist(pts[2]) > 300.0);
    }

    #[test]
    fn white_ring_geometry() {
        match annulus(centre(), 375.0, 300.0, Swatch::White) {
            Elem::Circle { radius, style, .. } => {
                assert_eq!(radius, 337.5);
                let stroke = style.stroke_style().unwrap();
                assert_eq!(stroke.line_width, 75.0);
                assert_eq!(stroke.stroke_color, Swatch::White);
                assert!(style.fill_style().is_none());
            }
            other => panic!("expected a circle, got {:?}", other),
        }
    }

    #[test]
    fn gap_bars_span_the_ring() {
        let bars = ring_gap_bars(centre(), 225.0);
        assert_eq!(bars.len(), 3);
        for bar in &bars {
            let pts = bar.points();
            assert_close((pts[1] - pts[0]).length(), 510.0);
            assert_eq!(bar.stroke_style().unwrap().stroke_color, Swatch::Grey);
        }
    }

    #[test]
    fn teardrop_is_closed_loop() {
        let base = V2::new(500.0, 415.0);
        let pts = teardrop(base).points();
        assert_eq!(pts[0], base);
        assert_eq!(*pts.last().unwrap(), base);
        assert_close(pts[1].y, 365.0);
    }

    #[test]
    fn composition_order() {
        let image = compose();
        let elems = image.elements();
        // background + 8 wedges + 2 rings + 3 bars + 2 bullseye + 8 teardrops + 8 * 4 spike parts
        assert_eq!(elems.len(), 1 + 8 + 2 + 3 + 2 + 8 + 32);
        assert!(matches!(elems[0].elem, Elem::Circle { radius, .. } if radius == 450.0));
        assert!(matches!(elems[9].elem, Elem::Circle { radius, .. } if radius == 337.5));
        assert!(matches!(elems[10].elem, Elem::Circle { radius, .. } if radius == 187.5));
        assert!(matches!(elems[14].elem, Elem::Circle { radius, .. } if radius == 75.0));
        assert!(matches!(elems[15].elem, Elem::Circle { radius, .. } if radius == 40.0));
        // Spikes come last
        assert!(matches!(elems[24].elem, Elem::Polygon(..)));
    }

    #[test]
    fn half_of_the_spikes_are_mirrored() {
        let image = compose();
        let spikes = &image.elements()[24..];
        let mirrored = spikes
            .iter()
            .filter(|p| p.transform.is_mirrored())
            .count();
        // 4 spikes, 4 parts each
        assert_eq!(mirrored, 16);
        assert_eq!(radial_angles().filter(|a| is_shadow_inverted(*a)).count(), 4);
    }

    #[test]
    fn cropped_to_interior() {
        let view_box = compose().view_box().unwrap();
        assert_eq!(view_box.min(), V2::new(50.0, 50.0));
        assert_eq!(view_box.size(), V2::new(900.0, 900.0));
    }
}
