//! The 'spike': a curved, two-tone blade with a small wing and nub at its base.  One spike is four
//! [`Elem`]s which all share the same [`Transform`].

use angle::Deg;

use crate::{
    image::{Elem, Path, Style, Transform},
    palette::Swatch,
    V2,
};

/// How far (in logical units) the nub is stretched past the spike's outline on each side, so that
/// no anti-aliasing seam shows where the fills meet
const NUB_OVERLAP: f32 = 1.0;

/// The two control points of a cubic Bézier curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveControls {
    pub p1: V2,
    pub p2: V2,
}

impl CurveControls {
    fn new(p1: (f32, f32), p2: (f32, f32)) -> Self {
        Self {
            p1: V2::new(p1.0, p1.1),
            p2: V2::new(p2.0, p2.1),
        }
    }

    fn scaled(&self, s: f32) -> Self {
        Self {
            p1: self.p1 * s,
            p2: self.p2 * s,
        }
    }
}

/// The key points of a spike, as offsets from the centre of its base.  The tip of the spike is at
/// `(0, -1)`, so every offset is a multiple of the spike's length.  Offsets with positive `x` are
/// on the spike's 'thin' side; the 'fat' side uses the same points reflected in `x = 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpikeProfile {
    /// Upper half of the outer curve (tip to `outer_mid`)
    pub outer_top: CurveControls,
    /// Where the two halves of the outer curve meet
    pub outer_mid: V2,
    /// Lower half of the outer curve (`outer_mid` to base)
    pub outer_bottom: CurveControls,
    /// Curve from the base back to the tip, which bounds the fat half on the inside
    pub inner: CurveControls,
    /// Horizontal curve along the top of the nub
    pub nub: CurveControls,
    /// Top of the wing, along the midline
    pub wing_top: V2,
    /// Bottom of the wing, along the midline
    pub wing_bottom: V2,
    /// The wing's thin-side tip
    pub wing_tip: V2,
}

impl SpikeProfile {
    /// Multiplies every offset by `s`
    pub fn scaled(&self, s: f32) -> Self {
        Self {
            outer_top: self.outer_top.scaled(s),
            outer_mid: self.outer_mid * s,
            outer_bottom: self.outer_bottom.scaled(s),
            inner: self.inner.scaled(s),
            nub: self.nub.scaled(s),
            wing_top: self.wing_top * s,
            wing_bottom: self.wing_bottom * s,
            wing_tip: self.wing_tip * s,
        }
    }
}

impl Default for SpikeProfile {
    fn default() -> Self {
        Self {
            outer_top: CurveControls::new((0.024, -0.904), (0.352, -0.528)),
            outer_mid: V2::new(0.208, -0.272),
            outer_bottom: CurveControls::new((0.16, -0.192), (0.12, -0.104)),
            inner: CurveControls::new((0.05, -0.3), (0.05, -0.7)),
            nub: CurveControls::new((0.05, -0.1), (-0.05, -0.1)),
            wing_top: V2::new(0.0, -0.5),
            wing_bottom: V2::new(0.0, -0.1),
            wing_tip: V2::new(0.35, -0.5),
        }
    }
}

/// Which [`Swatch`] each part of a spike is painted with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpikeColors {
    /// The thin half
    pub main: Swatch,
    /// The fat half
    pub off: Swatch,
    /// The nub and the wing
    pub nub: Swatch,
}

/// Generates the four [`Elem`]s of a spike whose base is centred on `base` and whose length is
/// `s`, in draw order: wing, thin half, fat half, nub.  The spike points straight up; rotating it
/// into place is the job of [`spike_transform`].
pub fn spike_elems(base: V2, s: f32, profile: &SpikeProfile, colors: SpikeColors) -> Vec<Elem> {
    let p = profile.scaled(s);
    // Offsets on the thin side are added as-is, those on the fat side are reflected in the midline
    let thin = |offset: V2| base + offset;
    let fat = |offset: V2| V2::new(base.x - offset.x, base.y + offset.y);
    let tip = V2::new(base.x, base.y - s);

    let wing = Elem::Polygon(
        vec![
            thin(p.wing_top),
            thin(p.wing_tip),
            thin(p.wing_bottom),
            fat(p.wing_tip),
        ],
        Style::fill(colors.nub),
    );

    let thin_half = Path::starting_at(tip)
        .cubic_to(thin(p.outer_top.p1), thin(p.outer_top.p2), thin(p.outer_mid))
        .cubic_to(thin(p.outer_bottom.p1), thin(p.outer_bottom.p2), base);

    let fat_half = Path::starting_at(tip)
        .cubic_to(fat(p.outer_top.p1), fat(p.outer_top.p2), fat(p.outer_mid))
        .cubic_to(fat(p.outer_bottom.p1), fat(p.outer_bottom.p2), base)
        .cubic_to(thin(p.inner.p1), thin(p.inner.p2), tip);

    // The nub runs from just below the base, out to each side of the outer curve's midpoint and
    // across the top between them
    let nub_base = V2::new(base.x, base.y + NUB_OVERLAP);
    let nub_left = fat(p.outer_mid) - V2::new(NUB_OVERLAP, 0.0);
    let nub_right = thin(p.outer_mid) + V2::new(NUB_OVERLAP, 0.0);
    let nub = Path::starting_at(nub_base)
        .cubic_to(fat(p.outer_bottom.p2), fat(p.outer_bottom.p1), nub_left)
        .cubic_to(nub_left + p.nub.p1, nub_right + p.nub.p2, nub_right)
        .cubic_to(thin(p.outer_bottom.p1), thin(p.outer_bottom.p2), nub_base);

    vec![
        wing,
        Elem::Path(thin_half, Style::fill(colors.main)),
        Elem::Path(fat_half, Style::fill(colors.off)),
        Elem::Path(nub, Style::fill(colors.nub)),
    ]
}

/// The [`Transform`] which rotates a spike `angle` clockwise around `centre`.  Spikes in the second
/// half-turn are also mirrored about their own midline (`x = base_x`), so that their shading stays
/// consistent with a single light direction.
pub fn spike_transform(angle: Deg<f32>, centre: V2, base_x: f32) -> Transform {
    let transform = Transform::rotate(angle, centre);
    if is_shadow_inverted(angle) {
        transform.then_mirror_x(base_x)
    } else {
        transform
    }
}

pub fn is_shadow_inverted(angle: Deg<f32>) -> bool {
    angle.0 >= 180.0
}
