//! Linear extrusion with twist and taper.

use tracing::debug;

use super::rings::triangulate;
use super::CrossSection;
use crate::config::KernelConfig;
use crate::core::trig::{cosd, sind};
use crate::core::{Vec2, Vec3};
use crate::error::KernelResult;
use crate::Solid;

/// Sweeps `section` from `z = 0` to `z = height`.
///
/// The section is split into `divisions` layers (at least one). Going up,
/// it turns by `twist_degrees` in total and its X and Y scale moves
/// linearly from one to `scale_top`. Negative scales are clamped to zero;
/// a top scale of zero in both axes closes the sweep in a single apex.
/// With twist, each side quad gets a centre vertex and four triangles.
///
/// An empty section, or a height that is not positive, gives the empty
/// solid. Only a failure of the cap triangulation is an error.
pub fn extrude(
    section: &CrossSection,
    height: f64,
    divisions: u32,
    twist_degrees: f64,
    scale_top: [f64; 2],
    config: &KernelConfig,
) -> KernelResult<Solid> {
    if !(height.is_finite() && height > 0.0) || !twist_degrees.is_finite() {
        return Ok(Solid::empty());
    }
    let eps = config.weld_tolerance(section.scale());
    let rings = section.prepared_rings(eps);
    if rings.is_empty() {
        return Ok(Solid::empty());
    }

    let layers = divisions.max(1) as usize;
    let scale_top = Vec2::from_array(scale_top.map(|s| if s.is_finite() { s.max(0.0) } else { 1.0 }));
    let apex = scale_top == Vec2::ZERO;
    let total: usize = rings.iter().map(Vec::len).sum();

    let mut vert_pos = Vec::with_capacity(total * (layers + 1));
    let ring_layers = if apex { layers } else { layers + 1 };
    for layer in 0..ring_layers {
        let t = layer as f64 / layers as f64;
        let scale = Vec2::ONE + (scale_top - Vec2::ONE) * t;
        let turn = twist_degrees * t;
        let rotation = Vec2::new(cosd(turn), sind(turn));
        for p in rings.iter().flatten() {
            let q = rotation.rotate(*p * scale);
            vert_pos.push(Vec3::new(q.x, q.y, height * t));
        }
    }
    if apex {
        vert_pos.push(Vec3::new(0.0, 0.0, height));
    }
    let vid = |layer: usize, point: usize| -> u32 {
        if apex && layer == layers {
            (layers * total) as u32
        } else {
            (layer * total + point) as u32
        }
    };

    let twisted = twist_degrees != 0.0;
    let mut tri_verts = Vec::new();
    let mut offset = 0;
    for ring in &rings {
        let n = ring.len();
        for i in 0..n {
            let (pi, pj) = (offset + i, offset + (i + 1) % n);
            for layer in 0..layers {
                let (a0, b0) = (vid(layer, pi), vid(layer, pj));
                let (a1, b1) = (vid(layer + 1, pi), vid(layer + 1, pj));
                if twisted && a1 != b1 {
                    // twisted quads are not planar; fan them from the centre
                    let c = vert_pos.len() as u32;
                    let sum = [a0, b0, b1, a1]
                        .iter()
                        .fold(Vec3::ZERO, |acc, &v| acc + vert_pos[v as usize]);
                    vert_pos.push(sum / 4.0);
                    tri_verts.extend([[a0, b0, c], [b0, b1, c], [b1, a1, c], [a1, a0, c]]);
                } else {
                    tri_verts.push([a0, b0, b1]);
                    tri_verts.push([a0, b1, a1]);
                }
            }
        }
        offset += n;
    }

    let caps = triangulate(&rings, "extrude")?;
    for tri in &caps {
        tri_verts.push([vid(0, tri[0]), vid(0, tri[2]), vid(0, tri[1])]);
        if !apex {
            tri_verts.push(tri.map(|p| vid(layers, p)));
        }
    }

    let solid = Solid::from_parts(vert_pos, tri_verts);
    debug!(
        rings = rings.len(),
        layers,
        apex,
        triangles = solid.num_tri(),
        "Extruded cross section"
    );
    Ok(solid)
}

impl CrossSection {
    /// See [`extrude`]. Uses the default tolerances.
    ///
    /// # Examples
    /// ```
    /// use manifold_kernel::core::Vec2;
    /// use manifold_kernel::CrossSection;
    /// let square = CrossSection::new(vec![vec![
    ///     Vec2::new(0.0, 0.0),
    ///     Vec2::new(2.0, 0.0),
    ///     Vec2::new(2.0, 2.0),
    ///     Vec2::new(0.0, 2.0),
    /// ]]);
    /// let prism = square.extrude(3.0, 1, 0.0, [1.0, 1.0]).unwrap();
    /// assert!((prism.volume() - 12.0).abs() < 1e-12);
    /// ```
    pub fn extrude(
        &self,
        height: f64,
        divisions: u32,
        twist_degrees: f64,
        scale_top: [f64; 2],
    ) -> KernelResult<Solid> {
        extrude(
            self,
            height,
            divisions,
            twist_degrees,
            scale_top,
            &KernelConfig::default(),
        )
    }
}
