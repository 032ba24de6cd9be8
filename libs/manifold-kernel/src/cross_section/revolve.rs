//! Sweeps around the Z axis.

use geo::{BooleanOps, Coord, MultiPolygon, Rect};
use tracing::debug;

use super::rings::triangulate;
use super::CrossSection;
use crate::config::KernelConfig;
use crate::core::trig::{cosd, sind};
use crate::core::Vec3;
use crate::error::KernelResult;
use crate::Solid;

/// Revolves `section` about the Y axis of its plane, which becomes the Z
/// axis of the result. Section X becomes the radius and section Y the
/// height.
///
/// Material at negative X is cut away first. `segments` is the number of
/// segments a full turn would use; zero picks one from the largest radius.
/// A sweep of less than 360° is closed with flat caps at both ends. A sweep
/// of zero or negative degrees gives the empty solid.
pub fn revolve(
    section: &CrossSection,
    segments: u32,
    degrees: f64,
    config: &KernelConfig,
) -> KernelResult<Solid> {
    if degrees.is_nan() || degrees <= 0.0 {
        return Ok(Solid::empty());
    }
    let full = degrees >= 360.0;
    let degrees = degrees.min(360.0);

    let scale = section.scale();
    let eps = config.weld_tolerance(scale);
    let mut rings = section.prepared_rings(eps);
    if rings.iter().flatten().any(|p| p.x < 0.0) {
        let reach = 2.0 * scale + 1.0;
        let right = Rect::new(Coord { x: 0.0, y: -reach }, Coord { x: reach, y: reach });
        let clipped = CrossSection::rings_to_geo(&rings)
            .intersection(&MultiPolygon::new(vec![right.to_polygon()]));
        rings = CrossSection::from_geo(clipped, eps).prepared_rings(eps);
    }
    for p in rings.iter_mut().flatten() {
        if p.x <= eps {
            p.x = 0.0;
        }
    }
    let max_radius = rings.iter().flatten().map(|p| p.x).fold(0.0, f64::max);
    if rings.is_empty() || max_radius <= eps {
        return Ok(Solid::empty());
    }

    let n = config.circular_segments(segments, max_radius) as usize;
    let slices = if full {
        n
    } else {
        ((n as f64 * degrees / 360.0).ceil() as usize).max(1)
    };
    let columns = if full { slices } else { slices + 1 };

    // points on the axis get one vertex shared by every slice
    let mut vert_pos = Vec::new();
    let mut first_vert = Vec::new();
    for p in rings.iter().flatten() {
        first_vert.push(vert_pos.len());
        if p.x == 0.0 {
            vert_pos.push(Vec3::new(0.0, 0.0, p.y));
            continue;
        }
        for s in 0..columns {
            let theta = degrees * s as f64 / slices as f64;
            vert_pos.push(Vec3::new(p.x * cosd(theta), p.x * sind(theta), p.y));
        }
    }
    let points: Vec<_> = rings.iter().flatten().copied().collect();
    let vid = |point: usize, slice: usize| -> u32 {
        if points[point].x == 0.0 {
            first_vert[point] as u32
        } else {
            (first_vert[point] + slice % columns) as u32
        }
    };

    let mut tri_verts = Vec::new();
    let mut offset = 0;
    for ring in &rings {
        let len = ring.len();
        for i in 0..len {
            let (a, b) = (offset + i, offset + (i + 1) % len);
            for s in 0..slices {
                let (p0, p1) = (vid(a, s), vid(b, s));
                let (q0, q1) = (vid(a, s + 1), vid(b, s + 1));
                tri_verts.push([p0, q0, q1]);
                tri_verts.push([p0, q1, p1]);
            }
        }
        offset += len;
    }

    if !full {
        for tri in triangulate(&rings, "revolve")? {
            tri_verts.push(tri.map(|p| vid(p, 0)));
            tri_verts.push([vid(tri[0], slices), vid(tri[2], slices), vid(tri[1], slices)]);
        }
    }

    let solid = Solid::from_parts(vert_pos, tri_verts);
    debug!(
        rings = rings.len(),
        slices,
        full,
        triangles = solid.num_tri(),
        "Revolved cross section"
    );
    Ok(solid)
}

impl CrossSection {
    /// See [`revolve`]. Uses the default tolerances.
    pub fn revolve(&self, segments: u32, degrees: f64) -> KernelResult<Solid> {
        revolve(self, segments, degrees, &KernelConfig::default())
    }
}
