//! # Refinement
//!
//! Subdivides triangles, placing new vertices on the smooth surface when
//! one is attached and on the flat triangle otherwise. Property channels are
//! interpolated linearly.
//!
//! - [`Solid::refine`]: every triangle becomes an `n × n` grid of `n²`
//!   triangles
//! - [`Solid::refine_to_length`]: edges are halved until none is longer than
//!   the limit
//! - [`Solid::refine_to_tolerance`]: edges are halved until the surface is
//!   within the tolerance of every edge
//!
//! New vertices on an original edge are created once and shared by both
//! triangles, so the result stays watertight.

mod adaptive;
mod uniform;

#[cfg(test)]
mod tests;

use tracing::debug;

use crate::core::Vec3;
use crate::solid::Properties;
use crate::Solid;

use adaptive::Split;

/// Evaluates points of the source solid's surface.
struct Sampler<'a> {
    solid: &'a Solid,
}

impl<'a> Sampler<'a> {
    fn new(solid: &'a Solid) -> Self {
        Self { solid }
    }

    /// Surface point at barycentric coordinates `w` of source triangle `tri`.
    fn point(&self, tri: usize, w: [f64; 3]) -> Vec3 {
        let corners = self.solid.corners(&self.solid.tri_verts[tri]);
        match self.solid.patches.as_ref() {
            Some(patches) => patches[tri].eval(corners, w),
            None => corners[0] * w[0] + corners[1] * w[1] + corners[2] * w[2],
        }
    }
}

/// Growing table of property vertices.
struct PropArena {
    num_prop: usize,
    values: Vec<f64>,
}

impl PropArena {
    fn from_properties(props: &Properties) -> Self {
        Self {
            num_prop: props.num_prop,
            values: props.values.clone(),
        }
    }

    /// Appends the weighted sum of existing property vertices and returns
    /// its index.
    fn push_blend(&mut self, sources: [u32; 3], weights: [f64; 3]) -> u32 {
        let index = (self.values.len() / self.num_prop) as u32;
        for c in 0..self.num_prop {
            let value = sources
                .iter()
                .zip(weights)
                .map(|(&s, w)| self.values[s as usize * self.num_prop + c] * w)
                .sum();
            self.values.push(value);
        }
        index
    }

    fn into_properties(self, tri_props: Vec<[u32; 3]>) -> Properties {
        Properties {
            num_prop: self.num_prop,
            values: self.values,
            tri_props,
        }
    }
}

/// Canonical key of the undirected edge between `a` and `b`.
fn edge_key(a: u32, b: u32) -> (u32, u32) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

impl Solid {
    /// Splits every triangle into `n²` triangles.
    ///
    /// `n <= 1` returns an unchanged copy. Flat triangles stay flat; a smooth
    /// solid is sampled on its surface.
    ///
    /// # Examples
    /// ```
    /// use manifold_kernel::Solid;
    /// let cube = Solid::cube([1.0, 1.0, 1.0]);
    /// assert_eq!(cube.refine(1).num_tri(), 12);
    /// assert_eq!(cube.refine(3).num_tri(), 12 * 9);
    /// ```
    pub fn refine(&self, n: u32) -> Solid {
        if n <= 1 || self.is_empty() {
            return self.clone();
        }
        let result = uniform::refine(self, n as usize);
        debug!(n, before = self.num_tri(), after = result.num_tri(), "Refined uniformly");
        result
    }

    /// Halves edges until none is longer than `length`.
    ///
    /// A non-positive or NaN length returns an unchanged copy.
    pub fn refine_to_length(&self, length: f64) -> Solid {
        if self.is_empty() || length.is_nan() || length <= 0.0 {
            return self.clone();
        }
        adaptive::refine(self, Split::Length(length))
    }

    /// Halves edges until the smooth surface lies within `tolerance` of every
    /// edge midpoint.
    ///
    /// A solid without a smooth surface is already exact and is returned
    /// unchanged, as is a non-positive or NaN tolerance.
    pub fn refine_to_tolerance(&self, tolerance: f64) -> Solid {
        if !self.is_smooth() || tolerance.is_nan() || tolerance <= 0.0 {
            return self.clone();
        }
        adaptive::refine(self, Split::Tolerance(tolerance))
    }
}
