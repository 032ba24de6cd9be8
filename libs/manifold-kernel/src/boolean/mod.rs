//! # Boolean Operations
//!
//! Union, difference and intersection of solids through BSP trees.
//!
//! ## Pipeline
//!
//! 1. Short-circuit empty operands and disjoint bounding boxes
//! 2. Convert both solids to polygons and build a BSP tree for each
//! 3. Settle triangles outside the other operand's bounding box directly
//! 4. Clip the remaining triangles of each operand against the other's
//!    tree; only cuts along the other surface fragment a triangle
//! 5. Weld, repair T-junctions and triangulate back into a solid
//!
//! Smooth patches do not survive a boolean; property channels do, padded to
//! the wider of the two operands.

mod assemble;
mod bsp;
mod polygon;

#[cfg(test)]
mod tests;

use tracing::debug;

use crate::config::KernelConfig;
use crate::core::{BoundingBox, Vec3};
use crate::solid::Properties;
use crate::Solid;

use assemble::polygons_to_solid;
use bsp::BspNode;
use polygon::{solid_to_polygons, BspPolygon};

/// Kind of boolean combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpType {
    /// Volume enclosed by either operand.
    Add,
    /// Volume of the first operand not enclosed by the second.
    Subtract,
    /// Volume enclosed by both operands.
    Intersect,
}

/// Combines two solids.
///
/// ## Empty operands
///
/// - `Add`: the other operand
/// - `Subtract`: `a` when `b` is empty, empty when `a` is empty
/// - `Intersect`: empty
pub fn boolean(a: &Solid, b: &Solid, op: OpType, config: &KernelConfig) -> Solid {
    match (a.is_empty(), b.is_empty(), op) {
        (true, true, _) => return Solid::empty(),
        (_, _, OpType::Intersect) if a.is_empty() || b.is_empty() => return Solid::empty(),
        (true, false, OpType::Add) => return b.clone(),
        (false, true, OpType::Add | OpType::Subtract) => return a.clone(),
        (true, false, OpType::Subtract) => return Solid::empty(),
        _ => {}
    }
    let (Some(box_a), Some(box_b)) = (a.bounding_box(), b.bounding_box()) else {
        return Solid::empty();
    };
    let scale = box_a.union(&box_b).scale().max(1.0);
    let eps = config.plane_tolerance(scale);

    if !box_a.overlaps(&box_b, eps) {
        debug!(?op, "Boolean operands are disjoint");
        return match op {
            OpType::Add => disjoint_union(a, b),
            OpType::Subtract => a.clone(),
            OpType::Intersect => Solid::empty(),
        };
    }

    let num_prop = a.num_prop().max(b.num_prop());
    let polys_a = solid_to_polygons(a, num_prop);
    let polys_b = solid_to_polygons(b, num_prop);
    let mut tree_a = BspNode::new(polys_a.clone(), eps);
    let mut tree_b = BspNode::new(polys_b.clone(), eps);

    // triangles clear of the other operand's box are settled without
    // clipping: kept from `a` unless intersecting, kept from `b` only in a
    // union
    let (near_a, far_a) = split_by_box(polys_a, &box_b, eps);
    let (near_b, far_b) = split_by_box(polys_b, &box_a, eps);
    let passed = far_a.len() + far_b.len();

    let polygons = match op {
        OpType::Add => {
            let mut out = tree_b.clip_polygons(near_a);
            out.extend(flipped(tree_a.clip_polygons(flipped(tree_a.clip_polygons(near_b)))));
            out.extend(far_a);
            out.extend(far_b);
            out
        }
        OpType::Subtract => {
            tree_a.invert();
            let mut out = flipped(tree_b.clip_polygons(flipped(near_a)));
            out.extend(tree_a.clip_polygons(flipped(tree_a.clip_polygons(near_b))));
            out.extend(far_a);
            out
        }
        OpType::Intersect => {
            tree_a.invert();
            tree_b.invert();
            let mut out = flipped(tree_b.clip_polygons(flipped(near_a)));
            out.extend(flipped(tree_a.clip_polygons(flipped(tree_a.clip_polygons(near_b)))));
            out
        }
    };

    let polygon_count = polygons.len();
    let result = polygons_to_solid(polygons, num_prop, config.weld_tolerance(scale));
    debug!(
        ?op,
        input_triangles = a.num_tri() + b.num_tri(),
        passed,
        polygons = polygon_count,
        output_triangles = result.num_tri(),
        "Boolean complete"
    );
    result
}

/// Splits `polygons` into those whose bounds reach `other` and those that
/// lie entirely outside it.
fn split_by_box(
    polygons: Vec<BspPolygon>,
    other: &BoundingBox,
    eps: f64,
) -> (Vec<BspPolygon>, Vec<BspPolygon>) {
    polygons.into_iter().partition(|poly| {
        let corners: Vec<Vec3> = poly.vertices.iter().map(|v| v.pos).collect();
        BoundingBox::from_points(&corners).is_some_and(|bb| bb.overlaps(other, eps))
    })
}

fn flipped(mut polygons: Vec<BspPolygon>) -> Vec<BspPolygon> {
    for poly in &mut polygons {
        poly.flip();
    }
    polygons
}

/// Concatenates two solids whose bounding boxes do not touch.
fn disjoint_union(a: &Solid, b: &Solid) -> Solid {
    let offset = a.vert_pos.len() as u32;
    let mut vert_pos = a.vert_pos.clone();
    vert_pos.extend_from_slice(&b.vert_pos);
    let mut tri_verts = a.tri_verts.clone();
    tri_verts.extend(b.tri_verts.iter().map(|t| t.map(|v| v + offset)));

    let num_prop = a.num_prop().max(b.num_prop());
    let properties = (num_prop > 0).then(|| {
        let (pa, pb) = (padded_properties(a, num_prop), padded_properties(b, num_prop));
        let prop_offset = pa.count() as u32;
        let mut merged = pa;
        merged.values.extend(pb.values);
        merged
            .tri_props
            .extend(pb.tri_props.iter().map(|t| t.map(|v| v + prop_offset)));
        merged
    });

    Solid {
        vert_pos,
        tri_verts,
        properties,
        patches: None,
    }
}

/// Property table of `solid` widened to `num_prop` channels. Solids without
/// properties get one zeroed property vertex per position.
pub(crate) fn padded_properties(solid: &Solid, num_prop: usize) -> Properties {
    match solid.properties.as_ref() {
        Some(p) => Properties {
            num_prop,
            values: (0..p.count() as u32)
                .flat_map(|v| {
                    let src = p.get(v);
                    (0..num_prop).map(move |c| src.get(c).copied().unwrap_or(0.0))
                })
                .collect(),
            tri_props: p.tri_props.clone(),
        },
        None => Properties {
            num_prop,
            values: vec![0.0; solid.vert_pos.len() * num_prop],
            tri_props: solid.tri_verts.clone(),
        },
    }
}

impl Solid {
    /// Combines `self` with `other` using the default configuration.
    pub fn boolean(&self, other: &Solid, op: OpType) -> Solid {
        boolean(self, other, op, &KernelConfig::default())
    }

    /// Volume enclosed by either solid.
    ///
    /// # Examples
    /// ```
    /// use manifold_kernel::Solid;
    /// let a = Solid::cube([1.0, 1.0, 1.0]);
    /// let b = Solid::cube([1.0, 1.0, 1.0]).translate([5.0, 0.0, 0.0]);
    /// assert!((a.union(&b).volume() - 2.0).abs() < 1e-9);
    /// ```
    pub fn union(&self, other: &Solid) -> Solid {
        self.boolean(other, OpType::Add)
    }

    /// Volume of `self` outside `other`.
    pub fn difference(&self, other: &Solid) -> Solid {
        self.boolean(other, OpType::Subtract)
    }

    /// Volume enclosed by both solids.
    pub fn intersection(&self, other: &Solid) -> Solid {
        self.boolean(other, OpType::Intersect)
    }
}
