//! # BSP Tree Implementation
//!
//! Binary Space Partitioning tree for boolean operations.
//!
//! ## Algorithm Overview
//!
//! The BSP tree recursively partitions 3D space using planes derived from polygon faces.
//! Each node stores:
//! - A splitting plane
//! - Polygons coplanar with that plane
//! - Front subtree (positive side)
//! - Back subtree (negative side)
//!
//! A missing back child is solid space and a missing front child is empty
//! space, so clipping a polygon against a tree removes the parts that fall
//! inside the tree's solid.
//!
//! ## References
//!
//! - Naylor, B. (1990). "Binary Space Partitioning Trees"
//! - Thibault, W. C., & Naylor, B. F. (1987). "Set operations on polyhedra using BSP trees"

use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};

use super::polygon::{split_polygon, BspPolygon, Plane, Side};

// =============================================================================
// BSP NODE
// =============================================================================

/// BSP tree node for solid partitioning.
///
/// ## Structure
///
/// ```text
///           [Plane]
///          /       \
///      Front       Back
///     (+ side)   (- side)
/// ```
#[derive(Debug, Default)]
pub(crate) struct BspNode {
    /// Splitting plane (None for an empty tree)
    plane: Option<Plane>,
    /// Polygons coplanar with this node's plane
    polygons: Vec<BspPolygon>,
    /// Front subtree (positive side of plane)
    front: Option<Box<BspNode>>,
    /// Back subtree (negative side of plane)
    back: Option<Box<BspNode>>,
    /// Plane classification tolerance
    eps: f64,
}

impl BspNode {
    /// Build a tree holding `polygons`.
    pub fn new(polygons: Vec<BspPolygon>, eps: f64) -> Self {
        let mut node = Self {
            eps,
            ..Self::default()
        };
        node.build(polygons);
        node
    }

    fn child(&self) -> Box<BspNode> {
        Box::new(Self {
            eps: self.eps,
            ..Self::default()
        })
    }

    /// Insert polygons into the tree, extending it where needed.
    ///
    /// The first polygon's plane becomes the splitting plane of an empty
    /// node. Coplanar polygons of either facing stay at the node.
    pub fn build(&mut self, polygons: Vec<BspPolygon>) {
        let Some(first) = polygons.first() else {
            return;
        };
        let plane = *self.plane.get_or_insert(first.plane);

        let mut front_polys = Vec::new();
        let mut back_polys = Vec::new();
        for poly in polygons {
            match split_polygon(poly, &plane, self.eps) {
                Side::CoplanarFront(p) | Side::CoplanarBack(p) => self.polygons.push(p),
                Side::Front(p) => front_polys.push(p),
                Side::Back(p) => back_polys.push(p),
                Side::Spanning { front, back, .. } => {
                    front_polys.extend(front);
                    back_polys.extend(back);
                }
            }
        }

        stacker::maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            if !front_polys.is_empty() {
                let child = self.child();
                self.front.get_or_insert(child).build(front_polys);
            }
            if !back_polys.is_empty() {
                let child = self.child();
                self.back.get_or_insert(child).build(back_polys);
            }
        });
    }

    /// Swap solid and empty space.
    ///
    /// Flips all polygons and planes and swaps front/back children.
    pub fn invert(&mut self) {
        for poly in &mut self.polygons {
            poly.flip();
        }
        if let Some(plane) = self.plane.as_mut() {
            plane.flip();
        }
        std::mem::swap(&mut self.front, &mut self.back);

        stacker::maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            if let Some(front) = self.front.as_mut() {
                front.invert();
            }
            if let Some(back) = self.back.as_mut() {
                back.invert();
            }
        });
    }

    /// Remove the parts of `polygons` that lie inside this tree's solid.
    ///
    /// Coplanar polygons follow their facing: same-facing ones are treated
    /// as in front of the plane, opposite-facing ones as behind it. A
    /// polygon comes back whole unless the tree's surface actually cuts it.
    pub fn clip_polygons(&self, polygons: Vec<BspPolygon>) -> Vec<BspPolygon> {
        let mut kept = Vec::with_capacity(polygons.len());
        for poly in polygons {
            self.clip_into(poly, &mut kept);
        }
        kept
    }

    /// Appends the surviving parts of `poly` to `kept` and reports whether
    /// anything was discarded. A split whose halves both survive intact is
    /// undone.
    fn clip_into(&self, poly: BspPolygon, kept: &mut Vec<BspPolygon>) -> bool {
        let Some(plane) = self.plane else {
            kept.push(poly);
            return false;
        };

        stacker::maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            match split_polygon(poly, &plane, self.eps) {
                Side::CoplanarFront(p) | Side::Front(p) => self.clip_front(p, kept),
                Side::CoplanarBack(p) | Side::Back(p) => self.clip_back(p, kept),
                Side::Spanning { front, back, whole } => {
                    let mark = kept.len();
                    let mut discarded = false;
                    if let Some(p) = front {
                        discarded |= self.clip_front(p, kept);
                    }
                    if let Some(p) = back {
                        discarded |= self.clip_back(p, kept);
                    }
                    if !discarded {
                        kept.truncate(mark);
                        kept.push(whole);
                    }
                    discarded
                }
            }
        })
    }

    fn clip_front(&self, poly: BspPolygon, kept: &mut Vec<BspPolygon>) -> bool {
        match self.front.as_deref() {
            Some(front) => front.clip_into(poly, kept),
            None => {
                kept.push(poly);
                false
            }
        }
    }

    fn clip_back(&self, poly: BspPolygon, kept: &mut Vec<BspPolygon>) -> bool {
        match self.back.as_deref() {
            Some(back) => back.clip_into(poly, kept),
            // Without a back tree the back side is solid: discard
            None => true,
        }
    }

    /// Collect all polygons from tree.
    #[cfg(test)]
    pub fn all_polygons(&self) -> Vec<BspPolygon> {
        let mut result = Vec::new();
        self.collect_into(&mut result);
        result
    }

    #[cfg(test)]
    fn collect_into(&self, out: &mut Vec<BspPolygon>) {
        out.extend(self.polygons.iter().cloned());
        stacker::maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            if let Some(front) = self.front.as_ref() {
                front.collect_into(out);
            }
            if let Some(back) = self.back.as_ref() {
                back.collect_into(out);
            }
        });
    }
}

// =============================================================================
// TESTS
// =============================================================================
