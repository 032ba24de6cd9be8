//! # Polygons
//!
//! Ordered set of closed 2D polygons in flat coordinate lists, the form in
//! which cross sections cross the facade boundary.
//!
//! Each polygon is `[x0, y0, x1, y1, ...]` with implicit closure. Polygons
//! from [`Manifold::slice`] and [`Manifold::project`] are wound
//! counter-clockwise around material and clockwise around holes, which is
//! also what [`Manifold::extrude`] and [`Manifold::revolve`] expect.
//!
//! [`Manifold::slice`]: crate::Manifold::slice
//! [`Manifold::project`]: crate::Manifold::project
//! [`Manifold::extrude`]: crate::Manifold::extrude
//! [`Manifold::revolve`]: crate::Manifold::revolve

use manifold_kernel::core::Vec2;
use manifold_kernel::CrossSection;

use crate::error::{InvalidInput, Result};

/// Owned polygon set.
///
/// ## Example
///
/// ```rust
/// use manifold_rs::Polygons;
///
/// let square: &[f64] = &[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0];
/// let polygons = Polygons::new(&[square]).unwrap();
/// assert_eq!(polygons.size(), 1);
/// assert_eq!(polygons.get_as_slice(0), square);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygons {
    polygons: Vec<Vec<f64>>,
}

impl Polygons {
    /// Copies caller coordinate lists into an owned set.
    ///
    /// # Errors
    ///
    /// [`InvalidInput::OddPolygonCoordinates`] if a list has an odd length.
    pub fn new(data: &[&[f64]]) -> Result<Self> {
        if let Some((polygon, coords)) = data.iter().enumerate().find(|(_, c)| c.len() % 2 != 0) {
            return Err(InvalidInput::OddPolygonCoordinates {
                polygon,
                len: coords.len(),
            }
            .into());
        }
        Ok(Self {
            polygons: data.iter().map(|c| c.to_vec()).collect(),
        })
    }

    /// Number of polygons.
    pub fn size(&self) -> usize {
        self.polygons.len()
    }

    /// True if there are no polygons.
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Flat coordinates of polygon `i`.
    ///
    /// # Panics
    ///
    /// If `i >= self.size()`. Use [`Polygons::get`] for a checked lookup.
    pub fn get_as_slice(&self, i: usize) -> &[f64] {
        &self.polygons[i]
    }

    /// Flat coordinates of polygon `i`, or `None` past the end.
    pub fn get(&self, i: usize) -> Option<&[f64]> {
        self.polygons.get(i).map(Vec::as_slice)
    }

    /// Iterates over the polygons' flat coordinates.
    pub fn iter(&self) -> impl Iterator<Item = &[f64]> {
        self.polygons.iter().map(Vec::as_slice)
    }

    /// Borrowed views in the shape the sweep constructors take.
    ///
    /// ```rust
    /// use manifold_rs::Manifold;
    ///
    /// let section = Manifold::cube(1.0, 2.0, 3.0).slice(1.5);
    /// let prism = Manifold::extrude(&section.as_slices(), 1.0, 0, 0.0, 1.0, 1.0).unwrap();
    /// assert!((prism.volume() - 2.0).abs() < 1e-9);
    /// ```
    pub fn as_slices(&self) -> Vec<&[f64]> {
        self.iter().collect()
    }

    pub(crate) fn from_cross_section(section: CrossSection) -> Self {
        Self {
            polygons: section
                .into_rings()
                .into_iter()
                .map(|ring| ring.iter().flat_map(|p| [p.x, p.y]).collect())
                .collect(),
        }
    }

    pub(crate) fn to_cross_section(&self) -> CrossSection {
        CrossSection::new(
            self.polygons
                .iter()
                .map(|coords| {
                    coords
                        .chunks_exact(2)
                        .map(|xy| Vec2::new(xy[0], xy[1]))
                        .collect()
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_new_copies_data() {
        let mut coords = vec![0.0, 0.0, 2.0, 0.0, 0.0, 2.0];
        let polygons = Polygons::new(&[coords.as_slice()]).unwrap();
        coords[0] = 9.0;
        assert_eq!(polygons.get_as_slice(0)[0], 0.0);
    }

    #[test]
    fn test_odd_coordinates_are_rejected() {
        let good: &[f64] = &[0.0, 0.0, 1.0, 0.0, 0.0, 1.0];
        let bad: &[f64] = &[0.0, 0.0, 1.0];
        assert_eq!(
            Polygons::new(&[good, bad]),
            Err(Error::InvalidInput(InvalidInput::OddPolygonCoordinates {
                polygon: 1,
                len: 3
            }))
        );
    }

    #[test]
    fn test_accessors() {
        let a: &[f64] = &[0.0, 0.0, 1.0, 0.0, 0.0, 1.0];
        let b: &[f64] = &[];
        let polygons = Polygons::new(&[a, b]).unwrap();
        assert_eq!(polygons.size(), 2);
        assert!(!polygons.is_empty());
        assert_eq!(polygons.get(1), Some(b));
        assert_eq!(polygons.get(2), None);
        assert_eq!(polygons.as_slices(), vec![a, b]);
        assert!(Polygons::default().is_empty());
    }

    #[test]
    fn test_cross_section_conversion_keeps_order() {
        let a: &[f64] = &[0.0, 0.0, 1.0, 0.0, 1.0, 1.0];
        let b: &[f64] = &[5.0, 5.0, 4.0, 5.0, 5.0, 4.0];
        let polygons = Polygons::new(&[a, b]).unwrap();
        let section = polygons.to_cross_section();
        assert_eq!(section.num_rings(), 2);
        assert_eq!(section.rings()[1][2], Vec2::new(5.0, 4.0));
        assert_eq!(Polygons::from_cross_section(section), polygons);
    }
}
