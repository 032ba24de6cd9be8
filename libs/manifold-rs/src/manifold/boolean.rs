//! # Boolean Operations
//!
//! Set operations on the volumes two solids enclose.
//!
//! ## Empty operands
//!
//! | Operation | `a` empty | `b` empty |
//! |-----------|-----------|-----------|
//! | union | `b` | `a` |
//! | intersection | empty | empty |
//! | difference | empty | `a` |

use manifold_kernel::OpType;

use super::Manifold;

/// Kind of boolean combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BooleanOp {
    /// Volume enclosed by either operand.
    Union,
    /// Volume enclosed by both operands.
    Intersection,
    /// Volume of the first operand outside the second.
    Difference,
}

impl From<BooleanOp> for OpType {
    fn from(op: BooleanOp) -> Self {
        match op {
            BooleanOp::Union => OpType::Add,
            BooleanOp::Intersection => OpType::Intersect,
            BooleanOp::Difference => OpType::Subtract,
        }
    }
}

impl Manifold {
    /// Combines `self` with `other`.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use manifold_rs::{BooleanOp, Manifold};
    ///
    /// let a = Manifold::cube(2.0, 2.0, 2.0);
    /// let b = a.translate(1.0, 0.0, 0.0);
    /// let overlap = a.boolean_op(&b, BooleanOp::Intersection);
    /// assert!((overlap.volume() - 4.0).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn boolean_op(&self, other: &Manifold, op: BooleanOp) -> Manifold {
        Manifold::from_solid(self.solid().boolean(other.solid(), op.into()))
    }

    /// Volume enclosed by either solid.
    #[must_use]
    pub fn union(&self, other: &Manifold) -> Manifold {
        self.boolean_op(other, BooleanOp::Union)
    }

    /// Volume enclosed by both solids.
    #[must_use]
    pub fn intersection(&self, other: &Manifold) -> Manifold {
        self.boolean_op(other, BooleanOp::Intersection)
    }

    /// Volume of `self` outside `other`.
    #[must_use]
    pub fn difference(&self, other: &Manifold) -> Manifold {
        self.boolean_op(other, BooleanOp::Difference)
    }
}
