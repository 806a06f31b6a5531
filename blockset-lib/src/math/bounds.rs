use glam::{IVec3, UVec3};
use serde::{Deserialize, Serialize};

use super::axis::Facing3;

/// Signed integer axis-aligned bounds in 3D-space.
///
/// A cell at `point` occupies the unit cube from `point` to `point + 1`, so bounds covering a set
/// of cells have their upper limit one past the largest occupied coordinate on each axis.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct IBounds3 {
    /// The inclusive lower limit of the bounds.
    lower: IVec3,
    /// The exclusive upper limit of the bounds.
    upper: IVec3,
}

impl IBounds3 {
    /// Constructs [`IBounds3`] from the given inclusive `lower` and exclusive `upper`.
    ///
    /// # Panics
    ///
    /// Panics if `lower` exceeds `upper` along any axis.
    pub const fn new(lower: IVec3, upper: IVec3) -> Self {
        if let Some(bounds) = Self::checked_new(lower, upper) {
            bounds
        } else {
            panic!("lower bounds must not exceed upper bounds");
        }
    }

    /// Constructs [`IBounds3`] from the given inclusive `lower` and exclusive `upper`.
    ///
    /// Returns [`None`] if `lower` exceeds `upper` along any axis.
    pub const fn checked_new(lower: IVec3, upper: IVec3) -> Option<Self> {
        if lower.x <= upper.x && lower.y <= upper.y && lower.z <= upper.z {
            Some(Self { lower, upper })
        } else {
            None
        }
    }

    /// Constructs new [`IBounds3`] covering the single given `point`.
    ///
    /// Note, that this does not return empty bounds at the given `point` but instead bounds with a
    /// size of `1x1x1`.
    ///
    /// # Panics
    ///
    /// Panics if the `point` is [`i32::MAX`] on any axis.
    pub fn point(point: IVec3) -> Self {
        assert!(
            point.cmplt(IVec3::MAX).all(),
            "point must be less than IVec3::MAX"
        );
        Self {
            lower: point,
            upper: point + IVec3::ONE,
        }
    }

    /// The inclusive lower limit of the bounds.
    pub const fn lower(self) -> IVec3 {
        self.lower
    }

    /// The exclusive upper limit of the bounds.
    pub const fn upper(self) -> IVec3 {
        self.upper
    }

    /// The size of the bounds.
    pub fn size(self) -> UVec3 {
        // can never overflow, since lower never exceeds upper
        UVec3::new(
            self.upper.x.abs_diff(self.lower.x),
            self.upper.y.abs_diff(self.lower.y),
            self.upper.z.abs_diff(self.lower.z),
        )
    }

    /// The number of cells covered by the bounds.
    pub fn volume(self) -> u128 {
        let size = self.size();
        u128::from(size.x) * u128::from(size.y) * u128::from(size.z)
    }

    /// Whether the [`IBounds3`] are empty along _any_ axis.
    ///
    /// I.e., not only `0x0x0` but also e.g. `0x1x2` is considered "empty".
    pub fn is_empty(self) -> bool {
        self.lower.cmpeq(self.upper).any()
    }

    /// Whether the cell at `point` lies within the bounds.
    pub const fn contains(self, point: IVec3) -> bool {
        (self.lower.x <= point.x && point.x < self.upper.x)
            && (self.lower.y <= point.y && point.y < self.upper.y)
            && (self.lower.z <= point.z && point.z < self.upper.z)
    }

    /// Whether `self` fully encloses `other`.
    ///
    /// Inclusive, so bounds always enclose themselves.
    pub const fn encloses(self, other: Self) -> bool {
        (self.lower.x <= other.lower.x && other.upper.x <= self.upper.x)
            && (self.lower.y <= other.lower.y && other.upper.y <= self.upper.y)
            && (self.lower.z <= other.lower.z && other.upper.z <= self.upper.z)
    }

    /// The coordinate of the face pointing towards `facing`.
    ///
    /// Negative facings return the inclusive lower limit, positive facings the exclusive upper
    /// limit along the facing's axis.
    pub fn face(self, facing: Facing3) -> i32 {
        if facing.is_positive() {
            self.upper[facing.axis()]
        } else {
            self.lower[facing.axis()]
        }
    }
}
