use glam::{IVec3, UVec3};
use serde::{Deserialize, Serialize};

use crate::math::{axis::Axis3, bounds::IBounds3};

/// The fixed cuboid envelope that a [`BlockPosSet`](super::BlockPosSet) can store points in.
///
/// Along each axis, the region covers exactly `size` cells, starting `size / 2` (rounded down)
/// below the `center`. For even sizes this is `center - size / 2..center + size / 2`.
///
/// Both the inclusive lower and the exclusive upper limit must fit into an [`i32`], which means
/// the bounding box of any stored points is always representable as [`IBounds3`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RegionDef", into = "RegionDef")]
pub struct Region {
    center: IVec3,
    size: UVec3,
    /// Derived from `center` and `size`.
    bounds: IBounds3,
}

impl Region {
    /// Constructs a new [`Region`] with the given `center` and `size`.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero on any axis or the region does not fit into [`i32`] coordinates.
    #[track_caller]
    pub fn new(center: IVec3, size: UVec3) -> Self {
        match Self::checked_new(center, size) {
            Ok(region) => region,
            Err(error) => panic!("{error}"),
        }
    }

    /// Constructs a new [`Region`] with the given `center` and `size`.
    ///
    /// Returns an error if `size` is zero on any axis or the region does not fit into [`i32`]
    /// coordinates.
    pub fn checked_new(center: IVec3, size: UVec3) -> Result<Self, RegionError> {
        if size.cmpeq(UVec3::ZERO).any() {
            return Err(RegionError::EmptySize(size));
        }

        let mut lower = IVec3::ZERO;
        let mut upper = IVec3::ZERO;
        for axis in Axis3::ALL {
            let (axis_lower, axis_upper) = axis_limits(center[axis], size[axis])
                .ok_or(RegionError::Overflow { center, size })?;
            lower[axis] = axis_lower;
            upper[axis] = axis_upper;
        }

        Ok(Self {
            center,
            size,
            bounds: IBounds3::new(lower, upper),
        })
    }

    /// The center that was used to construct the region.
    pub fn center(self) -> IVec3 {
        self.center
    }

    /// The number of cells along each axis.
    pub fn size(self) -> UVec3 {
        self.size
    }

    /// The cells covered by the region.
    pub fn bounds(self) -> IBounds3 {
        self.bounds
    }

    /// Whether the cell at `point` lies within the region.
    pub fn contains(self, point: IVec3) -> bool {
        self.bounds.contains(point)
    }
}

/// Returns the inclusive lower and exclusive upper limit of a single axis.
fn axis_limits(center: i32, size: u32) -> Option<(i32, i32)> {
    let lower = i64::from(center) - i64::from(size / 2);
    let upper = lower + i64::from(size);
    Some((i32::try_from(lower).ok()?, i32::try_from(upper).ok()?))
}

/// Why a [`Region`] could not be constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegionError {
    #[error("region size {0} must not be zero on any axis")]
    EmptySize(UVec3),
    #[error("region of size {size} centered at {center} exceeds the i32 coordinate range")]
    Overflow { center: IVec3, size: UVec3 },
}

/// The serialized form of a [`Region`]; the bounds are derived again when deserializing.
#[derive(Serialize, Deserialize)]
struct RegionDef {
    center: IVec3,
    size: UVec3,
}

impl From<Region> for RegionDef {
    fn from(value: Region) -> Self {
        Self {
            center: value.center,
            size: value.size,
        }
    }
}

impl TryFrom<RegionDef> for Region {
    type Error = RegionError;

    fn try_from(value: RegionDef) -> Result<Self, Self::Error> {
        Self::checked_new(value.center, value.size)
    }
}
