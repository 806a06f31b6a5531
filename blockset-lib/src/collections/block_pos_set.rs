pub mod extent_tracker;
#[cfg(test)]
mod naive;
pub mod region;
mod serialize;

use std::{
    collections::{hash_set, HashSet},
    iter::Copied,
};

use enum_map::EnumMap;
use extent_tracker::AxisExtentTracker;
use glam::{IVec3, UVec3};
use log::{debug, trace};
use region::Region;

use crate::math::{
    axis::{Axis3, Facing3, Facings1, Facings3},
    bounds::IBounds3,
};

/// A set of block positions within a fixed [`Region`] that keeps track of its bounding box.
///
/// Points are stored sparsely, so memory usage only depends on the number of points and the
/// [`Region::size`] along each axis, never on the volume of the [`Region`]. Each axis has its own
/// [`AxisExtentTracker`], which allows [`Self::make_aabb`] to return a tight bounding box without
/// looking at any of the points.
///
/// Equality only considers the [`Region`] and the contained points.
///
/// Serializes as its [`Region`] and a sorted list of points. Deserializing replays all points
/// through [`Self::try_insert`], which rejects points outside of the [`Region`] as well as
/// duplicates.
#[derive(Clone, Debug)]
pub struct BlockPosSet {
    region: Region,
    points: HashSet<IVec3>,
    /// Derived from [`Self::points`].
    extents: EnumMap<Axis3, AxisExtentTracker>,
}

impl BlockPosSet {
    /// Constructs an empty [`BlockPosSet`] for the [`Region`] with the given `center` and `size`.
    ///
    /// # Panics
    ///
    /// Panics if the `center` and `size` do not form a valid [`Region`].
    #[track_caller]
    pub fn new(center: impl Into<IVec3>, size: impl Into<UVec3>) -> Self {
        Self::with_region(Region::new(center.into(), size.into()))
    }

    /// Constructs an empty [`BlockPosSet`] for the given `region`.
    pub fn with_region(region: Region) -> Self {
        let lower = region.bounds().lower();
        let size = region.size();
        Self {
            region,
            points: HashSet::new(),
            extents: EnumMap::from_fn(|axis| AxisExtentTracker::new(lower[axis], size[axis])),
        }
    }

    /// Constructs a [`BlockPosSet`] containing the given `points`.
    ///
    /// Unlike repeatedly calling [`Self::insert`], this fails if any of the points is listed more
    /// than once.
    pub fn try_from_points(
        region: Region,
        points: impl IntoIterator<Item = IVec3>,
    ) -> Result<Self, PointsError> {
        let mut set = Self::with_region(region);
        for point in points {
            if !set.try_insert(point)? {
                return Err(PointsError::Duplicate(point));
            }
        }

        debug!(
            "rebuilt {} points within {:?}, bounding box {:?}",
            set.len(),
            region.bounds(),
            set.make_aabb()
        );
        Ok(set)
    }

    /// The [`Region`] that all points must lie in.
    pub fn region(&self) -> Region {
        self.region
    }

    /// Whether `point` lies within the [`Region`] and could therefore be inserted.
    pub fn can_store(&self, point: impl Into<IVec3>) -> bool {
        self.region.contains(point.into())
    }

    /// The number of points in the set.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the set contains no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn contains(&self, point: impl Into<IVec3>) -> bool {
        self.points.contains(&point.into())
    }

    /// Inserts a `point` into the set.
    ///
    /// Returns `true` if the point was not present before.
    ///
    /// # Panics
    ///
    /// Panics if the `point` lies outside of the [`Region`]. Use [`Self::try_insert`] to handle
    /// this case gracefully instead.
    #[track_caller]
    pub fn insert(&mut self, point: impl Into<IVec3>) -> bool {
        match self.try_insert(point) {
            Ok(inserted) => inserted,
            Err(error) => panic!("{error}"),
        }
    }

    /// Inserts a `point` into the set.
    ///
    /// Returns `Ok(true)` if the point was not present before and an error without modifying the
    /// set if the point lies outside of the [`Region`].
    pub fn try_insert(&mut self, point: impl Into<IVec3>) -> Result<bool, OutOfRegion> {
        let point = point.into();
        if !self.region.contains(point) {
            return Err(OutOfRegion {
                point,
                region: self.region,
            });
        }
        if !self.points.insert(point) {
            return Ok(false);
        }

        let grown = self.notify_extents(point, AxisExtentTracker::point_added);
        if !grown.is_empty() {
            trace!("inserting {point} grew faces {grown:?}");
        }
        Ok(true)
    }

    /// Removes a `point` from the set.
    ///
    /// Returns `true` if the point was present. Points outside of the [`Region`] are never present.
    pub fn remove(&mut self, point: impl Into<IVec3>) -> bool {
        let point = point.into();
        if !self.points.remove(&point) {
            return false;
        }

        let shrunk = self.notify_extents(point, AxisExtentTracker::point_removed);
        if !shrunk.is_empty() {
            trace!("removing {point} shrunk faces {shrunk:?}");
        }
        true
    }

    /// Removes all points from the set.
    pub fn clear(&mut self) {
        self.points.clear();
        for tracker in self.extents.values_mut() {
            tracker.clear();
        }
    }

    /// Iterates over all points in the set in arbitrary order.
    pub fn iter(&self) -> Iter<'_> {
        self.points.iter().copied()
    }

    /// The tracker of occupied coordinates along the given `axis`.
    pub fn extent_tracker(&self, axis: Axis3) -> &AxisExtentTracker {
        &self.extents[axis]
    }

    /// Creates tight bounds that contain all points in the set.
    ///
    /// Each point is treated as a unit cube, so a set holding a single point results in bounds
    /// with a size of `1x1x1` rather than empty bounds.
    ///
    /// Returns [`None`] if the set is empty.
    pub fn make_aabb(&self) -> Option<IBounds3> {
        let mut lower = IVec3::ZERO;
        let mut upper = IVec3::ZERO;
        for (axis, tracker) in &self.extents {
            let (min, max) = tracker.range()?;
            lower[axis] = min;
            // the upper limit of the region fits into an i32, so this can never overflow
            upper[axis] = max + 1;
        }
        Some(IBounds3::new(lower, upper))
    }

    /// Forwards a change of `point` to the tracker of each axis.
    ///
    /// Returns the faces of the bounding box that moved as a result.
    fn notify_extents(
        &mut self,
        point: IVec3,
        notify: impl Fn(&mut AxisExtentTracker, i32) -> Facings1,
    ) -> Facings3 {
        let mut moved = Facings3::empty();
        for (axis, tracker) in &mut self.extents {
            for facing in notify(tracker, point[axis]) {
                moved |= Facing3::along(axis, facing);
            }
        }
        moved
    }
}

impl PartialEq for BlockPosSet {
    fn eq(&self, other: &Self) -> bool {
        self.region == other.region && self.points == other.points
    }
}

impl Eq for BlockPosSet {}

/// Iterator over the points of a [`BlockPosSet`].
pub type Iter<'a> = Copied<hash_set::Iter<'a, IVec3>>;

impl<'a> IntoIterator for &'a BlockPosSet {
    type Item = IVec3;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A point was inserted into a [`BlockPosSet`] that lies outside of its [`Region`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error(
    "point {point} lies outside of region {lower}..{upper}",
    lower = self.region.bounds().lower(),
    upper = self.region.bounds().upper()
)]
pub struct OutOfRegion {
    pub point: IVec3,
    pub region: Region,
}

/// Why a [`BlockPosSet`] could not be constructed from a list of points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PointsError {
    #[error(transparent)]
    OutOfRegion(#[from] OutOfRegion),
    #[error("point {0} is listed more than once")]
    Duplicate(IVec3),
}
