use log::trace;

use crate::math::axis::{Facing1, Facings1};

/// Tracks the tightest occupied range along a single axis.
///
/// Keeps a histogram with one count per coordinate of the tracked range, holding the number of
/// points that currently share that coordinate. The lowest and highest non-zero slot are cached,
/// so [`Self::range`] never has to look at the histogram.
///
/// Adding a point is always `O(1)`. Removing a point is `O(1)` unless it was the last point on the
/// lowest or highest occupied coordinate, in which case the histogram is scanned inwards until the
/// next occupied slot is found.
///
/// Memory usage is linear in the size of the tracked range, independent of the number of points.
#[derive(Clone, Debug)]
pub struct AxisExtentTracker {
    /// The coordinate corresponding to the first slot of [`Self::histogram`].
    lower: i32,
    /// Number of points per coordinate, offset by [`Self::lower`].
    histogram: Vec<u32>,
    /// The lowest and highest non-zero slot of [`Self::histogram`].
    ///
    /// [`None`] if and only if all slots are zero.
    extremes: Option<(usize, usize)>,
}

impl AxisExtentTracker {
    /// Constructs an empty [`AxisExtentTracker`] for the `size` coordinates starting at `lower`.
    pub fn new(lower: i32, size: u32) -> Self {
        Self {
            lower,
            histogram: vec![0; size as usize],
            extremes: None,
        }
    }

    /// Records a point at `coord`.
    ///
    /// Returns the ends of the occupied range that moved outwards. Both ends move when the tracker
    /// was empty before.
    ///
    /// # Panics
    ///
    /// Panics if `coord` lies outside of the tracked range.
    pub fn point_added(&mut self, coord: i32) -> Facings1 {
        let index = self.index(coord);
        self.histogram[index] += 1;

        let Some((min, max)) = self.extremes else {
            self.extremes = Some((index, index));
            return Facings1::all();
        };

        let mut moved = Facings1::empty();
        if index < min {
            moved |= Facing1::X0;
        }
        if index > max {
            moved |= Facing1::X1;
        }
        self.extremes = Some((min.min(index), max.max(index)));
        moved
    }

    /// Forgets a point at `coord` that was previously recorded using [`Self::point_added`].
    ///
    /// Returns the ends of the occupied range that moved inwards. Both ends move when the tracker
    /// becomes empty.
    ///
    /// # Panics
    ///
    /// Panics if no point is recorded at `coord`.
    pub fn point_removed(&mut self, coord: i32) -> Facings1 {
        let index = self.index(coord);
        let count = &mut self.histogram[index];
        *count = count.checked_sub(1).expect(NOT_OCCUPIED_ERROR);
        if *count != 0 {
            return Facings1::empty();
        }

        let (min, max) = self.extremes.expect(NOT_OCCUPIED_ERROR);
        if min == max {
            self.extremes = None;
            return Facings1::all();
        }

        // min and max differ, so the opposite extreme is still occupied and bounds the scan
        if index == min {
            let new_min = (index + 1..=max)
                .find(|&slot| self.histogram[slot] != 0)
                .expect(OCCUPIED_EXTREME_ERROR);
            trace!("lower extreme vacated, skipped {} empty slots", new_min - index - 1);
            self.extremes = Some((new_min, max));
            Facings1::only(Facing1::X0)
        } else if index == max {
            let new_max = (min..index)
                .rev()
                .find(|&slot| self.histogram[slot] != 0)
                .expect(OCCUPIED_EXTREME_ERROR);
            trace!("upper extreme vacated, skipped {} empty slots", index - new_max - 1);
            self.extremes = Some((min, new_max));
            Facings1::only(Facing1::X1)
        } else {
            Facings1::empty()
        }
    }

    /// The lowest and highest coordinate that holds at least one point.
    ///
    /// Returns [`None`] if no points are recorded.
    pub fn range(&self) -> Option<(i32, i32)> {
        self.extremes.map(|(min, max)| (self.coord(min), self.coord(max)))
    }

    /// The number of points recorded at `coord`.
    ///
    /// Coordinates outside of the tracked range hold no points.
    pub fn count(&self, coord: i32) -> u32 {
        self.checked_index(coord).map_or(0, |index| self.histogram[index])
    }

    /// The number of points recorded across all coordinates.
    pub fn total(&self) -> u64 {
        self.histogram.iter().map(|&count| u64::from(count)).sum()
    }

    /// Forgets all recorded points.
    pub fn clear(&mut self) {
        self.histogram.fill(0);
        self.extremes = None;
    }

    fn checked_index(&self, coord: i32) -> Option<usize> {
        let offset = i64::from(coord) - i64::from(self.lower);
        usize::try_from(offset)
            .ok()
            .filter(|&index| index < self.histogram.len())
    }

    fn index(&self, coord: i32) -> usize {
        self.checked_index(coord).expect(OUT_OF_RANGE_ERROR)
    }

    fn coord(&self, index: usize) -> i32 {
        // index is always within the histogram, which never exceeds the i32 range
        (i64::from(self.lower) + index as i64) as i32
    }
}

const OUT_OF_RANGE_ERROR: &str = "coordinate should be within the tracked range";
const NOT_OCCUPIED_ERROR: &str = "removed coordinate should hold at least one point";
const OCCUPIED_EXTREME_ERROR: &str = "opposite extreme should still be occupied";
