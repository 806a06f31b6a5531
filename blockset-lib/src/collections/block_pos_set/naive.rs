use glam::IVec3;
use itertools::Itertools;

use crate::math::{axis::Axis3, bounds::IBounds3};

/// Stores points in a plain list and scans all of them to create a bounding box.
///
/// Only used to check [`BlockPosSet`](super::BlockPosSet) against.
#[derive(Debug, Default)]
pub struct NaiveAabbMaker {
    points: Vec<IVec3>,
}

impl NaiveAabbMaker {
    pub fn add(&mut self, point: IVec3) -> bool {
        if self.points.contains(&point) {
            false
        } else {
            self.points.push(point);
            true
        }
    }

    pub fn remove(&mut self, point: IVec3) -> bool {
        if let Some(index) = self.points.iter().position(|&other| other == point) {
            self.points.swap_remove(index);
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn make_aabb(&self) -> Option<IBounds3> {
        let mut lower = IVec3::ZERO;
        let mut upper = IVec3::ZERO;
        for axis in Axis3::ALL {
            let (min, max) = self
                .points
                .iter()
                .map(|point| point[axis])
                .minmax()
                .into_option()?;
            lower[axis] = min;
            upper[axis] = max + 1;
        }
        Some(IBounds3::new(lower, upper))
    }
}
