use glam::IVec3;
use itertools::Itertools;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::{region::Region, BlockPosSet};

/// The serialized form of a [`BlockPosSet`].
///
/// The per-axis histograms are not part of it; they are rebuilt from `points`.
#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct BlockPosSetDef {
    region: Region,
    points: Vec<IVec3>,
}

impl Serialize for BlockPosSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        BlockPosSetDef {
            region: self.region,
            points: self
                .iter()
                .sorted_unstable_by_key(|point| point.to_array())
                .collect(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BlockPosSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let BlockPosSetDef { region, points } = BlockPosSetDef::deserialize(deserializer)?;
        Self::try_from_points(region, points).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use glam::UVec3;

    use super::*;

    /// Scatters points around a random center near the limits of the i32 range.
    fn scattered_set(rng: &mut fastrand::Rng) -> BlockPosSet {
        let center = IVec3::new(
            rng.i32(i32::MIN + 2048..=i32::MAX - 2048),
            0,
            rng.i32(i32::MIN + 2048..=i32::MAX - 2048),
        );
        let mut set = BlockPosSet::new(center, UVec3::splat(4096));
        for _ in 0..500 {
            set.insert(IVec3::new(
                center.x + rng.i32(-2048..2047),
                rng.i32(0..255),
                center.z + rng.i32(-2048..2047),
            ));
        }
        set
    }

    #[test]
    fn json_round_trip() {
        let mut rng = fastrand::Rng::with_seed(0x5eed);
        for _ in 0..25 {
            let set = scattered_set(&mut rng);
            let bytes = serde_json::to_vec(&set).unwrap();
            let deserialized = serde_json::from_slice::<BlockPosSet>(&bytes).unwrap();
            assert_eq!(deserialized, set);
            assert_eq!(deserialized.make_aabb(), set.make_aabb());
        }
    }

    #[test]
    fn bincode_round_trip() {
        let mut rng = fastrand::Rng::with_seed(17);
        let set = scattered_set(&mut rng);
        let bytes = bincode::serialize(&set).unwrap();
        let deserialized = bincode::deserialize::<BlockPosSet>(&bytes).unwrap();
        assert_eq!(deserialized, set);
        assert_eq!(deserialized.make_aabb(), set.make_aabb());
    }

    #[test]
    fn empty_round_trip() {
        let set = BlockPosSet::new(IVec3::new(-9, 9, 0), UVec3::new(2, 4, 8));
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(
            json,
            r#"{"region":{"center":[-9,9,0],"size":[2,4,8]},"points":[]}"#
        );
        let deserialized = serde_json::from_str::<BlockPosSet>(&json).unwrap();
        assert_eq!(deserialized, set);
        assert_eq!(deserialized.make_aabb(), None);
    }

    #[test]
    fn points_are_sorted() {
        let mut set = BlockPosSet::new(IVec3::ZERO, UVec3::splat(16));
        for point in [[3, 0, 0], [-1, 2, 7], [-1, 2, -7], [0, -8, 1]] {
            set.insert(point);
        }
        assert_eq!(
            serde_json::to_string(&set).unwrap(),
            r#"{"region":{"center":[0,0,0],"size":[16,16,16]},"points":[[-1,2,-7],[-1,2,7],[0,-8,1],[3,0,0]]}"#
        );
    }

    #[test]
    fn rejects_point_outside_of_region() {
        let error = serde_json::from_str::<BlockPosSet>(
            r#"{"region":{"center":[0,0,0],"size":[4,4,4]},"points":[[1,1,1],[0,2,0]]}"#,
        )
        .unwrap_err();
        assert!(error.to_string().contains("lies outside of region"));
    }

    #[test]
    fn rejects_duplicate_point() {
        let error = serde_json::from_str::<BlockPosSet>(
            r#"{"region":{"center":[0,0,0],"size":[4,4,4]},"points":[[1,1,1],[1,1,1]]}"#,
        )
        .unwrap_err();
        assert!(error.to_string().contains("listed more than once"));
    }

    #[test]
    fn rejects_malformed_input() {
        let invalid_region = r#"{"region":{"center":[0,0,0],"size":[0,4,4]},"points":[]}"#;
        assert!(serde_json::from_str::<BlockPosSet>(invalid_region).is_err());

        let missing_points = r#"{"region":{"center":[0,0,0],"size":[4,4,4]}}"#;
        assert!(serde_json::from_str::<BlockPosSet>(missing_points).is_err());

        let short_point = r#"{"region":{"center":[0,0,0],"size":[4,4,4]},"points":[[1,1]]}"#;
        assert!(serde_json::from_str::<BlockPosSet>(short_point).is_err());

        let unknown_field =
            r#"{"region":{"center":[0,0,0],"size":[4,4,4]},"points":[],"histogram":[]}"#;
        assert!(serde_json::from_str::<BlockPosSet>(unknown_field).is_err());
    }
}
