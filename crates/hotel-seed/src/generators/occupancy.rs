//! Random room occupancy.

use rand::Rng;
use rand::seq::SliceRandom;

/// Seed used when none is given, so repeated runs produce the same layout.
pub const DEFAULT_OCCUPANCY_SEED: u64 = 12345;

/// Generator that marks a random subset of rooms as occupied.
#[derive(Debug, Clone, Copy, Default)]
pub struct OccupancyGenerator;

impl OccupancyGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Picks between 1 and `room_ids.len()` distinct rooms to occupy.
    ///
    /// Returns the chosen ids in ascending order, or nothing when there are
    /// no rooms.
    pub fn pick_occupied(&self, room_ids: &[i32], rng: &mut impl Rng) -> Vec<i32> {
        if room_ids.is_empty() {
            return Vec::new();
        }

        let count = rng.gen_range(1..=room_ids.len());
        let mut picked: Vec<i32> = room_ids.choose_multiple(rng, count).copied().collect();
        picked.sort_unstable();
        picked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn room_ids() -> Vec<i32> {
        (1..=97).collect()
    }

    #[test]
    fn test_pick_within_bounds() {
        let occupancy = OccupancyGenerator::new();
        let ids = room_ids();

        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = occupancy.pick_occupied(&ids, &mut rng);

            assert!(!picked.is_empty());
            assert!(picked.len() <= ids.len());
            assert!(picked.iter().all(|id| ids.contains(id)));

            let unique: HashSet<i32> = picked.iter().copied().collect();
            assert_eq!(unique.len(), picked.len());
            assert!(picked.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_same_seed_same_rooms() {
        let occupancy = OccupancyGenerator::new();
        let ids = room_ids();

        let first = occupancy.pick_occupied(&ids, &mut StdRng::seed_from_u64(DEFAULT_OCCUPANCY_SEED));
        let second = occupancy.pick_occupied(&ids, &mut StdRng::seed_from_u64(DEFAULT_OCCUPANCY_SEED));

        assert_eq!(first, second);
    }

    #[test]
    fn test_seeds_vary_count() {
        let occupancy = OccupancyGenerator::new();
        let ids = room_ids();

        let counts: HashSet<usize> = (0..50)
            .map(|seed| {
                occupancy
                    .pick_occupied(&ids, &mut StdRng::seed_from_u64(seed))
                    .len()
            })
            .collect();

        assert!(counts.len() > 1);
    }

    #[test]
    fn test_no_rooms() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(OccupancyGenerator::new().pick_occupied(&[], &mut rng).is_empty());
    }

    #[test]
    fn test_single_room_always_picked() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(OccupancyGenerator::new().pick_occupied(&[42], &mut rng), vec![42]);
    }
}
