//! Standard 19-tile board generation.

use crate::board::{Board, Terrain};
use crate::hex::CubeCoord;
use rand::seq::SliceRandom;
use rand::Rng;

/// The 19 land hexes, ring by ring; the first entry is the desert center.
const STANDARD_LAYOUT: [(i32, i32, i32); 19] = [
    // Center
    (0, 0, 0),
    // Ring 1
    (1, -1, 0),
    (1, 0, -1),
    (0, 1, -1),
    (-1, 1, 0),
    (-1, 0, 1),
    (0, -1, 1),
    // Ring 2
    (2, -2, 0),
    (2, -1, -1),
    (2, 0, -2),
    (1, 1, -2),
    (0, 2, -2),
    (-1, 2, -1),
    (-2, 2, 0),
    (-2, 1, 1),
    (-2, 0, 2),
    (-1, -1, 2),
    (0, -2, 2),
    (1, -2, 1),
];

/// Producing terrain for the 18 outer tiles
const TERRAIN_POOL: [(Terrain, usize); 5] = [
    (Terrain::Forest, 4),
    (Terrain::Sheep, 4),
    (Terrain::Wheat, 4),
    (Terrain::Brick, 3),
    (Terrain::Ore, 3),
];

/// Number tokens for the 18 producing tiles
pub const NUMBER_TOKENS: [u8; 18] = [2, 3, 3, 4, 4, 5, 5, 6, 6, 8, 8, 9, 9, 10, 10, 11, 11, 12];

/// Coordinates of the standard layout, center first
pub fn standard_coords() -> impl Iterator<Item = CubeCoord> {
    STANDARD_LAYOUT
        .iter()
        .filter_map(|&(x, y, z)| CubeCoord::new(x, y, z).ok())
}

/// Create the standard board with randomized terrain and numbers
pub fn generate_standard_board() -> Board {
    Board::standard_with_rng(&mut rand::thread_rng())
}

impl Board {
    /// Create the standard board layout with a provided RNG.
    ///
    /// The center is always the desert. Terrain and numbers are shuffled
    /// independently and assigned without any "no adjacent 6 and 8" balancing.
    pub fn standard_with_rng<R: Rng>(rng: &mut R) -> Self {
        let mut terrain: Vec<Terrain> = TERRAIN_POOL
            .iter()
            .flat_map(|&(t, count)| std::iter::repeat(t).take(count))
            .collect();
        terrain.shuffle(rng);

        let mut numbers = NUMBER_TOKENS.to_vec();
        numbers.shuffle(rng);

        let mut board = Self::new();
        let mut coords = standard_coords();
        let mut place = |coord, terrain, number| {
            board
                .add_tile(coord, terrain, number)
                .expect("standard layout coordinates are distinct and every token is 2..=12");
        };

        if let Some(center) = coords.next() {
            place(center, Terrain::Desert, None);
        }
        for ((coord, terrain), number) in coords.zip(terrain).zip(numbers) {
            place(coord, terrain, Some(number));
        }

        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Resource;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::BTreeMap;

    #[test]
    fn test_layout_is_radius_two() {
        let coords: Vec<_> = standard_coords().collect();
        assert_eq!(coords.len(), 19);
        assert!(coords.iter().all(|c| c.distance_to(&CubeCoord::ORIGIN) <= 2));
        let unique: std::collections::HashSet<_> = coords.iter().copied().collect();
        assert_eq!(unique.len(), 19);

        let rings: std::collections::HashSet<_> = (0..=2)
            .flat_map(|r| CubeCoord::ORIGIN.ring(r))
            .collect();
        assert_eq!(unique, rings);
    }

    #[test]
    fn test_standard_board_has_19_tiles() {
        let board = generate_standard_board();
        assert_eq!(board.tile_count(), 19);
        assert_eq!(board.node_count(), 54);
        assert_eq!(board.edge_count(), 72);
    }

    #[test]
    fn test_desert_is_center_without_number() {
        for seed in 0..10 {
            let board = Board::standard_with_rng(&mut StdRng::seed_from_u64(seed));
            let deserts: Vec<_> = board
                .tiles()
                .filter(|t| t.terrain() == Terrain::Desert)
                .collect();
            assert_eq!(deserts.len(), 1);
            assert_eq!(deserts[0].coord(), CubeCoord::ORIGIN);
            assert_eq!(deserts[0].number(), None);
        }
    }

    #[test]
    fn test_standard_board_has_correct_resource_counts() {
        let board = generate_standard_board();
        let mut counts: BTreeMap<Resource, usize> = BTreeMap::new();
        for tile in board.tiles() {
            if let Some(r) = tile.terrain().resource() {
                *counts.entry(r).or_default() += 1;
            }
        }
        assert_eq!(counts[&Resource::Wood], 4);
        assert_eq!(counts[&Resource::Sheep], 4);
        assert_eq!(counts[&Resource::Wheat], 4);
        assert_eq!(counts[&Resource::Brick], 3);
        assert_eq!(counts[&Resource::Ore], 3);
    }

    #[test]
    fn test_standard_board_has_correct_number_distribution() {
        let board = generate_standard_board();
        let mut numbers: Vec<u8> = board.tiles().filter_map(|t| t.number()).collect();
        numbers.sort_unstable();
        assert_eq!(numbers, NUMBER_TOKENS.to_vec());
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let describe = |board: &Board| -> Vec<(CubeCoord, Terrain, Option<u8>)> {
            board
                .tiles()
                .map(|t| (t.coord(), t.terrain(), t.number()))
                .collect()
        };
        let a = Board::standard_with_rng(&mut StdRng::seed_from_u64(7));
        let b = Board::standard_with_rng(&mut StdRng::seed_from_u64(7));
        assert_eq!(describe(&a), describe(&b));
    }

    #[test]
    fn test_board_randomization_produces_different_boards() {
        let terrain_of = |seed| -> Vec<Terrain> {
            Board::standard_with_rng(&mut StdRng::seed_from_u64(seed))
                .tiles()
                .map(|t| t.terrain())
                .collect()
        };
        let first = terrain_of(0);
        assert!(
            (1..20).any(|seed| terrain_of(seed) != first),
            "twenty seeds should not all shuffle identically"
        );
    }

    #[test]
    fn test_standard_graph_degrees() {
        let board = generate_standard_board();
        for node in board.nodes() {
            assert!((1..=3).contains(&node.tile_count()));
            assert!((2..=3).contains(&node.edge_count()));
        }
        let interior = board.nodes().filter(|n| n.tile_count() == 3).count();
        assert_eq!(interior, 24);
    }
}
