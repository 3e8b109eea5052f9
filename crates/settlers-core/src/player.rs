//! Player ledger: resources, piece pools and victory points.
//!
//! This module contains:
//! - `ResourceHand` for managing resource counts
//! - `Piece` and the starting piece pool
//! - Building costs
//! - The `Player` ledger entry

use crate::board::{PlayerId, Resource};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A hand of resources
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceHand {
    pub wood: u32,
    pub brick: u32,
    pub wheat: u32,
    pub sheep: u32,
    pub ore: u32,
}

impl ResourceHand {
    /// Create an empty hand
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style: this hand with `amount` more of `resource`
    pub fn with(mut self, resource: Resource, amount: u32) -> Self {
        self.add(resource, amount);
        self
    }

    /// Total number of resource cards
    pub fn total(&self) -> u32 {
        self.wood + self.brick + self.wheat + self.sheep + self.ore
    }

    /// Check if hand is empty
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Get count of a specific resource
    pub fn get(&self, resource: Resource) -> u32 {
        match resource {
            Resource::Wood => self.wood,
            Resource::Brick => self.brick,
            Resource::Wheat => self.wheat,
            Resource::Sheep => self.sheep,
            Resource::Ore => self.ore,
        }
    }

    fn slot(&mut self, resource: Resource) -> &mut u32 {
        match resource {
            Resource::Wood => &mut self.wood,
            Resource::Brick => &mut self.brick,
            Resource::Wheat => &mut self.wheat,
            Resource::Sheep => &mut self.sheep,
            Resource::Ore => &mut self.ore,
        }
    }

    /// Add resources to hand, saturating at `u32::MAX`
    pub fn add(&mut self, resource: Resource, amount: u32) {
        let slot = self.slot(resource);
        *slot = slot.saturating_add(amount);
    }

    /// Add another hand to this one
    pub fn add_hand(&mut self, other: &ResourceHand) {
        for r in Resource::ALL {
            self.add(r, other.get(r));
        }
    }

    /// Check if can afford a cost
    pub fn can_afford(&self, cost: &ResourceHand) -> bool {
        Resource::ALL.iter().all(|&r| self.get(r) >= cost.get(r))
    }

    /// The hand left after paying `cost`, or `None` if any count would go negative
    pub fn checked_sub(&self, cost: &ResourceHand) -> Option<ResourceHand> {
        let mut left = *self;
        for r in Resource::ALL {
            *left.slot(r) = self.get(r).checked_sub(cost.get(r))?;
        }
        Some(left)
    }

    /// Resources this hand lacks to cover `cost`
    pub fn shortfall(&self, cost: &ResourceHand) -> ResourceHand {
        let mut missing = ResourceHand::new();
        for r in Resource::ALL {
            missing.add(r, cost.get(r).saturating_sub(self.get(r)));
        }
        missing
    }

    /// Non-zero entries, in [`Resource::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (Resource, u32)> + '_ {
        Resource::ALL
            .into_iter()
            .map(|r| (r, self.get(r)))
            .filter(|&(_, n)| n > 0)
    }
}

impl fmt::Display for ResourceHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(r, n)| format!("{n} {r:?}")).collect();
        if parts.is_empty() {
            f.write_str("nothing")
        } else {
            f.write_str(&parts.join(", "))
        }
    }
}

/// Building costs
pub mod costs {
    use super::ResourceHand;
    use crate::board::Resource;

    /// Cost to build a road: 1 wood, 1 brick
    pub fn road() -> ResourceHand {
        ResourceHand::new()
            .with(Resource::Wood, 1)
            .with(Resource::Brick, 1)
    }

    /// Cost to build a settlement: 1 wood, 1 brick, 1 wheat, 1 sheep
    pub fn settlement() -> ResourceHand {
        road().with(Resource::Wheat, 1).with(Resource::Sheep, 1)
    }

    /// Cost to upgrade to city: 2 wheat, 3 ore
    pub fn city() -> ResourceHand {
        ResourceHand::new()
            .with(Resource::Wheat, 2)
            .with(Resource::Ore, 3)
    }
}

/// Kinds of piece in a player's pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Piece {
    Road,
    Settlement,
    City,
}

impl Piece {
    /// Size of each player's starting pool
    pub const fn starting_count(self) -> u32 {
        match self {
            Piece::Road => 15,
            Piece::Settlement => 5,
            Piece::City => 4,
        }
    }

    /// Resources needed to build this piece
    pub fn cost(self) -> ResourceHand {
        match self {
            Piece::Road => costs::road(),
            Piece::Settlement => costs::settlement(),
            Piece::City => costs::city(),
        }
    }
}

/// A single player's ledger entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Seat identity
    pub id: PlayerId,
    /// Display name
    pub name: String,
    /// Current resources
    pub resources: ResourceHand,
    /// Number of roads remaining to build
    pub roads_remaining: u32,
    /// Number of settlements remaining to build
    pub settlements_remaining: u32,
    /// Number of cities remaining to build
    pub cities_remaining: u32,
    /// Victory points from buildings on the board
    pub victory_points: u32,
}

impl Player {
    /// Create a new player with full piece pools and no resources
    pub fn new(id: PlayerId, name: String) -> Self {
        Self {
            id,
            name,
            resources: ResourceHand::new(),
            roads_remaining: Piece::Road.starting_count(),
            settlements_remaining: Piece::Settlement.starting_count(),
            cities_remaining: Piece::City.starting_count(),
            victory_points: 0,
        }
    }

    /// Pieces of a kind still in the pool
    pub fn remaining(&self, piece: Piece) -> u32 {
        match piece {
            Piece::Road => self.roads_remaining,
            Piece::Settlement => self.settlements_remaining,
            Piece::City => self.cities_remaining,
        }
    }

    /// Whether the pool and the hand both cover one `piece`
    pub fn can_afford(&self, piece: Piece) -> bool {
        self.remaining(piece) > 0 && self.resources.can_afford(&piece.cost())
    }

    /// Take one piece from the pool and credit its victory point.
    ///
    /// Pools only ever shrink. A city's second point is the only new one since
    /// the settlement it replaces is already counted.
    pub(crate) fn take_piece(&mut self, piece: Piece) {
        match piece {
            Piece::Road => self.roads_remaining -= 1,
            Piece::Settlement => {
                self.settlements_remaining -= 1;
                self.victory_points += 1;
            }
            Piece::City => {
                self.cities_remaining -= 1;
                self.victory_points += 1;
            }
        }
    }
}
