//! Commands a collaborator can issue and the events they produce.
//!
//! Both enums are serde-tagged so that a presentation layer (terminal driver,
//! browser front end) can exchange them as JSON.

use crate::board::{PlayerId, Resource};
use crate::hex::{EdgeId, NodeId};
use serde::{Deserialize, Serialize};

/// A player command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum Command {
    /// Free settlement during the setup round
    PlaceInitialSettlement(NodeId),
    /// Free road during the setup round, touching the settlement just placed
    PlaceInitialRoad(EdgeId),
    /// Roll the dice and produce resources
    RollDice,
    BuildRoad(EdgeId),
    BuildSettlement(NodeId),
    /// Upgrade one of your settlements
    BuildCity(NodeId),
    /// Pass play to the next player
    EndTurn,
}

/// Something that happened as a result of a command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Dice were rolled
    DiceRolled {
        player: PlayerId,
        roll: (u8, u8),
        total: u8,
    },

    /// Resources were produced after a dice roll or setup placement
    ResourcesDistributed {
        distributions: Vec<(PlayerId, Resource, u32)>,
    },

    SettlementBuilt { player: PlayerId, node: NodeId },

    CityBuilt { player: PlayerId, node: NodeId },

    RoadBuilt { player: PlayerId, edge: EdgeId },

    /// The setup round finished and normal play begins
    SetupCompleted { first_player: PlayerId },

    TurnEnded {
        player: PlayerId,
        next_player: PlayerId,
    },

    /// A player reached the victory point target
    GameWon {
        player: PlayerId,
        victory_points: u32,
    },
}
