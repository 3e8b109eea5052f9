//! Serializable snapshots for rendering.
//!
//! The board itself is a handle-linked arena and is not meant to cross a
//! process or language boundary. These views flatten it into plain arrays of
//! ids and occupancy that serialize cleanly to JSON.

use crate::board::{Board, EdgeRoad, NodeBuilding, PlayerId, Terrain};
use crate::game::{GamePhase, GameSession};
use crate::hex::{CubeCoord, EdgeId, NodeId};
use crate::player::Player;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileView {
    pub coord: CubeCoord,
    pub terrain: Terrain,
    pub number: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeView {
    pub id: NodeId,
    pub tiles: Vec<CubeCoord>,
    pub building: NodeBuilding,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeView {
    pub id: EdgeId,
    pub road: EdgeRoad,
}

/// Every tile, node and edge with current occupancy, in insertion order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub tiles: Vec<TileView>,
    pub nodes: Vec<NodeView>,
    pub edges: Vec<EdgeView>,
}

/// Board plus ledger and turn state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionView {
    pub board: BoardView,
    pub players: Vec<Player>,
    pub current_player: PlayerId,
    pub phase: GamePhase,
    pub turn_number: u32,
}

impl Board {
    pub fn view(&self) -> BoardView {
        BoardView {
            tiles: self
                .tiles()
                .map(|t| TileView {
                    coord: t.coord(),
                    terrain: t.terrain(),
                    number: t.number(),
                })
                .collect(),
            nodes: self
                .nodes()
                .map(|n| NodeView {
                    id: n.id(),
                    tiles: self.tiles_of(n).map(|t| t.coord()).collect(),
                    building: n.building(),
                })
                .collect(),
            edges: self
                .edges()
                .map(|e| EdgeView {
                    id: e.id(),
                    road: e.road(),
                })
                .collect(),
        }
    }
}

impl GameSession {
    pub fn view(&self) -> SessionView {
        SessionView {
            board: self.board().view(),
            players: self.players().to_vec(),
            current_player: self.current_player(),
            phase: self.phase(),
            turn_number: self.turn_number(),
        }
    }
}
