//! Placement rules for settlements, roads and cities.
//!
//! Every predicate here is a pure function of the current board. The `check_*`
//! forms say *why* a placement is illegal; the `can_*` forms just answer yes or
//! no.

use crate::board::{Board, Edge, EdgeRoad, Node, NodeBuilding, PlayerId};
use crate::hex::{EdgeId, NodeId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a placement breaks the rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum PlacementViolation {
    #[error("that spot is already built on")]
    Occupied,

    #[error("too close to another settlement")]
    TooClose,

    #[error("not connected to your roads or buildings")]
    NotConnected,

    #[error("only your own settlements can become cities")]
    NotOwnSettlement,

    #[error("setup roads must touch the settlement just placed")]
    NotFromNewSettlement,
}

/// Configurable rule variants
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// After setup, a new settlement must touch one of its owner's roads
    pub settlement_requires_road: bool,
}

impl RuleSet {
    /// The full tabletop rules, with road-connected settlements
    pub const fn standard() -> Self {
        Self {
            settlement_requires_road: true,
        }
    }

    /// Settlement check for `owner` under this rule set
    pub fn check_settlement(
        &self,
        board: &Board,
        node: &Node,
        owner: PlayerId,
    ) -> Result<(), PlacementViolation> {
        check_settlement(board, node)?;
        if self.settlement_requires_road
            && !board
                .edges_of(node)
                .any(|e| e.road() == EdgeRoad::Road(owner))
        {
            return Err(PlacementViolation::NotConnected);
        }
        Ok(())
    }

    /// Every node where `owner` may build a settlement
    pub fn valid_settlement_spots(&self, board: &Board, owner: PlayerId) -> Vec<NodeId> {
        board
            .nodes()
            .filter(|n| self.check_settlement(board, n, owner).is_ok())
            .map(|n| n.id())
            .collect()
    }
}

/// The distance rule: the node is empty and no neighboring node is built
pub fn check_settlement(board: &Board, node: &Node) -> Result<(), PlacementViolation> {
    if !node.building().is_empty() {
        return Err(PlacementViolation::Occupied);
    }
    if board.neighbors_of(node).any(|n| !n.building().is_empty()) {
        return Err(PlacementViolation::TooClose);
    }
    Ok(())
}

pub fn can_place_settlement(board: &Board, node: &Node) -> bool {
    check_settlement(board, node).is_ok()
}

/// The edge is unbuilt and one endpoint holds `owner`'s building or another
/// of `owner`'s roads.
///
/// Only the two endpoints are inspected; a road may start a fresh segment off
/// any of the owner's pieces without a path back to a settlement.
pub fn check_road(board: &Board, edge: &Edge, owner: PlayerId) -> Result<(), PlacementViolation> {
    if edge.road() != EdgeRoad::Empty {
        return Err(PlacementViolation::Occupied);
    }
    let connected = board.endpoints(edge).into_iter().any(|node| {
        node.building().owner() == Some(owner)
            || board
                .edges_of(node)
                .any(|other| other.id() != edge.id() && other.road() == EdgeRoad::Road(owner))
    });
    if connected {
        Ok(())
    } else {
        Err(PlacementViolation::NotConnected)
    }
}

pub fn can_place_road(board: &Board, edge: &Edge, owner: PlayerId) -> bool {
    check_road(board, edge, owner).is_ok()
}

/// The node holds a settlement owned by `owner`
pub fn check_city(node: &Node, owner: PlayerId) -> Result<(), PlacementViolation> {
    match node.building() {
        NodeBuilding::Settlement(p) if p == owner => Ok(()),
        _ => Err(PlacementViolation::NotOwnSettlement),
    }
}

pub fn can_place_city(node: &Node, owner: PlayerId) -> bool {
    check_city(node, owner).is_ok()
}

/// Every edge where `owner` may build a road
pub fn valid_road_spots(board: &Board, owner: PlayerId) -> Vec<EdgeId> {
    board
        .edges()
        .filter(|e| can_place_road(board, e, owner))
        .map(|e| e.id())
        .collect()
}

/// Every settlement `owner` may upgrade
pub fn valid_city_spots(board: &Board, owner: PlayerId) -> Vec<NodeId> {
    board
        .nodes()
        .filter(|n| can_place_city(n, owner))
        .map(|n| n.id())
        .collect()
}
