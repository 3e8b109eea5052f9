//! The board graph: tiles, the nodes between them, and the edges between nodes.
//!
//! This module contains:
//! - Terrain and resource kinds
//! - Player identity
//! - The `Board` arena, which owns every `Tile`, `Node` and `Edge`
//! - Query, mutation and production methods over the graph
//!
//! Tiles, nodes and edges live in insertion-ordered vectors and refer to each
//! other through small index handles. Nodes and edges are also indexed by their
//! canonical ids, and adjacency between tiles is never stored explicitly: two
//! tiles are neighbors exactly when they derive coincident node ids.

use crate::hex::{CoordError, CubeCoord, EdgeId, NodeId};
use crate::player::ResourceHand;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use thiserror::Error;

/// Opaque player identity.
///
/// Board state stores `PlayerId`s inside building enums, never raw integers,
/// so an unowned building cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Seat index of this player (0-based)
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Resource cards held by players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Wood,
    Brick,
    Wheat,
    Sheep,
    Ore,
}

impl Resource {
    /// All resource types
    pub const ALL: [Resource; 5] = [
        Resource::Wood,
        Resource::Brick,
        Resource::Wheat,
        Resource::Sheep,
        Resource::Ore,
    ];
}

/// Terrain of a hex tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Terrain {
    Forest,
    Sheep,
    Wheat,
    Brick,
    Ore,
    /// Produces nothing and carries no number
    Desert,
}

impl Terrain {
    /// The resource this terrain produces, if any
    pub fn resource(&self) -> Option<Resource> {
        match self {
            Terrain::Forest => Some(Resource::Wood),
            Terrain::Sheep => Some(Resource::Sheep),
            Terrain::Wheat => Some(Resource::Wheat),
            Terrain::Brick => Some(Resource::Brick),
            Terrain::Ore => Some(Resource::Ore),
            Terrain::Desert => None,
        }
    }
}

/// Errors raised by graph construction and lookup
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum BoardError {
    #[error(transparent)]
    InvalidCoordinate(#[from] CoordError),

    #[error("a tile already occupies {0}")]
    DuplicateTile(CubeCoord),

    #[error("tile {coord} cannot carry production number {number:?}")]
    InvalidNumber { coord: CubeCoord, number: Option<u8> },

    #[error("no tile at {0}")]
    TileNotFound(CubeCoord),

    #[error("no node at {0}")]
    NodeNotFound(NodeId),

    #[error("no edge {0}")]
    EdgeNotFound(EdgeId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct TileHandle(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeHandle(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct EdgeHandle(usize);

/// What's built on a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum NodeBuilding {
    /// Nothing built
    #[default]
    Empty,
    /// Settlement (1 VP, 1 resource per adjacent tile)
    Settlement(PlayerId),
    /// City (2 VP, 2 resources per adjacent tile)
    City(PlayerId),
}

impl NodeBuilding {
    /// Get the owner of this building, if any
    pub fn owner(&self) -> Option<PlayerId> {
        match self {
            NodeBuilding::Empty => None,
            NodeBuilding::Settlement(p) | NodeBuilding::City(p) => Some(*p),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, NodeBuilding::Empty)
    }

    /// Victory points provided by this building
    pub fn victory_points(&self) -> u32 {
        match self {
            NodeBuilding::Empty => 0,
            NodeBuilding::Settlement(_) => 1,
            NodeBuilding::City(_) => 2,
        }
    }

    /// Resource multiplier (how many resources per production)
    pub fn resource_multiplier(&self) -> u32 {
        self.victory_points()
    }
}

/// What's built on an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EdgeRoad {
    #[default]
    Empty,
    Road(PlayerId),
}

impl EdgeRoad {
    /// Get the owner of this road, if any
    pub fn owner(&self) -> Option<PlayerId> {
        match self {
            EdgeRoad::Empty => None,
            EdgeRoad::Road(p) => Some(*p),
        }
    }
}

/// A single hex tile
#[derive(Debug, Clone)]
pub struct Tile {
    coord: CubeCoord,
    terrain: Terrain,
    number: Option<u8>,
    nodes: [NodeHandle; 6],
    edges: [EdgeHandle; 6],
}

impl Tile {
    pub fn coord(&self) -> CubeCoord {
        self.coord
    }

    pub fn terrain(&self) -> Terrain {
        self.terrain
    }

    /// Dice number that triggers production (`None` for the desert)
    pub fn number(&self) -> Option<u8> {
        self.number
    }
}

/// A vertex where one to three tiles meet
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    tiles: Vec<TileHandle>,
    edges: Vec<EdgeHandle>,
    building: NodeBuilding,
}

impl Node {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn building(&self) -> NodeBuilding {
        self.building
    }

    /// Number of tiles on the board touching this node
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Number of edges on the board ending at this node
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// A road slot between two adjacent nodes
#[derive(Debug, Clone)]
pub struct Edge {
    id: EdgeId,
    nodes: [NodeHandle; 2],
    tiles: Vec<TileHandle>,
    road: EdgeRoad,
}

impl Edge {
    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn road(&self) -> EdgeRoad {
        self.road
    }

    /// Number of tiles on the board bordering this edge (1 on the coast)
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }
}

/// The board graph
#[derive(Debug, Clone, Default)]
pub struct Board {
    tiles: Vec<Tile>,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    tile_index: HashMap<CubeCoord, TileHandle>,
    node_index: HashMap<NodeId, NodeHandle>,
    edge_index: HashMap<EdgeId, EdgeHandle>,
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Construction ====================

    /// Insert a tile and get-or-create the nodes and edges around it.
    ///
    /// Fails without touching the graph if the coordinate is occupied or the
    /// number does not fit the terrain (desert takes `None`, everything else a
    /// number in 2..=12).
    pub fn add_tile(
        &mut self,
        coord: CubeCoord,
        terrain: Terrain,
        number: Option<u8>,
    ) -> Result<&Tile, BoardError> {
        if self.tile_index.contains_key(&coord) {
            return Err(BoardError::DuplicateTile(coord));
        }
        let number_fits = match (terrain, number) {
            (Terrain::Desert, None) => true,
            (Terrain::Desert, Some(_)) | (_, None) => false,
            (_, Some(n)) => (2..=12).contains(&n),
        };
        if !number_fits {
            return Err(BoardError::InvalidNumber { coord, number });
        }

        let handle = TileHandle(self.tiles.len());

        let nodes = coord.vertex_ids().map(|id| self.node_or_insert(id));
        for node in nodes {
            self.nodes[node.0].tiles.push(handle);
        }

        let edges: [EdgeHandle; 6] =
            std::array::from_fn(|i| self.edge_or_insert(nodes[i], nodes[(i + 1) % 6]));
        for edge in edges {
            self.edges[edge.0].tiles.push(handle);
        }

        self.tiles.push(Tile {
            coord,
            terrain,
            number,
            nodes,
            edges,
        });
        self.tile_index.insert(coord, handle);
        Ok(&self.tiles[handle.0])
    }

    fn node_or_insert(&mut self, id: NodeId) -> NodeHandle {
        if let Some(&handle) = self.node_index.get(&id) {
            return handle;
        }
        let handle = NodeHandle(self.nodes.len());
        self.nodes.push(Node {
            id,
            tiles: Vec::with_capacity(3),
            edges: Vec::with_capacity(3),
            building: NodeBuilding::Empty,
        });
        self.node_index.insert(id, handle);
        handle
    }

    fn edge_or_insert(&mut self, a: NodeHandle, b: NodeHandle) -> EdgeHandle {
        let id = EdgeId::new(self.nodes[a.0].id, self.nodes[b.0].id);
        if let Some(&handle) = self.edge_index.get(&id) {
            return handle;
        }
        let handle = EdgeHandle(self.edges.len());
        self.edges.push(Edge {
            id,
            nodes: [a, b],
            tiles: Vec::with_capacity(2),
            road: EdgeRoad::Empty,
        });
        self.nodes[a.0].edges.push(handle);
        self.nodes[b.0].edges.push(handle);
        self.edge_index.insert(id, handle);
        handle
    }

    // ==================== Lookups ====================

    pub fn tile_at(&self, coord: CubeCoord) -> Result<&Tile, BoardError> {
        self.tile_index
            .get(&coord)
            .map(|h| &self.tiles[h.0])
            .ok_or(BoardError::TileNotFound(coord))
    }

    pub fn node_at(&self, id: NodeId) -> Result<&Node, BoardError> {
        self.node_handle(id).map(|h| &self.nodes[h.0])
    }

    pub fn edge_at(&self, id: EdgeId) -> Result<&Edge, BoardError> {
        self.edge_handle(id).map(|h| &self.edges[h.0])
    }

    pub(crate) fn node_handle(&self, id: NodeId) -> Result<NodeHandle, BoardError> {
        self.node_index
            .get(&id)
            .copied()
            .ok_or(BoardError::NodeNotFound(id))
    }

    pub(crate) fn edge_handle(&self, id: EdgeId) -> Result<EdgeHandle, BoardError> {
        self.edge_index
            .get(&id)
            .copied()
            .ok_or(BoardError::EdgeNotFound(id))
    }

    /// All tiles in insertion order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// All nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// All edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    // ==================== Graph Navigation ====================

    /// The six nodes around a tile, in vertex order
    pub fn nodes_of_tile<'a>(&'a self, tile: &'a Tile) -> impl Iterator<Item = &'a Node> + 'a {
        tile.nodes.iter().map(move |h| &self.nodes[h.0])
    }

    /// The six edges around a tile, in vertex order
    pub fn edges_of_tile<'a>(&'a self, tile: &'a Tile) -> impl Iterator<Item = &'a Edge> + 'a {
        tile.edges.iter().map(move |h| &self.edges[h.0])
    }

    /// Tiles touching a node
    pub fn tiles_of<'a>(&'a self, node: &'a Node) -> impl Iterator<Item = &'a Tile> + 'a {
        node.tiles.iter().map(move |h| &self.tiles[h.0])
    }

    /// Edges ending at a node
    pub fn edges_of<'a>(&'a self, node: &'a Node) -> impl Iterator<Item = &'a Edge> + 'a {
        node.edges.iter().map(move |h| &self.edges[h.0])
    }

    /// Tiles bordering an edge
    pub fn tiles_of_edge<'a>(&'a self, edge: &'a Edge) -> impl Iterator<Item = &'a Tile> + 'a {
        edge.tiles.iter().map(move |h| &self.tiles[h.0])
    }

    /// Both endpoint nodes of an edge
    pub fn endpoints<'a>(&'a self, edge: &'a Edge) -> [&'a Node; 2] {
        edge.nodes.map(|h| &self.nodes[h.0])
    }

    /// Nodes exactly one edge away from `node`
    pub fn neighbors_of<'a>(&'a self, node: &'a Node) -> impl Iterator<Item = &'a Node> + 'a {
        let here = node.id;
        self.edges_of(node).filter_map(move |edge| {
            let [a, b] = self.endpoints(edge);
            if a.id == here {
                Some(b)
            } else if b.id == here {
                Some(a)
            } else {
                None
            }
        })
    }

    /// Nodes holding a building owned by `player`
    pub fn player_buildings(&self, player: PlayerId) -> impl Iterator<Item = &Node> {
        self.nodes
            .iter()
            .filter(move |n| n.building.owner() == Some(player))
    }

    /// Edges holding a road owned by `player`
    pub fn player_roads(&self, player: PlayerId) -> impl Iterator<Item = &Edge> {
        self.edges
            .iter()
            .filter(move |e| e.road == EdgeRoad::Road(player))
    }

    // ==================== Mutation Methods ====================

    /// Place a settlement (assumes validation already done)
    pub(crate) fn place_settlement(&mut self, node: NodeHandle, player: PlayerId) {
        self.nodes[node.0].building = NodeBuilding::Settlement(player);
    }

    /// Upgrade a settlement to a city
    pub(crate) fn upgrade_to_city(&mut self, node: NodeHandle, player: PlayerId) {
        self.nodes[node.0].building = NodeBuilding::City(player);
    }

    /// Place a road
    pub(crate) fn place_road(&mut self, edge: EdgeHandle, player: PlayerId) {
        self.edges[edge.0].road = EdgeRoad::Road(player);
    }

    pub(crate) fn node(&self, handle: NodeHandle) -> &Node {
        &self.nodes[handle.0]
    }

    pub(crate) fn edge(&self, handle: EdgeHandle) -> &Edge {
        &self.edges[handle.0]
    }

    // ==================== Resource Production ====================

    /// Resources produced for a dice total, per receiving player
    pub fn production_for_roll(&self, roll: u8) -> BTreeMap<PlayerId, ResourceHand> {
        let mut distribution: BTreeMap<PlayerId, ResourceHand> = BTreeMap::new();

        for tile in &self.tiles {
            if tile.number != Some(roll) {
                continue;
            }
            let Some(resource) = tile.terrain.resource() else {
                continue;
            };
            for node in self.nodes_of_tile(tile) {
                if let Some(owner) = node.building.owner() {
                    distribution
                        .entry(owner)
                        .or_default()
                        .add(resource, node.building.resource_multiplier());
                }
            }
        }

        distribution
    }

    // ==================== Longest Road Calculation ====================

    /// Length of the longest simple path through `player`'s roads.
    ///
    /// A path may not continue through a node holding another player's building.
    pub fn longest_road(&self, player: PlayerId) -> u32 {
        let mut visited = HashSet::new();
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, e)| e.road == EdgeRoad::Road(player))
            .map(|(i, _)| self.dfs_road_length(player, EdgeHandle(i), None, &mut visited))
            .max()
            .unwrap_or(0)
    }

    fn dfs_road_length(
        &self,
        player: PlayerId,
        current: EdgeHandle,
        entered_from: Option<NodeHandle>,
        visited: &mut HashSet<EdgeHandle>,
    ) -> u32 {
        if !visited.insert(current) {
            return 0;
        }

        let mut max_continuation = 0;
        for endpoint in self.edges[current.0].nodes {
            if Some(endpoint) == entered_from {
                continue;
            }
            let node = &self.nodes[endpoint.0];
            if node.building.owner().is_some_and(|o| o != player) {
                continue;
            }
            for &next in &node.edges {
                if next != current && self.edges[next.0].road == EdgeRoad::Road(player) {
                    let len = self.dfs_road_length(player, next, Some(endpoint), visited);
                    max_continuation = max_continuation.max(len);
                }
            }
        }

        visited.remove(&current);
        1 + max_continuation
    }
}
