//! Coders of Catan - board graph and rules engine
//!
//! This crate provides the core game logic, including:
//! - Cubic hex coordinates and derived vertex/edge identities
//! - The board graph of tiles, nodes and edges, with shared-vertex deduplication
//! - Standard 19-tile board generation
//! - Settlement, road and city placement rules
//! - Player ledgers and atomic build transactions
//!
//! # Architecture
//!
//! The engine is synchronous and never logs. A presentation layer drives it
//! through [`GameSession`], reading [`view::SessionView`] snapshots and issuing
//! [`Command`]s. It can be compiled to:
//! - Native Rust, hosted by `settlers-host`
//! - WebAssembly (the `wasm` feature) for a browser front end
//!
//! # Modules
//!
//! - [`hex`]: Cubic coordinates, node ids and edge ids
//! - [`board`]: The board graph arena
//! - [`generator`]: Standard board layout
//! - [`rules`]: Placement predicates
//! - [`player`]: Resources, costs and piece pools
//! - [`game`]: Session context and build transactions
//! - [`actions`]: Commands and events
//! - [`view`]: Serializable snapshots

pub mod actions;
pub mod board;
pub mod game;
pub mod generator;
pub mod hex;
pub mod player;
pub mod rules;
pub mod view;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use actions::{Command, GameEvent};
pub use board::{Board, BoardError, Edge, EdgeRoad, Node, NodeBuilding, PlayerId, Resource, Terrain, Tile};
pub use game::{GameConfig, GameError, GamePhase, GameSession, SetupPlacing};
pub use generator::generate_standard_board;
pub use hex::{neighbor_offsets, vertex_id, CoordError, CubeCoord, EdgeId, NodeId};
pub use player::{Piece, Player, ResourceHand};
pub use rules::{can_place_road, can_place_settlement, PlacementViolation, RuleSet};
pub use view::{BoardView, SessionView};
