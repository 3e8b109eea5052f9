//! The game session: board, players and turn, changed only through build
//! transactions.
//!
//! Every mutating method takes `&mut self`, and every build validates fully
//! before it touches anything, so a failed command leaves the session exactly
//! as it was and a successful one updates the board and the ledger together.

use crate::actions::{Command, GameEvent};
use crate::board::{Board, BoardError, PlayerId};
use crate::generator::generate_standard_board;
use crate::hex::{EdgeId, NodeId};
use crate::player::{Piece, Player, ResourceHand};
use crate::rules::{self, PlacementViolation, RuleSet};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Victory points needed to win
pub const VICTORY_POINTS_TO_WIN: u32 = 10;

/// Errors that can occur when applying commands
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum GameError {
    #[error(transparent)]
    NotFound(#[from] BoardError),

    #[error("not enough resources: missing {missing}")]
    InsufficientResources { missing: ResourceHand },

    #[error("rule violation: {0}")]
    RuleViolation(#[from] PlacementViolation),

    #[error("no {0:?} pieces remaining")]
    NoRemainingPieces(Piece),

    #[error("not your turn")]
    NotYourTurn,

    #[error("no such player")]
    UnknownPlayer,

    #[error("that command is not allowed in the current phase")]
    WrongPhase,

    #[error("game is over")]
    GameOver,

    #[error("a game needs 2 to 4 players, not {0}")]
    InvalidPlayerCount(u8),
}

/// Game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Initial placement in snake order
    Setup {
        /// Placement index, `0..2 * player_count`
        step: usize,
        /// What we're currently placing
        placing: SetupPlacing,
    },

    /// Normal play
    Main,

    Finished { winner: PlayerId },
}

/// What we're placing during setup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetupPlacing {
    Settlement,
    Road,
}

/// How to start a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub player_count: u8,
    pub rules: RuleSet,
    /// Begin with the free snake-order placement round
    pub setup_round: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 4,
            rules: RuleSet::default(),
            setup_round: true,
        }
    }
}

/// The complete session context
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    players: Vec<Player>,
    current: usize,
    phase: GamePhase,
    rules: RuleSet,
    turn_number: u32,
    rolled_this_turn: bool,
    /// Setup settlement awaiting its road
    setup_settlement: Option<NodeId>,
}

impl GameSession {
    /// Start a session on a freshly generated standard board
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Self::with_board(generate_standard_board(), config)
    }

    /// Start a session on a prepared board
    pub fn with_board(board: Board, config: GameConfig) -> Result<Self, GameError> {
        if !(2..=4).contains(&config.player_count) {
            return Err(GameError::InvalidPlayerCount(config.player_count));
        }
        let players = (0..config.player_count)
            .map(|i| Player::new(PlayerId::new(i), format!("Player {}", i + 1)))
            .collect();
        let phase = if config.setup_round {
            GamePhase::Setup {
                step: 0,
                placing: SetupPlacing::Settlement,
            }
        } else {
            GamePhase::Main
        };

        Ok(Self {
            board,
            players,
            current: 0,
            phase,
            rules: config.rules,
            turn_number: 1,
            rolled_this_turn: false,
            setup_settlement: None,
        })
    }

    // ==================== Queries ====================

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player, GameError> {
        self.players.get(id.index()).ok_or(GameError::UnknownPlayer)
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    pub fn current_player_index(&self) -> usize {
        self.current
    }

    pub fn current_player(&self) -> PlayerId {
        self.players[self.current].id
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            GamePhase::Finished { winner } => Some(winner),
            _ => None,
        }
    }

    /// Nodes where `player` could legally settle right now, ignoring cost
    pub fn settlement_spots(&self, player: PlayerId) -> Vec<NodeId> {
        match self.phase {
            GamePhase::Setup { .. } => RuleSet::default().valid_settlement_spots(&self.board, player),
            _ => self.rules.valid_settlement_spots(&self.board, player),
        }
    }

    /// Edges where `player` could legally build a road right now, ignoring cost
    pub fn road_spots(&self, player: PlayerId) -> Vec<EdgeId> {
        match (self.phase, self.setup_settlement) {
            (GamePhase::Setup { .. }, Some(node)) => self
                .board
                .node_at(node)
                .map(|n| {
                    self.board
                        .edges_of(n)
                        .filter(|e| rules::can_place_road(&self.board, e, player))
                        .map(|e| e.id())
                        .collect()
                })
                .unwrap_or_default(),
            _ => rules::valid_road_spots(&self.board, player),
        }
    }

    // ==================== Turn Control ====================

    /// Pass play to the next player, wrapping after the last seat
    pub fn advance_turn(&mut self) -> Result<GameEvent, GameError> {
        match self.phase {
            GamePhase::Finished { .. } => return Err(GameError::GameOver),
            GamePhase::Setup { .. } => return Err(GameError::WrongPhase),
            GamePhase::Main => {}
        }
        let player = self.current_player();
        self.current = (self.current + 1) % self.players.len();
        self.turn_number += 1;
        self.rolled_this_turn = false;
        Ok(GameEvent::TurnEnded {
            player,
            next_player: self.current_player(),
        })
    }

    fn ensure_turn(&self, player: PlayerId) -> Result<(), GameError> {
        if matches!(self.phase, GamePhase::Finished { .. }) {
            return Err(GameError::GameOver);
        }
        if player.index() >= self.players.len() {
            return Err(GameError::UnknownPlayer);
        }
        if player != self.current_player() {
            return Err(GameError::NotYourTurn);
        }
        Ok(())
    }

    fn ensure_main_turn(&self, player: PlayerId) -> Result<(), GameError> {
        self.ensure_turn(player)?;
        if self.phase != GamePhase::Main {
            return Err(GameError::WrongPhase);
        }
        Ok(())
    }

    // ==================== Build Transactions ====================

    /// Pay for and place a settlement
    pub fn try_build_settlement(
        &mut self,
        player: PlayerId,
        node: NodeId,
    ) -> Result<GameEvent, GameError> {
        self.ensure_main_turn(player)?;
        let handle = self.board.node_handle(node)?;
        self.rules
            .check_settlement(&self.board, self.board.node(handle), player)?;
        let remaining = self.pay_for(player, Piece::Settlement)?;

        self.commit(player, Piece::Settlement, remaining);
        self.board.place_settlement(handle, player);
        self.check_winner();
        Ok(GameEvent::SettlementBuilt { player, node })
    }

    /// Pay for and place a road
    pub fn try_build_road(&mut self, player: PlayerId, edge: EdgeId) -> Result<GameEvent, GameError> {
        self.ensure_main_turn(player)?;
        let handle = self.board.edge_handle(edge)?;
        rules::check_road(&self.board, self.board.edge(handle), player)?;
        let remaining = self.pay_for(player, Piece::Road)?;

        self.commit(player, Piece::Road, remaining);
        self.board.place_road(handle, player);
        Ok(GameEvent::RoadBuilt { player, edge })
    }

    /// Pay for and upgrade one of `player`'s settlements
    pub fn try_build_city(&mut self, player: PlayerId, node: NodeId) -> Result<GameEvent, GameError> {
        self.ensure_main_turn(player)?;
        let handle = self.board.node_handle(node)?;
        rules::check_city(self.board.node(handle), player)?;
        let remaining = self.pay_for(player, Piece::City)?;

        self.commit(player, Piece::City, remaining);
        self.board.upgrade_to_city(handle, player);
        self.check_winner();
        Ok(GameEvent::CityBuilt { player, node })
    }

    /// Validate the pool and the hand for `piece`, returning the hand after
    /// payment without applying it
    fn pay_for(&self, player: PlayerId, piece: Piece) -> Result<ResourceHand, GameError> {
        let p = self.player(player)?;
        if p.remaining(piece) == 0 {
            return Err(GameError::NoRemainingPieces(piece));
        }
        let cost = piece.cost();
        p.resources
            .checked_sub(&cost)
            .ok_or_else(|| GameError::InsufficientResources {
                missing: p.resources.shortfall(&cost),
            })
    }

    fn commit(&mut self, player: PlayerId, piece: Piece, remaining: ResourceHand) {
        let p = &mut self.players[player.index()];
        p.resources = remaining;
        p.take_piece(piece);
    }

    fn check_winner(&mut self) {
        if let Some(p) = self
            .players
            .iter()
            .find(|p| p.victory_points >= VICTORY_POINTS_TO_WIN)
        {
            self.phase = GamePhase::Finished { winner: p.id };
        }
    }

    // ==================== Setup Round ====================

    /// Seat placing at setup step `step`: forward through the seats, then back
    fn setup_seat(&self, step: usize) -> usize {
        let n = self.players.len();
        if step < n {
            step
        } else {
            2 * n - 1 - step
        }
    }

    /// Free settlement during setup; the second one pays out its tiles
    pub fn place_initial_settlement(
        &mut self,
        player: PlayerId,
        node: NodeId,
    ) -> Result<Vec<GameEvent>, GameError> {
        self.ensure_turn(player)?;
        let GamePhase::Setup {
            step,
            placing: SetupPlacing::Settlement,
        } = self.phase
        else {
            return Err(GameError::WrongPhase);
        };
        let handle = self.board.node_handle(node)?;
        rules::check_settlement(&self.board, self.board.node(handle))?;
        if self.player(player)?.remaining(Piece::Settlement) == 0 {
            return Err(GameError::NoRemainingPieces(Piece::Settlement));
        }

        let mut events = vec![GameEvent::SettlementBuilt { player, node }];

        if step >= self.players.len() {
            let mut grant = ResourceHand::new();
            for tile in self.board.tiles_of(self.board.node(handle)) {
                if let Some(r) = tile.terrain().resource() {
                    grant.add(r, 1);
                }
            }
            if !grant.is_empty() {
                events.push(GameEvent::ResourcesDistributed {
                    distributions: grant.iter().map(|(r, n)| (player, r, n)).collect(),
                });
                self.players[player.index()].resources.add_hand(&grant);
            }
        }

        self.players[player.index()].take_piece(Piece::Settlement);
        self.board.place_settlement(handle, player);
        self.setup_settlement = Some(node);
        self.phase = GamePhase::Setup {
            step,
            placing: SetupPlacing::Road,
        };
        Ok(events)
    }

    /// Free road during setup, touching the settlement just placed
    pub fn place_initial_road(
        &mut self,
        player: PlayerId,
        edge: EdgeId,
    ) -> Result<Vec<GameEvent>, GameError> {
        self.ensure_turn(player)?;
        let GamePhase::Setup {
            step,
            placing: SetupPlacing::Road,
        } = self.phase
        else {
            return Err(GameError::WrongPhase);
        };
        let handle = self.board.edge_handle(edge)?;
        rules::check_road(&self.board, self.board.edge(handle), player)?;
        if !self.setup_settlement.is_some_and(|n| edge.touches(n)) {
            return Err(PlacementViolation::NotFromNewSettlement.into());
        }
        if self.player(player)?.remaining(Piece::Road) == 0 {
            return Err(GameError::NoRemainingPieces(Piece::Road));
        }

        self.players[player.index()].take_piece(Piece::Road);
        self.board.place_road(handle, player);
        self.setup_settlement = None;

        let mut events = vec![GameEvent::RoadBuilt { player, edge }];
        let next = step + 1;
        if next < 2 * self.players.len() {
            self.current = self.setup_seat(next);
            self.phase = GamePhase::Setup {
                step: next,
                placing: SetupPlacing::Settlement,
            };
        } else {
            self.current = 0;
            self.phase = GamePhase::Main;
            events.push(GameEvent::SetupCompleted {
                first_player: self.current_player(),
            });
        }
        Ok(events)
    }

    // ==================== Production ====================

    /// Roll two dice and distribute production; once per turn
    pub fn roll_dice<R: Rng>(&mut self, player: PlayerId, rng: &mut R) -> Result<Vec<GameEvent>, GameError> {
        self.ensure_main_turn(player)?;
        if self.rolled_this_turn {
            return Err(GameError::WrongPhase);
        }
        let die1 = rng.gen_range(1..=6);
        let die2 = rng.gen_range(1..=6);
        let total = die1 + die2;
        self.rolled_this_turn = true;

        let mut events = vec![GameEvent::DiceRolled {
            player,
            roll: (die1, die2),
            total,
        }];
        if let Some(event) = self.distribute(total) {
            events.push(event);
        }
        Ok(events)
    }

    /// Credit every player's production for a dice total
    pub fn distribute(&mut self, total: u8) -> Option<GameEvent> {
        let produced = self.board.production_for_roll(total);
        let mut distributions = Vec::new();
        for (owner, hand) in produced {
            if let Some(p) = self.players.get_mut(owner.index()) {
                p.resources.add_hand(&hand);
                distributions.extend(hand.iter().map(|(r, n)| (owner, r, n)));
            }
        }
        if distributions.is_empty() {
            None
        } else {
            Some(GameEvent::ResourcesDistributed { distributions })
        }
    }

    /// Credit resources directly (trades, cards and tests live outside the core)
    pub fn grant(&mut self, player: PlayerId, hand: &ResourceHand) -> Result<(), GameError> {
        self.players
            .get_mut(player.index())
            .ok_or(GameError::UnknownPlayer)?
            .resources
            .add_hand(hand);
        Ok(())
    }

    // ==================== Dispatch ====================

    /// Apply a command using the thread RNG for dice
    pub fn apply(&mut self, player: PlayerId, command: Command) -> Result<Vec<GameEvent>, GameError> {
        self.apply_with_rng(player, command, &mut rand::thread_rng())
    }

    pub fn apply_with_rng<R: Rng>(
        &mut self,
        player: PlayerId,
        command: Command,
        rng: &mut R,
    ) -> Result<Vec<GameEvent>, GameError> {
        let mut events = match command {
            Command::PlaceInitialSettlement(node) => self.place_initial_settlement(player, node)?,
            Command::PlaceInitialRoad(edge) => self.place_initial_road(player, edge)?,
            Command::RollDice => self.roll_dice(player, rng)?,
            Command::BuildRoad(edge) => vec![self.try_build_road(player, edge)?],
            Command::BuildSettlement(node) => vec![self.try_build_settlement(player, node)?],
            Command::BuildCity(node) => vec![self.try_build_city(player, node)?],
            Command::EndTurn => {
                self.ensure_main_turn(player)?;
                vec![self.advance_turn()?]
            }
        };
        if let GamePhase::Finished { winner } = self.phase {
            let victory_points = self.players[winner.index()].victory_points;
            events.push(GameEvent::GameWon {
                player: winner,
                victory_points,
            });
        }
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Resource;
    use crate::hex::CubeCoord;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);

    fn main_phase(players: u8) -> GameSession {
        let config = GameConfig {
            player_count: players,
            setup_round: false,
            ..GameConfig::default()
        };
        GameSession::with_board(Board::standard_with_rng(&mut StdRng::seed_from_u64(3)), config)
            .unwrap()
    }

    fn settlement_kit() -> ResourceHand {
        crate::player::costs::settlement()
    }

    fn origin_node(i: usize) -> NodeId {
        CubeCoord::ORIGIN.vertex_ids()[i]
    }

    fn origin_edge(i: usize, j: usize) -> EdgeId {
        EdgeId::new(origin_node(i), origin_node(j))
    }

    #[test]
    fn test_player_count_bounds() {
        let config = |n| GameConfig {
            player_count: n,
            ..GameConfig::default()
        };
        assert_eq!(
            GameSession::new(config(1)).unwrap_err(),
            GameError::InvalidPlayerCount(1)
        );
        assert!(GameSession::new(config(5)).is_err());
        assert_eq!(GameSession::new(config(3)).unwrap().players().len(), 3);
    }

    #[test]
    fn test_advance_turn_wraps() {
        let mut game = main_phase(3);
        assert_eq!(game.current_player_index(), 0);
        game.advance_turn().unwrap();
        game.advance_turn().unwrap();
        assert_eq!(game.current_player_index(), 2);
        let event = game.advance_turn().unwrap();
        assert_eq!(
            event,
            GameEvent::TurnEnded {
                player: PlayerId::new(2),
                next_player: P0
            }
        );
        assert_eq!(game.turn_number(), 4);
    }

    #[test]
    fn test_build_settlement_spends_exact_cost() {
        let mut game = main_phase(4);
        game.grant(P0, &settlement_kit()).unwrap();

        game.try_build_settlement(P0, origin_node(0)).unwrap();

        let p = game.player(P0).unwrap();
        assert!(p.resources.is_empty());
        assert_eq!(p.settlements_remaining, 4);
        assert_eq!(p.victory_points, 1);
        assert_eq!(
            game.board().node_at(origin_node(0)).unwrap().building().owner(),
            Some(P0)
        );
    }

    #[test]
    fn test_insufficient_resources_leaves_state_unchanged() {
        let mut game = main_phase(4);
        let hand = ResourceHand::new()
            .with(Resource::Wood, 1)
            .with(Resource::Brick, 1)
            .with(Resource::Sheep, 1);
        game.grant(P0, &hand).unwrap();

        let err = game.try_build_settlement(P0, origin_node(0)).unwrap_err();
        assert_eq!(
            err,
            GameError::InsufficientResources {
                missing: ResourceHand::new().with(Resource::Wheat, 1)
            }
        );
        let p = game.player(P0).unwrap();
        assert_eq!(p.resources, hand);
        assert_eq!(p.settlements_remaining, 5);
        assert!(game.board().node_at(origin_node(0)).unwrap().building().is_empty());
    }

    #[test]
    fn test_rule_violation_is_distinct_from_cost() {
        let mut game = main_phase(4);
        game.grant(P0, &settlement_kit()).unwrap();
        game.grant(P0, &settlement_kit()).unwrap();
        game.try_build_settlement(P0, origin_node(0)).unwrap();

        let err = game.try_build_settlement(P0, origin_node(1)).unwrap_err();
        assert_eq!(err, GameError::RuleViolation(PlacementViolation::TooClose));
        assert_eq!(game.player(P0).unwrap().resources, settlement_kit());
    }

    #[test]
    fn test_road_needs_connection_then_succeeds() {
        let mut game = main_phase(2);
        game.grant(P0, &crate::player::costs::road()).unwrap();
        game.grant(P0, &settlement_kit()).unwrap();

        let err = game.try_build_road(P0, origin_edge(0, 1)).unwrap_err();
        assert_eq!(err, GameError::RuleViolation(PlacementViolation::NotConnected));

        game.try_build_settlement(P0, origin_node(0)).unwrap();
        game.grant(P0, &crate::player::costs::road()).unwrap();
        game.try_build_road(P0, origin_edge(0, 1)).unwrap();

        let p = game.player(P0).unwrap();
        assert_eq!(p.roads_remaining, 14);
        assert_eq!(p.resources, crate::player::costs::road());
    }

    #[test]
    fn test_city_on_rival_settlement_is_rule_violation() {
        let mut game = main_phase(2);
        game.grant(P0, &settlement_kit()).unwrap();
        game.try_build_settlement(P0, origin_node(0)).unwrap();
        game.advance_turn().unwrap();

        let rich = crate::player::costs::city().with(Resource::Ore, 10);
        game.grant(P1, &rich).unwrap();
        let err = game.try_build_city(P1, origin_node(0)).unwrap_err();
        assert_eq!(
            err,
            GameError::RuleViolation(PlacementViolation::NotOwnSettlement)
        );
        assert_eq!(game.player(P1).unwrap().resources, rich);
    }

    #[test]
    fn test_city_upgrade_nets_two_points() {
        let mut game = main_phase(2);
        game.grant(P0, &settlement_kit()).unwrap();
        game.grant(P0, &crate::player::costs::city()).unwrap();
        game.try_build_settlement(P0, origin_node(0)).unwrap();
        game.try_build_city(P0, origin_node(0)).unwrap();

        let p = game.player(P0).unwrap();
        assert_eq!(p.victory_points, 2);
        assert_eq!(p.settlements_remaining, 4);
        assert_eq!(p.cities_remaining, 3);
        assert!(p.resources.is_empty());
    }

    #[test]
    fn test_grant_saturates_instead_of_overflowing() {
        let mut game = main_phase(2);
        let huge = ResourceHand::new().with(Resource::Ore, u32::MAX);
        game.grant(P0, &huge).unwrap();
        game.grant(P0, &huge).unwrap();
        assert_eq!(game.player(P0).unwrap().resources.get(Resource::Ore), u32::MAX);
    }

    #[test]
    fn test_exhausted_pool() {
        let mut game = main_phase(2);
        game.players[0].settlements_remaining = 0;
        game.grant(P0, &settlement_kit()).unwrap();
        assert_eq!(
            game.try_build_settlement(P0, origin_node(0)).unwrap_err(),
            GameError::NoRemainingPieces(Piece::Settlement)
        );
    }

    #[test]
    fn test_only_current_player_builds() {
        let mut game = main_phase(2);
        game.grant(P1, &settlement_kit()).unwrap();
        assert_eq!(
            game.try_build_settlement(P1, origin_node(0)).unwrap_err(),
            GameError::NotYourTurn
        );
        assert_eq!(
            game.try_build_settlement(PlayerId::new(7), origin_node(0)).unwrap_err(),
            GameError::UnknownPlayer
        );
    }

    #[test]
    fn test_unknown_node_is_not_found() {
        let mut game = main_phase(2);
        let far = CubeCoord::new(9, -9, 0).unwrap().vertex_ids()[0];
        assert_eq!(
            game.try_build_settlement(P0, far).unwrap_err(),
            GameError::NotFound(BoardError::NodeNotFound(far))
        );
    }

    #[test]
    fn test_reaching_ten_points_finishes_game() {
        let mut game = main_phase(2);
        game.players[0].victory_points = 9;
        game.grant(P0, &settlement_kit()).unwrap();
        let events = game
            .apply(P0, Command::BuildSettlement(origin_node(0)))
            .unwrap();
        assert_eq!(game.winner(), Some(P0));
        assert!(matches!(events.last(), Some(GameEvent::GameWon { victory_points: 10, .. })));
        assert_eq!(game.advance_turn().unwrap_err(), GameError::GameOver);
    }

    #[test]
    fn test_roll_once_per_turn() {
        let mut game = main_phase(2);
        let mut rng = StdRng::seed_from_u64(11);
        let events = game.roll_dice(P0, &mut rng).unwrap();
        match &events[0] {
            GameEvent::DiceRolled { roll, total, .. } => {
                assert_eq!(roll.0 + roll.1, *total);
                assert!((2..=12).contains(total));
            }
            other => panic!("unexpected event {other:?}"),
        }
        assert_eq!(game.roll_dice(P0, &mut rng).unwrap_err(), GameError::WrongPhase);
        game.advance_turn().unwrap();
        assert!(game.roll_dice(P1, &mut rng).is_ok());
    }

    #[test]
    fn test_distribute_credits_owners() {
        let mut game = main_phase(2);
        game.grant(P0, &settlement_kit()).unwrap();
        let node = origin_node(0);
        game.try_build_settlement(P0, node).unwrap();

        let (number, resource) = game
            .board()
            .tiles_of(game.board().node_at(node).unwrap())
            .find_map(|t| Some((t.number()?, t.terrain().resource()?)))
            .unwrap();
        let before = game.player(P0).unwrap().resources.get(resource);

        let Some(GameEvent::ResourcesDistributed { distributions }) = game.distribute(number) else {
            panic!("a settled number should produce");
        };
        assert!(distributions.iter().any(|&(p, r, _)| p == P0 && r == resource));
        assert!(game.player(P0).unwrap().resources.get(resource) > before);
        assert_eq!(game.distribute(7), None);
    }
}
