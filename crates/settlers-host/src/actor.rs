//! Session actor.
//!
//! One tokio task owns the [`GameSession`] and applies requests strictly one
//! at a time. Any number of [`SessionHandle`] clones can submit requests
//! concurrently; each waits on its own oneshot reply.

use rand::rngs::StdRng;
use settlers_core::view::SessionView;
use settlers_core::{Command, EdgeId, GameError, GameEvent, GameSession, NodeId, PlayerId, ResourceHand};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use crate::config::HostError;

const QUEUE_DEPTH: usize = 64;

/// Legal spots for a player, ignoring cost
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Spots {
    pub settlements: Vec<NodeId>,
    pub roads: Vec<EdgeId>,
}

enum Request {
    Apply {
        player: PlayerId,
        command: Command,
        reply: oneshot::Sender<Result<Vec<GameEvent>, GameError>>,
    },
    Grant {
        player: PlayerId,
        hand: ResourceHand,
        reply: oneshot::Sender<Result<(), GameError>>,
    },
    View {
        reply: oneshot::Sender<SessionView>,
    },
    CurrentPlayer {
        reply: oneshot::Sender<PlayerId>,
    },
    Spots {
        player: PlayerId,
        reply: oneshot::Sender<Spots>,
    },
}

/// Cloneable handle to a running session actor
#[derive(Debug, Clone)]
pub struct SessionHandle {
    tx: mpsc::Sender<Request>,
}

impl SessionHandle {
    /// Move `session` into a new actor task. Must be called inside a tokio
    /// runtime. The actor stops once every handle is dropped.
    pub fn spawn(session: GameSession, rng: StdRng) -> Self {
        let (tx, rx) = mpsc::channel(QUEUE_DEPTH);
        tokio::spawn(run_actor(session, rng, rx));
        Self { tx }
    }

    pub async fn apply(&self, player: PlayerId, command: Command) -> Result<Vec<GameEvent>, HostError> {
        let events = self
            .request(|reply| Request::Apply {
                player,
                command,
                reply,
            })
            .await??;
        Ok(events)
    }

    pub async fn grant(&self, player: PlayerId, hand: ResourceHand) -> Result<(), HostError> {
        self.request(|reply| Request::Grant { player, hand, reply })
            .await??;
        Ok(())
    }

    pub async fn view(&self) -> Result<SessionView, HostError> {
        self.request(|reply| Request::View { reply }).await
    }

    pub async fn current_player(&self) -> Result<PlayerId, HostError> {
        self.request(|reply| Request::CurrentPlayer { reply }).await
    }

    pub async fn spots(&self, player: PlayerId) -> Result<Spots, HostError> {
        self.request(|reply| Request::Spots { player, reply }).await
    }

    async fn request<T>(&self, make: impl FnOnce(oneshot::Sender<T>) -> Request) -> Result<T, HostError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(make(reply))
            .await
            .map_err(|_| HostError::SessionClosed)?;
        rx.await.map_err(|_| HostError::SessionClosed)
    }
}

async fn run_actor(mut session: GameSession, mut rng: StdRng, mut rx: mpsc::Receiver<Request>) {
    info!("Session actor started with {} players", session.players().len());

    while let Some(request) = rx.recv().await {
        match request {
            Request::Apply {
                player,
                command,
                reply,
            } => {
                debug!(%player, ?command, "applying command");
                let result = session.apply_with_rng(player, command, &mut rng);
                match &result {
                    Ok(events) => {
                        for event in events {
                            info!(?event, "game event");
                        }
                    }
                    Err(err) => warn!(%player, %err, "command rejected"),
                }
                let _ = reply.send(result);
            }
            Request::Grant { player, hand, reply } => {
                let result = session.grant(player, &hand);
                if result.is_ok() {
                    info!("Granted {} to {}", hand, player);
                }
                let _ = reply.send(result);
            }
            Request::View { reply } => {
                let _ = reply.send(session.view());
            }
            Request::CurrentPlayer { reply } => {
                let _ = reply.send(session.current_player());
            }
            Request::Spots { player, reply } => {
                let _ = reply.send(Spots {
                    settlements: session.settlement_spots(player),
                    roads: session.road_spots(player),
                });
            }
        }
    }

    info!("Session actor stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use settlers_core::player::costs;
    use settlers_core::{Board, GameConfig, Resource};

    fn spawn_main_phase(players: u8) -> SessionHandle {
        let config = GameConfig {
            player_count: players,
            setup_round: false,
            ..GameConfig::default()
        };
        let board = Board::standard_with_rng(&mut StdRng::seed_from_u64(1));
        let session = GameSession::with_board(board, config).unwrap();
        SessionHandle::spawn(session, StdRng::seed_from_u64(2))
    }

    #[tokio::test]
    async fn test_apply_round_trip() {
        let handle = spawn_main_phase(2);
        let p0 = handle.current_player().await.unwrap();
        assert_eq!(p0, PlayerId::new(0));

        let events = handle.apply(p0, Command::EndTurn).await.unwrap();
        assert_eq!(
            events,
            vec![GameEvent::TurnEnded {
                player: p0,
                next_player: PlayerId::new(1)
            }]
        );
        assert_eq!(handle.current_player().await.unwrap(), PlayerId::new(1));
    }

    #[tokio::test]
    async fn test_errors_come_back_typed() {
        let handle = spawn_main_phase(2);
        let err = handle
            .apply(PlayerId::new(1), Command::EndTurn)
            .await
            .unwrap_err();
        assert!(matches!(err, HostError::Game(GameError::NotYourTurn)));
    }

    #[tokio::test]
    async fn test_concurrent_builds_never_overspend() {
        let handle = spawn_main_phase(2);
        let p0 = PlayerId::new(0);

        handle.grant(p0, costs::settlement()).await.unwrap();
        let spots = handle.spots(p0).await.unwrap();
        let node = spots.settlements[0];
        handle.apply(p0, Command::BuildSettlement(node)).await.unwrap();

        // Enough for exactly two roads, raced by many tasks
        let two_roads = ResourceHand::new()
            .with(Resource::Wood, 2)
            .with(Resource::Brick, 2);
        handle.grant(p0, two_roads).await.unwrap();
        let roads = handle.spots(p0).await.unwrap().roads;
        assert!(roads.len() >= 2);

        let mut tasks = Vec::new();
        for i in 0..12 {
            let handle = handle.clone();
            let edge = roads[i % roads.len()];
            tasks.push(tokio::spawn(async move {
                handle.apply(p0, Command::BuildRoad(edge)).await
            }));
        }

        let mut built = 0;
        for task in tasks {
            if task.await.unwrap().is_ok() {
                built += 1;
            }
        }

        let view = handle.view().await.unwrap();
        let player = &view.players[0];
        assert_eq!(built, 2);
        assert_eq!(player.resources.get(Resource::Wood), 0);
        assert_eq!(player.resources.get(Resource::Brick), 0);
        assert_eq!(player.roads_remaining, 13);
    }

    #[tokio::test]
    async fn test_closed_actor_reports_error() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let handle = SessionHandle { tx };
        assert!(matches!(
            handle.current_player().await,
            Err(HostError::SessionClosed)
        ));
    }
}
