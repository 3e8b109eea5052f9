//! Host configuration and errors.

use rand::rngs::StdRng;
use rand::SeedableRng;
use settlers_core::{GameConfig, GameError};
use thiserror::Error;

pub const PLAYERS_VAR: &str = "SETTLERS_PLAYERS";
pub const SEED_VAR: &str = "SETTLERS_SEED";

#[derive(Debug, Error)]
pub enum HostError {
    #[error("SETTLERS_PLAYERS must be a number from 2 to 4, got {0:?}")]
    InvalidPlayers(String),

    #[error("SETTLERS_SEED must be an unsigned integer, got {0:?}")]
    InvalidSeed(String),

    #[error(transparent)]
    Game(#[from] GameError),

    #[error("session actor has stopped")]
    SessionClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Settings read from the environment at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostConfig {
    pub players: u8,
    /// Fixes both the board layout and the dice when set
    pub seed: Option<u64>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            players: 4,
            seed: None,
        }
    }
}

impl HostConfig {
    pub fn from_env() -> Result<Self, HostError> {
        Self::from_vars(std::env::var(PLAYERS_VAR).ok(), std::env::var(SEED_VAR).ok())
    }

    pub fn from_vars(players: Option<String>, seed: Option<String>) -> Result<Self, HostError> {
        let mut config = Self::default();

        if let Some(raw) = players {
            config.players = raw
                .trim()
                .parse()
                .ok()
                .filter(|n| (2..=4).contains(n))
                .ok_or(HostError::InvalidPlayers(raw))?;
        }
        if let Some(raw) = seed {
            let parsed = raw.trim().parse().map_err(|_| HostError::InvalidSeed(raw))?;
            config.seed = Some(parsed);
        }
        Ok(config)
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            player_count: self.players,
            ..GameConfig::default()
        }
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_defaults_without_vars() {
        let config = HostConfig::from_vars(None, None).unwrap();
        assert_eq!(config, HostConfig::default());
        assert_eq!(config.game_config().player_count, 4);
    }

    #[test]
    fn test_parses_players_and_seed() {
        let config = HostConfig::from_vars(Some(" 3 ".into()), Some("42".into())).unwrap();
        assert_eq!(config.players, 3);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_rejects_out_of_range_players() {
        for raw in ["1", "5", "four"] {
            let err = HostConfig::from_vars(Some(raw.into()), None).unwrap_err();
            assert!(matches!(err, HostError::InvalidPlayers(ref s) if s == raw));
        }
    }

    #[test]
    fn test_rejects_bad_seed() {
        let err = HostConfig::from_vars(None, Some("-1".into())).unwrap_err();
        assert!(matches!(err, HostError::InvalidSeed(_)));
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = HostConfig {
            players: 2,
            seed: Some(7),
        };
        let a: u64 = config.rng().gen();
        let b: u64 = config.rng().gen();
        assert_eq!(a, b);
    }
}
