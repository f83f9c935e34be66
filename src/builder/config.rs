//! Serializable game configuration.

use super::error::ConfigError;
use crate::authority::{Authorities, Authority, PlayerKind};
use crate::core::Marker;
use serde::{Deserialize, Serialize};

/// Who plays which marker and who moves first.
///
/// Missing fields take their defaults: X moves first, both players are
/// human, autonomous players are seeded from entropy.
///
/// # Example
///
/// ```rust
/// use tictac::authority::PlayerKind;
/// use tictac::builder::GameConfig;
/// use tictac::core::Marker;
///
/// let config = GameConfig::from_json(r#"{ "o": "autonomous", "seed": 42 }"#).unwrap();
///
/// assert_eq!(config.first_player, Marker::X);
/// assert_eq!(config.x, PlayerKind::Human);
/// assert_eq!(config.o, PlayerKind::Autonomous);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub first_player: Marker,
    pub x: PlayerKind,
    pub o: PlayerKind,
    /// Seed for autonomous players' random fallback
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_player: Marker::X,
            x: PlayerKind::Human,
            o: PlayerKind::Human,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn kind_of(&self, marker: Marker) -> PlayerKind {
        match marker {
            Marker::X => self.x,
            Marker::O => self.o,
        }
    }

    /// Build the per-marker authorities this configuration describes.
    ///
    /// Each marker gets its own seed so two autonomous players do not
    /// mirror each other.
    pub(crate) fn authorities(&self) -> Authorities {
        let seed_for = |offset: u64| self.seed.map(|seed| seed.wrapping_add(offset));
        Authorities::new(
            Authority::from_kind(self.x, seed_for(0)),
            Authority::from_kind(self.o, seed_for(1)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config = GameConfig::from_json("{}").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = GameConfig::from_json(r#"{ "difficulty": "hard" }"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn first_player_parses_marker() {
        let config = GameConfig::from_json(r#"{ "first_player": "O" }"#).unwrap();
        assert_eq!(config.first_player, Marker::O);
    }

    #[test]
    fn authorities_follow_kinds() {
        let config = GameConfig {
            x: PlayerKind::Autonomous,
            ..GameConfig::default()
        };
        let authorities = config.authorities();

        assert_eq!(authorities.get(Marker::X).kind(), PlayerKind::Autonomous);
        assert_eq!(authorities.get(Marker::O).kind(), PlayerKind::Human);
        assert_eq!(config.kind_of(Marker::X), PlayerKind::Autonomous);
    }
}
