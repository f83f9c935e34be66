//! Builder for constructing game engines.

use super::config::GameConfig;
use super::error::ConfigError;
use crate::authority::PlayerKind;
use crate::core::Marker;
use crate::engine::{GameEngine, Observer, ObserverRegistry};

/// Builder for constructing engines with a fluent API.
///
/// # Example
///
/// ```rust
/// use tictac::authority::PlayerKind;
/// use tictac::builder::EngineBuilder;
/// use tictac::core::Marker;
/// use tictac::observers::RecordingObserver;
///
/// let engine = EngineBuilder::new()
///     .first_player(Marker::O)
///     .autonomous(Marker::X)
///     .seed(7)
///     .observer("log", RecordingObserver::new())
///     .build()
///     .unwrap();
///
/// assert_eq!(engine.active_player(), Some(Marker::O));
/// assert_eq!(engine.player_kind(Marker::X), PlayerKind::Autonomous);
/// assert_eq!(engine.observers().len(), 1);
/// ```
pub struct EngineBuilder {
    config: GameConfig,
    observers: Vec<(String, Box<dyn Observer>)>,
}

impl EngineBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self::from_config(GameConfig::default())
    }

    /// Start from an existing configuration.
    pub fn from_config(config: GameConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Set which marker moves first in every game.
    pub fn first_player(mut self, marker: Marker) -> Self {
        self.config.first_player = marker;
        self
    }

    pub fn player(mut self, marker: Marker, kind: PlayerKind) -> Self {
        match marker {
            Marker::X => self.config.x = kind,
            Marker::O => self.config.o = kind,
        }
        self
    }

    pub fn human(self, marker: Marker) -> Self {
        self.player(marker, PlayerKind::Human)
    }

    pub fn autonomous(self, marker: Marker) -> Self {
        self.player(marker, PlayerKind::Autonomous)
    }

    /// Seed autonomous players for reproducible games.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Subscribe an observer once the engine is built.
    pub fn observer(mut self, name: impl Into<String>, observer: impl Observer + 'static) -> Self {
        self.observers.push((name.into(), Box::new(observer)));
        self
    }

    /// Build the engine.
    /// Returns an error if two observers share a name.
    pub fn build(self) -> Result<GameEngine, ConfigError> {
        let mut registry = ObserverRegistry::new();
        for (name, observer) in self.observers {
            registry.subscribe_boxed(name, observer)?;
        }

        Ok(GameEngine::from_parts(
            self.config.first_player,
            self.config.authorities(),
            registry,
        ))
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RegistryError;
    use crate::observers::RecordingObserver;

    #[test]
    fn default_builder_matches_new_engine() {
        let engine = EngineBuilder::new().build().unwrap();

        assert_eq!(engine.first_player(), Marker::X);
        assert_eq!(engine.player_kind(Marker::X), PlayerKind::Human);
        assert_eq!(engine.player_kind(Marker::O), PlayerKind::Human);
        assert!(engine.observers().is_empty());
    }

    #[test]
    fn duplicate_observer_names_fail_build() {
        let result = EngineBuilder::new()
            .observer("ui", RecordingObserver::new())
            .observer("ui", RecordingObserver::new())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::Registry(RegistryError::DuplicateObserverName(name))) if name == "ui"
        ));
    }

    #[test]
    fn seeded_autonomous_games_are_reproducible() {
        let play_out = || {
            let mut engine = EngineBuilder::new()
                .autonomous(Marker::X)
                .autonomous(Marker::O)
                .seed(99)
                .build()
                .unwrap();
            while engine.is_active() {
                engine.play_autonomous().unwrap();
            }
            engine.history().get_path()
        };

        assert_eq!(play_out(), play_out());
    }

    #[test]
    fn from_config_applies_every_field() {
        let config = GameConfig {
            first_player: Marker::O,
            x: PlayerKind::Autonomous,
            o: PlayerKind::Human,
            seed: Some(3),
        };
        let engine = EngineBuilder::from_config(config).build().unwrap();

        assert_eq!(engine.active_player(), Some(Marker::O));
        assert_eq!(engine.player_kind(Marker::X), PlayerKind::Autonomous);
    }
}
