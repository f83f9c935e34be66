//! The observer capability interface.

use super::error::ObserverError;
use super::notification::{
    GameInactive, GameReset, GameTied, GameWon, InvalidMove, MoveMade, Notification, TurnChanged,
};

/// Result of handling one notification.
pub type ObserverResult = Result<(), ObserverError>;

/// A subscriber reacting to engine notifications.
///
/// Every handler defaults to doing nothing, so an observer only overrides
/// the kinds it cares about. Handlers receive payloads by reference; the
/// board snapshots inside are copies, so nothing an observer does can
/// reach engine state.
///
/// # Example
///
/// ```rust
/// use tictac::engine::{GameEngine, MoveMade, Observer, ObserverResult};
/// use std::sync::{Arc, Mutex};
///
/// struct MoveCounter(Arc<Mutex<usize>>);
///
/// impl Observer for MoveCounter {
///     fn kind(&self) -> &str {
///         "counter"
///     }
///
///     fn on_move_made(&mut self, _event: &MoveMade) -> ObserverResult {
///         *self.0.lock().unwrap() += 1;
///         Ok(())
///     }
/// }
///
/// let count = Arc::new(Mutex::new(0));
/// let mut engine = GameEngine::new();
/// engine.subscribe("count", MoveCounter(Arc::clone(&count))).unwrap();
///
/// engine.submit_move(0, 0).unwrap();
/// engine.submit_move(1, 1).unwrap();
/// assert_eq!(*count.lock().unwrap(), 2);
/// ```
pub trait Observer: Send {
    /// Short description of what kind of observer this is.
    fn kind(&self) -> &str;

    fn on_invalid_move(&mut self, _event: &InvalidMove) -> ObserverResult {
        Ok(())
    }

    fn on_game_inactive(&mut self, _event: &GameInactive) -> ObserverResult {
        Ok(())
    }

    fn on_move_made(&mut self, _event: &MoveMade) -> ObserverResult {
        Ok(())
    }

    fn on_turn_changed(&mut self, _event: &TurnChanged) -> ObserverResult {
        Ok(())
    }

    fn on_game_won(&mut self, _event: &GameWon) -> ObserverResult {
        Ok(())
    }

    fn on_game_tied(&mut self, _event: &GameTied) -> ObserverResult {
        Ok(())
    }

    fn on_game_reset(&mut self, _event: &GameReset) -> ObserverResult {
        Ok(())
    }

    /// Route a notification to its handler.
    fn notify(&mut self, notification: &Notification) -> ObserverResult {
        match notification {
            Notification::InvalidMove(event) => self.on_invalid_move(event),
            Notification::GameInactive(event) => self.on_game_inactive(event),
            Notification::MoveMade(event) => self.on_move_made(event),
            Notification::TurnChanged(event) => self.on_turn_changed(event),
            Notification::GameWon(event) => self.on_game_won(event),
            Notification::GameTied(event) => self.on_game_tied(event),
            Notification::GameReset(event) => self.on_game_reset(event),
        }
    }
}
