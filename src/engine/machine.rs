//! The game-state machine.

use super::error::{MoveError, RegistryError};
use super::notification::{
    GameInactive, GameReset, GameTied, GameWon, InvalidMove, MoveMade, Notification, TurnChanged,
};
use super::observer::Observer;
use super::registry::{DeliveryReport, ObserverInfo, ObserverRegistry};
use crate::authority::{Authorities, Authority, PlayerKind};
use crate::builder::ConfigError;
use crate::core::{Board, GameStatus, Marker, MoveHistory, MoveInput, MoveRecord};
use crate::rules::{find_winner, is_tie};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Owns one game: the board, whose turn it is, the move history, the
/// per-player authorities and the observers.
///
/// The engine is the only thing that mutates its board. Every call runs to
/// completion, including delivery to all observers, before returning.
///
/// # Example
///
/// ```rust
/// use tictac::core::{GameStatus, Marker};
/// use tictac::engine::GameEngine;
///
/// let mut engine = GameEngine::new();
/// for id in [1, 5, 2, 9] {
///     engine.submit_move_by_id(id).unwrap();
/// }
/// let status = engine.submit_move_by_id(3).unwrap();
///
/// assert_eq!(status.winner(), Some(Marker::X));
/// assert!(!engine.is_active());
/// ```
#[derive(Debug)]
pub struct GameEngine {
    game_id: Uuid,
    board: Board,
    status: GameStatus,
    first_player: Marker,
    history: MoveHistory,
    authorities: Authorities,
    observers: ObserverRegistry,
    last_delivery: DeliveryReport,
}

impl GameEngine {
    /// Two human players, X moves first, no observers.
    pub fn new() -> Self {
        Self::from_parts(Marker::X, Authorities::default(), ObserverRegistry::new())
    }

    pub(crate) fn from_parts(
        first_player: Marker,
        authorities: Authorities,
        observers: ObserverRegistry,
    ) -> Self {
        Self {
            game_id: Uuid::new_v4(),
            board: Board::new(),
            status: GameStatus::AwaitingMove(first_player),
            first_player,
            history: MoveHistory::new(),
            authorities,
            observers,
            last_delivery: DeliveryReport::default(),
        }
    }

    /// Identifier of the current game; changes on every reset.
    pub fn game_id(&self) -> Uuid {
        self.game_id
    }

    /// Read-only view of the live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Independent copy of the board.
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// False once the game has been won or tied.
    pub fn is_active(&self) -> bool {
        !self.status.is_final()
    }

    pub fn active_player(&self) -> Option<Marker> {
        self.status.active_player()
    }

    pub fn first_player(&self) -> Marker {
        self.first_player
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn player_kind(&self, marker: Marker) -> PlayerKind {
        self.authorities.get(marker).kind()
    }

    pub fn subscribe(
        &mut self,
        name: impl Into<String>,
        observer: impl Observer + 'static,
    ) -> Result<(), RegistryError> {
        self.observers.subscribe(name, observer)
    }

    pub fn unsubscribe(&mut self, name: &str) -> Option<Box<dyn Observer>> {
        self.observers.unsubscribe(name)
    }

    pub fn observers(&self) -> Vec<ObserverInfo> {
        self.observers.list()
    }

    /// Delivery outcome of every notification raised by the most recent
    /// `submit`, `play_autonomous` or `reset` call.
    pub fn last_delivery(&self) -> &DeliveryReport {
        &self.last_delivery
    }

    /// Submit a move for the active player at `(row, col)`.
    pub fn submit_move(&mut self, row: usize, col: usize) -> Result<GameStatus, MoveError> {
        self.submit(MoveInput::At { row, col })
    }

    /// Submit a move for the active player by 1-based cell id.
    pub fn submit_move_by_id(&mut self, id: usize) -> Result<GameStatus, MoveError> {
        self.submit(MoveInput::Id(id))
    }

    /// Apply one move and publish its notifications.
    ///
    /// Notifications for a single call are delivered in the order
    /// `moveMade` then one of `gameWon`, `gameTied` or `turnChanged`.
    /// A rejected move raises `invalidMove` (or `gameInactive`) instead and
    /// leaves board, history and turn untouched.
    #[instrument(skip(self), fields(game_id = %self.game_id))]
    pub fn submit(&mut self, input: MoveInput) -> Result<GameStatus, MoveError> {
        self.last_delivery = DeliveryReport::default();
        let Some(player) = self.status.active_player() else {
            warn!(%input, "move submitted after game end");
            self.publish(Notification::GameInactive(GameInactive { input: Some(input) }));
            return Err(MoveError::Inactive);
        };

        let placed = self
            .authorities
            .get(player)
            .validate(&self.board, input)
            .and_then(|cell| self.board.place_at(cell, player).map(|()| cell));

        let cell = match placed {
            Ok(cell) => cell,
            Err(reason) => {
                warn!(%input, %player, %reason, "move rejected");
                self.publish(Notification::InvalidMove(InvalidMove {
                    player,
                    input,
                    reason,
                }));
                return Err(MoveError::Invalid(reason));
            }
        };

        self.history = self.history.record(MoveRecord::new(player, cell));
        debug!(%player, %cell, moves = self.history.len(), "move applied");
        self.publish(Notification::MoveMade(MoveMade {
            player,
            cell,
            board: self.snapshot(),
        }));

        self.status = self.evaluate(player);
        match &self.status {
            GameStatus::Won { winner, line } => {
                info!(%winner, orientation = line.orientation().name(), "game won");
                let event = GameWon {
                    game_id: self.game_id,
                    winner: *winner,
                    moves: self.history.len(),
                    board: self.snapshot(),
                    line: line.clone(),
                };
                self.publish(Notification::GameWon(event));
            }
            GameStatus::Tied => {
                info!(moves = self.history.len(), "game tied");
                let event = GameTied {
                    game_id: self.game_id,
                    moves: self.history.len(),
                    board: self.snapshot(),
                };
                self.publish(Notification::GameTied(event));
            }
            GameStatus::AwaitingMove(next_player) => {
                let next_player = *next_player;
                debug!(%next_player, "turn changed");
                self.publish(Notification::TurnChanged(TurnChanged { next_player }));
            }
        }

        Ok(self.status.clone())
    }

    /// Let the active player's autonomous authority choose and submit a
    /// move.
    ///
    /// The caller decides when to call this; no delay happens here.
    #[instrument(skip(self), fields(game_id = %self.game_id))]
    pub fn play_autonomous(&mut self) -> Result<GameStatus, MoveError> {
        self.last_delivery = DeliveryReport::default();
        let Some(player) = self.status.active_player() else {
            warn!("autonomous move requested after game end");
            self.publish(Notification::GameInactive(GameInactive { input: None }));
            return Err(MoveError::Inactive);
        };

        let authority = self.authorities.get_mut(player);
        if authority.kind() == PlayerKind::Human {
            return Err(MoveError::HumanTurn(player));
        }
        let cell = authority
            .propose(&self.board, player)
            .ok_or(MoveError::NoMoveAvailable)?;

        self.submit(cell.into())
    }

    /// Start a fresh game with the same players and observers.
    ///
    /// Always legal. Raises `gameReset`.
    #[instrument(skip(self), fields(previous = %self.game_id))]
    pub fn reset(&mut self) {
        self.last_delivery = DeliveryReport::default();
        self.game_id = Uuid::new_v4();
        self.board = Board::new();
        self.history = MoveHistory::new();
        self.status = GameStatus::AwaitingMove(self.first_player);
        info!(game_id = %self.game_id, first_player = %self.first_player, "game reset");

        self.publish(Notification::GameReset(GameReset {
            game_id: self.game_id,
            first_player: self.first_player,
        }));
    }

    /// Change how `marker` decides its moves.
    ///
    /// Only allowed between games: before the first move or after the end.
    pub fn set_player_kind(
        &mut self,
        marker: Marker,
        kind: PlayerKind,
        seed: Option<u64>,
    ) -> Result<(), ConfigError> {
        self.ensure_between_games()?;
        self.authorities.set(marker, Authority::from_kind(kind, seed));
        info!(%marker, ?kind, "player reconfigured");
        Ok(())
    }

    /// Exchange the authorities of X and O, e.g. to let the person play
    /// the other marker against the autonomous player.
    pub fn swap_players(&mut self) -> Result<(), ConfigError> {
        self.ensure_between_games()?;
        self.authorities.swap();
        info!(
            x = ?self.player_kind(Marker::X),
            o = ?self.player_kind(Marker::O),
            "players swapped"
        );
        Ok(())
    }

    fn ensure_between_games(&self) -> Result<(), ConfigError> {
        if self.is_active() && !self.history.is_empty() {
            return Err(ConfigError::GameInProgress);
        }
        Ok(())
    }

    // Win is checked before tie: a last move that fills the board and
    // completes a line is a win.
    fn evaluate(&self, mover: Marker) -> GameStatus {
        if let Some(win) = find_winner(&self.board) {
            GameStatus::Won {
                winner: win.winner,
                line: win.line,
            }
        } else if is_tie(&self.board) {
            GameStatus::Tied
        } else {
            GameStatus::AwaitingMove(mover.opponent())
        }
    }

    fn publish(&mut self, notification: Notification) {
        let report = self.observers.dispatch(&notification);
        self.last_delivery.absorb(report);
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
