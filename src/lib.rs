//! Tictac: a tic-tac-toe game-state machine decoupled from presentation
//!
//! The engine owns the board, validates moves, detects wins and ties, and
//! publishes a fixed vocabulary of notifications. Any number of observers
//! can consume them, each rendering in its own style and language, without
//! the engine knowing anything about them.
//!
//! # Core Concepts
//!
//! - **Board**: 3x3 grid addressed by `(row, col)` or by id `1..=9`
//! - **Lines**: the 8 win-check paths, derived from the board on demand
//! - **Move authorities**: human validation or autonomous selection
//! - **GameEngine**: `AwaitingMove` until `Won` or `Tied`, then `reset`
//! - **Observers**: named subscribers, isolated from each other's failures
//!
//! # Example
//!
//! ```rust
//! use tictac::builder::EngineBuilder;
//! use tictac::core::Marker;
//! use tictac::locale::Language;
//! use tictac::observers::{RecordingObserver, TranscriptObserver};
//!
//! let recorder = RecordingObserver::new();
//! let spanish = TranscriptObserver::new(Language::Es);
//!
//! let mut engine = EngineBuilder::new()
//!     .observer("recorder", recorder.clone())
//!     .observer("es", spanish.clone())
//!     .build()
//!     .unwrap();
//!
//! for id in [1, 5, 2, 9, 3] {
//!     engine.submit_move_by_id(id).unwrap();
//! }
//!
//! assert_eq!(engine.status().winner(), Some(Marker::X));
//! assert_eq!(recorder.kinds().last(), Some(&"gameWon"));
//! assert_eq!(spanish.lines().last().unwrap(), "¡X GANA en 5 movimientos con una fila! ¡Felicidades!");
//! ```

pub mod authority;
pub mod builder;
pub mod core;
pub mod engine;
pub mod locale;
pub mod observers;
pub mod rules;

// Re-export commonly used types
pub use builder::{EngineBuilder, GameConfig};
pub use core::{Board, CellRef, CellState, GameStatus, Marker, MoveInput};
pub use engine::{GameEngine, MoveError, Notification, Observer};
