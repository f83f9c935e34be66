//! The game engine and its notification contract.
//!
//! This module is the shell around the pure core: it owns the board,
//! applies moves, evaluates terminal conditions and fans notifications out
//! to any number of independent observers.
//!
//! # Key Concepts
//!
//! - **GameEngine**: the state machine (`AwaitingMove` -> `Won` | `Tied`)
//! - **Notification**: the closed set of seven state-change signals
//! - **Observer**: capability trait implemented by each consumer
//! - **ObserverRegistry**: named fan-out with per-observer failure isolation

mod error;
mod machine;
mod notification;
mod observer;
mod registry;

pub use error::{MoveError, ObserverError, RegistryError};
pub use machine::GameEngine;
pub use notification::{
    GameInactive, GameReset, GameTied, GameWon, InvalidMove, MoveMade, Notification, TurnChanged,
};
pub use observer::{Observer, ObserverResult};
pub use registry::{DeliveryFailure, DeliveryReport, ObserverInfo, ObserverRegistry};
