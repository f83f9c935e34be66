//! Configuration and builder API for game engines.
//!
//! Engines are configured either fluently with [`EngineBuilder`] or from a
//! serialized [`GameConfig`]. Reconfiguring players of an existing engine
//! is done on the engine itself, between games.

mod config;
mod engine;
mod error;

pub use config::GameConfig;
pub use engine::EngineBuilder;
pub use error::ConfigError;
