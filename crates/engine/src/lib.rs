pub mod board;
pub mod controller;
pub mod error;
pub mod logger;
pub mod piece;
pub mod staging;
pub mod types;

pub use board::*;
pub use controller::{Game, Preview, ReleaseOutcome};
pub use error::EngineError;
pub use logger::GameLogger;
pub use piece::{Piece, Role};
pub use types::*;
