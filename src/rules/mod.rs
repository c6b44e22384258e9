//! Tak rules: move legality and application, win detection, and the
//! entry points an orchestration layer calls.
//!
//! - `MoveEngine`: board-dependent checks and copy-on-write application
//! - `WinDetector`: road search and flat counting
//! - `TakRules`: parse -> validate -> apply, plus terminal checks

pub mod engine;
pub mod win;
pub mod game;

pub use engine::{MoveEngine, MoveOutcome};
pub use win::{GameResult, WinDetector, WinKind};
pub use game::{AppliedMove, TakRules};
