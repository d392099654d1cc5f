//! Deterministic cut-evaluation core
//!
//! All scoring-relevant logic lives here. This module must be pure and
//! deterministic:
//! - Identical shape + stroke inputs produce identical results
//! - No randomness, no I/O, no platform dependencies
//! - The only side effect is logging at the session boundary

pub mod score;
pub mod session;
pub mod shape;
pub mod split;
pub mod stroke;

pub use score::{Grade, ScoreBands, grade, score};
pub use session::{CutOutcome, CutScore, LevelSession, SessionPhase};
pub use shape::{BoundaryPath, BoundingBox, Shape};
pub use split::{SplitResult, compute_split};
pub use stroke::{Side, Stroke};
