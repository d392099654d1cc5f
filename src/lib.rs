//! Fruit Slice - a fruit-cutting arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic cut evaluation (shapes, strokes, split estimation, scoring)
//! - `levels`: Data-driven level configuration and shape construction
//!
//! Rendering, input capture, and persistence live outside this crate; the
//! core consumes point sequences and level records and produces split
//! results, scores, and boundary geometry for a renderer to draw.

pub mod levels;
pub mod sim;

pub use levels::{LevelConfig, LevelSet, ShapeKind};
pub use sim::{CutOutcome, Grade, LevelSession, Shape, SplitResult, Stroke, compute_split};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Minimum stroke reach (start-to-end distance, px) for a cut attempt
    pub const MIN_STROKE_REACH: f32 = 20.0;
    /// Interpolated samples added when testing a 2-point stroke against a shape
    pub const STROKE_DENSIFY_SAMPLES: usize = 20;
    /// Maximum time bonus points for a fast cut
    pub const MAX_TIME_BONUS: f32 = 10.0;
}

/// Rotate a point about the origin by `angle` radians
#[inline]
pub fn rotate_point(p: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos)
}
