//! Area-ratio estimation for a cut
//!
//! Exact area bisection against a free-hand (possibly curved or
//! self-crossing) stroke has no closed form, so the estimator supersamples
//! the shape's bounding box: every interior sample is classified left or
//! right of the stroke and the two counts give the area ratio. Cost is
//! proportional to the bounding-box area, and the result is deterministic
//! for identical inputs.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::shape::Shape;
use super::stroke::{Side, Stroke};

/// Quarter-point sample offsets within each integer pixel. Four samples
/// per pixel reduce quantization bias along the silhouette boundary and
/// the stroke itself.
const SUBPIXEL_OFFSETS: [Vec2; 4] = [
    Vec2::new(0.25, 0.25),
    Vec2::new(0.75, 0.25),
    Vec2::new(0.25, 0.75),
    Vec2::new(0.75, 0.75),
];

/// Outcome of evaluating one cut, recomputed per stroke
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitResult {
    /// Share of the silhouette area left of the stroke, in percent
    pub left_percent: f32,
    /// Share right of the stroke; sums with `left_percent` to ~100
    pub right_percent: f32,
    /// Distance from the ideal 50/50 split, in percentage points
    pub deviation: f32,
}

/// Estimate how evenly `stroke` bisects `shape`.
///
/// Returns `None` when the stroke never crosses the silhouette, or when
/// sampling finds no interior points (degenerate shape); both cases mean
/// the cut is not scoreable and the caller should re-prompt.
pub fn compute_split(shape: &Shape, stroke: &Stroke) -> Option<SplitResult> {
    if !stroke.intersects_shape(shape) {
        return None;
    }

    let bbox = shape.bounding_box();
    let mut left: u64 = 0;
    let mut right: u64 = 0;

    for x in (bbox.x.floor() as i32)..(bbox.max_x().ceil() as i32) {
        for y in (bbox.y.floor() as i32)..(bbox.max_y().ceil() as i32) {
            let pixel = Vec2::new(x as f32, y as f32);
            for offset in SUBPIXEL_OFFSETS {
                let sample = pixel + offset;
                if shape.contains_point(sample) {
                    match stroke.side_of(sample) {
                        Side::Left => left += 1,
                        Side::Right => right += 1,
                    }
                }
            }
        }
    }

    let total = left + right;
    if total == 0 {
        return None;
    }

    let left_percent = left as f32 / total as f32 * 100.0;
    Some(SplitResult {
        left_percent,
        right_percent: 100.0 - left_percent,
        deviation: (50.0 - left_percent).abs(),
    })
}
