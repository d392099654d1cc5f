//! The player's cutting gesture
//!
//! A stroke is an ordered sequence of sampled points, appended in capture
//! order: first point is the origin of the gesture, last is where it ended.
//! It is frozen once the gesture ends and discarded after evaluation.

use glam::Vec2;

use super::shape::Shape;
use crate::consts::STROKE_DENSIFY_SAMPLES;

/// Cross products with magnitude below this classify as [`Side::Left`]
const SIDE_EPSILON: f32 = 1e-6;

/// Which side of the stroke a point falls on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// An ordered sequence of sampled gesture points
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Vec2>,
}

impl Stroke {
    /// Start a stroke at the gesture origin
    pub fn begin(p: Vec2) -> Self {
        Self { points: vec![p] }
    }

    /// Build a stroke from an already-captured point sequence.
    /// Returns `None` on an empty sequence.
    pub fn from_points(points: Vec<Vec2>) -> Option<Self> {
        if points.is_empty() {
            None
        } else {
            Some(Self { points })
        }
    }

    /// Append a sampled point
    pub fn extend(&mut self, p: Vec2) {
        self.points.push(p);
    }

    /// Gesture origin
    #[inline]
    pub fn start(&self) -> Vec2 {
        self.points[0]
    }

    /// Gesture terminus (equals the origin for a single-point stroke)
    #[inline]
    pub fn end(&self) -> Vec2 {
        self.points[self.points.len() - 1]
    }

    /// Sampled points in capture order
    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Straight-line distance from origin to terminus, not arc length.
    /// Callers gate on this to reject accidental taps.
    pub fn reach(&self) -> f32 {
        (self.end() - self.start()).length()
    }

    /// True iff the sampled path has at least one point inside the shape
    /// and at least one outside. A 2-point stroke is densified with
    /// interpolated samples so a straight cut whose endpoints both lie
    /// outside the silhouette still registers.
    pub fn intersects_shape(&self, shape: &Shape) -> bool {
        let mut has_inside = false;
        let mut has_outside = false;

        let mut classify = |p: Vec2| {
            if shape.contains_point(p) {
                has_inside = true;
            } else {
                has_outside = true;
            }
            has_inside && has_outside
        };

        if self.points.len() == 2 {
            let (a, b) = (self.points[0], self.points[1]);
            for i in 0..=STROKE_DENSIFY_SAMPLES {
                let t = i as f32 / STROKE_DENSIFY_SAMPLES as f32;
                if classify(a.lerp(b, t)) {
                    return true;
                }
            }
        } else {
            for &p in &self.points {
                if classify(p) {
                    return true;
                }
            }
        }

        false
    }

    /// Classify a point against the stroke path.
    ///
    /// Finds the path segment closest to the point (clamped projection)
    /// and returns the sign of that segment's cross product with the
    /// point. Points on the path itself (|cross| below epsilon) and
    /// degenerate single-point strokes classify as `Left`; the tie-break
    /// is arbitrary but consistent, which keeps repeated evaluations of
    /// the same cut stable.
    pub fn side_of(&self, p: Vec2) -> Side {
        if self.points.len() < 2 {
            return Side::Left;
        }

        let mut min_dist_sq = f32::INFINITY;
        let mut winning_cross = 0.0;

        for pair in self.points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let dir = b - a;
            let rel = p - a;

            let len_sq = dir.length_squared();
            let t = if len_sq > 0.0 {
                (rel.dot(dir) / len_sq).clamp(0.0, 1.0)
            } else {
                0.0
            };

            let closest = a + dir * t;
            let dist_sq = (p - closest).length_squared();
            if dist_sq < min_dist_sq {
                min_dist_sq = dist_sq;
                winning_cross = dir.perp_dot(rel);
            }
        }

        if winning_cross.abs() < SIDE_EPSILON || winning_cross > 0.0 {
            Side::Left
        } else {
            Side::Right
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertical_stroke() -> Stroke {
        let mut s = Stroke::begin(Vec2::new(100.0, 0.0));
        s.extend(Vec2::new(100.0, 200.0));
        s
    }

    #[test]
    fn test_reach_is_endpoint_distance() {
        let mut s = Stroke::begin(Vec2::new(0.0, 0.0));
        s.extend(Vec2::new(100.0, 0.0));
        // Doubling back shrinks reach even though the path got longer
        s.extend(Vec2::new(3.0, 4.0));
        assert!((s.reach() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_from_points_rejects_empty() {
        assert!(Stroke::from_points(vec![]).is_none());
        assert!(Stroke::from_points(vec![Vec2::ZERO]).is_some());
    }

    #[test]
    fn test_side_of_vertical_stroke() {
        let s = vertical_stroke();
        // Canvas coordinates, y down: smaller x is left of a downward stroke
        assert_eq!(s.side_of(Vec2::new(50.0, 100.0)), Side::Left);
        assert_eq!(s.side_of(Vec2::new(150.0, 100.0)), Side::Right);
    }

    #[test]
    fn test_side_of_on_path_tie_breaks_left() {
        let s = vertical_stroke();
        assert_eq!(s.side_of(Vec2::new(100.0, 50.0)), Side::Left);
    }

    #[test]
    fn test_side_of_curved_path_uses_closest_segment() {
        // An L-shaped path: down, then right
        let mut s = Stroke::begin(Vec2::new(0.0, 0.0));
        s.extend(Vec2::new(0.0, 100.0));
        s.extend(Vec2::new(100.0, 100.0));
        // Near the vertical leg
        assert_eq!(s.side_of(Vec2::new(-10.0, 50.0)), Side::Left);
        assert_eq!(s.side_of(Vec2::new(10.0, 50.0)), Side::Right);
        // Near the horizontal leg the sides flip in screen space
        assert_eq!(s.side_of(Vec2::new(50.0, 90.0)), Side::Right);
        assert_eq!(s.side_of(Vec2::new(50.0, 110.0)), Side::Left);
    }

    #[test]
    fn test_single_point_stroke_classifies_left() {
        let s = Stroke::begin(Vec2::new(10.0, 10.0));
        assert_eq!(s.side_of(Vec2::new(500.0, 500.0)), Side::Left);
    }

    #[test]
    fn test_intersects_shape_pass_through() {
        let shape = Shape::circle(Vec2::new(100.0, 100.0), 50.0);
        // Both endpoints outside, but the straight line crosses the circle
        let mut s = Stroke::begin(Vec2::new(100.0, 0.0));
        s.extend(Vec2::new(100.0, 200.0));
        assert!(s.intersects_shape(&shape));
    }

    #[test]
    fn test_intersects_shape_miss() {
        let shape = Shape::circle(Vec2::new(100.0, 100.0), 50.0);
        let mut s = Stroke::begin(Vec2::new(0.0, 0.0));
        s.extend(Vec2::new(10.0, 10.0));
        assert!(!s.intersects_shape(&shape));
    }

    #[test]
    fn test_intersects_shape_fully_inside_is_not_a_cut() {
        let shape = Shape::circle(Vec2::new(100.0, 100.0), 50.0);
        let mut s = Stroke::begin(Vec2::new(90.0, 100.0));
        s.extend(Vec2::new(110.0, 100.0));
        assert!(!s.intersects_shape(&shape));
    }

    #[test]
    fn test_intersects_shape_multi_point_path() {
        let shape = Shape::circle(Vec2::new(100.0, 100.0), 50.0);
        let mut s = Stroke::begin(Vec2::new(100.0, 30.0));
        for y in (40..=170).step_by(10) {
            s.extend(Vec2::new(100.0, y as f32));
        }
        assert!(s.intersects_shape(&shape));
    }
}
