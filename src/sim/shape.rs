//! Cuttable fruit silhouettes
//!
//! A shape is constructed once per level attempt from the level config and
//! canvas size, then queried read-only by the split estimator. Polygon-like
//! shapes store their vertex ring as offsets from the center, in winding
//! order; a star is generated into plain polygon data at construction time.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, PI};

use crate::rotate_point;

/// Axis-aligned bounding box in world coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    /// Right edge
    #[inline]
    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge
    #[inline]
    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }
}

/// Ordered boundary geometry for rendering; not used by scoring
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryPath {
    /// Full circle
    Arc { center: Vec2, radius: f32 },
    /// Full ellipse, rotated about its center
    EllipseArc {
        center: Vec2,
        radius_x: f32,
        radius_y: f32,
        rotation: f32,
    },
    /// Closed vertex ring in world coordinates
    Polyline(Vec<Vec2>),
}

/// A cuttable 2-D silhouette
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle {
        center: Vec2,
        radius: f32,
    },
    Ellipse {
        center: Vec2,
        radius_x: f32,
        radius_y: f32,
        rotation: f32,
    },
    /// Vertex ring stored as offsets from `center`, consistent winding,
    /// no self-intersection. Stars are stored in this variant too.
    Polygon {
        center: Vec2,
        rotation: f32,
        vertices: Vec<Vec2>,
    },
}

impl Shape {
    pub fn circle(center: Vec2, radius: f32) -> Self {
        Shape::Circle { center, radius }
    }

    pub fn ellipse(center: Vec2, radius_x: f32, radius_y: f32, rotation: f32) -> Self {
        Shape::Ellipse {
            center,
            radius_x,
            radius_y,
            rotation,
        }
    }

    pub fn polygon(center: Vec2, rotation: f32, vertices: Vec<Vec2>) -> Self {
        debug_assert!(vertices.len() >= 3);
        Shape::Polygon {
            center,
            rotation,
            vertices,
        }
    }

    /// Build a star as polygon data: 2 * `points` vertices alternating
    /// outer/inner radius at equal angular steps, starting at -90 degrees
    /// so one point faces up.
    pub fn star(
        center: Vec2,
        outer_radius: f32,
        inner_radius: f32,
        points: usize,
        rotation: f32,
    ) -> Self {
        debug_assert!(points >= 3);
        let vertices = (0..points * 2)
            .map(|i| {
                let angle = (PI / points as f32) * i as f32 - FRAC_PI_2;
                let radius = if i % 2 == 0 {
                    outer_radius
                } else {
                    inner_radius
                };
                Vec2::new(angle.cos(), angle.sin()) * radius
            })
            .collect();
        Shape::Polygon {
            center,
            rotation,
            vertices,
        }
    }

    /// World-space center of the silhouette
    #[inline]
    pub fn center(&self) -> Vec2 {
        match *self {
            Shape::Circle { center, .. }
            | Shape::Ellipse { center, .. }
            | Shape::Polygon { center, .. } => center,
        }
    }

    /// True iff the world-space point lies within the silhouette
    pub fn contains_point(&self, p: Vec2) -> bool {
        match self {
            Shape::Circle { center, radius } => {
                (p - *center).length_squared() <= radius * radius
            }
            Shape::Ellipse {
                center,
                radius_x,
                radius_y,
                rotation,
            } => {
                // Evaluate the quadratic form in the de-rotated local frame
                let local = rotate_point(p - *center, -rotation);
                (local.x * local.x) / (radius_x * radius_x)
                    + (local.y * local.y) / (radius_y * radius_y)
                    <= 1.0
            }
            Shape::Polygon {
                center,
                rotation,
                vertices,
            } => {
                let local = rotate_point(p - *center, -rotation);
                point_in_ring(local, vertices)
            }
        }
    }

    /// Minimal axis-aligned box enclosing the shape in world coordinates.
    /// For the ellipse the box is conservative under rotation (larger
    /// radius on both axes); for polygons it is exact.
    pub fn bounding_box(&self) -> BoundingBox {
        match self {
            Shape::Circle { center, radius } => BoundingBox {
                x: center.x - radius,
                y: center.y - radius,
                width: radius * 2.0,
                height: radius * 2.0,
            },
            Shape::Ellipse {
                center,
                radius_x,
                radius_y,
                ..
            } => {
                let max_radius = radius_x.max(*radius_y);
                BoundingBox {
                    x: center.x - max_radius,
                    y: center.y - max_radius,
                    width: max_radius * 2.0,
                    height: max_radius * 2.0,
                }
            }
            Shape::Polygon {
                center,
                rotation,
                vertices,
            } => {
                let mut min = Vec2::splat(f32::INFINITY);
                let mut max = Vec2::splat(f32::NEG_INFINITY);
                for v in vertices {
                    let world = rotate_point(*v, *rotation) + *center;
                    min = min.min(world);
                    max = max.max(world);
                }
                BoundingBox {
                    x: min.x,
                    y: min.y,
                    width: max.x - min.x,
                    height: max.y - min.y,
                }
            }
        }
    }

    /// Ordered boundary geometry for the renderer
    pub fn boundary_path(&self) -> BoundaryPath {
        match self {
            Shape::Circle { center, radius } => BoundaryPath::Arc {
                center: *center,
                radius: *radius,
            },
            Shape::Ellipse {
                center,
                radius_x,
                radius_y,
                rotation,
            } => BoundaryPath::EllipseArc {
                center: *center,
                radius_x: *radius_x,
                radius_y: *radius_y,
                rotation: *rotation,
            },
            Shape::Polygon {
                center,
                rotation,
                vertices,
            } => BoundaryPath::Polyline(
                vertices
                    .iter()
                    .map(|v| rotate_point(*v, *rotation) + *center)
                    .collect(),
            ),
        }
    }
}

/// Even-odd ray cast: a point is inside iff a horizontal ray crosses an
/// odd number of edges. Edges are (vertex[i], vertex[i-1 mod n]).
/// Rings with fewer than 3 vertices enclose no area and contain nothing;
/// deserialized shapes can carry such rings past the constructors.
fn point_in_ring(p: Vec2, vertices: &[Vec2]) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let vi = vertices[i];
        let vj = vertices[j];
        let straddles = (vi.y > p.y) != (vj.y > p.y);
        if straddles && p.x < (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_contains_point() {
        let shape = Shape::circle(Vec2::new(100.0, 100.0), 50.0);
        assert!(shape.contains_point(Vec2::new(100.0, 100.0)));
        assert!(shape.contains_point(Vec2::new(149.0, 100.0)));
        // Boundary counts as inside
        assert!(shape.contains_point(Vec2::new(150.0, 100.0)));
        assert!(!shape.contains_point(Vec2::new(151.0, 100.0)));
        assert!(!shape.contains_point(Vec2::new(140.0, 140.0)));
    }

    #[test]
    fn test_ellipse_contains_point_rotated() {
        // 80x40 ellipse rotated 90 degrees: long axis now vertical
        let shape = Shape::ellipse(Vec2::new(0.0, 0.0), 80.0, 40.0, FRAC_PI_2);
        assert!(shape.contains_point(Vec2::new(0.0, 75.0)));
        assert!(!shape.contains_point(Vec2::new(75.0, 0.0)));
        assert!(shape.contains_point(Vec2::new(35.0, 0.0)));
    }

    #[test]
    fn test_polygon_contains_point() {
        // Unit-ish square centered on origin
        let square = vec![
            Vec2::new(-50.0, -50.0),
            Vec2::new(50.0, -50.0),
            Vec2::new(50.0, 50.0),
            Vec2::new(-50.0, 50.0),
        ];
        let shape = Shape::polygon(Vec2::new(200.0, 200.0), 0.0, square);
        assert!(shape.contains_point(Vec2::new(200.0, 200.0)));
        assert!(shape.contains_point(Vec2::new(249.0, 249.0)));
        assert!(!shape.contains_point(Vec2::new(251.0, 200.0)));
        assert!(!shape.contains_point(Vec2::new(120.0, 120.0)));
    }

    #[test]
    fn test_polygon_rotation_applies_to_containment() {
        use std::f32::consts::FRAC_PI_4;
        // Wide thin rectangle; rotated 45 degrees its corners move
        let rect = vec![
            Vec2::new(-100.0, -10.0),
            Vec2::new(100.0, -10.0),
            Vec2::new(100.0, 10.0),
            Vec2::new(-100.0, 10.0),
        ];
        let flat = Shape::polygon(Vec2::ZERO, 0.0, rect.clone());
        let tilted = Shape::polygon(Vec2::ZERO, FRAC_PI_4, rect);
        assert!(flat.contains_point(Vec2::new(90.0, 0.0)));
        assert!(!tilted.contains_point(Vec2::new(90.0, 0.0)));
        // Point along the rotated long axis
        assert!(tilted.contains_point(Vec2::new(60.0, 60.0)));
    }

    #[test]
    fn test_star_vertex_ring() {
        let shape = Shape::star(Vec2::ZERO, 100.0, 50.0, 5, 0.0);
        let Shape::Polygon { vertices, .. } = &shape else {
            panic!("star should be stored as polygon data");
        };
        assert_eq!(vertices.len(), 10);
        // First vertex is the top point (-90 degrees)
        assert!((vertices[0].x).abs() < 1e-4);
        assert!((vertices[0].y + 100.0).abs() < 1e-4);
        // Outer and inner radii alternate
        assert!((vertices[0].length() - 100.0).abs() < 1e-3);
        assert!((vertices[1].length() - 50.0).abs() < 1e-3);
        // Star tip is inside, the notch between tips is not
        assert!(shape.contains_point(Vec2::new(0.0, -95.0)));
        assert!(!shape.contains_point(Vec2::new(0.0, 80.0)));
    }

    #[test]
    fn test_degenerate_polygon_ring_contains_nothing() {
        // JSON construction bypasses Shape::polygon, so a short ring must
        // still classify every point as outside instead of panicking
        let json = r#"{"Polygon":{"center":[0.0,0.0],"rotation":0.0,"vertices":[]}}"#;
        let shape: Shape = serde_json::from_str(json).expect("polygon deserializes");
        assert!(!shape.contains_point(Vec2::ZERO));

        let json = r#"{"Polygon":{"center":[0.0,0.0],"rotation":0.0,"vertices":[[-10.0,0.0],[10.0,0.0]]}}"#;
        let shape: Shape = serde_json::from_str(json).expect("polygon deserializes");
        assert!(!shape.contains_point(Vec2::ZERO));
    }

    #[test]
    fn test_bounding_box_circle() {
        let shape = Shape::circle(Vec2::new(100.0, 100.0), 50.0);
        let bbox = shape.bounding_box();
        assert_eq!(bbox.x, 50.0);
        assert_eq!(bbox.y, 50.0);
        assert_eq!(bbox.width, 100.0);
        assert_eq!(bbox.height, 100.0);
        assert_eq!(bbox.max_x(), 150.0);
    }

    #[test]
    fn test_bounding_box_rotated_polygon() {
        use std::f32::consts::FRAC_PI_4;
        let square = vec![
            Vec2::new(-10.0, -10.0),
            Vec2::new(10.0, -10.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(-10.0, 10.0),
        ];
        let shape = Shape::polygon(Vec2::ZERO, FRAC_PI_4, square);
        let bbox = shape.bounding_box();
        // 20x20 square rotated 45 degrees spans 20*sqrt(2) on both axes
        let expected = 20.0 * std::f32::consts::SQRT_2;
        assert!((bbox.width - expected).abs() < 1e-3);
        assert!((bbox.height - expected).abs() < 1e-3);
    }

    #[test]
    fn test_boundary_path_polygon_world_coords() {
        let tri = vec![
            Vec2::new(0.0, -10.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(-10.0, 10.0),
        ];
        let shape = Shape::polygon(Vec2::new(5.0, 5.0), 0.0, tri);
        let BoundaryPath::Polyline(ring) = shape.boundary_path() else {
            panic!("polygon boundary should be a polyline");
        };
        assert_eq!(ring.len(), 3);
        assert_eq!(ring[0], Vec2::new(5.0, -5.0));
    }
}
