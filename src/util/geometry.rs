// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! Pure, total functions over [`Point`]s: distances, bounding boxes,
//! centres, and the boundary-band and edge-proximity tests used by
//! hit-testing. None of these fail on degenerate input.

use crate::models::annotation::Point;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }
}

/// Euclidean distance between two points.
pub fn distance(a: &Point, b: &Point) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Midpoint of a segment.
pub fn midpoint(a: &Point, b: &Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Distance from `p` to the segment `start`-`end`.
///
/// The projection parameter is clamped to `[0, 1]`. A zero-length segment
/// degrades to the point-to-point distance.
pub fn point_to_segment_distance(p: &Point, start: &Point, end: &Point) -> f64 {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return distance(p, start);
    }

    let t = (((p.x - start.x) * dx + (p.y - start.y) * dy) / len_sq).clamp(0.0, 1.0);
    let projection = Point::new(start.x + t * dx, start.y + t * dy);
    distance(p, &projection)
}

/// Bounding box of a point set. Empty input yields the all-zero box.
pub fn bounding_box(points: &[Point]) -> BoundingBox {
    let Some(first) = points.first() else {
        return BoundingBox::default();
    };

    points.iter().skip(1).fold(
        BoundingBox {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        },
        |bb, p| BoundingBox {
            min_x: bb.min_x.min(p.x),
            max_x: bb.max_x.max(p.x),
            min_y: bb.min_y.min(p.y),
            max_y: bb.max_y.max(p.y),
        },
    )
}

/// Centre of the bounding box of `points`.
///
/// This is NOT the vertex mean; see [`vertex_mean`]. The two agree for
/// rectangles and other centrally symmetric shapes only.
pub fn centroid(points: &[Point]) -> Point {
    bounding_box(points).center()
}

/// Arithmetic mean of the vertices. Empty input yields the origin.
pub fn vertex_mean(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::default();
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point::new(sx / n, sy / n)
}

/// Boundary-band test for a circle: `|dist - radius| <= tolerance`.
pub fn is_point_in_circle(p: &Point, center: &Point, radius: f64, tolerance: f64) -> bool {
    (distance(p, center) - radius).abs() <= tolerance
}

/// Boundary-band test for an axis-aligned ellipse.
///
/// The normalized elliptical distance must deviate from 1 by no more than
/// `tolerance / min(radius_x, radius_y)`. Degenerate radii never match.
pub fn is_point_in_ellipse(
    p: &Point,
    center: &Point,
    radius_x: f64,
    radius_y: f64,
    tolerance: f64,
) -> bool {
    if radius_x <= 0.0 || radius_y <= 0.0 {
        return false;
    }
    let nx = (p.x - center.x) / radius_x;
    let ny = (p.y - center.y) / radius_y;
    let normalized = (nx * nx + ny * ny).sqrt();
    (normalized - 1.0).abs() <= tolerance / radius_x.min(radius_y)
}

/// Interior-or-edge test over the box spanned by two corners in any order.
pub fn is_point_in_rectangle(p: &Point, corner1: &Point, corner2: &Point) -> bool {
    let bb = bounding_box(&[*corner1, *corner2]);
    p.x >= bb.min_x && p.x <= bb.max_x && p.y >= bb.min_y && p.y <= bb.max_y
}

/// The four corners of the box spanned by two corners, clockwise from top-left.
pub fn rectangle_corners(corner1: &Point, corner2: &Point) -> [Point; 4] {
    let bb = bounding_box(&[*corner1, *corner2]);
    [
        Point::new(bb.min_x, bb.min_y),
        Point::new(bb.max_x, bb.min_y),
        Point::new(bb.max_x, bb.max_y),
        Point::new(bb.min_x, bb.max_y),
    ]
}

/// Whether `p` lies within `tolerance` of any edge of the closed loop.
///
/// Fewer than three vertices do not form a loop and never match.
pub fn is_point_near_polygon_edge(p: &Point, vertices: &[Point], tolerance: f64) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    vertices.iter().enumerate().any(|(i, start)| {
        let end = &vertices[(i + 1) % vertices.len()];
        point_to_segment_distance(p, start, end) <= tolerance
    })
}

/// Whether `p` lies within `tolerance` of any of the rectangle's four edges.
pub fn is_point_near_rectangle_edge(
    p: &Point,
    corner1: &Point,
    corner2: &Point,
    tolerance: f64,
) -> bool {
    is_point_near_polygon_edge(p, &rectangle_corners(corner1, corner2), tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_distance() {
        assert!((distance(&Point::new(0.0, 0.0), &Point::new(3.0, 4.0)) - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_point_to_segment_projection_and_clamp() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);

        // Perpendicular foot inside the segment
        assert!((point_to_segment_distance(&Point::new(5.0, 3.0), &a, &b) - 3.0).abs() < EPSILON);
        // Beyond the end: clamped to the endpoint
        assert!(
            (point_to_segment_distance(&Point::new(13.0, 4.0), &a, &b) - 5.0).abs() < EPSILON
        );
        // Before the start
        assert!(
            (point_to_segment_distance(&Point::new(-6.0, 8.0), &a, &b) - 10.0).abs() < EPSILON
        );
    }

    #[test]
    fn test_point_to_segment_degenerate() {
        let s = Point::new(2.0, 2.0);
        let p = Point::new(5.0, 6.0);
        assert_eq!(point_to_segment_distance(&p, &s, &s), distance(&p, &s));
    }

    #[test]
    fn test_bounding_box_empty_and_filled() {
        assert_eq!(bounding_box(&[]), BoundingBox::default());

        let bb = bounding_box(&[
            Point::new(3.0, -1.0),
            Point::new(-2.0, 4.0),
            Point::new(1.0, 1.0),
        ]);
        assert_eq!(bb.min_x, -2.0);
        assert_eq!(bb.max_x, 3.0);
        assert_eq!(bb.min_y, -1.0);
        assert_eq!(bb.max_y, 4.0);
    }

    #[test]
    fn test_centroid_conventions_differ_for_skewed_quad() {
        let quad = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(8.0, 10.0),
        ];
        assert_eq!(centroid(&quad), Point::new(5.0, 5.0));
        assert_eq!(vertex_mean(&quad), Point::new(7.0, 5.0));

        // They coincide on a rectangle
        let rect = rectangle_corners(&Point::new(0.0, 0.0), &Point::new(4.0, 2.0));
        assert_eq!(centroid(&rect), vertex_mean(&rect));
    }

    #[test]
    fn test_circle_boundary_band() {
        let c = Point::new(0.0, 0.0);
        assert!(is_point_in_circle(&Point::new(10.0, 0.0), &c, 10.0, 1.0));
        assert!(is_point_in_circle(&Point::new(0.0, 10.8), &c, 10.0, 1.0));
        // Interior is not a hit
        assert!(!is_point_in_circle(&Point::new(0.0, 0.0), &c, 10.0, 1.0));
        assert!(!is_point_in_circle(&Point::new(12.0, 0.0), &c, 10.0, 1.0));
    }

    #[test]
    fn test_ellipse_boundary_band() {
        let c = Point::new(0.0, 0.0);
        assert!(is_point_in_ellipse(&Point::new(20.0, 0.0), &c, 20.0, 10.0, 2.0));
        assert!(is_point_in_ellipse(&Point::new(0.0, 11.0), &c, 20.0, 10.0, 2.0));
        assert!(!is_point_in_ellipse(&Point::new(0.0, 0.0), &c, 20.0, 10.0, 2.0));
        assert!(!is_point_in_ellipse(&Point::new(0.0, 13.0), &c, 20.0, 10.0, 2.0));
        assert!(!is_point_in_ellipse(&Point::new(0.0, 0.0), &c, 0.0, 10.0, 2.0));
    }

    #[test]
    fn test_rectangle_containment_order_independent() {
        let a = Point::new(10.0, 10.0);
        let b = Point::new(0.0, 0.0);
        assert!(is_point_in_rectangle(&Point::new(5.0, 5.0), &a, &b));
        assert!(is_point_in_rectangle(&Point::new(10.0, 0.0), &b, &a));
        assert!(!is_point_in_rectangle(&Point::new(10.1, 5.0), &a, &b));
    }

    #[test]
    fn test_edge_proximity() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(100.0, 50.0);
        assert!(is_point_near_rectangle_edge(&Point::new(50.0, 2.0), &a, &b, 3.0));
        // Centre of the box is far from every edge
        assert!(!is_point_near_rectangle_edge(&Point::new(50.0, 25.0), &a, &b, 3.0));

        let tri = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(0.0, 10.0)];
        // Closing edge back to the first vertex counts
        assert!(is_point_near_polygon_edge(&Point::new(5.0, 5.5), &tri, 1.0));
        assert!(!is_point_near_polygon_edge(&Point::new(0.0, 0.0), &tri[..2], 1.0));
    }
}
