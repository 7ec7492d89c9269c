// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Angle formulas shared by the measurement families.
//!
//! All angles are in degrees. Image y points down, so a positive
//! `atan2` angle turns clockwise on screen.

use crate::models::annotation::Point;

/// Direction of the segment `a -> b`, in `(-180, 180]`.
pub fn segment_angle(a: &Point, b: &Point) -> f64 {
    (b.y - a.y).atan2(b.x - a.x).to_degrees()
}

/// Fold a direction into the line-angle band `(-90, 90]`.
pub fn normalize_line_angle(degrees: f64) -> f64 {
    if degrees > 90.0 {
        degrees - 180.0
    } else if degrees <= -90.0 {
        degrees + 180.0
    } else {
        degrees
    }
}

/// Signed angle of the line through `a` and `b` against the horizontal.
///
/// Positive when the image-left end is higher. Swapping the points gives
/// the same value.
pub fn angle_to_horizontal(a: &Point, b: &Point) -> f64 {
    normalize_line_angle(segment_angle(a, b))
}

/// Cobb angle between line `p0-p1` and line `p2-p3`, in `[0, 180)`.
///
/// Each line's direction is first folded into `(-90, 90]`, so the result
/// does not depend on the order of either line's endpoints. Curves whose
/// endplates diverge by more than 90 degrees keep their obtuse value.
pub fn cobb_angle(p0: &Point, p1: &Point, p2: &Point, p3: &Point) -> f64 {
    (angle_to_horizontal(p2, p3) - angle_to_horizontal(p0, p1)).abs()
}

/// Unsigned angle between two vectors in `[0, 180]`.
///
/// `None` when either vector has zero length.
pub fn angle_between_vectors(u: (f64, f64), v: (f64, f64)) -> Option<f64> {
    let len_u = u.0.hypot(u.1);
    let len_v = v.0.hypot(v.1);
    if len_u == 0.0 || len_v == 0.0 {
        return None;
    }
    let cos = (u.0 * v.0 + u.1 * v.1) / (len_u * len_v);
    Some(cos.clamp(-1.0, 1.0).acos().to_degrees())
}

/// Angle at `vertex` between the rays towards `a` and `b`.
pub fn angle_at_vertex(vertex: &Point, a: &Point, b: &Point) -> Option<f64> {
    angle_between_vectors(vector(vertex, a), vector(vertex, b))
}

/// Vector from `from` to `to`.
pub fn vector(from: &Point, to: &Point) -> (f64, f64) {
    (to.x - from.x, to.y - from.y)
}

/// One-decimal formatting used for every reported value.
///
/// Negative zero prints as `0.0`.
pub fn format_value(value: f64) -> String {
    let formatted = format!("{:.1}", value);
    if formatted == "-0.0" {
        "0.0".to_string()
    } else {
        formatted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_angle_to_horizontal_cases() {
        let origin = Point::new(0.0, 0.0);
        assert_eq!(angle_to_horizontal(&origin, &Point::new(100.0, 0.0)), 0.0);
        // Straight down stays at the top of the band
        assert!((angle_to_horizontal(&origin, &Point::new(0.0, 100.0)) - 90.0).abs() < EPSILON);
        // Straight up wraps to +90 as well
        assert!((angle_to_horizontal(&origin, &Point::new(0.0, -100.0)) - 90.0).abs() < EPSILON);

        let wrapped = angle_to_horizontal(&origin, &Point::new(-100.0, -1.0));
        assert!(wrapped > -90.0 && wrapped <= 90.0);
        assert!((wrapped - (1.0f64 / 100.0).atan().to_degrees()).abs() < EPSILON);
    }

    #[test]
    fn test_angle_to_horizontal_is_order_invariant() {
        let a = Point::new(10.0, 40.0);
        let b = Point::new(90.0, 25.0);
        assert!((angle_to_horizontal(&a, &b) - angle_to_horizontal(&b, &a)).abs() < EPSILON);
    }

    #[test]
    fn test_cobb_angle_basic_and_symmetric() {
        let p0 = Point::new(0.0, 0.0);
        let p1 = Point::new(100.0, 0.0);
        let p2 = Point::new(0.0, 200.0);
        let p3 = Point::new(100.0, 200.0 - 100.0 * 30f64.to_radians().tan());

        let expected = 30.0;
        assert!((cobb_angle(&p0, &p1, &p2, &p3) - expected).abs() < 1e-6);
        assert!((cobb_angle(&p1, &p0, &p2, &p3) - expected).abs() < 1e-6);
        assert!((cobb_angle(&p0, &p1, &p3, &p2) - expected).abs() < 1e-6);
        assert!((cobb_angle(&p1, &p0, &p3, &p2) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_cobb_angle_keeps_obtuse_curves() {
        // Upper endplate at +60 degrees, lower at -60, both drawn left to right
        let p0 = Point::new(0.0, 0.0);
        let p1 = Point::new(50.0, 50.0 * 3f64.sqrt());
        let p2 = Point::new(0.0, 400.0);
        let p3 = Point::new(50.0, 400.0 - 50.0 * 3f64.sqrt());

        assert!((cobb_angle(&p0, &p1, &p2, &p3) - 120.0).abs() < 1e-6);
        assert!((cobb_angle(&p1, &p0, &p2, &p3) - 120.0).abs() < 1e-6);
        assert!((cobb_angle(&p0, &p1, &p3, &p2) - 120.0).abs() < 1e-6);
        assert_eq!(format_value(cobb_angle(&p0, &p1, &p2, &p3)), "120.0");
    }

    #[test]
    fn test_angle_between_vectors() {
        assert!((angle_between_vectors((1.0, 0.0), (0.0, 1.0)).unwrap() - 90.0).abs() < EPSILON);
        assert!((angle_between_vectors((1.0, 0.0), (-3.0, 0.0)).unwrap() - 180.0).abs() < EPSILON);
        // Parallel vectors whose normalized dot overshoots 1 still resolve
        assert_eq!(angle_between_vectors((0.1, 0.2), (0.3, 0.6000000000000001)).map(|a| a < 1e-5), Some(true));
        assert_eq!(angle_between_vectors((0.0, 0.0), (1.0, 0.0)), None);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(18.0), "18.0");
        assert_eq!(format_value(12.345), "12.3");
        assert_eq!(format_value(-0.04), "0.0");
        assert_eq!(format_value(-3.26), "-3.3");
    }
}
