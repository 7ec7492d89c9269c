// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Render instructions for type-specific decorations.
//!
//! These are plain geometry in screen space. The drawing layer turns them
//! into SVG or canvas calls; nothing here touches a surface.

use super::formulas::normalize_line_angle;
use crate::models::annotation::Point;
use serde::Serialize;

/// Stroke width of decoration lines, in screen pixels.
pub const DECORATION_WIDTH: f64 = 1.5;

/// A single decoration primitive.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RenderElement {
    Line {
        from: Point,
        to: Point,
        color: String,
        width: f64,
        dashed: bool,
    },
    /// Circular arc. Angles are screen directions in degrees; the flags
    /// follow SVG arc semantics (`sweep` = clockwise on screen).
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        large_arc: bool,
        sweep: bool,
        color: String,
    },
    /// Small filled circle marking a derived (virtual) point.
    Marker {
        center: Point,
        radius: f64,
        color: String,
    },
}

impl RenderElement {
    pub fn line(from: Point, to: Point, color: &str) -> Self {
        RenderElement::Line {
            from,
            to,
            color: color.to_string(),
            width: DECORATION_WIDTH,
            dashed: false,
        }
    }

    pub fn dashed(from: Point, to: Point, color: &str) -> Self {
        RenderElement::Line {
            from,
            to,
            color: color.to_string(),
            width: DECORATION_WIDTH,
            dashed: true,
        }
    }

    pub fn marker(center: Point, radius: f64, color: &str) -> Self {
        RenderElement::Marker {
            center,
            radius,
            color: color.to_string(),
        }
    }

    /// The shorter arc from direction `from_deg` to direction `to_deg`.
    pub fn arc(center: Point, radius: f64, from_deg: f64, to_deg: f64, color: &str) -> Self {
        let mut delta = to_deg - from_deg;
        while delta > 180.0 {
            delta -= 360.0;
        }
        while delta <= -180.0 {
            delta += 360.0;
        }
        RenderElement::Arc {
            center,
            radius,
            start_angle: from_deg,
            end_angle: from_deg + delta,
            large_arc: false,
            sweep: delta > 0.0,
            color: color.to_string(),
        }
    }

    /// Start and end points of an arc, for SVG `A` commands.
    pub fn arc_endpoints(&self) -> Option<(Point, Point)> {
        match self {
            RenderElement::Arc {
                center,
                radius,
                start_angle,
                end_angle,
                ..
            } => Some((
                polar(center, *radius, *start_angle),
                polar(center, *radius, *end_angle),
            )),
            _ => None,
        }
    }
}

/// Point at `radius` from `center` in screen direction `degrees`.
pub fn polar(center: &Point, radius: f64, degrees: f64) -> Point {
    let rad = degrees.to_radians();
    Point::new(center.x + radius * rad.cos(), center.y + radius * rad.sin())
}

/// Decoration size multiplier for the current zoom.
pub fn decoration_scale(scale: f64) -> f64 {
    if scale.is_finite() && scale > 0.0 {
        scale.clamp(0.5, 2.0)
    } else {
        1.0
    }
}

/// Unit normal of the segment `a -> b`, or `None` for a zero-length segment.
pub fn unit_normal(a: &Point, b: &Point) -> Option<(f64, f64)> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len = dx.hypot(dy);
    (len > 0.0).then(|| (-dy / len, dx / len))
}

/// Direction of a line folded to `(-90, 90]`, for arcs against the horizontal.
pub fn line_direction(a: &Point, b: &Point) -> f64 {
    normalize_line_angle((b.y - a.y).atan2(b.x - a.x).to_degrees())
}
