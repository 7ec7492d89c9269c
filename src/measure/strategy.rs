// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Per-family measurement behaviour.
//!
//! Every family implements [`MeasurementStrategy`]. [`MeasurementKind`]
//! is the closed set of families the catalog can refer to.
//!
//! Point-count contract: `calculate` returns an empty list and
//! `label_position` returns a best-effort position whenever fewer points
//! than required are present. Neither ever panics.

use super::calibration::CalculationContext;
use super::formulas::{
    angle_at_vertex, angle_between_vectors, angle_to_horizontal, cobb_angle, segment_angle,
    vector,
};
use super::render::{decoration_scale, line_direction, polar, unit_normal, RenderElement};
use super::MeasurementResult;
use crate::models::annotation::Point;
use crate::util::geometry::{
    centroid, distance, is_point_in_circle, is_point_in_ellipse, is_point_near_polygon_edge,
    is_point_near_rectangle_edge, midpoint, point_to_segment_distance, vertex_mean,
};

/// Label distance from its anchor geometry, in screen pixels.
pub const LABEL_OFFSET: f64 = 20.0;
/// Base radius of angle arcs, in screen pixels.
pub const ARC_RADIUS: f64 = 24.0;
/// How far Cobb endplate lines are extended past their endpoints.
pub const LINE_EXTENSION: f64 = 40.0;
/// Length of the perpendiculars drawn from Cobb endplate lines.
pub const PERPENDICULAR_LENGTH: f64 = 50.0;
/// Length of each arrowhead stroke.
pub const ARROW_HEAD_LENGTH: f64 = 12.0;
/// Radius of virtual-point markers.
pub const MARKER_RADIUS: f64 = 3.0;

/// Behaviour shared by every measurement family.
pub trait MeasurementStrategy {
    /// Clinical results for image-space `points`. Empty when incomplete.
    fn calculate(&self, points: &[Point], context: &CalculationContext) -> Vec<MeasurementResult>;

    /// Image-space anchor of the value label at zoom `scale`.
    fn label_position(&self, points: &[Point], scale: f64) -> Point;

    /// Whether the screen-space `mouse` is within `tolerance` of the
    /// measurement drawn through `screen_points`.
    fn in_range(&self, mouse: &Point, screen_points: &[Point], tolerance: f64) -> bool;

    /// Extra decoration geometry, in screen space.
    fn special_elements(
        &self,
        _screen_points: &[Point],
        _color: &str,
        _scale: f64,
    ) -> Option<Vec<RenderElement>> {
        None
    }
}

/// Sign handling for two-point angles against the horizontal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleMode {
    /// Absolute value.
    Magnitude,
    /// Signed; positive when the image-left end is higher.
    ///
    /// Assumes the film shows the patient's left on the image left. A
    /// mirrored film silently flips the sign.
    Directional,
}

/// Axis along which a two-point distance is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Geometric kind of an auxiliary annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Centre, then a point on the circle.
    Circle,
    /// Centre, then a bounding-box corner (`rx = |dx|`, `ry = |dy|`).
    Ellipse,
    /// Two opposite corners.
    Rectangle,
    /// Tail, then head.
    Arrow,
    /// Closed loop of any number of vertices.
    Polygon,
}

/// Two-point angle against the horizontal (tilt / slope family).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineAngle {
    pub label: &'static str,
    pub mode: AngleMode,
}

/// Four-point angle between two endplate lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CobbAngle {
    pub label: &'static str,
}

/// Pelvic incidence: `[sacral endplate A, sacral endplate B, hip axis]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PelvicIncidence;

/// Pelvic tilt: `[sacral endplate A, sacral endplate B, hip axis]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PelvicTilt;

/// T1 pelvic angle: four T1 body corners, hip axis, two S1 endplate points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct T1PelvicAngle;

/// Two-point distance along one axis, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisDistance {
    pub label: &'static str,
    pub axis: Axis,
}

/// Two-point Euclidean length, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub label: &'static str,
}

/// Three-point angle at the middle point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexAngle {
    pub label: &'static str,
}

/// Auxiliary shape with no clinical value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AuxiliaryShape {
    pub shape: ShapeKind,
}

/// Closed set of measurement families.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasurementKind {
    LineAngle(LineAngle),
    Cobb(CobbAngle),
    PelvicIncidence(PelvicIncidence),
    PelvicTilt(PelvicTilt),
    T1PelvicAngle(T1PelvicAngle),
    AxisDistance(AxisDistance),
    Length(Length),
    VertexAngle(VertexAngle),
    Shape(AuxiliaryShape),
}

impl MeasurementKind {
    /// The family's behaviour.
    pub fn strategy(&self) -> &dyn MeasurementStrategy {
        match self {
            MeasurementKind::LineAngle(s) => s,
            MeasurementKind::Cobb(s) => s,
            MeasurementKind::PelvicIncidence(s) => s,
            MeasurementKind::PelvicTilt(s) => s,
            MeasurementKind::T1PelvicAngle(s) => s,
            MeasurementKind::AxisDistance(s) => s,
            MeasurementKind::Length(s) => s,
            MeasurementKind::VertexAngle(s) => s,
            MeasurementKind::Shape(s) => s,
        }
    }

    /// Geometric kind, for auxiliary shapes only.
    pub fn shape(&self) -> Option<ShapeKind> {
        match self {
            MeasurementKind::Shape(s) => Some(s.shape),
            _ => None,
        }
    }
}

fn label_offset(scale: f64) -> f64 {
    if scale.is_finite() && scale > 0.0 {
        LABEL_OFFSET / scale
    } else {
        LABEL_OFFSET
    }
}

/// Fallback anchor for incomplete point sets.
fn partial_anchor(points: &[Point]) -> Point {
    vertex_mean(points)
}

fn near_any_point(mouse: &Point, points: &[Point], tolerance: f64) -> bool {
    points.iter().any(|p| distance(mouse, p) <= tolerance)
}

fn near_any_segment(mouse: &Point, segments: &[(Point, Point)], tolerance: f64) -> bool {
    segments
        .iter()
        .any(|(a, b)| point_to_segment_distance(mouse, a, b) <= tolerance)
}

/// Shape-specific hit test over screen-space points.
///
/// Circles and ellipses use the boundary band, rectangles and polygons the
/// edge distance; interiors do not count.
pub fn shape_in_range(shape: ShapeKind, mouse: &Point, points: &[Point], tolerance: f64) -> bool {
    match shape {
        ShapeKind::Polygon => is_point_near_polygon_edge(mouse, points, tolerance),
        _ if points.len() < 2 => false,
        ShapeKind::Circle => {
            let radius = distance(&points[0], &points[1]);
            is_point_in_circle(mouse, &points[0], radius, tolerance)
        }
        ShapeKind::Ellipse => {
            let rx = (points[1].x - points[0].x).abs();
            let ry = (points[1].y - points[0].y).abs();
            is_point_in_ellipse(mouse, &points[0], rx, ry, tolerance)
        }
        ShapeKind::Rectangle => {
            is_point_near_rectangle_edge(mouse, &points[0], &points[1], tolerance)
        }
        ShapeKind::Arrow => point_to_segment_distance(mouse, &points[0], &points[1]) <= tolerance,
    }
}

impl MeasurementStrategy for LineAngle {
    fn calculate(&self, points: &[Point], _context: &CalculationContext) -> Vec<MeasurementResult> {
        let [a, b, ..] = points else {
            return Vec::new();
        };
        let angle = angle_to_horizontal(a, b);
        let value = match self.mode {
            AngleMode::Magnitude => angle.abs(),
            AngleMode::Directional => angle,
        };
        vec![MeasurementResult::angle(self.label, value)]
    }

    fn label_position(&self, points: &[Point], scale: f64) -> Point {
        match points {
            [a, b, ..] => midpoint(a, b).offset(0.0, -label_offset(scale)),
            _ => partial_anchor(points),
        }
    }

    fn in_range(&self, mouse: &Point, screen_points: &[Point], tolerance: f64) -> bool {
        match screen_points {
            [a, b, ..] => near_any_segment(mouse, &[(*a, *b)], tolerance),
            _ => near_any_point(mouse, screen_points, tolerance),
        }
    }

    fn special_elements(
        &self,
        screen_points: &[Point],
        color: &str,
        scale: f64,
    ) -> Option<Vec<RenderElement>> {
        let [a, b, ..] = screen_points else {
            return None;
        };
        let (left, right) = if a.x <= b.x { (a, b) } else { (b, a) };
        let length = distance(left, right);
        if length == 0.0 {
            return None;
        }

        let radius = (ARC_RADIUS * decoration_scale(scale)).min(length / 2.0);
        Some(vec![
            RenderElement::dashed(*left, left.offset(length, 0.0), color),
            RenderElement::arc(*left, radius, 0.0, line_direction(left, right), color),
        ])
    }
}

impl MeasurementStrategy for CobbAngle {
    fn calculate(&self, points: &[Point], _context: &CalculationContext) -> Vec<MeasurementResult> {
        let [p0, p1, p2, p3, ..] = points else {
            return Vec::new();
        };
        vec![MeasurementResult::angle(self.label, cobb_angle(p0, p1, p2, p3))]
    }

    /// Cobb labels sit right of the bounding-box centre of the four points.
    fn label_position(&self, points: &[Point], scale: f64) -> Point {
        if points.len() >= 4 {
            centroid(&points[..4]).offset(label_offset(scale), 0.0)
        } else {
            partial_anchor(points)
        }
    }

    fn in_range(&self, mouse: &Point, screen_points: &[Point], tolerance: f64) -> bool {
        let segments: Vec<(Point, Point)> = screen_points
            .chunks_exact(2)
            .take(2)
            .map(|pair| (pair[0], pair[1]))
            .collect();
        near_any_segment(mouse, &segments, tolerance)
            || near_any_point(mouse, &screen_points[..screen_points.len().min(4)], tolerance)
    }

    fn special_elements(
        &self,
        screen_points: &[Point],
        color: &str,
        scale: f64,
    ) -> Option<Vec<RenderElement>> {
        let [p0, p1, p2, p3, ..] = screen_points else {
            return None;
        };
        let k = decoration_scale(scale);
        let lines = [(*p0, *p1, midpoint(p2, p3)), (*p2, *p3, midpoint(p0, p1))];

        let mut elements = Vec::new();
        for (a, b, other_mid) in lines {
            let length = distance(&a, &b);
            let Some((nx, ny)) = unit_normal(&a, &b) else {
                continue;
            };
            let (ux, uy) = ((b.x - a.x) / length, (b.y - a.y) / length);
            let ext = LINE_EXTENSION * k;
            elements.push(RenderElement::dashed(
                a.offset(-ux * ext, -uy * ext),
                b.offset(ux * ext, uy * ext),
                color,
            ));

            // Perpendicular points towards the other endplate line
            let mid = midpoint(&a, &b);
            let (tx, ty) = vector(&mid, &other_mid);
            let sign = if nx * tx + ny * ty >= 0.0 { 1.0 } else { -1.0 };
            let len = PERPENDICULAR_LENGTH * k;
            elements.push(RenderElement::dashed(
                mid,
                mid.offset(sign * nx * len, sign * ny * len),
                color,
            ));
        }
        (!elements.is_empty()).then_some(elements)
    }
}

/// Sacral midpoint and hip axis of a pelvic point set.
fn pelvic_landmarks(points: &[Point]) -> Option<(Point, Point, Point, Point)> {
    match points {
        [a, b, hip, ..] => Some((*a, *b, midpoint(a, b), *hip)),
        _ => None,
    }
}

fn pelvic_label(points: &[Point], scale: f64) -> Point {
    match pelvic_landmarks(points) {
        Some((_, _, mid, hip)) => midpoint(&mid, &hip).offset(label_offset(scale), 0.0),
        None => partial_anchor(points),
    }
}

fn pelvic_in_range(mouse: &Point, screen_points: &[Point], tolerance: f64) -> bool {
    match pelvic_landmarks(screen_points) {
        Some((a, b, mid, hip)) => near_any_segment(mouse, &[(a, b), (mid, hip)], tolerance),
        None => near_any_point(mouse, screen_points, tolerance),
    }
}

impl MeasurementStrategy for PelvicIncidence {
    /// Angle between the sacral endplate perpendicular and the line to the
    /// hip axis, taking the perpendicular that faces the hip axis.
    fn calculate(&self, points: &[Point], _context: &CalculationContext) -> Vec<MeasurementResult> {
        let Some((a, b, mid, hip)) = pelvic_landmarks(points) else {
            return Vec::new();
        };
        let (cx, cy) = vector(&a, &b);
        let Some(angle) = angle_between_vectors((-cy, cx), vector(&mid, &hip)) else {
            return Vec::new();
        };
        let folded = if angle > 90.0 { 180.0 - angle } else { angle };
        vec![MeasurementResult::angle("PI", folded)]
    }

    fn label_position(&self, points: &[Point], scale: f64) -> Point {
        pelvic_label(points, scale)
    }

    fn in_range(&self, mouse: &Point, screen_points: &[Point], tolerance: f64) -> bool {
        pelvic_in_range(mouse, screen_points, tolerance)
    }

    fn special_elements(
        &self,
        screen_points: &[Point],
        color: &str,
        scale: f64,
    ) -> Option<Vec<RenderElement>> {
        let (a, b, mid, hip) = pelvic_landmarks(screen_points)?;
        let (nx, ny) = unit_normal(&a, &b)?;
        let length = distance(&mid, &hip);
        if length == 0.0 {
            return None;
        }
        let (tx, ty) = vector(&mid, &hip);
        let sign = if nx * tx + ny * ty >= 0.0 { 1.0 } else { -1.0 };
        let perp_end = mid.offset(sign * nx * length, sign * ny * length);

        let radius = (ARC_RADIUS * decoration_scale(scale)).min(length / 2.0);
        Some(vec![
            RenderElement::line(mid, hip, color),
            RenderElement::dashed(mid, perp_end, color),
            RenderElement::arc(
                mid,
                radius,
                segment_angle(&mid, &perp_end),
                segment_angle(&mid, &hip),
                color,
            ),
        ])
    }
}

impl MeasurementStrategy for PelvicTilt {
    /// Angle between the vertical through the hip axis and the line to
    /// the sacral endplate midpoint.
    fn calculate(&self, points: &[Point], _context: &CalculationContext) -> Vec<MeasurementResult> {
        let Some((_, _, mid, hip)) = pelvic_landmarks(points) else {
            return Vec::new();
        };
        match angle_between_vectors((0.0, -1.0), vector(&hip, &mid)) {
            Some(angle) => vec![MeasurementResult::angle("PT", angle)],
            None => Vec::new(),
        }
    }

    fn label_position(&self, points: &[Point], scale: f64) -> Point {
        pelvic_label(points, scale)
    }

    fn in_range(&self, mouse: &Point, screen_points: &[Point], tolerance: f64) -> bool {
        pelvic_in_range(mouse, screen_points, tolerance)
    }

    fn special_elements(
        &self,
        screen_points: &[Point],
        color: &str,
        scale: f64,
    ) -> Option<Vec<RenderElement>> {
        let (_, _, mid, hip) = pelvic_landmarks(screen_points)?;
        let length = distance(&mid, &hip);
        if length == 0.0 {
            return None;
        }
        let radius = (ARC_RADIUS * decoration_scale(scale)).min(length / 2.0);
        Some(vec![
            RenderElement::dashed(hip, hip.offset(0.0, -length), color),
            RenderElement::line(hip, mid, color),
            RenderElement::arc(hip, radius, -90.0, segment_angle(&hip, &mid), color),
        ])
    }
}

/// T1 virtual vertex, hip axis and S1 target of a TPA point set.
fn tpa_landmarks(points: &[Point]) -> Option<(Point, Point, Point)> {
    if points.len() < 7 {
        return None;
    }
    let t1 = vertex_mean(&points[..4]);
    let s1 = midpoint(&points[5], &points[6]);
    Some((t1, points[4], s1))
}

impl MeasurementStrategy for T1PelvicAngle {
    fn calculate(&self, points: &[Point], _context: &CalculationContext) -> Vec<MeasurementResult> {
        let Some((t1, hip, s1)) = tpa_landmarks(points) else {
            return Vec::new();
        };
        match angle_at_vertex(&hip, &t1, &s1) {
            Some(angle) => vec![MeasurementResult::angle("TPA", angle)],
            None => Vec::new(),
        }
    }

    fn label_position(&self, points: &[Point], scale: f64) -> Point {
        match points.get(4) {
            Some(hip) => hip.offset(label_offset(scale), 0.0),
            None => partial_anchor(points),
        }
    }

    fn in_range(&self, mouse: &Point, screen_points: &[Point], tolerance: f64) -> bool {
        if let Some((t1, hip, s1)) = tpa_landmarks(screen_points) {
            let segments = [(hip, t1), (hip, s1), (screen_points[5], screen_points[6])];
            if near_any_segment(mouse, &segments, tolerance) {
                return true;
            }
        }
        near_any_point(mouse, &screen_points[..screen_points.len().min(7)], tolerance)
    }

    fn special_elements(
        &self,
        screen_points: &[Point],
        color: &str,
        scale: f64,
    ) -> Option<Vec<RenderElement>> {
        let (t1, hip, s1) = tpa_landmarks(screen_points)?;
        let k = decoration_scale(scale);
        let shortest = distance(&hip, &t1).min(distance(&hip, &s1));

        let mut elements = vec![
            RenderElement::marker(t1, MARKER_RADIUS * k, color),
            RenderElement::marker(s1, MARKER_RADIUS * k, color),
            RenderElement::dashed(hip, t1, color),
            RenderElement::dashed(hip, s1, color),
        ];
        if shortest > 0.0 {
            elements.push(RenderElement::arc(
                hip,
                (ARC_RADIUS * k).min(shortest / 2.0),
                segment_angle(&hip, &t1),
                segment_angle(&hip, &s1),
                color,
            ));
        }
        Some(elements)
    }
}

impl AxisDistance {
    /// Corner where the perpendicular from `a` meets the measured axis through `b`.
    fn corner(&self, a: &Point, b: &Point) -> Point {
        match self.axis {
            Axis::Horizontal => Point::new(a.x, b.y),
            Axis::Vertical => Point::new(b.x, a.y),
        }
    }
}

impl MeasurementStrategy for AxisDistance {
    fn calculate(&self, points: &[Point], context: &CalculationContext) -> Vec<MeasurementResult> {
        let [a, b, ..] = points else {
            return Vec::new();
        };
        let pixels = match self.axis {
            Axis::Horizontal => (b.x - a.x).abs(),
            Axis::Vertical => (b.y - a.y).abs(),
        };
        let scale = context.distance_scale();
        vec![MeasurementResult::distance(
            self.label,
            scale.to_mm(pixels),
            scale.is_estimated(),
        )]
    }

    fn label_position(&self, points: &[Point], scale: f64) -> Point {
        let [a, b, ..] = points else {
            return partial_anchor(points);
        };
        let anchor = midpoint(&self.corner(a, b), b);
        match self.axis {
            Axis::Horizontal => anchor.offset(0.0, -label_offset(scale)),
            Axis::Vertical => anchor.offset(label_offset(scale), 0.0),
        }
    }

    fn in_range(&self, mouse: &Point, screen_points: &[Point], tolerance: f64) -> bool {
        match screen_points {
            [a, b, ..] => {
                let corner = self.corner(a, b);
                near_any_segment(mouse, &[(*a, corner), (corner, *b)], tolerance)
            }
            _ => near_any_point(mouse, screen_points, tolerance),
        }
    }

    fn special_elements(
        &self,
        screen_points: &[Point],
        color: &str,
        _scale: f64,
    ) -> Option<Vec<RenderElement>> {
        let [a, b, ..] = screen_points else {
            return None;
        };
        let corner = self.corner(a, b);
        Some(vec![
            RenderElement::dashed(*a, corner, color),
            RenderElement::line(corner, *b, color),
        ])
    }
}

impl MeasurementStrategy for Length {
    fn calculate(&self, points: &[Point], context: &CalculationContext) -> Vec<MeasurementResult> {
        let [a, b, ..] = points else {
            return Vec::new();
        };
        let scale = context.distance_scale();
        vec![MeasurementResult::distance(
            self.label,
            scale.to_mm(distance(a, b)),
            scale.is_estimated(),
        )]
    }

    fn label_position(&self, points: &[Point], scale: f64) -> Point {
        match points {
            [a, b, ..] => midpoint(a, b).offset(0.0, -label_offset(scale)),
            _ => partial_anchor(points),
        }
    }

    fn in_range(&self, mouse: &Point, screen_points: &[Point], tolerance: f64) -> bool {
        match screen_points {
            [a, b, ..] => point_to_segment_distance(mouse, a, b) <= tolerance,
            _ => near_any_point(mouse, screen_points, tolerance),
        }
    }
}

impl MeasurementStrategy for VertexAngle {
    fn calculate(&self, points: &[Point], _context: &CalculationContext) -> Vec<MeasurementResult> {
        let [a, vertex, b, ..] = points else {
            return Vec::new();
        };
        match angle_at_vertex(vertex, a, b) {
            Some(angle) => vec![MeasurementResult::angle(self.label, angle)],
            None => Vec::new(),
        }
    }

    fn label_position(&self, points: &[Point], scale: f64) -> Point {
        match points {
            [_, vertex, ..] => {
                let off = label_offset(scale);
                vertex.offset(off, -off)
            }
            _ => partial_anchor(points),
        }
    }

    fn in_range(&self, mouse: &Point, screen_points: &[Point], tolerance: f64) -> bool {
        match screen_points {
            [a, vertex, b, ..] => {
                near_any_segment(mouse, &[(*vertex, *a), (*vertex, *b)], tolerance)
            }
            [a, vertex] => point_to_segment_distance(mouse, vertex, a) <= tolerance,
            _ => near_any_point(mouse, screen_points, tolerance),
        }
    }

    fn special_elements(
        &self,
        screen_points: &[Point],
        color: &str,
        scale: f64,
    ) -> Option<Vec<RenderElement>> {
        let [a, vertex, b, ..] = screen_points else {
            return None;
        };
        let shortest = distance(vertex, a).min(distance(vertex, b));
        if shortest == 0.0 {
            return None;
        }
        Some(vec![RenderElement::arc(
            *vertex,
            (ARC_RADIUS * decoration_scale(scale)).min(shortest / 2.0),
            segment_angle(vertex, a),
            segment_angle(vertex, b),
            color,
        )])
    }
}

impl MeasurementStrategy for AuxiliaryShape {
    fn calculate(&self, _points: &[Point], _context: &CalculationContext) -> Vec<MeasurementResult> {
        Vec::new()
    }

    fn label_position(&self, points: &[Point], scale: f64) -> Point {
        let off = label_offset(scale);
        match (self.shape, points) {
            (ShapeKind::Polygon, _) => centroid(points),
            (ShapeKind::Circle, [c, edge, ..]) => c.offset(0.0, -distance(c, edge) - off),
            (ShapeKind::Ellipse, [c, corner, ..]) => c.offset(0.0, -(corner.y - c.y).abs() - off),
            (ShapeKind::Rectangle, [a, b, ..]) => centroid(&[*a, *b]),
            (ShapeKind::Arrow, [a, b, ..]) => midpoint(a, b).offset(0.0, -off),
            _ => partial_anchor(points),
        }
    }

    fn in_range(&self, mouse: &Point, screen_points: &[Point], tolerance: f64) -> bool {
        shape_in_range(self.shape, mouse, screen_points, tolerance)
    }

    fn special_elements(
        &self,
        screen_points: &[Point],
        color: &str,
        scale: f64,
    ) -> Option<Vec<RenderElement>> {
        let (ShapeKind::Arrow, [tail, head, ..]) = (self.shape, screen_points) else {
            return None;
        };
        if distance(tail, head) == 0.0 {
            return None;
        }
        let back = segment_angle(head, tail);
        let len = ARROW_HEAD_LENGTH * decoration_scale(scale);
        Some(vec![
            RenderElement::line(*head, polar(head, len, back + 25.0), color),
            RenderElement::line(*head, polar(head, len, back - 25.0), color),
        ])
    }
}
