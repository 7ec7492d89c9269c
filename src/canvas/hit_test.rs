// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Pointer hit-testing against stored measurements.
//!
//! Measurements are stored in image space and the pointer arrives in
//! screen space. Every test converts the stored points to screen space
//! first, so click and hover radii stay constant on screen regardless of
//! zoom. Point deletion is the exception: it compares in image space with
//! a threshold divided by the zoom scale.

use crate::config::HitTolerances;
use crate::measure::{self, strategy::shape_in_range};
use crate::models::annotation::{Measurement, Point, Size};
use crate::util::geometry::{
    distance, is_point_in_circle, is_point_in_ellipse, is_point_near_polygon_edge,
    is_point_near_rectangle_edge, point_to_segment_distance,
};
use crate::util::transform::{Clock, CoordinateTransform, SystemClock, TransformContext};

/// Hit tests for one view state (transform context and container size).
pub struct HitTester<'a, C: Clock = SystemClock> {
    transform: &'a CoordinateTransform<C>,
    context: &'a TransformContext,
    container: Option<Size>,
    tolerances: HitTolerances,
}

impl<'a, C: Clock> HitTester<'a, C> {
    pub fn new(
        transform: &'a CoordinateTransform<C>,
        context: &'a TransformContext,
        container: Option<Size>,
    ) -> Self {
        Self {
            transform,
            context,
            container,
            tolerances: HitTolerances::default(),
        }
    }

    pub fn with_tolerances(mut self, tolerances: HitTolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    pub fn tolerances(&self) -> &HitTolerances {
        &self.tolerances
    }

    pub fn context(&self) -> &TransformContext {
        self.context
    }

    /// Image-space point to screen space.
    pub fn to_screen(&self, point: &Point) -> Point {
        self.transform
            .image_to_screen(point, self.context, self.container)
    }

    /// Screen-space pointer to image space.
    pub fn to_image(&self, mouse: &Point) -> Point {
        self.transform
            .screen_to_image(mouse.x, mouse.y, self.context, self.container)
    }

    fn screen_points(&self, points: &[Point]) -> Vec<Point> {
        self.transform
            .points_to_screen(points, self.context, self.container)
    }

    /// Pointer within the click radius of a stored point.
    pub fn is_point_clicked(&self, mouse: &Point, point: &Point) -> bool {
        distance(mouse, &self.to_screen(point)) <= self.tolerances.point_click_radius
    }

    /// Pointer within the hover radius of a stored point.
    pub fn is_point_hovered(&self, mouse: &Point, point: &Point) -> bool {
        distance(mouse, &self.to_screen(point)) <= self.tolerances.hover_radius
    }

    /// Pointer within the line click radius of a stored segment.
    pub fn is_line_clicked(&self, mouse: &Point, start: &Point, end: &Point) -> bool {
        point_to_segment_distance(mouse, &self.to_screen(start), &self.to_screen(end))
            < self.tolerances.line_click_radius
    }

    /// Pointer within the hover radius of a stored segment.
    pub fn is_line_hovered(&self, mouse: &Point, start: &Point, end: &Point) -> bool {
        point_to_segment_distance(mouse, &self.to_screen(start), &self.to_screen(end))
            < self.tolerances.hover_radius
    }

    /// Pointer on the outline of the circle through `edge` around `center`.
    pub fn is_circle_clicked(&self, mouse: &Point, center: &Point, edge: &Point) -> bool {
        let c = self.to_screen(center);
        let radius = distance(&c, &self.to_screen(edge));
        is_point_in_circle(mouse, &c, radius, self.tolerances.line_click_radius)
    }

    /// Pointer on the outline of the ellipse with bounding-box corner `corner`.
    pub fn is_ellipse_clicked(&self, mouse: &Point, center: &Point, corner: &Point) -> bool {
        let c = self.to_screen(center);
        let k = self.to_screen(corner);
        is_point_in_ellipse(
            mouse,
            &c,
            (k.x - c.x).abs(),
            (k.y - c.y).abs(),
            self.tolerances.line_click_radius,
        )
    }

    /// Pointer near any edge of the rectangle spanned by two corners.
    pub fn is_rectangle_clicked(&self, mouse: &Point, corner1: &Point, corner2: &Point) -> bool {
        is_point_near_rectangle_edge(
            mouse,
            &self.to_screen(corner1),
            &self.to_screen(corner2),
            self.tolerances.line_click_radius,
        )
    }

    /// Pointer near any edge of a closed polygon. Needs three vertices.
    pub fn is_polygon_clicked(&self, mouse: &Point, vertices: &[Point]) -> bool {
        is_point_near_polygon_edge(
            mouse,
            &self.screen_points(vertices),
            self.tolerances.line_click_radius,
        )
    }

    /// Shape of the measurement within `tolerance` screen pixels of the pointer.
    ///
    /// Auxiliary shapes dispatch on their geometric kind; everything else
    /// uses its type's own topology. Unknown types are never hit.
    pub fn is_measurement_in_range(
        &self,
        mouse: &Point,
        measurement: &Measurement,
        tolerance: f64,
    ) -> bool {
        let Some(config) = measure::get_annotation_config(&measurement.measurement_type) else {
            return false;
        };
        let screen = self.screen_points(&measurement.points);
        match config.shape() {
            Some(shape) => shape_in_range(shape, mouse, &screen, tolerance),
            None => config.is_in_range(mouse, &screen, tolerance),
        }
    }

    pub fn is_measurement_hovered(&self, mouse: &Point, measurement: &Measurement) -> bool {
        self.is_measurement_in_range(mouse, measurement, self.tolerances.hover_radius)
    }

    pub fn is_measurement_in_selection_range(
        &self,
        mouse: &Point,
        measurement: &Measurement,
    ) -> bool {
        self.is_measurement_in_range(mouse, measurement, self.tolerances.selection_padding)
    }

    /// Index of the point to drag: the nearest one within the click radius.
    pub fn point_index_at(&self, mouse: &Point, measurement: &Measurement) -> Option<usize> {
        nearest_within(
            mouse,
            &self.screen_points(&measurement.points),
            self.tolerances.point_click_radius,
        )
    }

    /// Index of the point a delete click targets.
    ///
    /// Compared in image space against the delete threshold divided by the
    /// zoom scale.
    pub fn point_index_to_delete(&self, mouse: &Point, measurement: &Measurement) -> Option<usize> {
        let threshold = self
            .tolerances
            .delete_threshold_at(self.context.image_scale);
        nearest_within(&self.to_image(mouse), &measurement.points, threshold)
    }
}

/// Index of the point nearest `target` with distance at most `radius`.
fn nearest_within(target: &Point, points: &[Point], radius: f64) -> Option<usize> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| (i, distance(target, p)))
        .filter(|(_, d)| *d <= radius)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1000x1000 image in a 500x500 container: fit 0.5, image (x, y) -> screen (x/2, y/2)
    fn setup() -> (CoordinateTransform, TransformContext, Option<Size>) {
        (
            CoordinateTransform::new(),
            TransformContext::new(Size::new(1000.0, 1000.0)),
            Some(Size::new(500.0, 500.0)),
        )
    }

    #[test]
    fn test_point_click_and_hover_radii() {
        let (transform, ctx, container) = setup();
        let tester = HitTester::new(&transform, &ctx, container);
        let stored = Point::new(200.0, 200.0); // screen (100, 100)

        assert!(tester.is_point_clicked(&Point::new(107.0, 100.0), &stored));
        assert!(!tester.is_point_clicked(&Point::new(109.0, 100.0), &stored));
        assert!(tester.is_point_hovered(&Point::new(109.0, 100.0), &stored));
    }

    #[test]
    fn test_line_click_in_screen_space() {
        let (transform, ctx, container) = setup();
        let tester = HitTester::new(&transform, &ctx, container);
        let a = Point::new(0.0, 400.0);
        let b = Point::new(400.0, 400.0); // screen y = 200

        assert!(tester.is_line_clicked(&Point::new(100.0, 204.0), &a, &b));
        assert!(!tester.is_line_clicked(&Point::new(100.0, 206.0), &a, &b));
        assert!(tester.is_line_hovered(&Point::new(100.0, 206.0), &a, &b));
    }

    #[test]
    fn test_shape_clicks() {
        let (transform, ctx, container) = setup();
        let tester = HitTester::new(&transform, &ctx, container);

        // Circle centre screen (250, 250), radius 50 on screen
        let center = Point::new(500.0, 500.0);
        let edge = Point::new(600.0, 500.0);
        assert!(tester.is_circle_clicked(&Point::new(250.0, 302.0), &center, &edge));
        assert!(!tester.is_circle_clicked(&Point::new(250.0, 250.0), &center, &edge));

        // Ellipse radii 50 x 25 on screen
        let corner = Point::new(600.0, 550.0);
        assert!(tester.is_ellipse_clicked(&Point::new(300.0, 250.0), &center, &corner));
        assert!(!tester.is_ellipse_clicked(&Point::new(250.0, 250.0), &center, &corner));

        // Rectangle edges only
        let c1 = Point::new(100.0, 100.0);
        let c2 = Point::new(300.0, 300.0); // screen 50..150
        assert!(tester.is_rectangle_clicked(&Point::new(100.0, 52.0), &c1, &c2));
        assert!(!tester.is_rectangle_clicked(&Point::new(100.0, 100.0), &c1, &c2));

        let tri = [
            Point::new(0.0, 0.0),
            Point::new(200.0, 0.0),
            Point::new(0.0, 200.0),
        ];
        assert!(tester.is_polygon_clicked(&Point::new(50.0, 1.0), &tri));
        assert!(!tester.is_polygon_clicked(&Point::new(50.0, 1.0), &tri[..2]));
    }

    #[test]
    fn test_hover_vs_selection_band() {
        let (transform, ctx, container) = setup();
        let tester = HitTester::new(&transform, &ctx, container);
        let m = Measurement::new("len", "length")
            .with_points(vec![Point::new(0.0, 400.0), Point::new(400.0, 400.0)]);

        // 15 screen px from the line: between hover (10) and selection (20)
        let mouse = Point::new(100.0, 215.0);
        assert!(!tester.is_measurement_hovered(&mouse, &m));
        assert!(tester.is_measurement_in_selection_range(&mouse, &m));

        let far = Point::new(100.0, 230.0);
        assert!(!tester.is_measurement_in_selection_range(&far, &m));
    }

    #[test]
    fn test_unknown_type_is_never_hit() {
        let (transform, ctx, container) = setup();
        let tester = HitTester::new(&transform, &ctx, container);
        let m = Measurement::new("x", "mystery").with_points(vec![Point::new(0.0, 0.0)]);
        assert!(!tester.is_measurement_in_selection_range(&Point::new(0.0, 0.0), &m));
    }

    #[test]
    fn test_point_index_at_prefers_nearest() {
        let (transform, ctx, container) = setup();
        let tester = HitTester::new(&transform, &ctx, container);
        let m = Measurement::new("c", "cobb").with_points(vec![
            Point::new(200.0, 200.0),
            Point::new(210.0, 200.0),
            Point::new(600.0, 600.0),
            Point::new(700.0, 600.0),
        ]);
        // Screen (100, 100) and (105, 100): the pointer at 104 is nearer the second
        assert_eq!(tester.point_index_at(&Point::new(104.0, 100.0), &m), Some(1));
        assert_eq!(tester.point_index_at(&Point::new(10.0, 10.0), &m), None);
    }

    #[test]
    fn test_point_delete_threshold_scales_with_zoom() {
        let (transform, mut ctx, container) = setup();
        let m = Measurement::new("len", "length")
            .with_points(vec![Point::new(500.0, 500.0), Point::new(800.0, 500.0)]);

        // Zoom 1: pointer 2 screen px right of the first point = 4 image px
        let tester = HitTester::new(&transform, &ctx, container);
        assert_eq!(tester.point_index_to_delete(&Point::new(252.0, 250.0), &m), Some(0));

        // Zoom 2: threshold 3 image px; 4 screen px = 4 image px is too far
        ctx.image_scale = 2.0;
        let tester = HitTester::new(&transform, &ctx, container);
        assert_eq!(tester.point_index_to_delete(&Point::new(254.0, 250.0), &m), None);
        assert_eq!(tester.point_index_to_delete(&Point::new(252.0, 250.0), &m), Some(0));
    }
}
