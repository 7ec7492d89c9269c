// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation data structures.
//!
//! This module defines the core data structures for representing
//! measurement points, sizes, and placed measurements.

use crate::measure::{self, CalculationContext};
use serde::{Deserialize, Serialize};

/// A 2D point, either in image space or in screen space.
///
/// Which space a point lives in is a property of where it came from; the
/// type does not track it. Conversions go through
/// [`CoordinateTransform`](crate::util::transform::CoordinateTransform).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise offset.
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Width and height, used for both the image bitmap and the container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both dimensions are strictly positive and finite.
    pub fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// A placed (or in-progress) measurement.
///
/// Points are stored in image space. A measurement with fewer points than
/// its type needs is a valid in-progress state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub id: String,
    #[serde(rename = "type")]
    pub measurement_type: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub points: Vec<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Measurement {
    /// Create a new, empty measurement of the given type.
    pub fn new(id: impl Into<String>, measurement_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            measurement_type: measurement_type.into(),
            value: String::new(),
            points: Vec::new(),
            description: None,
        }
    }

    /// Builder-style constructor with points already placed.
    pub fn with_points(mut self, points: Vec<Point>) -> Self {
        self.points = points;
        self
    }

    /// Number of placed points.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Append a point during an active placement session.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Replace the point at `index` (dragging). Returns false when out of range.
    pub fn update_point(&mut self, index: usize, point: Point) -> bool {
        match self.points.get_mut(index) {
            Some(slot) => {
                *slot = point;
                true
            }
            None => false,
        }
    }

    /// Remove the point at `index`. Returns the removed point, if any.
    pub fn remove_point(&mut self, index: usize) -> Option<Point> {
        if index < self.points.len() {
            Some(self.points.remove(index))
        } else {
            None
        }
    }

    /// Whether the measurement has all the points its type needs.
    ///
    /// Free-form types (`points_needed == 0`) count as complete once they
    /// form a closed shape of at least three points. Unknown types are
    /// never complete.
    pub fn is_complete(&self) -> bool {
        match measure::get_annotation_config(&self.measurement_type) {
            Some(config) if config.points_needed == 0 => self.points.len() >= 3,
            Some(config) => self.points.len() >= config.points_needed,
            None => false,
        }
    }

    /// Recompute the formatted value from the current points.
    pub fn refresh_value(&mut self, context: &CalculationContext) {
        self.value =
            measure::calculate_measurement_value(&self.measurement_type, &self.points, context);
    }
}
