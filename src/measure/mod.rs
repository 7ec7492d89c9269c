// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Measurement registry.
//!
//! Measurement types are looked up by a normalized id (trimmed,
//! lowercase, whitespace runs replaced by `-`). Each entry pairs display
//! metadata with a [`MeasurementKind`] that supplies the formula, label
//! placement, hit test and decorations.

pub mod calibration;
pub mod catalog;
pub mod formulas;
pub mod render;
pub mod strategy;

pub use calibration::{CalculationContext, DistanceScale, ScaleSource};
pub use render::RenderElement;
pub use strategy::{MeasurementKind, MeasurementStrategy, ShapeKind};

use crate::config::HitTolerances;
use crate::models::annotation::Point;
use formulas::format_value;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// Value shown for auxiliary annotations and anything without a result.
pub const AUXILIARY_PLACEHOLDER: &str = "辅助标注";

/// Whether a type yields a clinical value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementCategory {
    Measurement,
    Auxiliary,
}

/// One computed value, formatted with one decimal place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasurementResult {
    pub name: String,
    pub value: String,
    pub unit: String,
    /// Distance converted with the uncalibrated fallback ratio.
    pub estimated: bool,
}

impl MeasurementResult {
    pub fn angle(name: &str, degrees: f64) -> Self {
        Self {
            name: name.to_string(),
            value: format_value(degrees),
            unit: "°".to_string(),
            estimated: false,
        }
    }

    pub fn distance(name: &str, millimetres: f64, estimated: bool) -> Self {
        Self {
            name: name.to_string(),
            value: format_value(millimetres),
            unit: "mm".to_string(),
            estimated,
        }
    }

    /// Value and unit, e.g. `18.0mm`.
    pub fn display(&self) -> String {
        format!("{}{}", self.value, self.unit)
    }
}

/// Immutable descriptor of a measurement type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementConfig {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    /// Points to place; 0 means free-form.
    pub points_needed: usize,
    pub category: MeasurementCategory,
    pub color: &'static str,
    pub kind: MeasurementKind,
}

impl MeasurementConfig {
    pub fn calculate_results(
        &self,
        points: &[Point],
        context: &CalculationContext,
    ) -> Vec<MeasurementResult> {
        self.kind.strategy().calculate(points, context)
    }

    pub fn label_position(&self, points: &[Point], scale: f64) -> Point {
        self.kind.strategy().label_position(points, scale)
    }

    /// Hit test with an explicit screen-pixel tolerance.
    pub fn is_in_range(&self, mouse: &Point, screen_points: &[Point], tolerance: f64) -> bool {
        self.kind.strategy().in_range(mouse, screen_points, tolerance)
    }

    pub fn is_in_hover_range(
        &self,
        mouse: &Point,
        screen_points: &[Point],
        tolerances: &HitTolerances,
    ) -> bool {
        self.is_in_range(mouse, screen_points, tolerances.hover_radius)
    }

    pub fn is_in_selection_range(
        &self,
        mouse: &Point,
        screen_points: &[Point],
        tolerances: &HitTolerances,
    ) -> bool {
        self.is_in_range(mouse, screen_points, tolerances.selection_padding)
    }

    pub fn render_special_elements(
        &self,
        screen_points: &[Point],
        color: &str,
        scale: f64,
    ) -> Option<Vec<RenderElement>> {
        self.kind
            .strategy()
            .special_elements(screen_points, color, scale)
    }

    /// Geometric kind for auxiliary shapes.
    pub fn shape(&self) -> Option<ShapeKind> {
        self.kind.shape()
    }

    pub fn is_auxiliary(&self) -> bool {
        self.category == MeasurementCategory::Auxiliary
    }
}

static REGISTRY: Lazy<HashMap<&'static str, &'static MeasurementConfig>> =
    Lazy::new(|| catalog::CATALOG.iter().map(|c| (c.id, c)).collect());

/// Normalize a type id: trim, lowercase, whitespace runs to `-`.
pub fn normalize_type_id(type_id: &str) -> String {
    type_id
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// Look up a measurement type.
pub fn get_annotation_config(type_id: &str) -> Option<&'static MeasurementConfig> {
    let config = REGISTRY.get(normalize_type_id(type_id).as_str()).copied();
    if config.is_none() {
        log::debug!("Unknown measurement type: {:?}", type_id);
    }
    config
}

/// All registered types in palette order.
pub fn all_configs() -> &'static [MeasurementConfig] {
    catalog::CATALOG
}

/// Results for `points` of the given type; empty for unknown types.
pub fn calculate_results(
    type_id: &str,
    points: &[Point],
    context: &CalculationContext,
) -> Vec<MeasurementResult> {
    get_annotation_config(type_id)
        .map(|config| config.calculate_results(points, context))
        .unwrap_or_default()
}

/// Formatted primary value (`"12.3°"`, `"18.0mm"`), or
/// [`AUXILIARY_PLACEHOLDER`] when the type is unknown or yields nothing.
pub fn calculate_measurement_value(
    type_id: &str,
    points: &[Point],
    context: &CalculationContext,
) -> String {
    calculate_results(type_id, points, context)
        .first()
        .map(MeasurementResult::display)
        .unwrap_or_else(|| AUXILIARY_PLACEHOLDER.to_string())
}

/// Type-specific decorations for screen-space points.
pub fn render_special_elements(
    type_id: &str,
    screen_points: &[Point],
    color: &str,
    scale: f64,
) -> Option<Vec<RenderElement>> {
    get_annotation_config(type_id)?.render_special_elements(screen_points, color, scale)
}
