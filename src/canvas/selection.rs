// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Picking the measurement under the pointer.
//!
//! Measurements are drawn in list order, so the last one is on top and is
//! tested first. The caller owns the measurement list and the selection;
//! these functions only read them.

use super::hit_test::HitTester;
use crate::measure;
use crate::models::annotation::{Measurement, Point};
use crate::util::text_label::{is_point_in_text_label, LabelStyle};
use crate::util::transform::Clock;

/// Which part of a measurement the pointer is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// One of the placed points (drag handle).
    Point(usize),
    /// The value label.
    Label,
    /// The measurement's lines or outline.
    Body,
}

/// Result of a pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    /// Index into the measurement list.
    pub index: usize,
    pub target: HitTarget,
}

/// Topmost measurement under `mouse`.
///
/// The measurement whose id equals `selected_id` is tested with the wider
/// selection tolerance so it stays selected during editing; all others use
/// the hover tolerance.
pub fn pick<C: Clock>(
    tester: &HitTester<'_, C>,
    mouse: &Point,
    measurements: &[Measurement],
    selected_id: Option<&str>,
    label_style: &LabelStyle,
) -> Option<Hit> {
    measurements.iter().enumerate().rev().find_map(|(index, m)| {
        let selected = selected_id == Some(m.id.as_str());
        target_of(tester, mouse, m, selected, label_style).map(|target| Hit { index, target })
    })
}

/// Topmost measurement under `mouse`, ignoring any selection.
pub fn hovered<C: Clock>(
    tester: &HitTester<'_, C>,
    mouse: &Point,
    measurements: &[Measurement],
    label_style: &LabelStyle,
) -> Option<Hit> {
    pick(tester, mouse, measurements, None, label_style)
}

fn target_of<C: Clock>(
    tester: &HitTester<'_, C>,
    mouse: &Point,
    measurement: &Measurement,
    selected: bool,
    label_style: &LabelStyle,
) -> Option<HitTarget> {
    if let Some(i) = tester.point_index_at(mouse, measurement) {
        return Some(HitTarget::Point(i));
    }
    if is_over_label(tester, mouse, measurement, label_style) {
        return Some(HitTarget::Label);
    }
    let in_range = if selected {
        tester.is_measurement_in_selection_range(mouse, measurement)
    } else {
        tester.is_measurement_hovered(mouse, measurement)
    };
    in_range.then_some(HitTarget::Body)
}

/// Whether `mouse` is over the measurement's value label.
///
/// Auxiliary annotations and measurements without a value show no label.
pub fn is_over_label<C: Clock>(
    tester: &HitTester<'_, C>,
    mouse: &Point,
    measurement: &Measurement,
    label_style: &LabelStyle,
) -> bool {
    let Some(config) = measure::get_annotation_config(&measurement.measurement_type) else {
        return false;
    };
    if config.is_auxiliary() || measurement.value.is_empty() {
        return false;
    }
    let scale = tester.context().image_scale;
    let anchor = config.label_position(&measurement.points, scale);
    is_point_in_text_label(
        &tester.to_image(mouse),
        &anchor,
        &measurement.value,
        label_style,
        scale,
    )
}
