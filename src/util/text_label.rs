// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Value-label box estimation.
//!
//! Label sizes come from a character-count heuristic rather than font
//! metrics. The renderer sizes its label backgrounds with the same ratios,
//! so the hit box matches what is drawn.

use crate::models::annotation::Point;
use serde::{Deserialize, Serialize};

/// Average glyph width as a fraction of the font size.
pub const CHAR_WIDTH_RATIO: f64 = 0.6;
/// Line height as a multiple of the font size.
pub const LINE_HEIGHT_RATIO: f64 = 1.2;

/// Font size and padding of value labels, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelStyle {
    pub font_size: f64,
    pub padding: f64,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            padding: 4.0,
        }
    }
}

/// Estimated rendered width of `text`, padding included.
pub fn estimate_text_width(text: &str, font_size: f64, padding: f64) -> f64 {
    text.chars().count() as f64 * font_size * CHAR_WIDTH_RATIO + 2.0 * padding
}

/// Estimated rendered height of a single line, padding included.
pub fn estimate_text_height(font_size: f64, padding: f64) -> f64 {
    font_size * LINE_HEIGHT_RATIO + 2.0 * padding
}

/// Whether `point` falls inside the label box centred on `anchor`.
///
/// Both points are in image space. The box is estimated in screen pixels
/// and divided by `image_scale`, so it tracks the label's on-screen size
/// at any zoom.
pub fn is_point_in_text_label(
    point: &Point,
    anchor: &Point,
    text: &str,
    style: &LabelStyle,
    image_scale: f64,
) -> bool {
    if text.is_empty() || image_scale <= 0.0 {
        return false;
    }
    let half_width = estimate_text_width(text, style.font_size, style.padding) / image_scale / 2.0;
    let half_height = estimate_text_height(style.font_size, style.padding) / image_scale / 2.0;

    (point.x - anchor.x).abs() <= half_width && (point.y - anchor.y).abs() <= half_height
}
