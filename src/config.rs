// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Engine configuration.
//!
//! Every field has a default, so an empty YAML or JSON document is a
//! valid configuration.

use crate::util::text_label::LabelStyle;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Click radius around a point, in screen pixels.
pub const POINT_CLICK_RADIUS: f64 = 8.0;
/// Hover radius around points and lines, in screen pixels.
pub const HOVER_RADIUS: f64 = 10.0;
/// Click distance from a line, in screen pixels.
pub const LINE_CLICK_RADIUS: f64 = 5.0;
/// Tolerance for keeping an already-selected measurement selected.
pub const SELECTION_PADDING: f64 = 20.0;
/// Point-delete distance in image pixels at zoom 1.0.
pub const POINT_DELETE_THRESHOLD: f64 = 6.0;

/// Hit-test distances.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitTolerances {
    pub point_click_radius: f64,
    pub hover_radius: f64,
    pub line_click_radius: f64,
    pub selection_padding: f64,
    pub point_delete_threshold: f64,
}

impl Default for HitTolerances {
    fn default() -> Self {
        Self {
            point_click_radius: POINT_CLICK_RADIUS,
            hover_radius: HOVER_RADIUS,
            line_click_radius: LINE_CLICK_RADIUS,
            selection_padding: SELECTION_PADDING,
            point_delete_threshold: POINT_DELETE_THRESHOLD,
        }
    }
}

impl HitTolerances {
    /// Delete threshold in image pixels at the given zoom.
    ///
    /// Shrinks as the user zooms in, so deletes get more precise.
    pub fn delete_threshold_at(&self, image_scale: f64) -> f64 {
        if image_scale > 0.0 {
            self.point_delete_threshold / image_scale
        } else {
            self.point_delete_threshold
        }
    }
}

/// Top-level engine settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub tolerances: HitTolerances,
    pub label: LabelStyle,
    /// Minimum time between degraded-transform warnings.
    pub warn_cooldown_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tolerances: HitTolerances::default(),
            label: LabelStyle::default(),
            warn_cooldown_ms: 5000,
        }
    }
}

impl EngineConfig {
    pub fn warn_cooldown(&self) -> Duration {
        Duration::from_millis(self.warn_cooldown_ms)
    }

    /// Load from a `.yaml`/`.yml` or `.json` file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::from_str(&text)?,
            _ => serde_yaml::from_str(&text)?,
        };
        Ok(config)
    }
}
