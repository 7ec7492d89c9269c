// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Pixel-to-millimetre conversion.

use crate::models::annotation::{Point, Size};
use crate::util::geometry::distance;

/// Real-world width assumed by the uncalibrated fallback, in millimetres.
pub const FALLBACK_REFERENCE_WIDTH_MM: f64 = 300.0;
/// Image width the fallback reference width is spread over, in pixels.
pub const FALLBACK_IMAGE_WIDTH_PX: f64 = 1000.0;

/// Calibration and image metadata supplied by the surrounding application.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CalculationContext {
    /// Real-world length of the calibration segment, in millimetres.
    pub standard_distance: Option<f64>,
    /// Calibration segment endpoints in image space.
    pub standard_distance_points: Option<[Point; 2]>,
    pub image_natural_size: Option<Size>,
}

/// Where a millimetre value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleSource {
    /// Derived from a user-placed calibration segment.
    Calibrated,
    /// Fixed 300 mm / 1000 px heuristic. Not a clinical measurement.
    Fallback,
}

/// Millimetres per image pixel, with its provenance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceScale {
    pixels: f64,
    millimetres: f64,
    pub source: ScaleSource,
}

impl DistanceScale {
    /// Convert an image-space pixel length to millimetres.
    pub fn to_mm(&self, pixel_distance: f64) -> f64 {
        pixel_distance / self.pixels * self.millimetres
    }

    pub fn is_estimated(&self) -> bool {
        self.source == ScaleSource::Fallback
    }
}

impl CalculationContext {
    /// Context with a calibration segment of known length.
    pub fn calibrated(standard_distance: f64, points: [Point; 2]) -> Self {
        Self {
            standard_distance: Some(standard_distance),
            standard_distance_points: Some(points),
            image_natural_size: None,
        }
    }

    /// Pixel length of the calibration segment, when it is usable.
    pub fn calibration_pixel_length(&self) -> Option<f64> {
        let [a, b] = self.standard_distance_points?;
        let length = distance(&a, &b);
        (length > 0.0).then_some(length)
    }

    /// Scale to use for distance measurements.
    ///
    /// Falls back to [`ScaleSource::Fallback`] when the calibration
    /// distance is missing or non-positive, or the segment is missing or
    /// has zero length.
    pub fn distance_scale(&self) -> DistanceScale {
        match (self.standard_distance, self.calibration_pixel_length()) {
            (Some(mm), Some(px)) if mm > 0.0 => DistanceScale {
                pixels: px,
                millimetres: mm,
                source: ScaleSource::Calibrated,
            },
            _ => {
                log::debug!("No usable calibration, using fallback distance ratio");
                DistanceScale {
                    pixels: FALLBACK_IMAGE_WIDTH_PX,
                    millimetres: FALLBACK_REFERENCE_WIDTH_MM,
                    source: ScaleSource::Fallback,
                }
            }
        }
    }
}
