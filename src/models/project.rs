// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Study document state.
//!
//! This module holds the serialized form of an annotated study: the image
//! it refers to, the optional calibration segment, and the measurements.

use super::annotation::{Measurement, Point, Size};
use crate::measure::CalculationContext;
use serde::{Deserialize, Serialize};

/// A user-placed calibration segment with a known real-world length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    /// Real-world length of the segment in millimetres.
    pub standard_distance: f64,
    /// Segment endpoints in image space.
    pub points: [Point; 2],
}

/// Complete study data for serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyData {
    pub image_file: String,
    pub image_width: u32,
    pub image_height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calibration: Option<Calibration>,
    #[serde(default)]
    pub measurements: Vec<Measurement>,
}

impl StudyData {
    /// Create a new study for the given image and dimensions.
    pub fn new(image_file: String, image_width: u32, image_height: u32) -> Self {
        Self {
            image_file,
            image_width,
            image_height,
            calibration: None,
            measurements: Vec::new(),
        }
    }

    /// Natural size of the image bitmap, if the dimensions are known.
    pub fn image_size(&self) -> Option<Size> {
        let size = Size::new(self.image_width as f64, self.image_height as f64);
        size.is_usable().then_some(size)
    }

    /// Calculation context derived from the study's calibration and image.
    pub fn calculation_context(&self) -> CalculationContext {
        CalculationContext {
            standard_distance: self.calibration.as_ref().map(|c| c.standard_distance),
            standard_distance_points: self.calibration.as_ref().map(|c| c.points),
            image_natural_size: self.image_size(),
        }
    }

    /// Recompute every measurement's formatted value.
    pub fn refresh_values(&mut self) {
        let context = self.calculation_context();
        for measurement in &mut self.measurements {
            measurement.refresh_value(&context);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_values_uses_calibration() {
        let mut study = StudyData::new("spine.png".to_string(), 2000, 4000);
        study.calibration = Some(Calibration {
            standard_distance: 200.0,
            points: [Point::new(0.0, 0.0), Point::new(100.0, 0.0)],
        });
        study.measurements.push(
            Measurement::new("len", "length")
                .with_points(vec![Point::new(10.0, 10.0), Point::new(60.0, 10.0)]),
        );

        study.refresh_values();
        assert_eq!(study.measurements[0].value, "100.0mm");
    }

    #[test]
    fn test_zero_dimensions_have_no_size() {
        let study = StudyData::new("blank.png".to_string(), 0, 100);
        assert!(study.image_size().is_none());
        assert!(study.calculation_context().image_natural_size.is_none());
    }
}
