// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The fixed catalog of measurement types.

use super::strategy::{
    AngleMode, AuxiliaryShape, Axis, AxisDistance, CobbAngle, Length, LineAngle,
    MeasurementKind, PelvicIncidence, PelvicTilt, ShapeKind, T1PelvicAngle, VertexAngle,
};
use super::MeasurementCategory::{self, Auxiliary, Measurement};
use super::MeasurementConfig;

const ANGLE_COLOR: &str = "#1890ff";
const COBB_COLOR: &str = "#ff4d4f";
const PELVIC_COLOR: &str = "#faad14";
const DISTANCE_COLOR: &str = "#52c41a";
const GENERIC_COLOR: &str = "#13c2c2";
const AUXILIARY_COLOR: &str = "#ffffff";

const fn tilt(label: &'static str, mode: AngleMode) -> MeasurementKind {
    MeasurementKind::LineAngle(LineAngle { label, mode })
}

const fn cobb(label: &'static str) -> MeasurementKind {
    MeasurementKind::Cobb(CobbAngle { label })
}

const fn offset(label: &'static str, axis: Axis) -> MeasurementKind {
    MeasurementKind::AxisDistance(AxisDistance { label, axis })
}

const fn shape(shape: ShapeKind) -> MeasurementKind {
    MeasurementKind::Shape(AuxiliaryShape { shape })
}

#[allow(clippy::too_many_arguments)]
const fn entry(
    id: &'static str,
    name: &'static str,
    icon: &'static str,
    description: &'static str,
    points_needed: usize,
    category: MeasurementCategory,
    color: &'static str,
    kind: MeasurementKind,
) -> MeasurementConfig {
    MeasurementConfig {
        id,
        name,
        icon,
        description,
        points_needed,
        category,
        color,
        kind,
    }
}

/// Every registered type, in palette order.
pub static CATALOG: &[MeasurementConfig] = &[
    // Coronal alignment
    entry(
        "t1-tilt",
        "T1 Tilt",
        "tilt",
        "Angle of the T1 upper endplate against the horizontal",
        2,
        Measurement,
        ANGLE_COLOR,
        tilt("T1 Tilt", AngleMode::Magnitude),
    ),
    entry(
        "ca",
        "Clavicle Angle",
        "tilt",
        "Angle between the line over both clavicle peaks and the horizontal; left high is positive",
        2,
        Measurement,
        ANGLE_COLOR,
        tilt("CA", AngleMode::Directional),
    ),
    entry(
        "po",
        "Pelvic Obliquity",
        "tilt",
        "Angle between the iliac crest line and the horizontal; left high is positive",
        2,
        Measurement,
        ANGLE_COLOR,
        tilt("PO", AngleMode::Directional),
    ),
    entry(
        "so",
        "Sacral Obliquity",
        "tilt",
        "Angle between the sacral ala line and the horizontal; left high is positive",
        2,
        Measurement,
        ANGLE_COLOR,
        tilt("SO", AngleMode::Directional),
    ),
    entry(
        "cobb",
        "Cobb Angle",
        "cobb",
        "Angle between the upper endplate of the upper end vertebra and the lower endplate of the lower end vertebra",
        4,
        Measurement,
        COBB_COLOR,
        cobb("Cobb"),
    ),
    entry(
        "avt",
        "Apical Vertebral Translation",
        "offset",
        "Horizontal distance from the apical vertebra centre to the central sacral vertical line",
        2,
        Measurement,
        DISTANCE_COLOR,
        offset("AVT", Axis::Horizontal),
    ),
    entry(
        "ts",
        "Trunk Shift",
        "offset",
        "Horizontal distance from the C7 plumb line to the central sacral vertical line",
        2,
        Measurement,
        DISTANCE_COLOR,
        offset("TS", Axis::Horizontal),
    ),
    entry(
        "rsh",
        "Radiographic Shoulder Height",
        "offset",
        "Vertical distance between the two shoulder reference points",
        2,
        Measurement,
        DISTANCE_COLOR,
        offset("RSH", Axis::Vertical),
    ),
    // Sagittal alignment
    entry(
        "tk",
        "Thoracic Kyphosis",
        "cobb",
        "Angle between the T4 upper endplate and the T12 lower endplate",
        4,
        Measurement,
        COBB_COLOR,
        cobb("TK"),
    ),
    entry(
        "ll",
        "Lumbar Lordosis",
        "cobb",
        "Angle between the L1 upper endplate and the S1 upper endplate",
        4,
        Measurement,
        COBB_COLOR,
        cobb("LL"),
    ),
    entry(
        "tlk",
        "Thoracolumbar Kyphosis",
        "cobb",
        "Angle between the T10 upper endplate and the L2 lower endplate",
        4,
        Measurement,
        COBB_COLOR,
        cobb("TLK"),
    ),
    entry(
        "sva",
        "Sagittal Vertical Axis",
        "offset",
        "Horizontal distance from the C7 plumb line to the posterior-superior corner of S1",
        2,
        Measurement,
        DISTANCE_COLOR,
        offset("SVA", Axis::Horizontal),
    ),
    entry(
        "ss",
        "Sacral Slope",
        "tilt",
        "Angle between the S1 upper endplate and the horizontal",
        2,
        Measurement,
        PELVIC_COLOR,
        tilt("SS", AngleMode::Magnitude),
    ),
    entry(
        "pi",
        "Pelvic Incidence",
        "pelvis",
        "Angle between the S1 endplate perpendicular and the line to the hip axis (points: endplate, endplate, hip axis)",
        3,
        Measurement,
        PELVIC_COLOR,
        MeasurementKind::PelvicIncidence(PelvicIncidence),
    ),
    entry(
        "pt",
        "Pelvic Tilt",
        "pelvis",
        "Angle between the vertical and the line from the hip axis to the S1 endplate midpoint (points: endplate, endplate, hip axis)",
        3,
        Measurement,
        PELVIC_COLOR,
        MeasurementKind::PelvicTilt(PelvicTilt),
    ),
    entry(
        "tpa",
        "T1 Pelvic Angle",
        "pelvis",
        "Angle at the hip axis between the T1 centre and the S1 endplate midpoint (points: 4 T1 corners, hip axis, 2 S1 endplate points)",
        7,
        Measurement,
        PELVIC_COLOR,
        MeasurementKind::T1PelvicAngle(T1PelvicAngle),
    ),
    // Generic
    entry(
        "length",
        "Length",
        "ruler",
        "Straight-line distance between two points",
        2,
        Measurement,
        GENERIC_COLOR,
        MeasurementKind::Length(Length { label: "Length" }),
    ),
    entry(
        "angle",
        "Angle",
        "angle",
        "Angle at the middle of three points",
        3,
        Measurement,
        GENERIC_COLOR,
        MeasurementKind::VertexAngle(VertexAngle { label: "Angle" }),
    ),
    entry(
        "standard-distance",
        "Standard Distance",
        "ruler",
        "Calibration segment of known real-world length",
        2,
        Measurement,
        GENERIC_COLOR,
        MeasurementKind::Length(Length {
            label: "Standard Distance",
        }),
    ),
    // Auxiliary annotations
    entry(
        "circle",
        "Circle",
        "circle",
        "Circle from centre and edge point",
        2,
        Auxiliary,
        AUXILIARY_COLOR,
        shape(ShapeKind::Circle),
    ),
    entry(
        "ellipse",
        "Ellipse",
        "ellipse",
        "Ellipse from centre and bounding-box corner",
        2,
        Auxiliary,
        AUXILIARY_COLOR,
        shape(ShapeKind::Ellipse),
    ),
    entry(
        "rectangle",
        "Rectangle",
        "rectangle",
        "Rectangle from two opposite corners",
        2,
        Auxiliary,
        AUXILIARY_COLOR,
        shape(ShapeKind::Rectangle),
    ),
    entry(
        "arrow",
        "Arrow",
        "arrow",
        "Arrow from tail to head",
        2,
        Auxiliary,
        AUXILIARY_COLOR,
        shape(ShapeKind::Arrow),
    ),
    entry(
        "polygon",
        "Polygon",
        "polygon",
        "Closed outline with any number of vertices",
        0,
        Auxiliary,
        AUXILIARY_COLOR,
        shape(ShapeKind::Polygon),
    ),
];
