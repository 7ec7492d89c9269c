// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! SpineMark - spinal radiograph measurement engine
//!
//! Coordinate mapping between the displayed image and its natural pixel
//! grid, pointer hit-testing, and the catalog of clinical measurements
//! with their formulas, label placement and decorations.

pub mod canvas;
pub mod config;
pub mod io;
pub mod measure;
pub mod models;
pub mod util;
