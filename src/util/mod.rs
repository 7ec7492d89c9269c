// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometry, coordinate transforms and label geometry.

pub mod geometry;
pub mod text_label;
pub mod transform;
