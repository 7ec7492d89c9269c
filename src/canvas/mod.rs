// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Pointer interaction with measurements drawn on the canvas.

pub mod hit_test;
pub mod selection;

pub use hit_test::HitTester;
pub use selection::{Hit, HitTarget};
