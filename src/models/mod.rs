// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data models for measurements and studies.

pub mod annotation;
pub mod project;
