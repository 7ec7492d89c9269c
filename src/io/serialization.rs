// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Study data serialization and deserialization.
//!
//! This module handles exporting and importing studies in YAML and JSON
//! formats. Stored values are informational; callers recompute them with
//! [`StudyData::refresh_values`] after loading.

use crate::models::project::StudyData;
use anyhow::{Context, Result};
use std::path::Path;

/// Export study data to YAML format.
pub fn export_yaml(data: &StudyData, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(data)?;
    std::fs::write(path, yaml).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Export study data to JSON format.
pub fn export_json(data: &StudyData, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Import study data from YAML format.
pub fn import_yaml(path: &Path) -> Result<StudyData> {
    let yaml = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let data = serde_yaml::from_str(&yaml)
        .with_context(|| format!("Invalid study YAML in {}", path.display()))?;
    Ok(data)
}

/// Import study data from JSON format.
pub fn import_json(path: &Path) -> Result<StudyData> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let data = serde_json::from_str(&json)
        .with_context(|| format!("Invalid study JSON in {}", path.display()))?;
    Ok(data)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Import a study, choosing the format from the file extension.
///
/// `.json` is read as JSON; anything else as YAML.
pub fn import_study(path: &Path) -> Result<StudyData> {
    if is_json(path) {
        import_json(path)
    } else {
        import_yaml(path)
    }
}

/// Export a study, choosing the format from the file extension.
pub fn export_study(data: &StudyData, path: &Path) -> Result<()> {
    log::info!(
        "Exporting {} measurement(s) to {}",
        data.measurements.len(),
        path.display()
    );
    if is_json(path) {
        export_json(data, path)
    } else {
        export_yaml(data, path)
    }
}
