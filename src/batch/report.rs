// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Footmount Contributors

//! Build manifest

use crate::geometry::BoundingBox;
use crate::parts::PartSpec;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Manifest file written next to the outputs
pub const MANIFEST_FILE: &str = "manifest.json";

/// Result of one batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildReport {
    /// RFC 3339 timestamp
    pub generated_at: String,
    pub version: String,
    pub outputs: Vec<OutputRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputRecord {
    pub stem: String,
    pub part: PartSpec,
    pub scad: PathBuf,
    /// Hex SHA-256 of the descriptor text
    pub scad_sha256: String,
    pub mesh: MeshStatus,
}

/// What happened to the mesh export of one output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MeshStatus {
    Skipped,
    Exported {
        path: PathBuf,
        duration_secs: f64,
        /// `None` when the STL could not be read back
        triangles: Option<usize>,
        bounding_box: Option<BoundingBox>,
    },
    Failed {
        error: String,
    },
}

impl BuildReport {
    pub fn new(outputs: Vec<OutputRecord>) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            outputs,
        }
    }

    pub fn exported(&self) -> usize {
        self.outputs
            .iter()
            .filter(|r| matches!(r.mesh, MeshStatus::Exported { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.outputs
            .iter()
            .filter(|r| matches!(r.mesh, MeshStatus::Failed { .. }))
            .count()
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize manifest")?;
        std::fs::write(path.as_ref(), json)
            .with_context(|| format!("Failed to write manifest: {:?}", path.as_ref()))?;
        Ok(())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read manifest: {:?}", path.as_ref()))?;
        Ok(serde_json::from_str(&content)?)
    }
}
