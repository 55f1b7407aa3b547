// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Footmount Contributors

//! Subprocess execution runner for OpenSCAD

use crate::error::FootmountError;
use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Runs the external renderer
#[derive(Debug, Clone)]
pub struct Runner {
    program: String,
}

impl Runner {
    pub fn new() -> Self {
        Self::with_program("openscad")
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Check if OpenSCAD can be launched
    pub fn is_openscad_available(&self) -> bool {
        Command::new(&self.program).arg("--version").output().is_ok()
    }

    /// Run OpenSCAD to turn a `.scad` file into a mesh
    pub fn export_mesh(&self, input: &Path, output: &Path) -> Result<Duration> {
        let start = Instant::now();
        debug!(input = %input.display(), output = %output.display(), "Running OpenSCAD");

        let result = Command::new(&self.program)
            .arg("-o")
            .arg(output)
            .arg(input)
            .output()
            .with_context(|| format!("Failed to execute {}", self.program))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            warn!(
                output = %output.display(),
                stderr = %stderr.trim(),
                "OpenSCAD export failed"
            );
            return Err(FootmountError::RendererFailed {
                program: self.program.clone(),
                status: result.status.to_string(),
                output: output.to_path_buf(),
            }
            .into());
        }

        Ok(start.elapsed())
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}
