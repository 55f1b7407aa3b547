// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Footmount Contributors

//! Batch build: descriptors first, then meshes on a worker pool

use super::report::{BuildReport, MeshStatus, OutputRecord, MANIFEST_FILE};
use super::{default_outputs, OutputDescriptor};
use crate::cli::Runner;
use crate::config::Config;
use crate::io::{summarize_stl, write_scad};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Builds every selected output into the configured directory
pub struct BatchDriver {
    config: Config,
    outputs: Vec<OutputDescriptor>,
}

impl BatchDriver {
    pub fn new(config: Config) -> Self {
        Self::with_outputs(config, default_outputs())
    }

    pub fn with_outputs(config: Config, outputs: Vec<OutputDescriptor>) -> Self {
        Self { config, outputs }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Outputs passing the stem filters, in table order
    pub fn selected(&self) -> Vec<&OutputDescriptor> {
        self.outputs
            .iter()
            .filter(|o| self.config.build.matches_filter(&o.stem))
            .collect()
    }

    pub fn run(&self) -> Result<BuildReport> {
        let build = &self.config.build;
        let out_dir = &build.output_dir;
        std::fs::create_dir_all(out_dir)
            .with_context(|| format!("Failed to create output directory: {:?}", out_dir))?;

        let selected = self.selected();
        info!(outputs = selected.len(), dir = %out_dir.display(), "Writing descriptors");

        let mut records = Vec::with_capacity(selected.len());
        for output in &selected {
            let node = output.part.build(&self.config.parts);
            let scad = out_dir.join(output.scad_name());
            let source = write_scad(&node, &scad)
                .with_context(|| format!("Failed to write output `{}`", output.stem))?;
            debug!(stem = %output.stem, nodes = node.node_count(), "Descriptor written");

            records.push(OutputRecord {
                stem: output.stem.clone(),
                part: output.part,
                scad,
                scad_sha256: sha256_hex(source.as_bytes()),
                mesh: MeshStatus::Skipped,
            });
        }

        if build.skip_mesh {
            info!("Mesh export disabled");
        } else {
            let runner = Runner::with_program(build.openscad_path.clone());
            if runner.is_openscad_available() {
                self.export_meshes(&runner, &mut records)?;
            } else {
                warn!(
                    program = %build.openscad_path,
                    "OpenSCAD not found, writing descriptors only"
                );
            }
        }

        let report = BuildReport::new(records);
        if build.write_manifest {
            report.write_json(out_dir.join(MANIFEST_FILE))?;
        }
        Ok(report)
    }

    fn export_meshes(&self, runner: &Runner, records: &mut [OutputRecord]) -> Result<()> {
        let workers = self.config.build.worker_count();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()
            .context("Failed to start mesh export pool")?;
        info!(jobs = records.len(), workers, "Exporting meshes");

        let pb = if self.config.build.verbose {
            let p = ProgressBar::new(records.len() as u64);
            if let Ok(style) = ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            {
                p.set_style(style.progress_chars("#>-"));
            }
            Some(p)
        } else {
            None
        };

        pool.install(|| {
            records.par_iter_mut().for_each(|record| {
                record.mesh = export_one(runner, &record.scad);
                if let Some(ref p) = pb {
                    p.set_message(record.stem.clone());
                    p.inc(1);
                }
            });
        });

        if let Some(p) = pb {
            p.finish_and_clear();
        }
        Ok(())
    }
}

fn export_one(runner: &Runner, scad: &Path) -> MeshStatus {
    let stl = stl_path(scad);
    match runner.export_mesh(scad, &stl) {
        Ok(elapsed) => {
            let summary = match summarize_stl(&stl) {
                Ok(summary) => Some(summary),
                Err(e) => {
                    warn!(path = %stl.display(), error = %e, "Could not read exported mesh");
                    None
                }
            };
            let triangles = summary.map(|s| s.triangles);
            info!(
                path = %stl.display(),
                seconds = elapsed.as_secs_f64(),
                triangles = ?triangles,
                "Mesh exported"
            );
            MeshStatus::Exported {
                path: stl,
                duration_secs: elapsed.as_secs_f64(),
                triangles,
                bounding_box: summary.map(|s| s.bounding_box),
            }
        }
        Err(e) => {
            warn!(path = %scad.display(), error = %e, "Mesh export failed");
            MeshStatus::Failed {
                error: format!("{:#}", e),
            }
        }
    }
}

fn stl_path(scad: &Path) -> PathBuf {
    scad.with_extension("stl")
}

fn sha256_hex(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parts::PartSpec;

    fn config_in(dir: &Path) -> Config {
        let mut config = Config::default();
        config.build.output_dir = dir.to_path_buf();
        config.build.skip_mesh = true;
        config
    }

    #[test]
    fn test_sha256_hex() {
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_filters_select_by_stem() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.build.filters = vec!["shoe".to_string()];

        let driver = BatchDriver::new(config);
        let stems: Vec<&str> = driver.selected().iter().map(|o| o.stem.as_str()).collect();
        assert_eq!(stems, vec!["shoe", "shoe_pair"]);
    }

    #[test]
    fn test_custom_table() {
        let dir = tempfile::tempdir().unwrap();
        let driver = BatchDriver::with_outputs(
            config_in(dir.path()),
            vec![OutputDescriptor::new("marker", PartSpec::DrillPattern)],
        );

        let report = driver.run().unwrap();
        assert_eq!(report.outputs.len(), 1);
        assert!(dir.path().join("marker.scad").exists());
        assert_eq!(report.outputs[0].mesh, MeshStatus::Skipped);
    }
}
