// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Footmount Contributors

//! Configuration: part dimensions and build settings
//!
//! Every dimension defaults to the value calibrated against the printed
//! parts. A `footmount.toml` may override any subset of them.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file looked up in the working directory
pub const CONFIG_FILE: &str = "footmount.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub build: BuildConfig,
    pub parts: PartsConfig,
}

/// Batch driver settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Directory receiving `.scad`, `.stl` and the manifest
    pub output_dir: PathBuf,
    /// OpenSCAD executable used for mesh export
    pub openscad_path: String,
    /// Worker count for mesh export; `None` uses every available CPU
    pub parallelism: Option<usize>,
    /// Write descriptors only
    pub skip_mesh: bool,
    /// Only build outputs whose stem contains one of these
    pub filters: Vec<String>,
    pub write_manifest: bool,
    pub verbose: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("build"),
            openscad_path: "openscad".to_string(),
            parallelism: None,
            skip_mesh: false,
            filters: Vec::new(),
            write_manifest: true,
            verbose: false,
        }
    }
}

impl BuildConfig {
    /// Check if an output stem matches filters
    pub fn matches_filter(&self, stem: &str) -> bool {
        if self.filters.is_empty() {
            return true;
        }
        self.filters.iter().any(|filter| stem.contains(filter.as_str()))
    }

    /// Worker count for the mesh export pool
    pub fn worker_count(&self) -> usize {
        self.parallelism
            .filter(|n| *n > 0)
            .or_else(|| std::thread::available_parallelism().ok().map(|n| n.get()))
            .unwrap_or(1)
    }
}

/// Dimensions for every part, in millimetres
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartsConfig {
    /// Thickness of the flat sections that hulls are spanned between
    pub unprintable_thickness: f64,
    pub screw: ScrewDimensions,
    pub feet: FeetDimensions,
    pub flap: FlapDimensions,
    pub shoe: ShoeDimensions,
    pub plate: PlateDimensions,
}

impl Default for PartsConfig {
    fn default() -> Self {
        Self {
            unprintable_thickness: 0.01,
            screw: ScrewDimensions::default(),
            feet: FeetDimensions::default(),
            flap: FlapDimensions::default(),
            shoe: ShoeDimensions::default(),
            plate: PlateDimensions::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrewDimensions {
    /// Height of the washer or head recess
    pub recess_height: f64,
    pub washer_diameter: f64,
    /// Bottom radius of the washer recess relative to the washer radius
    pub washer_flare: f64,
    pub head_diameter: f64,
    pub shaft_diameter: f64,
    pub shaft_length: f64,
    pub shaft_segments: u32,
}

impl Default for ScrewDimensions {
    fn default() -> Self {
        Self {
            recess_height: 3.5,
            washer_diameter: 12.5,
            washer_flare: 1.25,
            head_diameter: 7.5,
            shaft_diameter: 3.0,
            shaft_length: 30.0,
            shaft_segments: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeetDimensions {
    pub height: f64,
    pub top_width: f64,
    pub bottom_width: f64,
    pub top_corner_cutoff: f64,
    pub bottom_corner_cutoff: f64,
    /// Depth removed from the back edge of a shortened foot
    pub short_trim: f64,
    /// Y extent of the breaking point slab at the bottom
    pub breaking_point_width: f64,
    /// Extra length of the breaking point score line at the top
    pub breaking_point_overhang: f64,
    /// Distance of the score line below the top face
    pub breaking_point_depth: f64,
}

impl Default for FeetDimensions {
    fn default() -> Self {
        Self {
            height: 11.5,
            top_width: 84.0,
            bottom_width: 72.0,
            top_corner_cutoff: 10.0,
            bottom_corner_cutoff: 6.0,
            short_trim: 37.0,
            breaking_point_width: 21.0,
            breaking_point_overhang: 10.0,
            breaking_point_depth: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlapDimensions {
    pub height: f64,
    pub width: f64,
    /// Length of the wing along the foot edge
    pub edge_depth: f64,
    /// Length of the wing's inner edge
    pub inside_depth: f64,
    /// Inward run of the back-sloped ramp
    pub back_slope_run: f64,
}

impl Default for FlapDimensions {
    fn default() -> Self {
        Self {
            height: 4.5,
            width: 13.75,
            edge_depth: 37.0,
            inside_depth: 25.0,
            back_slope_run: 5.0,
        }
    }
}

/// Which screw negative a placement uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrewKind {
    Washer,
    Head,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrewPlacement {
    pub kind: ScrewKind,
    pub x: f64,
    pub y: f64,
}

impl ScrewPlacement {
    pub const fn new(kind: ScrewKind, x: f64, y: f64) -> Self {
        Self { kind, x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShoeDimensions {
    pub bottom_layer_height: f64,
    /// Rim added to the foot width along X
    pub rim_width: f64,
    /// Rim added to the foot width along Y
    pub side_rim_width: f64,
    pub feet_height: f64,
    pub top_square_width: f64,
    pub short_corner_cutoff: f64,
    /// X position of the front edge of the trimming volume
    pub short_front_edge: f64,
    /// Seat depth of the screw negatives below the top face
    pub screw_seat: f64,
    /// Placements on the +Y half; mirrored onto the -Y half
    pub screws: Vec<ScrewPlacement>,
}

impl Default for ShoeDimensions {
    fn default() -> Self {
        use ScrewKind::{Head, Washer};
        Self {
            bottom_layer_height: 0.0,
            rim_width: 25.0,
            side_rim_width: 18.5,
            feet_height: 11.5,
            top_square_width: 84.0,
            short_corner_cutoff: 25.0,
            short_front_edge: 3.75,
            screw_seat: 0.5,
            screws: vec![
                ScrewPlacement::new(Washer, 20.0, 42.0),
                ScrewPlacement::new(Washer, 38.0, 39.0),
                ScrewPlacement::new(Washer, 49.0, 15.0),
                ScrewPlacement::new(Head, 0.0, 47.0),
                ScrewPlacement::new(Head, -30.0, 47.0),
                ScrewPlacement::new(Washer, -48.0, 39.0),
                ScrewPlacement::new(Washer, -48.0, 15.0),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlateDimensions {
    pub hole_diameter: f64,
    pub thickness: f64,
}

impl Default for PlateDimensions {
    fn default() -> Self {
        Self {
            hole_diameter: 6.0,
            thickness: 1.0,
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load `footmount.toml` if present, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = if Path::new(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };
        config.apply_env();
        Ok(config)
    }

    /// Apply environment variable overrides
    pub fn apply_env(&mut self) {
        if let Ok(openscad) = std::env::var("OPENSCAD_PATH") {
            self.build.openscad_path = openscad;
        }

        if let Ok(output_dir) = std::env::var("FOOTMOUNT_OUTPUT_DIR") {
            self.build.output_dir = PathBuf::from(output_dir);
        }

        if let Ok(parallelism) = std::env::var("FOOTMOUNT_PARALLELISM") {
            self.build.parallelism = parallelism.parse().ok();
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = Config::from_toml(
            r#"
            [build]
            skip_mesh = true

            [parts.feet]
            top_width = 90.0
            "#,
        )
        .unwrap();

        assert!(config.build.skip_mesh);
        assert_eq!(config.parts.feet.top_width, 90.0);
        assert_eq!(config.parts.feet.bottom_width, 72.0);
        assert_eq!(config.parts.shoe.screws.len(), 7);
        assert_eq!(config.build.openscad_path, "openscad");
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("footmount.toml");

        let mut config = Config::default();
        config.build.filters = vec!["shoe".to_string()];
        config.parts.flap.back_slope_run = 7.5;
        config.save(&path).unwrap();

        assert_eq!(Config::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_filters() {
        let mut build = BuildConfig::default();
        assert!(build.matches_filter("feet"));

        build.filters = vec!["shoe".to_string()];
        assert!(build.matches_filter("shoe_pair"));
        assert!(!build.matches_filter("feet"));
    }

    #[test]
    fn test_worker_count_ignores_zero() {
        let build = BuildConfig {
            parallelism: Some(0),
            ..BuildConfig::default()
        };
        assert!(build.worker_count() >= 1);

        let build = BuildConfig {
            parallelism: Some(3),
            ..BuildConfig::default()
        };
        assert_eq!(build.worker_count(), 3);
    }
}
