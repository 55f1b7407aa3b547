// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Footmount Contributors

//! Foot assembly

use super::flap::{make_flap, FlapParams, SlopeStyle};
use super::primitives::{screw_negative_with_washer, square_with_cut_corners};
use crate::ast::builder::{cube, difference, hull, union};
use crate::ast::Node;
use crate::config::PartsConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Variant switches for the foot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeetOptions {
    pub breaking_point: bool,
    pub slope: SlopeStyle,
    pub screws: bool,
    /// Trim the back of the foot
    pub short: bool,
    pub flaps: bool,
    /// Shrinks every dimension; negative values grow the foot
    pub clearance: f64,
}

impl Default for FeetOptions {
    fn default() -> Self {
        Self {
            breaking_point: true,
            slope: SlopeStyle::Sloped,
            screws: true,
            short: true,
            flaps: true,
            clearance: 0.0,
        }
    }
}

/// Build the foot: a tapered mold with wings, screw holes and an optional
/// breaking point cut out of it
pub fn make_feet(config: &PartsConfig, options: &FeetOptions) -> Node {
    let dims = &config.feet;
    let c = options.clearance;

    let feet_height = dims.height - c;
    let top_width = dims.top_width - c;
    let bottom_width = dims.bottom_width - c;
    // the front edge stays put; only the back is trimmed
    let trim = if options.short { dims.short_trim } else { 0.0 };

    let top_surface = square_with_cut_corners(
        config,
        top_width,
        top_width - trim,
        dims.top_corner_cutoff,
    )
    .translate([trim / 2.0, 0.0, feet_height]);
    let bottom_surface = square_with_cut_corners(
        config,
        bottom_width,
        bottom_width - trim,
        dims.bottom_corner_cutoff,
    )
    .right(trim / 2.0);

    let mold = hull(vec![top_surface, bottom_surface]).labeled("feet mold");
    let mut parts = vec![mold];

    if options.flaps {
        let flap = make_flap(
            &FlapParams {
                feet_width: top_width,
                feet_height,
                edge_depth: config.flap.edge_depth,
                inside_depth: config.flap.inside_depth,
                width: config.flap.width,
                height: config.flap.height,
                back_slope_run: config.flap.back_slope_run,
                clearance: c,
            },
            options.slope,
        )
        .labeled("wing");
        parts.push(flap.clone());
        parts.push(flap.mirror_y());
    }

    if options.screws {
        let screws = feet_screws(config, top_width).labeled("screws");
        parts.push(screws.clone());
        parts.push(screws.mirror_y());
    }

    if options.breaking_point {
        parts.push(breaking_point(config, top_width, bottom_width, feet_height));
    }

    debug!(
        cutouts = parts.len() - 1,
        slope = %options.slope,
        short = options.short,
        clearance = c,
        "Assembled feet"
    );
    difference(parts)
}

/// Front, middle and back screw negatives on the +Y half.
///
/// Placements are calibration offsets from the top face's edge.
fn feet_screws(config: &PartsConfig, top_width: f64) -> Node {
    let edge = top_width / 2.0 - 13.0;
    let placements = [
        [top_width / 2.0 - 13.0, edge - 4.0, 0.0],
        [9.0, edge - 0.5, 0.0],
        [17.5, edge - 10.0, 0.0],
    ];
    union(
        placements
            .iter()
            .map(|at| screw_negative_with_washer(&config.screw).translate(*at))
            .collect(),
    )
}

/// Hull between a bottom slab and a thin score line just under the top
fn breaking_point(
    config: &PartsConfig,
    top_width: f64,
    bottom_width: f64,
    feet_height: f64,
) -> Node {
    let dims = &config.feet;
    let bottom = cube([bottom_width / 2.0, dims.breaking_point_width, 0.1], true)
        .right(bottom_width / 4.0);
    let top = cube([top_width / 2.0 + dims.breaking_point_overhang, 0.1, 0.1], true)
        .right(bottom_width / 4.0)
        .up(feet_height - dims.breaking_point_depth);
    hull(vec![top, bottom]).labeled("breaking point")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Evaluator, NodeKind};
    use approx::assert_relative_eq;

    #[test]
    fn test_full_foot_has_every_cutout() {
        let feet = make_feet(&PartsConfig::default(), &FeetOptions::default());
        match &feet.kind {
            // mold, 2 wings, 2 screw sets, breaking point
            NodeKind::Difference(children) => assert_eq!(children.len(), 6),
            other => panic!("expected difference, got {:?}", other),
        }
    }

    #[test]
    fn test_bare_mold() {
        let options = FeetOptions {
            breaking_point: false,
            screws: false,
            flaps: false,
            ..FeetOptions::default()
        };
        let feet = make_feet(&PartsConfig::default(), &options);
        match &feet.kind {
            NodeKind::Difference(children) => {
                assert_eq!(children.len(), 1);
                assert_eq!(children[0].id.as_deref(), Some("feet mold"));
            }
            other => panic!("expected difference, got {:?}", other),
        }
    }

    #[test]
    fn test_short_foot_keeps_front_edge() {
        let config = PartsConfig::default();
        let evaluator = Evaluator::new();

        let long = evaluator.bounding_box(&make_feet(
            &config,
            &FeetOptions {
                short: false,
                ..FeetOptions::default()
            },
        ));
        let short = evaluator.bounding_box(&make_feet(&config, &FeetOptions::default()));

        assert_relative_eq!(long.min.x, -42.0, epsilon = 1e-9);
        assert_relative_eq!(long.max.x, 42.0, epsilon = 1e-9);
        assert_relative_eq!(short.min.x, -5.0, epsilon = 1e-9);
        assert_relative_eq!(short.max.x, 42.0, epsilon = 1e-9);
        assert_relative_eq!(short.size().y, 84.0, epsilon = 1e-9);
        assert_relative_eq!(short.max.z, 11.5 + 0.01, epsilon = 1e-9);
    }

    #[test]
    fn test_clearance_shrinks_foot() {
        let config = PartsConfig::default();
        let evaluator = Evaluator::new();
        let options = FeetOptions {
            short: false,
            clearance: 0.5,
            ..FeetOptions::default()
        };

        let bbox = evaluator.bounding_box(&make_feet(&config, &options));
        assert_relative_eq!(bbox.size().x, 83.5, epsilon = 1e-9);
        assert_relative_eq!(bbox.max.z, 11.0 + 0.01, epsilon = 1e-9);
    }
}
