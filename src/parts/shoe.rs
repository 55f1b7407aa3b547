// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Footmount Contributors

//! Shoe assembly: the socket the foot clips into

use super::feet::{make_feet, FeetOptions};
use super::flap::SlopeStyle;
use super::primitives::{screw_negative_of, square_with_cut_corners};
use crate::ast::builder::{cube, difference, hull, union};
use crate::ast::Node;
use crate::config::PartsConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShoeOptions {
    /// Gap left around the foot negative
    pub clearance: f64,
    /// Tilt the shoe so it lies on its printed face
    pub flip_for_print: bool,
    /// Cut away everything behind the front section
    pub short: bool,
}

impl Default for ShoeOptions {
    fn default() -> Self {
        Self {
            clearance: 0.25,
            flip_for_print: true,
            short: true,
        }
    }
}

/// A built shoe with the outer footprint it was sized to
#[derive(Debug, Clone)]
pub struct ShoeAssembly {
    pub node: Node,
    pub width: f64,
    pub depth: f64,
}

/// Tilt in degrees that lays the shoe's sloped face flat
pub fn print_angle(feet_height: f64) -> f64 {
    let rise = feet_height;
    let run = feet_height / 2.0;
    rise.atan2(run).to_degrees()
}

pub fn make_shoe(config: &PartsConfig, options: &ShoeOptions) -> ShoeAssembly {
    let dims = &config.shoe;
    let feet_height = dims.feet_height - dims.bottom_layer_height;
    let width = dims.top_square_width + dims.side_rim_width;
    let depth = dims.top_square_width + dims.rim_width;
    let t = config.unprintable_thickness;

    let top_surface = cube([depth, width, t], true).up(feet_height);
    let bottom_surface = cube([depth + feet_height, width, t], true);
    let shoe_mold = hull(vec![top_surface, bottom_surface]).labeled("shoe mold");

    let feet_negative = make_feet(
        config,
        &FeetOptions {
            breaking_point: false,
            slope: SlopeStyle::Flat,
            screws: false,
            short: false,
            flaps: true,
            clearance: -options.clearance,
        },
    )
    .up(dims.bottom_layer_height - 0.1)
    .labeled("feet negative");

    let mut parts = vec![shoe_mold, feet_negative];

    if options.short {
        parts.push(trimming_volume(config, width, depth, feet_height));
    }

    let seat = feet_height + dims.screw_seat;
    let screws = union(
        dims.screws
            .iter()
            .map(|p| {
                screw_negative_of(config, p.kind)
                    .mirror_z()
                    .translate([p.x, p.y, seat])
            })
            .collect(),
    )
    .labeled("screws");
    parts.push(screws.clone());
    parts.push(screws.mirror_y());

    let alpha = if options.flip_for_print {
        print_angle(feet_height)
    } else {
        0.0
    };

    debug!(
        clearance = options.clearance,
        short = options.short,
        tilt = alpha,
        "Assembled shoe"
    );

    ShoeAssembly {
        node: difference(parts).rotate([0.0, 180.0 - alpha, 90.0]),
        width,
        depth,
    }
}

/// Everything behind the front section, with chamfered front corners
fn trimming_volume(config: &PartsConfig, width: f64, depth: f64, feet_height: f64) -> Node {
    let dims = &config.shoe;
    let cutoff = dims.short_corner_cutoff;

    let top_surface = square_with_cut_corners(config, width, depth, cutoff).up(feet_height);
    let bottom_surface = square_with_cut_corners(config, width, depth, cutoff).down(0.1);
    let front = hull(vec![top_surface, bottom_surface]).left(depth / 2.0 - dims.short_front_edge);

    let behind = cube([depth, width, feet_height + 2.0], true)
        .up(feet_height / 2.0)
        .left(depth / 2.0 + 10.0);

    union(vec![front, behind]).labeled("short trim")
}

/// Two flipped shoes side by side, printed in one job
pub fn make_shoe_pair(config: &PartsConfig) -> Node {
    let shoe = make_shoe(config, &ShoeOptions::default());
    let offset = shoe.width / 2.0;
    union(vec![shoe.node.clone().left(offset), shoe.node.right(offset)])
}
