// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Footmount Contributors

//! Primitive part builders: chamfered sections and screw negatives

use crate::ast::builder::{cylinder, frustum, linear_extrude, polygon, union};
use crate::ast::{Node, Point2};
use crate::config::{PartsConfig, ScrewDimensions, ScrewKind};
use std::f64::consts::FRAC_PI_4;

/// Length each chamfer cuts along either axis for a given cutoff length
pub fn chamfer_leg(cutoff_length: f64) -> f64 {
    FRAC_PI_4.sin() * cutoff_length
}

/// Outline of a `depth` (X) by `width` (Y) rectangle centered on the
/// origin, with each corner replaced by a 45° chamfer.
///
/// Vertices run counter-clockwise starting on the -X edge. A cutoff longer
/// than half a side yields a self-intersecting outline; that is not checked.
pub fn cut_corner_outline(width: f64, depth: f64, cutoff_length: f64) -> Vec<Point2> {
    let a = chamfer_leg(cutoff_length);
    let (x, y) = (depth / 2.0, width / 2.0);
    vec![
        Point2::new(-x, -y + a),
        Point2::new(-x + a, -y),
        Point2::new(x - a, -y),
        Point2::new(x, -y + a),
        Point2::new(x, y - a),
        Point2::new(x - a, y),
        Point2::new(-x + a, y),
        Point2::new(-x, y - a),
    ]
}

/// A chamfered rectangle extruded to the unprintable thickness, for use as
/// one face of a hull
pub fn square_with_cut_corners(
    config: &PartsConfig,
    width: f64,
    depth: f64,
    cutoff_length: f64,
) -> Node {
    let outline = cut_corner_outline(width, depth, cutoff_length);
    linear_extrude(
        config.unprintable_thickness,
        polygon(outline.iter().map(|p| (p.x, p.y))),
    )
}

/// Flared washer recess plus screw shaft; the recess floor sits at z = 0
pub fn screw_negative_with_washer(screw: &ScrewDimensions) -> Node {
    let washer_r = screw.washer_diameter / 2.0;
    let washer = frustum(washer_r * screw.washer_flare, washer_r, screw.recess_height, true);
    capped_shaft(screw, washer)
}

/// Countersunk head recess plus screw shaft
pub fn screw_negative(screw: &ScrewDimensions) -> Node {
    let head = frustum(
        screw.head_diameter / 2.0,
        screw.shaft_diameter / 2.0,
        screw.recess_height,
        true,
    );
    capped_shaft(screw, head)
}

pub fn screw_negative_of(config: &PartsConfig, kind: ScrewKind) -> Node {
    match kind {
        ScrewKind::Washer => screw_negative_with_washer(&config.screw),
        ScrewKind::Head => screw_negative(&config.screw),
    }
}

fn capped_shaft(screw: &ScrewDimensions, cap: Node) -> Node {
    let shaft = cylinder(screw.shaft_diameter / 2.0, screw.shaft_length, true)
        .segments(screw.shaft_segments);
    union(vec![cap, shaft]).up(screw.recess_height / 2.0)
}
