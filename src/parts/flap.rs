// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Footmount Contributors

//! Wing (flap) cutouts that form the catch between foot and shoe

use crate::ast::builder::{hull, linear_extrude, polygon, union};
use crate::ast::Node;
use crate::error::FootmountError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Edge treatment of the wing cutout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlopeStyle {
    /// Straight-walled pocket
    Flat,
    /// Bevelled leading corner with front and side slope copies
    Sloped,
    /// Ramp spanned between the pocket and a raised, inward copy
    BackSloped,
}

impl SlopeStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlopeStyle::Flat => "flat",
            SlopeStyle::Sloped => "sloped",
            SlopeStyle::BackSloped => "back_sloped",
        }
    }
}

impl fmt::Display for SlopeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlopeStyle {
    type Err = FootmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flat" => Ok(SlopeStyle::Flat),
            "sloped" => Ok(SlopeStyle::Sloped),
            "back_sloped" | "back-sloped" => Ok(SlopeStyle::BackSloped),
            _ => Err(FootmountError::UnknownSlopeStyle(s.to_string())),
        }
    }
}

/// Placement and size of a wing relative to the foot it is cut from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlapParams {
    /// Width of the foot's top face
    pub feet_width: f64,
    pub feet_height: f64,
    pub edge_depth: f64,
    pub inside_depth: f64,
    /// Extent of the wing along Y
    pub width: f64,
    /// Depth of the pocket below the top face
    pub height: f64,
    pub back_slope_run: f64,
    pub clearance: f64,
}

/// Wing cutout on the -Y side of the foot's front (+X) edge.
///
/// The outline vertices and slope offsets were fitted against the mounting
/// plate by hand; they are not derived from a general slope rule.
pub fn make_flap(params: &FlapParams, slope: SlopeStyle) -> Node {
    let FlapParams {
        feet_width,
        feet_height,
        edge_depth,
        inside_depth,
        width,
        height,
        back_slope_run,
        clearance: c,
    } = *params;
    let half = feet_width / 2.0;

    let mut outline = vec![
        (half - edge_depth - c, -half - c),
        (half + c, -half - c),
    ];
    match slope {
        SlopeStyle::Sloped => {
            outline.push((half + c, -half + width + 3.0 + c * 2.0));
            outline.push((half - 3.0 - c, -half + width + c));
        }
        SlopeStyle::Flat | SlopeStyle::BackSloped => {
            outline.push((half + c, -half + width + c));
        }
    }
    outline.push((half - inside_depth - c, -half + width + c));

    let pocket = linear_extrude(height + 0.05 + c, polygon(outline));
    let wing = pocket
        .clone()
        .translate([-c, c, feet_height - height - c]);

    match slope {
        SlopeStyle::Flat => wing,
        SlopeStyle::Sloped => {
            let side_slope = pocket
                .clone()
                .rotate([20.0, 0.0, 0.0])
                .translate([0.0, -3.0, feet_height + 11.0 - (height / 2.0 + 1.0)]);
            let front_slope = pocket
                .rotate([0.0, 5.0, 0.0])
                .translate([0.1, 0.0, feet_height + 0.5 - height / 1.5]);
            union(vec![wing, front_slope, side_slope])
        }
        SlopeStyle::BackSloped => {
            let raised = wing.clone().translate([-back_slope_run, 0.0, height]);
            hull(vec![wing, raised])
        }
    }
}
