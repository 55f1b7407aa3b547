// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Footmount Contributors

//! Part builders
//!
//! Each builder is a pure function of a [`PartsConfig`] and an options
//! record, returning a fresh geometry tree.

mod feet;
mod flap;
mod plate;
mod primitives;
mod shoe;

pub use feet::{make_feet, FeetOptions};
pub use flap::{make_flap, FlapParams, SlopeStyle};
pub use plate::make_drill_pattern;
pub use primitives::{
    chamfer_leg, cut_corner_outline, screw_negative, screw_negative_of,
    screw_negative_with_washer, square_with_cut_corners,
};
pub use shoe::{make_shoe, make_shoe_pair, print_angle, ShoeAssembly, ShoeOptions};

use crate::ast::Node;
use crate::config::PartsConfig;
use serde::{Deserialize, Serialize};

/// Which builder an output uses, with its options
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "part", rename_all = "snake_case")]
pub enum PartSpec {
    Feet(FeetOptions),
    Shoe(ShoeOptions),
    ShoePair,
    DrillPattern,
}

impl PartSpec {
    pub fn build(&self, config: &PartsConfig) -> Node {
        match self {
            PartSpec::Feet(options) => make_feet(config, options),
            PartSpec::Shoe(options) => make_shoe(config, options).node,
            PartSpec::ShoePair => make_shoe_pair(config),
            PartSpec::DrillPattern => make_drill_pattern(config),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PartSpec::Feet(_) => "feet",
            PartSpec::Shoe(_) => "shoe",
            PartSpec::ShoePair => "shoe pair",
            PartSpec::DrillPattern => "drill pattern",
        }
    }
}
