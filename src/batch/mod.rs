// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Footmount Contributors

//! Output table and batch build

mod driver;
mod report;

pub use driver::BatchDriver;
pub use report::{BuildReport, MeshStatus, OutputRecord, MANIFEST_FILE};

use crate::parts::{FeetOptions, PartSpec, ShoeOptions};
use serde::{Deserialize, Serialize};

/// One output file stem and the part it is built from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputDescriptor {
    pub stem: String,
    pub part: PartSpec,
}

impl OutputDescriptor {
    pub fn new(stem: impl Into<String>, part: PartSpec) -> Self {
        Self {
            stem: stem.into(),
            part,
        }
    }

    pub fn scad_name(&self) -> String {
        format!("{}.scad", self.stem)
    }
}

/// The outputs a plain `footmount build` produces
pub fn default_outputs() -> Vec<OutputDescriptor> {
    vec![
        OutputDescriptor::new("feet", PartSpec::Feet(FeetOptions::default())),
        OutputDescriptor::new("shoe", PartSpec::Shoe(ShoeOptions::default())),
        OutputDescriptor::new("shoe_pair", PartSpec::ShoePair),
        OutputDescriptor::new("pattern0", PartSpec::DrillPattern),
    ]
}

/// Look up an entry of the default table
pub fn find_output(stem: &str) -> Option<OutputDescriptor> {
    default_outputs().into_iter().find(|o| o.stem == stem)
}
