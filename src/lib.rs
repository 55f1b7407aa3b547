// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Footmount Contributors

//! Footmount
//!
//! Parametric generator for a two-part mounting system: a tapered foot with
//! snap-in wings and a matching shoe. Parts are built as OpenSCAD geometry
//! trees, written as `.scad` files and optionally exported to STL through
//! the OpenSCAD executable.

pub mod ast;
pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod io;
pub mod parts;

pub use ast::{Node, NodeKind, TransformOp};
pub use batch::{default_outputs, BatchDriver, BuildReport, OutputDescriptor};
pub use config::{Config, PartsConfig};
pub use error::{FootmountError, Result};
pub use parts::{FeetOptions, PartSpec, ShoeOptions, SlopeStyle};

/// Build the tree for a stem of the default output table
pub fn build_part(config: &PartsConfig, stem: &str) -> Result<Node> {
    batch::find_output(stem)
        .map(|output| output.part.build(config))
        .ok_or_else(|| FootmountError::UnknownPart(stem.to_string()))
}

/// Render a stem of the default output table as OpenSCAD source
pub fn render_scad(config: &PartsConfig, stem: &str) -> Result<String> {
    build_part(config, stem).map(|node| io::to_scad(&node))
}
