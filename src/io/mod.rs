// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Footmount Contributors

//! I/O module - OpenSCAD output and mesh read-back

mod scad;
mod stl;

pub use scad::{format_number, to_scad, write_scad};
pub use stl::{summarize_stl, MeshSummary};
