// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Footmount Contributors

//! Read back meshes written by the renderer

use crate::error::{FootmountError, Result};
use crate::geometry::BoundingBox;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// Size and extent of an exported mesh
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshSummary {
    pub triangles: usize,
    pub bounding_box: BoundingBox,
}

/// Load an STL file (ASCII or binary) and summarize it
pub fn summarize_stl(path: impl AsRef<Path>) -> Result<MeshSummary> {
    let path = path.as_ref();
    let read_err = |source| FootmountError::MeshRead {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(read_err)?;
    let stl = stl_io::read_stl(&mut file).map_err(read_err)?;

    let points: Vec<Point3<f64>> = stl
        .vertices
        .iter()
        .map(|v| Point3::new(f64::from(v[0]), f64::from(v[1]), f64::from(v[2])))
        .collect();

    Ok(MeshSummary {
        triangles: stl.faces.len(),
        bounding_box: BoundingBox::from_points(&points),
    })
}
