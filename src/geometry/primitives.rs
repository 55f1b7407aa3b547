// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Footmount Contributors

//! Vertex sampling for primitive solids
//!
//! Vertices follow OpenSCAD's own tessellation so bounding boxes and hulls
//! computed here agree with what the renderer will produce.

use nalgebra::{Point2, Point3, Vector3};
use std::f64::consts::PI;

/// OpenSCAD `$fa` default, degrees
const DEFAULT_FA: f64 = 12.0;
/// OpenSCAD `$fs` default, millimetres
const DEFAULT_FS: f64 = 2.0;
const GRID_FINE: f64 = 1e-8;

/// Number of segments OpenSCAD uses for a circle of radius `r`
pub fn fragments(r: f64, fn_: Option<u32>) -> u32 {
    if r < GRID_FINE {
        return 3;
    }
    match fn_ {
        Some(n) if n > 0 => n.max(3),
        _ => (360.0 / DEFAULT_FA)
            .min(r * 2.0 * PI / DEFAULT_FS)
            .max(5.0)
            .ceil() as u32,
    }
}

/// Geometric primitives
#[derive(Debug, Clone)]
pub enum Primitive {
    Cube {
        size: Vector3<f64>,
        center: bool,
    },
    Frustum {
        h: f64,
        r1: f64,
        r2: f64,
        center: bool,
        fn_: Option<u32>,
    },
    /// Flat outline at z = 0
    Outline(Vec<Point2<f64>>),
}

impl Primitive {
    /// Vertices in the primitive's local frame
    pub fn vertices(&self) -> Vec<Point3<f64>> {
        match self {
            Self::Cube { size, center } => cube_vertices(*size, *center),
            Self::Frustum {
                h,
                r1,
                r2,
                center,
                fn_,
            } => frustum_vertices(*h, *r1, *r2, *center, *fn_),
            Self::Outline(points) => points.iter().map(|p| Point3::new(p.x, p.y, 0.0)).collect(),
        }
    }
}

fn cube_vertices(size: Vector3<f64>, center: bool) -> Vec<Point3<f64>> {
    let min = if center {
        Point3::from(-size / 2.0)
    } else {
        Point3::origin()
    };
    let max = min + size;

    let mut vertices = Vec::with_capacity(8);
    for &x in &[min.x, max.x] {
        for &y in &[min.y, max.y] {
            for &z in &[min.z, max.z] {
                vertices.push(Point3::new(x, y, z));
            }
        }
    }
    vertices
}

fn frustum_vertices(h: f64, r1: f64, r2: f64, center: bool, fn_: Option<u32>) -> Vec<Point3<f64>> {
    let z0 = if center { -h / 2.0 } else { 0.0 };
    let segments = fragments(r1.max(r2), fn_);

    let mut vertices = Vec::with_capacity(2 * segments as usize);
    for (r, z) in [(r1, z0), (r2, z0 + h)] {
        if r < GRID_FINE {
            vertices.push(Point3::new(0.0, 0.0, z));
            continue;
        }
        for i in 0..segments {
            let phi = 2.0 * PI * f64::from(i) / f64::from(segments);
            vertices.push(Point3::new(r * phi.cos(), r * phi.sin(), z));
        }
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragments() {
        assert_eq!(fragments(1.5, Some(20)), 20);
        assert_eq!(fragments(1.5, Some(2)), 3);
        // small radius is clamped to 5 segments
        assert_eq!(fragments(1.0, None), 5);
        // large radius is capped by $fa
        assert_eq!(fragments(100.0, None), 30);
        assert_eq!(fragments(0.0, Some(40)), 3);
    }

    #[test]
    fn test_centered_cube_vertices() {
        let verts = Primitive::Cube {
            size: Vector3::new(2.0, 4.0, 6.0),
            center: true,
        }
        .vertices();
        assert_eq!(verts.len(), 8);
        assert!(verts.contains(&Point3::new(-1.0, -2.0, -3.0)));
        assert!(verts.contains(&Point3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn test_cone_collapses_apex() {
        let verts = Primitive::Frustum {
            h: 2.0,
            r1: 1.0,
            r2: 0.0,
            center: false,
            fn_: Some(8),
        }
        .vertices();
        assert_eq!(verts.len(), 9);
        assert_eq!(verts[8], Point3::new(0.0, 0.0, 2.0));
    }
}
