// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Footmount Contributors

//! Point-in-solid classification for geometry trees
//!
//! Answers whether a point is material or void in the finished solid
//! without running the external renderer. Cylinders are
//! treated as exact cones; hulls are computed with parry3d.

use crate::ast::{Evaluator, Node, NodeKind};
use nalgebra::{Matrix4, Point2, Point3, Vector3};
use parry3d::na as parry_na;
use tracing::debug;

const EPSILON: f64 = 1e-9;

/// Classification of a point relative to a solid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Inside,
    Outside,
}

/// A geometry tree compiled for repeated point queries
pub struct Classifier {
    root: Solid,
}

impl Classifier {
    pub fn new(node: &Node) -> Self {
        Self {
            root: compile(node),
        }
    }

    pub fn contains(&self, point: &Point3<f64>) -> bool {
        self.root.contains(point)
    }

    pub fn classify(&self, point: &Point3<f64>) -> Classification {
        if self.contains(point) {
            Classification::Inside
        } else {
            Classification::Outside
        }
    }
}

#[derive(Debug)]
enum Solid {
    Cuboid {
        min: Point3<f64>,
        max: Point3<f64>,
    },
    Cone {
        z0: f64,
        h: f64,
        r1: f64,
        r2: f64,
    },
    /// Flat region at z = 0
    Region(Vec<Point2<f64>>),
    Extruded {
        height: f64,
        profile: Box<Solid>,
    },
    /// Intersection of half-spaces `n · p <= d`
    Convex(Vec<(Vector3<f64>, f64)>),
    Union(Vec<Solid>),
    Difference(Vec<Solid>),
    Intersection(Vec<Solid>),
    Transformed {
        inverse: Matrix4<f64>,
        inner: Box<Solid>,
    },
    Empty,
}

impl Solid {
    fn contains(&self, p: &Point3<f64>) -> bool {
        match self {
            Solid::Cuboid { min, max } => {
                (0..3).all(|i| p[i] >= min[i] - EPSILON && p[i] <= max[i] + EPSILON)
            }
            Solid::Cone { z0, h, r1, r2 } => {
                if *h <= 0.0 || p.z < z0 - EPSILON || p.z > z0 + h + EPSILON {
                    return false;
                }
                let t = ((p.z - z0) / h).clamp(0.0, 1.0);
                let r = r1 + (r2 - r1) * t;
                p.x * p.x + p.y * p.y <= r * r + EPSILON
            }
            Solid::Region(outline) => {
                p.z.abs() <= EPSILON && point_in_polygon(&Point2::new(p.x, p.y), outline)
            }
            Solid::Extruded { height, profile } => {
                p.z >= -EPSILON
                    && p.z <= height + EPSILON
                    && profile.contains(&Point3::new(p.x, p.y, 0.0))
            }
            Solid::Convex(planes) => planes.iter().all(|(n, d)| n.dot(&p.coords) <= d + EPSILON),
            Solid::Union(children) => children.iter().any(|c| c.contains(p)),
            Solid::Difference(children) => match children.split_first() {
                Some((first, rest)) => first.contains(p) && !rest.iter().any(|c| c.contains(p)),
                None => false,
            },
            Solid::Intersection(children) => {
                !children.is_empty() && children.iter().all(|c| c.contains(p))
            }
            Solid::Transformed { inverse, inner } => inner.contains(&inverse.transform_point(p)),
            Solid::Empty => false,
        }
    }
}

fn compile(node: &Node) -> Solid {
    match &node.kind {
        NodeKind::Cube { size, center } => {
            let min = if *center {
                Point3::from(-size / 2.0)
            } else {
                Point3::origin()
            };
            Solid::Cuboid {
                min,
                max: min + size,
            }
        }
        NodeKind::Cylinder {
            h, r1, r2, center, ..
        } => Solid::Cone {
            z0: if *center { -h / 2.0 } else { 0.0 },
            h: *h,
            r1: *r1,
            r2: *r2,
        },
        NodeKind::Polygon(points) => Solid::Region(points.clone()),
        NodeKind::LinearExtrude { height, children } => Solid::Extruded {
            height: *height,
            profile: Box::new(compile_all(children, Solid::Union)),
        },
        NodeKind::Union(children) => compile_all(children, Solid::Union),
        NodeKind::Difference(children) => {
            Solid::Difference(children.iter().map(compile).collect())
        }
        NodeKind::Intersection(children) => {
            Solid::Intersection(children.iter().map(compile).collect())
        }
        NodeKind::Hull(children) => compile_hull(children),
        NodeKind::Transform { op, children } => match op.to_matrix().try_inverse() {
            Some(inverse) => Solid::Transformed {
                inverse,
                inner: Box::new(compile_all(children, Solid::Union)),
            },
            None => Solid::Empty,
        },
        NodeKind::Empty => Solid::Empty,
    }
}

fn compile_all(children: &[Node], wrap: fn(Vec<Solid>) -> Solid) -> Solid {
    match children {
        [] => Solid::Empty,
        [only] => compile(only),
        _ => wrap(children.iter().map(compile).collect()),
    }
}

fn compile_hull(children: &[Node]) -> Solid {
    let evaluator = Evaluator::new();
    let points: Vec<parry_na::Point3<f32>> = children
        .iter()
        .flat_map(|child| evaluator.support_points(child))
        .map(|p| parry_na::Point3::new(p.x as f32, p.y as f32, p.z as f32))
        .collect();

    if points.len() < 4 {
        return Solid::Empty;
    }

    let (vertices, faces) = parry3d::transformation::convex_hull(&points);
    if vertices.is_empty() {
        return Solid::Empty;
    }

    let to_f64 =
        |p: &parry_na::Point3<f32>| Point3::new(f64::from(p.x), f64::from(p.y), f64::from(p.z));
    let hull_points: Vec<Point3<f64>> = vertices.iter().map(to_f64).collect();
    let centroid = hull_points
        .iter()
        .fold(Vector3::zeros(), |acc, p| acc + p.coords)
        / hull_points.len() as f64;

    let mut planes = Vec::with_capacity(faces.len());
    for face in &faces {
        let a = hull_points[face[0] as usize];
        let b = hull_points[face[1] as usize];
        let c = hull_points[face[2] as usize];
        let normal = (b - a).cross(&(c - a));
        let norm = normal.norm();
        if norm < 1e-12 {
            continue;
        }
        let mut n = normal / norm;
        let mut d = n.dot(&a.coords);
        // orient every plane so the centroid is on the inner side
        if n.dot(&centroid) > d {
            n = -n;
            d = -d;
        }
        // f32 hull vertices; widen slightly so input vertices stay inside
        planes.push((n, d + 1e-4));
    }

    debug!(
        points = points.len(),
        faces = planes.len(),
        "Compiled hull for classification"
    );
    Solid::Convex(planes)
}

/// Even-odd ray casting test
fn point_in_polygon(p: &Point2<f64>, outline: &[Point2<f64>]) -> bool {
    let mut inside = false;
    let n = outline.len();
    if n < 3 {
        return false;
    }
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (outline[i], outline[j]);
        if (pi.y > p.y) != (pj.y > p.y) {
            let x_cross = pi.x + (p.y - pi.y) * (pj.x - pi.x) / (pj.y - pi.y);
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::builder::{cube, cylinder, difference, hull, linear_extrude, polygon};

    #[test]
    fn test_difference_removes_shaft() {
        let tree = difference(vec![
            cube([10.0, 10.0, 10.0], true),
            cylinder(1.0, 20.0, true),
        ]);
        let classifier = Classifier::new(&tree);

        assert_eq!(
            classifier.classify(&Point3::new(0.0, 0.0, 0.0)),
            Classification::Outside
        );
        assert_eq!(
            classifier.classify(&Point3::new(3.0, 3.0, 0.0)),
            Classification::Inside
        );
        assert!(!classifier.contains(&Point3::new(6.0, 0.0, 0.0)));
    }

    #[test]
    fn test_hull_fills_between_slabs() {
        // two thin slabs of different size: the hull is a tapered block
        let top = cube([4.0, 4.0, 0.01], true).up(10.0);
        let bottom = cube([8.0, 8.0, 0.01], true);
        let classifier = Classifier::new(&hull(vec![top, bottom]));

        assert!(classifier.contains(&Point3::new(0.0, 0.0, 5.0)));
        // halfway up the taper the half-width is 3
        assert!(classifier.contains(&Point3::new(2.9, 0.0, 5.0)));
        assert!(!classifier.contains(&Point3::new(3.2, 0.0, 5.0)));
        assert!(!classifier.contains(&Point3::new(0.0, 0.0, 11.0)));
    }

    #[test]
    fn test_transformed_prism() {
        let prism = linear_extrude(2.0, polygon([(0.0, 0.0), (4.0, 0.0), (0.0, 4.0)]))
            .mirror_y()
            .up(1.0);
        let classifier = Classifier::new(&prism);

        assert!(classifier.contains(&Point3::new(1.0, -1.0, 2.0)));
        assert!(!classifier.contains(&Point3::new(1.0, 1.0, 2.0)));
        assert!(!classifier.contains(&Point3::new(1.0, -1.0, 0.5)));
    }

    #[test]
    fn test_point_in_polygon_concave() {
        let l_shape = vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 4.0),
            Point2::new(0.0, 4.0),
        ];
        assert!(point_in_polygon(&Point2::new(0.5, 3.0), &l_shape));
        assert!(point_in_polygon(&Point2::new(3.0, 0.5), &l_shape));
        assert!(!point_in_polygon(&Point2::new(3.0, 3.0), &l_shape));
    }
}
