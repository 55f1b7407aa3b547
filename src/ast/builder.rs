// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Footmount Contributors

//! Constructors and chainable transforms for building geometry trees
//!
//! Every method consumes the node and returns a new parent, so a part reads
//! as a pipeline: `cube(..).up(h).mirror_y()`.

use super::{Node, NodeKind, Point2, TransformOp, Vec3};

/// `cube(size, center)`
pub fn cube(size: [f64; 3], center: bool) -> Node {
    Node::new(NodeKind::Cube {
        size: Vec3::new(size[0], size[1], size[2]),
        center,
    })
}

/// Straight cylinder of radius `r`
pub fn cylinder(r: f64, h: f64, center: bool) -> Node {
    frustum(r, r, h, center)
}

/// Truncated cone with bottom radius `r1` and top radius `r2`
pub fn frustum(r1: f64, r2: f64, h: f64, center: bool) -> Node {
    Node::new(NodeKind::Cylinder {
        h,
        r1,
        r2,
        center,
        fn_: None,
    })
}

/// 2D polygon from `(x, y)` pairs
pub fn polygon<I>(points: I) -> Node
where
    I: IntoIterator<Item = (f64, f64)>,
{
    Node::new(NodeKind::Polygon(
        points.into_iter().map(|(x, y)| Point2::new(x, y)).collect(),
    ))
}

pub fn linear_extrude(height: f64, child: Node) -> Node {
    Node::new(NodeKind::LinearExtrude {
        height,
        children: vec![child],
    })
}

pub fn union(children: Vec<Node>) -> Node {
    Node::new(NodeKind::Union(children))
}

/// First child minus every following child
pub fn difference(children: Vec<Node>) -> Node {
    Node::new(NodeKind::Difference(children))
}

pub fn intersection(children: Vec<Node>) -> Node {
    Node::new(NodeKind::Intersection(children))
}

pub fn hull(children: Vec<Node>) -> Node {
    Node::new(NodeKind::Hull(children))
}

impl Node {
    fn transformed(self, op: TransformOp) -> Node {
        Node::new(NodeKind::Transform {
            op,
            children: vec![self],
        })
    }

    pub fn translate(self, v: [f64; 3]) -> Node {
        self.transformed(TransformOp::Translate(Vec3::new(v[0], v[1], v[2])))
    }

    /// Rotation in degrees about X, then Y, then Z
    pub fn rotate(self, angles: [f64; 3]) -> Node {
        self.transformed(TransformOp::Rotate(Vec3::new(angles[0], angles[1], angles[2])))
    }

    pub fn scale(self, s: [f64; 3]) -> Node {
        self.transformed(TransformOp::Scale(Vec3::new(s[0], s[1], s[2])))
    }

    pub fn mirror(self, normal: [f64; 3]) -> Node {
        self.transformed(TransformOp::Mirror(Vec3::new(normal[0], normal[1], normal[2])))
    }

    pub fn mirror_y(self) -> Node {
        self.mirror([0.0, 1.0, 0.0])
    }

    pub fn mirror_z(self) -> Node {
        self.mirror([0.0, 0.0, 1.0])
    }

    pub fn up(self, z: f64) -> Node {
        self.translate([0.0, 0.0, z])
    }

    pub fn down(self, z: f64) -> Node {
        self.translate([0.0, 0.0, -z])
    }

    pub fn right(self, x: f64) -> Node {
        self.translate([x, 0.0, 0.0])
    }

    pub fn left(self, x: f64) -> Node {
        self.translate([-x, 0.0, 0.0])
    }

    /// Set `$fn` on a cylinder; other nodes are returned unchanged
    pub fn segments(mut self, n: u32) -> Node {
        if let NodeKind::Cylinder { fn_, .. } = &mut self.kind {
            *fn_ = Some(n);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chained_translations_nest() {
        let node = cube([1.0, 1.0, 1.0], true).up(2.0).left(3.0);
        match &node.kind {
            NodeKind::Transform {
                op: TransformOp::Translate(v),
                children,
            } => {
                assert_eq!(*v, Vec3::new(-3.0, 0.0, 0.0));
                assert_eq!(children.len(), 1);
            }
            other => panic!("expected translate, got {:?}", other),
        }
    }

    #[test]
    fn test_segments_only_touches_cylinders() {
        let cyl = cylinder(1.5, 30.0, true).segments(20);
        assert!(matches!(cyl.kind, NodeKind::Cylinder { fn_: Some(20), .. }));

        let boxed = cube([1.0, 1.0, 1.0], false).segments(20);
        assert_eq!(boxed, cube([1.0, 1.0, 1.0], false));
    }
}
