// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Footmount Contributors

//! Geometry tree node definitions

use serde::{Deserialize, Serialize};

/// 3D vector type alias
pub type Vec3 = nalgebra::Vector3<f64>;

/// 2D point type alias used by polygon outlines
pub type Point2 = nalgebra::Point2<f64>;

/// A single operation or primitive in a geometry tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub kind: NodeKind,
    /// Optional label, emitted as a comment by the serializer
    pub id: Option<String>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self { kind, id: None }
    }

    /// Attach a label to an existing node
    pub fn labeled(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Number of nodes in this subtree, including `self`
    pub fn node_count(&self) -> usize {
        1 + self
            .kind
            .get_children()
            .iter()
            .map(|child| child.node_count())
            .sum::<usize>()
    }
}

/// Types of geometry nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeKind {
    // Primitives
    Cube {
        size: Vec3,
        center: bool,
    },
    /// Cylinder or frustum; `r1` is the bottom radius, `r2` the top
    Cylinder {
        h: f64,
        r1: f64,
        r2: f64,
        center: bool,
        fn_: Option<u32>,
    },
    /// Closed 2D outline in the XY plane
    Polygon(Vec<Point2>),

    // Extrusion
    LinearExtrude {
        height: f64,
        children: Vec<Node>,
    },

    // Boolean operations
    Union(Vec<Node>),
    Difference(Vec<Node>),
    Intersection(Vec<Node>),
    Hull(Vec<Node>),

    // Transformations
    Transform {
        op: TransformOp,
        children: Vec<Node>,
    },

    Empty,
}

impl NodeKind {
    /// Get child nodes
    pub fn get_children(&self) -> Vec<&Node> {
        match self {
            NodeKind::Union(children)
            | NodeKind::Difference(children)
            | NodeKind::Intersection(children)
            | NodeKind::Hull(children) => children.iter().collect(),
            NodeKind::LinearExtrude { children, .. } => children.iter().collect(),
            NodeKind::Transform { children, .. } => children.iter().collect(),
            _ => Vec::new(),
        }
    }

    /// OpenSCAD module name for this node
    pub fn keyword(&self) -> &'static str {
        match self {
            NodeKind::Cube { .. } => "cube",
            NodeKind::Cylinder { .. } => "cylinder",
            NodeKind::Polygon(_) => "polygon",
            NodeKind::LinearExtrude { .. } => "linear_extrude",
            NodeKind::Union(_) => "union",
            NodeKind::Difference(_) => "difference",
            NodeKind::Intersection(_) => "intersection",
            NodeKind::Hull(_) => "hull",
            NodeKind::Transform { op, .. } => op.keyword(),
            NodeKind::Empty => "",
        }
    }
}

/// Transformation operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TransformOp {
    Translate(Vec3),
    /// Euler angles in degrees, applied X then Y then Z
    Rotate(Vec3),
    Scale(Vec3),
    /// Reflection across the plane through the origin with this normal
    Mirror(Vec3),
}

impl TransformOp {
    pub fn keyword(&self) -> &'static str {
        match self {
            TransformOp::Translate(_) => "translate",
            TransformOp::Rotate(_) => "rotate",
            TransformOp::Scale(_) => "scale",
            TransformOp::Mirror(_) => "mirror",
        }
    }

    /// Convert transformation to a 4x4 matrix
    pub fn to_matrix(&self) -> nalgebra::Matrix4<f64> {
        use nalgebra::{Matrix3, Matrix4, UnitQuaternion, Vector3};

        match self {
            TransformOp::Translate(v) => Matrix4::new_translation(v),
            TransformOp::Rotate(angles) => {
                let rx = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), angles.x.to_radians());
                let ry = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), angles.y.to_radians());
                let rz = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), angles.z.to_radians());
                (rz * ry * rx).to_homogeneous()
            }
            TransformOp::Scale(s) => Matrix4::new_nonuniform_scaling(s),
            TransformOp::Mirror(normal) => {
                let len_sq = normal.norm_squared();
                if len_sq == 0.0 {
                    return Matrix4::identity();
                }
                let reflect = Matrix3::identity() - normal * normal.transpose() * (2.0 / len_sq);
                reflect.to_homogeneous()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    #[test]
    fn test_mirror_y_flips_only_y() {
        let m = TransformOp::Mirror(Vec3::new(0.0, 1.0, 0.0)).to_matrix();
        let p = m.transform_point(&Point3::new(1.0, 2.0, 3.0));
        assert_relative_eq!(p, Point3::new(1.0, -2.0, 3.0));
    }

    #[test]
    fn test_rotate_order_matches_openscad() {
        // rotate([90, 0, 90]) sends +X to +Y and +Y to +Z
        let m = TransformOp::Rotate(Vec3::new(90.0, 0.0, 90.0)).to_matrix();
        let x = m.transform_vector(&Vec3::x());
        let y = m.transform_vector(&Vec3::y());
        assert_relative_eq!(x, Vec3::y(), epsilon = 1e-12);
        assert_relative_eq!(y, Vec3::z(), epsilon = 1e-12);
    }

    #[test]
    fn test_node_count() {
        let leaf = Node::new(NodeKind::Cube {
            size: Vec3::new(1.0, 1.0, 1.0),
            center: false,
        });
        let tree = Node::new(NodeKind::Union(vec![leaf.clone(), leaf]));
        assert_eq!(tree.node_count(), 3);
    }
}
