// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Footmount Contributors

//! Tree evaluator - world-space vertices and bounds without a CSG kernel

use super::{Node, NodeKind};
use crate::geometry::{BoundingBox, Primitive};
use nalgebra::{Matrix4, Point3, Vector3};

/// Which leaves contribute vertices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Collect {
    /// Every primitive, subtracted volumes included
    All,
    /// Only material that can end up in the solid: first child of a difference
    Support,
}

/// Walks a geometry tree accumulating transforms
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    /// Vertex cloud of every primitive in the tree, in world coordinates
    pub fn vertices(&self, node: &Node) -> Vec<Point3<f64>> {
        let mut out = Vec::new();
        self.collect(&node.kind, &Matrix4::identity(), Collect::All, &mut out);
        out
    }

    /// Vertices of the material a hull over this node would span
    pub fn support_points(&self, node: &Node) -> Vec<Point3<f64>> {
        let mut out = Vec::new();
        self.collect(&node.kind, &Matrix4::identity(), Collect::Support, &mut out);
        out
    }

    /// Conservative bounding box: differences keep the first child's bounds
    pub fn bounding_box(&self, node: &Node) -> BoundingBox {
        self.bounds(&node.kind, &Matrix4::identity())
    }

    fn collect(
        &self,
        kind: &NodeKind,
        transform: &Matrix4<f64>,
        mode: Collect,
        out: &mut Vec<Point3<f64>>,
    ) {
        if let Some(primitive) = as_primitive(kind) {
            out.extend(
                primitive
                    .vertices()
                    .iter()
                    .map(|v| transform.transform_point(v)),
            );
            return;
        }

        match kind {
            NodeKind::Difference(children) if mode == Collect::Support => {
                if let Some(first) = children.first() {
                    self.collect(&first.kind, transform, mode, out);
                }
            }
            NodeKind::LinearExtrude { height, children } => {
                let lifted = transform * Matrix4::new_translation(&Vector3::new(0.0, 0.0, *height));
                for child in children {
                    self.collect(&child.kind, transform, mode, out);
                    self.collect(&child.kind, &lifted, mode, out);
                }
            }
            NodeKind::Transform { op, children } => {
                let next = transform * op.to_matrix();
                for child in children {
                    self.collect(&child.kind, &next, mode, out);
                }
            }
            _ => {
                for child in kind.get_children() {
                    self.collect(&child.kind, transform, mode, out);
                }
            }
        }
    }

    fn bounds(&self, kind: &NodeKind, transform: &Matrix4<f64>) -> BoundingBox {
        if let Some(primitive) = as_primitive(kind) {
            let points: Vec<_> = primitive
                .vertices()
                .iter()
                .map(|v| transform.transform_point(v))
                .collect();
            return BoundingBox::from_points(&points);
        }

        match kind {
            NodeKind::Union(children) | NodeKind::Hull(children) => {
                self.merged_bounds(children, transform)
            }
            NodeKind::Difference(children) => children
                .first()
                .map(|first| self.bounds(&first.kind, transform))
                .unwrap_or_default(),
            NodeKind::Intersection(children) => {
                let mut iter = children.iter().map(|c| self.bounds(&c.kind, transform));
                match iter.next() {
                    Some(first) => iter.fold(first, |acc, b| acc.intersect(&b)),
                    None => BoundingBox::empty(),
                }
            }
            NodeKind::LinearExtrude { height, children } => {
                let lifted = transform * Matrix4::new_translation(&Vector3::new(0.0, 0.0, *height));
                self.merged_bounds(children, transform)
                    .merge(&self.merged_bounds(children, &lifted))
            }
            NodeKind::Transform { op, children } => {
                let next = transform * op.to_matrix();
                self.merged_bounds(children, &next)
            }
            _ => BoundingBox::empty(),
        }
    }

    fn merged_bounds(&self, children: &[Node], transform: &Matrix4<f64>) -> BoundingBox {
        children
            .iter()
            .map(|c| self.bounds(&c.kind, transform))
            .fold(BoundingBox::empty(), |acc, b| acc.merge(&b))
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

/// Leaf nodes map onto a sampled primitive
pub(crate) fn as_primitive(kind: &NodeKind) -> Option<Primitive> {
    match kind {
        NodeKind::Cube { size, center } => Some(Primitive::Cube {
            size: *size,
            center: *center,
        }),
        NodeKind::Cylinder {
            h,
            r1,
            r2,
            center,
            fn_,
        } => Some(Primitive::Frustum {
            h: *h,
            r1: *r1,
            r2: *r2,
            center: *center,
            fn_: *fn_,
        }),
        NodeKind::Polygon(points) => Some(Primitive::Outline(points.clone())),
        _ => None,
    }
}
