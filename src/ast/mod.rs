// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Footmount Contributors

//! Geometry tree module
//!
//! Defines the node tree handed to the OpenSCAD serializer, the builder
//! helpers used by the part modules, and a transform-aware evaluator.

pub mod builder;
mod evaluator;
mod node;

pub use evaluator::Evaluator;
pub use node::{Node, NodeKind, Point2, TransformOp, Vec3};
