// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Footmount Contributors

//! Geometry module - bounds, primitive sampling and point classification

mod bbox;
mod classification;
mod primitives;

pub use bbox::BoundingBox;
pub use classification::{Classification, Classifier};
pub use primitives::{fragments, Primitive};
