// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Footmount Contributors

//! Mounting plate drill marker

use crate::ast::builder::cylinder;
use crate::ast::Node;
use crate::config::PartsConfig;

/// A single hole-sized disc used to mark drill positions on the plate
pub fn make_drill_pattern(config: &PartsConfig) -> Node {
    let plate = &config.plate;
    cylinder(plate.hole_diameter / 2.0, plate.thickness, false).labeled("drill marker")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Evaluator;
    use approx::assert_relative_eq;

    #[test]
    fn test_marker_size() {
        let bbox = Evaluator::new().bounding_box(&make_drill_pattern(&PartsConfig::default()));
        assert_relative_eq!(bbox.max.x, 3.0, epsilon = 1e-9);
        assert_relative_eq!(bbox.min.z, 0.0);
        assert_relative_eq!(bbox.max.z, 1.0);
    }
}
