// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Footmount Contributors

//! Geometric properties of the built parts

use approx::assert_relative_eq;
use footmount::ast::Evaluator;
use footmount::geometry::Classifier;
use footmount::io::to_scad;
use footmount::parts::{
    chamfer_leg, cut_corner_outline, make_feet, make_shoe, FeetOptions, ShoeOptions, SlopeStyle,
};
use footmount::PartsConfig;
use nalgebra::Point3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn cut_corner_outline_fits_its_rectangle() {
    for &(width, depth, cutoff) in &[(84.0, 84.0, 10.0), (72.0, 47.0, 6.0), (30.0, 12.0, 5.0)] {
        let outline = cut_corner_outline(width, depth, cutoff);
        assert_eq!(outline.len(), 8);

        let xs: Vec<f64> = outline.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = outline.iter().map(|p| p.y).collect();
        let span = |v: &[f64]| {
            v.iter().cloned().fold(f64::MIN, f64::max) - v.iter().cloned().fold(f64::MAX, f64::min)
        };
        assert_relative_eq!(span(&xs), depth, epsilon = 1e-9);
        assert_relative_eq!(span(&ys), width, epsilon = 1e-9);

        // every chamfer runs between consecutive vertices and removes the
        // same leg along both axes
        let leg = chamfer_leg(cutoff);
        for i in (0..8).step_by(2) {
            let a = outline[i];
            let b = outline[i + 1];
            assert_relative_eq!((a.x - b.x).abs(), leg, epsilon = 1e-9);
            assert_relative_eq!((a.y - b.y).abs(), leg, epsilon = 1e-9);
        }
    }
}

#[test]
fn feet_are_mirror_symmetric() {
    let feet = make_feet(&PartsConfig::default(), &FeetOptions::default());
    let vertices = Evaluator::new().vertices(&feet);
    assert!(!vertices.is_empty());

    for v in &vertices {
        let mirrored = Point3::new(v.x, -v.y, v.z);
        assert!(
            vertices.iter().any(|w| (w - mirrored).norm() < 1e-6),
            "no mirror image for {:?}",
            v
        );
    }
}

#[test]
fn back_sloped_feet_are_mirror_symmetric() {
    let options = FeetOptions {
        slope: SlopeStyle::BackSloped,
        ..FeetOptions::default()
    };
    let feet = make_feet(&PartsConfig::default(), &options);
    let vertices = Evaluator::new().vertices(&feet);

    for v in &vertices {
        let mirrored = Point3::new(v.x, -v.y, v.z);
        assert!(vertices.iter().any(|w| (w - mirrored).norm() < 1e-6));
    }
}

#[test]
fn screwless_feet_contain_screwed_feet() {
    let config = PartsConfig::default();
    let with_screws = make_feet(&config, &FeetOptions::default());
    let without_screws = make_feet(
        &config,
        &FeetOptions {
            screws: false,
            ..FeetOptions::default()
        },
    );

    let screwed = Classifier::new(&with_screws);
    let solid = Classifier::new(&without_screws);

    // inside a front screw shaft
    let in_shaft = Point3::new(29.0, 25.0, 5.0);
    assert!(solid.contains(&in_shaft));
    assert!(!screwed.contains(&in_shaft));

    let bbox = Evaluator::new().bounding_box(&without_screws);
    let mut rng = StdRng::seed_from_u64(7);
    let mut inside = 0;
    for _ in 0..4000 {
        let p = Point3::new(
            rng.gen_range(bbox.min.x..bbox.max.x),
            rng.gen_range(bbox.min.y..bbox.max.y),
            rng.gen_range(bbox.min.z..bbox.max.z),
        );
        if screwed.contains(&p) {
            inside += 1;
            assert!(solid.contains(&p), "{:?} only in the screwed foot", p);
        }
    }
    assert!(inside > 0);
}

#[test]
fn short_feet_lose_depth() {
    let config = PartsConfig::default();
    let evaluator = Evaluator::new();
    let long = evaluator.bounding_box(&make_feet(
        &config,
        &FeetOptions {
            short: false,
            ..FeetOptions::default()
        },
    ));
    let short = evaluator.bounding_box(&make_feet(&config, &FeetOptions::default()));

    assert!(short.size().x < long.size().x);
    assert_relative_eq!(short.size().y, long.size().y, epsilon = 1e-9);
}

#[test]
fn serialization_is_deterministic() {
    let config = PartsConfig::default();
    let feet = make_feet(&config, &FeetOptions::default());
    assert_eq!(to_scad(&feet), to_scad(&feet));

    let shoe = make_shoe(&config, &ShoeOptions::default()).node;
    let rebuilt = make_shoe(&config, &ShoeOptions::default()).node;
    assert_eq!(to_scad(&shoe), to_scad(&rebuilt));
}
