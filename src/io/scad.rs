// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Footmount Contributors

//! OpenSCAD serializer
//!
//! Output is a pure function of the tree: no timestamps, no hash-ordered
//! maps, and numbers always printed the same way.

use crate::ast::{Node, NodeKind, TransformOp, Vec3};
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::debug;

const INDENT: &str = "\t";

/// Render a tree as OpenSCAD source
pub fn to_scad(node: &Node) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "// Generated by footmount {}\n\n",
        env!("CARGO_PKG_VERSION")
    ));
    write_node(&mut out, node, 0);
    out
}

/// Serialize `node` to `path`, creating parent directories. Returns the
/// source that was written.
pub fn write_scad(node: &Node, path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {:?}", parent))?;
    }

    let source = to_scad(node);
    fs::write(path, &source).with_context(|| format!("Failed to write SCAD file: {:?}", path))?;
    debug!(path = %path.display(), bytes = source.len(), "Wrote SCAD file");
    Ok(source)
}

/// Format a number the way OpenSCAD reads it back: shortest round-trip
/// representation, integers without a fraction, no negative zero
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

fn format_vec(v: &Vec3) -> String {
    format!(
        "[{}, {}, {}]",
        format_number(v.x),
        format_number(v.y),
        format_number(v.z)
    )
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    if let Some(id) = &node.id {
        indent(out, depth);
        let _ = writeln!(out, "// {}", id);
    }

    match &node.kind {
        NodeKind::Cube { size, center } => {
            indent(out, depth);
            let _ = writeln!(out, "cube(size = {}, center = {});", format_vec(size), center);
        }
        NodeKind::Cylinder {
            h,
            r1,
            r2,
            center,
            fn_,
        } => {
            indent(out, depth);
            let radius = if r1 == r2 {
                format!("r = {}", format_number(*r1))
            } else {
                format!("r1 = {}, r2 = {}", format_number(*r1), format_number(*r2))
            };
            let segments = fn_.map(|n| format!(", $fn = {}", n)).unwrap_or_default();
            let _ = writeln!(
                out,
                "cylinder(h = {}, {}, center = {}{});",
                format_number(*h),
                radius,
                center,
                segments
            );
        }
        NodeKind::Polygon(points) => {
            indent(out, depth);
            let pts: Vec<String> = points
                .iter()
                .map(|p| format!("[{}, {}]", format_number(p.x), format_number(p.y)))
                .collect();
            let _ = writeln!(out, "polygon(points = [{}]);", pts.join(", "));
        }
        NodeKind::LinearExtrude { height, children } => {
            let header = format!("linear_extrude(height = {})", format_number(*height));
            write_block(out, &header, children, depth);
        }
        NodeKind::Union(children)
        | NodeKind::Difference(children)
        | NodeKind::Intersection(children)
        | NodeKind::Hull(children) => {
            let header = format!("{}()", node.kind.keyword());
            write_block(out, &header, children, depth);
        }
        NodeKind::Transform { op, children } => {
            let header = match op {
                TransformOp::Translate(v) => format!("translate(v = {})", format_vec(v)),
                TransformOp::Rotate(a) => format!("rotate(a = {})", format_vec(a)),
                TransformOp::Scale(v) => format!("scale(v = {})", format_vec(v)),
                TransformOp::Mirror(v) => format!("mirror(v = {})", format_vec(v)),
            };
            write_block(out, &header, children, depth);
        }
        NodeKind::Empty => {}
    }
}

fn write_block(out: &mut String, header: &str, children: &[Node], depth: usize) {
    indent(out, depth);
    let _ = writeln!(out, "{} {{", header);
    for child in children {
        write_node(out, child, depth + 1);
    }
    indent(out, depth);
    out.push_str("}\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::builder::{
        cube, cylinder, difference, frustum, intersection, linear_extrude, polygon,
    };

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(84.0), "84");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(13.75), "13.75");
        assert_eq!(format_number(-0.1), "-0.1");
        assert_eq!(format_number(0.01), "0.01");
    }

    #[test]
    fn test_difference_block() {
        let tree = difference(vec![
            cube([10.0, 10.0, 2.0], true),
            cylinder(1.5, 30.0, true).segments(20).up(1.75),
        ]);
        let source = to_scad(&tree);
        let body: Vec<&str> = source.lines().skip(2).collect();

        assert_eq!(
            body,
            vec![
                "difference() {",
                "\tcube(size = [10, 10, 2], center = true);",
                "\ttranslate(v = [0, 0, 1.75]) {",
                "\t\tcylinder(h = 30, r = 1.5, center = true, $fn = 20);",
                "\t}",
                "}",
            ]
        );
    }

    #[test]
    fn test_frustum_and_polygon() {
        let cone = to_scad(&frustum(7.8125, 6.25, 3.5, true));
        assert!(cone.contains("cylinder(h = 3.5, r1 = 7.8125, r2 = 6.25, center = true);"));

        let prism = to_scad(
            &linear_extrude(0.01, polygon([(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)])).labeled("flat"),
        );
        assert!(prism.contains("// flat\nlinear_extrude(height = 0.01) {\n"));
        assert!(prism.contains("\tpolygon(points = [[0, 0], [1, 0], [0, 1]]);"));
    }

    #[test]
    fn test_scale_and_intersection_blocks() {
        let tree = intersection(vec![
            cube([4.0, 4.0, 4.0], true),
            cylinder(2.5, 6.0, true).scale([1.0, 0.5, 1.0]),
        ]);
        let source = to_scad(&tree);
        let body: Vec<&str> = source.lines().skip(2).collect();

        assert_eq!(
            body,
            vec![
                "intersection() {",
                "\tcube(size = [4, 4, 4], center = true);",
                "\tscale(v = [1, 0.5, 1]) {",
                "\t\tcylinder(h = 6, r = 2.5, center = true);",
                "\t}",
                "}",
            ]
        );
    }

    #[test]
    fn test_write_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/cube.scad");

        let source = write_scad(&cube([1.0, 1.0, 1.0], false), &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(source, written);
        assert!(written.ends_with("cube(size = [1, 1, 1], center = false);\n"));
    }
}
