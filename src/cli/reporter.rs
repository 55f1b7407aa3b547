// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Footmount Contributors

//! CLI output reporter with colored formatting

use crate::batch::{BuildReport, MeshStatus, OutputRecord};
use colored::*;
use std::time::Duration;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// One line per written output
    pub fn report_output(record: &OutputRecord) {
        let mesh = match &record.mesh {
            MeshStatus::Skipped => "scad only".bright_black(),
            MeshStatus::Exported {
                duration_secs,
                triangles,
                ..
            } => {
                let tris = triangles
                    .map(|t| format!(", {} triangles", t))
                    .unwrap_or_default();
                format!(
                    "stl in {}{}",
                    Self::format_duration(Duration::from_secs_f64(*duration_secs)),
                    tris
                )
                .green()
            }
            MeshStatus::Failed { .. } => "stl failed".red(),
        };
        println!(
            "  {} {:<12} {} {}",
            "•".bright_blue(),
            record.stem.cyan(),
            record.scad.display().to_string().bright_black(),
            mesh
        );
    }

    /// Summary block after a build
    pub fn report_build(report: &BuildReport, elapsed: Duration) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!("{}", "Build Summary".bold());
        println!("{}", "━".repeat(80).bright_black());

        for record in &report.outputs {
            Self::report_output(record);
        }

        println!();
        println!(
            "  {} {}",
            "Outputs:".bright_black(),
            report.outputs.len().to_string().cyan()
        );
        println!(
            "  {} {}",
            "Meshes:".bright_black(),
            report.exported().to_string().cyan()
        );
        let failed = report.failed();
        println!(
            "  {} {}",
            "Failed:".bright_black(),
            if failed > 0 {
                failed.to_string().red()
            } else {
                failed.to_string().green()
            }
        );
        println!(
            "  {} {}",
            "Time:".bright_black(),
            Self::format_duration(elapsed).yellow()
        );

        for record in &report.outputs {
            if let MeshStatus::Failed { error } = &record.mesh {
                println!("    {} {}", "❌".red(), record.stem);
                println!("       {}", error.bright_black());
            }
        }
        println!("{}", "━".repeat(80).bright_black());
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report warning
    pub fn report_warning(message: &str) {
        println!("\n{} {}", "⚠️  Warning:".yellow().bold(), message);
    }

    /// Report info
    pub fn report_info(message: &str) {
        println!("{} {}", "ℹ️".bright_blue(), message);
    }

    /// Format duration for display
    fn format_duration(duration: Duration) -> String {
        let micros = duration.as_micros();

        if micros < 1_000 {
            format!("{}µs", micros)
        } else if micros < 1_000_000 {
            format!("{:.2}ms", micros as f64 / 1_000.0)
        } else {
            format!("{:.2}s", micros as f64 / 1_000_000.0)
        }
    }

    /// Print success message
    pub fn success(message: &str) {
        println!("{} {}", "✅".green(), message.green());
    }
}
