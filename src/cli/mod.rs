// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Footmount Contributors

//! CLI subsystem: renderer process and terminal output

pub mod reporter;
pub mod runner;

pub use reporter::Reporter;
pub use runner::Runner;
