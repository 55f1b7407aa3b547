// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Footmount Contributors

//! Library error type

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FootmountError {
    #[error("unknown slope style `{0}` (expected flat, sloped or back_sloped)")]
    UnknownSlopeStyle(String),

    #[error("unknown part `{0}`")]
    UnknownPart(String),

    #[error("renderer `{program}` exited with {status} while exporting {output}")]
    RendererFailed {
        program: String,
        status: String,
        output: PathBuf,
    },

    #[error("failed to read mesh {path}")]
    MeshRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, FootmountError>;
