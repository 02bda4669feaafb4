//! Conversion of resolved scenes into output documents.

pub mod svg;

use std::{io, string::FromUtf8Error};

use thiserror::Error;

/// Failures while serializing an already-resolved scene.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("SVG output is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}
