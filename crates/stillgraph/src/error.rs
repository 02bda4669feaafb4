//! Error types for Stillgraph operations.
//!
//! This module provides the main error type [`StillgraphError`] which wraps
//! the error conditions that can occur while decoding, validating and
//! rendering a graph.

use std::{fmt, io, ops::Range};

use thiserror::Error;

/// Which end of an edge failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Target,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => write!(f, "source"),
            Self::Target => write!(f, "target"),
        }
    }
}

/// The main error type for Stillgraph operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the decoded source and, when the decoder reports
/// one, the byte span of the failure. This can be used for rich error
/// reporting.
#[derive(Debug, Error)]
pub enum StillgraphError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        span: Option<Range<usize>>,
        src: String,
    },

    #[error("Edge #{edge} has an unresolved {endpoint} endpoint `{id}`")]
    UnresolvedEndpoint {
        edge: usize,
        endpoint: Endpoint,
        id: String,
    },

    #[error("Duplicate node id `{id}`")]
    DuplicateNode { id: String },

    #[error("Node `{id}` has a non-finite position")]
    InvalidPosition { id: String },

    #[error("Invalid canvas dimensions {width}x{height}")]
    InvalidDimensions { width: f32, height: f32 },

    #[error("Invalid selector `{0}`, expected `#<id>`")]
    InvalidSelector(String),

    #[error("Mount point `{0}` not found")]
    MountNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for StillgraphError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl StillgraphError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(
        message: impl Into<String>,
        span: Option<Range<usize>>,
        src: impl Into<String>,
    ) -> Self {
        Self::Parse {
            message: message.into(),
            span,
            src: src.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_endpoint_names_id() {
        let err = StillgraphError::UnresolvedEndpoint {
            edge: 2,
            endpoint: Endpoint::Target,
            id: "ghost".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Edge #2 has an unresolved target endpoint `ghost`"
        );
    }

    #[test]
    fn test_new_parse_error() {
        let err = StillgraphError::new_parse_error("expected value", Some(3..4), "{ x }");
        match err {
            StillgraphError::Parse { message, span, src } => {
                assert_eq!(message, "expected value");
                assert_eq!(span, Some(3..4));
                assert_eq!(src, "{ x }");
            }
            other => panic!("Expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn test_export_error_conversion() {
        let io_err = io::Error::other("disk full");
        let err = StillgraphError::from(crate::export::Error::from(io_err));
        assert!(err.to_string().starts_with("Export error:"));
    }
}
