//! Error adapter for converting StillgraphError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI. Decode failures
//! carry their source text and point at the offending span; every other
//! variant gets a diagnostic code and, where one exists, a help line.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use stillgraph::StillgraphError;

/// Adapter that renders a [`StillgraphError`] through miette.
pub struct ErrorAdapter<'a>(pub &'a StillgraphError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            StillgraphError::Io(_) => "stillgraph::io",
            StillgraphError::Parse { .. } => "stillgraph::parse",
            StillgraphError::UnresolvedEndpoint { .. } => "stillgraph::unresolved_endpoint",
            StillgraphError::DuplicateNode { .. } => "stillgraph::duplicate_node",
            StillgraphError::InvalidPosition { .. } => "stillgraph::invalid_position",
            StillgraphError::InvalidDimensions { .. } => "stillgraph::invalid_dimensions",
            StillgraphError::InvalidSelector(_) => "stillgraph::invalid_selector",
            StillgraphError::MountNotFound(_) => "stillgraph::mount_not_found",
            StillgraphError::Config(_) => "stillgraph::config",
            StillgraphError::Export(_) => "stillgraph::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            StillgraphError::UnresolvedEndpoint { .. } => {
                "every edge `source` and `target` must match the `id` of a node"
            }
            StillgraphError::DuplicateNode { .. } => "node ids must be unique within a graph",
            StillgraphError::InvalidPosition { .. } => "node `x` and `y` must be finite numbers",
            StillgraphError::InvalidDimensions { .. } => {
                "canvas width and height must be positive finite numbers"
            }
            StillgraphError::InvalidSelector(_) => "mount selectors have the form `#<id>`",
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self.0 {
            StillgraphError::Parse { src, .. } => Some(src as &dyn miette::SourceCode),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let StillgraphError::Parse {
            message,
            span: Some(span),
            ..
        } = self.0
        else {
            return None;
        };

        let span = SourceSpan::new(span.start.into(), span.len());
        Some(Box::new(std::iter::once(
            LabeledSpan::new_primary_with_span(Some(message.clone()), span),
        )))
    }
}
