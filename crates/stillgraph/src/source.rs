//! Decoding graphs from JSON or TOML text.
//!
//! Both formats share the same shape: optional `title` and `subtitle`
//! strings, a `nodes` array of `{ id, label, x, y }` tables and a `links`
//! (or `edges`) array of `{ source, target, relation }` tables.

use std::{ops::Range, path::Path};

use log::{debug, trace};

use crate::{error::StillgraphError, graph::Graph};

/// Supported text formats for graph input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Toml,
}

impl SourceFormat {
    /// Picks a format from a file extension. Anything other than `.toml`
    /// is treated as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

/// Decodes `source` into a [`Graph`].
///
/// # Errors
///
/// Returns [`StillgraphError::Parse`] carrying the decoder message, the byte
/// span of the failure when known, and the source text.
pub fn parse(source: &str, format: SourceFormat) -> Result<Graph, StillgraphError> {
    debug!(format:?; "Decoding graph source");

    let graph = match format {
        SourceFormat::Json => serde_json::from_str::<Graph>(source).map_err(|err| {
            let span = json_span(source, err.line(), err.column());
            StillgraphError::new_parse_error(err.to_string(), span, source)
        })?,
        SourceFormat::Toml => toml::from_str::<Graph>(source).map_err(|err| {
            StillgraphError::new_parse_error(err.message(), err.span(), source)
        })?,
    };

    trace!(nodes = graph.nodes().len(), edges = graph.edges().len(); "Graph decoded");
    Ok(graph)
}

/// Converts serde_json's one-based line and column into a byte span of at
/// most one character. Offsets inside a multi-byte character move back to
/// its first byte.
fn json_span(source: &str, line: usize, column: usize) -> Option<Range<usize>> {
    if line == 0 {
        return None;
    }

    let line_start = source
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum::<usize>();
    if line_start > source.len() {
        return None;
    }

    let mut offset = (line_start + column.saturating_sub(1)).min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    let end = source[offset..]
        .chars()
        .next()
        .map_or(offset, |c| offset + c.len_utf8());
    Some(offset..end)
}
