//! CLI logic for the Stillgraph renderer.
//!
//! This module contains the core CLI logic: load the configuration, obtain a
//! graph (from a file or the placeholder sample), render it, and write either
//! a bare SVG or an HTML host page.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, io, path::Path};

use log::{debug, info};

use stillgraph::{
    GraphRenderer, StillgraphError,
    geometry::Size,
    graph::Graph,
    host::HostDocument,
    source::{self, SourceFormat},
};

/// Run the Stillgraph CLI application
///
/// This function reads or builds the graph, renders it, and writes the
/// result to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `StillgraphError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Graph decoding errors
/// - Validation and endpoint resolution errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), StillgraphError> {
    info!(
        input_path:? = args.input,
        output_path = args.output;
        "Processing graph"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let canvas = app_config.canvas();
    let size = Size::new(
        args.width.unwrap_or(canvas.width()),
        args.height.unwrap_or(canvas.height()),
    );
    debug!(width = size.width(), height = size.height(); "Canvas size resolved");

    let graph = load_graph(args, size)?;
    let renderer = GraphRenderer::new(app_config);

    let output = if is_html(Path::new(&args.output)) {
        let title = if graph.title().is_empty() {
            "stillgraph"
        } else {
            graph.title()
        };
        let mut host = HostDocument::new(title).with_mount(&args.mount)?;
        renderer.render(&mut host, &format!("#{}", args.mount), &graph, size)?;
        host.to_html()
    } else {
        renderer.render_svg(&graph, size)?
    };

    fs::write(&args.output, output)?;

    info!(output_file = args.output; "Graph exported successfully");

    Ok(())
}

fn load_graph(args: &Args, size: Size) -> Result<Graph, StillgraphError> {
    if let Some(system) = &args.placeholder {
        info!(system; "Using placeholder graph");
        return Ok(Graph::placeholder(system, size));
    }

    let Some(input) = &args.input else {
        return Err(StillgraphError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            "no input file given and no placeholder requested",
        )));
    };

    let path = Path::new(input);
    let text = fs::read_to_string(path)?;
    source::parse(&text, SourceFormat::from_path(path))
}

fn is_html(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_html() {
        assert!(is_html(Path::new("out.html")));
        assert!(is_html(Path::new("OUT.HTM")));
        assert!(!is_html(Path::new("out.svg")));
        assert!(!is_html(Path::new("out")));
    }
}
