//! Example: Rendering a graph built in code
//!
//! This example builds a small graph with fixed node positions, renders it
//! into a host page with a `#visualization` mount point, and prints the page.

use stillgraph::{
    GraphRenderer,
    config::AppConfig,
    geometry::Size,
    graph::{Edge, Graph, Node},
    host::HostDocument,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let size = Size::new(800.0, 600.0);

    let graph = Graph::new()
        .with_title("Research Group")
        .with_subtitle("Who cites whom")
        .with_node(Node::new("ada", "Ada", 200.0, 150.0))
        .with_node(Node::new("grace", "Grace", 600.0, 150.0))
        .with_node(Node::new("edsger", "Edsger", 400.0, 450.0))
        .with_edge(Edge::new("ada", "grace", "cites"))
        .with_edge(Edge::new("grace", "edsger", "reviews"))
        .with_edge(Edge::new("edsger", "ada", "cites"));

    let mut host = HostDocument::new("Research Group").with_mount("visualization")?;
    let renderer = GraphRenderer::new(AppConfig::default());

    renderer.render(&mut host, "#visualization", &graph, size)?;

    println!("{}", host.to_html());
    Ok(())
}
