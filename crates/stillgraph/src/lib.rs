//! Stillgraph - static SVG rendering of small node-link graphs.
//!
//! A caller supplies nodes with fixed canvas positions, edges that reference
//! nodes by id, and a title and subtitle. Stillgraph validates the graph,
//! resolves every edge endpoint against the nodes, and draws a single
//! immutable SVG surface: a background, the captions, a circle and label per
//! node and a straight line per edge. No layout is computed and nothing is
//! animated.

pub mod config;
pub mod error;
pub mod export;
pub mod graph;
pub mod host;
pub mod scene;
pub mod source;

pub use stillgraph_core::{color, draw, geometry};

pub use error::{Endpoint, StillgraphError};

use log::{debug, info};
use svg::Document;

use config::AppConfig;
use export::svg::SvgExporter;
use geometry::Size;
use graph::Graph;
use host::HostDocument;
use scene::Scene;

/// Renders graphs to SVG using a fixed configuration.
///
/// # Examples
///
/// ```
/// use stillgraph::{
///     GraphRenderer,
///     geometry::Size,
///     graph::{Edge, Graph, Node},
/// };
///
/// let graph = Graph::new()
///     .with_title("Team")
///     .with_node(Node::new("a", "Alice", 100.0, 100.0))
///     .with_node(Node::new("b", "Bob", 300.0, 100.0))
///     .with_edge(Edge::new("a", "b", "mentors"));
///
/// let svg = GraphRenderer::default()
///     .render_svg(&graph, Size::new(800.0, 600.0))
///     .expect("Failed to render");
///
/// assert_eq!(svg.matches("<circle").count(), 2);
/// assert_eq!(svg.matches("<line").count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct GraphRenderer {
    config: AppConfig,
}

impl GraphRenderer {
    /// Create a new renderer with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Validate `graph` and resolve its edges into positioned marks.
    ///
    /// # Errors
    ///
    /// Returns `StillgraphError` for invalid dimensions, duplicate node ids,
    /// non-finite positions or unresolved edge endpoints.
    pub fn build_scene(&self, graph: &Graph, size: Size) -> Result<Scene, StillgraphError> {
        info!(
            nodes = graph.nodes().len(),
            edges = graph.edges().len();
            "Building scene"
        );
        Scene::build(graph, size, self.config.style().spacing())
    }

    /// Render `graph` to an SVG document.
    ///
    /// # Errors
    ///
    /// Returns `StillgraphError` if the style configuration is invalid or the
    /// scene cannot be built.
    pub fn render_document(&self, graph: &Graph, size: Size) -> Result<Document, StillgraphError> {
        let theme = self.config.style().theme()?;
        let scene = self.build_scene(graph, size)?;
        let document = SvgExporter::new(&theme).render_document(&scene);
        debug!("SVG document built");
        Ok(document)
    }

    /// Render `graph` to an SVG string.
    ///
    /// # Errors
    ///
    /// Same as [`GraphRenderer::render_document`], plus export failures.
    pub fn render_svg(&self, graph: &Graph, size: Size) -> Result<String, StillgraphError> {
        let theme = self.config.style().theme()?;
        let scene = self.build_scene(graph, size)?;
        let svg = SvgExporter::new(&theme).render_string(&scene)?;
        info!("SVG rendered successfully");
        Ok(svg)
    }

    /// Render `graph` and attach the surface to the mount point addressed by
    /// `selector` in `host`, replacing any surface already there.
    ///
    /// Nothing is attached when an error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`StillgraphError::InvalidSelector`] or
    /// [`StillgraphError::MountNotFound`] if the mount point cannot be found,
    /// and the errors of [`GraphRenderer::render_document`] otherwise.
    pub fn render(
        &self,
        host: &mut HostDocument,
        selector: &str,
        graph: &Graph,
        size: Size,
    ) -> Result<(), StillgraphError> {
        host.ensure_mount(selector)?;
        let document = self.render_document(graph, size)?;
        host.attach(selector, document)?;
        info!(selector; "Graph rendered into host");
        Ok(())
    }
}
