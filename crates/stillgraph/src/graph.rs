//! In-memory graph model handed to a render call.
//!
//! A [`Graph`] is a transient value: it is built (or decoded) by the caller,
//! borrowed for the duration of one render, and never retained by the
//! renderer.

use serde::Deserialize;

use stillgraph_core::geometry::{Point, Size};

/// A labeled point with a caller-supplied canvas position.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Node {
    id: String,
    #[serde(default)]
    label: String,
    x: f32,
    y: f32,
}

impl Node {
    pub fn new(id: impl Into<String>, label: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            x,
            y,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the text drawn under the node: the label, or the id when the
    /// label is empty.
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.id
        } else {
            &self.label
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A directed relation between two node ids.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Edge {
    #[serde(rename = "source")]
    source_id: String,
    #[serde(rename = "target")]
    target_id: String,
    #[serde(default)]
    relation: String,
}

impl Edge {
    pub fn new(
        source_id: impl Into<String>,
        target_id: impl Into<String>,
        relation: impl Into<String>,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            target_id: target_id.into(),
            relation: relation.into(),
        }
    }

    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    pub fn relation(&self) -> &str {
        &self.relation
    }

    /// Returns `true` if both endpoints name the same node.
    pub fn is_self_loop(&self) -> bool {
        self.source_id == self.target_id
    }
}

/// Captions, nodes and edges for a single render call.
///
/// # Examples
///
/// ```
/// use stillgraph::graph::{Edge, Graph, Node};
///
/// let graph = Graph::new()
///     .with_title("Team")
///     .with_node(Node::new("a", "Alice", 100.0, 100.0))
///     .with_node(Node::new("b", "Bob", 300.0, 100.0))
///     .with_edge(Edge::new("a", "b", "mentors"));
///
/// assert_eq!(graph.nodes().len(), 2);
/// assert_eq!(graph.edges()[0].relation(), "mentors");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Graph {
    #[serde(default)]
    title: String,
    #[serde(default)]
    subtitle: String,
    #[serde(default)]
    nodes: Vec<Node>,
    #[serde(default, alias = "links")]
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the fallback sample drawn when no real graph could be produced
    /// for `system_name`.
    ///
    /// Three entities are placed at thirds of the canvas and connected in a
    /// cycle.
    ///
    /// # Examples
    ///
    /// ```
    /// use stillgraph::{geometry::Size, graph::Graph};
    ///
    /// let graph = Graph::placeholder("USAHistory", Size::new(800.0, 600.0));
    /// assert_eq!(graph.title(), "USAHistory - Placeholder Visualization");
    /// assert_eq!(graph.nodes().len(), 3);
    /// assert_eq!(graph.edges().len(), 3);
    /// ```
    pub fn placeholder(system_name: &str, size: Size) -> Self {
        let (width, height) = (size.width(), size.height());

        Self::new()
            .with_title(format!("{system_name} - Placeholder Visualization"))
            .with_subtitle("The actual visualization renderer encountered issues.")
            .with_node(Node::new("entity1", "Entity 1", width / 3.0, height / 3.0))
            .with_node(Node::new(
                "entity2",
                "Entity 2",
                2.0 * width / 3.0,
                height / 3.0,
            ))
            .with_node(Node::new(
                "entity3",
                "Entity 3",
                width / 2.0,
                2.0 * height / 3.0,
            ))
            .with_edge(Edge::new("entity1", "entity2", "related_to"))
            .with_edge(Edge::new("entity2", "entity3", "connected_to"))
            .with_edge(Edge::new("entity3", "entity1", "interacts_with"))
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn with_node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn with_edge(mut self, edge: Edge) -> Self {
        self.edges.push(edge);
        self
    }

    pub fn add_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
