//! Scene construction: validation and endpoint resolution.
//!
//! A [`Scene`] is the fully resolved, positioned content of one render call.
//! Building it is the only stage that can reject a graph; exporting a scene
//! to SVG never fails on graph content.
//!
//! Resolution uses an id → node index built once per call, so the cost is
//! linear in the number of nodes plus edges.

use indexmap::{IndexMap, map::Entry};
use log::{debug, trace, warn};

use stillgraph_core::geometry::{Bounds, Point, Size};

use crate::{
    error::{Endpoint, StillgraphError},
    graph::{Graph, Node},
};

/// Spacing between a mark and its attached text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing {
    label_offset: f32,
    subtitle_gap: f32,
}

impl Spacing {
    /// # Arguments
    ///
    /// * `label_offset` - Distance from a node center down to its label anchor.
    /// * `subtitle_gap` - Distance from the title anchor down to the subtitle anchor.
    pub fn new(label_offset: f32, subtitle_gap: f32) -> Self {
        Self {
            label_offset,
            subtitle_gap,
        }
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Self::new(25.0, 30.0)
    }
}

/// A positioned caption string.
#[derive(Debug, Clone, PartialEq)]
pub struct Caption {
    text: String,
    position: Point,
}

impl Caption {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn position(&self) -> Point {
        self.position
    }
}

/// A node circle together with its label.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeMark {
    id: String,
    label: String,
    center: Point,
    label_position: Point,
}

impl NodeMark {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn label_position(&self) -> Point {
        self.label_position
    }
}

/// A straight line between two resolved node centers.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeMark {
    source_id: String,
    target_id: String,
    relation: String,
    start: Point,
    end: Point,
}

impl EdgeMark {
    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    pub fn relation(&self) -> &str {
        &self.relation
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }
}

/// Everything one render call draws, in canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    size: Size,
    title: Caption,
    subtitle: Caption,
    nodes: Vec<NodeMark>,
    edges: Vec<EdgeMark>,
}

impl Scene {
    /// Validates `graph` against a canvas of `size` and resolves every edge.
    ///
    /// # Errors
    ///
    /// - [`StillgraphError::InvalidDimensions`] if `size` is not drawable.
    /// - [`StillgraphError::InvalidPosition`] if a node coordinate is not finite.
    /// - [`StillgraphError::DuplicateNode`] if two nodes share an id.
    /// - [`StillgraphError::UnresolvedEndpoint`] for the first edge whose
    ///   source or target id matches no node.
    ///
    /// # Examples
    ///
    /// ```
    /// use stillgraph::{
    ///     geometry::Size,
    ///     graph::{Edge, Graph, Node},
    ///     scene::{Scene, Spacing},
    /// };
    ///
    /// let graph = Graph::new()
    ///     .with_node(Node::new("a", "A", 100.0, 100.0))
    ///     .with_node(Node::new("b", "B", 200.0, 150.0))
    ///     .with_edge(Edge::new("a", "b", "knows"));
    ///
    /// let scene = Scene::build(&graph, Size::new(800.0, 600.0), Spacing::default()).unwrap();
    /// assert_eq!(scene.edges()[0].end().x(), 200.0);
    /// ```
    pub fn build(graph: &Graph, size: Size, spacing: Spacing) -> Result<Self, StillgraphError> {
        if !size.is_drawable() {
            return Err(StillgraphError::InvalidDimensions {
                width: size.width(),
                height: size.height(),
            });
        }

        let index = index_nodes(graph.nodes())?;
        let canvas = Bounds::new_from_top_left(Point::default(), size);

        let nodes: Vec<NodeMark> = index
            .values()
            .map(|node| {
                let center = node.position();
                if !canvas.contains(center) {
                    warn!(
                        node_id = node.id(),
                        x = center.x(),
                        y = center.y();
                        "Node lies outside the canvas"
                    );
                }
                NodeMark {
                    id: node.id().to_string(),
                    label: node.display_label().to_string(),
                    center,
                    label_position: center.offset_y(spacing.label_offset),
                }
            })
            .collect();

        let edges = graph
            .edges()
            .iter()
            .enumerate()
            .map(|(idx, edge)| {
                let start = resolve(&index, idx, Endpoint::Source, edge.source_id())?;
                let end = resolve(&index, idx, Endpoint::Target, edge.target_id())?;
                if edge.is_self_loop() {
                    debug!(edge = idx, node_id = edge.source_id(); "Self-loop drawn as a zero-length line");
                }
                Ok(EdgeMark {
                    source_id: edge.source_id().to_string(),
                    target_id: edge.target_id().to_string(),
                    relation: edge.relation().to_string(),
                    start,
                    end,
                })
            })
            .collect::<Result<Vec<_>, StillgraphError>>()?;

        let title_position = size.center();
        let scene = Self {
            size,
            title: Caption {
                text: graph.title().to_string(),
                position: title_position,
            },
            subtitle: Caption {
                text: graph.subtitle().to_string(),
                position: title_position.offset_y(spacing.subtitle_gap),
            },
            nodes,
            edges,
        };

        debug!(
            nodes_count = scene.nodes.len(),
            edges_count = scene.edges.len();
            "Scene built"
        );
        trace!(scene:?; "Resolved scene");

        Ok(scene)
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn title(&self) -> &Caption {
        &self.title
    }

    pub fn subtitle(&self) -> &Caption {
        &self.subtitle
    }

    pub fn nodes(&self) -> &[NodeMark] {
        &self.nodes
    }

    pub fn edges(&self) -> &[EdgeMark] {
        &self.edges
    }
}

/// Builds the id → node index, rejecting duplicates and non-finite positions.
fn index_nodes(nodes: &[Node]) -> Result<IndexMap<&str, &Node>, StillgraphError> {
    let mut index = IndexMap::with_capacity(nodes.len());

    for node in nodes {
        if !node.position().is_finite() {
            return Err(StillgraphError::InvalidPosition {
                id: node.id().to_string(),
            });
        }

        match index.entry(node.id()) {
            Entry::Occupied(_) => {
                return Err(StillgraphError::DuplicateNode {
                    id: node.id().to_string(),
                });
            }
            Entry::Vacant(slot) => {
                slot.insert(node);
            }
        }
    }

    Ok(index)
}

fn resolve(
    index: &IndexMap<&str, &Node>,
    edge: usize,
    endpoint: Endpoint,
    id: &str,
) -> Result<Point, StillgraphError> {
    index
        .get(id)
        .map(|node| node.position())
        .ok_or_else(|| StillgraphError::UnresolvedEndpoint {
            edge,
            endpoint,
            id: id.to_string(),
        })
}
