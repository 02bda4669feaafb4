//! SVG export for resolved scenes.
//!
//! Every mark becomes a drawable from `stillgraph_core::draw`; the drawables
//! are collected into one [`LayeredOutput`] and emitted as `data-layer`
//! groups under the document root. Elements carry CSS classes so a host page
//! can restyle them:
//!
//! | Mark | Element | Class |
//! |------|---------|-------|
//! | background | `<rect>` | `background` |
//! | title | `<text>` | `title` |
//! | subtitle | `<text>` | `subtitle` |
//! | node | `<circle>` | `node` |
//! | node label | `<text>` | `node-label` |
//! | edge | `<line>` | `link` |
//! | relation (opt-in) | `<text>` | `relation-label` |

use std::io::Write;

use log::{debug, info};
use svg::Document;

use stillgraph_core::{
    draw::{Circle, LayeredOutput, Line, PositionedDrawable, Rectangle, RenderLayer, Text},
    geometry::Point,
};

use crate::{config::Theme, export, scene::Scene};

pub const BACKGROUND_CLASS: &str = "background";
pub const TITLE_CLASS: &str = "title";
pub const SUBTITLE_CLASS: &str = "subtitle";
pub const NODE_CLASS: &str = "node";
pub const NODE_LABEL_CLASS: &str = "node-label";
pub const LINK_CLASS: &str = "link";
pub const RELATION_LABEL_CLASS: &str = "relation-label";

/// Renders scenes with a fixed [`Theme`].
#[derive(Debug)]
pub struct SvgExporter<'a> {
    theme: &'a Theme,
}

impl<'a> SvgExporter<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    /// Builds the SVG document for `scene`.
    pub fn render_document(&self, scene: &Scene) -> Document {
        let size = scene.size();
        let mut output = LayeredOutput::new();

        output.merge(
            PositionedDrawable::new(
                Rectangle::new(self.theme.background(), size).with_class(BACKGROUND_CLASS),
            )
            .render_to_layers(),
        );

        output.merge(self.render_captions(scene));

        for node in scene.nodes() {
            output.merge(
                PositionedDrawable::new(Circle::new(self.theme.node()).with_class(NODE_CLASS))
                    .with_position(node.center())
                    .render_to_layers(),
            );
            output.merge(
                PositionedDrawable::new(
                    Text::new(self.theme.label(), node.label()).with_class(NODE_LABEL_CLASS),
                )
                .with_position(node.label_position())
                .render_to_layers(),
            );
        }

        for edge in scene.edges() {
            output.merge(
                PositionedDrawable::new(
                    Line::new(self.theme.edge(), edge.end()).with_class(LINK_CLASS),
                )
                .with_position(edge.start())
                .render_to_layers(),
            );

            if self.theme.relation_labels() && !edge.relation().is_empty() {
                let label = self.theme.label();
                output.merge(
                    PositionedDrawable::new(
                        Text::new(label, edge.relation()).with_class(RELATION_LABEL_CLASS),
                    )
                    .with_position(relation_anchor(edge.start(), edge.end(), label.font_size()))
                    .render_to_layers(),
                );
            }
        }

        debug!(elements_count = output.len(); "Scene converted to drawables");

        output.render().into_iter().fold(
            Document::new()
                .set("width", size.width())
                .set("height", size.height())
                .set("viewBox", (0, 0, size.width(), size.height())),
            |doc, group| doc.add(group),
        )
    }

    /// Renders `scene` and writes the document to `writer`.
    pub fn write<W: Write>(&self, scene: &Scene, writer: W) -> Result<(), export::Error> {
        let doc = self.render_document(scene);
        svg::write(writer, &doc)?;
        info!("SVG document written");
        Ok(())
    }

    /// Renders `scene` to an in-memory SVG string.
    pub fn render_string(&self, scene: &Scene) -> Result<String, export::Error> {
        let mut buffer = Vec::new();
        self.write(scene, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    fn render_captions(&self, scene: &Scene) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let captions = [
            (scene.title(), self.theme.title(), TITLE_CLASS),
            (scene.subtitle(), self.theme.subtitle(), SUBTITLE_CLASS),
        ];

        for (caption, definition, class) in captions {
            let text = Text::new(definition, caption.text())
                .with_layer(RenderLayer::Caption)
                .with_class(class);
            output.merge(
                PositionedDrawable::new(text)
                    .with_position(caption.position())
                    .render_to_layers(),
            );
        }

        output
    }
}

/// Anchor of a relation label: the edge midpoint, lifted by half the label
/// font size so the text sits above the line.
fn relation_anchor(start: Point, end: Point, font_size: u16) -> Point {
    start.midpoint(end).offset_y(-f32::from(font_size) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::StyleConfig,
        geometry::Size,
        graph::{Edge, Graph, Node},
        scene::Spacing,
    };

    fn scene() -> Scene {
        let graph = Graph::new()
            .with_title("Title")
            .with_subtitle("Subtitle")
            .with_node(Node::new("a", "Alpha", 100.0, 100.0))
            .with_node(Node::new("b", "", 300.0, 200.0))
            .with_edge(Edge::new("a", "b", "links"));
        Scene::build(&graph, Size::new(800.0, 600.0), Spacing::default()).unwrap()
    }

    #[test]
    fn test_render_document_root_attributes() {
        let theme = StyleConfig::default().theme().unwrap();
        let svg = SvgExporter::new(&theme).render_document(&scene()).to_string();

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("width=\"800\""));
        assert!(svg.contains("height=\"600\""));
        assert!(svg.contains("viewBox=\"0 0 800 600\""));
    }

    #[test]
    fn test_render_document_classes() {
        let theme = StyleConfig::default().theme().unwrap();
        let svg = SvgExporter::new(&theme).render_document(&scene()).to_string();

        assert_eq!(svg.matches("class=\"background\"").count(), 1);
        assert_eq!(svg.matches("class=\"title\"").count(), 1);
        assert_eq!(svg.matches("class=\"subtitle\"").count(), 1);
        assert_eq!(svg.matches("class=\"node\"").count(), 2);
        assert_eq!(svg.matches("class=\"node-label\"").count(), 2);
        assert_eq!(svg.matches("class=\"link\"").count(), 1);
    }

    #[test]
    fn test_render_document_layer_order() {
        let theme = StyleConfig::default().theme().unwrap();
        let svg = SvgExporter::new(&theme).render_document(&scene()).to_string();

        let background = svg.find("data-layer=\"background\"").unwrap();
        let caption = svg.find("data-layer=\"caption\"").unwrap();
        let edge = svg.find("data-layer=\"edge\"").unwrap();
        let node = svg.find("data-layer=\"node\"").unwrap();
        let label = svg.find("data-layer=\"label\"").unwrap();
        assert!(background < caption && caption < node && node < label && label < edge);
    }

    #[test]
    fn test_render_document_relation_labels_off_by_default() {
        let theme = StyleConfig::default().theme().unwrap();
        let svg = SvgExporter::new(&theme).render_document(&scene()).to_string();
        assert!(svg.contains("Alpha"));
        assert!(!svg.contains("class=\"relation-label\""));
        assert!(!svg.contains("links"));
    }

    #[test]
    fn test_render_document_relation_labels_enabled() {
        let style: StyleConfig = toml::from_str("relation_labels = true").unwrap();
        let theme = style.theme().unwrap();
        let svg = SvgExporter::new(&theme).render_document(&scene()).to_string();

        assert_eq!(svg.matches("class=\"relation-label\"").count(), 1);
        assert!(svg.contains("links"));
        // Midpoint of (100,100)-(300,200) lifted by half of the 10px label size
        assert!(svg.contains("x=\"200\""));
        assert!(svg.contains("y=\"145\""));
    }

    #[test]
    fn test_render_string_matches_document() {
        let theme = StyleConfig::default().theme().unwrap();
        let exporter = SvgExporter::new(&theme);
        let scene = scene();

        let string = exporter.render_string(&scene).unwrap();
        assert!(string.contains(&exporter.render_document(&scene).to_string()));
    }

    #[test]
    fn test_relation_anchor() {
        let anchor = relation_anchor(Point::new(0.0, 0.0), Point::new(10.0, 20.0), 10);
        assert_eq!(anchor, Point::new(5.0, 5.0));
    }
}
