//! Straight line segments used for edges.

use svg::node::element as svg_element;

use crate::{
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::Point,
};

/// A straight segment drawn from the render position to `target`.
///
/// A segment whose target equals its start renders as a zero-length line.
#[derive(Debug, Clone)]
pub struct Line<'a> {
    stroke: &'a StrokeDefinition,
    target: Point,
    class: Option<&'a str>,
}

impl<'a> Line<'a> {
    pub fn new(stroke: &'a StrokeDefinition, target: Point) -> Self {
        Self {
            stroke,
            target,
            class: None,
        }
    }

    /// Sets the CSS class emitted on the `<line>` element.
    pub fn with_class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }

    pub fn target(&self) -> Point {
        self.target
    }
}

impl Drawable for Line<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut line = svg_element::Line::new()
            .set("x1", position.x())
            .set("y1", position.y())
            .set("x2", self.target.x())
            .set("y2", self.target.y());

        if let Some(class) = self.class {
            line = line.set("class", class);
        }

        let line = crate::apply_stroke!(line, self.stroke);

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Edge, Box::new(line));
        output
    }
}
