//! Filled circles used as node markers.

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::Point,
};

/// Visual style shared by every node circle of a render.
///
/// # Examples
///
/// ```
/// # use stillgraph_core::draw::CircleDefinition;
/// # use stillgraph_core::color::Color;
/// let def = CircleDefinition::new(15.0, Color::new("#69b3a2").unwrap());
/// assert_eq!(def.radius(), 15.0);
/// ```
#[derive(Debug, Clone)]
pub struct CircleDefinition {
    radius: f32,
    fill_color: Color,
}

impl CircleDefinition {
    /// Creates an unstroked circle definition.
    pub fn new(radius: f32, fill_color: Color) -> Self {
        Self { radius, fill_color }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn fill_color(&self) -> Color {
        self.fill_color
    }
}

/// A circle centered on its render position.
#[derive(Debug, Clone)]
pub struct Circle<'a> {
    definition: &'a CircleDefinition,
    class: Option<&'a str>,
}

impl<'a> Circle<'a> {
    pub fn new(definition: &'a CircleDefinition) -> Self {
        Self {
            definition,
            class: None,
        }
    }

    /// Sets the CSS class emitted on the `<circle>` element.
    pub fn with_class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }
}

impl Drawable for Circle<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut circle = svg_element::Circle::new()
            .set("cx", position.x())
            .set("cy", position.y())
            .set("r", self.definition.radius())
            .set("fill", self.definition.fill_color().to_string());

        if let Some(class) = self.class {
            circle = circle.set("class", class);
        }

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Node, Box::new(circle));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(circle: &Circle, position: Point) -> String {
        circle
            .render_to_layers(position)
            .render()
            .iter()
            .map(|node| node.to_string())
            .collect()
    }

    #[test]
    fn test_circle_attributes() {
        let def = CircleDefinition::new(15.0, Color::new("#69b3a2").unwrap());
        let svg = render(&Circle::new(&def).with_class("node"), Point::new(267.0, 200.0));

        assert!(svg.contains("data-layer=\"node\""));
        assert!(svg.contains("cx=\"267\""));
        assert!(svg.contains("cy=\"200\""));
        assert!(svg.contains("r=\"15\""));
        assert!(svg.contains("class=\"node\""));
        assert!(svg.contains("fill=\"#69b3a2\""));
        assert!(!svg.contains("stroke"));
    }

    #[test]
    fn test_circle_without_class() {
        let def = CircleDefinition::new(5.0, Color::default());
        let svg = render(&Circle::new(&def), Point::default());
        assert!(!svg.contains("class="));
    }
}
