//! Filled rectangles, used for the canvas background.

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::{Point, Size},
};

/// A filled, unstroked rectangle whose top-left corner is the render position.
#[derive(Debug, Clone)]
pub struct Rectangle<'a> {
    fill_color: &'a Color,
    size: Size,
    class: Option<&'a str>,
}

impl<'a> Rectangle<'a> {
    pub fn new(fill_color: &'a Color, size: Size) -> Self {
        Self {
            fill_color,
            size,
            class: None,
        }
    }

    /// Sets the CSS class emitted on the `<rect>` element.
    pub fn with_class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }
}

impl Drawable for Rectangle<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut rect = svg_element::Rectangle::new()
            .set("x", position.x())
            .set("y", position.y())
            .set("width", self.size.width())
            .set("height", self.size.height())
            .set("fill", self.fill_color.to_string());

        if !self.fill_color.is_opaque() {
            rect = rect.set("fill-opacity", self.fill_color.alpha());
        }

        if let Some(class) = self.class {
            rect = rect.set("class", class);
        }

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Background, Box::new(rect));
        output
    }
}
