//! Text rendering definitions for captions and node labels.
//!
//! This module provides types for configuring text appearance and rendering
//! text elements. Text is rendered as a single SVG `<text>` element, centered
//! horizontally on its anchor point.
//!
//! # Overview
//!
//! - [`TextDefinition`] - Reusable text style configuration
//! - [`Text`] - A renderable text element combining content with a [`TextDefinition`]
//!
//! # Quick Start
//!
//! ```
//! # use stillgraph_core::draw::{Drawable, Text, TextDefinition};
//! # use stillgraph_core::geometry::Point;
//! let mut style = TextDefinition::new();
//! style.set_font_size(10);
//!
//! let text = Text::new(&style, "Entity 1");
//! let output = text.render_to_layers(Point::new(267.0, 225.0));
//! assert!(!output.is_empty());
//! ```

use svg::node::{Text as SvgText, element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::Point,
};

/// Defines the visual style for text elements.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"sans-serif"` |
/// | Font size | `12` |
/// | Text color | `None` (SVG default, typically black) |
#[derive(Debug, Clone)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    color: Option<Color>,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in pixels.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    /// Sets the font family for the text.
    ///
    /// # Arguments
    ///
    /// * `family` - The font family name (e.g., "sans-serif", "Helvetica", "monospace")
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Sets the text color. `None` leaves the fill to the SVG default.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 12,
            color: None,
        }
    }
}

/// A renderable text element combining content with styling.
///
/// The render position is the anchor point: `x` is the horizontal center and
/// `y` the baseline, matching SVG's `text-anchor="middle"` semantics.
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: &'a str,
    layer: RenderLayer,
    class: Option<&'a str>,
}

impl<'a> Text<'a> {
    /// Creates a new text element on the [`RenderLayer::Label`] layer.
    pub fn new(definition: &'a TextDefinition, content: &'a str) -> Self {
        Self {
            definition,
            content,
            layer: RenderLayer::Label,
            class: None,
        }
    }

    /// Moves the text to another render layer.
    pub fn with_layer(mut self, layer: RenderLayer) -> Self {
        self.layer = layer;
        self
    }

    /// Sets the CSS class emitted on the `<text>` element.
    pub fn with_class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }
}

impl Drawable for Text<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut rendered_text = svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y())
            .set("text-anchor", "middle")
            .set("font-family", self.definition.font_family())
            .set("font-size", format!("{}px", self.definition.font_size()));

        if let Some(color) = self.definition.color() {
            rendered_text = rendered_text.set("fill", color.to_string());
            if !color.is_opaque() {
                rendered_text = rendered_text.set("fill-opacity", color.alpha());
            }
        }

        if let Some(class) = self.class {
            rendered_text = rendered_text.set("class", class);
        }

        let rendered_text = rendered_text.add(SvgText::new(self.content));

        let mut output = LayeredOutput::new();
        output.add_to_layer(self.layer, Box::new(rendered_text));
        output
    }
}
