//! Configuration types for Stillgraph rendering.
//!
//! This module provides configuration structures that control the canvas size
//! and the visual style of rendered graphs. All types implement
//! [`serde::Deserialize`] for loading from external sources; every field is
//! optional and falls back to the defaults listed below.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining canvas and style settings.
//! - [`CanvasConfig`] - Default canvas dimensions.
//! - [`StyleConfig`] - Colors, sizes, fonts and spacing of the drawn marks.
//!
//! # Example
//!
//! ```
//! # use stillgraph::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.canvas().width(), 800.0);
//! assert_eq!(config.style().node_radius(), 15.0);
//! assert!(config.style().theme().is_ok());
//! ```

use serde::Deserialize;

use stillgraph_core::{
    color::Color,
    draw::{CircleDefinition, StrokeDefinition, StrokeStyle, TextDefinition},
    geometry::Size,
};

use crate::{error::StillgraphError, scene::Spacing};

/// Top-level application configuration combining canvas and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Canvas configuration section.
    #[serde(default)]
    canvas: CanvasConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified canvas and style configurations.
    pub fn new(canvas: CanvasConfig, style: StyleConfig) -> Self {
        Self { canvas, style }
    }

    /// Returns the canvas configuration.
    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Default canvas dimensions, 800×600 unless configured.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    width: f32,
    height: f32,
}

impl CanvasConfig {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Returns the canvas dimensions as a [`Size`].
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Visual styling configuration for rendered graphs.
///
/// Colors are kept as strings and validated when the [`Theme`] is resolved.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    background_color: String,
    node_color: String,
    node_radius: f32,
    label_offset: f32,
    edge_color: String,
    edge_width: f32,
    edge_style: String,
    font_family: String,
    title_font_size: u16,
    title_color: String,
    subtitle_font_size: u16,
    subtitle_color: String,
    subtitle_gap: f32,
    label_font_size: u16,
    relation_labels: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: "#f8f9fa".to_string(),
            node_color: "#69b3a2".to_string(),
            node_radius: 15.0,
            label_offset: 25.0,
            edge_color: "#999".to_string(),
            edge_width: 1.0,
            edge_style: "solid".to_string(),
            font_family: "sans-serif".to_string(),
            title_font_size: 24,
            title_color: "#333".to_string(),
            subtitle_font_size: 14,
            subtitle_color: "#666".to_string(),
            subtitle_gap: 30.0,
            label_font_size: 10,
            relation_labels: false,
        }
    }
}

impl StyleConfig {
    /// Radius of every node circle.
    pub fn node_radius(&self) -> f32 {
        self.node_radius
    }

    /// Vertical distance from a node center to its label anchor.
    pub fn label_offset(&self) -> f32 {
        self.label_offset
    }

    /// Vertical distance from the title anchor to the subtitle anchor.
    pub fn subtitle_gap(&self) -> f32 {
        self.subtitle_gap
    }

    /// Returns the label and subtitle offsets used when building a scene.
    pub fn spacing(&self) -> Spacing {
        Spacing::new(self.label_offset, self.subtitle_gap)
    }

    /// Resolves the configured values into drawing definitions.
    ///
    /// # Errors
    ///
    /// Returns [`StillgraphError::Config`] if a color or edge style cannot be
    /// parsed, or if a size is negative or not finite.
    pub fn theme(&self) -> Result<Theme, StillgraphError> {
        let background = parse_color("background_color", &self.background_color)?;

        let node_radius = non_negative("node_radius", self.node_radius)?;
        let node = CircleDefinition::new(node_radius, parse_color("node_color", &self.node_color)?);

        let edge_width = non_negative("edge_width", self.edge_width)?;
        let mut edge = StrokeDefinition::new(parse_color("edge_color", &self.edge_color)?, edge_width);
        let edge_style = self
            .edge_style
            .parse::<StrokeStyle>()
            .map_err(|err| StillgraphError::Config(format!("edge_style: {err}")))?;
        edge.set_style(edge_style);

        let title = self.text_definition(
            self.title_font_size,
            Some(parse_color("title_color", &self.title_color)?),
        );
        let subtitle = self.text_definition(
            self.subtitle_font_size,
            Some(parse_color("subtitle_color", &self.subtitle_color)?),
        );
        let label = self.text_definition(self.label_font_size, None);

        Ok(Theme {
            background,
            node,
            edge,
            title,
            subtitle,
            label,
            relation_labels: self.relation_labels,
        })
    }

    fn text_definition(&self, font_size: u16, color: Option<Color>) -> TextDefinition {
        let mut def = TextDefinition::new();
        def.set_font_family(&self.font_family);
        def.set_font_size(font_size);
        def.set_color(color);
        def
    }
}

fn parse_color(field: &str, value: &str) -> Result<Color, StillgraphError> {
    Color::new(value).map_err(|err| StillgraphError::Config(format!("{field}: {err}")))
}

fn non_negative(field: &str, value: f32) -> Result<f32, StillgraphError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(StillgraphError::Config(format!(
            "{field}: expected a non-negative number, got {value}"
        )))
    }
}

/// Drawing definitions resolved from a [`StyleConfig`].
#[derive(Debug, Clone)]
pub struct Theme {
    background: Color,
    node: CircleDefinition,
    edge: StrokeDefinition,
    title: TextDefinition,
    subtitle: TextDefinition,
    label: TextDefinition,
    relation_labels: bool,
}

impl Theme {
    pub fn background(&self) -> &Color {
        &self.background
    }

    pub fn node(&self) -> &CircleDefinition {
        &self.node
    }

    pub fn edge(&self) -> &StrokeDefinition {
        &self.edge
    }

    pub fn title(&self) -> &TextDefinition {
        &self.title
    }

    pub fn subtitle(&self) -> &TextDefinition {
        &self.subtitle
    }

    pub fn label(&self) -> &TextDefinition {
        &self.label
    }

    /// Whether edge relations are written at the middle of their lines.
    pub fn relation_labels(&self) -> bool {
        self.relation_labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_matches_constants() {
        let theme = StyleConfig::default().theme().unwrap();

        assert_eq!(theme.node().radius(), 15.0);
        assert_eq!(
            theme.node().fill_color(),
            Color::new("#69b3a2").unwrap()
        );
        assert_eq!(theme.edge().color(), Color::new("#999").unwrap());
        assert_eq!(theme.edge().width(), 1.0);
        assert_eq!(*theme.edge().style(), StrokeStyle::Solid);
        assert_eq!(*theme.background(), Color::new("#f8f9fa").unwrap());
        assert_eq!(theme.title().font_size(), 24);
        assert_eq!(theme.subtitle().font_size(), 14);
        assert_eq!(theme.label().font_size(), 10);
        assert_eq!(theme.label().font_family(), "sans-serif");
        assert!(theme.label().color().is_none());
        assert!(!theme.relation_labels());
    }

    #[test]
    fn test_default_spacing() {
        let style = StyleConfig::default();
        assert_eq!(style.label_offset(), 25.0);
        assert_eq!(style.subtitle_gap(), 30.0);
        assert_eq!(style.spacing(), Spacing::default());
    }

    #[test]
    fn test_invalid_color_is_config_error() {
        let style = StyleConfig {
            node_color: "definitely-not-a-color".to_string(),
            ..StyleConfig::default()
        };

        match style.theme() {
            Err(StillgraphError::Config(msg)) => assert!(msg.starts_with("node_color:")),
            other => panic!("Expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_radius_is_config_error() {
        let style = StyleConfig {
            node_radius: -1.0,
            ..StyleConfig::default()
        };
        assert!(matches!(style.theme(), Err(StillgraphError::Config(_))));
    }

    #[test]
    fn test_invalid_edge_style_is_config_error() {
        let style = StyleConfig {
            edge_style: "zigzag".to_string(),
            ..StyleConfig::default()
        };
        assert!(matches!(style.theme(), Err(StillgraphError::Config(_))));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r##"
            [canvas]
            width = 1024

            [style]
            node_radius = 8.0
            edge_color = "#444"
            "##,
        )
        .unwrap();

        assert_eq!(config.canvas().width(), 1024.0);
        assert_eq!(config.canvas().height(), 600.0);
        assert_eq!(config.style().node_radius(), 8.0);
        assert_eq!(config.style().label_offset(), 25.0);

        let theme = config.style().theme().unwrap();
        assert_eq!(theme.edge().color(), Color::new("#444").unwrap());
    }

    #[test]
    fn test_canvas_default_size() {
        let canvas = CanvasConfig::default();
        assert_eq!(canvas.size(), Size::new(800.0, 600.0));
    }
}
