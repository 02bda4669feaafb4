//! Stroke and line-style definitions.
//!
//! # Overview
//!
//! Exported types:
//! - [`StrokeDefinition`]: Stroke properties (color, width, style)
//! - [`StrokeStyle`]: Enum defining line patterns (solid, dashed, dotted, custom)
//! - [`apply_stroke!`](crate::apply_stroke!): Macro for applying stroke attributes to SVG elements
//!
//! # SVG Attribute Mapping
//!
//! | Rust Property | SVG Attribute | Example Values |
//! |--------------|---------------|----------------|
//! | `color` | `stroke`, `stroke-opacity` | `"#999"`, `0.6` |
//! | `width` | `stroke-width` | `1` |
//! | `style` | `stroke-dasharray` | `"5,5"`, `"2,3"` |
//!
//! `stroke-opacity` is only emitted for translucent colors and
//! `stroke-dasharray` only for patterned styles.

use std::str::FromStr;

use crate::color::Color;

/// Defines the visual style of a stroke, including dash patterns.
///
/// # SVG Mapping
///
/// - `Solid`: No dasharray attribute
/// - `Dashed`: "5,5"
/// - `Dotted`: "2,3"
/// - `Custom(pattern)`: Uses the provided pattern string
#[derive(Debug, Default, Clone, PartialEq)]
pub enum StrokeStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// Dashed line with equal dash and gap lengths
    Dashed,
    /// Dotted line
    Dotted,
    /// Custom SVG dasharray pattern, e.g. "10,5,2,3"
    Custom(String),
}

impl FromStr for StrokeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Self::Solid),
            "dashed" => Ok(Self::Dashed),
            "dotted" => Ok(Self::Dotted),
            _ if is_dash_pattern(s) => Ok(Self::Custom(s.to_string())),
            _ => Err(format!(
                "invalid stroke style `{s}`, valid values: solid, dashed, dotted, or a dash pattern like `10,5`"
            )),
        }
    }
}

fn is_dash_pattern(s: &str) -> bool {
    let mut parts = s
        .split([',', ' '])
        .filter(|part| !part.is_empty())
        .peekable();
    parts.peek().is_some() && parts.all(|part| part.parse::<f32>().is_ok_and(|v| v >= 0.0))
}

impl StrokeStyle {
    /// Returns the SVG dasharray value for this style, or None for solid lines
    pub fn to_svg_value(&self) -> Option<String> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("5,5".to_string()),
            Self::Dotted => Some("2,3".to_string()),
            Self::Custom(pattern) => Some(pattern.clone()),
        }
    }
}

/// A stroke definition for rendering lines and outlines.
///
/// # Examples
///
/// ```
/// use stillgraph_core::draw::{StrokeDefinition, StrokeStyle};
/// use stillgraph_core::color::Color;
///
/// // The edge stroke used by the renderer
/// let stroke = StrokeDefinition::new(Color::new("#999").unwrap(), 1.0);
/// assert_eq!(stroke.width(), 1.0);
///
/// let mut dashed = stroke.clone();
/// dashed.set_style(StrokeStyle::Dashed);
/// assert_eq!(dashed.style().to_svg_value().as_deref(), Some("5,5"));
/// ```
#[derive(Debug, Clone)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl StrokeDefinition {
    /// Creates a new solid stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
        }
    }

    /// Sets the stroke pattern.
    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the stroke pattern.
    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::new(Color::default(), 1.0)
    }
}

/// Applies all stroke attributes from a [`StrokeDefinition`] to an SVG element.
///
/// # Example
///
/// ```
/// use stillgraph_core::{apply_stroke, draw::StrokeDefinition};
/// use svg::node::element::Line;
///
/// let stroke = StrokeDefinition::default();
/// let line = apply_stroke!(Line::new(), &stroke);
/// assert!(line.to_string().contains("stroke-width=\"1\""));
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let stroke = $stroke;
        let mut elem = $element
            .set("stroke", stroke.color().to_string())
            .set("stroke-width", stroke.width());

        if !stroke.color().is_opaque() {
            elem = elem.set("stroke-opacity", stroke.color().alpha());
        }

        if let Some(dasharray) = stroke.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}

#[cfg(test)]
mod tests {
    use svg::node::element::Line;

    use super::*;

    #[test]
    fn test_stroke_default() {
        let stroke = StrokeDefinition::default();
        assert_eq!(stroke.width(), 1.0);
        assert_eq!(stroke.color().to_string(), "#000000");
        assert_eq!(*stroke.style(), StrokeStyle::Solid);
    }

    #[test]
    fn test_stroke_style_from_str() {
        assert_eq!("solid".parse::<StrokeStyle>(), Ok(StrokeStyle::Solid));
        assert_eq!("dashed".parse::<StrokeStyle>(), Ok(StrokeStyle::Dashed));
        assert_eq!("dotted".parse::<StrokeStyle>(), Ok(StrokeStyle::Dotted));
        assert_eq!(
            "10,5,2,5".parse::<StrokeStyle>(),
            Ok(StrokeStyle::Custom("10,5,2,5".to_string()))
        );
        assert!("wavy".parse::<StrokeStyle>().is_err());
        assert!("".parse::<StrokeStyle>().is_err());
        assert!("5,-1".parse::<StrokeStyle>().is_err());
    }

    #[test]
    fn test_stroke_style_to_svg_value() {
        assert_eq!(StrokeStyle::Solid.to_svg_value(), None);
        assert_eq!(StrokeStyle::Dashed.to_svg_value(), Some("5,5".to_string()));
        assert_eq!(StrokeStyle::Dotted.to_svg_value(), Some("2,3".to_string()));
    }

    #[test]
    fn test_apply_stroke_solid() {
        let stroke = StrokeDefinition::new(Color::new("#999").unwrap(), 1.0);
        let line = apply_stroke!(Line::new(), &stroke).to_string();

        assert!(line.contains(&format!("stroke=\"{}\"", stroke.color())));
        assert!(line.contains("stroke-width=\"1\""));
        assert!(!line.contains("stroke-dasharray"));
        assert!(!line.contains("stroke-opacity"));
    }

    #[test]
    fn test_apply_stroke_dashed_translucent() {
        let mut stroke = StrokeDefinition::new(Color::new("rgba(0, 0, 0, 0.5)").unwrap(), 2.0);
        stroke.set_style(StrokeStyle::Dashed);
        let line = apply_stroke!(Line::new(), &stroke).to_string();

        assert!(line.contains("stroke-dasharray=\"5,5\""));
        assert!(line.contains("stroke-opacity=\"0.5\""));
    }
}
