//! Color handling for Stillgraph canvases
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate, so configured CSS color strings are validated once and
//! then emitted consistently into SVG attributes.

use std::{fmt, str::FromStr};

use color::{DynamicColor, Srgb};

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#69b3a2", "rgb(153, 153, 153)", "gray", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use stillgraph_core::color::Color;
    ///
    /// let node = Color::new("#69b3a2").unwrap();
    /// let edge = Color::new("#999").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns the alpha (transparency) component of this color.
    ///
    /// The value is between 0.0 (fully transparent) and 1.0 (fully opaque).
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }

    /// Returns `true` if the color has no transparency.
    pub fn is_opaque(&self) -> bool {
        self.alpha() >= 1.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

/// Writes the color as sRGB `#rrggbb`. Transparency is carried separately
/// through [`Color::alpha`].
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        write!(f, "#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        assert!(Color::new("#f8f9fa").is_ok());
        assert!(Color::new("#999").is_ok());

        let invalid = Color::new("not-a-color");
        assert!(invalid.is_err());
        assert!(invalid.unwrap_err().contains("not-a-color"));
    }

    #[test]
    fn test_color_default() {
        let color = Color::default();
        assert_eq!(color.to_string(), "#000000");
        assert!(color.is_opaque());
    }

    #[test]
    fn test_color_alpha() {
        let opaque = Color::new("#69b3a2").unwrap();
        assert!((opaque.alpha() - 1.0).abs() < 0.001);

        let transparent = Color::new("transparent").unwrap();
        assert!(!transparent.is_opaque());
    }

    #[test]
    fn test_color_display_hex() {
        assert_eq!(Color::new("#333").unwrap().to_string(), "#333333");
        assert_eq!(Color::new("#666").unwrap().to_string(), "#666666");
        assert_eq!(Color::new("#999").unwrap().to_string(), "#999999");
        assert_eq!(Color::new("#69b3a2").unwrap().to_string(), "#69b3a2");
        assert_eq!(Color::new("#f8f9fa").unwrap().to_string(), "#f8f9fa");
        assert_eq!(Color::new("rgb(153, 153, 153)").unwrap().to_string(), "#999999");
        assert_eq!(Color::new("white").unwrap().to_string(), "#ffffff");
    }

    #[test]
    fn test_color_display_drops_alpha() {
        let color = Color::new("rgba(255, 0, 0, 0.5)").unwrap();
        assert_eq!(color.to_string(), "#ff0000");
        assert!((color.alpha() - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_color_eq() {
        let color1 = Color::new("#666").unwrap();
        let color2 = Color::new("#666").unwrap();
        let color3 = Color::new("#999").unwrap();

        assert_eq!(color1, color2);
        assert_ne!(color1, color3);
    }

    #[test]
    fn test_color_into_value() {
        let value = svg::node::Value::from(&Color::new("#999").unwrap());
        assert_eq!(value.to_string(), "#999999");
    }
}
