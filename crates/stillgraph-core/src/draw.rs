//! Drawable primitives for canvas rendering.
//!
//! This module provides the drawable abstractions a static graph is made of.
//! All drawable components implement the [`Drawable`] trait, which renders an
//! element at a position into layered SVG output.
//!
//! # Layer-Based Rendering
//!
//! Drawables render to one or more [`RenderLayer`]s, which are automatically ordered
//! during final SVG generation.
mod circle;
mod layer;
mod line;
mod positioned;
mod rectangle;
mod stroke;
mod text;

pub use circle::{Circle, CircleDefinition};
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use line::Line;
pub use positioned::PositionedDrawable;
pub use rectangle::Rectangle;
pub use stroke::{StrokeDefinition, StrokeStyle};
pub use text::{Text, TextDefinition};

use crate::geometry::Point;

/// Trait for canvas elements that can be rendered to SVG layers.
pub trait Drawable: std::fmt::Debug {
    /// Renders this drawable to one or more layers.
    ///
    /// Simple drawables typically emit to a single layer. The meaning of
    /// `position` is defined per drawable (center for circles, anchor for
    /// text, top-left for rectangles, start point for lines).
    fn render_to_layers(&self, position: Point) -> LayeredOutput;
}
