//! Stillgraph Core Types and Definitions
//!
//! This crate provides the foundational types for drawing static graphs onto a
//! fixed-size SVG canvas. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Drawable circles, lines, rectangles and text rendered into
//!   z-ordered layers ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
