//! WebGPU rendering module
//!
//! Draws each `Frame` as flat-colored rectangles on the canvas. Text overlays
//! (score, game over) live in the DOM.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderState, track_to_ndc};
pub use vertex::{Palette, Vertex};
