//! 2D drawing surface rendering
//!
//! The field is drawn with three primitives (clear, filled circle, stroked line)
//! behind the `Surface` trait so the same pass targets a canvas or a recorder.

pub mod draw;
pub mod recording;
pub mod surface;

pub use draw::render;
pub use recording::{DrawCommand, RecordingSurface};
pub use surface::{Rgba, Surface};
