//! Grid geometry and the write-once pixel canvas.
//!
//! [`GridLayout`] maps between linear indices and `(x, y)` coordinates and
//! enumerates Moore neighborhoods without wraparound; positions outside the
//! grid are a routine empty result, not an error. [`Canvas`] owns the cells
//! and enforces that no pixel is written twice.

pub mod canvas;
pub mod layout;

pub use self::canvas::Canvas;
pub use self::layout::{GridLayout, NeighborIndices};
