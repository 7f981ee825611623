//! Pure math for Dragkit
//!
//! This crate contains the vector, size and rectangle primitives that the
//! gesture tracker measures drags with. Everything here is a plain value type.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Rect, Size, Vector};
}
