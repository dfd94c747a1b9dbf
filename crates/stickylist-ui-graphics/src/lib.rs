//! Pure geometry data for Stickylist layouts
//!
//! This crate contains the size and position primitives that layout
//! passes produce and hosts consume.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Size, Translation};
}
