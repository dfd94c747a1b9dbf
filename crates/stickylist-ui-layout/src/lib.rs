//! Layout contracts for Stickylist
//!
//! Everything a layout function and its host need to agree on: the primary
//! axis, the scroll window bounding a pass, the records a pass commits, and
//! the [`LayoutContext`] the host implements.

mod axis;
mod capabilities;
mod context;
mod placement;
mod window;

pub use axis::*;
pub use capabilities::*;
pub use context::*;
pub use placement::*;
pub use window::*;

pub use stickylist_ui_graphics::{Size, Translation};

pub mod prelude {
    pub use crate::axis::Axis;
    pub use crate::capabilities::{LayoutCapabilities, LayoutDescriptor};
    pub use crate::context::LayoutContext;
    pub use crate::placement::PlacementRecord;
    pub use crate::window::ScrollWindow;
}
