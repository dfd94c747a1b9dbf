//! Static capability descriptors negotiated between a layout and its host.

use crate::Axis;

/// Debug switches a host may honour for a layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct DebugCapabilities {
    /// Ask the host to verify `prev()` traversal while running the layout.
    pub test_prev: bool,
}

/// What a layout function supports. Hosts read this once; it never changes
/// at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutCapabilities {
    /// Lays out a sequence through a cursor rather than a keyed set.
    pub sequence: bool,
    /// Supported primary axes, preferred first.
    pub directions: &'static [Axis],
    pub scrolling: bool,
    /// Supports nodes that are sized by the host at layout time.
    pub true_size: bool,
    /// The host may reuse cursor position between passes while scrolling.
    pub sequential_scrolling_optimized: bool,
    pub debug: DebugCapabilities,
}

impl LayoutCapabilities {
    /// Returns true if `axis` is one of the supported directions.
    pub fn supports(&self, axis: Axis) -> bool {
        self.directions.contains(&axis)
    }
}

/// Static identity of a layout function.
pub trait LayoutDescriptor {
    const NAME: &'static str;
    const DESCRIPTION: &'static str;

    fn capabilities() -> LayoutCapabilities;
}
