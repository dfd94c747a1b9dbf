//! Main-axis extent resolution for table items.

use super::options::ItemSize;
use stickylist_ui_layout::{Axis, LayoutContext, Size};

/// Resolves the main-axis extent of each node for one pass.
///
/// Fixed and viewport-filling sizes are settled once up front; dynamic sizing
/// asks the host for every node, in both scan directions.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ItemSizer {
    fixed_extent: Option<f32>,
    axis: Axis,
    viewport: Size,
}

impl ItemSizer {
    pub(crate) fn new(item_size: ItemSize, axis: Axis, viewport: Size) -> Self {
        let fixed_extent = match item_size {
            _ if item_size.is_malformed() => {
                log::warn!(
                    "TableLayout: ignoring malformed item size {:?}, measuring items instead",
                    item_size
                );
                None
            }
            ItemSize::Fixed(extent) => Some(extent),
            ItemSize::FillViewport => Some(axis.main_extent(viewport)),
            ItemSize::Dynamic => None,
        };
        Self {
            fixed_extent,
            axis,
            viewport,
        }
    }

    #[inline]
    pub(crate) fn is_dynamic(&self) -> bool {
        self.fixed_extent.is_none()
    }

    /// Extent of `node` along the main axis.
    pub(crate) fn extent<C>(&self, context: &mut C, node: &C::Node) -> f32
    where
        C: LayoutContext + ?Sized,
    {
        match self.fixed_extent {
            Some(extent) => extent,
            None => self
                .axis
                .main_extent(context.resolve_size(node, self.viewport)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_size_is_used_as_is() {
        let sizer = ItemSizer::new(ItemSize::Fixed(32.0), Axis::Vertical, Size::new(100.0, 400.0));
        assert!(!sizer.is_dynamic());
        assert_eq!(sizer.fixed_extent, Some(32.0));
    }

    #[test]
    fn zero_fixed_size_stays_fixed() {
        let sizer = ItemSizer::new(ItemSize::Fixed(0.0), Axis::Vertical, Size::new(100.0, 400.0));
        assert_eq!(sizer.fixed_extent, Some(0.0));
    }

    #[test]
    fn fill_viewport_uses_main_extent() {
        let viewport = Size::new(640.0, 480.0);
        let vertical = ItemSizer::new(ItemSize::FillViewport, Axis::Vertical, viewport);
        let horizontal = ItemSizer::new(ItemSize::FillViewport, Axis::Horizontal, viewport);
        assert_eq!(vertical.fixed_extent, Some(480.0));
        assert_eq!(horizontal.fixed_extent, Some(640.0));
    }

    #[test]
    fn malformed_size_falls_back_to_dynamic() {
        let viewport = Size::new(100.0, 400.0);
        assert!(ItemSizer::new(ItemSize::Fixed(-5.0), Axis::Vertical, viewport).is_dynamic());
        assert!(ItemSizer::new(ItemSize::Fixed(f32::NAN), Axis::Vertical, viewport).is_dynamic());
        assert!(ItemSizer::new(ItemSize::Dynamic, Axis::Vertical, viewport).is_dynamic());
    }
}
