//! Geometry committed for one node by a layout pass.

use crate::Axis;
use stickylist_ui_graphics::{Size, Translation};

/// Computed size, position and scroll length for one node.
///
/// `scroll_length` is the node's contribution to the scrollable extent. It is
/// `None` for nodes that are placed outside the contiguous scanned run, such
/// as a section header found by searching backwards past the window.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PlacementRecord {
    pub size: Size,
    pub translate: Translation,
    pub scroll_length: Option<f32>,
}

impl PlacementRecord {
    /// Record for an item of `extent` starting at `main_offset`.
    ///
    /// The cross extent spans the whole viewport and the item sits at depth 0.
    pub fn item(axis: Axis, viewport: Size, main_offset: f32, extent: f32) -> Self {
        Self {
            size: axis.size(extent, axis.cross_extent(viewport)),
            translate: axis.translation(main_offset, 0.0),
            scroll_length: Some(extent),
        }
    }

    /// Same record without a scroll length.
    pub fn without_scroll_length(self) -> Self {
        Self {
            scroll_length: None,
            ..self
        }
    }

    /// Extent along `axis`.
    #[inline]
    pub fn main_extent(&self, axis: Axis) -> f32 {
        axis.main_extent(self.size)
    }

    /// Position along `axis`.
    #[inline]
    pub fn main_offset(&self, axis: Axis) -> f32 {
        axis.main_offset(self.translate)
    }

    /// Trailing edge along `axis`.
    #[inline]
    pub fn main_end(&self, axis: Axis) -> f32 {
        self.main_offset(axis) + self.main_extent(axis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_item_spans_viewport_width() {
        let record = PlacementRecord::item(Axis::Vertical, Size::new(320.0, 480.0), 96.0, 48.0);
        assert_eq!(record.size, Size::new(320.0, 48.0));
        assert_eq!(record.translate, Translation::new(0.0, 96.0, 0.0));
        assert_eq!(record.scroll_length, Some(48.0));
        assert_eq!(record.main_end(Axis::Vertical), 144.0);
    }

    #[test]
    fn horizontal_item_spans_viewport_height() {
        let record = PlacementRecord::item(Axis::Horizontal, Size::new(800.0, 60.0), -30.0, 120.0);
        assert_eq!(record.size, Size::new(120.0, 60.0));
        assert_eq!(record.translate, Translation::new(-30.0, 0.0, 0.0));
        assert_eq!(record.main_offset(Axis::Horizontal), -30.0);
    }

    #[test]
    fn without_scroll_length_keeps_geometry() {
        let record = PlacementRecord::item(Axis::Vertical, Size::new(100.0, 100.0), 10.0, 20.0);
        let stripped = record.without_scroll_length();
        assert_eq!(stripped.scroll_length, None);
        assert_eq!(stripped.size, record.size);
        assert_eq!(stripped.translate, record.translate);
    }
}
