//! Host context trait for sequential layouts.
//!
//! This module defines the [`LayoutContext`] trait which gives a layout
//! function everything it needs for one pass: viewport geometry, the scroll
//! window, a bidirectional node cursor, measurement, and a commit sink.

use crate::{Axis, PlacementRecord, ScrollWindow};
use stickylist_ui_graphics::Size;

/// Host-supplied state and primitives for one layout pass.
///
/// The cursor is positioned by the host before the pass: [`next`](Self::next)
/// yields the node at the scroll offset and then the ones after it,
/// [`prev`](Self::prev) yields the nodes before it, nearest first. Both
/// return `None` once the data source is exhausted in that direction.
///
/// The context owns its nodes. Layouts only hold the handles the cursor gives
/// out, so [`Node`](Self::Node) is expected to be cheap to clone (an index, a
/// key, an `Rc`).
pub trait LayoutContext {
    /// Handle to a node yielded by the cursor.
    type Node: Clone;

    /// The renderable behind a node, as seen by host classification callbacks.
    type RenderNode: ?Sized;

    /// Viewport extent along both axes.
    fn size(&self) -> Size;

    /// Primary axis for this pass.
    fn axis(&self) -> Axis;

    /// Scroll bounds for this pass.
    fn scroll_window(&self) -> ScrollWindow;

    /// Advances the forward cursor.
    fn next(&mut self) -> Option<Self::Node>;

    /// Advances the backward cursor.
    fn prev(&mut self) -> Option<Self::Node>;

    /// Natural size of `node` when laid out in a container of `container_size`.
    fn resolve_size(&mut self, node: &Self::Node, container_size: Size) -> Size;

    /// The renderable behind `node`.
    fn render_node(&self, node: &Self::Node) -> &Self::RenderNode;

    /// Commits `record` for `node`.
    ///
    /// A node may be committed more than once in a pass; the last commit wins.
    fn set(&mut self, node: &Self::Node, record: PlacementRecord);
}
