//! Core placement algorithm for the table layout.
//!
//! Places nodes contiguously along the main axis in both directions from the
//! scroll offset, feeding each one to the sticky header locator, then pins
//! the active section header.

use super::item_sizing::ItemSizer;
use super::options::TableLayoutOptions;
use super::sticky_header::{pin_sticky_header, LocatedHeader, StickyHeader, StickyHeaderLocator};
use stickylist_ui_layout::{
    Axis, DebugCapabilities, LayoutCapabilities, LayoutContext, LayoutDescriptor, PlacementRecord,
    Size,
};

/// Summary of one table layout pass.
///
/// Everything here has already been committed through the context; this is
/// for hosts that want to inspect a pass without reading back their commit
/// store.
#[derive(Clone, Debug, PartialEq)]
pub struct TableLayoutResult<N> {
    /// Nodes placed by the forward scan.
    pub forward_count: usize,

    /// Nodes placed by the backward scan.
    pub backward_count: usize,

    /// First cell (not a section header) reaching into the visible region.
    pub first_visible_item: Option<N>,

    /// Leading edge of the section following the active header, if seen.
    pub header_overlap_offset: Option<f32>,

    /// Whether the active header was found by searching before the window.
    pub backfilled: bool,

    /// The active header and the pinned record committed for it.
    pub sticky_header: Option<StickyHeader<N>>,
}

/// Lays out one pass of a table with sticky section headers.
///
/// This is the whole algorithm:
/// 1. Place nodes forward from `scroll_window().offset` while the running
///    offset is before `end`
/// 2. Place nodes backward from the same offset while it is after `start`
/// 3. If no header candidate is known, search backward past `start` for one
/// 4. Commit the candidate again, pinned to the viewport top
///
/// Nothing is kept between calls: the same context state and options always
/// produce the same commits.
pub fn layout_table<C>(
    context: &mut C,
    options: &TableLayoutOptions<C::RenderNode>,
) -> TableLayoutResult<C::Node>
where
    C: LayoutContext + ?Sized,
{
    let viewport = context.size();
    let axis = context.axis();
    let window = context.scroll_window();
    if !window.is_monotonic() {
        log::warn!("TableLayout: scroll window out of order: {:?}", window);
    }
    let sizer = ItemSizer::new(options.item_size, axis, viewport);
    let mut locator = StickyHeaderLocator::new();

    // 1. Forward placement
    let mut offset = window.offset;
    let mut forward_count = 0;
    while offset < window.end {
        let Some(node) = context.next() else {
            break;
        };
        let extent = sizer.extent(context, &node);
        let record = PlacementRecord::item(axis, viewport, offset, extent);
        context.set(&node, record);
        let leading_edge = offset;
        offset += extent;
        forward_count += 1;

        if options.is_section(context.render_node(&node)) {
            locator.forward_section(StickyHeader { node, record }, leading_edge);
        } else {
            locator.forward_cell(node, offset);
        }
    }

    // 2. Backward placement
    let mut offset = window.offset;
    let mut backward_count = 0;
    let mut backward_exhausted = false;
    while offset > window.start {
        let Some(node) = context.prev() else {
            backward_exhausted = true;
            break;
        };
        let extent = sizer.extent(context, &node);
        let trailing_edge = offset;
        offset -= extent;
        let record = PlacementRecord::item(axis, viewport, offset, extent);
        context.set(&node, record);
        backward_count += 1;

        if options.is_section(context.render_node(&node)) {
            locator.backward_section(StickyHeader { node, record });
        } else {
            locator.backward_cell(node, trailing_edge);
        }
    }

    // 3. Backfill
    let mut backfilled = false;
    if options.has_sections() && !backward_exhausted && !locator.has_candidate() {
        let found = backfill_section_header(context, options, &sizer, axis, viewport, offset);
        if let Some(header) = found {
            locator.adopt_backfilled(header);
            backfilled = true;
        }
    }

    // 4. Sticky header
    let LocatedHeader {
        candidate,
        first_visible,
        header_overlap_offset,
    } = locator.finish();
    let sticky_header = candidate.map(|header| {
        let record = pin_sticky_header(&header.record, header_overlap_offset, axis);
        context.set(&header.node, record);
        log::trace!(
            "TableLayout: pinned header at {} (scanned at {}, overlap {:?})",
            record.main_offset(axis),
            header.record.main_offset(axis),
            header_overlap_offset
        );
        StickyHeader {
            node: header.node,
            record,
        }
    });

    log::debug!(
        "TableLayout pass: {} forward, {} backward, dynamic sizing: {}, sticky header: {}, backfilled: {}",
        forward_count,
        backward_count,
        sizer.is_dynamic(),
        sticky_header.is_some(),
        backfilled
    );

    TableLayoutResult {
        forward_count,
        backward_count,
        first_visible_item: first_visible,
        header_overlap_offset,
        backfilled,
        sticky_header,
    }
}

/// Walks backward past the window until a section header turns up.
///
/// Cells on the way are skipped without being placed. The header is committed
/// right before `offset` and without a scroll length, since it is not part of
/// the contiguous run the scans placed. Ends with `None` once the cursor is
/// exhausted.
fn backfill_section_header<C>(
    context: &mut C,
    options: &TableLayoutOptions<C::RenderNode>,
    sizer: &ItemSizer,
    axis: Axis,
    viewport: Size,
    offset: f32,
) -> Option<StickyHeader<C::Node>>
where
    C: LayoutContext + ?Sized,
{
    let mut skipped = 0usize;
    while let Some(node) = context.prev() {
        if options.is_section(context.render_node(&node)) {
            let extent = sizer.extent(context, &node);
            let record =
                PlacementRecord::item(axis, viewport, offset - extent, extent).without_scroll_length();
            context.set(&node, record);
            log::trace!(
                "TableLayout: backfilled section header after skipping {} cells",
                skipped
            );
            return Some(StickyHeader { node, record });
        }
        skipped += 1;
    }
    log::trace!(
        "TableLayout: no section header before the window ({} cells skipped)",
        skipped
    );
    None
}

/// Table layout with sticky section headers, as a reusable value.
///
/// Holds its options so a host can keep one around and run it on every
/// layout or scroll update.
pub struct TableLayout<R: ?Sized> {
    options: TableLayoutOptions<R>,
}

impl<R: ?Sized> TableLayout<R> {
    pub fn new(options: TableLayoutOptions<R>) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TableLayoutOptions<R> {
        &self.options
    }

    /// Runs one pass. See [`layout_table`].
    pub fn layout<C>(&self, context: &mut C) -> TableLayoutResult<C::Node>
    where
        C: LayoutContext<RenderNode = R> + ?Sized,
    {
        layout_table(context, &self.options)
    }
}

impl<R: ?Sized> Default for TableLayout<R> {
    fn default() -> Self {
        Self::new(TableLayoutOptions::default())
    }
}

impl<R: ?Sized> Clone for TableLayout<R> {
    fn clone(&self) -> Self {
        Self::new(self.options.clone())
    }
}

impl<R: ?Sized> std::fmt::Debug for TableLayout<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableLayout")
            .field("options", &self.options)
            .finish()
    }
}

const TABLE_LAYOUT_CAPABILITIES: LayoutCapabilities = LayoutCapabilities {
    sequence: true,
    directions: &[Axis::Vertical, Axis::Horizontal],
    scrolling: true,
    true_size: true,
    sequential_scrolling_optimized: true,
    debug: DebugCapabilities { test_prev: false },
};

impl<R: ?Sized> LayoutDescriptor for TableLayout<R> {
    const NAME: &'static str = "TableLayout";
    const DESCRIPTION: &'static str = "Layout for TableView supporting sticky sections";

    fn capabilities() -> LayoutCapabilities {
        TABLE_LAYOUT_CAPABILITIES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_advertises_both_axes_and_true_size() {
        let capabilities = TableLayout::<str>::capabilities();
        assert!(capabilities.sequence);
        assert!(capabilities.scrolling);
        assert!(capabilities.true_size);
        assert!(capabilities.sequential_scrolling_optimized);
        assert!(capabilities.supports(Axis::Vertical));
        assert!(capabilities.supports(Axis::Horizontal));
        assert!(!capabilities.debug.test_prev);
    }

    #[test]
    fn descriptor_identity() {
        assert_eq!(TableLayout::<str>::NAME, "TableLayout");
        assert_eq!(
            TableLayout::<str>::DESCRIPTION,
            "Layout for TableView supporting sticky sections"
        );
    }
}
