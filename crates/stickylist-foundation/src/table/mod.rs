//! Table layout with sticky section headers.
//!
//! A pass runs in four steps, all driven through the host's
//! [`LayoutContext`](stickylist_ui_layout::LayoutContext):
//!
//! 1. Forward placement from the scroll offset to the end of the window
//! 2. Backward placement from the scroll offset to the start of the window
//! 3. Backfill: if no header candidate is known yet, keep walking backwards
//!    until a section header turns up or the data runs out
//! 4. Pin the active header to the viewport top (or push it off when the
//!    next section is close) and commit it again above the cells
//!
//! Steps 1 and 2 feed every placed node to the sticky header locator.

mod item_sizing;
mod options;
mod sticky_header;
mod table_layout;

pub use options::{ItemSize, SectionPredicate, TableLayoutOptions};
pub use sticky_header::{StickyHeader, STICKY_HEADER_DEPTH};
pub use table_layout::{layout_table, TableLayout, TableLayoutResult};
