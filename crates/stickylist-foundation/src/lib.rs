//! Layout functions for Stickylist
//!
//! The [`table`] module implements a virtualized one-dimensional list whose
//! section headers stick to the top of the viewport while their cells are
//! visible and are pushed off by the next section.

pub mod table;

pub use table::{
    layout_table, ItemSize, SectionPredicate, StickyHeader, TableLayout, TableLayoutOptions,
    TableLayoutResult,
};
