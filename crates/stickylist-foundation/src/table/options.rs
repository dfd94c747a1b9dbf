//! Options accepted by the table layout.

use std::fmt;
use std::rc::Rc;

/// Host callback that tells section headers apart from ordinary cells.
pub type SectionPredicate<R> = Rc<dyn Fn(&R) -> bool>;

/// How long each item is along the main axis.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum ItemSize {
    /// Ask the host to measure every node.
    #[default]
    Dynamic,
    /// Every node has the same extent. Zero is allowed.
    Fixed(f32),
    /// Every node is exactly as long as the viewport.
    FillViewport,
}

impl ItemSize {
    /// Maps a raw configured value: absent means dynamic, a number means fixed.
    pub fn from_config(value: Option<f32>) -> Self {
        match value {
            Some(extent) => ItemSize::Fixed(extent),
            None => ItemSize::Dynamic,
        }
    }

    /// Returns true if a fixed extent is unusable as a size.
    pub fn is_malformed(&self) -> bool {
        match self {
            ItemSize::Fixed(extent) => !extent.is_finite() || *extent < 0.0,
            ItemSize::Dynamic | ItemSize::FillViewport => false,
        }
    }
}

/// Configuration for the table layout.
///
/// `R` is the host's render node type, the value handed to the section
/// predicate. Without a predicate the layout tiles items sequentially and
/// never pins anything.
pub struct TableLayoutOptions<R: ?Sized> {
    pub item_size: ItemSize,
    pub section_predicate: Option<SectionPredicate<R>>,
}

impl<R: ?Sized> TableLayoutOptions<R> {
    pub fn new() -> Self {
        Self {
            item_size: ItemSize::Dynamic,
            section_predicate: None,
        }
    }

    pub fn with_item_size(mut self, item_size: ItemSize) -> Self {
        self.item_size = item_size;
        self
    }

    pub fn with_section_predicate(mut self, predicate: impl Fn(&R) -> bool + 'static) -> Self {
        self.section_predicate = Some(Rc::new(predicate));
        self
    }

    /// Classifies a render node. Always false without a predicate.
    #[inline]
    pub(crate) fn is_section(&self, render_node: &R) -> bool {
        self.section_predicate
            .as_ref()
            .is_some_and(|predicate| predicate(render_node))
    }

    #[inline]
    pub(crate) fn has_sections(&self) -> bool {
        self.section_predicate.is_some()
    }
}

impl<R: ?Sized> Default for TableLayoutOptions<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ?Sized> Clone for TableLayoutOptions<R> {
    fn clone(&self) -> Self {
        Self {
            item_size: self.item_size,
            section_predicate: self.section_predicate.clone(),
        }
    }
}

impl<R: ?Sized> fmt::Debug for TableLayoutOptions<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableLayoutOptions")
            .field("item_size", &self.item_size)
            .field("has_section_predicate", &self.section_predicate.is_some())
            .finish()
    }
}
