//! Sticky section header tracking and pinning.
//!
//! The [`StickyHeaderLocator`] watches nodes as the placement scans commit
//! them and works out which section header owns the top of the viewport, and
//! where the next section begins. [`pin_sticky_header`] then turns the
//! header's scanned record into its pinned one.

use stickylist_ui_layout::{Axis, PlacementRecord};

/// Depth of a pinned header. Ordinary cells sit at depth 0.
pub const STICKY_HEADER_DEPTH: f32 = 1.0;

/// A section header node together with a record committed for it.
#[derive(Clone, Debug, PartialEq)]
pub struct StickyHeader<N> {
    pub node: N,
    pub record: PlacementRecord,
}

#[derive(Clone, Debug)]
enum LocatorState<N> {
    /// Nothing relevant seen yet.
    Searching,
    /// A header was seen before any visible cell.
    CandidateFound(StickyHeader<N>),
    /// A visible cell is known; a header candidate may or may not be.
    FirstVisibleFound {
        first_visible: N,
        candidate: Option<StickyHeader<N>>,
    },
}

/// What the locator settled on once the scans are over.
#[derive(Clone, Debug)]
pub(crate) struct LocatedHeader<N> {
    pub(crate) candidate: Option<StickyHeader<N>>,
    pub(crate) first_visible: Option<N>,
    pub(crate) header_overlap_offset: Option<f32>,
}

/// Scan-scoped header search state. Lives for one pass only.
///
/// Forward and backward scans report nodes through separate methods because
/// the rules differ by direction: going forward the latest header before the
/// first visible cell wins, going backward a header that turns up behind a
/// visible cell belongs to the following section and is dropped.
#[derive(Clone, Debug)]
pub(crate) struct StickyHeaderLocator<N> {
    state: LocatorState<N>,
    header_overlap_offset: Option<f32>,
}

impl<N> StickyHeaderLocator<N> {
    pub(crate) fn new() -> Self {
        Self {
            state: LocatorState::Searching,
            header_overlap_offset: None,
        }
    }

    pub(crate) fn has_candidate(&self) -> bool {
        match &self.state {
            LocatorState::Searching => false,
            LocatorState::CandidateFound(_) => true,
            LocatorState::FirstVisibleFound { candidate, .. } => candidate.is_some(),
        }
    }

    fn take_state(&mut self) -> LocatorState<N> {
        std::mem::replace(&mut self.state, LocatorState::Searching)
    }

    /// A header placed by the forward scan at `leading_edge`.
    pub(crate) fn forward_section(&mut self, header: StickyHeader<N>, leading_edge: f32) {
        self.state = match self.take_state() {
            LocatorState::Searching | LocatorState::CandidateFound(_) => {
                LocatorState::CandidateFound(header)
            }
            visible @ LocatorState::FirstVisibleFound { .. } => {
                if self.header_overlap_offset.is_none() {
                    self.header_overlap_offset = Some(leading_edge);
                }
                visible
            }
        };
    }

    /// A cell placed by the forward scan, ending at `trailing_edge`.
    pub(crate) fn forward_cell(&mut self, node: N, trailing_edge: f32) {
        if trailing_edge < 0.0 {
            return;
        }
        self.state = match self.take_state() {
            LocatorState::Searching => LocatorState::FirstVisibleFound {
                first_visible: node,
                candidate: None,
            },
            LocatorState::CandidateFound(candidate) => LocatorState::FirstVisibleFound {
                first_visible: node,
                candidate: Some(candidate),
            },
            visible @ LocatorState::FirstVisibleFound { .. } => visible,
        };
    }

    /// A header placed by the backward scan.
    pub(crate) fn backward_section(&mut self, header: StickyHeader<N>) {
        self.state = match self.take_state() {
            LocatorState::Searching => LocatorState::CandidateFound(header),
            found @ LocatorState::CandidateFound(_) => found,
            LocatorState::FirstVisibleFound {
                first_visible,
                candidate,
            } => LocatorState::FirstVisibleFound {
                first_visible,
                candidate: candidate.or(Some(header)),
            },
        };
    }

    /// A cell placed by the backward scan, ending at `trailing_edge`.
    ///
    /// Any header candidate found so far sits after this cell, so it starts
    /// the next section: its leading edge becomes the overlap offset and the
    /// search for this cell's own header starts over.
    pub(crate) fn backward_cell(&mut self, node: N, trailing_edge: f32) {
        if trailing_edge < 0.0 {
            return;
        }
        if self.has_candidate() {
            self.header_overlap_offset = Some(trailing_edge);
        }
        self.state = LocatorState::FirstVisibleFound {
            first_visible: node,
            candidate: None,
        };
    }

    /// A header found by searching past the start of the window.
    pub(crate) fn adopt_backfilled(&mut self, header: StickyHeader<N>) {
        self.state = match self.take_state() {
            LocatorState::FirstVisibleFound { first_visible, .. } => {
                LocatorState::FirstVisibleFound {
                    first_visible,
                    candidate: Some(header),
                }
            }
            LocatorState::Searching | LocatorState::CandidateFound(_) => {
                LocatorState::CandidateFound(header)
            }
        };
    }

    pub(crate) fn finish(self) -> LocatedHeader<N> {
        let (candidate, first_visible) = match self.state {
            LocatorState::Searching => (None, None),
            LocatorState::CandidateFound(candidate) => (Some(candidate), None),
            LocatorState::FirstVisibleFound {
                first_visible,
                candidate,
            } => (candidate, Some(first_visible)),
        };
        LocatedHeader {
            candidate,
            first_visible,
            header_overlap_offset: self.header_overlap_offset,
        }
    }
}

/// Final record for the active header.
///
/// The header is moved to the viewport top and raised above the cells. If it
/// is longer than the space left before the next section starts
/// (`header_overlap_offset`), it is pushed up instead so that its trailing
/// edge meets that section. Size and scroll length are kept.
pub(crate) fn pin_sticky_header(
    scanned: &PlacementRecord,
    header_overlap_offset: Option<f32>,
    axis: Axis,
) -> PlacementRecord {
    let extent = scanned.main_extent(axis);
    let main = match header_overlap_offset {
        Some(overlap) if extent > overlap => overlap - extent,
        _ => 0.0,
    };
    PlacementRecord {
        translate: axis
            .with_main_offset(scanned.translate, main)
            .with_depth(STICKY_HEADER_DEPTH),
        ..*scanned
    }
}
