//! In-memory [`LayoutContext`] over a vector of fixture items.

use crate::fixture::FixtureItem;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use stickylist_ui_layout::{Axis, LayoutContext, PlacementRecord, ScrollWindow, Size};

/// Every commit made for a node, oldest first.
///
/// A node is committed once by its scan and at most once more when it is the
/// pinned header, so two entries stay inline.
pub type CommitLog = SmallVec<[PlacementRecord; 2]>;

/// Host backed by a `Vec` of fixture items. Nodes are item indices.
///
/// The cursor starts at `anchor`: `next()` yields `anchor`, `anchor + 1`, ...
/// and `prev()` yields `anchor - 1`, `anchor - 2`, ... Commits are logged per
/// node so tests can check both the final record and how many times a node
/// was committed.
#[derive(Clone, Debug)]
pub struct VecLayoutContext {
    items: Vec<FixtureItem>,
    axis: Axis,
    viewport: Size,
    window: ScrollWindow,
    anchor: usize,
    next_index: usize,
    prev_index: usize,
    commits: FxHashMap<usize, CommitLog>,
    commit_count: usize,
    resolve_size_calls: usize,
    prev_calls: usize,
}

impl VecLayoutContext {
    pub fn new(
        items: Vec<FixtureItem>,
        axis: Axis,
        viewport: Size,
        window: ScrollWindow,
        anchor: usize,
    ) -> Self {
        let anchor = anchor.min(items.len());
        Self {
            items,
            axis,
            viewport,
            window,
            anchor,
            next_index: anchor,
            prev_index: anchor,
            commits: FxHashMap::default(),
            commit_count: 0,
            resolve_size_calls: 0,
            prev_calls: 0,
        }
    }

    /// Vertical context.
    pub fn vertical(
        items: Vec<FixtureItem>,
        viewport: Size,
        window: ScrollWindow,
        anchor: usize,
    ) -> Self {
        Self::new(items, Axis::Vertical, viewport, window, anchor)
    }

    /// Puts the cursor back at the anchor and forgets all commits and counters.
    pub fn rewind(&mut self) {
        self.next_index = self.anchor;
        self.prev_index = self.anchor;
        self.commits.clear();
        self.commit_count = 0;
        self.resolve_size_calls = 0;
        self.prev_calls = 0;
    }

    pub fn items(&self) -> &[FixtureItem] {
        &self.items
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.items.iter().position(|item| item.label == label)
    }

    /// All commits made for the item at `index`.
    pub fn commits_for(&self, index: usize) -> &[PlacementRecord] {
        self.commits
            .get(&index)
            .map(|log| log.as_slice())
            .unwrap_or(&[])
    }

    /// The last record committed for the item at `index`.
    pub fn final_record(&self, index: usize) -> Option<PlacementRecord> {
        self.commits_for(index).last().copied()
    }

    /// Last record committed for the item labelled `label`.
    pub fn final_record_of(&self, label: &str) -> Option<PlacementRecord> {
        self.index_of(label).and_then(|index| self.final_record(index))
    }

    /// Indices that received at least one commit, ascending.
    pub fn committed_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.commits.keys().copied().collect();
        indices.sort_unstable();
        indices
    }

    /// Final records by index, ascending.
    pub fn final_records(&self) -> Vec<(usize, PlacementRecord)> {
        self.committed_indices()
            .into_iter()
            .filter_map(|index| self.final_record(index).map(|record| (index, record)))
            .collect()
    }

    /// Total `set` calls.
    pub fn commit_count(&self) -> usize {
        self.commit_count
    }

    pub fn resolve_size_calls(&self) -> usize {
        self.resolve_size_calls
    }

    /// `prev()` calls, including the one that found the cursor exhausted.
    pub fn prev_calls(&self) -> usize {
        self.prev_calls
    }
}

impl LayoutContext for VecLayoutContext {
    type Node = usize;
    type RenderNode = FixtureItem;

    fn size(&self) -> Size {
        self.viewport
    }

    fn axis(&self) -> Axis {
        self.axis
    }

    fn scroll_window(&self) -> ScrollWindow {
        self.window
    }

    fn next(&mut self) -> Option<usize> {
        if self.next_index >= self.items.len() {
            return None;
        }
        let index = self.next_index;
        self.next_index += 1;
        Some(index)
    }

    fn prev(&mut self) -> Option<usize> {
        self.prev_calls += 1;
        if self.prev_index == 0 {
            return None;
        }
        self.prev_index -= 1;
        Some(self.prev_index)
    }

    fn resolve_size(&mut self, node: &usize, container_size: Size) -> Size {
        self.resolve_size_calls += 1;
        let extent = self.items.get(*node).map_or(0.0, |item| item.extent);
        self.axis.size(extent, self.axis.cross_extent(container_size))
    }

    fn render_node(&self, node: &usize) -> &FixtureItem {
        &self.items[*node]
    }

    fn set(&mut self, node: &usize, record: PlacementRecord) {
        self.commit_count += 1;
        self.commits.entry(*node).or_default().push(record);
    }
}
