//! Cursor and commit-log behaviour of the in-memory host.

use stickylist_testing::*;
use stickylist_ui_layout::{Axis, LayoutContext, PlacementRecord, ScrollWindow, Size};

fn three_cells(anchor: usize) -> VecLayoutContext {
    let items = TableFixture::new().cells_sized("c", &[10.0, 20.0, 30.0]).build();
    VecLayoutContext::vertical(
        items,
        Size::new(100.0, 200.0),
        ScrollWindow::new(0.0, 0.0, 200.0),
        anchor,
    )
}

#[test]
fn cursor_walks_out_from_anchor() {
    let mut context = three_cells(1);
    assert_eq!(context.next(), Some(1));
    assert_eq!(context.next(), Some(2));
    assert_eq!(context.next(), None);
    assert_eq!(context.prev(), Some(0));
    assert_eq!(context.prev(), None);
    assert_eq!(context.prev_calls(), 2);
}

#[test]
fn anchor_past_the_end_yields_nothing_forward() {
    let mut context = three_cells(10);
    assert_eq!(context.next(), None);
    assert_eq!(context.prev(), Some(2));
}

#[test]
fn resolve_size_uses_axis_and_container_cross_extent() {
    let items = TableFixture::new().cell("c1", 42.0).build();
    let mut context = VecLayoutContext::new(
        items,
        Axis::Horizontal,
        Size::new(300.0, 80.0),
        ScrollWindow::new(0.0, 0.0, 300.0),
        0,
    );
    let size = context.resolve_size(&0, Size::new(300.0, 80.0));
    assert_eq!(size, Size::new(42.0, 80.0));
    assert_eq!(context.resolve_size_calls(), 1);
}

#[test]
fn commit_log_keeps_every_commit_and_rewind_clears_it() {
    let mut context = three_cells(0);
    let first = PlacementRecord::item(Axis::Vertical, Size::new(100.0, 200.0), 0.0, 10.0);
    let second = PlacementRecord {
        scroll_length: None,
        ..first
    };
    context.set(&0, first);
    context.set(&0, second);
    context.set(&2, first);

    assert_eq!(context.commits_for(0), &[first, second]);
    assert_eq!(context.final_record(0), Some(second));
    assert_eq!(context.final_record_of("c3"), Some(first));
    assert_eq!(context.committed_indices(), vec![0, 2]);
    assert_eq!(context.commit_count(), 3);

    let _ = context.next();
    context.rewind();
    assert_eq!(context.commit_count(), 0);
    assert!(context.commits_for(0).is_empty());
    assert_eq!(context.next(), Some(0));
}
