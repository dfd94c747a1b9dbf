use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stickylist_foundation::{layout_table, ItemSize, TableLayoutOptions};
use stickylist_testing::{is_fixture_section, FixtureItem, TableFixture, VecLayoutContext};
use stickylist_ui_layout::{ScrollWindow, Size};

const SECTION_COUNT: usize = 50;
const ROWS_PER_SECTION_SAMPLES: &[usize] = &[8, 64, 512];
const ROW_EXTENT: f32 = 48.0;
const HEADER_EXTENT: f32 = 28.0;
const VIEWPORT: Size = Size {
    width: 1080.0,
    height: 1920.0,
};

fn fixture(sections: usize, rows_per_section: usize) -> Vec<FixtureItem> {
    let mut table = TableFixture::new();
    for section in 0..sections {
        table = table
            .section(format!("Section {section}"), HEADER_EXTENT)
            .cells(&format!("{section}-"), rows_per_section, ROW_EXTENT);
    }
    table.build()
}

/// Context anchored in the middle of the last section, so the active header
/// is far above the window and has to be backfilled.
fn mid_section_context(sections: usize, rows_per_section: usize) -> VecLayoutContext {
    let items = fixture(sections, rows_per_section);
    let anchor = items.len() - rows_per_section / 2;
    VecLayoutContext::vertical(
        items,
        VIEWPORT,
        ScrollWindow::new(0.0, -12.0, VIEWPORT.height),
        anchor,
    )
}

fn bench_dynamic_sizing(c: &mut Criterion) {
    let options =
        TableLayoutOptions::<FixtureItem>::new().with_section_predicate(is_fixture_section);
    let mut group = c.benchmark_group("table_layout_dynamic");
    for &rows_per_section in ROWS_PER_SECTION_SAMPLES {
        group.bench_with_input(
            BenchmarkId::new("rows_per_section", rows_per_section),
            &rows_per_section,
            |b, &rows_per_section| {
                let mut context = mid_section_context(SECTION_COUNT, rows_per_section);
                b.iter(|| {
                    context.rewind();
                    black_box(layout_table(&mut context, &options));
                });
            },
        );
    }
    group.finish();
}

fn bench_fixed_sizing(c: &mut Criterion) {
    let options = TableLayoutOptions::<FixtureItem>::new()
        .with_item_size(ItemSize::Fixed(ROW_EXTENT))
        .with_section_predicate(is_fixture_section);
    let mut group = c.benchmark_group("table_layout_fixed");
    for &rows_per_section in ROWS_PER_SECTION_SAMPLES {
        group.bench_with_input(
            BenchmarkId::new("rows_per_section", rows_per_section),
            &rows_per_section,
            |b, &rows_per_section| {
                let mut context = mid_section_context(SECTION_COUNT, rows_per_section);
                b.iter(|| {
                    context.rewind();
                    black_box(layout_table(&mut context, &options));
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_dynamic_sizing, bench_fixed_sizing);
criterion_main!(benches);
