mod contacts;

use contacts::{contact_rows, ContactListHost, ContactRow};
use stickylist_foundation::{TableLayout, TableLayoutOptions};
use stickylist_ui_layout::{LayoutDescriptor, Size};

const CONTACTS: &[(&str, Option<&str>)] = &[
    ("Ada", None),
    ("Alan", Some("compilers")),
    ("Anita", None),
    ("Barbara", None),
    ("Bjarne", Some("templates")),
    ("Brian", None),
    ("Claude", None),
    ("Dennis", Some("unix")),
    ("Donald", None),
    ("Edsger", None),
    ("Frances", None),
    ("Grace", Some("cobol")),
    ("Guido", None),
];

const SCROLL_POSITIONS: &[f32] = &[0.0, 60.0, 150.0, 210.0, 330.0, 520.0];

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let rows = contact_rows(CONTACTS);
    let viewport = Size::new(360.0, 240.0);
    let layout = TableLayout::new(
        TableLayoutOptions::<ContactRow>::new().with_section_predicate(ContactRow::is_letter),
    );

    println!("=== {} ===", TableLayout::<ContactRow>::DESCRIPTION);
    println!(
        "{} rows, viewport {}x{}",
        rows.len(),
        viewport.width,
        viewport.height
    );

    for &scroll_position in SCROLL_POSITIONS {
        let mut host = ContactListHost::new(&rows, viewport, scroll_position);
        let result = layout.layout(&mut host);
        log::info!(
            "scroll {scroll_position}: anchor row {}, {} forward / {} backward, backfilled: {}",
            host.anchor(),
            result.forward_count,
            result.backward_count,
            result.backfilled
        );

        println!();
        println!("--- scrolled to {scroll_position} ---");
        for (row, record) in host.placed() {
            let pinned = if record.translate.z > 0.0 { "  <- pinned" } else { "" };
            println!(
                "{:>8.1} {:>6.1}  {}{}",
                record.translate.y,
                record.size.height,
                row.title(),
                pinned
            );
        }
    }
}
