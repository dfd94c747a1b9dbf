//! A contact list grouped by initial, exposed as a layout host.

use std::collections::BTreeMap;
use stickylist_ui_layout::{Axis, LayoutContext, PlacementRecord, ScrollWindow, Size};

const LETTER_EXTENT: f32 = 24.0;
const CONTACT_EXTENT: f32 = 44.0;
const CONTACT_WITH_NOTE_EXTENT: f32 = 64.0;

/// Extra room laid out beyond each viewport edge.
const OVERSCAN: f32 = 40.0;

#[derive(Clone, Debug)]
pub enum ContactRow {
    Letter(char),
    Contact { name: String, note: Option<String> },
}

impl ContactRow {
    pub fn is_letter(&self) -> bool {
        matches!(self, ContactRow::Letter(_))
    }

    fn extent(&self) -> f32 {
        match self {
            ContactRow::Letter(_) => LETTER_EXTENT,
            ContactRow::Contact { note: None, .. } => CONTACT_EXTENT,
            ContactRow::Contact { note: Some(_), .. } => CONTACT_WITH_NOTE_EXTENT,
        }
    }

    pub fn title(&self) -> String {
        match self {
            ContactRow::Letter(letter) => format!("[{letter}]"),
            ContactRow::Contact { name, note: None } => name.clone(),
            ContactRow::Contact {
                name,
                note: Some(note),
            } => format!("{name} ({note})"),
        }
    }
}

/// Groups `(name, note)` pairs under their uppercase initial.
pub fn contact_rows(contacts: &[(&str, Option<&str>)]) -> Vec<ContactRow> {
    let mut groups: BTreeMap<char, Vec<ContactRow>> = BTreeMap::new();
    for (name, note) in contacts {
        let initial = name
            .chars()
            .next()
            .map_or('#', |c| c.to_ascii_uppercase());
        groups.entry(initial).or_default().push(ContactRow::Contact {
            name: (*name).to_string(),
            note: note.map(str::to_string),
        });
    }

    let mut rows = Vec::new();
    for (letter, mut contacts) in groups {
        rows.push(ContactRow::Letter(letter));
        rows.append(&mut contacts);
    }
    rows
}

/// Host for one pass over the contact list at a given scroll position.
///
/// The row containing `scroll_position` becomes the cursor anchor and is
/// placed at the (zero or negative) offset that makes it line up with the
/// viewport top.
pub struct ContactListHost<'a> {
    rows: &'a [ContactRow],
    viewport: Size,
    window: ScrollWindow,
    anchor: usize,
    next_index: usize,
    prev_index: usize,
    placements: Vec<Option<PlacementRecord>>,
}

impl<'a> ContactListHost<'a> {
    pub fn new(rows: &'a [ContactRow], viewport: Size, scroll_position: f32) -> Self {
        let mut start = 0.0;
        let mut anchor = rows.len();
        for (index, row) in rows.iter().enumerate() {
            if scroll_position < start + row.extent() {
                anchor = index;
                break;
            }
            start += row.extent();
        }
        let offset = start - scroll_position;
        Self {
            rows,
            viewport,
            window: ScrollWindow::new(
                offset.min(-OVERSCAN),
                offset,
                viewport.height + OVERSCAN,
            ),
            anchor,
            next_index: anchor,
            prev_index: anchor,
            placements: vec![None; rows.len()],
        }
    }

    pub fn anchor(&self) -> usize {
        self.anchor
    }

    /// Placed rows, sorted by depth and then by position.
    pub fn placed(&self) -> Vec<(&ContactRow, PlacementRecord)> {
        let mut placed: Vec<_> = self
            .rows
            .iter()
            .zip(&self.placements)
            .filter_map(|(row, record)| record.map(|record| (row, record)))
            .collect();
        placed.sort_by(|(_, a), (_, b)| {
            a.translate
                .z
                .total_cmp(&b.translate.z)
                .then(a.translate.y.total_cmp(&b.translate.y))
        });
        placed
    }
}

impl LayoutContext for ContactListHost<'_> {
    type Node = usize;
    type RenderNode = ContactRow;

    fn size(&self) -> Size {
        self.viewport
    }

    fn axis(&self) -> Axis {
        Axis::Vertical
    }

    fn scroll_window(&self) -> ScrollWindow {
        self.window
    }

    fn next(&mut self) -> Option<usize> {
        (self.next_index < self.rows.len()).then(|| {
            self.next_index += 1;
            self.next_index - 1
        })
    }

    fn prev(&mut self) -> Option<usize> {
        self.prev_index = self.prev_index.checked_sub(1)?;
        Some(self.prev_index)
    }

    fn resolve_size(&mut self, node: &usize, container_size: Size) -> Size {
        let extent = self.rows.get(*node).map_or(0.0, ContactRow::extent);
        Size::new(container_size.width, extent)
    }

    fn render_node(&self, node: &usize) -> &ContactRow {
        &self.rows[*node]
    }

    fn set(&mut self, node: &usize, record: PlacementRecord) {
        if let Some(slot) = self.placements.get_mut(*node) {
            *slot = Some(record);
        }
    }
}
