//! Fixture data: a flat list of section headers and cells.

/// Whether a fixture item is a section header or an ordinary cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FixtureKind {
    Section,
    Cell,
}

/// One item of a fixture list, as seen by classification callbacks.
#[derive(Clone, Debug, PartialEq)]
pub struct FixtureItem {
    pub label: String,
    pub kind: FixtureKind,
    /// Natural extent along whatever the main axis turns out to be.
    pub extent: f32,
}

impl FixtureItem {
    pub fn section(label: impl Into<String>, extent: f32) -> Self {
        Self {
            label: label.into(),
            kind: FixtureKind::Section,
            extent,
        }
    }

    pub fn cell(label: impl Into<String>, extent: f32) -> Self {
        Self {
            label: label.into(),
            kind: FixtureKind::Cell,
            extent,
        }
    }

    pub fn is_section(&self) -> bool {
        self.kind == FixtureKind::Section
    }
}

/// Section predicate for fixture items, ready to hand to layout options.
pub fn is_fixture_section(item: &FixtureItem) -> bool {
    item.is_section()
}

/// Builder for fixture lists.
///
/// ```
/// use stickylist_testing::TableFixture;
///
/// let items = TableFixture::new()
///     .section("A", 20.0)
///     .cells("a", 3, 50.0)
///     .section("B", 20.0)
///     .cell("b1", 50.0)
///     .build();
/// assert_eq!(items.len(), 6);
/// assert_eq!(items[2].label, "a2");
/// ```
#[derive(Clone, Debug, Default)]
pub struct TableFixture {
    items: Vec<FixtureItem>,
}

impl TableFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(mut self, label: impl Into<String>, extent: f32) -> Self {
        self.items.push(FixtureItem::section(label, extent));
        self
    }

    pub fn cell(mut self, label: impl Into<String>, extent: f32) -> Self {
        self.items.push(FixtureItem::cell(label, extent));
        self
    }

    /// Appends `count` cells labelled `{prefix}1`, `{prefix}2`, ...
    pub fn cells(mut self, prefix: &str, count: usize, extent: f32) -> Self {
        for n in 1..=count {
            self.items.push(FixtureItem::cell(format!("{prefix}{n}"), extent));
        }
        self
    }

    /// Appends one cell per extent, labelled like [`cells`](Self::cells).
    pub fn cells_sized(mut self, prefix: &str, extents: &[f32]) -> Self {
        for (n, &extent) in extents.iter().enumerate() {
            let label = format!("{prefix}{}", n + 1);
            self.items.push(FixtureItem::cell(label, extent));
        }
        self
    }

    pub fn build(self) -> Vec<FixtureItem> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_order_and_kinds() {
        let items = TableFixture::new()
            .section("A", 20.0)
            .cells_sized("a", &[10.0, 30.0])
            .build();
        assert_eq!(items.len(), 3);
        assert!(items[0].is_section());
        assert_eq!(items[1], FixtureItem::cell("a1", 10.0));
        assert_eq!(items[2], FixtureItem::cell("a2", 30.0));
        assert!(!is_fixture_section(&items[2]));
    }
}
