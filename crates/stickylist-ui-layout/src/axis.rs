use stickylist_ui_graphics::{Size, Translation};

/// The scroll direction along which items stack.
///
/// The main axis is the one items are laid out on and scrolled along; the
/// cross axis spans the viewport and is the same for every item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    /// Horizontal main axis.
    /// Main axis: left to right
    /// Cross axis: top to bottom
    Horizontal,

    /// Vertical main axis.
    /// Main axis: top to bottom
    /// Cross axis: left to right
    #[default]
    Vertical,
}

impl Axis {
    /// Returns the opposite axis.
    #[inline]
    pub fn cross_axis(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Returns true if this is the horizontal axis.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Axis::Horizontal)
    }

    /// Returns true if this is the vertical axis.
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Axis::Vertical)
    }

    /// Extent of `size` along this axis.
    #[inline]
    pub fn main_extent(self, size: Size) -> f32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    /// Extent of `size` across this axis.
    #[inline]
    pub fn cross_extent(self, size: Size) -> f32 {
        self.cross_axis().main_extent(size)
    }

    /// Builds a size from main and cross extents.
    pub fn size(self, main: f32, cross: f32) -> Size {
        match self {
            Axis::Horizontal => Size::new(main, cross),
            Axis::Vertical => Size::new(cross, main),
        }
    }

    /// Builds a translation at `main` along this axis, 0 across it.
    pub fn translation(self, main: f32, depth: f32) -> Translation {
        match self {
            Axis::Horizontal => Translation::new(main, 0.0, depth),
            Axis::Vertical => Translation::new(0.0, main, depth),
        }
    }

    /// Component of `translation` along this axis.
    #[inline]
    pub fn main_offset(self, translation: Translation) -> f32 {
        match self {
            Axis::Horizontal => translation.x,
            Axis::Vertical => translation.y,
        }
    }

    /// Replaces the component of `translation` along this axis.
    pub fn with_main_offset(self, translation: Translation, main: f32) -> Translation {
        match self {
            Axis::Horizontal => Translation { x: main, ..translation },
            Axis::Vertical => Translation { y: main, ..translation },
        }
    }
}

#[cfg(test)]
#[path = "tests/axis_tests.rs"]
mod tests;
