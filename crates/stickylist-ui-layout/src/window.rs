//! Scroll window bounding a single layout pass.

/// Scalars along the main axis that bound one layout pass.
///
/// `offset` is where the forward scan starts placing items; the forward scan
/// runs until `end` and the backward scan until `start`. Hosts supply
/// `start <= offset <= end`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ScrollWindow {
    pub start: f32,
    pub offset: f32,
    pub end: f32,
}

impl ScrollWindow {
    pub const fn new(start: f32, offset: f32, end: f32) -> Self {
        Self { start, offset, end }
    }

    /// Returns true if `start <= offset <= end`.
    pub fn is_monotonic(&self) -> bool {
        self.start <= self.offset && self.offset <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monotonic_window() {
        assert!(ScrollWindow::new(-100.0, 0.0, 400.0).is_monotonic());
        assert!(ScrollWindow::new(0.0, 0.0, 0.0).is_monotonic());
        assert!(!ScrollWindow::new(10.0, 0.0, 400.0).is_monotonic());
    }
}
