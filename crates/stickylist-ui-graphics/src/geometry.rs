//! Geometric primitives: Size, Translation

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };
}

/// Position of a placed item.
///
/// `x` and `y` are in layout coordinates relative to the viewport origin;
/// `z` is the stacking depth. Items with a larger `z` are drawn on top.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Translation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Translation {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub const ZERO: Translation = Translation {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Returns a copy raised to the given depth.
    pub fn with_depth(self, z: f32) -> Self {
        Self { z, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_depth_keeps_planar_components() {
        let translation = Translation::new(3.0, -4.0, 0.0).with_depth(1.0);
        assert_eq!(translation, Translation::new(3.0, -4.0, 1.0));
    }
}
