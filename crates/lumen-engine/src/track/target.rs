/// Screen rectangle of the tracked window, in physical pixels.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct TrackedRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl TrackedRect {
    #[inline]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// True when the two rects differ in size (not just position).
    #[inline]
    pub fn resized_from(self, previous: TrackedRect) -> bool {
        self.width != previous.width || self.height != previous.height
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Source of the tracked window's rectangle.
///
/// Polled once per frame. Returning `None` means the window is gone and the
/// overlay shuts down cleanly.
pub trait TargetWindow {
    fn rect(&mut self) -> Option<TrackedRect>;
}

impl<F> TargetWindow for F
where
    F: FnMut() -> Option<TrackedRect>,
{
    fn rect(&mut self) -> Option<TrackedRect> {
        self()
    }
}

/// A target that never moves; useful for demos and for overlaying a fixed
/// screen region.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FixedTarget(pub TrackedRect);

impl TargetWindow for FixedTarget {
    fn rect(&mut self) -> Option<TrackedRect> {
        Some(self.0)
    }
}
