use super::Vec2;

/// Axis-aligned rectangle in pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    /// Corners in clockwise screen order: top-left, top-right, bottom-right, bottom-left.
    ///
    /// Not normalized; a negative width or height mirrors the corners.
    #[inline]
    pub fn corners(self) -> [Vec2; 4] {
        let Vec2 { x: x0, y: y0 } = self.min();
        let Vec2 { x: x1, y: y1 } = self.max();
        [
            Vec2::new(x0, y0),
            Vec2::new(x1, y0),
            Vec2::new(x1, y1),
            Vec2::new(x0, y1),
        ]
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(x, y, w, h)
    }

    #[test]
    fn corners_are_clockwise_from_top_left() {
        let [tl, tr, br, bl] = r(10.0, 20.0, 30.0, 40.0).corners();
        assert_eq!(tl, Vec2::new(10.0, 20.0));
        assert_eq!(tr, Vec2::new(40.0, 20.0));
        assert_eq!(br, Vec2::new(40.0, 60.0));
        assert_eq!(bl, Vec2::new(10.0, 60.0));
    }

    #[test]
    fn center_is_midpoint() {
        assert_eq!(r(0.0, 0.0, 10.0, 20.0).center(), Vec2::new(5.0, 10.0));
    }

    #[test]
    fn normalized_negative_size() {
        let n = r(10.0, 10.0, -4.0, -3.0).normalized();
        assert_eq!(n, r(6.0, 7.0, 4.0, 3.0));
    }

    #[test]
    fn normalized_positive_is_identity() {
        let rect = r(1.0, 2.0, 10.0, 20.0);
        assert_eq!(rect.normalized(), rect);
    }
}
