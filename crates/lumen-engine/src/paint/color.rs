/// Straight (non-premultiplied) RGBA color, each channel in `[0, 1]`.
///
/// The overlay pipeline blends with `SrcAlpha / OneMinusSrcAlpha`, so colors
/// travel to the GPU unmultiplied. Global alpha scales only the `a` channel.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Same color with alpha multiplied by `scale`.
    #[inline]
    pub fn with_alpha_scale(self, scale: f32) -> Self {
        Self { a: self.a * scale, ..self }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}
