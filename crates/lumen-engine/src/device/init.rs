/// Surface and device preferences for [`Gpu::new`](super::Gpu::new).
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Pick an `*Srgb` format if the surface offers one.
    ///
    /// Overlay colors are authored as plain `[0, 1]` values, so the default is
    /// a linear (UNORM) format that writes them through unchanged.
    pub prefer_srgb: bool,

    pub present_mode: wgpu::PresentMode,

    /// Composite alpha modes in order of preference.
    ///
    /// A see-through overlay needs a non-opaque mode; the first supported entry
    /// wins, otherwise whatever the surface reports first is used.
    pub alpha_modes: Vec<wgpu::CompositeAlphaMode>,

    pub required_features: wgpu::Features,

    /// Device limits; the renderer checks `max_buffer_size` before each upload.
    pub required_limits: wgpu::Limits,

    /// Frames the compositor may queue ahead; low keeps the overlay in step with the target.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: false,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_modes: vec![
                wgpu::CompositeAlphaMode::PreMultiplied,
                wgpu::CompositeAlphaMode::PostMultiplied,
            ],
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}
