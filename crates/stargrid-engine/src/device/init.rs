/// Parameters used every time the window surface and device are (re)created.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an `*Srgb` surface format when available.
    ///
    /// Leave `false` when colors are authored as sRGB values and should reach
    /// the screen unchanged.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior). FIFO is supported everywhere.
    pub present_mode: wgpu::PresentMode,

    /// Optional alpha mode; falls back to the first supported mode.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Adapter selection hint. A 2D demo does not need the discrete GPU.
    pub power_preference: wgpu::PowerPreference,

    /// Hint for the swapchain depth; support depends on platform/backend.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: false,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            power_preference: wgpu::PowerPreference::LowPower,
            desired_maximum_frame_latency: 2,
        }
    }
}
