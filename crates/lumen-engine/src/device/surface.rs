use winit::dpi::PhysicalSize;

/// What the runtime should do after a failed frame acquisition.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; the next frame may render.
    Reconfigured,
    /// Transient failure; drop this frame.
    SkipFrame,
    /// Unrecoverable (out of memory); close the overlay.
    Fatal,
}

pub(crate) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    let first = *formats.first()?;

    let preferred = if prefer_srgb {
        [wgpu::TextureFormat::Bgra8UnormSrgb, wgpu::TextureFormat::Rgba8UnormSrgb]
    } else {
        [wgpu::TextureFormat::Bgra8Unorm, wgpu::TextureFormat::Rgba8Unorm]
    };

    Some(
        preferred
            .into_iter()
            .find(|f| formats.contains(f))
            .unwrap_or(first),
    )
}

pub(crate) fn choose_alpha_mode(
    supported: &[wgpu::CompositeAlphaMode],
    preferred: &[wgpu::CompositeAlphaMode],
) -> wgpu::CompositeAlphaMode {
    preferred
        .iter()
        .find(|m| supported.contains(m))
        .or_else(|| supported.first())
        .copied()
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

pub(crate) fn apply_resize(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &mut wgpu::SurfaceConfiguration,
    size: &mut PhysicalSize<u32>,
    new_size: PhysicalSize<u32>,
) {
    *size = new_size;

    // wgpu rejects 0x0 surfaces; configuration waits for a real size.
    if new_size.width == 0 || new_size.height == 0 {
        return;
    }

    config.width = new_size.width;
    config.height = new_size.height;
    surface.configure(device, config);
}

pub(crate) fn map_surface_error(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,
    err: wgpu::SurfaceError,
) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
            if size.width > 0 && size.height > 0 {
                surface.configure(device, config);
            }
            SurfaceErrorAction::Reconfigured
        }
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::{CompositeAlphaMode as Alpha, TextureFormat as Format};

    #[test]
    fn linear_format_preferred_by_default() {
        let formats = [Format::Bgra8UnormSrgb, Format::Bgra8Unorm];
        assert_eq!(choose_surface_format(&formats, false), Some(Format::Bgra8Unorm));
        assert_eq!(choose_surface_format(&formats, true), Some(Format::Bgra8UnormSrgb));
    }

    #[test]
    fn falls_back_to_first_format() {
        let formats = [Format::Rgba16Float];
        assert_eq!(choose_surface_format(&formats, false), Some(Format::Rgba16Float));
        assert_eq!(choose_surface_format(&[], false), None);
    }

    #[test]
    fn alpha_mode_follows_preference_order() {
        let supported = [Alpha::Opaque, Alpha::PostMultiplied, Alpha::PreMultiplied];
        let preferred = [Alpha::PreMultiplied, Alpha::PostMultiplied];
        assert_eq!(choose_alpha_mode(&supported, &preferred), Alpha::PreMultiplied);
    }

    #[test]
    fn alpha_mode_falls_back_to_surface() {
        assert_eq!(choose_alpha_mode(&[Alpha::Opaque], &[Alpha::PreMultiplied]), Alpha::Opaque);
        assert_eq!(choose_alpha_mode(&[], &[Alpha::PreMultiplied]), Alpha::Auto);
    }
}
