use std::time::Instant;

use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId, WindowLevel};

use crate::coords::Viewport;
use crate::core::{App, AppControl, FrameCtx};
use crate::device::{Gpu, GpuInit};
use crate::draw::DrawList;
use crate::render::{FrameRenderer, RenderCtx};
use crate::track::{TargetWindow, TrackedRect};

/// Overlay window configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    /// Let mouse input fall through to the window underneath.
    pub click_through: bool,
    /// Exclude the overlay from screen and video capture.
    pub stream_proof: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "lumen".to_string(),
            click_through: true,
            stream_proof: false,
        }
    }
}

/// Entry point for the overlay frame loop.
pub struct Runtime;

impl Runtime {
    /// Opens the overlay over `target` and drives `app` once per frame until
    /// the target disappears, the app asks to exit, or the window is closed.
    pub fn run<A, T>(config: RuntimeConfig, gpu_init: GpuInit, target: T, app: A) -> Result<()>
    where
        A: App + 'static,
        T: TargetWindow + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = OverlayState::new(config, gpu_init, target, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct OverlayWindow {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct OverlayState<A, T> {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    target: T,
    app: A,

    // Field order matters on drop: GPU objects go before the window.
    renderer: Option<FrameRenderer>,
    overlay: Option<OverlayWindow>,

    draw: DrawList,
    last_rect: Option<TrackedRect>,
    started: Instant,
    frame_index: u64,

    exit_requested: bool,
    fatal: Option<anyhow::Error>,
}

impl<A, T> OverlayState<A, T>
where
    A: App + 'static,
    T: TargetWindow + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, target: T, app: A) -> Self {
        Self {
            config,
            gpu_init,
            target,
            app,
            renderer: None,
            overlay: None,
            draw: DrawList::default(),
            last_rect: None,
            started: Instant::now(),
            frame_index: 0,
            exit_requested: false,
            fatal: None,
        }
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }

    fn create_overlay(&mut self, event_loop: &ActiveEventLoop, rect: TrackedRect) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_decorations(false)
            .with_transparent(true)
            .with_resizable(false)
            .with_window_level(WindowLevel::AlwaysOnTop)
            .with_content_protected(self.config.stream_proof)
            .with_position(PhysicalPosition::new(rect.x, rect.y))
            .with_inner_size(PhysicalSize::new(rect.width.max(1), rect.height.max(1)));

        let window = event_loop
            .create_window(attrs)
            .context("failed to create overlay window")?;

        if self.config.click_through {
            if let Err(e) = window.set_cursor_hittest(false) {
                log::warn!("click-through unavailable on this platform: {e}");
            }
        }

        let size = window.inner_size();
        let gpu_init = self.gpu_init.clone();

        let overlay = OverlayWindowTryBuilder {
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("GPU initialization failed for overlay window")?;

        let renderer = overlay.with_gpu(|gpu| {
            FrameRenderer::new(&RenderCtx::new(gpu.device(), gpu.queue(), gpu.surface_format()))
        });

        self.draw.set_viewport(viewport_of(size));
        self.renderer = Some(renderer);
        self.overlay = Some(overlay);
        self.last_rect = Some(rect);

        log::info!(
            "overlay opened at {},{} {}x{} (stream-proof {})",
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            if self.config.stream_proof { "on" } else { "off" },
        );
        Ok(())
    }

    /// Moves/resizes the overlay onto the target's current rect.
    fn follow_target(&mut self, rect: TrackedRect) {
        let Some(overlay) = self.overlay.as_mut() else { return };
        let previous = self.last_rect.replace(rect);
        if previous == Some(rect) {
            return;
        }

        overlay.with_window(|w| w.set_outer_position(PhysicalPosition::new(rect.x, rect.y)));

        if previous.is_none_or(|p| rect.resized_from(p)) && !rect.is_empty() {
            let requested = PhysicalSize::new(rect.width, rect.height);
            // Some platforms apply the size synchronously; others report it via `Resized`.
            if let Some(size) = overlay.with_window(|w| w.request_inner_size(requested)) {
                overlay.with_gpu_mut(|gpu| gpu.resize(size));
                self.draw.set_viewport(viewport_of(size));
            }
        }
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(rect) = self.target.rect() else {
            log::info!("tracked window is gone; closing overlay");
            self.request_exit(event_loop);
            return;
        };

        self.follow_target(rect);

        // Minimized or zero-sized target: nothing to draw over.
        if rect.is_empty() {
            return;
        }

        let Self {
            app,
            renderer,
            overlay,
            draw,
            started,
            frame_index,
            ..
        } = self;

        let (Some(overlay), Some(renderer)) = (overlay.as_mut(), renderer.as_mut()) else {
            return;
        };

        let elapsed = started.elapsed();
        let index = *frame_index;
        *frame_index = frame_index.wrapping_add(1);

        let control = overlay.with_mut(|fields| {
            let mut ctx = FrameCtx {
                window: fields.window,
                gpu: fields.gpu,
                renderer,
                draw: &mut *draw,
                target: rect,
                frame_index: index,
                elapsed,
            };
            let control = app.on_frame(&mut ctx);

            // Geometry never survives into the next frame, even if the app skipped `render`.
            ctx.draw.clear();
            control
        });

        if control == AppControl::Exit {
            self.request_exit(event_loop);
        }
    }
}

impl<A, T> ApplicationHandler for OverlayState<A, T>
where
    A: App + 'static,
    T: TargetWindow + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.overlay.is_some() || self.exit_requested {
            return;
        }

        let Some(rect) = self.target.rect() else {
            log::info!("tracked window not found; nothing to overlay");
            self.request_exit(event_loop);
            return;
        };

        if let Err(e) = self.create_overlay(event_loop, rect) {
            log::error!("failed to create overlay: {e:#}");
            self.fatal = Some(e);
            self.request_exit(event_loop);
            return;
        }

        if let Some(overlay) = self.overlay.as_ref() {
            overlay.with_window(|w| w.request_redraw());
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw: the target can move at any time.
        if let Some(overlay) = self.overlay.as_ref() {
            overlay.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                self.request_exit(event_loop);
            }

            WindowEvent::Resized(new_size) => {
                if let Some(overlay) = self.overlay.as_mut() {
                    overlay.with_gpu_mut(|gpu| gpu.resize(new_size));
                    self.draw.set_viewport(viewport_of(new_size));
                    overlay.with_window(|w| w.request_redraw());
                }
            }

            WindowEvent::RedrawRequested => self.frame(event_loop),

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.app.on_exit();

        // Pipelines and buffers are released before the surface and window.
        self.renderer = None;
        self.overlay = None;
        self.draw.clear();
        log::debug!("overlay resources released");
    }
}

#[inline]
fn viewport_of(size: PhysicalSize<u32>) -> Viewport {
    Viewport::new(size.width as f32, size.height as f32)
}
