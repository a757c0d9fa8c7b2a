use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Overlay contract implemented by the host.
///
/// There is no input callback: the overlay is click-through and only draws.
pub trait App {
    /// Called once per frame, after the overlay has been moved onto the
    /// tracked window. Submit shapes to `ctx.draw`, then call `ctx.render`.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;

    /// Called once when the frame loop ends, whatever the reason.
    fn on_exit(&mut self) {}
}
