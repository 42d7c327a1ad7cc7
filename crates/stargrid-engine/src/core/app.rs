use crate::coords::Viewport;
use crate::input::InputEvent;

use super::ctx::{FrameCtx, WindowCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Window and surface lifecycle notifications, in the order the runtime emits them.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum WindowLifecycle {
    /// The window exists; no surface has been created yet.
    Created,
    /// The client area changed. `None` while no drawing surface exists.
    Resized(Option<Viewport>),
    /// A drawing surface was created for the given logical viewport.
    SurfaceCreated(Viewport),
    /// The surface was lost and dropped; it is recreated on the next frame.
    SurfaceDiscarded,
    /// The window is being closed.
    Destroyed,
}

/// Application contract implemented by higher layers.
pub trait App {
    fn on_lifecycle(&mut self, window: &WindowCtx<'_>, event: &WindowLifecycle) -> AppControl {
        let _ = (window, event);
        AppControl::Continue
    }

    /// Called for translated input events.
    fn on_input(&mut self, window: &WindowCtx<'_>, event: &InputEvent) -> AppControl {
        let _ = (window, event);
        AppControl::Continue
    }

    /// Called once per redraw, with a ready surface.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
