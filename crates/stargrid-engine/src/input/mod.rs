//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! Runtime code is responsible for translating platform events into `InputEvent`s.

mod click;
pub(crate) mod platform;
mod state;
mod types;

pub use click::{ClickTracker, DOUBLE_CLICK_SLOP_PX, DOUBLE_CLICK_TIME};
pub use state::InputState;
pub use types::{InputEvent, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent};
