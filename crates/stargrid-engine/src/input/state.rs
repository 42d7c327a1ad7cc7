use super::click::ClickTracker;
use super::types::{InputEvent, PointerButtonEvent, PointerMoveEvent};

/// Current input state for a single window.
///
/// Holds the last known pointer position and the double-click tracker.
#[derive(Debug, Default)]
pub struct InputState {
    /// Pointer position in logical pixels.
    pub pointer_pos: Option<(f32, f32)>,

    /// Pointer position in physical client-area pixels.
    pub pointer_pixel: Option<(i32, i32)>,

    pub clicks: ClickTracker,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state.
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::Focused(focused) => {
                if !*focused {
                    self.clicks.reset();
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y, pixel }) => {
                self.pointer_pos = Some((*x, *y));
                self.pointer_pixel = Some(*pixel);
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
                self.pointer_pixel = None;
            }

            InputEvent::PointerButton(PointerButtonEvent { x, y, pixel, .. }) => {
                self.pointer_pos = Some((*x, *y));
                self.pointer_pixel = Some(*pixel);
            }
        }
    }
}
