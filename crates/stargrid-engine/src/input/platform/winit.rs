use std::time::Instant;

use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};

use crate::input::{
    InputEvent, InputState, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent,
};

/// Translates a winit `WindowEvent` into an engine `InputEvent`.
///
/// `scale_factor` is the window's physical pixels per logical pixel. Presses are
/// run through the window's click tracker, so `state` is updated here as well
/// as by `InputState::apply_event`.
///
/// Returns `None` for events not represented by the input subsystem, and for
/// button events that arrive before any pointer position is known.
pub(crate) fn translate_window_event(
    scale_factor: f64,
    state: &mut InputState,
    event: &WindowEvent,
    now: Instant,
) -> Option<InputEvent> {
    match event {
        WindowEvent::Focused(f) => Some(InputEvent::Focused(*f)),

        WindowEvent::CursorLeft { .. } => Some(InputEvent::PointerLeft),

        WindowEvent::CursorMoved { position, .. } => {
            let (x, y) = to_logical_f32(scale_factor, *position);
            Some(InputEvent::PointerMoved(PointerMoveEvent {
                x,
                y,
                pixel: to_pixel(*position),
            }))
        }

        WindowEvent::MouseInput { state: st, button, .. } => {
            let button = map_mouse_button(*button);

            // winit 0.30 does not expose cursor query; use tracked pointer position.
            let (Some((x, y)), Some(pixel)) = (state.pointer_pos, state.pointer_pixel) else {
                log::error!("{button:?} {st:?} without a pointer position; event dropped");
                return None;
            };

            let (st, click_count) = match st {
                ElementState::Pressed => (
                    MouseButtonState::Pressed,
                    state.clicks.press(button, pixel, now),
                ),
                ElementState::Released => (MouseButtonState::Released, 1),
            };

            Some(InputEvent::PointerButton(PointerButtonEvent {
                button,
                state: st,
                x,
                y,
                pixel,
                click_count,
            }))
        }

        _ => None,
    }
}

fn to_logical_f32(scale_factor: f64, pos: PhysicalPosition<f64>) -> (f32, f32) {
    let logical = pos.to_logical::<f64>(scale_factor);
    (logical.x as f32, logical.y as f32)
}

fn to_pixel(pos: PhysicalPosition<f64>) -> (i32, i32) {
    (pos.x.floor() as i32, pos.y.floor() as i32)
}

fn map_mouse_button(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use winit::event::DeviceId;

    use super::*;

    fn device() -> DeviceId {
        // Test-only id; never compared against a real device.
        unsafe { DeviceId::dummy() }
    }

    fn mouse(state: ElementState, button: WinitMouseButton) -> WindowEvent {
        WindowEvent::MouseInput {
            device_id: device(),
            state,
            button,
        }
    }

    fn cursor(x: f64, y: f64) -> WindowEvent {
        WindowEvent::CursorMoved {
            device_id: device(),
            position: PhysicalPosition::new(x, y),
        }
    }

    /// Translates `event` and applies it, the way the runtime does.
    fn feed(state: &mut InputState, event: &WindowEvent, now: Instant) -> Option<InputEvent> {
        let ev = translate_window_event(2.0, state, event, now)?;
        state.apply_event(&ev);
        Some(ev)
    }

    fn button_event(ev: Option<InputEvent>) -> PointerButtonEvent {
        match ev {
            Some(InputEvent::PointerButton(b)) => b,
            other => panic!("expected a button event, got {other:?}"),
        }
    }

    // ── pointer position ──────────────────────────────────────────────────

    #[test]
    fn cursor_reports_logical_and_physical_position() {
        let mut state = InputState::default();
        let ev = feed(&mut state, &cursor(40.0, 21.5), Instant::now());
        assert_eq!(
            ev,
            Some(InputEvent::PointerMoved(PointerMoveEvent {
                x: 20.0,
                y: 10.75,
                pixel: (40, 21),
            }))
        );
    }

    #[test]
    fn button_without_pointer_position_is_dropped() {
        let mut state = InputState::default();
        let press = mouse(ElementState::Pressed, WinitMouseButton::Left);
        assert_eq!(feed(&mut state, &press, Instant::now()), None);

        // A later press at a known position is a plain press, not a double click.
        feed(&mut state, &cursor(10.0, 10.0), Instant::now());
        let ev = button_event(feed(&mut state, &press, Instant::now()));
        assert_eq!(ev.click_count, 1);
    }

    #[test]
    fn pointer_left_drops_following_release() {
        let mut state = InputState::default();
        feed(&mut state, &cursor(10.0, 10.0), Instant::now());
        feed(&mut state, &WindowEvent::CursorLeft { device_id: device() }, Instant::now());

        let release = mouse(ElementState::Released, WinitMouseButton::Right);
        assert_eq!(feed(&mut state, &release, Instant::now()), None);
    }

    // ── clicks ────────────────────────────────────────────────────────────

    #[test]
    fn second_press_is_stamped_as_double_click() {
        let t0 = Instant::now();
        let mut state = InputState::default();
        feed(&mut state, &cursor(100.0, 60.0), t0);

        let press = mouse(ElementState::Pressed, WinitMouseButton::Left);
        let release = mouse(ElementState::Released, WinitMouseButton::Left);

        let first = button_event(feed(&mut state, &press, t0));
        assert_eq!((first.click_count, first.pixel), (1, (100, 60)));
        assert_eq!((first.x, first.y), (50.0, 30.0));

        let up = button_event(feed(&mut state, &release, t0 + Duration::from_millis(80)));
        assert_eq!((up.state, up.click_count), (MouseButtonState::Released, 1));

        let second = button_event(feed(&mut state, &press, t0 + Duration::from_millis(160)));
        assert_eq!(second.click_count, 2);
        assert!(second.is_double_click());
    }

    #[test]
    fn buttons_map_one_to_one() {
        assert_eq!(map_mouse_button(WinitMouseButton::Left), MouseButton::Left);
        assert_eq!(map_mouse_button(WinitMouseButton::Right), MouseButton::Right);
        assert_eq!(map_mouse_button(WinitMouseButton::Other(7)), MouseButton::Other(7));
    }

    #[test]
    fn pixel_truncates_toward_negative_infinity() {
        assert_eq!(to_pixel(PhysicalPosition::new(12.9, 3.0)), (12, 3));
        assert_eq!(to_pixel(PhysicalPosition::new(-0.5, 0.0)), (-1, 0));
    }
}
