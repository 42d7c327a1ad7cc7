use std::time::{Duration, Instant};

use super::types::MouseButton;

/// Maximum delay between two presses that still counts as a double click.
pub const DOUBLE_CLICK_TIME: Duration = Duration::from_millis(500);

/// Maximum per-axis distance, in physical pixels, between the two presses.
pub const DOUBLE_CLICK_SLOP_PX: i32 = 4;

#[derive(Debug, Copy, Clone)]
struct Press {
    button: MouseButton,
    pixel: (i32, i32),
    at: Instant,
}

/// Synthesizes double clicks from raw button presses.
///
/// winit reports presses only; a press is promoted to a double click when it
/// follows a press of the same button within [`DOUBLE_CLICK_TIME`] and
/// [`DOUBLE_CLICK_SLOP_PX`]. A double click consumes the pair, so a third
/// press starts a new sequence.
#[derive(Debug, Default)]
pub struct ClickTracker {
    last: Option<Press>,
}

impl ClickTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a press and returns its click count (`1` or `2`).
    pub fn press(&mut self, button: MouseButton, pixel: (i32, i32), now: Instant) -> u8 {
        let is_double = self.last.is_some_and(|prev| {
            prev.button == button
                && now.saturating_duration_since(prev.at) <= DOUBLE_CLICK_TIME
                && (pixel.0 - prev.pixel.0).abs() <= DOUBLE_CLICK_SLOP_PX
                && (pixel.1 - prev.pixel.1).abs() <= DOUBLE_CLICK_SLOP_PX
        });

        if is_double {
            self.last = None;
            2
        } else {
            self.last = Some(Press { button, pixel, at: now });
            1
        }
    }

    /// Forgets the pending press (focus loss, pointer left).
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    // ── promotion ─────────────────────────────────────────────────────────

    #[test]
    fn second_press_within_window_is_double() {
        let t0 = Instant::now();
        let mut clicks = ClickTracker::new();
        assert_eq!(clicks.press(MouseButton::Left, (10, 10), t0), 1);
        assert_eq!(clicks.press(MouseButton::Left, (12, 9), t0 + ms(200)), 2);
    }

    #[test]
    fn third_press_starts_over() {
        let t0 = Instant::now();
        let mut clicks = ClickTracker::new();
        clicks.press(MouseButton::Left, (0, 0), t0);
        clicks.press(MouseButton::Left, (0, 0), t0 + ms(100));
        assert_eq!(clicks.press(MouseButton::Left, (0, 0), t0 + ms(200)), 1);
    }

    // ── rejection ─────────────────────────────────────────────────────────

    #[test]
    fn slow_second_press_is_single() {
        let t0 = Instant::now();
        let mut clicks = ClickTracker::new();
        clicks.press(MouseButton::Right, (5, 5), t0);
        assert_eq!(clicks.press(MouseButton::Right, (5, 5), t0 + ms(501)), 1);
    }

    #[test]
    fn distant_second_press_is_single() {
        let t0 = Instant::now();
        let mut clicks = ClickTracker::new();
        clicks.press(MouseButton::Left, (5, 5), t0);
        assert_eq!(clicks.press(MouseButton::Left, (10, 5), t0 + ms(50)), 1);
    }

    #[test]
    fn different_button_is_single() {
        let t0 = Instant::now();
        let mut clicks = ClickTracker::new();
        clicks.press(MouseButton::Left, (5, 5), t0);
        assert_eq!(clicks.press(MouseButton::Right, (5, 5), t0 + ms(50)), 1);
    }

    #[test]
    fn reset_forgets_pending_press() {
        let t0 = Instant::now();
        let mut clicks = ClickTracker::new();
        clicks.press(MouseButton::Left, (5, 5), t0);
        clicks.reset();
        assert_eq!(clicks.press(MouseButton::Left, (5, 5), t0 + ms(50)), 1);
    }
}
