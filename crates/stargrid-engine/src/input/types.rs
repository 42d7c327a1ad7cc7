/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

/// Pointer move event.
///
/// `x`/`y` are logical pixels; `pixel` is the physical client-area pixel.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMoveEvent {
    pub x: f32,
    pub y: f32,
    pub pixel: (i32, i32),
}

/// Pointer button event.
///
/// Coordinates are the pointer position at the time of the button change, so
/// handlers never have to query the window.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerButtonEvent {
    pub button: MouseButton,
    pub state: MouseButtonState,
    /// Logical pixels.
    pub x: f32,
    pub y: f32,
    /// Physical client-area pixel.
    pub pixel: (i32, i32),
    /// `2` for the second press of a double click, `1` otherwise.
    /// Always `1` for releases.
    pub click_count: u8,
}

impl PointerButtonEvent {
    #[inline]
    pub fn is_double_click(&self) -> bool {
        self.state == MouseButtonState::Pressed && self.click_count >= 2
    }
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerMoved(PointerMoveEvent),
    PointerButton(PointerButtonEvent),

    /// Pointer left the window surface.
    PointerLeft,

    /// Window focus change.
    Focused(bool),
}
