//! Device events delivered to the host

/// Kind of a device event
///
/// The discriminants are the stable codes of the host callback contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum DeviceEventKind {
    Up = 1,
    Down = 2,
    Scroll = 3,
    Resize = 5,
    FocusIn = 6,
    FocusOut = 7,
}

impl DeviceEventKind {
    /// Get the callback code
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Mouse buttons reported as Up/Down events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

impl MouseButton {
    /// Event payload for this button
    ///
    /// These are the virtual-key codes of the buttons, which keyboard
    /// codes never use.
    pub fn id(self) -> i32 {
        match self {
            MouseButton::Left => 0x01,
            MouseButton::Right => 0x02,
            MouseButton::Middle => 0x04,
        }
    }
}

/// A normalized device event
///
/// `data` holds a virtual key code or mouse button id for Up/Down, a
/// signed notch count for Scroll, and zero otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceEvent {
    pub kind: DeviceEventKind,
    pub data: i32,
}

impl DeviceEvent {
    pub fn new(kind: DeviceEventKind, data: i32) -> Self {
        Self { kind, data }
    }

    pub fn up(code: i32) -> Self {
        Self::new(DeviceEventKind::Up, code)
    }

    pub fn down(code: i32) -> Self {
        Self::new(DeviceEventKind::Down, code)
    }

    pub fn scroll(notches: i32) -> Self {
        Self::new(DeviceEventKind::Scroll, notches)
    }

    pub fn resize() -> Self {
        Self::new(DeviceEventKind::Resize, 0)
    }

    pub fn focus_in() -> Self {
        Self::new(DeviceEventKind::FocusIn, 0)
    }

    pub fn focus_out() -> Self {
        Self::new(DeviceEventKind::FocusOut, 0)
    }
}
