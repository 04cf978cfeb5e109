//! Window message classification
//!
//! Maps decoded window-manager messages to device events, pointer side
//! effects, and the result the window procedure must give the OS.

use super::event::{DeviceEvent, MouseButton};

/// Wheel movement reported for one notch
pub const WHEEL_DELTA: i32 = 120;

/// System menu command carried by a system command message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemCommand {
    /// Alt+key opening the window menu
    KeyMenu,
    /// Any other command, already masked to its command bits
    Other(u32),
}

/// What a size notification reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeKind {
    Restored,
    Minimized,
    Maximized,
    /// Another window was maximized or restored
    Other(u32),
}

/// A decoded window-manager message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformMessage {
    /// Window activation changed
    Activate { active: bool },
    /// System command request
    SystemCommand(SystemCommand),
    /// The user asked to close the window
    Close,
    /// Key press or release; `system` marks the Alt-modified variants
    Key { code: i32, pressed: bool, system: bool },
    /// Mouse button press or release
    Button { button: MouseButton, pressed: bool },
    /// Vertical wheel rotation, positive away from the user
    Wheel { delta: i16 },
    /// The window size changed
    Size(SizeKind),
    /// An interactive move or resize finished
    ExitSizeMove,
    /// The application quit signal reached the queue
    Quit,
    /// Anything else, identified by its raw message number
    Unhandled(u32),
}

/// Side effect applied around event delivery
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Route all pointer input to the window
    CapturePointer,
    /// Stop routing pointer input to the window
    ReleasePointer,
    /// Ask the message queue to report a quit
    PostQuit,
}

/// How the window procedure answers the OS
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Message consumed, no default processing
    Handled,
    /// Pass the message on to the default handler
    Default,
}

/// Result of classifying one message
///
/// `before` runs before `event` is delivered, `after` runs once the host
/// has seen it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub before: Option<Effect>,
    pub event: Option<DeviceEvent>,
    pub after: Option<Effect>,
    pub disposition: Disposition,
}

impl Classification {
    fn handled() -> Self {
        Self {
            before: None,
            event: None,
            after: None,
            disposition: Disposition::Handled,
        }
    }

    fn default_handling() -> Self {
        Self {
            disposition: Disposition::Default,
            ..Self::handled()
        }
    }

    fn emit(event: DeviceEvent) -> Self {
        Self {
            event: Some(event),
            ..Self::handled()
        }
    }

    /// Check if applying this classification has any visible outcome
    pub fn is_observable(&self) -> bool {
        self.before.is_some() || self.event.is_some() || self.after.is_some()
    }
}

/// Classifies window-manager messages
pub struct EventClassifier;

impl EventClassifier {
    /// Create a new classifier
    pub fn new() -> Self {
        Self
    }

    /// Classify a single message
    pub fn classify(&self, message: &PlatformMessage) -> Classification {
        match *message {
            PlatformMessage::Activate { active: true } => Classification::emit(DeviceEvent::focus_in()),
            PlatformMessage::Activate { active: false } => {
                Classification::emit(DeviceEvent::focus_out())
            }
            // Swallow the window menu so the window keeps input focus.
            PlatformMessage::SystemCommand(SystemCommand::KeyMenu) => Classification::handled(),
            PlatformMessage::SystemCommand(SystemCommand::Other(_)) => {
                Classification::default_handling()
            }
            PlatformMessage::Close => Classification {
                after: Some(Effect::PostQuit),
                ..Classification::handled()
            },
            PlatformMessage::Key {
                code,
                pressed,
                system,
            } => {
                let event = if pressed {
                    DeviceEvent::down(code)
                } else {
                    DeviceEvent::up(code)
                };
                // System keys still go to the default handler so Alt-Tab works.
                let disposition = if system {
                    Disposition::Default
                } else {
                    Disposition::Handled
                };
                Classification {
                    event: Some(event),
                    disposition,
                    ..Classification::handled()
                }
            }
            PlatformMessage::Button {
                button,
                pressed: true,
            } => Classification {
                before: Some(Effect::CapturePointer),
                ..Classification::emit(DeviceEvent::down(button.id()))
            },
            PlatformMessage::Button {
                button,
                pressed: false,
            } => Classification {
                after: Some(Effect::ReleasePointer),
                ..Classification::emit(DeviceEvent::up(button.id()))
            },
            PlatformMessage::Wheel { delta } => {
                Classification::emit(DeviceEvent::scroll(self.scroll_notches(delta)))
            }
            PlatformMessage::Size(SizeKind::Maximized | SizeKind::Restored) => {
                Classification::emit(DeviceEvent::resize())
            }
            PlatformMessage::Size(_) => Classification::handled(),
            PlatformMessage::ExitSizeMove => Classification::emit(DeviceEvent::resize()),
            PlatformMessage::Quit => Classification::handled(),
            PlatformMessage::Unhandled(_) => Classification::default_handling(),
        }
    }

    /// Convert a raw wheel delta into notches
    ///
    /// The sign is flipped: drawing the wheel toward the user scrolls the
    /// content up and is reported as positive.
    pub fn scroll_notches(&self, delta: i16) -> i32 {
        -i32::from(delta) / WHEEL_DELTA
    }
}

impl Default for EventClassifier {
    fn default() -> Self {
        Self::new()
    }
}
