//! Window procedure and message decoding

use std::cell::RefCell;
use std::collections::VecDeque;

use log::trace;
use windows_sys::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows_sys::Win32::UI::WindowsAndMessaging::{
    DefWindowProcW, SC_KEYMENU, SIZE_MAXIMIZED, SIZE_MINIMIZED, SIZE_RESTORED, WM_ACTIVATE,
    WM_CLOSE, WM_EXITSIZEMOVE, WM_KEYDOWN, WM_KEYUP, WM_LBUTTONDOWN, WM_LBUTTONUP,
    WM_MBUTTONDOWN, WM_MBUTTONUP, WM_MOUSEWHEEL, WM_QUIT, WM_RBUTTONDOWN, WM_RBUTTONUP,
    WM_SIZE, WM_SYSCOMMAND, WM_SYSKEYDOWN, WM_SYSKEYUP,
};

use super::userdata;
use crate::input::{
    Disposition, EventClassifier, MouseButton, PlatformMessage, SizeKind, SystemCommand,
};

/// Low word of `WM_ACTIVATE`'s wparam when the window loses activation
const WA_INACTIVE: usize = 0;

/// Mask selecting the command bits of `WM_SYSCOMMAND`'s wparam
const SC_MASK: usize = 0xFFF0;

/// Per-window state shared with the window procedure
///
/// Lives behind `GWLP_USERDATA` for as long as the window exists.
pub(super) struct WindowState {
    classifier: EventClassifier,
    queue: RefCell<VecDeque<PlatformMessage>>,
}

impl WindowState {
    pub(super) fn new() -> Self {
        Self {
            classifier: EventClassifier::new(),
            queue: RefCell::new(VecDeque::new()),
        }
    }

    pub(super) fn pop(&self) -> Option<PlatformMessage> {
        self.queue.borrow_mut().pop_front()
    }

    pub(super) fn push(&self, message: PlatformMessage) {
        self.queue.borrow_mut().push_back(message);
    }

    pub(super) fn clear(&self) {
        self.queue.borrow_mut().clear();
    }
}

/// Decode a raw window message
pub(super) fn decode(msg: u32, wparam: WPARAM) -> PlatformMessage {
    match msg {
        WM_ACTIVATE => PlatformMessage::Activate {
            active: wparam & 0xFFFF != WA_INACTIVE,
        },
        WM_SYSCOMMAND => {
            let command = (wparam & SC_MASK) as u32;
            PlatformMessage::SystemCommand(if command == SC_KEYMENU {
                SystemCommand::KeyMenu
            } else {
                SystemCommand::Other(command)
            })
        }
        WM_CLOSE => PlatformMessage::Close,
        WM_KEYDOWN | WM_KEYUP | WM_SYSKEYDOWN | WM_SYSKEYUP => PlatformMessage::Key {
            code: wparam as i32,
            pressed: matches!(msg, WM_KEYDOWN | WM_SYSKEYDOWN),
            system: matches!(msg, WM_SYSKEYDOWN | WM_SYSKEYUP),
        },
        WM_LBUTTONDOWN | WM_LBUTTONUP => PlatformMessage::Button {
            button: MouseButton::Left,
            pressed: msg == WM_LBUTTONDOWN,
        },
        WM_RBUTTONDOWN | WM_RBUTTONUP => PlatformMessage::Button {
            button: MouseButton::Right,
            pressed: msg == WM_RBUTTONDOWN,
        },
        WM_MBUTTONDOWN | WM_MBUTTONUP => PlatformMessage::Button {
            button: MouseButton::Middle,
            pressed: msg == WM_MBUTTONDOWN,
        },
        WM_MOUSEWHEEL => PlatformMessage::Wheel {
            delta: ((wparam >> 16) & 0xFFFF) as u16 as i16,
        },
        WM_SIZE => PlatformMessage::Size(match wparam as u32 {
            SIZE_RESTORED => SizeKind::Restored,
            SIZE_MINIMIZED => SizeKind::Minimized,
            SIZE_MAXIMIZED => SizeKind::Maximized,
            other => SizeKind::Other(other),
        }),
        WM_EXITSIZEMOVE => PlatformMessage::ExitSizeMove,
        WM_QUIT => PlatformMessage::Quit,
        other => PlatformMessage::Unhandled(other),
    }
}

/// Window procedure registered with the window class
///
/// Settles each message's disposition immediately and queues the ones
/// with a host-visible outcome for [`Win32Platform`](super::Win32Platform)
/// to hand out. The host is never called from here.
pub(super) unsafe extern "system" fn window_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    // SAFETY: the pointer is either null (before attach, after detach) or
    // points at the WindowState owned by the live Win32Platform.
    let state = unsafe { userdata::get(hwnd) as *const WindowState };
    let Some(state) = (unsafe { state.as_ref() }) else {
        return unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) };
    };

    let message = decode(msg, wparam);
    let classification = state.classifier.classify(&message);
    if classification.is_observable() {
        trace!("Queued {:?}", message);
        state.push(message);
    }

    match classification.disposition {
        Disposition::Handled => 0,
        Disposition::Default => unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use windows_sys::Win32::UI::WindowsAndMessaging::{SC_MAXIMIZE, WM_PAINT};

    #[test]
    fn test_state_queue_order_and_clear() {
        let state = WindowState::new();
        state.push(PlatformMessage::Close);
        state.push(PlatformMessage::ExitSizeMove);
        assert_eq!(state.pop(), Some(PlatformMessage::Close));

        state.push(PlatformMessage::Activate { active: true });
        state.clear();
        assert_eq!(state.pop(), None);
    }

    #[test]
    fn test_decode_activation() {
        assert_eq!(
            decode(WM_ACTIVATE, 0),
            PlatformMessage::Activate { active: false }
        );
        // WA_CLICKACTIVE with the minimized flag in the high word
        assert_eq!(
            decode(WM_ACTIVATE, 0x0001_0002),
            PlatformMessage::Activate { active: true }
        );
    }

    #[test]
    fn test_decode_system_command_masks_low_bits() {
        assert_eq!(
            decode(WM_SYSCOMMAND, SC_KEYMENU as usize | 0x3),
            PlatformMessage::SystemCommand(SystemCommand::KeyMenu)
        );
        assert_eq!(
            decode(WM_SYSCOMMAND, SC_MAXIMIZE as usize | 0x2),
            PlatformMessage::SystemCommand(SystemCommand::Other(SC_MAXIMIZE))
        );
    }

    #[test]
    fn test_decode_keys() {
        assert_eq!(
            decode(WM_SYSKEYUP, 0x73),
            PlatformMessage::Key {
                code: 0x73,
                pressed: false,
                system: true
            }
        );
        assert_eq!(
            decode(WM_KEYDOWN, 0x41),
            PlatformMessage::Key {
                code: 0x41,
                pressed: true,
                system: false
            }
        );
    }

    #[test]
    fn test_decode_wheel_sign() {
        // Toward the user
        assert_eq!(
            decode(WM_MOUSEWHEEL, 0xFF88_0000),
            PlatformMessage::Wheel { delta: -120 }
        );
        assert_eq!(
            decode(WM_MOUSEWHEEL, 0x0078_0008),
            PlatformMessage::Wheel { delta: 120 }
        );
    }

    #[test]
    fn test_decode_size_and_other() {
        assert_eq!(
            decode(WM_SIZE, SIZE_MAXIMIZED as usize),
            PlatformMessage::Size(SizeKind::Maximized)
        );
        assert_eq!(decode(WM_SIZE, 3), PlatformMessage::Size(SizeKind::Other(3)));
        assert_eq!(decode(WM_PAINT, 0), PlatformMessage::Unhandled(WM_PAINT));
    }
}
