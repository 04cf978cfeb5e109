//! Virtual key codes
//!
//! Key events carry the window manager's virtual-key code unchanged.
//! These names cover the keys a game typically binds.

pub const MOUSE_LEFT: i32 = 0x01;
pub const MOUSE_RIGHT: i32 = 0x02;
pub const MOUSE_MIDDLE: i32 = 0x04;

pub const KEY_BACKSPACE: i32 = 0x08;
pub const KEY_TAB: i32 = 0x09;
pub const KEY_ENTER: i32 = 0x0D;
pub const KEY_SHIFT: i32 = 0x10;
pub const KEY_CTRL: i32 = 0x11;
pub const KEY_ALT: i32 = 0x12;
pub const KEY_PAUSE: i32 = 0x13;
pub const KEY_CAPS_LOCK: i32 = 0x14;
pub const KEY_ESCAPE: i32 = 0x1B;
pub const KEY_SPACE: i32 = 0x20;
pub const KEY_PAGE_UP: i32 = 0x21;
pub const KEY_PAGE_DOWN: i32 = 0x22;
pub const KEY_END: i32 = 0x23;
pub const KEY_HOME: i32 = 0x24;
pub const KEY_LEFT: i32 = 0x25;
pub const KEY_UP: i32 = 0x26;
pub const KEY_RIGHT: i32 = 0x27;
pub const KEY_DOWN: i32 = 0x28;
pub const KEY_INSERT: i32 = 0x2D;
pub const KEY_DELETE: i32 = 0x2E;

pub const KEY_0: i32 = 0x30;
pub const KEY_1: i32 = 0x31;
pub const KEY_2: i32 = 0x32;
pub const KEY_3: i32 = 0x33;
pub const KEY_4: i32 = 0x34;
pub const KEY_5: i32 = 0x35;
pub const KEY_6: i32 = 0x36;
pub const KEY_7: i32 = 0x37;
pub const KEY_8: i32 = 0x38;
pub const KEY_9: i32 = 0x39;

pub const KEY_A: i32 = 0x41;
pub const KEY_B: i32 = 0x42;
pub const KEY_C: i32 = 0x43;
pub const KEY_D: i32 = 0x44;
pub const KEY_E: i32 = 0x45;
pub const KEY_F: i32 = 0x46;
pub const KEY_G: i32 = 0x47;
pub const KEY_H: i32 = 0x48;
pub const KEY_I: i32 = 0x49;
pub const KEY_J: i32 = 0x4A;
pub const KEY_K: i32 = 0x4B;
pub const KEY_L: i32 = 0x4C;
pub const KEY_M: i32 = 0x4D;
pub const KEY_N: i32 = 0x4E;
pub const KEY_O: i32 = 0x4F;
pub const KEY_P: i32 = 0x50;
pub const KEY_Q: i32 = 0x51;
pub const KEY_R: i32 = 0x52;
pub const KEY_S: i32 = 0x53;
pub const KEY_T: i32 = 0x54;
pub const KEY_U: i32 = 0x55;
pub const KEY_V: i32 = 0x56;
pub const KEY_W: i32 = 0x57;
pub const KEY_X: i32 = 0x58;
pub const KEY_Y: i32 = 0x59;
pub const KEY_Z: i32 = 0x5A;

pub const KEY_F1: i32 = 0x70;
pub const KEY_F12: i32 = 0x7B;

/// Human readable name of a code, for diagnostics
pub fn key_name(code: i32) -> Option<String> {
    let name = match code {
        MOUSE_LEFT => "MouseLeft",
        MOUSE_RIGHT => "MouseRight",
        MOUSE_MIDDLE => "MouseMiddle",
        KEY_BACKSPACE => "Backspace",
        KEY_TAB => "Tab",
        KEY_ENTER => "Enter",
        KEY_SHIFT => "Shift",
        KEY_CTRL => "Ctrl",
        KEY_ALT => "Alt",
        KEY_PAUSE => "Pause",
        KEY_CAPS_LOCK => "CapsLock",
        KEY_ESCAPE => "Escape",
        KEY_SPACE => "Space",
        KEY_PAGE_UP => "PageUp",
        KEY_PAGE_DOWN => "PageDown",
        KEY_END => "End",
        KEY_HOME => "Home",
        KEY_LEFT => "Left",
        KEY_UP => "Up",
        KEY_RIGHT => "Right",
        KEY_DOWN => "Down",
        KEY_INSERT => "Insert",
        KEY_DELETE => "Delete",
        KEY_0..=KEY_9 | KEY_A..=KEY_Z => {
            return char::from_u32(code as u32).map(|c| c.to_string());
        }
        KEY_F1..=KEY_F12 => return Some(format!("F{}", code - KEY_F1 + 1)),
        _ => return None,
    };
    Some(name.to_string())
}
