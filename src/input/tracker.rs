//! Polled input snapshot
//!
//! Folds the device events of each frame into an [`Input`] so game logic
//! can ask "what is pressed and for how long" instead of handling events.

use std::collections::HashMap;

use log::debug;

use super::event::{DeviceEvent, DeviceEventKind};
use crate::backend::Platform;
use crate::display::{Display, DisplayStatus, InputSink, WindowControl};

/// Base value of a released key's duration
///
/// A key released since the last poll is stored as
/// `KEY_RELEASED + ticks_held`, so its total press duration is the
/// difference from this value. A key would have to be held for years of
/// ticks before the sum turned positive.
pub const KEY_RELEASED: i32 = -1_000_000_000;

/// User input gathered during one poll
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Input {
    /// Cursor x, relative to the bottom left of the window
    pub mx: i32,
    /// Cursor y, relative to the bottom left of the window
    pub my: i32,
    /// Scroll notches since the last poll
    pub scroll: i32,
    /// The window has input focus
    pub focus: bool,
    /// The window was resized or moved since the last poll
    pub resized: bool,
    /// Pressed keys and buttons with their duration in polls
    ///
    /// Positive while held, negative (see [`KEY_RELEASED`]) on the poll
    /// that reports the release.
    pub down: HashMap<i32, i32>,
}

impl Input {
    /// Check if a code is held
    pub fn is_held(&self, code: i32) -> bool {
        self.down.get(&code).is_some_and(|&ticks| ticks > 0)
    }

    /// Check if a code went down during the last poll
    pub fn is_pressed(&self, code: i32) -> bool {
        self.down.get(&code) == Some(&1)
    }

    /// Check if a code was released during the last poll
    pub fn is_released(&self, code: i32) -> bool {
        self.down.get(&code).is_some_and(|&ticks| ticks < 0)
    }
}

/// Builds an [`Input`] snapshot from device events
#[derive(Debug)]
pub struct InputTracker {
    input: Input,
}

impl InputTracker {
    /// Create a tracker for a window that starts focused
    pub fn new() -> Self {
        Self {
            input: Input {
                focus: true,
                ..Input::default()
            },
        }
    }

    /// The most recent snapshot
    pub fn input(&self) -> &Input {
        &self.input
    }

    /// Drain the display and return this poll's input
    ///
    /// Returns `None` once the display is closed.
    pub fn poll<P: Platform>(&mut self, display: &mut Display<P>) -> Option<&Input> {
        self.age();
        if display.process_input(self) == DisplayStatus::Closed {
            return None;
        }
        let cursor = display.cursor_position();
        self.input.mx = cursor.x;
        self.input.my = cursor.y;
        Some(&self.input)
    }

    /// Advance durations by one poll and clear per-poll values
    fn age(&mut self) {
        self.input.down.retain(|_, ticks| *ticks > 0);
        for ticks in self.input.down.values_mut() {
            *ticks += 1;
        }
        self.input.scroll = 0;
        self.input.resized = false;
    }

    fn press(&mut self, code: i32) {
        // Auto-repeat must not restart the count.
        let ticks = self.input.down.entry(code).or_insert(1);
        if *ticks < 0 {
            *ticks = 1;
        }
    }

    fn release(&mut self, code: i32) {
        if let Some(ticks) = self.input.down.get_mut(&code) {
            if *ticks > 0 {
                *ticks += KEY_RELEASED;
            }
        }
    }

    fn release_all(&mut self) {
        let held: Vec<i32> = self
            .input
            .down
            .iter()
            .filter(|(_, &ticks)| ticks > 0)
            .map(|(&code, _)| code)
            .collect();
        if !held.is_empty() {
            debug!("Focus lost, releasing {} held keys", held.len());
        }
        for code in held {
            self.release(code);
        }
    }
}

impl Default for InputTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSink for InputTracker {
    fn handle_input(&mut self, event: DeviceEvent, _window: &mut dyn WindowControl) {
        match event.kind {
            DeviceEventKind::Down => self.press(event.data),
            DeviceEventKind::Up => self.release(event.data),
            DeviceEventKind::Scroll => self.input.scroll += event.data,
            DeviceEventKind::Resize => self.input.resized = true,
            DeviceEventKind::FocusIn => self.input.focus = true,
            DeviceEventKind::FocusOut => {
                self.input.focus = false;
                self.release_all();
            }
        }
    }
}
