//! Backend module
//!
//! This module contains the window-system backends:
//! - Win32 backend for Windows (HWND, message queue, GL device context)
//! - Headless backend, an in-memory window manager for tests and tooling
//!
//! All coordinates crossing this boundary are in window-manager space.

pub mod headless;
#[cfg(target_os = "windows")]
pub mod win32;

pub use headless::HeadlessPlatform;
#[cfg(target_os = "windows")]
pub use win32::Win32Platform;

use crate::input::PlatformMessage;
use crate::window::{Point, Rect, WindowStyles};

/// How a window is moved by [`Platform::set_window_pos`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Raise to the top of the z-order
    Top,
    /// Keep z-order and activation untouched, recompute the frame after a
    /// style change
    FrameChanged,
}

/// A window system hosting the single application window
///
/// Implementations settle each message's disposition when they dispatch
/// it, then hand back the messages that need further processing.
pub trait Platform {
    /// Retrieve the next pending message without waiting
    ///
    /// Returns `None` once nothing is queued.
    fn next_message(&mut self) -> Option<PlatformMessage>;

    /// Route pointer input to the window even outside its bounds
    fn capture_pointer(&mut self);

    /// End pointer capture
    fn release_pointer(&mut self);

    /// Make the message queue report a quit
    fn post_quit(&mut self);

    /// Queue a resize-completed notification for the window
    fn post_resize_notification(&mut self);

    /// Present the most recently rendered frame
    fn swap_buffers(&mut self);

    /// Set the window title
    fn set_title(&mut self, title: &str);

    /// Client area, with its origin at (0, 0)
    fn client_rect(&self) -> Rect;

    /// Window bounds including decorations, in screen coordinates
    fn window_rect(&self) -> Rect;

    /// Bounds of the whole desktop
    fn desktop_rect(&self) -> Rect;

    /// Bounds of the monitor nearest the window, resolved on every call
    fn monitor_rect(&self) -> Rect;

    /// Move and resize the window
    fn set_window_pos(&mut self, rect: Rect, placement: Placement);

    /// Check if the window is maximized
    fn is_maximized(&self) -> bool;

    /// Restore the window from maximized
    fn restore(&mut self);

    /// Maximize the window
    fn maximize(&mut self);

    /// Current style words
    fn styles(&self) -> WindowStyles;

    /// Replace both style words
    fn set_styles(&mut self, styles: WindowStyles);

    /// Cursor location in screen coordinates
    fn cursor_position(&self) -> Point;

    /// Move the cursor to a screen location
    fn set_cursor_position(&mut self, point: Point);

    /// Show or hide the cursor
    fn show_cursor(&mut self, show: bool);

    /// Convert a screen point to client coordinates
    fn screen_to_client(&self, point: Point) -> Point;

    /// Convert a client point to screen coordinates
    fn client_to_screen(&self, point: Point) -> Point;

    /// Release the drawing surface and destroy the window
    fn dispose(&mut self);
}
