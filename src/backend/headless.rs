//! In-memory window manager
//!
//! Emulates the parts of a window system the display relies on: a
//! message queue, decorations derived from the style bits, a desktop with
//! one or more monitors, the cursor, and pointer capture. Messages are
//! scripted with [`HeadlessPlatform::push_message`].
//!
//! Only the notifications the display asks for are generated. Geometry
//! changes do not synthesize the size messages a real window manager
//! would send.

use std::collections::VecDeque;

use log::trace;

use super::{Placement, Platform};
use crate::config::DisplayConfig;
use crate::input::{Disposition, EventClassifier, PlatformMessage};
use crate::window::{ExtendedStyle, Point, Rect, WindowStyle, WindowStyles};

/// Resizable border thickness
const FRAME_WIDTH: i32 = 8;
/// Title bar height
const CAPTION_HEIGHT: i32 = 31;

/// Scripted window system
#[derive(Debug)]
pub struct HeadlessPlatform {
    /// Messages waiting to be dispatched
    queue: VecDeque<PlatformMessage>,
    /// Quit requested and not yet retrieved
    quit_posted: bool,
    /// Messages handed to default processing
    forwarded: Vec<PlatformMessage>,
    /// Whole desktop
    desktop: Rect,
    /// Monitor bounds
    monitors: Vec<Rect>,
    /// Window bounds including decorations
    window: Rect,
    styles: WindowStyles,
    /// Bounds to return to while maximized
    restore_rect: Option<Rect>,
    /// Cursor in screen coordinates
    cursor: Point,
    cursor_visible: bool,
    captured: bool,
    title: String,
    frames_presented: u64,
    disposed: bool,
}

impl HeadlessPlatform {
    /// Create a window on a single 1920x1080 monitor
    pub fn new(config: &DisplayConfig) -> Self {
        let desktop = Rect::new(0, 0, 1920, 1080);
        Self::with_monitors(config, desktop, vec![desktop])
    }

    /// Create a window on a custom monitor layout
    ///
    /// The window starts near the bottom of `desktop` with a client area
    /// of the configured size.
    pub fn with_monitors(config: &DisplayConfig, desktop: Rect, monitors: Vec<Rect>) -> Self {
        let styles = WindowStyles {
            style: WindowStyle::TILED_WINDOW
                | WindowStyle::CLIP_CHILDREN
                | WindowStyle::CLIP_SIBLINGS
                | WindowStyle::VISIBLE,
            ex_style: ExtendedStyle::APP_WINDOW | ExtendedStyle::WINDOW_EDGE,
        };
        let (left, top, right, bottom) = insets(styles);
        let width = config.width + left + right;
        let height = config.height + top + bottom;
        let window_top = desktop.bottom - config.height - height;

        Self {
            queue: VecDeque::new(),
            quit_posted: false,
            forwarded: Vec::new(),
            desktop,
            monitors,
            window: Rect::from_origin(config.left, window_top, width, height),
            styles,
            restore_rect: None,
            cursor: Point::default(),
            cursor_visible: true,
            captured: false,
            title: config.title.clone(),
            frames_presented: 0,
            disposed: false,
        }
    }

    /// Queue a message as if the user had produced it
    pub fn push_message(&mut self, message: PlatformMessage) {
        self.queue.push_back(message);
    }

    /// Number of messages waiting
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Messages that went to default processing, oldest first
    pub fn forwarded(&self) -> &[PlatformMessage] {
        &self.forwarded
    }

    /// Check if pointer input is captured
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Check if the cursor is visible
    pub fn is_cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Current window title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Number of presented frames
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Check if the window was destroyed
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Move the window without going through the display, like a user drag
    pub fn drag_window_to(&mut self, left: i32, top: i32) {
        self.window = Rect::from_origin(left, top, self.window.width(), self.window.height());
    }
}

/// Decoration thickness on each side for the given styles
fn insets(styles: WindowStyles) -> (i32, i32, i32, i32) {
    let frame = if styles.has_thick_frame() {
        FRAME_WIDTH
    } else {
        0
    };
    let caption = if styles.has_caption() {
        CAPTION_HEIGHT
    } else {
        0
    };
    (frame, frame + caption, frame, frame)
}

impl Platform for HeadlessPlatform {
    fn next_message(&mut self) -> Option<PlatformMessage> {
        let Some(message) = self.queue.pop_front() else {
            if self.quit_posted {
                self.quit_posted = false;
                return Some(PlatformMessage::Quit);
            }
            return None;
        };

        let classification = EventClassifier::new().classify(&message);
        if classification.disposition == Disposition::Default {
            trace!("Default handling for {:?}", message);
            self.forwarded.push(message);
        }
        Some(message)
    }

    fn capture_pointer(&mut self) {
        self.captured = true;
    }

    fn release_pointer(&mut self) {
        self.captured = false;
    }

    fn post_quit(&mut self) {
        self.quit_posted = true;
    }

    fn post_resize_notification(&mut self) {
        self.queue.push_back(PlatformMessage::ExitSizeMove);
    }

    fn swap_buffers(&mut self) {
        self.frames_presented += 1;
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn client_rect(&self) -> Rect {
        let (left, top, right, bottom) = insets(self.styles);
        Rect::new(
            0,
            0,
            (self.window.width() - left - right).max(0),
            (self.window.height() - top - bottom).max(0),
        )
    }

    fn window_rect(&self) -> Rect {
        self.window
    }

    fn desktop_rect(&self) -> Rect {
        self.desktop
    }

    fn monitor_rect(&self) -> Rect {
        let center = self.window.center();
        self.monitors
            .iter()
            .min_by_key(|monitor| monitor.distance_squared(center))
            .copied()
            .unwrap_or(self.desktop)
    }

    fn set_window_pos(&mut self, rect: Rect, placement: Placement) {
        trace!("Window moved to {:?} ({:?})", rect, placement);
        self.window = rect;
    }

    fn is_maximized(&self) -> bool {
        self.restore_rect.is_some()
    }

    fn restore(&mut self) {
        if let Some(rect) = self.restore_rect.take() {
            self.window = rect;
            self.styles.style.remove(WindowStyle::MAXIMIZE);
        }
    }

    fn maximize(&mut self) {
        if self.restore_rect.is_none() {
            self.restore_rect = Some(self.window);
            self.window = self.monitor_rect();
            self.styles.style.insert(WindowStyle::MAXIMIZE);
        }
    }

    fn styles(&self) -> WindowStyles {
        self.styles
    }

    fn set_styles(&mut self, styles: WindowStyles) {
        self.styles = styles;
    }

    fn cursor_position(&self) -> Point {
        self.cursor
    }

    fn set_cursor_position(&mut self, point: Point) {
        self.cursor = point;
    }

    fn show_cursor(&mut self, show: bool) {
        self.cursor_visible = show;
    }

    fn screen_to_client(&self, point: Point) -> Point {
        let (left, top, _, _) = insets(self.styles);
        Point::new(
            point.x - self.window.left - left,
            point.y - self.window.top - top,
        )
    }

    fn client_to_screen(&self, point: Point) -> Point {
        let (left, top, _, _) = insets(self.styles);
        Point::new(
            point.x + self.window.left + left,
            point.y + self.window.top + top,
        )
    }

    fn dispose(&mut self) {
        self.queue.clear();
        self.captured = false;
        self.disposed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_window() {
        let platform = HeadlessPlatform::new(&DisplayConfig::default());
        assert_eq!(platform.client_rect(), Rect::new(0, 0, 600, 400));
        assert_eq!(platform.window_rect().left, 600);
        // Bottom of the window sits one client height above the desktop edge.
        assert_eq!(platform.window_rect().bottom, 1080 - 400);
        assert!(!platform.is_maximized());
    }

    #[test]
    fn test_queue_order_and_forwarding() {
        let mut platform = HeadlessPlatform::new(&DisplayConfig::default());
        platform.push_message(PlatformMessage::Unhandled(0x0F));
        platform.push_message(PlatformMessage::Close);

        assert_eq!(platform.next_message(), Some(PlatformMessage::Unhandled(0x0F)));
        assert_eq!(platform.next_message(), Some(PlatformMessage::Close));
        assert_eq!(platform.next_message(), None);
        assert_eq!(platform.forwarded(), &[PlatformMessage::Unhandled(0x0F)]);
    }

    #[test]
    fn test_quit_after_queue() {
        let mut platform = HeadlessPlatform::new(&DisplayConfig::default());
        platform.post_quit();
        platform.push_message(PlatformMessage::ExitSizeMove);

        assert_eq!(platform.next_message(), Some(PlatformMessage::ExitSizeMove));
        assert_eq!(platform.next_message(), Some(PlatformMessage::Quit));
        assert_eq!(platform.next_message(), None);
    }

    #[test]
    fn test_client_rect_follows_styles() {
        let mut platform = HeadlessPlatform::new(&DisplayConfig::default());
        let window = platform.window_rect();
        platform.set_styles(platform.styles().borderless());
        assert_eq!(platform.client_rect().width(), window.width());
        assert_eq!(platform.client_rect().height(), window.height());
    }

    #[test]
    fn test_maximize_restore() {
        let mut platform = HeadlessPlatform::new(&DisplayConfig::default());
        let before = platform.window_rect();

        platform.maximize();
        assert!(platform.is_maximized());
        assert_eq!(platform.window_rect(), Rect::new(0, 0, 1920, 1080));

        platform.restore();
        assert!(!platform.is_maximized());
        assert_eq!(platform.window_rect(), before);
    }

    #[test]
    fn test_monitor_nearest_window() {
        let left = Rect::new(0, 0, 1920, 1080);
        let right = Rect::new(1920, 0, 4480, 1440);
        let mut platform = HeadlessPlatform::with_monitors(
            &DisplayConfig::default(),
            Rect::new(0, 0, 4480, 1440),
            vec![left, right],
        );
        assert_eq!(platform.monitor_rect(), left);

        platform.drag_window_to(2500, 300);
        assert_eq!(platform.monitor_rect(), right);
    }

    #[test]
    fn test_client_screen_conversion() {
        let platform = HeadlessPlatform::new(&DisplayConfig::default());
        let screen = platform.client_to_screen(Point::new(10, 20));
        assert_eq!(platform.screen_to_client(screen), Point::new(10, 20));
    }
}
