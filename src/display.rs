//! Display lifecycle and host boundary
//!
//! A [`Display`] owns the one application window. The host drives it once
//! per frame: [`Display::process_input`] to drain pending messages,
//! rendering, then [`Display::swap_buffers`]. Device events reach the host
//! through an [`InputSink`], which may call back into the display while it
//! handles an event.

use log::{debug, info, trace};

use crate::backend::{Placement, Platform};
use crate::input::{DeviceEvent, DeviceEventKind, Effect, EventClassifier, PlatformMessage};
use crate::window::geometry::{frame_from_wm, frame_to_wm};
use crate::window::{to_app_space, to_wm_space, Frame, FullscreenController, Point};

/// Whether the display is still running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayStatus {
    Active,
    Closed,
}

/// Window operations available to the host, including from inside event
/// delivery
///
/// All coordinates are in application space, with (0, 0) at the bottom
/// left.
pub trait WindowControl {
    /// Set the window title
    fn set_title(&mut self, title: &str);

    /// Place the window and size its client area
    fn set_size(&mut self, x: i32, y: i32, width: i32, height: i32);

    /// Current window placement and client size
    fn size(&self) -> Frame;

    /// Cursor location relative to the window's client area
    fn cursor_position(&self) -> Point;

    /// Move the cursor to a location relative to the client area
    fn set_cursor_position(&mut self, x: i32, y: i32);

    /// Show or hide the cursor; hiding also locks the pointer to the window
    fn show_cursor(&mut self, show: bool);

    /// Check if the window is fullscreen
    fn is_fullscreen(&self) -> bool;

    /// Flip between windowed and fullscreen
    fn toggle_fullscreen(&mut self);
}

/// Receives device events from the display
pub trait InputSink {
    /// Handle one event; `window` may be used to act on the display
    fn handle_input(&mut self, event: DeviceEvent, window: &mut dyn WindowControl);
}

impl<F> InputSink for F
where
    F: FnMut(DeviceEvent, &mut dyn WindowControl),
{
    fn handle_input(&mut self, event: DeviceEvent, window: &mut dyn WindowControl) {
        self(event, window)
    }
}

/// The application window
pub struct Display<P: Platform> {
    /// Window system backend
    platform: P,
    /// Message classifier
    classifier: EventClassifier,
    /// Fullscreen state machine
    fullscreen: FullscreenController,
    /// A quit has been observed
    closed: bool,
}

impl<P: Platform> Display<P> {
    /// Wrap an already created window
    pub fn new(platform: P) -> Self {
        Self {
            platform,
            classifier: EventClassifier::new(),
            fullscreen: FullscreenController::new(),
            closed: false,
        }
    }

    /// Get the backend
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Get the mutable backend
    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    /// Drain every pending message without blocking
    ///
    /// Events reach `sink` in queue order. Returns
    /// [`DisplayStatus::Closed`] as soon as a quit is seen, and on every
    /// call after that.
    pub fn process_input(&mut self, sink: &mut dyn InputSink) -> DisplayStatus {
        if self.closed {
            return DisplayStatus::Closed;
        }
        while let Some(message) = self.platform.next_message() {
            if message == PlatformMessage::Quit {
                debug!("Quit observed, display closed");
                self.closed = true;
                return DisplayStatus::Closed;
            }
            self.dispatch(message, sink);
        }
        DisplayStatus::Active
    }

    fn dispatch(&mut self, message: PlatformMessage, sink: &mut dyn InputSink) {
        let classification = self.classifier.classify(&message);
        trace!("{:?} -> {:?}", message, classification);

        if let Some(effect) = classification.before {
            self.apply(effect);
        }
        if let Some(event) = classification.event {
            if matches!(event.kind, DeviceEventKind::FocusIn | DeviceEventKind::FocusOut) {
                debug!("{:?}", event.kind);
            }
            sink.handle_input(event, self);
        }
        if let Some(effect) = classification.after {
            self.apply(effect);
        }
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::CapturePointer => self.platform.capture_pointer(),
            Effect::ReleasePointer => self.platform.release_pointer(),
            Effect::PostQuit => {
                debug!("Close requested");
                self.platform.post_quit();
            }
        }
    }

    /// Check if a quit has been observed
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Present the most recently rendered frame
    pub fn swap_buffers(&mut self) {
        self.platform.swap_buffers();
    }

    /// Set the window title
    pub fn set_title(&mut self, title: &str) {
        self.platform.set_title(title);
    }

    /// Place the window and size its client area, in application space
    pub fn set_size(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let rect = frame_to_wm(
            self.platform.desktop_rect(),
            self.platform.window_rect(),
            self.platform.client_rect(),
            Frame::new(x, y, width, height),
        );
        self.platform.set_window_pos(rect, Placement::Top);
    }

    /// Current window placement and client size, in application space
    pub fn size(&self) -> Frame {
        frame_from_wm(
            self.platform.desktop_rect(),
            self.platform.window_rect(),
            self.platform.client_rect(),
        )
    }

    /// Cursor location relative to the bottom left of the client area
    pub fn cursor_position(&self) -> Point {
        let client = self.platform.screen_to_client(self.platform.cursor_position());
        let height = self.platform.client_rect().bottom;
        Point::new(client.x, to_app_space(height, client.y))
    }

    /// Move the cursor to a location relative to the bottom left of the
    /// client area
    pub fn set_cursor_position(&mut self, x: i32, y: i32) {
        let height = self.platform.client_rect().bottom;
        let screen = self
            .platform
            .client_to_screen(Point::new(x, to_wm_space(height, y)));
        self.platform.set_cursor_position(screen);
    }

    /// Show or hide the cursor; a hidden cursor is locked to the window
    pub fn show_cursor(&mut self, show: bool) {
        if show {
            self.platform.release_pointer();
        } else {
            self.platform.capture_pointer();
        }
        self.platform.show_cursor(show);
    }

    /// Check if the window is fullscreen
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen.is_fullscreen()
    }

    /// Flip between windowed and fullscreen
    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen.toggle(&mut self.platform);
    }

    /// Destroy the window and release its drawing surface
    pub fn dispose(mut self) {
        info!("Disposing display");
        self.platform.dispose();
    }
}

#[cfg(target_os = "windows")]
impl Display<crate::backend::Win32Platform> {
    /// Create, show, and focus the native window
    pub fn init(
        config: &crate::config::DisplayConfig,
    ) -> Result<Self, crate::error::DisplayError> {
        let platform = crate::backend::Win32Platform::create(config)?;
        info!("Display initialized");
        Ok(Self::new(platform))
    }
}

#[cfg(not(target_os = "windows"))]
impl Display<crate::backend::HeadlessPlatform> {
    /// Native windows are only available on Windows
    pub fn init(
        _config: &crate::config::DisplayConfig,
    ) -> Result<Self, crate::error::DisplayError> {
        Err(crate::error::DisplayError::Unsupported)
    }
}

impl<P: Platform> WindowControl for Display<P> {
    fn set_title(&mut self, title: &str) {
        Display::set_title(self, title)
    }

    fn set_size(&mut self, x: i32, y: i32, width: i32, height: i32) {
        Display::set_size(self, x, y, width, height)
    }

    fn size(&self) -> Frame {
        Display::size(self)
    }

    fn cursor_position(&self) -> Point {
        Display::cursor_position(self)
    }

    fn set_cursor_position(&mut self, x: i32, y: i32) {
        Display::set_cursor_position(self, x, y)
    }

    fn show_cursor(&mut self, show: bool) {
        Display::show_cursor(self, show)
    }

    fn is_fullscreen(&self) -> bool {
        Display::is_fullscreen(self)
    }

    fn toggle_fullscreen(&mut self) {
        Display::toggle_fullscreen(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::HeadlessPlatform;
    use crate::config::DisplayConfig;
    use crate::input::MouseButton;
    use crate::window::Rect;

    fn display() -> Display<HeadlessPlatform> {
        Display::new(HeadlessPlatform::new(&DisplayConfig::default()))
    }

    /// Collects every delivered event
    #[derive(Default)]
    struct Recorder {
        events: Vec<DeviceEvent>,
    }

    impl InputSink for Recorder {
        fn handle_input(&mut self, event: DeviceEvent, _window: &mut dyn WindowControl) {
            self.events.push(event);
        }
    }

    fn resizes(events: &[DeviceEvent]) -> usize {
        events
            .iter()
            .filter(|event| event.kind == DeviceEventKind::Resize)
            .count()
    }

    #[test]
    fn test_empty_queue_is_active() {
        let mut display = display();
        let mut calls = 0;
        let status = display.process_input(&mut |_: DeviceEvent, _: &mut dyn WindowControl| {
            calls += 1
        });
        assert_eq!(status, DisplayStatus::Active);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_events_in_queue_order() {
        let mut display = display();
        let platform = display.platform_mut();
        platform.push_message(PlatformMessage::Activate { active: true });
        platform.push_message(PlatformMessage::Key {
            code: 0x41,
            pressed: true,
            system: false,
        });
        platform.push_message(PlatformMessage::Wheel { delta: -240 });
        platform.push_message(PlatformMessage::Activate { active: false });

        let mut recorder = Recorder::default();
        assert_eq!(display.process_input(&mut recorder), DisplayStatus::Active);
        assert_eq!(
            recorder.events,
            vec![
                DeviceEvent::focus_in(),
                DeviceEvent::down(0x41),
                DeviceEvent::scroll(2),
                DeviceEvent::focus_out(),
            ]
        );
        assert_eq!(display.platform().pending(), 0);
    }

    #[test]
    fn test_close_is_sticky() {
        let mut display = display();
        display.platform_mut().push_message(PlatformMessage::Close);

        let mut recorder = Recorder::default();
        assert_eq!(display.process_input(&mut recorder), DisplayStatus::Closed);
        assert!(recorder.events.is_empty());
        assert!(display.is_closed());

        display.platform_mut().push_message(PlatformMessage::ExitSizeMove);
        assert_eq!(display.process_input(&mut recorder), DisplayStatus::Closed);
        assert_eq!(display.process_input(&mut recorder), DisplayStatus::Closed);
        assert!(recorder.events.is_empty());
    }

    #[test]
    fn test_mouse_capture() {
        let mut display = display();
        display.platform_mut().push_message(PlatformMessage::Button {
            button: MouseButton::Left,
            pressed: true,
        });

        let mut recorder = Recorder::default();
        display.process_input(&mut recorder);
        assert_eq!(recorder.events, vec![DeviceEvent::down(MouseButton::Left.id())]);
        assert!(display.platform().is_captured());

        // The cursor leaves the window before the button is released.
        display.platform_mut().set_cursor_position(Point::new(-50, -50));
        display.platform_mut().push_message(PlatformMessage::Button {
            button: MouseButton::Left,
            pressed: false,
        });
        display.process_input(&mut recorder);
        assert_eq!(recorder.events.len(), 2);
        assert_eq!(recorder.events[1], DeviceEvent::up(MouseButton::Left.id()));
        assert!(!display.platform().is_captured());
    }

    #[test]
    fn test_release_follows_up_delivery() {
        let mut display = display();
        display.platform_mut().push_message(PlatformMessage::Button {
            button: MouseButton::Right,
            pressed: true,
        });
        display.platform_mut().push_message(PlatformMessage::Button {
            button: MouseButton::Right,
            pressed: false,
        });

        // Capturing while handling Up is undone by the release that
        // follows delivery.
        let mut seen = Vec::new();
        display.process_input(&mut |event: DeviceEvent, window: &mut dyn WindowControl| {
            seen.push(event.kind);
            if event.kind == DeviceEventKind::Up {
                window.show_cursor(false);
            }
        });
        assert_eq!(seen, vec![DeviceEventKind::Down, DeviceEventKind::Up]);
        assert!(!display.platform().is_captured());
    }

    #[test]
    fn test_system_keys_forwarded() {
        let mut display = display();
        let alt_tab = PlatformMessage::Key {
            code: 0x09,
            pressed: true,
            system: true,
        };
        let plain = PlatformMessage::Key {
            code: 0x41,
            pressed: true,
            system: false,
        };
        display.platform_mut().push_message(alt_tab);
        display.platform_mut().push_message(plain);
        display.platform_mut().push_message(PlatformMessage::Unhandled(0x0020));

        let mut recorder = Recorder::default();
        display.process_input(&mut recorder);
        assert_eq!(recorder.events.len(), 2);
        assert_eq!(
            display.platform().forwarded(),
            &[alt_tab, PlatformMessage::Unhandled(0x0020)]
        );
    }

    #[test]
    fn test_size_round_trip() {
        let mut display = display();
        display.set_size(600, 200, 600, 400);
        assert_eq!(display.size(), Frame::new(600, 200, 600, 400));

        display.set_size(10, 20, 800, 600);
        assert_eq!(display.size(), Frame::new(10, 20, 800, 600));
    }

    #[test]
    fn test_fullscreen_example() {
        let mut display = display();
        display.set_size(600, 200, 600, 400);
        let mut recorder = Recorder::default();

        display.toggle_fullscreen();
        assert!(display.is_fullscreen());
        assert_eq!(display.platform().window_rect(), Rect::new(0, 0, 1920, 1080));
        assert_eq!(display.size(), Frame::new(0, 0, 1920, 1080));
        display.process_input(&mut recorder);
        assert_eq!(resizes(&recorder.events), 1);

        display.toggle_fullscreen();
        assert!(!display.is_fullscreen());
        assert_eq!(display.size(), Frame::new(600, 200, 600, 400));
        display.process_input(&mut recorder);
        assert_eq!(resizes(&recorder.events), 2);
    }

    #[test]
    fn test_toggle_from_callback() {
        let mut display = display();
        display.set_size(600, 200, 600, 400);
        display.platform_mut().push_message(PlatformMessage::Key {
            code: 0x57,
            pressed: true,
            system: false,
        });

        let mut sizes = Vec::new();
        let status = display.process_input(&mut |event: DeviceEvent, window: &mut dyn WindowControl| {
            match event.kind {
                DeviceEventKind::Down => window.toggle_fullscreen(),
                DeviceEventKind::Resize => sizes.push(window.size()),
                _ => {}
            }
        });

        // The resize queued by the nested toggle is delivered in the same drain.
        assert_eq!(status, DisplayStatus::Active);
        assert_eq!(sizes, vec![Frame::new(0, 0, 1920, 1080)]);
        assert!(display.is_fullscreen());
    }

    #[test]
    fn test_cursor_position_in_app_space() {
        let mut display = display();
        display.set_cursor_position(100, 50);
        // 50 above the bottom of a 400 high client area is 350 below its top.
        let screen = display.platform().cursor_position();
        let client = display.platform().screen_to_client(screen);
        assert_eq!(client, Point::new(100, 350));
        assert_eq!(display.cursor_position(), Point::new(100, 50));
    }

    #[test]
    fn test_cursor_uses_current_height() {
        let mut display = display();
        display.set_cursor_position(10, 10);
        let screen = display.platform().cursor_position();

        display.toggle_fullscreen();
        display.platform_mut().set_cursor_position(screen);
        let client = display.platform().screen_to_client(screen);
        assert_eq!(display.cursor_position(), Point::new(client.x, 1080 - client.y));
    }

    #[test]
    fn test_show_cursor_locks_pointer() {
        let mut display = display();
        display.show_cursor(false);
        assert!(!display.platform().is_cursor_visible());
        assert!(display.platform().is_captured());

        display.show_cursor(true);
        assert!(display.platform().is_cursor_visible());
        assert!(!display.platform().is_captured());
    }

    #[test]
    fn test_title_and_swap() {
        let mut display = display();
        display.set_title("Test Window");
        display.swap_buffers();
        display.swap_buffers();
        assert_eq!(display.platform().title(), "Test Window");
        assert_eq!(display.platform().frames_presented(), 2);
    }

    #[test]
    fn test_dispose_releases_capture() {
        let mut display = display();
        display.show_cursor(false);
        let mut platform = display.platform;
        assert!(platform.is_captured());

        platform.dispose();
        assert!(platform.is_disposed());
        assert!(!platform.is_captured());
    }

    #[cfg(not(target_os = "windows"))]
    #[test]
    fn test_init_unsupported() {
        let result = Display::init(&DisplayConfig::default());
        assert!(matches!(result, Err(crate::error::DisplayError::Unsupported)));
    }
}
