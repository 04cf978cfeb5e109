//! Borderless fullscreen toggling
//!
//! Entering fullscreen records the windowed geometry, strips the
//! decorations, and stretches the window over the monitor it currently
//! sits on. Leaving restores the record verbatim.

use log::debug;

use super::{Rect, WindowStyles};
use crate::backend::{Placement, Platform};

/// Windowed-mode geometry captured when fullscreen is entered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedGeometry {
    /// The window was maximized before going fullscreen
    pub maximized: bool,
    /// Style words before decorations were stripped
    pub styles: WindowStyles,
    /// Window bounds before going fullscreen
    pub rect: Rect,
}

/// Fullscreen state of the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenState {
    Windowed,
    Fullscreen,
}

/// Toggles the window between windowed and borderless fullscreen
///
/// The saved geometry exists exactly while the window is fullscreen.
#[derive(Debug, Default)]
pub struct FullscreenController {
    saved: Option<SavedGeometry>,
}

impl FullscreenController {
    /// Create a controller for a windowed window
    pub fn new() -> Self {
        Self { saved: None }
    }

    /// Check if the window is fullscreen
    pub fn is_fullscreen(&self) -> bool {
        self.saved.is_some()
    }

    /// Current state
    pub fn state(&self) -> FullscreenState {
        if self.is_fullscreen() {
            FullscreenState::Fullscreen
        } else {
            FullscreenState::Windowed
        }
    }

    /// Geometry that will be restored when fullscreen ends
    pub fn saved_geometry(&self) -> Option<&SavedGeometry> {
        self.saved.as_ref()
    }

    /// Flip between windowed and fullscreen
    ///
    /// Both directions finish by queueing a resize notification so size
    /// dependent layers re-query the window.
    pub fn toggle<P: Platform + ?Sized>(&mut self, platform: &mut P) -> FullscreenState {
        match self.saved.take() {
            None => self.enter(platform),
            Some(saved) => Self::leave(platform, saved),
        }
        platform.post_resize_notification();
        self.state()
    }

    fn enter<P: Platform + ?Sized>(&mut self, platform: &mut P) {
        // Maximized and borderless styles do not compose; restore first.
        let maximized = platform.is_maximized();
        if maximized {
            platform.restore();
        }
        let saved = SavedGeometry {
            maximized,
            styles: platform.styles(),
            rect: platform.window_rect(),
        };
        self.saved = Some(saved);

        platform.set_styles(saved.styles.borderless());
        let monitor = platform.monitor_rect();
        platform.set_window_pos(monitor, Placement::FrameChanged);
        debug!("Entered fullscreen on monitor {:?}, saved {:?}", monitor, saved);
    }

    fn leave<P: Platform + ?Sized>(platform: &mut P, saved: SavedGeometry) {
        platform.set_styles(saved.styles);
        platform.set_window_pos(saved.rect, Placement::FrameChanged);
        if saved.maximized {
            platform.maximize();
        }
        debug!("Left fullscreen, restored {:?}", saved);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::HeadlessPlatform;
    use crate::config::DisplayConfig;
    use crate::input::PlatformMessage;
    use crate::window::{ExtendedStyle, WindowStyle};

    fn platform() -> HeadlessPlatform {
        HeadlessPlatform::new(&DisplayConfig::default())
    }

    #[test]
    fn test_enter_covers_monitor() {
        let mut platform = platform();
        let mut controller = FullscreenController::new();

        assert_eq!(controller.toggle(&mut platform), FullscreenState::Fullscreen);
        assert!(controller.is_fullscreen());
        assert_eq!(platform.window_rect(), Rect::new(0, 0, 1920, 1080));

        let styles = platform.styles();
        assert!(!styles.style.intersects(WindowStyle::CAPTION | WindowStyle::THICKFRAME));
        assert!(!styles.ex_style.contains(ExtendedStyle::WINDOW_EDGE));
        assert!(styles.ex_style.contains(ExtendedStyle::APP_WINDOW));
    }

    #[test]
    fn test_round_trip_restores_geometry() {
        let mut platform = platform();
        let mut controller = FullscreenController::new();
        let styles = platform.styles();
        let rect = platform.window_rect();

        controller.toggle(&mut platform);
        assert_eq!(controller.toggle(&mut platform), FullscreenState::Windowed);

        assert_eq!(platform.styles(), styles);
        assert_eq!(platform.window_rect(), rect);
        assert!(controller.saved_geometry().is_none());
    }

    #[test]
    fn test_saved_geometry_captured_before_mutation() {
        let mut platform = platform();
        let mut controller = FullscreenController::new();
        let styles = platform.styles();
        let rect = platform.window_rect();

        controller.toggle(&mut platform);
        let saved = controller.saved_geometry().copied().unwrap();
        assert_eq!(saved.styles, styles);
        assert_eq!(saved.rect, rect);
        assert!(!saved.maximized);
    }

    #[test]
    fn test_maximized_window_is_remaximized() {
        let mut platform = platform();
        let mut controller = FullscreenController::new();
        let normal = platform.window_rect();
        platform.maximize();

        controller.toggle(&mut platform);
        let saved = controller.saved_geometry().copied().unwrap();
        assert!(saved.maximized);
        // Geometry is captured after restoring, not while maximized.
        assert_eq!(saved.rect, normal);
        assert!(!saved.styles.style.contains(WindowStyle::MAXIMIZE));

        controller.toggle(&mut platform);
        assert!(platform.is_maximized());
        platform.restore();
        assert_eq!(platform.window_rect(), normal);
    }

    #[test]
    fn test_parity() {
        let mut platform = platform();
        let mut controller = FullscreenController::new();
        assert!(!controller.is_fullscreen());
        for count in 1..=7 {
            controller.toggle(&mut platform);
            assert_eq!(controller.is_fullscreen(), count % 2 == 1);
        }
    }

    #[test]
    fn test_monitor_resolved_at_toggle_time() {
        let left = Rect::new(0, 0, 1920, 1080);
        let right = Rect::new(1920, 0, 4480, 1440);
        let mut platform = HeadlessPlatform::with_monitors(
            &DisplayConfig::default(),
            Rect::new(0, 0, 4480, 1440),
            vec![left, right],
        );
        let mut controller = FullscreenController::new();

        platform.drag_window_to(2400, 200);
        controller.toggle(&mut platform);
        assert_eq!(platform.window_rect(), right);

        controller.toggle(&mut platform);
        assert_eq!(platform.window_rect().left, 2400);
    }

    #[test]
    fn test_each_toggle_queues_one_resize() {
        let mut platform = platform();
        let mut controller = FullscreenController::new();

        controller.toggle(&mut platform);
        assert_eq!(platform.pending(), 1);
        assert_eq!(platform.next_message(), Some(PlatformMessage::ExitSizeMove));

        controller.toggle(&mut platform);
        assert_eq!(platform.pending(), 1);
    }

    #[test]
    fn test_unknown_style_bits_survive() {
        let mut platform = platform();
        let mut controller = FullscreenController::new();
        let odd = WindowStyles::from_raw(platform.styles().style.bits() | 0x8, 0x0004_0300);
        platform.set_styles(odd);

        controller.toggle(&mut platform);
        controller.toggle(&mut platform);
        assert_eq!(platform.styles(), odd);
    }
}
