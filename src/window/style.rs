//! Window decoration style bits
//!
//! Bit values match the Win32 `WS_*` and `WS_EX_*` constants so they can
//! be handed to the window manager unchanged.

bitflags::bitflags! {
    /// Window style bits
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct WindowStyle: u32 {
        const MAXIMIZE_BOX = 0x0001_0000;
        const MINIMIZE_BOX = 0x0002_0000;
        /// Resizable border
        const THICKFRAME = 0x0004_0000;
        const SYSMENU = 0x0008_0000;
        const BORDER = 0x0080_0000;
        const DLGFRAME = 0x0040_0000;
        /// Title bar (includes `BORDER | DLGFRAME`)
        const CAPTION = 0x00C0_0000;
        const MAXIMIZE = 0x0100_0000;
        const CLIP_CHILDREN = 0x0200_0000;
        const CLIP_SIBLINGS = 0x0400_0000;
        const VISIBLE = 0x1000_0000;
        const MINIMIZE = 0x2000_0000;

        /// Standard overlapped top-level window
        const TILED_WINDOW = Self::CAPTION.bits()
            | Self::SYSMENU.bits()
            | Self::THICKFRAME.bits()
            | Self::MINIMIZE_BOX.bits()
            | Self::MAXIMIZE_BOX.bits();
    }
}

bitflags::bitflags! {
    /// Extended window style bits
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ExtendedStyle: u32 {
        const DLG_MODAL_FRAME = 0x0000_0001;
        const WINDOW_EDGE = 0x0000_0100;
        const CLIENT_EDGE = 0x0000_0200;
        const STATIC_EDGE = 0x0002_0000;
        const APP_WINDOW = 0x0004_0000;
    }
}

/// Style bits stripped while a window covers its monitor
pub const FULLSCREEN_STRIPPED: WindowStyle =
    WindowStyle::CAPTION.union(WindowStyle::THICKFRAME);

/// Extended style bits stripped while a window covers its monitor
pub const FULLSCREEN_STRIPPED_EX: ExtendedStyle = ExtendedStyle::DLG_MODAL_FRAME
    .union(ExtendedStyle::WINDOW_EDGE)
    .union(ExtendedStyle::CLIENT_EDGE)
    .union(ExtendedStyle::STATIC_EDGE);

/// Both style words of a window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WindowStyles {
    pub style: WindowStyle,
    pub ex_style: ExtendedStyle,
}

impl WindowStyles {
    /// Build from raw style words, keeping bits this crate has no name for
    pub const fn from_raw(style: u32, ex_style: u32) -> Self {
        Self {
            style: WindowStyle::from_bits_retain(style),
            ex_style: ExtendedStyle::from_bits_retain(ex_style),
        }
    }

    /// Styles with the caption, resizable border, and edge decorations removed
    pub fn borderless(self) -> Self {
        Self {
            style: self.style.difference(FULLSCREEN_STRIPPED),
            ex_style: self.ex_style.difference(FULLSCREEN_STRIPPED_EX),
        }
    }

    /// Check if the window has a title bar
    pub fn has_caption(&self) -> bool {
        self.style.contains(WindowStyle::CAPTION)
    }

    /// Check if the window has a resizable border
    pub fn has_thick_frame(&self) -> bool {
        self.style.contains(WindowStyle::THICKFRAME)
    }
}
