//! Window geometry and coordinate conversion
//!
//! The window manager measures from the top-left corner with y growing
//! downward. Applications measure from the bottom-left corner with y
//! growing upward. Conversions always take the current height of the
//! reference area, never a cached one, since the window may have been
//! resized between calls.

/// A rectangle in window-manager space
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    /// Create a rectangle from its edges
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle from an origin and a size
    pub const fn from_origin(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self::new(left, top, left + width, top + height)
    }

    /// Width in pixels
    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Height in pixels
    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Check if a point lies inside (right and bottom edges excluded)
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x < self.right && point.y >= self.top && point.y < self.bottom
    }

    /// Center point
    pub const fn center(&self) -> Point {
        Point::new(
            self.left + self.width() / 2,
            self.top + self.height() / 2,
        )
    }

    /// Squared distance from a point to the nearest edge, zero when inside
    pub fn distance_squared(&self, point: Point) -> i64 {
        let dx = if point.x < self.left {
            self.left - point.x
        } else if point.x >= self.right {
            point.x - self.right + 1
        } else {
            0
        } as i64;
        let dy = if point.y < self.top {
            self.top - point.y
        } else if point.y >= self.bottom {
            point.y - self.bottom + 1
        } else {
            0
        } as i64;
        dx * dx + dy * dy
    }
}

/// A point in either coordinate space
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Window placement in application space
///
/// `x`,`y` locate the window with (0, 0) at the bottom left of the
/// desktop. `width`,`height` are the drawable client area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Frame {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Frame {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Convert a window-manager y coordinate to application space
pub const fn to_app_space(height: i32, wm_y: i32) -> i32 {
    height - wm_y
}

/// Convert an application y coordinate to window-manager space
pub const fn to_wm_space(height: i32, app_y: i32) -> i32 {
    height - app_y
}

/// Size of the decorations around the client area
///
/// Returns the extra width and height the window rectangle has over the
/// client rectangle.
pub const fn decoration_extent(window: Rect, client: Rect) -> (i32, i32) {
    (
        window.width() - client.width(),
        window.height() - client.height(),
    )
}

/// Describe the current window placement in application space
pub fn frame_from_wm(desktop: Rect, window: Rect, client: Rect) -> Frame {
    let (_, y_extra) = decoration_extent(window, client);
    Frame {
        x: window.left,
        y: to_app_space(desktop.bottom, window.bottom - y_extra),
        width: client.width(),
        height: client.height(),
    }
}

/// Compute the window rectangle that yields the requested frame
///
/// The current window and client rectangles supply the decoration
/// extent, so the frame's size is applied to the client area.
pub fn frame_to_wm(desktop: Rect, window: Rect, client: Rect, frame: Frame) -> Rect {
    let (x_extra, y_extra) = decoration_extent(window, client);
    let top = to_wm_space(desktop.bottom, frame.y) - frame.height;
    Rect::from_origin(
        frame.x,
        top,
        frame.width + x_extra,
        frame.height + y_extra,
    )
}
