//! Display configuration

/// Settings used when the native window is created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Initial window title
    pub title: String,
    /// Window class name, registered once per process
    pub class_name: String,
    /// Client area width in pixels
    pub width: i32,
    /// Client area height in pixels
    pub height: i32,
    /// Left edge of the window in window-manager space
    pub left: i32,
    /// Resource id of the application icon
    pub icon_resource: u16,
}

impl DisplayConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self {
            title: "winshim".to_string(),
            class_name: "WINSHIM".to_string(),
            width: 600,
            height: 400,
            left: 600,
            icon_resource: 101,
        }
    }

    /// Set the initial window title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the initial client area size
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new()
    }
}
