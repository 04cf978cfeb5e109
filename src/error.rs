//! Display errors
//!
//! Every variant describes a failure to bring the display up. Once a
//! [`Display`](crate::display::Display) exists no operation on it fails.

/// Failure while creating the native window or its drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DisplayError {
    #[error("Failed to register window class (os error {0})")]
    ClassRegistration(u32),
    #[error("Failed to create window (os error {0})")]
    WindowCreation(u32),
    #[error("Failed to acquire drawing surface (os error {0})")]
    SurfaceAcquisition(u32),
    #[error("No native display backend on this platform")]
    Unsupported,
}
