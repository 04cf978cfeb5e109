//! Window state module
//!
//! This module contains the window-level logic shared by all backends:
//! - Geometry types and window-manager/application coordinate conversion
//! - Decoration style bits
//! - The borderless fullscreen state machine

pub mod fullscreen;
pub mod geometry;
pub mod style;

pub use fullscreen::{FullscreenController, FullscreenState, SavedGeometry};
pub use geometry::{to_app_space, to_wm_space, Frame, Point, Rect};
pub use style::{ExtendedStyle, WindowStyle, WindowStyles};
