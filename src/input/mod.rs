//! Input handling module
//!
//! This module turns window-manager messages into device events and
//! optionally folds them into a polled per-frame snapshot.

pub mod classifier;
pub mod event;
pub mod keys;
pub mod tracker;

pub use classifier::{
    Classification, Disposition, Effect, EventClassifier, PlatformMessage, SizeKind,
    SystemCommand,
};
pub use event::{DeviceEvent, DeviceEventKind, MouseButton};
pub use tracker::{Input, InputTracker, KEY_RELEASED};
