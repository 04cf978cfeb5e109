//! Winshim - A native window and input shim for game engines
//!
//! Winshim owns a single top-level window with an OpenGL-capable drawing
//! surface, turns window-manager messages into a small set of device
//! events, and offers borderless fullscreen toggling. Coordinates handed
//! to the host have their origin at the bottom left.
//!
//! # Architecture
//!
//! - **Backend**: Win32 window and message queue, plus a headless window
//!   manager for tests
//! - **Input**: Message classification, device events, polled key state
//! - **Window**: Geometry transforms, style bits, fullscreen state machine
//! - **Display**: Lifecycle and the host boundary
//!
//! # Example
//!
//! ```no_run
//! use winshim::backend::HeadlessPlatform;
//! use winshim::config::DisplayConfig;
//! use winshim::display::{Display, DisplayStatus, WindowControl};
//! use winshim::input::DeviceEvent;
//!
//! let mut display = Display::new(HeadlessPlatform::new(&DisplayConfig::default()));
//! let mut on_input = |event: DeviceEvent, _window: &mut dyn WindowControl| {
//!     println!("{:?}", event);
//! };
//! while display.process_input(&mut on_input) == DisplayStatus::Active {
//!     display.swap_buffers();
//! #   break;
//! }
//! display.dispose();
//! ```

pub mod backend;
pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod window;

pub use config::DisplayConfig;
pub use display::{Display, DisplayStatus, InputSink, WindowControl};
pub use error::DisplayError;
