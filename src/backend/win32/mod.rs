//! Win32 backend
//!
//! This module provides the Windows implementation using:
//! - A registered window class with a queueing window procedure
//! - One top-level HWND with an owned device context for OpenGL
//! - PeekMessage draining of the thread message queue

mod userdata;
pub mod window;
mod wndproc;

pub use window::Win32Platform;
