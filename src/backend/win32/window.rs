//! Native HWND with an OpenGL-capable device context

use std::mem;
use std::ptr::{self, NonNull};

use log::{debug, info, warn};
use windows_sys::Win32::Foundation::{
    GetLastError, BOOL, ERROR_CLASS_ALREADY_EXISTS, HINSTANCE, HWND, POINT, RECT,
};
use windows_sys::Win32::Graphics::Gdi::{
    ClientToScreen, GetDC, GetMonitorInfoW, MonitorFromWindow, ReleaseDC, ScreenToClient, HDC,
    MONITORINFO, MONITOR_DEFAULTTONEAREST,
};
use windows_sys::Win32::Graphics::OpenGL::SwapBuffers;
use windows_sys::Win32::System::LibraryLoader::GetModuleHandleW;
use windows_sys::Win32::UI::Input::KeyboardAndMouse::{ReleaseCapture, SetCapture};
use windows_sys::Win32::UI::WindowsAndMessaging::{
    AdjustWindowRectEx, CreateWindowExW, DestroyWindow, DispatchMessageW, GetClientRect,
    GetCursorPos, GetDesktopWindow, GetWindowLongW, GetWindowRect, IsZoomed, LoadCursorW,
    LoadImageW, PeekMessageW, PostMessageW, PostQuitMessage, RegisterClassExW, SendMessageW,
    SetCursorPos, SetForegroundWindow, SetWindowLongW, SetWindowPos, SetWindowTextW, ShowCursor,
    ShowWindow, CS_HREDRAW, CS_OWNDC, CS_VREDRAW, GWL_EXSTYLE, GWL_STYLE, HWND_TOP, IDC_ARROW,
    IMAGE_ICON, LR_SHARED, MSG, PM_REMOVE, SC_MAXIMIZE, SC_RESTORE, SWP_FRAMECHANGED,
    SWP_NOACTIVATE, SWP_NOZORDER, SW_SHOW, WM_EXITSIZEMOVE, WM_QUIT, WM_SYSCOMMAND, WNDCLASSEXW,
};

use super::userdata;
use super::wndproc::{window_proc, WindowState};
use crate::backend::{Placement, Platform};
use crate::config::DisplayConfig;
use crate::error::DisplayError;
use crate::input::PlatformMessage;
use crate::window::{ExtendedStyle, Point, Rect, WindowStyle, WindowStyles};

/// Null-terminated UTF-16 copy of `text`
fn wide(text: &str) -> Vec<u16> {
    text.encode_utf16().chain(Some(0)).collect()
}

fn to_rect(rect: RECT) -> Rect {
    Rect::new(rect.left, rect.top, rect.right, rect.bottom)
}

/// Run a rectangle query, logging and falling back to an empty rectangle
fn query_rect(what: &str, query: impl FnOnce(*mut RECT) -> BOOL) -> Rect {
    let mut rect: RECT = unsafe { mem::zeroed() };
    if query(ptr::addr_of_mut!(rect)) == 0 {
        warn!("Failed to query {} rect (os error {})", what, unsafe {
            GetLastError()
        });
        return Rect::default();
    }
    to_rect(rect)
}

fn register_class(instance: HINSTANCE, config: &DisplayConfig) -> Result<(), DisplayError> {
    let class_name = wide(&config.class_name);

    // MAKEINTRESOURCE
    let icon_name = config.icon_resource as usize as *const u16;
    let icon = unsafe { LoadImageW(instance, icon_name, IMAGE_ICON, 0, 0, LR_SHARED) };
    if icon.is_null() {
        warn!("Icon resource {} not found, using the default", config.icon_resource);
    }

    let class = WNDCLASSEXW {
        cbSize: mem::size_of::<WNDCLASSEXW>() as u32,
        style: CS_HREDRAW | CS_VREDRAW | CS_OWNDC,
        lpfnWndProc: Some(window_proc),
        cbClsExtra: 0,
        cbWndExtra: 0,
        hInstance: instance,
        hIcon: icon,
        hCursor: unsafe { LoadCursorW(ptr::null_mut(), IDC_ARROW) },
        hbrBackground: ptr::null_mut(),
        lpszMenuName: ptr::null(),
        lpszClassName: class_name.as_ptr(),
        hIconSm: icon,
    };

    if unsafe { RegisterClassExW(&class) } == 0 {
        let code = unsafe { GetLastError() };
        if code != ERROR_CLASS_ALREADY_EXISTS {
            return Err(DisplayError::ClassRegistration(code));
        }
        debug!("Window class {} already registered", config.class_name);
    }
    Ok(())
}

/// The application window on Win32
pub struct Win32Platform {
    hwnd: HWND,
    hdc: HDC,
    /// Shared with the window procedure through `GWLP_USERDATA`;
    /// `None` once disposed
    state: Option<NonNull<WindowState>>,
}

impl Win32Platform {
    /// Register the window class, create the window, and show it
    pub fn create(config: &DisplayConfig) -> Result<Self, DisplayError> {
        let instance = unsafe { GetModuleHandleW(ptr::null()) };
        register_class(instance, config)?;

        let styles = WindowStyles {
            style: WindowStyle::TILED_WINDOW
                | WindowStyle::CLIP_CHILDREN
                | WindowStyle::CLIP_SIBLINGS,
            ex_style: ExtendedStyle::APP_WINDOW,
        };

        // Grow the requested client area by the decorations.
        let mut frame = RECT {
            left: 0,
            top: 0,
            right: config.width - 1,
            bottom: config.height - 1,
        };
        unsafe { AdjustWindowRectEx(&mut frame, styles.style.bits(), 0, styles.ex_style.bits()) };
        let width = frame.right - frame.left + 1;
        let height = frame.bottom - frame.top + 1;
        let desktop = query_rect("desktop", |rect| unsafe {
            GetWindowRect(GetDesktopWindow(), rect)
        });
        let top = desktop.bottom - config.height - height;

        let class_name = wide(&config.class_name);
        let title = wide(&config.title);
        let hwnd = unsafe {
            CreateWindowExW(
                styles.ex_style.bits(),
                class_name.as_ptr(),
                title.as_ptr(),
                styles.style.bits(),
                config.left,
                top,
                width,
                height,
                ptr::null_mut(),
                ptr::null_mut(),
                instance,
                ptr::null(),
            )
        };
        if hwnd.is_null() {
            return Err(DisplayError::WindowCreation(unsafe { GetLastError() }));
        }

        let state = NonNull::from(Box::leak(Box::new(WindowState::new())));
        unsafe { userdata::set(hwnd, state.as_ptr().cast()) };

        // From here on Drop tears the window down on failure.
        let mut platform = Self {
            hwnd,
            hdc: ptr::null_mut(),
            state: Some(state),
        };

        platform.hdc = unsafe { GetDC(hwnd) };
        if platform.hdc.is_null() {
            return Err(DisplayError::SurfaceAcquisition(unsafe { GetLastError() }));
        }

        unsafe {
            ShowWindow(hwnd, SW_SHOW);
            SetForegroundWindow(hwnd);
        }
        info!(
            "Created window \"{}\" {}x{} at ({}, {})",
            config.title, width, height, config.left, top
        );
        Ok(platform)
    }

    /// Raw window handle
    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }

    /// Raw device context, for creating a GL context
    pub fn hdc(&self) -> HDC {
        self.hdc
    }

    fn state(&self) -> Option<&WindowState> {
        // SAFETY: the state is freed only in dispose, which clears the field.
        self.state.map(|state| unsafe { &*state.as_ptr() })
    }

    fn send_system_command(&self, command: u32) {
        unsafe { SendMessageW(self.hwnd, WM_SYSCOMMAND, command as usize, 0) };
    }
}

impl Platform for Win32Platform {
    fn next_message(&mut self) -> Option<PlatformMessage> {
        loop {
            let state = self.state()?;
            if let Some(message) = state.pop() {
                return Some(message);
            }

            let mut msg: MSG = unsafe { mem::zeroed() };
            if unsafe { PeekMessageW(&mut msg, ptr::null_mut(), 0, 0, PM_REMOVE) } == 0 {
                return None;
            }
            if msg.message == WM_QUIT {
                return Some(PlatformMessage::Quit);
            }
            // Runs window_proc, which queues anything the host must see.
            unsafe { DispatchMessageW(&msg) };
        }
    }

    fn capture_pointer(&mut self) {
        unsafe { SetCapture(self.hwnd) };
    }

    fn release_pointer(&mut self) {
        unsafe { ReleaseCapture() };
    }

    fn post_quit(&mut self) {
        unsafe { PostQuitMessage(0) };
    }

    fn post_resize_notification(&mut self) {
        unsafe { PostMessageW(self.hwnd, WM_EXITSIZEMOVE, 0, 0) };
    }

    fn swap_buffers(&mut self) {
        unsafe { SwapBuffers(self.hdc) };
    }

    fn set_title(&mut self, title: &str) {
        let title = wide(title);
        unsafe { SetWindowTextW(self.hwnd, title.as_ptr()) };
    }

    fn client_rect(&self) -> Rect {
        query_rect("client", |rect| unsafe { GetClientRect(self.hwnd, rect) })
    }

    fn window_rect(&self) -> Rect {
        query_rect("window", |rect| unsafe { GetWindowRect(self.hwnd, rect) })
    }

    fn desktop_rect(&self) -> Rect {
        query_rect("desktop", |rect| unsafe {
            GetWindowRect(GetDesktopWindow(), rect)
        })
    }

    fn monitor_rect(&self) -> Rect {
        let monitor = unsafe { MonitorFromWindow(self.hwnd, MONITOR_DEFAULTTONEAREST) };
        let mut info: MONITORINFO = unsafe { mem::zeroed() };
        info.cbSize = mem::size_of::<MONITORINFO>() as u32;
        if unsafe { GetMonitorInfoW(monitor, &mut info) } == 0 {
            warn!("Failed to query monitor (os error {})", unsafe { GetLastError() });
            return Rect::default();
        }
        to_rect(info.rcMonitor)
    }

    fn set_window_pos(&mut self, rect: Rect, placement: Placement) {
        let flags = match placement {
            Placement::Top => 0,
            Placement::FrameChanged => SWP_NOZORDER | SWP_NOACTIVATE | SWP_FRAMECHANGED,
        };
        unsafe {
            SetWindowPos(
                self.hwnd,
                HWND_TOP,
                rect.left,
                rect.top,
                rect.width(),
                rect.height(),
                flags,
            )
        };
    }

    fn is_maximized(&self) -> bool {
        unsafe { IsZoomed(self.hwnd) != 0 }
    }

    fn restore(&mut self) {
        self.send_system_command(SC_RESTORE);
    }

    fn maximize(&mut self) {
        self.send_system_command(SC_MAXIMIZE);
    }

    fn styles(&self) -> WindowStyles {
        let (style, ex_style) = unsafe {
            (
                GetWindowLongW(self.hwnd, GWL_STYLE),
                GetWindowLongW(self.hwnd, GWL_EXSTYLE),
            )
        };
        WindowStyles::from_raw(style as u32, ex_style as u32)
    }

    fn set_styles(&mut self, styles: WindowStyles) {
        unsafe {
            SetWindowLongW(self.hwnd, GWL_STYLE, styles.style.bits() as i32);
            SetWindowLongW(self.hwnd, GWL_EXSTYLE, styles.ex_style.bits() as i32);
        }
    }

    fn cursor_position(&self) -> Point {
        let mut point = POINT { x: 0, y: 0 };
        unsafe { GetCursorPos(&mut point) };
        Point::new(point.x, point.y)
    }

    fn set_cursor_position(&mut self, point: Point) {
        unsafe { SetCursorPos(point.x, point.y) };
    }

    fn show_cursor(&mut self, show: bool) {
        unsafe { ShowCursor(BOOL::from(show)) };
    }

    fn screen_to_client(&self, point: Point) -> Point {
        let mut point = POINT {
            x: point.x,
            y: point.y,
        };
        unsafe { ScreenToClient(self.hwnd, &mut point) };
        Point::new(point.x, point.y)
    }

    fn client_to_screen(&self, point: Point) -> Point {
        let mut point = POINT {
            x: point.x,
            y: point.y,
        };
        unsafe { ClientToScreen(self.hwnd, &mut point) };
        Point::new(point.x, point.y)
    }

    fn dispose(&mut self) {
        let Some(state) = self.state.take() else {
            return;
        };
        // Nothing queued for the host survives the window.
        unsafe { state.as_ref() }.clear();
        unsafe {
            userdata::set(self.hwnd, ptr::null_mut());
            if !self.hdc.is_null() {
                ReleaseDC(self.hwnd, self.hdc);
            }
            DestroyWindow(self.hwnd);
            drop(Box::from_raw(state.as_ptr()));
        }
        self.hdc = ptr::null_mut();
        debug!("Window destroyed");
    }
}

impl Drop for Win32Platform {
    fn drop(&mut self) {
        self.dispose();
    }
}
