//! `GWLP_USERDATA` access for both pointer widths

use windows_sys::Win32::Foundation::HWND;
use windows_sys::Win32::UI::WindowsAndMessaging::GWLP_USERDATA;

#[cfg(target_pointer_width = "64")]
pub(super) unsafe fn get(hwnd: HWND) -> *mut core::ffi::c_void {
    use windows_sys::Win32::UI::WindowsAndMessaging::GetWindowLongPtrW;
    unsafe { GetWindowLongPtrW(hwnd, GWLP_USERDATA) as *mut _ }
}

#[cfg(target_pointer_width = "64")]
pub(super) unsafe fn set(hwnd: HWND, value: *mut core::ffi::c_void) {
    use windows_sys::Win32::UI::WindowsAndMessaging::SetWindowLongPtrW;
    unsafe { SetWindowLongPtrW(hwnd, GWLP_USERDATA, value as isize) };
}

#[cfg(target_pointer_width = "32")]
pub(super) unsafe fn get(hwnd: HWND) -> *mut core::ffi::c_void {
    use windows_sys::Win32::UI::WindowsAndMessaging::GetWindowLongW;
    unsafe { GetWindowLongW(hwnd, GWLP_USERDATA) as usize as *mut _ }
}

#[cfg(target_pointer_width = "32")]
pub(super) unsafe fn set(hwnd: HWND, value: *mut core::ffi::c_void) {
    use windows_sys::Win32::UI::WindowsAndMessaging::SetWindowLongW;
    unsafe { SetWindowLongW(hwnd, GWLP_USERDATA, value as usize as i32) };
}
