use crate::window::window_class::WindowClass;
use crate::window::window_class::WindowSlot;
use bevy_math::UVec2;
use std::ptr::NonNull;
use widestring::U16CString;
use windows::core::*;
use windows::Win32::Foundation::*;
use windows::Win32::UI::WindowsAndMessaging::*;

// Fixed size: no thick frame, no maximize box.
const WINDOW_STYLE_FIXED: WINDOW_STYLE =
    WINDOW_STYLE(WS_OVERLAPPED.0 | WS_CAPTION.0 | WS_SYSMENU.0 | WS_MINIMIZEBOX.0);

/// A top-level window that owns its behaviour and destroys itself on drop.
pub struct MainWindow<W: WindowClass> {
    hwnd: HWND,
    slot: NonNull<WindowSlot<W>>,
}

impl<W: WindowClass> MainWindow<W> {
    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }

    pub fn show(&self) {
        unsafe { _ = ShowWindow(self.hwnd, SW_SHOW) };
    }

    pub fn is_destroyed(&self) -> bool {
        unsafe { self.slot.as_ref() }.destroyed
    }
}

impl<W: WindowClass> Drop for MainWindow<W> {
    fn drop(&mut self) {
        if !self.is_destroyed() {
            if let Err(e) = unsafe { DestroyWindow(self.hwnd) } {
                tracing::warn!("DestroyWindow failed: {e}");
            }
        }
        // Safety: the window is gone, so the window procedure no longer reaches the slot.
        drop(unsafe { Box::from_raw(self.slot.as_ptr()) });
    }
}

/// Creates a window of class `W` whose client area is exactly `client_size`.
pub fn create_window<W: WindowClass>(
    our_module: HMODULE,
    client_size: UVec2,
    title: &str,
    behaviour: W,
) -> eyre::Result<MainWindow<W>> {
    let mut window_rect = RECT {
        left: 0,
        top: 0,
        right: client_size.x as i32,
        bottom: client_size.y as i32,
    };
    // Calculates the required size of the window rectangle, based on the desired size of
    // the client rectangle.
    unsafe { AdjustWindowRect(&mut window_rect, WINDOW_STYLE_FIXED, false)? };

    let title = U16CString::from_str(title)?;
    let slot = NonNull::from(Box::leak(Box::new(WindowSlot {
        behaviour,
        destroyed: false,
    })));

    let hwnd = unsafe {
        CreateWindowExW(
            WINDOW_EX_STYLE::default(),
            W::ID,
            PCWSTR(title.as_ptr()),
            WINDOW_STYLE_FIXED,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            window_rect.right - window_rect.left,
            window_rect.bottom - window_rect.top,
            None,                    // no parent window
            None,                    // no menus
            Some(our_module.into()), // Use instance from GetModuleHandleW
            Some(slot.as_ptr() as _),
        )
    };
    match hwnd {
        Ok(hwnd) => Ok(MainWindow { hwnd, slot }),
        Err(e) => {
            // Safety: no window was created, nothing else holds the slot.
            drop(unsafe { Box::from_raw(slot.as_ptr()) });
            Err(e.into())
        }
    }
}
