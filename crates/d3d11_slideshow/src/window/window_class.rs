use windows::core::*;
use windows::Win32::Foundation::*;
use windows::Win32::UI::WindowsAndMessaging::*;

/// What the window procedure should do after a behaviour saw a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageResponse {
    /// Fall through to `DefWindowProcW`.
    Unhandled,
    Handled,
    /// Destroy the window, which ends the message loop.
    Close,
}

pub trait WindowClass {
    /// The name of the window class.
    const ID: PCWSTR;

    fn handle(&mut self, message: u32, wparam: WPARAM) -> MessageResponse;
}

/// Per-window state reachable from the window procedure through `GWLP_USERDATA`.
pub struct WindowSlot<W> {
    pub behaviour: W,
    pub destroyed: bool,
}

pub fn create_window_class_struct<W: WindowClass>(instance: HMODULE) -> Result<WNDCLASSEXW> {
    // WNDCLASSEXW - https://learn.microsoft.com/en-us/windows/win32/api/winuser/ns-winuser-wndclassexw
    let wc = WNDCLASSEXW {
        cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
        style: CS_HREDRAW | CS_VREDRAW,
        lpfnWndProc: Some(wndproc::<W>),
        hInstance: instance.into(),
        hCursor: unsafe { LoadCursorW(None, IDC_ARROW)? },
        lpszClassName: W::ID,
        ..Default::default()
    };
    Ok(wc)
}

// A panic must not unwind across the extern "system" boundary.
fn safe_handle<W: WindowClass>(
    behaviour: &mut W,
    message: u32,
    wparam: WPARAM,
) -> MessageResponse {
    std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| behaviour.handle(message, wparam)))
        .unwrap_or(MessageResponse::Unhandled)
}

extern "system" fn wndproc<W: WindowClass>(
    window: HWND,
    message: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    if message == WM_CREATE {
        unsafe {
            let create_struct: &CREATESTRUCTW = &*(lparam.0 as *const CREATESTRUCTW);
            SetWindowLongPtrW(window, GWLP_USERDATA, create_struct.lpCreateParams as _);
        }
        return LRESULT(0);
    }

    let user_data = unsafe { GetWindowLongPtrW(window, GWLP_USERDATA) };
    let Some(mut slot) = std::ptr::NonNull::<WindowSlot<W>>::new(user_data as *mut _) else {
        // We can get messages before WM_CREATE or after WM_NCDESTROY.
        return unsafe { DefWindowProcW(window, message, wparam, lparam) };
    };

    let response = match message {
        WM_DESTROY => {
            unsafe { slot.as_mut().destroyed = true };
            unsafe { PostQuitMessage(0) };
            MessageResponse::Handled
        }
        WM_NCDESTROY => {
            unsafe { SetWindowLongPtrW(window, GWLP_USERDATA, 0) };
            MessageResponse::Unhandled
        }
        // The borrow of the slot ends before DestroyWindow re-enters this procedure.
        _ => {
            let behaviour = unsafe { &mut slot.as_mut().behaviour };
            safe_handle(behaviour, message, wparam)
        }
    };

    match response {
        MessageResponse::Handled => LRESULT(0),
        MessageResponse::Close => {
            if let Err(e) = unsafe { DestroyWindow(window) } {
                tracing::error!("DestroyWindow failed: {e}");
            }
            LRESULT(0)
        }
        MessageResponse::Unhandled => unsafe { DefWindowProcW(window, message, wparam, lparam) },
    }
}
