use crate::window::window_class::MessageResponse;
use crate::window::window_class::WindowClass;
use tracing::debug;
use tracing::info;
use windows::core::w;
use windows::core::PCWSTR;
use windows::Win32::Foundation::WPARAM;
use windows::Win32::UI::Input::KeyboardAndMouse::VK_ESCAPE;
use windows::Win32::UI::WindowsAndMessaging::*;

#[derive(Debug, Default)]
pub struct SlideshowWindow {
    keys_pressed: u64,
}

impl SlideshowWindow {
    pub fn keys_pressed(&self) -> u64 {
        self.keys_pressed
    }
}

impl WindowClass for SlideshowWindow {
    const ID: PCWSTR = w!("D3D11SlideshowWindowClass");

    fn handle(&mut self, message: u32, wparam: WPARAM) -> MessageResponse {
        match message {
            WM_KEYDOWN if wparam.0 == VK_ESCAPE.0 as usize => {
                info!("Escape pressed, closing window");
                MessageResponse::Close
            }
            WM_KEYDOWN => {
                self.keys_pressed += 1;
                debug!("WM_KEYDOWN: {}", wparam.0 as u8);
                MessageResponse::Handled
            }
            WM_KEYUP => {
                debug!("WM_KEYUP: {}", wparam.0 as u8);
                MessageResponse::Handled
            }
            // The message loop renders when idle; DefWindowProc still validates the region.
            WM_PAINT => MessageResponse::Unhandled,
            _ => MessageResponse::Unhandled,
        }
    }
}
