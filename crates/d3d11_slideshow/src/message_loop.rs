use crate::frame_stats::FrameStats;
use crate::surface::PresentationSurface;
use crate::surface::SurfaceBackend;
use std::time::Instant;
use tracing::info;
use windows::Win32::UI::WindowsAndMessaging::*;

/// Drains pending window messages and renders one frame whenever the queue is empty,
/// until `WM_QUIT` arrives. Returns the quit code.
pub fn run<B: SurfaceBackend>(surface: &mut PresentationSurface<B>) -> i32 {
    let mut stats = FrameStats::new(Instant::now());

    let quit_code = loop {
        let mut message = MSG::default();

        if unsafe { PeekMessageW(&mut message, None, 0, 0, PM_REMOVE) }.into() {
            if message.message == WM_QUIT {
                break message.wParam.0 as i32;
            }
            unsafe {
                _ = TranslateMessage(&message);
                DispatchMessageW(&message);
            }
        } else {
            // Render when idle
            let outcome = surface.render_frame();
            stats.record(&outcome);
            stats.report_if_due(Instant::now());
        }
    };

    info!(
        "Message loop finished with code {}: {} frames presented, {} skipped",
        quit_code,
        stats.total_presented(),
        stats.total_skipped()
    );
    quit_code
}
