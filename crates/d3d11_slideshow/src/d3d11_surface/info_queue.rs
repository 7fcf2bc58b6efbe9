use tracing::info;
use tracing::warn;
use windows::Win32::Graphics::Dxgi::*;

/// The DXGI info queue, only in debug builds and only when the debug layer is installed.
pub fn get_info_queue() -> Option<IDXGIInfoQueue> {
    if !cfg!(debug_assertions) {
        return None;
    }
    match unsafe { DXGIGetDebugInterface1::<IDXGIInfoQueue>(0) } {
        Ok(queue) => {
            info!("DXGI Info Queue obtained.");
            Some(queue)
        }
        Err(e) => {
            warn!("Warning: Failed to get DXGI Info Queue: {:?}", e);
            None
        }
    }
}

/// Drains the stored DXGI debug messages into the log.
pub fn print_dxgi_debug_messages(info_queue: &Option<IDXGIInfoQueue>) {
    let Some(queue) = info_queue else {
        return;
    };

    let num_messages = unsafe { queue.GetNumStoredMessages(DXGI_DEBUG_ALL) };
    if num_messages == 0 {
        return;
    }
    warn!("--- DXGI Debug Messages START ---");
    for i in 0..num_messages {
        let mut message_size: usize = 0;
        if unsafe { queue.GetMessage(DXGI_DEBUG_ALL, i, None, &mut message_size) }.is_err() {
            warn!("Error getting size for message {}", i);
            continue;
        }

        // u64 storage keeps the message struct aligned.
        let mut message_buffer = vec![0u64; message_size.div_ceil(size_of::<u64>())];
        let p_message = message_buffer.as_mut_ptr() as *mut DXGI_INFO_QUEUE_MESSAGE;
        if unsafe { queue.GetMessage(DXGI_DEBUG_ALL, i, Some(p_message), &mut message_size) }
            .is_err()
        {
            warn!("Error getting message data for message {}", i);
            continue;
        }

        let message = unsafe { &*p_message };
        let description = unsafe {
            std::slice::from_raw_parts(
                message.pDescription as *const u8,
                message.DescriptionByteLength,
            )
        };
        let description = String::from_utf8_lossy(description)
            .trim_end_matches('\0')
            .trim()
            .to_string();
        let severity = match message.Severity {
            DXGI_INFO_QUEUE_MESSAGE_SEVERITY_CORRUPTION => "CORRUPTION",
            DXGI_INFO_QUEUE_MESSAGE_SEVERITY_ERROR => "ERROR",
            DXGI_INFO_QUEUE_MESSAGE_SEVERITY_WARNING => "WARNING",
            DXGI_INFO_QUEUE_MESSAGE_SEVERITY_INFO => "INFO",
            DXGI_INFO_QUEUE_MESSAGE_SEVERITY_MESSAGE => "MESSAGE",
            _ => "UNKNOWN",
        };
        warn!("DXGI Debug [{} ID:{}]: {}", severity, message.ID, description);
    }
    unsafe { queue.ClearStoredMessages(DXGI_DEBUG_ALL) };
    warn!("--- DXGI Debug Messages END ---");
}
