use crate::config::SlideshowConfig;
use crate::d3d11_surface::D3D11Surface;
use crate::message_loop;
use crate::surface::PresentationSurface;
use crate::window::create_window;
use crate::window::create_window_class_struct;
use crate::window::register_window_class;
use crate::window::SlideshowWindow;
use eyre::WrapErr;
use tracing::info;
use windows::Win32::Foundation::HMODULE;
use windows::Win32::System::LibraryLoader::GetModuleHandleW;

/// Opens the window, builds the surface and runs the present loop until the window is
/// closed. Returns the message loop's quit code.
pub fn run(config: &SlideshowConfig) -> eyre::Result<i32> {
    let our_module = get_handle_to_file_used_to_create_the_calling_process()?;

    let window_class = create_window_class_struct::<SlideshowWindow>(our_module)?;
    register_window_class(&window_class)?;
    let window = create_window(
        our_module,
        config.extent,
        &config.title,
        SlideshowWindow::default(),
    )?;

    let sources = config.source_paths(&std::env::current_dir()?);
    let mut surface = PresentationSurface::<D3D11Surface>::new(config.surface);
    surface
        .initialize(&window.hwnd(), config.extent, &sources)
        .wrap_err("failed to initialize the presentation surface")?;

    window.show();
    let quit_code = message_loop::run(&mut surface);

    surface.shutdown();
    drop(window);
    info!("Shut down cleanly");
    Ok(quit_code)
}

fn get_handle_to_file_used_to_create_the_calling_process() -> eyre::Result<HMODULE> {
    Ok(unsafe { GetModuleHandleW(None)? })
}
