use std::process::ExitCode;
use tracing::info;

#[cfg(windows)]
fn main() -> eyre::Result<ExitCode> {
    color_eyre::install()?;
    d3d11_slideshow::logging::init();
    info!("Ahoy, world!");

    let config = d3d11_slideshow::SlideshowConfig::default();
    let quit_code = d3d11_slideshow::app::run(&config)?;
    Ok(ExitCode::from(u8::try_from(quit_code).unwrap_or(u8::MAX)))
}

#[cfg(not(windows))]
fn main() -> eyre::Result<ExitCode> {
    color_eyre::install()?;
    d3d11_slideshow::logging::init();
    info!("Ahoy, world!");
    eyre::bail!("this sample presents through Direct3D 11 and only runs on Windows")
}
