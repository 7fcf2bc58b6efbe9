pub mod config;
pub mod error;
pub mod frame_stats;
pub mod logging;
pub mod rotation;
pub mod source_image;
pub mod surface;

#[cfg(windows)]
pub mod app;
#[cfg(windows)]
pub mod d3d11_surface;
#[cfg(windows)]
pub mod message_loop;
#[cfg(windows)]
pub mod window;

pub use config::SlideshowConfig;
pub use error::PresentError;
pub use surface::FrameOutcome;
pub use surface::PresentationSurface;
pub use surface::SurfaceBackend;
