pub mod create_window;
pub mod register_window_class;
pub mod slideshow_window;
pub mod window_class;

pub use create_window::create_window;
pub use create_window::MainWindow;
pub use register_window_class::register_window_class;
pub use slideshow_window::SlideshowWindow;
pub use window_class::create_window_class_struct;
pub use window_class::WindowClass;
