use bevy_math::UVec2;
use std::path::Path;
use std::path::PathBuf;

pub const DEFAULT_WIDTH: u32 = 1920;
pub const DEFAULT_HEIGHT: u32 = 1080;
pub const IMAGE_COUNT: usize = 2;
/// `{}` is replaced by the 1-based image number.
pub const SOURCE_FILE_PATTERN: &str = "File{}.rgba";
/// Zero presents as fast as possible, without waiting for vertical blank.
pub const SYNC_INTERVAL: u32 = 0;
pub const BUFFER_COUNT: u32 = 2;
pub const WINDOW_TITLE: &str = "D3D11 Render Window";

/// Settings handed to the resource layer when the swap surface is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSettings {
    pub sync_interval: u32,
    pub buffer_count: u32,
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        Self {
            sync_interval: SYNC_INTERVAL,
            buffer_count: BUFFER_COUNT,
        }
    }
}

/// Everything the slideshow binary needs to know up front.
///
/// Built from the constants in this module; there is no command line, environment
/// or file based override.
#[derive(Debug, Clone)]
pub struct SlideshowConfig {
    pub extent: UVec2,
    pub image_count: usize,
    pub file_pattern: String,
    pub title: String,
    pub surface: SurfaceSettings,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            extent: UVec2::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
            image_count: IMAGE_COUNT,
            file_pattern: SOURCE_FILE_PATTERN.to_owned(),
            title: WINDOW_TITLE.to_owned(),
            surface: SurfaceSettings::default(),
        }
    }
}

impl SlideshowConfig {
    /// Expands the file pattern into `image_count` paths under `base_dir`.
    pub fn source_paths(&self, base_dir: &Path) -> Vec<PathBuf> {
        (1..=self.image_count)
            .map(|number| base_dir.join(self.file_pattern.replace("{}", &number.to_string())))
            .collect()
    }
}
