use std::path::PathBuf;
use thiserror::Error;

/// Error raised by the graphics resource layer, kept opaque so the surface manager does
/// not depend on any particular binding.
pub type BackendError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type PresentResult<T> = Result<T, PresentError>;

/// Step of the present loop that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStage {
    Acquire,
    Copy,
    Present,
}

impl std::fmt::Display for FrameStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FrameStage::Acquire => "acquire back buffer",
            FrameStage::Copy => "copy source image",
            FrameStage::Present => "present",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum PresentError {
    #[error("surface extent must be positive and addressable, got {width}x{height}")]
    InvalidExtent { width: u32, height: u32 },

    #[error("at least one source image is required")]
    NoSources,

    #[error("failed to create the graphics device: {0}")]
    DeviceCreationFailed(#[source] BackendError),

    #[error("failed to create the swap surface: {0}")]
    SurfaceCreationFailed(#[source] BackendError),

    #[error("failed to create staging buffer for source image {index}: {source}")]
    StagingCreationFailed {
        index: usize,
        #[source]
        source: BackendError,
    },

    #[error("failed to load source image {}: {source}", path.display())]
    SourceLoadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("frame failed during {stage}: {source}")]
    PresentFailed {
        stage: FrameStage,
        #[source]
        source: BackendError,
    },
}

impl PresentError {
    pub fn present_failed(stage: FrameStage, source: impl Into<BackendError>) -> Self {
        Self::PresentFailed {
            stage,
            source: source.into(),
        }
    }
}
