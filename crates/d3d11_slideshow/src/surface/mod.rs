#[cfg(test)]
mod mock_backend;

use crate::config::SurfaceSettings;
use crate::error::BackendError;
use crate::error::FrameStage;
use crate::error::PresentError;
use crate::error::PresentResult;
use crate::rotation::RotationCursor;
use crate::source_image::expected_len;
use crate::source_image::SourceImage;
use bevy_math::UVec2;
use std::num::NonZeroUsize;
use std::path::Path;
use tracing::error;
use tracing::info;

/// The graphics resources the presentation surface is built from.
///
/// Every resource is released when its value is dropped, so neither the manager nor
/// the implementations need explicit release calls or null checks.
pub trait SurfaceBackend: Sized {
    /// What the swap surface is bound to, a native window for real backends.
    type Target: ?Sized;
    /// CPU-writable, GPU-readable copy of one source image.
    type Staging;
    /// A swap surface buffer acquired for writing. Only one exists at a time.
    type BackBuffer;

    /// Creates the device and a swap surface of `extent` bound to `target`.
    ///
    /// Implementations report device failures as [`PresentError::DeviceCreationFailed`]
    /// and swap surface failures as [`PresentError::SurfaceCreationFailed`].
    fn create(
        target: &Self::Target,
        extent: UVec2,
        settings: &SurfaceSettings,
    ) -> PresentResult<Self>;

    fn create_staging(&mut self, image: &SourceImage) -> Result<Self::Staging, BackendError>;

    fn acquire_back_buffer(&mut self) -> Result<Self::BackBuffer, BackendError>;

    /// Full-resolution copy, no scaling or blending.
    fn copy_to_back_buffer(
        &mut self,
        back_buffer: &mut Self::BackBuffer,
        source: &Self::Staging,
    ) -> Result<(), BackendError>;

    /// Hands the back buffer to the display. Consuming it ends the acquisition.
    fn present(
        &mut self,
        back_buffer: Self::BackBuffer,
        sync_interval: u32,
    ) -> Result<(), BackendError>;

    /// Dumps whatever diagnostics the graphics layer queued up. Called after failures.
    fn report_diagnostics(&self) {}
}

/// Observable lifecycle of a [`PresentationSurface`].
///
/// `initialize` moves through an initializing phase internally, but it never returns
/// while in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceState {
    Uninitialized,
    Ready,
}

/// What a call to [`PresentationSurface::render_frame`] did.
#[derive(Debug)]
pub enum FrameOutcome {
    Presented { source_index: usize },
    /// The frame was dropped. The rotation still moved past `source_index`.
    Skipped {
        source_index: usize,
        error: PresentError,
    },
    NotReady,
}

struct SourceSlot<S> {
    name: String,
    staging: S,
}

// Field order is drop order: staging buffers go before the device that made them.
struct ReadySurface<B: SurfaceBackend> {
    sources: Vec<SourceSlot<B::Staging>>,
    cursor: RotationCursor,
    backend: B,
}

impl<B: SurfaceBackend> ReadySurface<B> {
    fn present_source(&mut self, source_index: usize, sync_interval: u32) -> PresentResult<()> {
        let source = &self.sources[source_index].staging;
        let mut back_buffer = self
            .backend
            .acquire_back_buffer()
            .map_err(|e| PresentError::present_failed(FrameStage::Acquire, e))?;
        self.backend
            .copy_to_back_buffer(&mut back_buffer, source)
            .map_err(|e| PresentError::present_failed(FrameStage::Copy, e))?;
        self.backend
            .present(back_buffer, sync_interval)
            .map_err(|e| PresentError::present_failed(FrameStage::Present, e))
    }
}

/// Owns the device, the swap surface, the pre-loaded source images and the rotation
/// cursor, and shows the images one per frame in round-robin order.
pub struct PresentationSurface<B: SurfaceBackend> {
    settings: SurfaceSettings,
    ready: Option<ReadySurface<B>>,
}

impl<B: SurfaceBackend> PresentationSurface<B> {
    pub fn new(settings: SurfaceSettings) -> Self {
        Self {
            settings,
            ready: None,
        }
    }

    pub fn state(&self) -> SurfaceState {
        match self.ready {
            Some(_) => SurfaceState::Ready,
            None => SurfaceState::Uninitialized,
        }
    }

    pub fn source_count(&self) -> usize {
        self.ready.as_ref().map_or(0, |ready| ready.sources.len())
    }

    /// Index of the image the next frame will show, if ready.
    pub fn next_source_index(&self) -> Option<usize> {
        self.ready.as_ref().map(|ready| ready.cursor.current())
    }

    /// Builds the device and swap surface, then loads every source file into its own
    /// staging buffer. Resources from a previous initialization are released first.
    ///
    /// On failure every resource created so far is released before returning and the
    /// surface stays uninitialized.
    pub fn initialize<P: AsRef<Path>>(
        &mut self,
        target: &B::Target,
        extent: UVec2,
        sources: &[P],
    ) -> PresentResult<()> {
        self.shutdown();

        if extent.x == 0 || extent.y == 0 {
            return Err(PresentError::InvalidExtent {
                width: extent.x,
                height: extent.y,
            });
        }
        expected_len(extent)?;
        let source_count = NonZeroUsize::new(sources.len()).ok_or(PresentError::NoSources)?;

        info!(
            "Initializing {}x{} surface with {} source images",
            extent.x,
            extent.y,
            source_count
        );
        let mut backend = B::create(target, extent, &self.settings)?;

        let mut slots = Vec::with_capacity(sources.len());
        for (index, path) in sources.iter().enumerate() {
            let path = path.as_ref();
            let image = SourceImage::load(path, extent)?;
            let staging = match backend.create_staging(&image) {
                Ok(staging) => staging,
                Err(source) => {
                    backend.report_diagnostics();
                    return Err(PresentError::StagingCreationFailed { index, source });
                }
            };
            slots.push(SourceSlot {
                name: path.display().to_string(),
                staging,
            });
        }

        self.ready = Some(ReadySurface {
            sources: slots,
            cursor: RotationCursor::new(source_count),
            backend,
        });
        info!("Surface ready");
        Ok(())
    }

    /// Shows the next source image.
    ///
    /// Failures are logged and returned as [`FrameOutcome::Skipped`], never propagated.
    /// The cursor advances whether or not the frame made it to the screen, so a failed
    /// frame does not hold the rotation back.
    pub fn render_frame(&mut self) -> FrameOutcome {
        let sync_interval = self.settings.sync_interval;
        let Some(ready) = self.ready.as_mut() else {
            return FrameOutcome::NotReady;
        };

        let source_index = ready.cursor.advance();
        match ready.present_source(source_index, sync_interval) {
            Ok(()) => FrameOutcome::Presented { source_index },
            Err(error) => {
                error!(
                    "Skipping frame for {}: {}",
                    ready.sources[source_index].name, error
                );
                ready.backend.report_diagnostics();
                FrameOutcome::Skipped {
                    source_index,
                    error,
                }
            }
        }
    }

    /// Releases the swap surface, the staging buffers and the device. Safe to call in
    /// any state, any number of times.
    pub fn shutdown(&mut self) {
        if self.ready.take().is_some() {
            info!("Surface released");
        }
    }
}

impl<B: SurfaceBackend> Default for PresentationSurface<B> {
    fn default() -> Self {
        Self::new(SurfaceSettings::default())
    }
}
