use crate::error::PresentError;
use crate::error::PresentResult;
use bevy_math::UVec2;
use std::path::Path;
use std::path::PathBuf;
use tracing::debug;
use tracing::warn;

pub const BYTES_PER_PIXEL: usize = 4;

/// Number of bytes in a tightly packed RGBA8 image of the given size.
///
/// Fails with [`PresentError::InvalidExtent`] when the size does not fit in `usize`.
pub fn expected_len(extent: UVec2) -> PresentResult<usize> {
    (extent.x as usize)
        .checked_mul(extent.y as usize)
        .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
        .ok_or(PresentError::InvalidExtent {
            width: extent.x,
            height: extent.y,
        })
}

/// How the file size compared to the size the surface needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFit {
    Exact,
    /// The file was short by this many bytes; they were zero-filled.
    ZeroFilled(usize),
    /// The file was long by this many bytes; they were dropped.
    Truncated(usize),
}

/// Raw RGBA8 pixels, rows top-to-bottom, sized exactly to the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    extent: UVec2,
    pixels: Vec<u8>,
    fit: SourceFit,
}

impl SourceImage {
    /// Reads a raw `.rgba` file from disk.
    pub fn load(path: &Path, extent: UVec2) -> PresentResult<Self> {
        let bytes = std::fs::read(path).map_err(|source| PresentError::SourceLoadFailed {
            path: PathBuf::from(path),
            source,
        })?;
        let image = Self::from_bytes(bytes, extent)?;
        match image.fit {
            SourceFit::Exact => debug!("Loaded {}", path.display()),
            SourceFit::ZeroFilled(missing) => warn!(
                "{} is {} bytes short of {}x{}, zero-filling the remainder",
                path.display(),
                missing,
                extent.x,
                extent.y
            ),
            SourceFit::Truncated(extra) => warn!(
                "{} has {} trailing bytes beyond {}x{}, ignoring them",
                path.display(),
                extra,
                extent.x,
                extent.y
            ),
        }
        Ok(image)
    }

    pub fn from_bytes(mut bytes: Vec<u8>, extent: UVec2) -> PresentResult<Self> {
        let expected = expected_len(extent)?;
        let fit = match bytes.len() {
            len if len < expected => SourceFit::ZeroFilled(expected - len),
            len if len > expected => SourceFit::Truncated(len - expected),
            _ => SourceFit::Exact,
        };
        bytes.resize(expected, 0);
        Ok(Self {
            extent,
            pixels: bytes,
            fit,
        })
    }

    pub fn extent(&self) -> UVec2 {
        self.extent
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn fit(&self) -> SourceFit {
        self.fit
    }

    pub fn row_pitch(&self) -> usize {
        self.extent.x as usize * BYTES_PER_PIXEL
    }

    /// Pixel rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.pixels.chunks_exact(self.row_pitch().max(1))
    }
}
