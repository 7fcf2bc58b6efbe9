//! In-memory resource layer that counts every create and release.

use super::SurfaceBackend;
use crate::config::SurfaceSettings;
use crate::error::BackendError;
use crate::error::PresentError;
use crate::error::PresentResult;
use crate::source_image::SourceImage;
use bevy_math::UVec2;
use std::cell::Ref;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Device,
    Surface,
    Staging,
    BackBuffer,
}

#[derive(Debug, Default)]
pub struct Ledger {
    created: HashMap<ResourceKind, usize>,
    released: HashMap<ResourceKind, usize>,
    outstanding_back_buffers: usize,
    pub max_outstanding_back_buffers: usize,
    pub copies: usize,
    /// Back buffer contents at each successful present.
    pub presented: Vec<Vec<u8>>,
    pub sync_intervals: Vec<u32>,
    pub buffer_count: Option<u32>,
    pub diagnostics_reports: usize,
}

impl Ledger {
    pub fn created(&self, kind: ResourceKind) -> usize {
        self.created.get(&kind).copied().unwrap_or(0)
    }

    pub fn released(&self, kind: ResourceKind) -> usize {
        self.released.get(&kind).copied().unwrap_or(0)
    }

    pub fn is_balanced(&self) -> bool {
        [
            ResourceKind::Device,
            ResourceKind::Surface,
            ResourceKind::Staging,
            ResourceKind::BackBuffer,
        ]
        .into_iter()
        .all(|kind| self.created(kind) == self.released(kind))
    }
}

/// Steps that should fail. Frame numbers count `acquire_back_buffer` calls from zero.
#[derive(Debug, Default, Clone)]
pub struct Faults {
    pub device: bool,
    pub surface: bool,
    pub staging_at: Option<usize>,
    pub acquire_on_frames: Vec<usize>,
    pub copy_on_frames: Vec<usize>,
    pub present_on_frames: Vec<usize>,
}

#[derive(Default)]
pub struct MockTarget {
    ledger: Rc<RefCell<Ledger>>,
    faults: Faults,
}

impl MockTarget {
    pub fn with_faults(faults: Faults) -> Self {
        Self {
            faults,
            ..Default::default()
        }
    }

    pub fn ledger(&self) -> Ref<'_, Ledger> {
        self.ledger.borrow()
    }
}

/// Counts itself as created on construction and released on drop.
struct Tracked {
    kind: ResourceKind,
    ledger: Rc<RefCell<Ledger>>,
}

impl Tracked {
    fn new(kind: ResourceKind, ledger: &Rc<RefCell<Ledger>>) -> Self {
        {
            let mut ledger = ledger.borrow_mut();
            *ledger.created.entry(kind).or_default() += 1;
            if kind == ResourceKind::BackBuffer {
                ledger.outstanding_back_buffers += 1;
                ledger.max_outstanding_back_buffers = ledger
                    .max_outstanding_back_buffers
                    .max(ledger.outstanding_back_buffers);
            }
        }
        Self {
            kind,
            ledger: Rc::clone(ledger),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        let mut ledger = self.ledger.borrow_mut();
        *ledger.released.entry(self.kind).or_default() += 1;
        if self.kind == ResourceKind::BackBuffer {
            ledger.outstanding_back_buffers -= 1;
        }
    }
}

pub struct MockStaging {
    pixels: Vec<u8>,
    _tracked: Tracked,
}

pub struct MockBackBuffer {
    contents: Vec<u8>,
    _tracked: Tracked,
}

pub struct MockBackend {
    ledger: Rc<RefCell<Ledger>>,
    faults: Faults,
    extent: UVec2,
    staging_created: usize,
    frame: usize,
    _surface: Tracked,
    _device: Tracked,
}

impl SurfaceBackend for MockBackend {
    type Target = MockTarget;
    type Staging = MockStaging;
    type BackBuffer = MockBackBuffer;

    fn create(
        target: &MockTarget,
        extent: UVec2,
        settings: &SurfaceSettings,
    ) -> PresentResult<Self> {
        if target.faults.device {
            return Err(PresentError::DeviceCreationFailed("no adapter".into()));
        }
        let device = Tracked::new(ResourceKind::Device, &target.ledger);
        if target.faults.surface {
            return Err(PresentError::SurfaceCreationFailed(
                "window already has a swap chain".into(),
            ));
        }
        let surface = Tracked::new(ResourceKind::Surface, &target.ledger);
        target.ledger.borrow_mut().buffer_count = Some(settings.buffer_count);
        Ok(Self {
            ledger: Rc::clone(&target.ledger),
            faults: target.faults.clone(),
            extent,
            staging_created: 0,
            frame: 0,
            _surface: surface,
            _device: device,
        })
    }

    fn create_staging(&mut self, image: &SourceImage) -> Result<MockStaging, BackendError> {
        let index = self.staging_created;
        self.staging_created += 1;
        if self.faults.staging_at == Some(index) {
            return Err("out of video memory".into());
        }
        assert_eq!(image.extent(), self.extent);
        Ok(MockStaging {
            pixels: image.pixels().to_vec(),
            _tracked: Tracked::new(ResourceKind::Staging, &self.ledger),
        })
    }

    fn acquire_back_buffer(&mut self) -> Result<MockBackBuffer, BackendError> {
        let frame = self.frame;
        self.frame += 1;
        if self.faults.acquire_on_frames.contains(&frame) {
            return Err("back buffer unavailable".into());
        }
        Ok(MockBackBuffer {
            contents: Vec::new(),
            _tracked: Tracked::new(ResourceKind::BackBuffer, &self.ledger),
        })
    }

    fn copy_to_back_buffer(
        &mut self,
        back_buffer: &mut MockBackBuffer,
        source: &MockStaging,
    ) -> Result<(), BackendError> {
        if self.faults.copy_on_frames.contains(&(self.frame - 1)) {
            return Err("copy source is still mapped".into());
        }
        back_buffer.contents.clone_from(&source.pixels);
        self.ledger.borrow_mut().copies += 1;
        Ok(())
    }

    fn present(
        &mut self,
        back_buffer: MockBackBuffer,
        sync_interval: u32,
    ) -> Result<(), BackendError> {
        if self.faults.present_on_frames.contains(&(self.frame - 1)) {
            return Err("device removed".into());
        }
        let mut ledger = self.ledger.borrow_mut();
        ledger.sync_intervals.push(sync_interval);
        ledger.presented.push(back_buffer.contents.clone());
        drop(ledger);
        drop(back_buffer);
        Ok(())
    }

    fn report_diagnostics(&self) {
        self.ledger.borrow_mut().diagnostics_reports += 1;
    }
}
