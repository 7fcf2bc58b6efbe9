//! Direct3D 11 implementation of the presentation surface's resource layer.
//!
//! Setup follows the usual order: device and immediate context on the default hardware
//! adapter, the DXGI factory of that adapter, then a flip-model swap chain for the window.
//! Source images live in staging textures and reach the screen through `CopyResource`
//! into the current back buffer followed by `Present`.

pub mod adapter_utils;
pub mod create_device;
pub mod create_staging_texture;
pub mod create_swap_chain;
pub mod info_queue;

use crate::config::SurfaceSettings;
use crate::error::BackendError;
use crate::error::PresentError;
use crate::error::PresentResult;
use crate::source_image::SourceImage;
use crate::surface::SurfaceBackend;
use adapter_utils::get_dxgi_factory;
use bevy_math::UVec2;
use create_device::create_device;
use create_staging_texture::create_staging_texture;
use create_swap_chain::create_swap_chain;
use info_queue::get_info_queue;
use info_queue::print_dxgi_debug_messages;
use tracing::info;
use windows::Win32::Foundation::HWND;
use windows::Win32::Graphics::Direct3D11::*;
use windows::Win32::Graphics::Dxgi::*;

/// COM references release themselves on drop; fields drop top to bottom.
pub struct D3D11Surface {
    swap_chain: IDXGISwapChain1,
    // Kept alive with the swap chain it created.
    _factory: IDXGIFactory2,
    context: ID3D11DeviceContext,
    device: ID3D11Device,
    info_queue: Option<IDXGIInfoQueue>,
}

impl SurfaceBackend for D3D11Surface {
    type Target = HWND;
    type Staging = ID3D11Texture2D;
    type BackBuffer = ID3D11Texture2D;

    fn create(hwnd: &HWND, extent: UVec2, settings: &SurfaceSettings) -> PresentResult<Self> {
        let info_queue = get_info_queue();

        let (device, context) = create_device().map_err(|e| {
            print_dxgi_debug_messages(&info_queue);
            PresentError::DeviceCreationFailed(e.into())
        })?;
        let factory = get_dxgi_factory(&device).map_err(|e| {
            print_dxgi_debug_messages(&info_queue);
            PresentError::DeviceCreationFailed(e.into())
        })?;

        let swap_chain = create_swap_chain(&factory, &device, *hwnd, extent, settings.buffer_count)
            .map_err(|e| {
                print_dxgi_debug_messages(&info_queue);
                PresentError::SurfaceCreationFailed(e.into())
            })?;
        info!(
            "Created {}x{} flip-model swap chain with {} buffers",
            extent.x, extent.y, settings.buffer_count
        );

        Ok(Self {
            swap_chain,
            _factory: factory,
            context,
            device,
            info_queue,
        })
    }

    fn create_staging(&mut self, image: &SourceImage) -> Result<ID3D11Texture2D, BackendError> {
        Ok(create_staging_texture(&self.device, &self.context, image)?)
    }

    fn acquire_back_buffer(&mut self) -> Result<ID3D11Texture2D, BackendError> {
        // With the flip model, buffer 0 is always the one to draw into next.
        Ok(unsafe { self.swap_chain.GetBuffer::<ID3D11Texture2D>(0)? })
    }

    fn copy_to_back_buffer(
        &mut self,
        back_buffer: &mut ID3D11Texture2D,
        source: &ID3D11Texture2D,
    ) -> Result<(), BackendError> {
        unsafe { self.context.CopyResource(&*back_buffer, source) };
        Ok(())
    }

    fn present(
        &mut self,
        back_buffer: ID3D11Texture2D,
        sync_interval: u32,
    ) -> Result<(), BackendError> {
        drop(back_buffer);
        // Sync interval 0 disables vsync.
        unsafe { self.swap_chain.Present(sync_interval, DXGI_PRESENT::default()) }.ok()?;
        Ok(())
    }

    fn report_diagnostics(&self) {
        print_dxgi_debug_messages(&self.info_queue);
    }
}
