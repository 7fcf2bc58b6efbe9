use bevy_math::UVec2;
use windows::core::*;
use windows::Win32::Foundation::*;
use windows::Win32::Graphics::Direct3D11::ID3D11Device;
use windows::Win32::Graphics::Dxgi::Common::*;
use windows::Win32::Graphics::Dxgi::*;

pub const SWAP_CHAIN_FORMAT: DXGI_FORMAT = DXGI_FORMAT_R8G8B8A8_UNORM;

/// Creates a flip-model swap chain of `extent` for `hwnd`.
pub fn create_swap_chain(
    factory: &IDXGIFactory2,
    device: &ID3D11Device,
    hwnd: HWND,
    extent: UVec2,
    buffer_count: u32,
) -> Result<IDXGISwapChain1> {
    let swap_chain_desc = DXGI_SWAP_CHAIN_DESC1 {
        Width: extent.x,
        Height: extent.y,
        Format: SWAP_CHAIN_FORMAT,
        SampleDesc: DXGI_SAMPLE_DESC {
            Count: 1, // multisampling setting
            Quality: 0,
        },
        BufferUsage: DXGI_USAGE_RENDER_TARGET_OUTPUT,
        BufferCount: buffer_count,
        Scaling: DXGI_SCALING_STRETCH,
        SwapEffect: DXGI_SWAP_EFFECT_FLIP_SEQUENTIAL,
        ..Default::default()
    };

    let swap_chain =
        unsafe { factory.CreateSwapChainForHwnd(device, hwnd, &swap_chain_desc, None, None)? };

    // No fullscreen toggle: the surface never changes size.
    unsafe { factory.MakeWindowAssociation(hwnd, DXGI_MWA_NO_ALT_ENTER)? };

    Ok(swap_chain)
}
