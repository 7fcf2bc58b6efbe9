use tracing::info;
use widestring::U16CStr;
use windows::core::*;
use windows::Win32::Graphics::Direct3D11::ID3D11Device;
use windows::Win32::Graphics::Dxgi::*;

/// Returns the factory that owns the device's adapter, so the swap chain is created on
/// the same adapter as the device.
pub fn get_dxgi_factory(device: &ID3D11Device) -> Result<IDXGIFactory2> {
    let dxgi_device: IDXGIDevice = device.cast()?;
    let adapter = unsafe { dxgi_device.GetAdapter()? };

    let desc = unsafe { adapter.GetDesc()? };
    let adapter_name = U16CStr::from_slice_truncate(&desc.Description)
        .map(|name| name.to_string_lossy())
        .unwrap_or_else(|_| String::from("<unnamed adapter>"));
    info!(
        "Using hardware adapter: {} ({} MiB dedicated video memory)",
        adapter_name,
        desc.DedicatedVideoMemory / (1024 * 1024)
    );

    unsafe { adapter.GetParent() }
}
