use tracing::info;
use tracing::warn;
use windows::core::*;
use windows::Win32::Foundation::*;
use windows::Win32::Graphics::Direct3D::*;
use windows::Win32::Graphics::Direct3D11::*;
use windows::Win32::Graphics::Dxgi::*;

const FEATURE_LEVELS: [D3D_FEATURE_LEVEL; 4] = [
    D3D_FEATURE_LEVEL_11_1,
    D3D_FEATURE_LEVEL_11_0,
    D3D_FEATURE_LEVEL_10_1,
    D3D_FEATURE_LEVEL_10_0,
];

/// Creates a device and immediate context on the default hardware adapter.
///
/// Debug builds ask for the debug layer first and fall back to a plain device when the
/// SDK layers are not installed.
pub fn create_device() -> Result<(ID3D11Device, ID3D11DeviceContext)> {
    if cfg!(debug_assertions) {
        match create_device_with_flags(D3D11_CREATE_DEVICE_DEBUG) {
            Ok(pair) => {
                info!("D3D11 Debug Layer Enabled");
                return Ok(pair);
            }
            Err(e) if e.code() == DXGI_ERROR_SDK_COMPONENT_MISSING => {
                warn!("Warning: D3D11 Debug Layer unavailable.");
            }
            Err(e) => return Err(e),
        }
    }
    create_device_with_flags(D3D11_CREATE_DEVICE_FLAG(0))
}

fn create_device_with_flags(
    flags: D3D11_CREATE_DEVICE_FLAG,
) -> Result<(ID3D11Device, ID3D11DeviceContext)> {
    let mut device: Option<ID3D11Device> = None;
    let mut context: Option<ID3D11DeviceContext> = None;
    let mut feature_level = D3D_FEATURE_LEVEL::default();
    unsafe {
        D3D11CreateDevice(
            None, // default adapter
            D3D_DRIVER_TYPE_HARDWARE,
            HMODULE::default(),
            flags,
            Some(FEATURE_LEVELS.as_slice()),
            D3D11_SDK_VERSION,
            Some(&mut device),
            Some(&mut feature_level),
            Some(&mut context),
        )
    }?;

    match (device, context) {
        (Some(device), Some(context)) => {
            info!(
                "Created D3D11 device at feature level {}.{}",
                feature_level.0 >> 12,
                (feature_level.0 >> 8) & 0xf
            );
            Ok((device, context))
        }
        _ => Err(Error::new(E_POINTER, "D3D11CreateDevice returned no device")),
    }
}
