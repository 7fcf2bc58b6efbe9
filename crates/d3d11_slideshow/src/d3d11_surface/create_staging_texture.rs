use crate::source_image::SourceImage;
use windows::core::*;
use windows::Win32::Foundation::*;
use windows::Win32::Graphics::Direct3D11::*;
use windows::Win32::Graphics::Dxgi::Common::*;

use super::create_swap_chain::SWAP_CHAIN_FORMAT;

/// Creates a CPU-writable staging texture matching the swap chain format and fills it
/// with `image`.
pub fn create_staging_texture(
    device: &ID3D11Device,
    context: &ID3D11DeviceContext,
    image: &SourceImage,
) -> Result<ID3D11Texture2D> {
    let extent = image.extent();
    let desc = D3D11_TEXTURE2D_DESC {
        Width: extent.x,
        Height: extent.y,
        MipLevels: 1,
        ArraySize: 1,
        Format: SWAP_CHAIN_FORMAT,
        SampleDesc: DXGI_SAMPLE_DESC {
            Count: 1,
            Quality: 0,
        },
        Usage: D3D11_USAGE_STAGING,
        CPUAccessFlags: D3D11_CPU_ACCESS_WRITE.0 as u32,
        ..Default::default()
    };

    let mut texture: Option<ID3D11Texture2D> = None;
    unsafe { device.CreateTexture2D(&desc, None, Some(&mut texture))? };
    let texture =
        texture.ok_or_else(|| Error::new(E_POINTER, "CreateTexture2D returned no texture"))?;

    upload_rows(context, &texture, image)?;
    Ok(texture)
}

// The driver picks the row pitch, which can be wider than the image rows.
fn upload_rows(
    context: &ID3D11DeviceContext,
    texture: &ID3D11Texture2D,
    image: &SourceImage,
) -> Result<()> {
    let mut mapped = D3D11_MAPPED_SUBRESOURCE::default();
    unsafe { context.Map(texture, 0, D3D11_MAP_WRITE, 0, Some(&mut mapped))? };

    let row_pitch = mapped.RowPitch as usize;
    let destination = mapped.pData as *mut u8;
    for (y, row) in image.rows().enumerate() {
        // Safety: the mapped subresource holds `Height` rows of `RowPitch` bytes, and
        // each source row is `Width * 4` bytes, which never exceeds the pitch.
        unsafe {
            let row_start = destination.add(y * row_pitch);
            std::ptr::copy_nonoverlapping(row.as_ptr(), row_start, row.len());
        }
    }

    unsafe { context.Unmap(texture, 0) };
    Ok(())
}
