use log::warn;

/// Decoded RGBA pixel data, ready for upload.
pub struct RgbaImg {
    pub width: u32,
    pub height: u32,
    pub bytes: Vec<u8>,
}

impl RgbaImg {
    /// Loads and decodes an image file. A missing or undecodable file is not
    /// fatal: it logs a warning and falls back to a single blank pixel so the
    /// scene keeps rendering with a valid texture handle.
    pub fn load(path: &str) -> Self {
        match image::open(path) {
            Ok(img) => {
                let rgba = img.to_rgba8();
                let (width, height) = rgba.dimensions();
                Self {
                    width,
                    height,
                    bytes: rgba.into_raw(),
                }
            }
            Err(err) => {
                warn!("failed to load texture {path}: {err}, using placeholder");
                Self::placeholder()
            }
        }
    }

    pub fn placeholder() -> Self {
        Self {
            width: 1,
            height: 1,
            bytes: vec![0xff; 4],
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.width == 1 && self.height == 1
    }
}

/// Uploads decoded pixels into a GPU texture and returns the texture with a
/// default view.
pub fn create_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    img: &RgbaImg,
    label: &str,
) -> (wgpu::Texture, wgpu::TextureView) {
    let size = wgpu::Extent3d {
        width: img.width,
        height: img.height,
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &img.bytes,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * img.width),
            rows_per_image: Some(img.height),
        },
        size,
    );
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    (texture, view)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_placeholder() {
        let img = RgbaImg::load("./assets/does-not-exist.jpg");
        assert!(img.is_placeholder());
        assert_eq!(img.bytes.len(), 4);
    }

    #[test]
    fn placeholder_is_one_opaque_pixel() {
        let img = RgbaImg::placeholder();
        assert_eq!((img.width, img.height), (1, 1));
        assert_eq!(img.bytes, vec![0xff; 4]);
    }
}
