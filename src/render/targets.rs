pub(crate) const HDR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;
pub(crate) const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// A 2D texture together with the view the passes attach or sample.
pub(crate) struct Target {
    pub(crate) texture: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
}

impl Target {
    pub(crate) fn new(
        device: &wgpu::Device,
        label: &str,
        (width, height): (u32, u32),
        format: wgpu::TextureFormat,
        usage: wgpu::TextureUsages,
    ) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { texture, view }
    }

    pub(crate) fn size(&self) -> [f32; 2] {
        [self.texture.width() as f32, self.texture.height() as f32]
    }
}

/// Offscreen targets, all recreated together on resize.
///
/// `hdr` holds the lit scene and `depth` is its depth buffer. `bloom_a` and
/// `bloom_b` are half-res ping-pong buffers for the bright pass and blur.
pub(crate) struct RenderTargets {
    pub(crate) hdr: Target,
    pub(crate) depth: Target,
    pub(crate) bloom_a: Target,
    pub(crate) bloom_b: Target,
}

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let sampled = wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING;
        let full = (width, height);
        let half = ((width / 2).max(1), (height / 2).max(1));
        Self {
            hdr: Target::new(device, "hdr_tex", full, HDR_FORMAT, sampled),
            depth: Target::new(
                device,
                "depth_tex",
                full,
                DEPTH_FORMAT,
                wgpu::TextureUsages::RENDER_ATTACHMENT,
            ),
            bloom_a: Target::new(device, "bloom_a", half, HDR_FORMAT, sampled),
            bloom_b: Target::new(device, "bloom_b", half, HDR_FORMAT, sampled),
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        *self = Self::new(device, width, height);
    }

    pub(crate) fn bloom_resolution(&self) -> [f32; 2] {
        self.bloom_a.size()
    }
}
