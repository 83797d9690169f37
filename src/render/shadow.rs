use super::targets::{Target, DEPTH_FORMAT};
use crate::constants::{SHADOW_MAP_SIZE, SPOT_LIGHT_HEIGHT, SPOT_SHADOW_FOV_DEG};
use glam::Mat4;
use grid_core::Camera;

/// Depth of the cells as seen from the spot light.
pub(crate) struct ShadowMap {
    pub(crate) target: Target,
    pub(crate) sampler: wgpu::Sampler,
}

impl ShadowMap {
    pub(crate) fn new(device: &wgpu::Device) -> Self {
        let target = Target::new(
            device,
            "shadow_map",
            (SHADOW_MAP_SIZE, SHADOW_MAP_SIZE),
            DEPTH_FORMAT,
            wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
        );
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("shadow_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            compare: Some(wgpu::CompareFunction::LessEqual),
            ..Default::default()
        });
        Self { target, sampler }
    }

    pub(crate) fn view(&self) -> &wgpu::TextureView {
        &self.target.view
    }
}

/// The spot light looks straight down from above the grid, like the main camera.
pub(crate) fn light_view_proj() -> Mat4 {
    Camera::top_down(SPOT_LIGHT_HEIGHT, SPOT_SHADOW_FOV_DEG, 1.0).view_projection()
}

pub(crate) fn map_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Texture {
            multisampled: false,
            view_dimension: wgpu::TextureViewDimension::D2,
            sample_type: wgpu::TextureSampleType::Depth,
        },
        count: None,
    }
}

pub(crate) fn sampler_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Comparison),
        count: None,
    }
}
