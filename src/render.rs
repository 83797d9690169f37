use crate::constants::{BLOOM_STRENGTH, BLOOM_THRESHOLD};
use glam::{Mat4, Vec3};
use grid_core::{InstanceData, MaterialParams};
use web_sys as web;

mod cells;
mod post;
mod shadow;
mod targets;

use cells::{create_cell_resources, CellResources, SceneUniforms};
use post::{PostBindGroups, PostResources};
use targets::{RenderTargets, HDR_FORMAT};

// Shaders bundled as string constants
pub(crate) static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub(crate) static POST_WGSL: &str = include_str!("../shaders/post.wgsl");

/// Everything the renderer needs from the scene for one frame.
pub struct FrameInput<'f> {
    pub instances: &'f [InstanceData],
    pub camera_eye: Vec3,
    pub view_proj: Mat4,
    pub material: &'f MaterialParams,
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    cells: CellResources,
    targets: RenderTargets,
    post: PostResources,
    post_groups: PostBindGroups,
    width: u32,
    height: u32,
    bloom: bool,
}

impl GpuState {
    pub async fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let cells = create_cell_resources(&device, HDR_FORMAT);
        let targets = RenderTargets::new(&device, width, height);
        let post = post::create_post_resources(&device, format);
        let post_groups = post::create_bind_groups(&device, &post, &targets);
        log::info!("[gpu] surface {}x{} format={:?}", width, height, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            cells,
            targets,
            post,
            post_groups,
            width,
            height,
            bloom: true,
        })
    }

    pub fn set_bloom(&mut self, enabled: bool) {
        self.bloom = enabled;
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);

            // Recreate offscreen render targets and the bind groups that sample them
            self.targets.recreate(&self.device, width, height);
            self.post_groups = post::create_bind_groups(&self.device, &self.post, &self.targets);
        }
    }

    pub fn render(&mut self, input: &FrameInput<'_>) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        let bg = input.material.background_color;
        let clear = wgpu::Color {
            r: bg[0] as f64,
            g: bg[1] as f64,
            b: bg[2] as f64,
            a: 1.0,
        };

        let uniforms = SceneUniforms::new(input.view_proj, input.camera_eye, input.material);
        self.cells
            .prepare(&self.device, &self.queue, &uniforms, input.instances);

        // Pass 0: cell depth from the spot light
        {
            let mut spass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("shadow_pass"),
                color_attachments: &[],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: self.cells.shadow_view(),
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.cells.draw_shadow(&mut spass);
        }

        // Pass 1: lit cells and the shadowed floor into HDR
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.cells.draw(&mut rpass);
            self.cells.draw_floor(&mut rpass);
        }

        let res = self.targets.bloom_resolution();
        let strength = if self.bloom { BLOOM_STRENGTH } else { 0.0 };
        let uniforms = &self.post.uniforms;
        post::write_post_uniforms(&self.queue, &uniforms.base, res, strength, BLOOM_THRESHOLD, [0.0, 0.0]);

        if self.bloom {
            post::write_post_uniforms(&self.queue, &uniforms.blur_h, res, strength, BLOOM_THRESHOLD, [1.0, 0.0]);
            post::write_post_uniforms(&self.queue, &uniforms.blur_v, res, strength, BLOOM_THRESHOLD, [0.0, 1.0]);

            // Pass 2: bright pass → bloom_a
            post::blit(
                &mut encoder,
                "bright_pass",
                &self.targets.bloom_a.view,
                wgpu::Color::BLACK,
                &self.post.bright_pipeline,
                &self.post_groups.hdr,
                None,
            );
            // Pass 3: blur horizontal bloom_a -> bloom_b
            post::blit(
                &mut encoder,
                "blur_h",
                &self.targets.bloom_b.view,
                wgpu::Color::BLACK,
                &self.post.blur_pipeline,
                &self.post_groups.from_bloom_a,
                None,
            );
            // Pass 4: blur vertical bloom_b -> bloom_a
            post::blit(
                &mut encoder,
                "blur_v",
                &self.targets.bloom_a.view,
                wgpu::Color::BLACK,
                &self.post.blur_pipeline,
                &self.post_groups.from_bloom_b,
                None,
            );
        }

        // Pass 5: composite to swapchain
        post::blit(
            &mut encoder,
            "composite",
            &view,
            clear,
            &self.post.composite_pipeline,
            &self.post_groups.hdr,
            Some(&self.post_groups.bloom_a_only),
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
