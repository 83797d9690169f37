use super::shadow::{self, ShadowMap};
use super::targets::DEPTH_FORMAT;
use crate::constants::{
    FLOOR_SHADOW_OPACITY, FLOOR_SIZE, INITIAL_INSTANCE_CAPACITY, POINT_LIGHT_RANGE,
    SPOT_LIGHT_HEIGHT,
};
use glam::{Mat4, Vec3};
use grid_core::mesh::build_plane;
use grid_core::{InstanceData, MaterialParams, ShapeKind, Vertex};
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    light_view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    mesh_color: [f32; 4],
    ambient_color: [f32; 4],
    spot_color: [f32; 4],
    spot_pos: [f32; 4],
    material: [f32; 4], // metalness, roughness, reflectivity, floor shadow opacity
    light_pos: [[f32; 4]; 3], // xyz + range
    light_color: [[f32; 4]; 3],
}

impl SceneUniforms {
    pub(crate) fn new(view_proj: Mat4, camera_pos: Vec3, m: &MaterialParams) -> Self {
        let rgb = |c: [f32; 3]| [c[0], c[1], c[2], 1.0];
        let mut light_pos = [[0.0; 4]; 3];
        let mut light_color = [[0.0; 4]; 3];
        for (i, (color, pos)) in m.point_lights.iter().enumerate() {
            light_pos[i] = [pos[0], pos[1], pos[2], POINT_LIGHT_RANGE];
            light_color[i] = rgb(*color);
        }
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            light_view_proj: shadow::light_view_proj().to_cols_array_2d(),
            camera_pos: camera_pos.extend(1.0).to_array(),
            mesh_color: rgb(m.mesh_color),
            ambient_color: rgb(m.ambient_color),
            spot_color: rgb(m.spot_color),
            spot_pos: [0.0, SPOT_LIGHT_HEIGHT, 0.0, 1.0],
            material: [m.metalness, m.roughness, m.reflectivity, FLOOR_SHADOW_OPACITY],
            light_pos,
            light_color,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct InstanceRaw {
    model: [[f32; 4]; 4],
}

/// GPU copy of one shape kind's mesh plus the instances drawn with it this frame.
struct ShapeBatch {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    instance_buffer: wgpu::Buffer,
    instance_capacity: usize,
    instance_count: u32,
    staging: Vec<InstanceRaw>,
}

/// Shadow-only floor under the grid.
struct Floor {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

pub(crate) struct CellResources {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    batches: Vec<ShapeBatch>,
    shadow: ShadowMap,
    shadow_pipeline: wgpu::RenderPipeline,
    shadow_bind_group: wgpu::BindGroup,
    floor: Floor,
}

// slot 0: mesh vertices
fn mesh_layout() -> wgpu::VertexBufferLayout<'static> {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &ATTRIBUTES,
    }
}

fn uniform_entry(binding: u32, visibility: wgpu::ShaderStages) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

fn instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("instance_vb"),
        size: (std::mem::size_of::<InstanceRaw>() * capacity.max(1)) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

pub(crate) fn create_cell_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
) -> CellResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("scene_shader"),
        source: wgpu::ShaderSource::Wgsl(super::SCENE_WGSL.into()),
    });
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("scene_uniforms"),
        size: std::mem::size_of::<SceneUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let shadow = ShadowMap::new(device);
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("scene_bgl"),
        entries: &[
            uniform_entry(0, wgpu::ShaderStages::VERTEX_FRAGMENT),
            shadow::map_entry(1),
            shadow::sampler_entry(2),
        ],
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("scene_bg"),
        layout: &bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(shadow.view()),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(&shadow.sampler),
            },
        ],
    });
    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("scene_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });

    // the shadow pass only reads the uniforms, so it gets a layout without the map
    let shadow_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("shadow_bgl"),
        entries: &[uniform_entry(0, wgpu::ShaderStages::VERTEX)],
    });
    let shadow_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("shadow_bg"),
        layout: &shadow_bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });
    let shadow_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("shadow_pl"),
        bind_group_layouts: &[&shadow_bgl],
        push_constant_ranges: &[],
    });

    let vertex_buffers = [
        mesh_layout(),
        // slot 1: per-cell model matrix
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceRaw>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &wgpu::vertex_attr_array![
                2 => Float32x4, 3 => Float32x4, 4 => Float32x4, 5 => Float32x4
            ],
        },
    ];
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("scene_pipeline"),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &vertex_buffers,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    let shadow_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("shadow_pipeline"),
        layout: Some(&shadow_layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_shadow"),
            buffers: &vertex_buffers,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState {
                constant: 2,
                slope_scale: 2.0,
                clamp: 0.0,
            },
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: None,
        cache: None,
        multiview: None,
    });

    let floor_mesh = build_plane(FLOOR_SIZE);
    let floor = Floor {
        pipeline: device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("floor_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_floor"),
                buffers: &[mesh_layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            // tested against the cells but never occludes them
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: false,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_floor"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: color_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        }),
        vertex_buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("floor_vb"),
            contents: bytemuck::cast_slice(&floor_mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        }),
        index_buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("floor_ib"),
            contents: bytemuck::cast_slice(&floor_mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        }),
        index_count: floor_mesh.indices.len() as u32,
    };

    let batches = ShapeKind::ALL
        .iter()
        .map(|kind| {
            let mesh = kind.build_mesh();
            ShapeBatch {
                vertex_buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("shape_vb"),
                    contents: bytemuck::cast_slice(&mesh.vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                }),
                index_buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("shape_ib"),
                    contents: bytemuck::cast_slice(&mesh.indices),
                    usage: wgpu::BufferUsages::INDEX,
                }),
                index_count: mesh.indices.len() as u32,
                instance_buffer: instance_buffer(device, INITIAL_INSTANCE_CAPACITY),
                instance_capacity: INITIAL_INSTANCE_CAPACITY,
                instance_count: 0,
                staging: Vec::with_capacity(INITIAL_INSTANCE_CAPACITY),
            }
        })
        .collect();

    CellResources {
        pipeline,
        uniform_buffer,
        bind_group,
        batches,
        shadow,
        shadow_pipeline,
        shadow_bind_group,
        floor,
    }
}

impl CellResources {
    /// Upload uniforms and per-kind instance data for this frame.
    pub(crate) fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        uniforms: &SceneUniforms,
        instances: &[InstanceData],
    ) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));

        for b in &mut self.batches {
            b.staging.clear();
        }
        for inst in instances {
            if let Some(b) = self.batches.get_mut(inst.kind.index()) {
                b.staging.push(InstanceRaw {
                    model: inst.model.to_cols_array_2d(),
                });
            }
        }
        for b in &mut self.batches {
            if b.staging.len() > b.instance_capacity {
                b.instance_capacity = b.staging.len().next_power_of_two();
                b.instance_buffer = instance_buffer(device, b.instance_capacity);
            }
            if !b.staging.is_empty() {
                queue.write_buffer(&b.instance_buffer, 0, bytemuck::cast_slice(&b.staging));
            }
            b.instance_count = b.staging.len() as u32;
        }
    }

    pub(crate) fn shadow_view(&self) -> &wgpu::TextureView {
        self.shadow.view()
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        self.draw_batches(rpass);
    }

    /// Depth-only draw of every cell from the spot light.
    pub(crate) fn draw_shadow(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.shadow_pipeline);
        rpass.set_bind_group(0, &self.shadow_bind_group, &[]);
        self.draw_batches(rpass);
    }

    /// Blend the floor's shadow over what the cell pass left behind.
    pub(crate) fn draw_floor(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.floor.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.floor.vertex_buffer.slice(..));
        rpass.set_index_buffer(self.floor.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.floor.index_count, 0, 0..1);
    }

    fn draw_batches(&self, rpass: &mut wgpu::RenderPass<'_>) {
        for b in &self.batches {
            if b.instance_count == 0 {
                continue;
            }
            rpass.set_vertex_buffer(0, b.vertex_buffer.slice(..));
            rpass.set_vertex_buffer(1, b.instance_buffer.slice(..));
            rpass.set_index_buffer(b.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..b.index_count, 0, 0..b.instance_count);
        }
    }
}
