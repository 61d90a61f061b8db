use crate::texture::{self, RgbaImg};
use crate::vertex::{create_vertex_buffer_layout, INDICES_CUBE, VERTICES_CUBE};
use crate::{scene, MaterialKind, PointLight, ScenePiece};
use cgmath::{EuclideanSpace, Matrix, Matrix4, SquareMatrix, Vector3};
use hecs::World;
use std::borrow::Cow;
use std::sync::Arc;
use wgpu::util::{BufferInitDescriptor, DeviceExt};
use wgpu::{MemoryHints, SamplerDescriptor, ShaderSource};
use winit::window::Window;

/// Uniform slot stride for the dynamic-offset object buffers. Matches the
/// spec-guaranteed `min_uniform_buffer_offset_alignment` of 256.
const OBJECT_STRIDE: u64 = 256;

const SHININESS: f32 = 32.0;
const BULB_SCALE: f32 = 0.2;
const BULB_COLOR: [f32; 4] = [0.8, 0.8, 0.8, 1.0];
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.5,
    g: 0.5,
    b: 0.5,
    a: 1.0,
};

/// One light record in the frame uniform. Everything is a vec4 for WGSL
/// struct layout; `attenuation` packs (k_c, k_l, k_q, unused).
#[repr(C)]
#[derive(Default, Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct PointLightUniform {
    position: [f32; 4],
    ambient: [f32; 4],
    diffuse: [f32; 4],
    specular: [f32; 4],
    attenuation: [f32; 4],
}

impl PointLightUniform {
    fn from_light(light: &PointLight) -> Self {
        let (ambient, diffuse, specular) = light.contribution();
        let extend = |v: Vector3<f32>| [v.x, v.y, v.z, 0.0];
        Self {
            position: [light.position.x, light.position.y, light.position.z, 1.0],
            ambient: extend(ambient),
            diffuse: extend(diffuse),
            specular: extend(specular),
            attenuation: [light.k_constant, light.k_linear, light.k_quadratic, 0.0],
        }
    }
}

#[repr(C)]
#[derive(Default, Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct FrameUniform {
    view_proj: [[f32; 4]; 4],
    view_pos: [f32; 4],
    lights: [PointLightUniform; scene::LIGHT_COUNT],
}

/// Per-draw state for a textured piece; one 256-byte slot per piece.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct ObjectUniform {
    model: [[f32; 4]; 4],
    normal: [[f32; 4]; 4],
}

/// Per-draw state for a flat-colored bulb marker.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct BulbUniform {
    model: [[f32; 4]; 4],
    color: [f32; 4],
}

struct Material {
    bind_group: wgpu::BindGroup,
}

pub struct WgpuCtx<'window> {
    surface: wgpu::Surface<'window>,
    surface_config: wgpu::SurfaceConfiguration,
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    lit_pipeline: wgpu::RenderPipeline,
    flat_pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    frame_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    materials: Vec<Material>,
    object_buffer: wgpu::Buffer,
    object_bind_group: wgpu::BindGroup,
    bulb_buffer: wgpu::Buffer,
    bulb_bind_group: wgpu::BindGroup,
    depth_texture: wgpu::Texture,
    depth_texture_view: wgpu::TextureView,
}

impl<'window> WgpuCtx<'window> {
    fn create_depth_texture(
        device: &wgpu::Device,
        config: &wgpu::SurfaceConfiguration,
    ) -> (wgpu::Texture, wgpu::TextureView) {
        let depth_texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width: config.width,
                height: config.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Depth32Float,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let depth_texture_view = depth_texture.create_view(&wgpu::TextureViewDescriptor::default());
        (depth_texture, depth_texture_view)
    }

    pub async fn new_async(window: Arc<Window>) -> WgpuCtx<'window> {
        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(Arc::clone(&window))
            .expect("Failed to create surface");
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                force_fallback_adapter: false,
                compatible_surface: Some(&surface),
            })
            .await
            .expect("Failed to find an appropriate adapter");

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: None,
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: MemoryHints::Performance,
                },
                None,
            )
            .await
            .expect("Failed to create device");

        let device = Arc::new(device);
        let queue = Arc::new(queue);

        let size = window.inner_size();
        let width = size.width.max(1);
        let height = size.height.max(1);
        let surface_config = surface
            .get_default_config(&adapter, width, height)
            .expect("Surface is incompatible with the adapter");
        surface.configure(&device, &surface_config);

        let vertex_buffer = device.create_buffer_init(&BufferInitDescriptor {
            label: Some("Cube Vertex Buffer"),
            contents: bytemuck::cast_slice(VERTICES_CUBE),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&BufferInitDescriptor {
            label: Some("Cube Index Buffer"),
            contents: bytemuck::cast_slice(INDICES_CUBE),
            usage: wgpu::BufferUsages::INDEX,
        });

        // Frame uniform: view-projection, eye position, and the light array.
        let frame_buffer = device.create_buffer_init(&BufferInitDescriptor {
            label: Some("Frame Uniform Buffer"),
            contents: bytemuck::cast_slice(&[FrameUniform::default()]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let frame_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
                label: Some("frame_bind_group_layout"),
            });
        let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &frame_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_buffer.as_entire_binding(),
            }],
            label: Some("frame_bind_group"),
        });

        // Repeat-wrapped sampler shared by every material.
        let sampler = device.create_sampler(&SamplerDescriptor {
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let material_params_buffer = device.create_buffer_init(&BufferInitDescriptor {
            label: Some("Material Params Buffer"),
            contents: bytemuck::cast_slice(&[[SHININESS, 0.0, 0.0, 0.0]]),
            usage: wgpu::BufferUsages::UNIFORM,
        });

        let material_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            multisampled: false,
                            view_dimension: wgpu::TextureViewDimension::D2,
                            sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            multisampled: false,
                            view_dimension: wgpu::TextureViewDimension::D2,
                            sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 2,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 3,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    },
                ],
                label: Some("material_bind_group_layout"),
            });

        // One material per texture kind; this scene uses the same image as
        // both diffuse and specular map.
        let materials = MaterialKind::ALL
            .iter()
            .map(|kind| {
                let img = RgbaImg::load(&format!("./assets/{}", kind.file_name()));
                let (_texture, view) =
                    texture::create_texture(&device, &queue, &img, kind.file_name());
                let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                    layout: &material_bind_group_layout,
                    entries: &[
                        wgpu::BindGroupEntry {
                            binding: 0,
                            resource: wgpu::BindingResource::TextureView(&view),
                        },
                        wgpu::BindGroupEntry {
                            binding: 1,
                            resource: wgpu::BindingResource::TextureView(&view),
                        },
                        wgpu::BindGroupEntry {
                            binding: 2,
                            resource: wgpu::BindingResource::Sampler(&sampler),
                        },
                        wgpu::BindGroupEntry {
                            binding: 3,
                            resource: material_params_buffer.as_entire_binding(),
                        },
                    ],
                    label: Some(kind.file_name()),
                });
                Material { bind_group }
            })
            .collect();

        // Per-draw uniforms live in one buffer each, indexed by dynamic
        // offset, so the whole frame needs a single write per buffer.
        let object_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Object Uniform Buffer"),
            size: OBJECT_STRIDE * scene::piece_count() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let object_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: true,
                        min_binding_size: wgpu::BufferSize::new(
                            std::mem::size_of::<ObjectUniform>() as u64,
                        ),
                    },
                    count: None,
                }],
                label: Some("object_bind_group_layout"),
            });
        let object_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &object_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &object_buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(std::mem::size_of::<ObjectUniform>() as u64),
                }),
            }],
            label: Some("object_bind_group"),
        });

        let bulb_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Bulb Uniform Buffer"),
            size: OBJECT_STRIDE * scene::LIGHT_COUNT as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bulb_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: true,
                        min_binding_size: wgpu::BufferSize::new(
                            std::mem::size_of::<BulbUniform>() as u64,
                        ),
                    },
                    count: None,
                }],
                label: Some("bulb_bind_group_layout"),
            });
        let bulb_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &bulb_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &bulb_buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(std::mem::size_of::<BulbUniform>() as u64),
                }),
            }],
            label: Some("bulb_bind_group"),
        });

        let lit_pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("lit_pipeline_layout"),
            bind_group_layouts: &[
                &frame_bind_group_layout,
                &material_bind_group_layout,
                &object_bind_group_layout,
            ],
            push_constant_ranges: &[],
        });
        let lit_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("House Shader"),
            source: ShaderSource::Wgsl(Cow::Borrowed(include_str!("house.wgsl"))),
        });
        let lit_pipeline = create_pipeline(
            &device,
            surface_config.format,
            &lit_pipeline_layout,
            &lit_shader,
        );

        let flat_pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("flat_pipeline_layout"),
            bind_group_layouts: &[&frame_bind_group_layout, &bulb_bind_group_layout],
            push_constant_ranges: &[],
        });
        let flat_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Bulb Shader"),
            source: ShaderSource::Wgsl(Cow::Borrowed(include_str!("flat.wgsl"))),
        });
        let flat_pipeline = create_pipeline(
            &device,
            surface_config.format,
            &flat_pipeline_layout,
            &flat_shader,
        );

        let (depth_texture, depth_texture_view) =
            Self::create_depth_texture(&device, &surface_config);

        WgpuCtx {
            surface,
            surface_config,
            device,
            queue,
            lit_pipeline,
            flat_pipeline,
            vertex_buffer,
            index_buffer,
            frame_buffer,
            frame_bind_group,
            materials,
            object_buffer,
            object_bind_group,
            bulb_buffer,
            bulb_bind_group,
            depth_texture,
            depth_texture_view,
        }
    }

    /// Synchronous constructor that blocks on async initialization.
    pub fn new(window: Arc<Window>) -> WgpuCtx<'window> {
        pollster::block_on(WgpuCtx::new_async(window))
    }

    pub fn resize(&mut self, new_size: (u32, u32)) {
        let (width, height) = new_size;
        self.surface_config.width = width.max(1);
        self.surface_config.height = height.max(1);
        self.surface.configure(&self.device, &self.surface_config);

        let (depth_texture, depth_texture_view) =
            Self::create_depth_texture(&self.device, &self.surface_config);
        self.depth_texture = depth_texture;
        self.depth_texture_view = depth_texture_view;
    }

    /// Uploads the per-frame camera and light state. Light records land in
    /// the array slot named by their 1-based `slot`.
    pub fn update_frame_uniform(
        &mut self,
        view_proj: Matrix4<f32>,
        view_pos: [f32; 3],
        world: &World,
    ) {
        let mut frame = FrameUniform {
            view_proj: view_proj.into(),
            view_pos: [view_pos[0], view_pos[1], view_pos[2], 1.0],
            ..Default::default()
        };
        for (_, light) in world.query::<&PointLight>().iter() {
            let slot = light.slot as usize;
            debug_assert!((1..=scene::LIGHT_COUNT).contains(&slot));
            frame.lights[slot - 1] = PointLightUniform::from_light(light);
        }
        self.queue
            .write_buffer(&self.frame_buffer, 0, bytemuck::cast_slice(&[frame]));
    }

    /// Draws one frame: every house piece in ascending index order with its
    /// textured material, then a small flat-colored marker cube per light.
    pub fn draw(&mut self, world: &World, base: Matrix4<f32>) {
        // Stage all object uniforms first; one buffer write per buffer.
        let mut pieces: Vec<(usize, usize, Matrix4<f32>)> = world
            .query::<&ScenePiece>()
            .iter()
            .map(|(_, piece)| (piece.index, piece.material.index(), piece.model_matrix(base)))
            .collect();
        pieces.sort_unstable_by_key(|(index, _, _)| *index);

        let mut object_bytes = vec![0u8; OBJECT_STRIDE as usize * pieces.len()];
        for (i, (_, _, model)) in pieces.iter().enumerate() {
            let object = ObjectUniform {
                model: (*model).into(),
                normal: normal_matrix(*model).into(),
            };
            let start = i * OBJECT_STRIDE as usize;
            object_bytes[start..start + std::mem::size_of::<ObjectUniform>()]
                .copy_from_slice(bytemuck::bytes_of(&object));
        }
        self.queue.write_buffer(&self.object_buffer, 0, &object_bytes);

        // Bulb markers sit at the raw light positions, outside the base
        // transform, exactly where the lighting math says the lights are.
        let mut bulbs: Vec<(u32, Matrix4<f32>)> = world
            .query::<&PointLight>()
            .iter()
            .map(|(_, light)| {
                let model = Matrix4::from_translation(light.position.to_vec())
                    * Matrix4::from_scale(BULB_SCALE);
                (light.slot, model)
            })
            .collect();
        bulbs.sort_unstable_by_key(|(slot, _)| *slot);

        let mut bulb_bytes = vec![0u8; OBJECT_STRIDE as usize * bulbs.len()];
        for (i, (_, model)) in bulbs.iter().enumerate() {
            let bulb = BulbUniform {
                model: (*model).into(),
                color: BULB_COLOR,
            };
            let start = i * OBJECT_STRIDE as usize;
            bulb_bytes[start..start + std::mem::size_of::<BulbUniform>()]
                .copy_from_slice(bytemuck::bytes_of(&bulb));
        }
        self.queue.write_buffer(&self.bulb_buffer, 0, &bulb_bytes);

        let surface_texture = self
            .surface
            .get_current_texture()
            .expect("Failed to acquire next swap chain texture");
        let surface_texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: None });

        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_texture_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            rpass.set_pipeline(&self.lit_pipeline);
            rpass.set_bind_group(0, &self.frame_bind_group, &[]);
            rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
            for (i, (_, material, _)) in pieces.iter().enumerate() {
                rpass.set_bind_group(1, &self.materials[*material].bind_group, &[]);
                rpass.set_bind_group(
                    2,
                    &self.object_bind_group,
                    &[(i as u64 * OBJECT_STRIDE) as u32],
                );
                rpass.draw_indexed(0..INDICES_CUBE.len() as u32, 0, 0..1);
            }

            rpass.set_pipeline(&self.flat_pipeline);
            rpass.set_bind_group(0, &self.frame_bind_group, &[]);
            for i in 0..bulbs.len() {
                rpass.set_bind_group(
                    1,
                    &self.bulb_bind_group,
                    &[(i as u64 * OBJECT_STRIDE) as u32],
                );
                rpass.draw_indexed(0..INDICES_CUBE.len() as u32, 0, 0..1);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        surface_texture.present();
    }
}

/// Inverse-transpose of the model matrix, computed host-side since WGSL has
/// no `inverse`. Falls back to identity for a degenerate (zero-scale) model.
fn normal_matrix(model: Matrix4<f32>) -> Matrix4<f32> {
    model
        .invert()
        .map(|inv| inv.transpose())
        .unwrap_or_else(Matrix4::identity)
}

fn create_pipeline(
    device: &wgpu::Device,
    swap_chain_format: wgpu::TextureFormat,
    pipeline_layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: None,
        layout: Some(pipeline_layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[create_vertex_buffer_layout()],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(swap_chain_format.into())],
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            // Several pieces carry negative extents that flip winding, so
            // visibility is depth-test only.
            cull_mode: None,
            unclipped_depth: false,
            polygon_mode: wgpu::PolygonMode::Fill,
            conservative: false,
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: wgpu::TextureFormat::Depth32Float,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Point3;

    #[test]
    fn off_light_uniform_zeroes_colors_but_keeps_position() {
        let mut light = PointLight {
            slot: 3,
            position: Point3::new(-1.5, 1.5, 0.0),
            ambient: Vector3::new(0.05, 0.05, 0.05),
            diffuse: Vector3::new(0.8, 0.8, 0.8),
            specular: Vector3::new(1.0, 1.0, 1.0),
            k_constant: 1.0,
            k_linear: 0.09,
            k_quadratic: 0.032,
            on: true,
        };
        let on = PointLightUniform::from_light(&light);
        assert_eq!(on.diffuse, [0.8, 0.8, 0.8, 0.0]);

        light.turn_off();
        let off = PointLightUniform::from_light(&light);
        assert_eq!(off.ambient, [0.0; 4]);
        assert_eq!(off.diffuse, [0.0; 4]);
        assert_eq!(off.specular, [0.0; 4]);
        assert_eq!(off.position, on.position);
        assert_eq!(off.attenuation, on.attenuation);

        light.turn_on();
        assert_eq!(
            bytemuck::bytes_of(&PointLightUniform::from_light(&light)),
            bytemuck::bytes_of(&on)
        );
    }

    #[test]
    fn normal_matrix_undoes_nonuniform_scale() {
        let model = Matrix4::from_nonuniform_scale(2.0, 1.0, 1.0);
        let normal = normal_matrix(model);
        // A unit X normal shrinks by the inverse scale instead of stretching.
        assert!((normal.x.x - 0.5).abs() < 1e-6);
        assert!((normal.y.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn uniform_structs_fit_their_slots() {
        assert!(std::mem::size_of::<ObjectUniform>() as u64 <= OBJECT_STRIDE);
        assert!(std::mem::size_of::<BulbUniform>() as u64 <= OBJECT_STRIDE);
        assert_eq!(std::mem::size_of::<FrameUniform>(), 64 + 16 + 5 * 80);
    }
}
