//! Glyph quads for the mass strength labels

use crate::label::{glyph_rect, label_font_px, label_origin};
use crate::text::atlas::{AtlasSlot, GlyphAtlas};
use crate::text::shaper::LabelShaper;
use cosmic_text::CacheKey;
use field_physics::Mass;
use glam::Vec2;
use std::collections::HashMap;

const ATLAS_SIZE_PX: u32 = 512;
const ATLAS_PADDING_PX: u32 = 1;
const MIN_GLYPH_CAPACITY: usize = 64;

/// Instance data for one textured glyph quad
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlyphInstance {
    /// Top-left corner in canvas pixels
    pub origin: [f32; 2],
    pub size: [f32; 2],
    pub uv_min: [f32; 2],
    pub uv_max: [f32; 2],
    /// Linear RGBA, alpha is multiplied by glyph coverage
    pub color: [f32; 4],
}

impl GlyphInstance {
    pub fn new(origin: Vec2, size: Vec2, slot: &AtlasSlot, color: [f32; 4]) -> Self {
        Self {
            origin: origin.to_array(),
            size: size.to_array(),
            uv_min: slot.uv_min,
            uv_max: slot.uv_max,
            color,
        }
    }

    pub const fn desc() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: &[wgpu::VertexAttribute] = &wgpu::vertex_attr_array![
            0 => Float32x2,
            1 => Float32x2,
            2 => Float32x2,
            3 => Float32x2,
            4 => Float32x4,
        ];

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GlyphInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: ATTRIBUTES,
        }
    }
}

/// A glyph that made it into the atlas
#[derive(Clone, Copy, Debug)]
struct CachedGlyph {
    slot: AtlasSlot,
    left: i32,
    top: i32,
}

pub struct LabelRenderer {
    pipeline: wgpu::RenderPipeline,
    atlas_texture: wgpu::Texture,
    atlas_bind_group: wgpu::BindGroup,
    atlas: GlyphAtlas,
    shaper: LabelShaper,
    // `None` marks glyphs with nothing to draw (spaces, color glyphs)
    glyphs: HashMap<CacheKey, Option<CachedGlyph>>,
    atlas_full: bool,
    instances: Vec<GlyphInstance>,
    instance_buffer: wgpu::Buffer,
    instance_capacity: usize,
    instance_count: u32,
}

impl LabelRenderer {
    /// `camera_layout` is bound at group 0, the atlas at group 1.
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        camera_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Glyph Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/glyph.wgsl").into()),
        });

        let atlas_texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Glyph Atlas"),
            size: wgpu::Extent3d {
                width: ATLAS_SIZE_PX,
                height: ATLAS_SIZE_PX,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::R8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let atlas_view = atlas_texture.create_view(&wgpu::TextureViewDescriptor::default());

        // Quads are pixel-aligned, so nearest sampling reads the mask texel for texel
        let atlas_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Glyph Atlas Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let atlas_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Glyph Atlas Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let atlas_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Glyph Atlas Bind Group"),
            layout: &atlas_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&atlas_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&atlas_sampler),
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Glyph Pipeline Layout"),
            bind_group_layouts: &[camera_layout, &atlas_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Glyph Render Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vertex"),
                buffers: &[GlyphInstance::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fragment"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            atlas_texture,
            atlas_bind_group,
            atlas: GlyphAtlas::new(ATLAS_SIZE_PX, ATLAS_PADDING_PX),
            shaper: LabelShaper::new(),
            glyphs: HashMap::new(),
            atlas_full: false,
            instances: Vec::new(),
            instance_buffer: Self::create_instance_buffer(device, MIN_GLYPH_CAPACITY),
            instance_capacity: MIN_GLYPH_CAPACITY,
            instance_count: 0,
        }
    }

    fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Glyph Instance Buffer"),
            size: (capacity * std::mem::size_of::<GlyphInstance>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    /// Shape every mass's strength, upload new glyphs and rebuild the quads
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        masses: &[Mass],
        color: [f32; 4],
    ) {
        self.instances.clear();

        for mass in masses {
            let label = self
                .shaper
                .shape(&mass.strength().to_string(), label_font_px(mass.radius()));
            let origin = label_origin(mass.position(), Vec2::new(label.width, label.height));

            for glyph in &label.glyphs {
                let Some(cached) = self.cached_glyph(queue, glyph.key) else {
                    continue;
                };
                let (min, size) = glyph_rect(
                    origin,
                    glyph.pen,
                    cached.left,
                    cached.top,
                    cached.slot.width,
                    cached.slot.height,
                );
                self.instances
                    .push(GlyphInstance::new(min, size, &cached.slot, color));
            }
        }

        if self.instances.len() > self.instance_capacity {
            self.instance_capacity = self.instances.len().next_power_of_two();
            self.instance_buffer = Self::create_instance_buffer(device, self.instance_capacity);
            log::debug!("Grew glyph buffer to {} quads", self.instance_capacity);
        }
        if !self.instances.is_empty() {
            queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&self.instances));
        }
        self.instance_count = self.instances.len() as u32;
    }

    /// Atlas entry for `key`, rasterizing and uploading it on first use
    fn cached_glyph(&mut self, queue: &wgpu::Queue, key: CacheKey) -> Option<CachedGlyph> {
        if let Some(cached) = self.glyphs.get(&key) {
            return *cached;
        }

        let bitmap = match self.shaper.rasterize(key) {
            Some(bitmap) if bitmap.width > 0 && bitmap.height > 0 => bitmap,
            _ => {
                self.glyphs.insert(key, None);
                return None;
            }
        };

        let Some(slot) = self.atlas.allocate(bitmap.width, bitmap.height) else {
            if !self.atlas_full {
                log::warn!("Glyph atlas is full, some labels will be incomplete");
                self.atlas_full = true;
            }
            return None;
        };

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &self.atlas_texture,
                mip_level: 0,
                origin: wgpu::Origin3d {
                    x: slot.x,
                    y: slot.y,
                    z: 0,
                },
                aspect: wgpu::TextureAspect::All,
            },
            &bitmap.pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(bitmap.width),
                rows_per_image: Some(bitmap.height),
            },
            wgpu::Extent3d {
                width: bitmap.width,
                height: bitmap.height,
                depth_or_array_layers: 1,
            },
        );

        let cached = CachedGlyph {
            slot,
            left: bitmap.left,
            top: bitmap.top,
        };
        self.glyphs.insert(key, Some(cached));
        Some(cached)
    }

    /// Draw the quads built by [`LabelRenderer::prepare`] into an open pass
    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>, camera_bind_group: &wgpu::BindGroup) {
        if self.instance_count == 0 {
            return;
        }

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, camera_bind_group, &[]);
        render_pass.set_bind_group(1, &self.atlas_bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.instance_buffer.slice(..));
        render_pass.draw(0..6, 0..self.instance_count);
    }
}
