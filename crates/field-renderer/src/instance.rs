use glam::Vec2;

/// Which signed-distance shape the fragment shader cuts out of the instance quad
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Rect = 0,
    Circle = 1,
}

/// Instance data for one quad-based shape.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ShapeInstance {
    /// Center position in canvas pixels
    pub center: [f32; 2],
    /// Half-size (width/2, height/2) in pixels
    pub half_size: [f32; 2],
    /// Fill color, linear RGBA
    pub color: [f32; 4],
    /// ShapeKind as u32
    pub shape: u32,
    /// Padding for 8-byte alignment
    pub _padding: u32,
}

impl ShapeInstance {
    pub fn rect(center: Vec2, half_size: Vec2, color: [f32; 4]) -> Self {
        Self {
            center: center.to_array(),
            half_size: half_size.to_array(),
            color,
            shape: ShapeKind::Rect as u32,
            _padding: 0,
        }
    }

    pub fn circle(center: Vec2, radius: f32, color: [f32; 4]) -> Self {
        Self {
            center: center.to_array(),
            half_size: [radius, radius],
            color,
            shape: ShapeKind::Circle as u32,
            _padding: 0,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self.shape {
            1 => ShapeKind::Circle,
            _ => ShapeKind::Rect,
        }
    }

    /// Vertex buffer layout for instance attributes
    pub const fn desc() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: &[wgpu::VertexAttribute] = &[
            // center: vec2<f32> at location 0
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x2,
            },
            // half_size: vec2<f32> at location 1
            wgpu::VertexAttribute {
                offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x2,
            },
            // color: vec4<f32> at location 2
            wgpu::VertexAttribute {
                offset: (std::mem::size_of::<[f32; 2]>() * 2) as wgpu::BufferAddress,
                shader_location: 2,
                format: wgpu::VertexFormat::Float32x4,
            },
            // shape: u32 at location 3
            wgpu::VertexAttribute {
                offset: (std::mem::size_of::<[f32; 2]>() * 2 + std::mem::size_of::<[f32; 4]>())
                    as wgpu::BufferAddress,
                shader_location: 3,
                format: wgpu::VertexFormat::Uint32,
            },
        ];

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ShapeInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: ATTRIBUTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_layout() {
        assert_eq!(std::mem::size_of::<ShapeInstance>(), 40);
        let layout = ShapeInstance::desc();
        assert_eq!(layout.attributes.len(), 4);
        assert_eq!(layout.attributes[3].offset, 32);
    }

    #[test]
    fn test_circle_uses_radius_for_both_axes() {
        let circle = ShapeInstance::circle(Vec2::new(5.0, 6.0), 8.0, [1.0; 4]);
        assert_eq!(circle.half_size, [8.0, 8.0]);
        assert_eq!(circle.kind(), ShapeKind::Circle);
    }
}
