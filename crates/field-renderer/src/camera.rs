//! Camera for the fixed 2D canvas

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2};

/// Camera uniform for GPU
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

/// Maps canvas pixels (origin top-left, y down) onto the whole window.
///
/// The canvas keeps its size when the window is resized; it is stretched to fit.
pub struct Camera2d {
    pub canvas: Vec2,
    pub viewport: Vec2,
}

impl Camera2d {
    pub fn new(canvas_width: f32, canvas_height: f32, width: u32, height: u32) -> Self {
        Self {
            canvas: Vec2::new(canvas_width, canvas_height),
            viewport: Vec2::new(width.max(1) as f32, height.max(1) as f32),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Vec2::new(width.max(1) as f32, height.max(1) as f32);
    }

    pub fn build_view_projection_matrix(&self) -> Mat4 {
        // bottom = canvas height, top = 0 flips y so that canvas y grows downward
        Mat4::orthographic_rh(0.0, self.canvas.x, self.canvas.y, 0.0, -1.0, 1.0)
    }

    pub fn to_uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.build_view_projection_matrix().to_cols_array_2d(),
        }
    }

    /// Convert a cursor position in window pixels to canvas pixels
    pub fn window_to_canvas(&self, cursor: Vec2) -> Vec2 {
        cursor * self.canvas / self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_projection_corners() {
        let camera = Camera2d::new(900.0, 600.0, 900, 600);
        let m = camera.build_view_projection_matrix();

        let top_left = m.project_point3(Vec3::new(0.0, 0.0, 0.0));
        assert!((top_left.x + 1.0).abs() < 1e-6);
        assert!((top_left.y - 1.0).abs() < 1e-6);

        let bottom_right = m.project_point3(Vec3::new(900.0, 600.0, 0.0));
        assert!((bottom_right.x - 1.0).abs() < 1e-6);
        assert!((bottom_right.y + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_window_to_canvas_after_resize() {
        let mut camera = Camera2d::new(900.0, 600.0, 900, 600);
        assert_eq!(camera.window_to_canvas(Vec2::new(450.0, 300.0)), Vec2::new(450.0, 300.0));

        camera.resize(1800, 1200);
        assert_eq!(camera.window_to_canvas(Vec2::new(450.0, 300.0)), Vec2::new(225.0, 150.0));
    }

    #[test]
    fn test_zero_sized_viewport_is_clamped() {
        let mut camera = Camera2d::new(900.0, 600.0, 900, 600);
        camera.resize(0, 0);
        assert!(camera.window_to_canvas(Vec2::new(1.0, 1.0)).is_finite());
    }
}
