//! Colors used by the field view (Catppuccin Mocha)

use catppuccin::PALETTE;

/// Convert an sRGB channel (0-255) to linear space
pub fn srgb_to_linear(c: u8) -> f32 {
    let x = c as f32 / 255.0;
    if x <= 0.04045 {
        x / 12.92
    } else {
        ((x + 0.055) / 1.055).powf(2.4)
    }
}

/// Opaque linear RGBA from a palette entry
pub fn linear_rgba(rgb: &catppuccin::Rgb) -> [f32; 4] {
    [
        srgb_to_linear(rgb.r),
        srgb_to_linear(rgb.g),
        srgb_to_linear(rgb.b),
        1.0,
    ]
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldPalette {
    pub background: [f32; 4],
    pub particle: [f32; 4],
    pub mass: [f32; 4],
    pub label: [f32; 4],
}

impl Default for FieldPalette {
    fn default() -> Self {
        let colors = &PALETTE.mocha.colors;
        Self {
            background: linear_rgba(&colors.base.rgb),
            particle: linear_rgba(&colors.text.rgb),
            mass: linear_rgba(&colors.blue.rgb),
            label: linear_rgba(&colors.text.rgb),
        }
    }
}

impl FieldPalette {
    pub fn clear_color(&self) -> wgpu::Color {
        wgpu::Color {
            r: self.background[0] as f64,
            g: self.background[1] as f64,
            b: self.background[2] as f64,
            a: self.background[3] as f64,
        }
    }
}
