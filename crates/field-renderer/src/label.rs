//! Placement of mass strength labels
//!
//! A label is one shaped line centered on its mass. Glyph quads are snapped to
//! whole canvas pixels so the atlas is sampled texel for texel.

use glam::Vec2;

/// Smallest label font size in pixels
pub const MIN_LABEL_FONT_PX: f32 = 12.0;

/// Font size for a mass of the given visual radius
pub fn label_font_px(radius: f32) -> f32 {
    radius.max(MIN_LABEL_FONT_PX)
}

/// Top-left of a line box of `size` centered on `center`
pub fn label_origin(center: Vec2, size: Vec2) -> Vec2 {
    (center - size * 0.5).round()
}

/// Canvas rectangle `(min, size)` covered by a glyph bitmap.
///
/// `left` is measured from the pen to the bitmap's left edge and `top` from the
/// baseline up to its top edge.
pub fn glyph_rect(
    origin: Vec2,
    pen: Vec2,
    left: i32,
    top: i32,
    width: u32,
    height: u32,
) -> (Vec2, Vec2) {
    let min = origin + pen + Vec2::new(left as f32, -(top as f32));
    (min, Vec2::new(width as f32, height as f32))
}
