//! Label shaping and glyph rasterization with cosmic-text

use cosmic_text::{
    Attrs, Buffer, CacheKey, Family, FontSystem, Metrics, Shaping, SwashCache, SwashContent,
};
use glam::Vec2;

/// One shaped glyph of a label line
#[derive(Clone, Copy, Debug)]
pub struct ShapedGlyph {
    /// Rasterization key (glyph, size and subpixel bin)
    pub key: CacheKey,
    /// Pen position on the baseline, relative to the top-left of the line box
    pub pen: Vec2,
}

/// A single shaped line
#[derive(Clone, Debug, Default)]
pub struct ShapedLabel {
    pub glyphs: Vec<ShapedGlyph>,
    pub width: f32,
    pub height: f32,
}

/// Coverage mask for one glyph, one byte per pixel
#[derive(Clone, Debug)]
pub struct GlyphBitmap {
    pub width: u32,
    pub height: u32,
    /// Offset from the pen to the left edge of the bitmap
    pub left: i32,
    /// Distance from the baseline up to the top edge of the bitmap
    pub top: i32,
    pub pixels: Vec<u8>,
}

/// Owns the font database and the swash raster cache
pub struct LabelShaper {
    font_system: FontSystem,
    swash_cache: SwashCache,
    has_fonts: bool,
}

impl LabelShaper {
    /// Load the system fonts. Without any font face, shaping yields empty labels.
    pub fn new() -> Self {
        let font_system = FontSystem::new();
        let faces = font_system.db().faces().count();
        if faces == 0 {
            log::warn!("No fonts found, mass strength labels will not be drawn");
        } else {
            log::debug!("Label shaper loaded {} font faces", faces);
        }

        Self {
            font_system,
            swash_cache: SwashCache::new(),
            has_fonts: faces > 0,
        }
    }

    pub fn has_fonts(&self) -> bool {
        self.has_fonts
    }

    /// Shape `text` as one unwrapped line of `font_px` pixels
    pub fn shape(&mut self, text: &str, font_px: f32) -> ShapedLabel {
        if !self.has_fonts || text.is_empty() {
            return ShapedLabel::default();
        }

        let metrics = Metrics::new(font_px, font_px * 1.2);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        buffer.set_size(
            &mut self.font_system,
            Some(f32::MAX),
            Some(metrics.line_height),
        );

        let attrs = Attrs::new().family(Family::SansSerif);
        buffer.set_text(&mut self.font_system, text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(&mut self.font_system, false);

        let mut label = ShapedLabel {
            glyphs: Vec::new(),
            width: 0.0,
            height: metrics.line_height,
        };

        if let Some(run) = buffer.layout_runs().next() {
            label.width = run.line_w;
            label.height = run.line_height;
            label.glyphs.extend(run.glyphs.iter().map(|glyph| {
                let physical = glyph.physical((0.0, 0.0), 1.0);
                ShapedGlyph {
                    key: physical.cache_key,
                    pen: Vec2::new(physical.x as f32, run.line_y + physical.y as f32),
                }
            }));
        }

        label
    }

    /// Coverage mask for `key`. Color glyphs are not supported and yield `None`.
    pub fn rasterize(&mut self, key: CacheKey) -> Option<GlyphBitmap> {
        let image = self
            .swash_cache
            .get_image(&mut self.font_system, key)
            .as_ref()?;

        if image.content != SwashContent::Mask {
            return None;
        }

        Some(GlyphBitmap {
            width: image.placement.width,
            height: image.placement.height,
            left: image.placement.left,
            top: image.placement.top,
            pixels: image.data.clone(),
        })
    }
}

impl Default for LabelShaper {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_shapes_to_nothing() {
        let mut shaper = LabelShaper::new();
        let label = shaper.shape("", 16.0);
        assert!(label.glyphs.is_empty());
        assert_eq!(label.width, 0.0);
    }

    #[test]
    fn test_digits_shape_left_to_right() {
        let mut shaper = LabelShaper::new();
        if !shaper.has_fonts() {
            return;
        }

        let label = shaper.shape("123", 16.0);
        assert_eq!(label.glyphs.len(), 3);
        assert!(label.width > 0.0);
        assert!(label.glyphs[0].pen.x < label.glyphs[1].pen.x);
        assert!(label.glyphs[1].pen.x < label.glyphs[2].pen.x);
    }
}
