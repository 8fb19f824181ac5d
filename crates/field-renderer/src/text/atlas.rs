//! Shelf packing for the glyph atlas texture
//!
//! Glyphs are laid left to right on horizontal shelves. A glyph goes on the
//! first shelf that is tall enough and has room left, otherwise a new shelf is
//! opened below the last one. Nothing is ever evicted.

/// Where a glyph bitmap lives in the atlas
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AtlasSlot {
    /// Top-left of the bitmap in atlas pixels, padding excluded
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub uv_min: [f32; 2],
    pub uv_max: [f32; 2],
}

#[derive(Clone, Copy, Debug)]
struct Shelf {
    y: u32,
    height: u32,
    cursor_x: u32,
}

/// Allocator for a square atlas of `size`×`size` pixels
pub struct GlyphAtlas {
    size: u32,
    padding: u32,
    shelves: Vec<Shelf>,
    next_shelf_y: u32,
}

impl GlyphAtlas {
    /// `padding` empty pixels are kept around every bitmap so filtering never
    /// picks up a neighbour.
    pub fn new(size: u32, padding: u32) -> Self {
        Self {
            size,
            padding,
            shelves: Vec::new(),
            next_shelf_y: 0,
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Reserve room for a `width`×`height` bitmap. `None` when the atlas is full.
    pub fn allocate(&mut self, width: u32, height: u32) -> Option<AtlasSlot> {
        let reserved_w = width.saturating_add(self.padding * 2);
        let reserved_h = height.saturating_add(self.padding * 2);
        if reserved_w > self.size || reserved_h > self.size {
            return None;
        }

        let size = self.size;
        let fits = |shelf: &Shelf| {
            reserved_h <= shelf.height && shelf.cursor_x.saturating_add(reserved_w) <= size
        };

        let (x, y) = match self.shelves.iter().position(fits) {
            Some(index) => {
                let shelf = &mut self.shelves[index];
                let x = shelf.cursor_x;
                shelf.cursor_x += reserved_w;
                (x, shelf.y)
            }
            None => {
                if self.next_shelf_y.saturating_add(reserved_h) > self.size {
                    return None;
                }
                let y = self.next_shelf_y;
                self.next_shelf_y += reserved_h;
                self.shelves.push(Shelf {
                    y,
                    height: reserved_h,
                    cursor_x: reserved_w,
                });
                (0, y)
            }
        };

        Some(self.slot(x + self.padding, y + self.padding, width, height))
    }

    fn slot(&self, x: u32, y: u32, width: u32, height: u32) -> AtlasSlot {
        let inv = 1.0 / self.size as f32;
        AtlasSlot {
            x,
            y,
            width,
            height,
            uv_min: [x as f32 * inv, y as f32 * inv],
            uv_max: [(x + width) as f32 * inv, (y + height) as f32 * inv],
        }
    }
}
