//! Primary pointer state sampled once per tick

use field_physics::Vector2;

/// What the placement logic sees for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerSample {
    Down(Vector2),
    Up,
}

/// Latches primary button events between ticks.
///
/// A press and release that both land between two ticks still reports one
/// `Down` sample, so quick clicks are not lost.
#[derive(Debug, Default)]
pub struct PrimaryPointer {
    cursor: Option<Vector2>,
    held: bool,
    pressed_since_sample: bool,
}

impl PrimaryPointer {
    pub fn move_to(&mut self, cursor: Vector2) {
        self.cursor = Some(cursor);
    }

    pub fn press(&mut self) {
        self.held = true;
        self.pressed_since_sample = true;
    }

    pub fn release(&mut self) {
        self.held = false;
    }

    /// State for the coming tick. Without a known cursor position the button reads as up.
    pub fn sample(&mut self) -> PointerSample {
        let down = self.held || self.pressed_since_sample;
        self.pressed_since_sample = false;

        match self.cursor {
            Some(cursor) if down => PointerSample::Down(cursor),
            _ => PointerSample::Up,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_button_samples_down() {
        let mut pointer = PrimaryPointer::default();
        pointer.move_to(Vector2::new(10.0, 20.0));
        pointer.press();
        assert_eq!(pointer.sample(), PointerSample::Down(Vector2::new(10.0, 20.0)));
        pointer.move_to(Vector2::new(30.0, 20.0));
        assert_eq!(pointer.sample(), PointerSample::Down(Vector2::new(30.0, 20.0)));
        pointer.release();
        assert_eq!(pointer.sample(), PointerSample::Up);
    }

    #[test]
    fn test_quick_click_is_latched() {
        let mut pointer = PrimaryPointer::default();
        pointer.move_to(Vector2::new(5.0, 5.0));
        pointer.press();
        pointer.release();
        assert_eq!(pointer.sample(), PointerSample::Down(Vector2::new(5.0, 5.0)));
        assert_eq!(pointer.sample(), PointerSample::Up);
    }

    #[test]
    fn test_unknown_cursor_reads_up() {
        let mut pointer = PrimaryPointer::default();
        pointer.press();
        assert_eq!(pointer.sample(), PointerSample::Up);
    }
}
