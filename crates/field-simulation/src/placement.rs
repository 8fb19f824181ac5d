//! Mouse-driven mass placement
//!
//! Pressing the primary button creates a mass under the cursor. While the
//! button stays down, every tick grows the mass the cursor is on; dragging off
//! every mass drops a new one at the cursor instead.

use crate::field::{Field, MassId};
use field_physics::Vector2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    #[default]
    Idle,
    /// Button held; growth goes to this mass while the cursor stays on it
    Placing(MassId),
}

/// What a button-down sample did to the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementAction {
    Created(MassId),
    Grew(MassId),
}

impl Placement {
    pub fn is_placing(&self) -> bool {
        matches!(self, Placement::Placing(_))
    }

    /// Current drag target, if any
    pub fn target(&self) -> Option<MassId> {
        match *self {
            Placement::Idle => None,
            Placement::Placing(id) => Some(id),
        }
    }

    /// Called once per tick while the primary button is down, before the field steps.
    pub fn on_primary_button_down(&mut self, field: &mut Field, cursor: Vector2) -> PlacementAction {
        let action = match *self {
            Placement::Idle => PlacementAction::Created(field.place_mass(cursor)),
            Placement::Placing(current) if field.hits_mass(current, cursor) => {
                field.grow_mass(current);
                PlacementAction::Grew(current)
            }
            Placement::Placing(_) => match field.mass_at(cursor) {
                Some(other) => {
                    field.grow_mass(other);
                    PlacementAction::Grew(other)
                }
                None => PlacementAction::Created(field.place_mass(cursor)),
            },
        };

        *self = match action {
            PlacementAction::Created(id) | PlacementAction::Grew(id) => Placement::Placing(id),
        };
        action
    }

    pub fn on_primary_button_up(&mut self) {
        *self = Placement::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SimulationConfig;

    fn field() -> Field {
        Field::with_seed(SimulationConfig::default(), 0)
    }

    #[test]
    fn test_press_creates_then_hold_grows() {
        let mut field = field();
        let mut placement = Placement::default();
        let cursor = Vector2::new(200.0, 200.0);

        let PlacementAction::Created(id) = placement.on_primary_button_down(&mut field, cursor) else {
            panic!("first press should create a mass");
        };
        assert_eq!(placement, Placement::Placing(id));

        for _ in 0..15 {
            assert_eq!(
                placement.on_primary_button_down(&mut field, cursor),
                PlacementAction::Grew(id)
            );
        }
        assert_eq!(field.masses().len(), 1);
        assert_eq!(field.mass(id).unwrap().strength(), 16);
        assert_eq!(field.strong_mass_count(), 1);
    }

    #[test]
    fn test_drag_off_creates_new_mass() {
        let mut field = field();
        let mut placement = Placement::default();

        placement.on_primary_button_down(&mut field, Vector2::new(200.0, 200.0));
        let action = placement.on_primary_button_down(&mut field, Vector2::new(400.0, 200.0));

        let PlacementAction::Created(id) = action else {
            panic!("dragging off the mass should create a new one");
        };
        assert_eq!(field.masses().len(), 2);
        assert_eq!(placement.target(), Some(id));
        assert_eq!(field.mass(id).unwrap().position(), Vector2::new(400.0, 200.0));
    }

    #[test]
    fn test_drag_onto_existing_mass_grows_it() {
        let mut field = field();
        let existing = field.place_mass(Vector2::new(400.0, 200.0));
        let mut placement = Placement::default();

        placement.on_primary_button_down(&mut field, Vector2::new(200.0, 200.0));
        let action = placement.on_primary_button_down(&mut field, Vector2::new(405.0, 200.0));

        assert_eq!(action, PlacementAction::Grew(existing));
        assert_eq!(placement.target(), Some(existing));
        assert_eq!(field.masses().len(), 2);
        assert_eq!(field.mass(existing).unwrap().strength(), 2);
    }

    #[test]
    fn test_release_returns_to_idle() {
        let mut field = field();
        let mut placement = Placement::default();
        let cursor = Vector2::new(200.0, 200.0);

        placement.on_primary_button_down(&mut field, cursor);
        placement.on_primary_button_up();
        assert!(!placement.is_placing());

        // A new press on the same spot creates a second mass
        let action = placement.on_primary_button_down(&mut field, cursor);
        assert!(matches!(action, PlacementAction::Created(_)));
        assert_eq!(field.masses().len(), 2);
    }
}
