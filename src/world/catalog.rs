//! Built-in example worlds.
//!
//! Two published catalogues, `small` and `medium`, share the same thirteen
//! objects and differ in their initial stack layout. Object ids are
//! descriptive (`"LargeWhiteBall"`) so that formulas and plans read without a
//! legend.

use std::sync::Arc;

use crate::ontology::{Color, Form, ObjectSpec, Size};

use super::{Catalog, WorldState};

/// Names of the built-in worlds, in listing order.
pub const NAMES: &[&str] = &["small", "medium"];

/// Look up a built-in world by name.
pub fn by_name(name: &str) -> Option<WorldState> {
    match name {
        "small" => Some(small()),
        "medium" => Some(medium()),
        _ => None,
    }
}

fn standard_catalog() -> Arc<Catalog> {
    use Color::*;
    use Form::*;
    use Size::*;

    let entries = [
        ("LargeGreenBrick", Brick, Large, Green),
        ("SmallWhiteBrick", Brick, Small, White),
        ("LargeRedPlank", Plank, Large, Red),
        ("SmallGreenPlank", Plank, Small, Green),
        ("LargeWhiteBall", Ball, Large, White),
        ("SmallBlackBall", Ball, Small, Black),
        ("LargeBlueTable", Table, Large, Blue),
        ("SmallRedTable", Table, Small, Red),
        ("LargeYellowPyramid", Pyramid, Large, Yellow),
        ("SmallRedPyramid", Pyramid, Small, Red),
        ("LargeYellowBox", Box, Large, Yellow),
        ("LargeRedBox", Box, Large, Red),
        ("SmallBlueBox", Box, Small, Blue),
    ];

    let mut catalog = Catalog::new();
    for (id, form, size, color) in entries {
        catalog.insert(id.to_string(), ObjectSpec::new(form, size, color));
    }
    Arc::new(catalog)
}

fn stacks(columns: &[&[&str]]) -> Vec<Vec<String>> {
    columns
        .iter()
        .map(|col| col.iter().map(|id| id.to_string()).collect())
        .collect()
}

/// The small world: five columns, nine placed objects.
pub fn small() -> WorldState {
    WorldState::new(
        stacks(&[
            &["LargeWhiteBall"],
            &["LargeBlueTable", "LargeRedBox"],
            &[],
            &["LargeYellowBox", "SmallBlueBox", "SmallBlackBall"],
            &[],
        ]),
        0,
        None,
        standard_catalog(),
    )
    .expect("small world is well-formed")
}

/// The medium world: ten columns, all thirteen objects placed.
pub fn medium() -> WorldState {
    WorldState::new(
        stacks(&[
            &["LargeWhiteBall"],
            &["LargeGreenBrick", "LargeRedBox"],
            &[],
            &[],
            &["LargeYellowPyramid", "SmallRedTable", "SmallRedPyramid"],
            &[],
            &[],
            &["LargeYellowBox", "LargeBlueTable", "LargeRedPlank", "SmallWhiteBrick"],
            &[],
            &["SmallGreenPlank", "SmallBlueBox", "SmallBlackBall"],
        ]),
        0,
        None,
        standard_catalog(),
    )
    .expect("medium world is well-formed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_worlds_are_valid() {
        for name in NAMES {
            let world = by_name(name).unwrap();
            world.validate().unwrap();
        }
        assert!(by_name("gigantic").is_none());
    }

    #[test]
    fn small_world_layout() {
        let w = small();
        assert_eq!(w.stacks.len(), 5);
        assert_eq!(w.arm, 0);
        assert_eq!(w.holding, None);
        assert_eq!(w.top(3), Some("SmallBlackBall"));
        // Placed objects are a strict subset of the catalogue.
        assert_eq!(w.active_ids().count(), 9);
        assert_eq!(w.objects.len(), 13);
    }

    #[test]
    fn medium_world_layout() {
        let w = medium();
        assert_eq!(w.stacks.len(), 10);
        assert_eq!(w.active_ids().count(), 13);
    }
}
