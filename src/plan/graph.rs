//! The implicit world-state graph searched by the planner.
//!
//! Nodes are [`WorldState`] snapshots; edges are single arm actions with unit
//! cost. Only the stacks are deep-copied per successor, the catalogue is
//! shared. Drop legality reuses the physics rules specialised to stacking:
//! dropping onto a box means "inside", onto anything else "on top of", and
//! the floor accepts everything.

use serde::{Deserialize, Serialize};

use crate::ontology::{Form, Relation, FLOOR, FLOOR_SPEC};
use crate::physics;
use crate::search::SearchNode;
use crate::world::WorldState;

/// A single arm action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArmAction {
    /// Move the gripper one column left.
    Left,
    /// Move the gripper one column right.
    Right,
    /// Pick up the top of the current column.
    Pick,
    /// Drop the held object onto the current column.
    Drop,
}

impl ArmAction {
    /// The single-character plan encoding.
    pub fn letter(self) -> char {
        match self {
            ArmAction::Left => 'l',
            ArmAction::Right => 'r',
            ArmAction::Pick => 'p',
            ArmAction::Drop => 'd',
        }
    }

    /// Decode a plan character.
    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            'l' => Some(ArmAction::Left),
            'r' => Some(ArmAction::Right),
            'p' => Some(ArmAction::Pick),
            'd' => Some(ArmAction::Drop),
            _ => None,
        }
    }

    /// Render a path as a plan string.
    pub fn encode(path: &[ArmAction]) -> String {
        path.iter().map(|a| a.letter()).collect()
    }
}

impl std::fmt::Display for ArmAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// May `held` be dropped onto the current top of `column` (or the floor)?
///
/// This is the physics predicate restricted to the stacking relations: the
/// target's form picks `inside` (boxes) or `ontop` (everything else).
pub fn legal_drop(world: &WorldState, held: &str, column: usize) -> bool {
    let Some(held_spec) = world.spec(held) else {
        return false;
    };
    match world.top(column) {
        None => physics::legal(Relation::Ontop, held, held_spec, FLOOR, &FLOOR_SPEC).is_ok(),
        Some(top) => {
            let Some(top_spec) = world.spec(top) else {
                return false;
            };
            let relation = if top_spec.form == Form::Box {
                Relation::Inside
            } else {
                Relation::Ontop
            };
            physics::legal(relation, held, held_spec, top, top_spec).is_ok()
        }
    }
}

/// Apply one action to a snapshot, if legal in that snapshot.
pub fn apply(world: &WorldState, action: ArmAction) -> Option<WorldState> {
    match action {
        ArmAction::Left => {
            if world.arm == 0 {
                return None;
            }
            let mut next = world.clone();
            next.arm -= 1;
            Some(next)
        }
        ArmAction::Right => {
            if world.arm + 1 >= world.stacks.len() {
                return None;
            }
            let mut next = world.clone();
            next.arm += 1;
            Some(next)
        }
        ArmAction::Pick => {
            if world.holding.is_some() {
                return None;
            }
            let mut next = world.clone();
            let picked = next.stacks[next.arm].pop()?;
            next.holding = Some(picked);
            Some(next)
        }
        ArmAction::Drop => {
            let held = world.holding.as_deref()?;
            if !legal_drop(world, held, world.arm) {
                return None;
            }
            let mut next = world.clone();
            let held = next.holding.take().expect("checked above");
            next.stacks[next.arm].push(held);
            Some(next)
        }
    }
}

/// Run a plan string from a snapshot; `None` if any step is illegal.
pub fn execute(world: &WorldState, plan: &str) -> Option<WorldState> {
    let mut state = world.clone();
    for c in plan.chars() {
        let action = ArmAction::from_letter(c)?;
        state = apply(&state, action)?;
    }
    Some(state)
}

impl SearchNode for WorldState {
    type Action = ArmAction;

    fn identity(&self) -> String {
        self.canonical_id()
    }

    fn successors(&self) -> Vec<(ArmAction, WorldState, u32)> {
        [
            ArmAction::Left,
            ArmAction::Right,
            ArmAction::Pick,
            ArmAction::Drop,
        ]
        .into_iter()
        .filter_map(|action| apply(self, action).map(|next| (action, next, 1)))
        .collect()
    }
}
