//! World snapshot: stacks, arm column, held object, object catalogue.
//!
//! A [`WorldState`] is a value. The planner clones it freely during search;
//! only the stacks are deep-copied, the catalogue is shared behind an `Arc`.
//! The canonical string id (see [`WorldState::canonical_id`]) is the single
//! chokepoint for revisit detection, so it is derived from a deterministic
//! formatter rather than any ad-hoc hashing.

pub mod catalog;

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{WorldError, WorldResult};
use crate::ontology::{ObjectId, ObjectSpec, Relation, FLOOR, FLOOR_SPEC};

/// The object catalogue: immutable descriptions keyed by id.
pub type Catalog = BTreeMap<ObjectId, ObjectSpec>;

/// Stack coordinates of an object: column index and row from the bottom.
///
/// The floor is assigned `col = -1, row = -1` and is treated as lying
/// directly below every stack for `ontop`/`above` purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coord {
    pub col: i32,
    pub row: i32,
}

/// An immutable snapshot of the blocks world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldState {
    /// Columns of objects, each ordered bottom-to-top.
    pub stacks: Vec<Vec<ObjectId>>,
    /// Column index of the gripper.
    pub arm: usize,
    /// The object currently held, if any. A held id appears in no stack.
    pub holding: Option<ObjectId>,
    /// Immutable object descriptions, shared across search nodes.
    pub objects: Arc<Catalog>,
}

impl WorldState {
    /// Create a snapshot and check its structural invariants.
    pub fn new(
        stacks: Vec<Vec<ObjectId>>,
        arm: usize,
        holding: Option<ObjectId>,
        objects: Arc<Catalog>,
    ) -> WorldResult<Self> {
        let world = Self {
            stacks,
            arm,
            holding,
            objects,
        };
        world.validate()?;
        Ok(world)
    }

    /// Check the snapshot invariants: arm in range, every placed or held id
    /// present in the catalogue, and no id appearing twice.
    pub fn validate(&self) -> WorldResult<()> {
        if self.arm >= self.stacks.len() {
            return Err(WorldError::ArmOutOfRange {
                arm: self.arm,
                columns: self.stacks.len(),
            });
        }
        let mut seen = std::collections::BTreeSet::new();
        for id in self.active_ids() {
            if id == FLOOR || !self.objects.contains_key(id) {
                return Err(WorldError::UnknownObject { id: id.to_string() });
            }
            if !seen.insert(id) {
                return Err(WorldError::DuplicateObject { id: id.to_string() });
            }
        }
        Ok(())
    }

    /// Iterate over every id present in the stacks or held by the arm.
    pub fn active_ids(&self) -> impl Iterator<Item = &str> {
        self.stacks
            .iter()
            .flatten()
            .map(String::as_str)
            .chain(self.holding.as_deref())
    }

    /// Look up the description for an id; `"floor"` yields the floor spec.
    pub fn spec(&self, id: &str) -> Option<&ObjectSpec> {
        if id == FLOOR {
            Some(&FLOOR_SPEC)
        } else {
            self.objects.get(id)
        }
    }

    /// Stack coordinates of an id, if it sits in a stack.
    ///
    /// Returns the floor coordinate for `"floor"` and `None` for held or
    /// unknown ids.
    pub fn position(&self, id: &str) -> Option<Coord> {
        if id == FLOOR {
            return Some(Coord { col: -1, row: -1 });
        }
        for (col, stack) in self.stacks.iter().enumerate() {
            if let Some(row) = stack.iter().position(|o| o == id) {
                return Some(Coord {
                    col: col as i32,
                    row: row as i32,
                });
            }
        }
        None
    }

    /// The topmost object of a column, if the column is non-empty.
    pub fn top(&self, col: usize) -> Option<&str> {
        self.stacks.get(col)?.last().map(String::as_str)
    }

    /// Number of objects stacked on top of `id`. `None` if `id` is not in a
    /// stack.
    pub fn objects_above(&self, id: &str) -> Option<usize> {
        let coord = self.position(id)?;
        if coord.col < 0 {
            return None;
        }
        let stack = &self.stacks[coord.col as usize];
        Some(stack.len() - 1 - coord.row as usize)
    }

    /// Evaluate a spatial relation against the current stack coordinates.
    ///
    /// Purely positional; physical legality is a separate concern (see
    /// [`crate::physics`]). Held objects have no coordinates and satisfy no
    /// binary relation.
    pub fn positional(&self, relation: Relation, a: &str, b: &str) -> bool {
        if a == FLOOR {
            return false;
        }
        let Some(pa) = self.position(a) else {
            return false;
        };
        if b == FLOOR {
            return match relation {
                Relation::Ontop | Relation::Inside => pa.row == 0,
                Relation::Above => true,
                _ => false,
            };
        }
        let Some(pb) = self.position(b) else {
            return false;
        };
        match relation {
            Relation::Ontop | Relation::Inside => pa.col == pb.col && pa.row == pb.row + 1,
            Relation::Above => pa.col == pb.col && pa.row > pb.row,
            Relation::Under => pa.col == pb.col && pa.row < pb.row,
            Relation::Leftof => pa.col < pb.col,
            Relation::Rightof => pa.col > pb.col,
            Relation::Beside => (pa.col - pb.col).abs() == 1,
        }
    }

    /// The canonical node id: `"<arm>,<holdingOrNull>,[[id,id],[…],…]"`.
    ///
    /// Stacks are listed in column order, bottom-to-top inside each bracket,
    /// with literal commas. Two snapshots are equal configurations iff their
    /// canonical ids are equal.
    pub fn canonical_id(&self) -> String {
        let mut out = String::with_capacity(64);
        out.push_str(&self.arm.to_string());
        out.push(',');
        out.push_str(self.holding.as_deref().unwrap_or("null"));
        out.push(',');
        out.push('[');
        for (i, stack) in self.stacks.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push('[');
            for (j, id) in stack.iter().enumerate() {
                if j > 0 {
                    out.push(',');
                }
                out.push_str(id);
            }
            out.push(']');
        }
        out.push(']');
        out
    }
}
