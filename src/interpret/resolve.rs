//! Reference resolution: object description trees to sets of object ids.
//!
//! Resolution is recursive and can revisit the same subtree many times on
//! deeply nested descriptions, so results are memoized per command, keyed by
//! structural identity of the description node.

use std::collections::HashMap;

use crate::ontology::{ObjectId, Quantifier, FLOOR};
use crate::parse::{ObjectDesc, SetOp};
use crate::physics;
use crate::world::WorldState;

/// Resolves descriptions against one world snapshot.
///
/// The cache lives as long as the resolver; create one per interpreted
/// command.
pub struct Resolver<'w> {
    world: &'w WorldState,
    cache: HashMap<ObjectDesc, Vec<ObjectId>>,
}

impl<'w> Resolver<'w> {
    pub fn new(world: &'w WorldState) -> Self {
        Self {
            world,
            cache: HashMap::new(),
        }
    }

    /// The set of ids satisfying `desc`, in world order, without duplicates.
    ///
    /// An empty result is not an error here; the caller decides.
    pub fn resolve(&mut self, desc: &ObjectDesc) -> Vec<ObjectId> {
        if let Some(hit) = self.cache.get(desc) {
            return hit.clone();
        }
        let result = match desc {
            ObjectDesc::Simple(spec) => {
                if spec.form == crate::ontology::Form::Floor {
                    vec![FLOOR.to_string()]
                } else {
                    self.world
                        .active_ids()
                        .filter(|id| {
                            self.world
                                .spec(id)
                                .is_some_and(|entry| spec.matches(entry))
                        })
                        .map(str::to_string)
                        .collect()
                }
            }
            ObjectDesc::Relative { object, location } => {
                let candidates = self.resolve(object);
                let anchors = self.resolve(&location.entity.object);
                let relation = location.relation;
                let quantifier = location.entity.quantifier;
                if anchors.is_empty() {
                    Vec::new()
                } else {
                    candidates
                        .into_iter()
                        .filter(|a| {
                            let witnesses = |b: &ObjectId| self.witnesses(relation, a, b);
                            match quantifier {
                                Quantifier::All => anchors.iter().all(witnesses),
                                Quantifier::The | Quantifier::Any => {
                                    anchors.iter().any(witnesses)
                                }
                            }
                        })
                        .collect()
                }
            }
            ObjectDesc::Complex { lhs, rhs, op } => {
                let left = self.resolve(lhs);
                let right = self.resolve(rhs);
                match op {
                    SetOp::Or => {
                        let mut union = left;
                        for id in right {
                            if !union.contains(&id) {
                                union.push(id);
                            }
                        }
                        union
                    }
                    SetOp::Except => left
                        .into_iter()
                        .filter(|id| !right.contains(id))
                        .collect(),
                }
            }
        };
        self.cache.insert(desc.clone(), result.clone());
        result
    }

    /// `b` witnesses `a` standing in `relation`: the pair is physically legal
    /// and positionally true in the current stacks.
    fn witnesses(&self, relation: crate::ontology::Relation, a: &str, b: &str) -> bool {
        let (Some(spec_a), Some(spec_b)) = (self.world.spec(a), self.world.spec(b)) else {
            return false;
        };
        physics::legal(relation, a, spec_a, b, spec_b).is_ok()
            && self.world.positional(relation, a, b)
    }
}
