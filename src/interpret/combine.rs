//! Quantifier combination: resolved sets to a DNF goal formula.
//!
//! Given the resolved subject and target sets with their quantifiers, this
//! expands the quantifier pair into conjunctions of positive literals,
//! pruning every conjunction that contains a physically illegal pair. When
//! nothing survives, the distinct per-pair violations are joined into one
//! error.

use crate::error::{InterpretError, InterpretResult};
use crate::ontology::{ObjectId, Quantifier, Relation, FLOOR};
use crate::physics;
use crate::world::WorldState;

use super::formula::{Conjunction, DnfFormula, Literal};

/// Expand `(subjects, q_subj, relation, targets, q_targ)` into a DNF.
pub fn combine(
    world: &WorldState,
    subjects: &[ObjectId],
    q_subj: Quantifier,
    relation: Relation,
    targets: &[ObjectId],
    q_targ: Quantifier,
) -> InterpretResult<DnfFormula> {
    use Quantifier::*;

    if subjects.is_empty() {
        return Err(InterpretError::NoMatchingObject);
    }
    if targets.is_empty() {
        return Err(InterpretError::NoMatchingDestination);
    }
    if q_subj == The && subjects.len() > 1 {
        return Err(InterpretError::AmbiguousObjects);
    }
    if q_targ == The && targets.len() > 1 {
        return Err(InterpretError::AmbiguousDestinations);
    }

    // "all" only combines with ontop/inside when the destination is the
    // floor: several things fit on the floor, but not on one support.
    let stacking = matches!(relation, Relation::Ontop | Relation::Inside);
    if stacking && q_targ == All && targets.len() > 1 && targets[0] != FLOOR {
        return Err(InterpretError::TargetMustBeUnique { relation });
    }
    if stacking && q_subj == All && subjects.len() > 1 && targets[0] != FLOOR {
        return Err(InterpretError::SubjectMustBeUnique { relation });
    }

    let mut violations: Vec<String> = Vec::new();
    let mut record = |violation: physics::Violation| {
        let message = violation.to_string();
        if !violations.contains(&message) {
            violations.push(message);
        }
    };

    let check = |a: &str, b: &str| -> Result<(), physics::Violation> {
        let spec_a = world.spec(a).expect("resolved subject has a description");
        let spec_b = world.spec(b).expect("resolved target has a description");
        physics::legal(relation, a, spec_a, b, spec_b)
    };

    let mut conjunctions = Vec::new();
    match (q_subj, q_targ) {
        // One conjunction over the full cross product.
        (All, All) => {
            let mut literals = Vec::new();
            let mut ok = true;
            for a in subjects {
                for b in targets {
                    match check(a, b) {
                        Ok(()) => literals.push(Literal::rel(relation, a, b)),
                        Err(v) => {
                            record(v);
                            ok = false;
                        }
                    }
                }
            }
            if ok {
                conjunctions.push(Conjunction::new(literals));
            }
        }
        // Every subject relates to one chosen target: one conjunction per target.
        (All, _) => {
            for b in targets {
                let mut literals = Vec::new();
                let mut ok = true;
                for a in subjects {
                    match check(a, b) {
                        Ok(()) => literals.push(Literal::rel(relation, a, b)),
                        Err(v) => {
                            record(v);
                            ok = false;
                        }
                    }
                }
                if ok {
                    conjunctions.push(Conjunction::new(literals));
                }
            }
        }
        // One chosen subject relates to every target: one conjunction per subject.
        (_, All) => {
            for a in subjects {
                let mut literals = Vec::new();
                let mut ok = true;
                for b in targets {
                    match check(a, b) {
                        Ok(()) => literals.push(Literal::rel(relation, a, b)),
                        Err(v) => {
                            record(v);
                            ok = false;
                        }
                    }
                }
                if ok {
                    conjunctions.push(Conjunction::new(literals));
                }
            }
        }
        // The classic existential reading: a wide disjunction of single pairs.
        _ => {
            for a in subjects {
                for b in targets {
                    match check(a, b) {
                        Ok(()) => {
                            conjunctions
                                .push(Conjunction::new(vec![Literal::rel(relation, a, b)]));
                        }
                        Err(v) => record(v),
                    }
                }
            }
        }
    }

    if conjunctions.is_empty() {
        return Err(InterpretError::Unsatisfiable {
            violations: violations.join("; "),
        });
    }
    Ok(DnfFormula::new(conjunctions))
}
