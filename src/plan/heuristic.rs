//! Relation-specific admissible lower bounds on remaining plan length.
//!
//! The estimate for a formula is `min` over its conjunctions of `max` over
//! their literals: the planner may pick any disjunct (min), but within one
//! every literal must hold (max). Each per-literal bound counts unavoidable
//! arm travel plus four actions per object that must be cleared off a stack
//! (pick, carry, drop, return). Satisfied literals short-circuit to zero, so
//! the estimate vanishes exactly on goal states.

use crate::interpret::{Atom, Conjunction, DnfFormula, Literal};
use crate::ontology::{Relation, FLOOR};
use crate::world::WorldState;

/// Lower bound on the number of actions needed to satisfy `formula`.
pub fn estimate(world: &WorldState, formula: &DnfFormula) -> u32 {
    formula
        .conjunctions
        .iter()
        .map(|conjunction| conjunction_cost(world, conjunction))
        .min()
        .unwrap_or(0)
}

fn conjunction_cost(world: &WorldState, conjunction: &Conjunction) -> u32 {
    conjunction
        .literals
        .iter()
        .map(|literal| literal_cost(world, literal))
        .max()
        .unwrap_or(0)
}

/// Stack placement of an object: column and number of objects on top.
struct Placed {
    col: i64,
    above: u32,
}

fn placed(world: &WorldState, id: &str) -> Option<Placed> {
    let coord = world.position(id)?;
    if coord.col < 0 {
        return None;
    }
    Some(Placed {
        col: coord.col as i64,
        above: world.objects_above(id)? as u32,
    })
}

fn dist(a: i64, b: i64) -> u32 {
    (a - b).unsigned_abs() as u32
}

/// Cost of clearing everything above an object and picking it up, starting
/// with the arm at distance `reach`.
fn uncover(p: &Placed, reach: u32) -> u32 {
    4 * p.above + reach + 1
}

fn literal_cost(world: &WorldState, literal: &Literal) -> u32 {
    if literal.satisfied_in(world) {
        return 0;
    }
    // A currently-true atom takes at least one action to falsify.
    if !literal.polarity {
        return 1;
    }

    let arm = world.arm as i64;
    match &literal.atom {
        Atom::Holding { id } => match placed(world, id) {
            Some(p) => uncover(&p, dist(arm, p.col)),
            None => 0,
        },
        Atom::Rel {
            relation,
            subject,
            object,
        } => {
            if subject == FLOOR {
                return 0;
            }
            let held = |id: &str| world.holding.as_deref() == Some(id);
            let a = placed(world, subject);
            let b = placed(world, object);
            match relation {
                Relation::Ontop | Relation::Inside => {
                    if object == FLOOR {
                        return if held(subject) {
                            1
                        } else if let Some(a) = a {
                            4 * a.above + dist(arm, a.col) + 3
                        } else {
                            0
                        };
                    }
                    match (a, b) {
                        (_, Some(b)) if held(subject) => uncover(&b, dist(arm, b.col)),
                        (Some(a), _) if held(object) => {
                            4 * a.above + dist(arm, a.col) + 4
                        }
                        (Some(a), Some(b)) if a.col == b.col => {
                            4 * a.above.max(b.above) + dist(arm, a.col) + 3
                        }
                        (Some(a), Some(b)) => {
                            let reach = dist(arm, a.col).min(dist(arm, b.col));
                            4 * (a.above + b.above) + reach + dist(a.col, b.col) + 2
                        }
                        _ => 1,
                    }
                }
                Relation::Above => {
                    if object == FLOOR {
                        // Unsatisfied only while the subject is held.
                        return 1;
                    }
                    match (a, b) {
                        (_, Some(b)) if held(subject) => dist(arm, b.col) + 1,
                        (Some(a), _) if held(object) => {
                            4 * a.above + dist(arm, a.col) + 4
                        }
                        (Some(a), Some(b)) => {
                            4 * a.above + dist(a.col, b.col) + dist(arm, a.col) + 2
                        }
                        _ => 1,
                    }
                }
                Relation::Under => {
                    if object == FLOOR {
                        return 0;
                    }
                    match (a, b) {
                        (Some(a), _) if held(object) => dist(arm, a.col) + 1,
                        (_, Some(b)) if held(subject) => 4 * b.above + 3,
                        (Some(a), Some(b)) => {
                            4 * b.above + dist(a.col, b.col) + dist(arm, b.col) + 2
                        }
                        _ => 1,
                    }
                }
                Relation::Leftof | Relation::Rightof => {
                    if object == FLOOR {
                        return 0;
                    }
                    // Column the held object has to end up strictly beyond.
                    let lateral = |target: i64, want_left: bool| -> u32 {
                        let on_side = if want_left { arm < target } else { arm > target };
                        if on_side {
                            1
                        } else {
                            dist(arm, target) + 2
                        }
                    };
                    let want_left = *relation == Relation::Leftof;
                    match (a, b) {
                        (_, Some(b)) if held(subject) => lateral(b.col, want_left),
                        (Some(a), _) if held(object) => lateral(a.col, !want_left),
                        (Some(a), Some(b)) => {
                            let reach = dist(arm, a.col).min(dist(arm, b.col));
                            4 * a.above.min(b.above) + reach + dist(a.col, b.col) + 3
                        }
                        _ => 1,
                    }
                }
                Relation::Beside => {
                    if object == FLOOR {
                        return 0;
                    }
                    match (a, b) {
                        (_, Some(b)) if held(subject) => dist(arm, b.col).max(1),
                        (Some(a), _) if held(object) => dist(arm, a.col).max(1),
                        (Some(a), Some(b)) => {
                            let reach = dist(arm, a.col).min(dist(arm, b.col));
                            let lateral = if a.col == b.col {
                                3
                            } else {
                                dist(a.col, b.col) + 1
                            };
                            4 * a.above.min(b.above) + reach + lateral
                        }
                        _ => 1,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpret::Literal;
    use crate::plan::graph::{self, ArmAction};
    use crate::world::catalog;

    fn holding(id: &str) -> DnfFormula {
        DnfFormula::new(vec![Conjunction::new(vec![Literal::holding(id)])])
    }

    #[test]
    fn satisfied_goals_estimate_zero() {
        let world = catalog::small();
        let formula = DnfFormula::new(vec![Conjunction::new(vec![Literal::rel(
            Relation::Ontop,
            "LargeWhiteBall",
            "floor",
        )])]);
        assert_eq!(estimate(&world, &formula), 0);
    }

    #[test]
    fn holding_counts_clearing_and_travel() {
        let world = catalog::small();
        // The white ball is free on column 0, the arm is already there.
        assert_eq!(estimate(&world, &holding("LargeWhiteBall")), 1);
        // The blue table is buried under one box, two columns away.
        assert_eq!(estimate(&world, &holding("LargeBlueTable")), 4 + 1 + 1);
        // Already held: zero.
        let held = graph::apply(&world, ArmAction::Pick).unwrap();
        assert_eq!(estimate(&held, &holding("LargeWhiteBall")), 0);
    }

    #[test]
    fn min_over_disjuncts_max_over_literals() {
        let world = catalog::small();
        let formula = DnfFormula::new(vec![
            Conjunction::new(vec![Literal::holding("LargeBlueTable")]), // 6
            Conjunction::new(vec![
                Literal::holding("LargeWhiteBall"),                    // 1
                Literal::rel(Relation::Ontop, "SmallBlackBall", "floor"), // max branch
            ]),
        ]);
        let ball_on_floor = DnfFormula::new(vec![Conjunction::new(vec![Literal::rel(
            Relation::Ontop,
            "SmallBlackBall",
            "floor",
        )])]);
        let expected = estimate(&world, &ball_on_floor);
        assert_eq!(estimate(&world, &formula), expected.min(6));
    }

    #[test]
    fn drop_on_floor_while_held_is_one() {
        let world = catalog::small();
        let held = graph::apply(&world, ArmAction::Pick).unwrap();
        let formula = DnfFormula::new(vec![Conjunction::new(vec![Literal::rel(
            Relation::Ontop,
            "LargeWhiteBall",
            "floor",
        )])]);
        assert_eq!(estimate(&held, &formula), 1);
    }

    #[test]
    fn heuristic_never_exceeds_true_cost_on_known_cases() {
        let world = catalog::small();
        // Put the white ball inside the red box: the true optimal plan is
        // pick (1), right (1), drop (1) = 3.
        let formula = DnfFormula::new(vec![Conjunction::new(vec![Literal::rel(
            Relation::Inside,
            "LargeWhiteBall",
            "LargeRedBox",
        )])]);
        let h = estimate(&world, &formula);
        assert!(h <= 3, "h = {h} overestimates the 3-action plan");
        assert!(h > 0);
    }

    #[test]
    fn negated_literals_cost_one_when_currently_true() {
        let world = catalog::small();
        let negated = Literal {
            polarity: false,
            atom: Atom::Rel {
                relation: Relation::Ontop,
                subject: "LargeWhiteBall".into(),
                object: "floor".into(),
            },
        };
        let formula = DnfFormula::new(vec![Conjunction::new(vec![negated])]);
        assert_eq!(estimate(&world, &formula), 1);
    }
}
