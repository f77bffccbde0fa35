//! Command interpretation: parsed trees plus a world snapshot to DNF goals.
//!
//! Each command dispatches to the reference [`resolve`]r and the quantifier
//! [`combine`]r. The batch entry point keeps every parse that produced a
//! usable goal and only fails when all of them failed.

pub mod combine;
pub mod formula;
pub mod resolve;

pub use self::formula::{Atom, Conjunction, DnfFormula, Literal};

use crate::error::{InterpretError, InterpretResult};
use crate::ontology::{Quantifier, FLOOR};
use crate::parse::Command;
use crate::world::WorldState;

use self::combine::combine as combine_sets;
use self::resolve::Resolver;

/// A parse augmented with its goal formula.
#[derive(Debug, Clone)]
pub struct Interpretation {
    pub command: Command,
    pub formula: DnfFormula,
}

/// Interpret a single command against a world snapshot.
pub fn interpret_command(command: &Command, world: &WorldState) -> InterpretResult<DnfFormula> {
    let mut resolver = Resolver::new(world);
    match command {
        Command::Take { entity } => {
            let found = resolver.resolve(&entity.object);
            if found.is_empty() {
                return Err(InterpretError::NoMatchingObject);
            }
            if found.iter().any(|id| id == FLOOR) {
                return Err(InterpretError::TakeFloor);
            }
            if found.len() > 1 {
                match entity.quantifier {
                    Quantifier::The => return Err(InterpretError::AmbiguousObjects),
                    Quantifier::All => return Err(InterpretError::TakeMultiple),
                    Quantifier::Any => {}
                }
            }
            Ok(DnfFormula::new(
                found
                    .into_iter()
                    .map(|id| Conjunction::new(vec![Literal::holding(id)]))
                    .collect(),
            ))
        }

        Command::Drop { location } => {
            let Some(held) = world.holding.clone() else {
                return Err(InterpretError::NothingHeld);
            };
            let targets = resolver.resolve(&location.entity.object);
            combine_sets(
                world,
                &[held],
                Quantifier::Any,
                location.relation,
                &targets,
                location.entity.quantifier,
            )
        }

        Command::Move { entity, location } => {
            let subjects = resolver.resolve(&entity.object);
            let targets = resolver.resolve(&location.entity.object);
            combine_sets(
                world,
                &subjects,
                entity.quantifier,
                location.relation,
                &targets,
                location.entity.quantifier,
            )
        }
    }
}

/// Interpret every parse of an utterance, keeping the ones that succeed.
///
/// Fails only when no parse produced a goal; the message joins the distinct
/// per-parse messages with `" ; "`.
pub fn interpret(commands: &[Command], world: &WorldState) -> InterpretResult<Vec<Interpretation>> {
    let mut interpretations = Vec::new();
    let mut messages: Vec<String> = Vec::new();

    for command in commands {
        match interpret_command(command, world) {
            Ok(formula) => {
                tracing::debug!(command = %command, formula = %formula, "interpreted parse");
                interpretations.push(Interpretation {
                    command: command.clone(),
                    formula,
                });
            }
            Err(error) => {
                let message = error.to_string();
                if !messages.contains(&message) {
                    messages.push(message);
                }
            }
        }
    }

    if interpretations.is_empty() {
        return Err(InterpretError::NoInterpretation {
            messages: messages.join(" ; "),
        });
    }
    Ok(interpretations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use crate::world::catalog;

    fn interpret_utterance(utterance: &str, world: &WorldState) -> InterpretResult<Vec<Interpretation>> {
        let commands = parse::parse(utterance).expect("utterance parses");
        interpret(&commands, world)
    }

    #[test]
    fn take_a_blue_object() {
        let world = catalog::small();
        let result = interpret_utterance("take a blue object", &world).unwrap();
        assert_eq!(result.len(), 1);
        let formula = &result[0].formula;
        assert_eq!(formula.conjunctions.len(), 2);
        let rendered = formula.to_string();
        assert!(rendered.contains("holding(LargeBlueTable)"));
        assert!(rendered.contains("holding(SmallBlueBox)"));
    }

    #[test]
    fn take_the_floor_is_an_error() {
        let world = catalog::small();
        let err = interpret_utterance("take the floor", &world).unwrap_err();
        assert_eq!(err.to_string(), "I cannot take the floor");
    }

    #[test]
    fn drop_requires_a_held_object() {
        let world = catalog::small();
        let err = interpret_utterance("put it on the floor", &world).unwrap_err();
        assert_eq!(err.to_string(), "I am not holding anything");
    }

    #[test]
    fn drop_uses_the_held_object() {
        let mut world = catalog::small();
        let ball = world.stacks[0].pop().unwrap();
        world.holding = Some(ball);
        let result = interpret_utterance("put it on the floor", &world).unwrap();
        assert_eq!(
            result[0].formula.to_string(),
            "ontop(LargeWhiteBall,floor)"
        );
    }

    #[test]
    fn surviving_parses_are_kept_and_failures_dropped() {
        let world = catalog::small();
        // Two parses; both are satisfiable in the small world, with
        // different formulas.
        let commands = parse::parse("put a ball in a box on the floor").unwrap();
        assert_eq!(commands.len(), 2);
        let result = interpret(&commands, &world).unwrap();
        assert_eq!(result.len(), 2);
        assert!(!result[0].formula.set_equal(&result[1].formula));
    }

    #[test]
    fn failed_parses_join_their_messages() {
        let world = catalog::small();
        // No bricks are placed, so every parse fails the same way.
        let err = interpret_utterance("take a brick", &world).unwrap_err();
        assert_eq!(err.to_string(), "Couldn't find any matching object");
    }

    #[test]
    fn interpretation_is_idempotent() {
        let world = catalog::small();
        let commands = parse::parse("put all balls on the floor").unwrap();
        let first = interpret(&commands, &world).unwrap();
        let second = interpret(&commands, &world).unwrap();
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert!(a.formula.set_equal(&b.formula));
        }
    }
}
