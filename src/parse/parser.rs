//! Backtracking recursive descent over the token stream.
//!
//! The grammar is genuinely ambiguous: in *"put a ball in a box on the
//! floor"* the phrase *"on the floor"* attaches either to the box or to the
//! move target. Every production therefore returns **all** parses as
//! `(node, next_position)` pairs, and [`parse_tokens`] keeps the derivations
//! that consume the whole utterance.
//!
//! Hand-rolled (no parser combinator dependency): the grammar is small and
//! fixed, and full control over the result set is the point.

use crate::ontology::ObjectSpec;

use super::ast::{Command, Entity, Location, ObjectDesc, SetOp};
use super::lexer::Token;

/// All complete parses of the token stream, in derivation order, de-duplicated.
pub fn parse_tokens(tokens: &[Token]) -> Vec<Command> {
    let mut out = Vec::new();
    for (command, next) in commands(tokens) {
        if next == tokens.len() && !out.contains(&command) {
            out.push(command);
        }
    }
    out
}

fn commands(t: &[Token]) -> Vec<(Command, usize)> {
    let mut out = Vec::new();
    match t.first() {
        Some(Token::TakeVerb) => {
            for (entity, next) in entity(t, 1) {
                out.push((Command::Take { entity }, next));
            }
        }
        Some(Token::MoveVerb) if t.get(1) == Some(&Token::It) => {
            for (location, next) in location(t, 2) {
                out.push((Command::Drop { location }, next));
            }
        }
        Some(Token::MoveVerb) => {
            for (entity, mid) in entity(t, 1) {
                for (location, next) in location(t, mid) {
                    out.push((
                        Command::Move {
                            entity: entity.clone(),
                            location,
                        },
                        next,
                    ));
                }
            }
        }
        _ => {}
    }
    out
}

fn entity(t: &[Token], pos: usize) -> Vec<(Entity, usize)> {
    let Some(Token::Quant(quantifier)) = t.get(pos) else {
        return Vec::new();
    };
    object(t, pos + 1)
        .into_iter()
        .map(|(object, next)| {
            (
                Entity {
                    quantifier: *quantifier,
                    object,
                },
                next,
            )
        })
        .collect()
}

/// Complex level: `relative ((or | except) quant? complex)?`.
///
/// The optional quantifier after the set operator ("all balls except **the**
/// black ball") is surface sugar; set union and difference ignore it.
fn object(t: &[Token], pos: usize) -> Vec<(ObjectDesc, usize)> {
    let mut out = Vec::new();
    for (lhs, mid) in relative(t, pos) {
        let op = match t.get(mid) {
            Some(Token::Or) => Some(SetOp::Or),
            Some(Token::Except) => Some(SetOp::Except),
            _ => None,
        };
        if let Some(op) = op {
            let mut rhs_start = mid + 1;
            if matches!(t.get(rhs_start), Some(Token::Quant(_))) {
                rhs_start += 1;
            }
            for (rhs, next) in object(t, rhs_start) {
                out.push((
                    ObjectDesc::Complex {
                        lhs: Box::new(lhs.clone()),
                        rhs: Box::new(rhs),
                        op,
                    },
                    next,
                ));
            }
        }
        out.push((lhs, mid));
    }
    out
}

/// Relative level: a simple object with zero or more attached locations,
/// each optionally introduced by "that is".
fn relative(t: &[Token], pos: usize) -> Vec<(ObjectDesc, usize)> {
    match simple(t, pos) {
        Some((spec, next)) => attach(t, ObjectDesc::Simple(spec), next),
        None => Vec::new(),
    }
}

fn attach(t: &[Token], object: ObjectDesc, pos: usize) -> Vec<(ObjectDesc, usize)> {
    let mut out = vec![(object.clone(), pos)];
    let start = if t.get(pos) == Some(&Token::ThatIs) {
        pos + 1
    } else {
        pos
    };
    for (location, next) in location(t, start) {
        let restricted = ObjectDesc::Relative {
            object: Box::new(object.clone()),
            location: Box::new(location),
        };
        out.extend(attach(t, restricted, next));
    }
    out
}

/// Simple level: optional size and color (in either order), then a form noun.
fn simple(t: &[Token], pos: usize) -> Option<(ObjectSpec, usize)> {
    let mut size = None;
    let mut color = None;
    let mut p = pos;
    loop {
        match t.get(p) {
            Some(Token::Size(s)) if size.is_none() => {
                size = Some(*s);
                p += 1;
            }
            Some(Token::Color(c)) if color.is_none() => {
                color = Some(*c);
                p += 1;
            }
            _ => break,
        }
    }
    match t.get(p) {
        Some(Token::Form(form)) => Some((
            ObjectSpec {
                form: *form,
                size,
                color,
            },
            p + 1,
        )),
        _ => None,
    }
}

fn location(t: &[Token], pos: usize) -> Vec<(Location, usize)> {
    let Some(Token::Rel(relation)) = t.get(pos) else {
        return Vec::new();
    };
    entity(t, pos + 1)
        .into_iter()
        .map(|(entity, next)| {
            (
                Location {
                    relation: *relation,
                    entity,
                },
                next,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ontology::{Form, Quantifier, Relation};
    use crate::parse::lexer::tokenize;

    fn parses(input: &str) -> Vec<Command> {
        parse_tokens(&tokenize(input).unwrap())
    }

    #[test]
    fn take_is_unambiguous() {
        let commands = parses("take a blue object");
        assert_eq!(commands.len(), 1);
        let Command::Take { entity } = &commands[0] else {
            panic!("expected a take command");
        };
        assert_eq!(entity.quantifier, Quantifier::Any);
    }

    #[test]
    fn pronoun_drop() {
        let commands = parses("put it on the floor");
        assert_eq!(commands.len(), 1);
        let Command::Drop { location } = &commands[0] else {
            panic!("expected a drop command");
        };
        assert_eq!(location.relation, Relation::Ontop);
    }

    #[test]
    fn attachment_ambiguity_yields_two_parses() {
        let commands = parses("put a ball in a box on the floor");
        assert_eq!(commands.len(), 2);
        // One reading restricts the box, the other restricts the target.
        let relative_targets = commands
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    Command::Move {
                        location: Location {
                            entity: Entity {
                                object: ObjectDesc::Relative { .. },
                                ..
                            },
                            ..
                        },
                        ..
                    }
                )
            })
            .count();
        assert_eq!(relative_targets, 1);
    }

    #[test]
    fn chained_and_nested_relative_clauses() {
        let commands = parses("take the ball that is in a box that is on the floor");
        assert!(!commands.is_empty());
        // Deepest reading: ball in (box on floor).
        assert!(commands.iter().any(|c| {
            let Command::Take { entity } = c else { return false };
            let ObjectDesc::Relative { location, .. } = &entity.object else {
                return false;
            };
            matches!(location.entity.object, ObjectDesc::Relative { .. })
        }));
    }

    #[test]
    fn complex_objects_with_or_and_except() {
        let commands = parses("take a ball or a box");
        assert!(commands.iter().any(|c| {
            matches!(
                c,
                Command::Take {
                    entity: Entity {
                        object: ObjectDesc::Complex { op: SetOp::Or, .. },
                        ..
                    }
                }
            )
        }));

        let commands = parses("take all balls except the black ball");
        assert!(commands.iter().any(|c| {
            matches!(
                c,
                Command::Take {
                    entity: Entity {
                        object: ObjectDesc::Complex {
                            op: SetOp::Except,
                            ..
                        },
                        ..
                    }
                }
            )
        }));
    }

    #[test]
    fn the_floor_is_parseable() {
        // Physics rejects it later; the grammar does not.
        let commands = parses("take the floor");
        assert_eq!(commands.len(), 1);
        let Command::Take { entity } = &commands[0] else {
            panic!("expected a take command");
        };
        assert!(matches!(
            &entity.object,
            ObjectDesc::Simple(spec) if spec.form == Form::Floor
        ));
    }

    #[test]
    fn incomplete_commands_do_not_parse() {
        assert!(parses("take").is_empty());
        assert!(parses("put a ball").is_empty());
        assert!(parses("take ball").is_empty()); // missing quantifier
    }
}
