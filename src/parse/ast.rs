//! Command trees: the shared representation between parser and interpreter.
//!
//! An utterance parses into one or more [`Command`]s. Object descriptions are
//! a tagged sum ([`ObjectDesc`]) visited by case in the reference resolver;
//! the recursion bottoms out in an [`crate::ontology::ObjectSpec`] leaf.

use serde::{Deserialize, Serialize};

use crate::ontology::{ObjectSpec, Quantifier, Relation};

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Pick up the described object.
    Take { entity: Entity },
    /// Drop the currently held object at the described location.
    Drop { location: Location },
    /// Move the described object to the described location.
    Move { entity: Entity, location: Location },
}

/// A quantified object description: "the ball", "any box", "all bricks".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    pub quantifier: Quantifier,
    pub object: ObjectDesc,
}

/// A spatial constraint: a relation toward a quantified entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub relation: Relation,
    pub entity: Entity,
}

/// Set operator combining two object descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SetOp {
    /// Union of both descriptions.
    Or,
    /// Left description minus the right one.
    Except,
}

/// An object description tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectDesc {
    /// A bare description: form (possibly `AnyForm`) plus optional size and
    /// color.
    Simple(ObjectSpec),
    /// An object further restricted by a spatial relation:
    /// "a ball (that is) inside a box".
    Relative {
        object: Box<ObjectDesc>,
        location: Box<Location>,
    },
    /// Two descriptions combined by a set operator:
    /// "all balls except the black ball".
    Complex {
        lhs: Box<ObjectDesc>,
        rhs: Box<ObjectDesc>,
        op: SetOp,
    },
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Take { entity } => write!(f, "take {entity}"),
            Command::Drop { location } => write!(f, "put it {location}"),
            Command::Move { entity, location } => write!(f, "move {entity} {location}"),
        }
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.quantifier {
            Quantifier::The => write!(f, "the {}", self.object),
            Quantifier::Any => write!(f, "any {}", self.object),
            Quantifier::All => write!(f, "all {}", self.object),
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.relation.phrase(), self.entity)
    }
}

impl std::fmt::Display for ObjectDesc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ObjectDesc::Simple(spec) => write!(f, "{spec}"),
            ObjectDesc::Relative { object, location } => {
                write!(f, "{object} that is {location}")
            }
            ObjectDesc::Complex { lhs, rhs, op } => {
                let word = match op {
                    SetOp::Or => "or",
                    SetOp::Except => "except",
                };
                write!(f, "{lhs} {word} {rhs}")
            }
        }
    }
}
