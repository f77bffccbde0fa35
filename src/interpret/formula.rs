//! Goal formulas in disjunctive normal form.
//!
//! A [`DnfFormula`] is an OR over [`Conjunction`]s, each an AND over
//! [`Literal`]s. The interpreter emits them; the planner's goal test
//! evaluates them against a snapshot via the positional predicate.

use serde::{Deserialize, Serialize};

use crate::ontology::{ObjectId, Relation};
use crate::world::WorldState;

/// A relational atom over object ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Atom {
    /// The arm holds `id`.
    Holding { id: ObjectId },
    /// `subject` stands in `relation` to `object` (`"floor"` permitted in
    /// the second slot only).
    Rel {
        relation: Relation,
        subject: ObjectId,
        object: ObjectId,
    },
}

/// A positive or negated atom.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Literal {
    pub polarity: bool,
    pub atom: Atom,
}

impl Literal {
    /// A positive `holding(id)` literal.
    pub fn holding(id: impl Into<ObjectId>) -> Self {
        Self {
            polarity: true,
            atom: Atom::Holding { id: id.into() },
        }
    }

    /// A positive binary literal `relation(subject, object)`.
    pub fn rel(
        relation: Relation,
        subject: impl Into<ObjectId>,
        object: impl Into<ObjectId>,
    ) -> Self {
        Self {
            polarity: true,
            atom: Atom::Rel {
                relation,
                subject: subject.into(),
                object: object.into(),
            },
        }
    }

    /// Whether this literal holds in the given snapshot.
    pub fn satisfied_in(&self, world: &WorldState) -> bool {
        let truth = match &self.atom {
            Atom::Holding { id } => world.holding.as_deref() == Some(id.as_str()),
            Atom::Rel {
                relation,
                subject,
                object,
            } => world.positional(*relation, subject, object),
        };
        truth == self.polarity
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.polarity {
            write!(f, "-")?;
        }
        match &self.atom {
            Atom::Holding { id } => write!(f, "holding({id})"),
            Atom::Rel {
                relation,
                subject,
                object,
            } => write!(f, "{relation}({subject},{object})"),
        }
    }
}

/// An ordered list of literals read as logical AND.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Conjunction {
    pub literals: Vec<Literal>,
}

impl Conjunction {
    pub fn new(literals: Vec<Literal>) -> Self {
        Self { literals }
    }

    /// All literals hold. An empty conjunction is vacuously true.
    pub fn satisfied_in(&self, world: &WorldState) -> bool {
        self.literals.iter().all(|l| l.satisfied_in(world))
    }
}

impl std::fmt::Display for Conjunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, literal) in self.literals.iter().enumerate() {
            if i > 0 {
                write!(f, " & ")?;
            }
            write!(f, "{literal}")?;
        }
        Ok(())
    }
}

/// An ordered list of conjunctions read as logical OR.
///
/// The empty formula is unsatisfiable; the interpreter never emits one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DnfFormula {
    pub conjunctions: Vec<Conjunction>,
}

impl DnfFormula {
    pub fn new(conjunctions: Vec<Conjunction>) -> Self {
        Self { conjunctions }
    }

    /// Some conjunction holds entirely.
    pub fn satisfied_in(&self, world: &WorldState) -> bool {
        self.conjunctions.iter().any(|c| c.satisfied_in(world))
    }

    /// Order-insensitive equality: same set of conjunctions, each the same
    /// set of literals.
    pub fn set_equal(&self, other: &DnfFormula) -> bool {
        fn normalized(formula: &DnfFormula) -> Vec<Vec<Literal>> {
            let mut conjs: Vec<Vec<Literal>> = formula
                .conjunctions
                .iter()
                .map(|c| {
                    let mut lits = c.literals.clone();
                    lits.sort();
                    lits.dedup();
                    lits
                })
                .collect();
            conjs.sort();
            conjs.dedup();
            conjs
        }
        normalized(self) == normalized(other)
    }
}

impl std::fmt::Display for DnfFormula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, conjunction) in self.conjunctions.iter().enumerate() {
            if i > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{conjunction}")?;
        }
        Ok(())
    }
}
