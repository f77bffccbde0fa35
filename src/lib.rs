//! # shrdlite
//!
//! A natural-language command interpreter and motion planner for a toy
//! blocks-world robot.
//!
//! ## Architecture
//!
//! - **Grammar** (`parse`): fixed lexicon plus a backtracking parser that
//!   returns every reading of an ambiguous utterance
//! - **Interpreter** (`interpret`): reference resolution and quantifier
//!   expansion into a DNF goal over spatial relations
//! - **Physics** (`physics`): the static rule set pruning impossible goals
//!   and illegal drops
//! - **Planner** (`plan` + `search`): A* over the implicit graph of world
//!   snapshots, with relation-specific admissible heuristics
//!
//! ## Library usage
//!
//! ```no_run
//! use shrdlite::plan::PlannerConfig;
//! use shrdlite::world::catalog;
//!
//! let world = catalog::small();
//! let commands = shrdlite::parse::parse("put a ball in a box").unwrap();
//! let goals = shrdlite::interpret::interpret(&commands, &world).unwrap();
//! let plans = shrdlite::plan::plan(&goals, &world, PlannerConfig::default()).unwrap();
//! println!("{}", plans[0].planned.plan);
//! ```

pub mod error;
pub mod interpret;
pub mod ontology;
pub mod parse;
pub mod physics;
pub mod plan;
pub mod search;
pub mod world;
