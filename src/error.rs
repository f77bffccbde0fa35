//! Rich diagnostic error types for the shrdlite engine.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]`
//! derives, providing error codes and help text. Interpretation errors carry
//! the exact user-facing sentences the shell prints; batch entry points join
//! the distinct per-parse messages with `" ; "`.

use miette::Diagnostic;
use thiserror::Error;

use crate::ontology::Relation;

/// Top-level error type for the shrdlite engine.
///
/// Each variant wraps a subsystem-specific error, preserving the full
/// diagnostic chain (error codes, help text) through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum ShrdliteError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    World(#[from] WorldError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Interpret(#[from] InterpretError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Plan(#[from] PlanError),
}

// ---------------------------------------------------------------------------
// World errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum WorldError {
    #[error("arm column {arm} is out of range for {columns} stack(s)")]
    #[diagnostic(
        code(shrdlite::world::arm_out_of_range),
        help("The gripper column must satisfy 0 <= arm < stacks.len().")
    )]
    ArmOutOfRange { arm: usize, columns: usize },

    #[error("unknown object id: \"{id}\"")]
    #[diagnostic(
        code(shrdlite::world::unknown_object),
        help(
            "Every id placed in a stack or held by the arm must have a \
             catalogue entry, and \"floor\" is reserved. Check the world \
             definition for typos."
        )
    )]
    UnknownObject { id: String },

    #[error("object \"{id}\" appears more than once")]
    #[diagnostic(
        code(shrdlite::world::duplicate_object),
        help(
            "An object id may appear in at most one stack position, and a \
             held object may not appear in any stack."
        )
    )]
    DuplicateObject { id: String },

    #[error("no world named \"{name}\"")]
    #[diagnostic(
        code(shrdlite::world::unknown_world),
        help("Built-in worlds: \"small\", \"medium\". Use --world-file for a custom one.")
    )]
    UnknownWorld { name: String },
}

// ---------------------------------------------------------------------------
// Parse errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ParseError {
    #[error("I do not know the word \"{word}\"")]
    #[diagnostic(
        code(shrdlite::parse::unknown_word),
        help(
            "The vocabulary covers the verbs take/grasp/pick up and \
             move/put/drop, the forms brick/plank/ball/pyramid/box/table \
             (or object/thing/one), the sizes small/large, the colors \
             red/black/blue/green/yellow/white, and the spatial phrases \
             on/in/on top of/inside/above/under/beside/left of/right of."
        )
    )]
    UnknownWord { word: String },

    #[error("I cannot parse \"{utterance}\"")]
    #[diagnostic(
        code(shrdlite::parse::no_parse),
        help(
            "Commands look like \"take the blue ball\", \"put it on the \
             floor\", or \"move all bricks beside a table\"."
        )
    )]
    NoParse { utterance: String },

    #[error("there is nothing to parse")]
    #[diagnostic(
        code(shrdlite::parse::empty),
        help("Type a command such as \"take a red pyramid\".")
    )]
    EmptyUtterance,
}

// ---------------------------------------------------------------------------
// Interpretation errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum InterpretError {
    #[error("Couldn't find any matching object")]
    #[diagnostic(
        code(shrdlite::interpret::no_object),
        help("No object in the current world matches the description.")
    )]
    NoMatchingObject,

    #[error("Couldn't find any matching destination")]
    #[diagnostic(
        code(shrdlite::interpret::no_destination),
        help("No object in the current world matches the destination description.")
    )]
    NoMatchingDestination,

    #[error("Too many matching objects for 'the'")]
    #[diagnostic(
        code(shrdlite::interpret::ambiguous_object),
        help(
            "The definite article requires a unique referent. Add a size or \
             color to narrow the description, or use \"any\" instead."
        )
    )]
    AmbiguousObjects,

    #[error("Too many matching destinations for 'the'")]
    #[diagnostic(
        code(shrdlite::interpret::ambiguous_destination),
        help(
            "The definite article requires a unique referent. Add a size or \
             color to narrow the description, or use \"any\" instead."
        )
    )]
    AmbiguousDestinations,

    #[error("Things can only be {} exactly one object", relation.phrase())]
    #[diagnostic(
        code(shrdlite::interpret::all_destinations),
        help(
            "An object cannot be on top of (or inside) several objects at \
             once; \"all\" destinations only work with the floor."
        )
    )]
    TargetMustBeUnique { relation: Relation },

    #[error("Only 1 thing can be {} another object", relation.phrase())]
    #[diagnostic(
        code(shrdlite::interpret::all_subjects),
        help(
            "Several objects cannot all occupy the same support; \"all\" \
             subjects only work with the floor as destination."
        )
    )]
    SubjectMustBeUnique { relation: Relation },

    #[error("I cannot take the floor")]
    #[diagnostic(
        code(shrdlite::interpret::take_floor),
        help("The floor is not an object and cannot be picked up.")
    )]
    TakeFloor,

    #[error("I cannot take more than one object")]
    #[diagnostic(
        code(shrdlite::interpret::take_multiple),
        help("The arm holds a single object; rephrase with \"a\" or \"the\".")
    )]
    TakeMultiple,

    #[error("I am not holding anything")]
    #[diagnostic(
        code(shrdlite::interpret::nothing_held),
        help("\"put it ...\" needs a held object; take something first.")
    )]
    NothingHeld,

    /// Every candidate pair violated a physical law. The message is the
    /// distinct violations joined with `"; "`.
    #[error("{violations}")]
    #[diagnostic(
        code(shrdlite::interpret::unsatisfiable),
        help("Every way of reading the command breaks a physical law.")
    )]
    Unsatisfiable { violations: String },

    /// Every parse of the utterance failed to interpret. The message is the
    /// distinct per-parse messages joined with `" ; "`.
    #[error("{messages}")]
    #[diagnostic(
        code(shrdlite::interpret::no_interpretation),
        help("None of the possible readings of the utterance made sense in this world.")
    )]
    NoInterpretation { messages: String },
}

// ---------------------------------------------------------------------------
// Planning errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum PlanError {
    #[error("planning timed out after {seconds:.1}s ({nodes} nodes seen)")]
    #[diagnostic(
        code(shrdlite::plan::timeout),
        help(
            "The search hit its wall-clock deadline before reaching a goal \
             state. Raise --timeout, or simplify the command."
        )
    )]
    Timeout { seconds: f64, nodes: usize },

    #[error("no sequence of arm actions reaches the goal ({nodes} nodes seen)")]
    #[diagnostic(
        code(shrdlite::plan::unreachable),
        help(
            "The search space was exhausted without satisfying the goal. \
             The interpretation is physically consistent but unreachable \
             from the current configuration."
        )
    )]
    Unreachable { nodes: usize },

    /// Every interpretation timed out or failed. The message is the distinct
    /// per-interpretation messages joined with `" ; "`.
    #[error("{messages}")]
    #[diagnostic(
        code(shrdlite::plan::no_plan),
        help("No interpretation of the utterance could be planned for.")
    )]
    NoPlan { messages: String },
}

/// Convenience alias for functions returning shrdlite results.
pub type ShrdliteResult<T> = std::result::Result<T, ShrdliteError>;

/// Result type for world operations.
pub type WorldResult<T> = std::result::Result<T, WorldError>;

/// Result type for parsing operations.
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Result type for interpretation operations.
pub type InterpretResult<T> = std::result::Result<T, InterpretError>;

/// Result type for planning operations.
pub type PlanResult<T> = std::result::Result<T, PlanError>;
