//! Core vocabulary types for the shrdlite engine.
//!
//! Objects in the blocks world are identified by an [`ObjectId`] and described
//! by an [`ObjectSpec`] (form, size, color). The spatial [`Relation`]s and
//! entity [`Quantifier`]s are the building blocks of both parsed commands and
//! goal formulas.

use serde::{Deserialize, Serialize};

/// Unique identifier for an object within a world snapshot.
///
/// Ids are plain strings so that world catalogues can use descriptive names
/// (`"LargeWhiteBall"`). The reserved id [`FLOOR`] never appears in the
/// object catalogue.
pub type ObjectId = String;

/// The reserved pseudo-object id for the floor.
///
/// The floor participates in formulas and relations but has no catalogue
/// entry and no stack coordinates.
pub const FLOOR: &str = "floor";

/// The shape of an object.
///
/// `Floor` and `AnyForm` are reserved for descriptions and formulas; neither
/// appears in a world catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Form {
    Brick,
    Plank,
    Ball,
    Pyramid,
    Box,
    Table,
    /// The floor pseudo-object.
    Floor,
    /// Matches any real form ("object", "thing", "one").
    AnyForm,
}

impl std::fmt::Display for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Form::Brick => write!(f, "brick"),
            Form::Plank => write!(f, "plank"),
            Form::Ball => write!(f, "ball"),
            Form::Pyramid => write!(f, "pyramid"),
            Form::Box => write!(f, "box"),
            Form::Table => write!(f, "table"),
            Form::Floor => write!(f, "floor"),
            Form::AnyForm => write!(f, "object"),
        }
    }
}

/// The size of an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Large,
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Size::Small => write!(f, "small"),
            Size::Large => write!(f, "large"),
        }
    }
}

/// The color of an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Black,
    Blue,
    Green,
    Yellow,
    White,
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Black => write!(f, "black"),
            Color::Blue => write!(f, "blue"),
            Color::Green => write!(f, "green"),
            Color::Yellow => write!(f, "yellow"),
            Color::White => write!(f, "white"),
        }
    }
}

/// Description of an object: its form plus optional size and color.
///
/// Used both as a catalogue entry (concrete form, size and color filled in)
/// and as the leaf of a parsed object description (where `AnyForm` and `None`
/// mean "unconstrained").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectSpec {
    pub form: Form,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

/// The floor's description: form `Floor`, no size, no color.
pub const FLOOR_SPEC: ObjectSpec = ObjectSpec {
    form: Form::Floor,
    size: None,
    color: None,
};

impl ObjectSpec {
    /// A fully specified catalogue entry.
    pub fn new(form: Form, size: Size, color: Color) -> Self {
        Self {
            form,
            size: Some(size),
            color: Some(color),
        }
    }

    /// Whether a catalogue entry satisfies this description.
    ///
    /// `AnyForm` matches every real form; `None` size/color is unconstrained.
    pub fn matches(&self, entry: &ObjectSpec) -> bool {
        (self.form == Form::AnyForm || self.form == entry.form)
            && (self.size.is_none() || self.size == entry.size)
            && (self.color.is_none() || self.color == entry.color)
    }
}

impl std::fmt::Display for ObjectSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(size) = self.size {
            write!(f, "{size} ")?;
        }
        if let Some(color) = self.color {
            write!(f, "{color} ")?;
        }
        write!(f, "{}", self.form)
    }
}

/// The seven binary spatial relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    Ontop,
    Inside,
    Above,
    Under,
    Leftof,
    Rightof,
    Beside,
}

impl Relation {
    /// The surface phrase used in error messages and formula display.
    pub fn phrase(self) -> &'static str {
        match self {
            Relation::Ontop => "on top of",
            Relation::Inside => "inside",
            Relation::Above => "above",
            Relation::Under => "under",
            Relation::Leftof => "left of",
            Relation::Rightof => "right of",
            Relation::Beside => "beside",
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Relation::Ontop => write!(f, "ontop"),
            Relation::Inside => write!(f, "inside"),
            Relation::Above => write!(f, "above"),
            Relation::Under => write!(f, "under"),
            Relation::Leftof => write!(f, "leftof"),
            Relation::Rightof => write!(f, "rightof"),
            Relation::Beside => write!(f, "beside"),
        }
    }
}

/// Entity quantifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantifier {
    /// Unique referent required.
    The,
    /// Existential: each candidate yields its own disjunct.
    Any,
    /// Universal: a single conjunction over the whole set.
    All,
}

impl std::fmt::Display for Quantifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quantifier::The => write!(f, "the"),
            Quantifier::Any => write!(f, "any"),
            Quantifier::All => write!(f, "all"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anyform_matches_every_real_form() {
        let desc = ObjectSpec {
            form: Form::AnyForm,
            size: None,
            color: None,
        };
        for form in [Form::Brick, Form::Ball, Form::Box, Form::Table] {
            let entry = ObjectSpec::new(form, Size::Small, Color::Red);
            assert!(desc.matches(&entry));
        }
    }

    #[test]
    fn size_and_color_constrain_matching() {
        let entry = ObjectSpec::new(Form::Ball, Size::Large, Color::White);
        let white_ball = ObjectSpec {
            form: Form::Ball,
            size: None,
            color: Some(Color::White),
        };
        let black_ball = ObjectSpec {
            form: Form::Ball,
            size: None,
            color: Some(Color::Black),
        };
        assert!(white_ball.matches(&entry));
        assert!(!black_ball.matches(&entry));
    }

    #[test]
    fn spec_display_reads_naturally() {
        let entry = ObjectSpec::new(Form::Box, Size::Small, Color::Blue);
        assert_eq!(entry.to_string(), "small blue box");
        assert_eq!(FLOOR_SPEC.to_string(), "floor");
    }

    #[test]
    fn relation_phrases() {
        assert_eq!(Relation::Ontop.phrase(), "on top of");
        assert_eq!(Relation::Beside.phrase(), "beside");
        assert_eq!(Relation::Inside.to_string(), "inside");
    }
}
