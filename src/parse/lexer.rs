//! Lexer: utterance text to vocabulary tokens.
//!
//! Two passes over the input:
//! 1. **Normalize**: lowercase, strip punctuation, split on whitespace
//! 2. **Match**: greedy longest-match of multi-word phrases ("on top of",
//!    "pick up"), then single-word lexicon lookup
//!
//! Any word outside the fixed lexicon is a fatal [`ParseError::UnknownWord`];
//! the grammar has no open word classes.

use crate::error::{ParseError, ParseResult};
use crate::ontology::{Color, Form, Quantifier, Relation, Size};

/// A lexical token of the command grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// "take", "grasp", "pick up".
    TakeVerb,
    /// "move", "put", "drop".
    MoveVerb,
    /// The pronoun "it" (refers to the held object).
    It,
    /// "the", "a"/"an"/"any", "all"/"every".
    Quant(Quantifier),
    Size(Size),
    Color(Color),
    /// Form nouns, including the anyform nouns and "floor".
    Form(Form),
    /// Spatial phrases.
    Rel(Relation),
    /// The relative-clause filler "that is" / "that are".
    ThatIs,
    /// "or".
    Or,
    /// "except".
    Except,
}

/// Multi-word phrases, matched greedily before single words.
const PHRASES: &[(&[&str], Token)] = &[
    (&["pick", "up"], Token::TakeVerb),
    (&["on", "top", "of"], Token::Rel(Relation::Ontop)),
    (&["left", "of"], Token::Rel(Relation::Leftof)),
    (&["right", "of"], Token::Rel(Relation::Rightof)),
    (&["next", "to"], Token::Rel(Relation::Beside)),
    (&["that", "is"], Token::ThatIs),
    (&["that", "are"], Token::ThatIs),
];

fn word_token(word: &str) -> Option<Token> {
    use Token::*;
    let token = match word {
        "take" | "grasp" => TakeVerb,
        "move" | "put" | "drop" => MoveVerb,
        "it" => It,

        "the" => Quant(Quantifier::The),
        "a" | "an" | "any" => Quant(Quantifier::Any),
        "all" | "every" => Quant(Quantifier::All),

        "small" => Size(crate::ontology::Size::Small),
        "large" | "big" => Size(crate::ontology::Size::Large),

        "red" => Color(crate::ontology::Color::Red),
        "black" => Color(crate::ontology::Color::Black),
        "blue" => Color(crate::ontology::Color::Blue),
        "green" => Color(crate::ontology::Color::Green),
        "yellow" => Color(crate::ontology::Color::Yellow),
        "white" => Color(crate::ontology::Color::White),

        "brick" | "bricks" => Form(crate::ontology::Form::Brick),
        "plank" | "planks" => Form(crate::ontology::Form::Plank),
        "ball" | "balls" => Form(crate::ontology::Form::Ball),
        "pyramid" | "pyramids" => Form(crate::ontology::Form::Pyramid),
        "box" | "boxes" => Form(crate::ontology::Form::Box),
        "table" | "tables" => Form(crate::ontology::Form::Table),
        "floor" => Form(crate::ontology::Form::Floor),
        "object" | "objects" | "thing" | "things" | "one" | "ones" => {
            Form(crate::ontology::Form::AnyForm)
        }

        "on" | "onto" => Rel(Relation::Ontop),
        "above" => Rel(Relation::Above),
        "in" | "into" | "inside" => Rel(Relation::Inside),
        "under" | "below" => Rel(Relation::Under),
        "beside" => Rel(Relation::Beside),

        "or" => Or,
        "except" => Except,

        _ => return None,
    };
    Some(token)
}

/// Tokenize an utterance.
///
/// Returns `ParseError::UnknownWord` for the first word outside the lexicon
/// and `ParseError::EmptyUtterance` when nothing remains after normalizing.
pub fn tokenize(input: &str) -> ParseResult<Vec<Token>> {
    let words: Vec<String> = input
        .to_lowercase()
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| c.is_ascii_punctuation()).to_string())
        .filter(|w| !w.is_empty())
        .collect();

    if words.is_empty() {
        return Err(ParseError::EmptyUtterance);
    }

    let mut tokens = Vec::with_capacity(words.len());
    let mut i = 0;
    'outer: while i < words.len() {
        for (phrase, token) in PHRASES {
            if words.len() - i >= phrase.len()
                && phrase.iter().zip(&words[i..]).all(|(p, w)| p == w)
            {
                tokens.push(*token);
                i += phrase.len();
                continue 'outer;
            }
        }
        match word_token(&words[i]) {
            Some(token) => tokens.push(token),
            None => {
                return Err(ParseError::UnknownWord {
                    word: words[i].clone(),
                })
            }
        }
        i += 1;
    }
    Ok(tokens)
}
