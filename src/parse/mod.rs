//! Utterance grammar: text to command trees.
//!
//! The pipeline is [`lexer`] (words to vocabulary tokens) followed by
//! [`parser`] (backtracking descent returning every syntactically valid
//! reading). Pronoun binding is limited to the drop form "put it ...";
//! every other entity must be fully described.

pub mod ast;
pub mod lexer;
pub mod parser;

pub use self::ast::{Command, Entity, Location, ObjectDesc, SetOp};

use crate::error::{ParseError, ParseResult};

/// Parse an utterance into all syntactically valid command trees.
///
/// Ambiguous utterances return several commands; the interpreter decides
/// which survive against the world.
pub fn parse(utterance: &str) -> ParseResult<Vec<Command>> {
    let tokens = lexer::tokenize(utterance)?;
    let commands = parser::parse_tokens(&tokens);
    if commands.is_empty() {
        return Err(ParseError::NoParse {
            utterance: utterance.trim().to_string(),
        });
    }
    tracing::debug!(utterance, parses = commands.len(), "parsed utterance");
    Ok(commands)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_surfaces_lexer_and_grammar_errors() {
        assert!(matches!(
            parse("take the gizmo"),
            Err(ParseError::UnknownWord { .. })
        ));
        assert!(matches!(
            parse("ball the take"),
            Err(ParseError::NoParse { .. })
        ));
        assert!(matches!(parse(""), Err(ParseError::EmptyUtterance)));
    }

    #[test]
    fn parse_returns_every_reading() {
        let commands = parse("put a ball in a box on the floor").unwrap();
        assert_eq!(commands.len(), 2);
    }
}
