//! Parse propositional logic sentences from strings.
//!
//! The accepted grammar, from loosest to tightest binding:
//!
//! ```text
//! expr        := equivalence
//! equivalence := disjunction ( ("<=>" | "=>" | "<=") disjunction )*
//! disjunction := conjunction ( "|" conjunction )*
//! conjunction := negation ( "^" negation )*
//! negation    := "-" negation | primary
//! primary     := VARIABLE | "(" expr ")"
//! VARIABLE    := [a-z][a-zA-Z0-9_]*
//! ```
//!
//! All binary operators are left-associative, so `a => b => c` is read as `(a => b) => c`.
//! Input nested deeper than [`MAX_NESTING_DEPTH`] is rejected with [`ParsingError::TooDeep`].
//!
//! ```rust
//! use proplogic::parse;
//! use proplogic::Sentence;
//!
//! let sentence = parse("a <=> b | c ^ -d").unwrap();
//! assert!(matches!(sentence, Sentence::Equivalence(..)));
//! ```

mod errors;
mod lexer;

pub use errors::{ParsingError, TokenizationError};
pub use lexer::{tokenize, Spanned, Token};

use crate::language::Variable;
use crate::logging::targets;
use crate::sentence::Sentence;

type ParseResult = Result<(usize, Sentence), ParsingError>;

/// Deepest nesting of negations, parentheses and operands accepted by the parser.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Precedence climbing parser over a pre-tokenized input.
///
/// Parser state is the index of the next unconsumed token, which is passed into and returned
/// from every step.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser;

impl Parser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a complete sentence, failing if any input remains after it.
    pub fn parse(&self, input: &str) -> Result<Sentence, ParsingError> {
        let tokens = tokenize(input)?;
        log::trace!(target: targets::PARSER, "Tokenized {:?} into {} tokens", input, tokens.len());

        if tokens[0].token == Token::End {
            return Err(ParsingError::Empty);
        }

        let stream = TokenStream { tokens: &tokens };
        let (cursor, sentence) = stream.expression(0, 0, 0)?;
        stream.expect(cursor, &Token::End, "end of input")?;

        log::debug!(target: targets::PARSER, "Parsed {:?} as {}", input, sentence);
        Ok(sentence)
    }
}

struct TokenStream<'a> {
    tokens: &'a [Spanned],
}

impl<'a> TokenStream<'a> {
    fn get(&self, cursor: usize) -> &'a Spanned {
        // The final token is always End, which is never consumed past
        &self.tokens[cursor.min(self.tokens.len() - 1)]
    }

    fn unexpected(&self, cursor: usize, expected: &'static str) -> ParsingError {
        let spanned = self.get(cursor);

        ParsingError::UnexpectedToken {
            expected,
            found: spanned.token.clone(),
            position: spanned.position,
        }
    }

    fn expect(&self, cursor: usize, token: &Token, expected: &'static str) -> Result<usize, ParsingError> {
        if &self.get(cursor).token == token {
            Ok(cursor + 1)
        } else {
            Err(self.unexpected(cursor, expected))
        }
    }

    fn expression(&self, cursor: usize, min_binding_power: u8, depth: usize) -> ParseResult {
        if depth > MAX_NESTING_DEPTH {
            return Err(ParsingError::TooDeep {
                limit: MAX_NESTING_DEPTH,
                position: self.get(cursor).position,
            });
        }

        let (mut cursor, mut left) = self.prefix(cursor, depth)?;

        while self.get(cursor).token.binding_power() > min_binding_power {
            let (next, sentence) = self.infix(cursor, left, depth)?;
            cursor = next;
            left = sentence;
        }

        Ok((cursor, left))
    }

    fn prefix(&self, cursor: usize, depth: usize) -> ParseResult {
        let token = &self.get(cursor).token;

        match token {
            Token::Variable(label) => {
                let variable = Variable::new(label.as_str())?;
                Ok((cursor + 1, Sentence::atom(variable)))
            }
            Token::Negation => {
                let (next, target) = self.expression(cursor + 1, token.binding_power(), depth + 1)?;
                Ok((next, Sentence::negation(target)))
            }
            Token::LeftParenthesis => {
                let (next, inner) = self.expression(cursor + 1, 0, depth + 1)?;
                let next = self.expect(next, &Token::RightParenthesis, "\")\"")?;
                Ok((next, inner))
            }
            _ => Err(self.unexpected(cursor, "variable, \"-\" or \"(\"")),
        }
    }

    fn infix(&self, cursor: usize, left: Sentence, depth: usize) -> ParseResult {
        let token = &self.get(cursor).token;
        let build: fn(Sentence, Sentence) -> Sentence = match token {
            Token::Conjunction => Sentence::conjunction,
            Token::Disjunction => Sentence::disjunction,
            Token::Implication => Sentence::implication,
            Token::Reduction => Sentence::reduction,
            Token::Equivalence => Sentence::equivalence,
            _ => return Err(self.unexpected(cursor, "binary operator")),
        };

        let (next, right) = self.expression(cursor + 1, token.binding_power(), depth + 1)?;
        Ok((next, build(left, right)))
    }
}

/// Parse a sentence using a default [`Parser`].
pub fn parse(input: &str) -> Result<Sentence, ParsingError> {
    Parser::new().parse(input)
}
