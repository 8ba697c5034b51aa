use std::fmt::{Display, Formatter};

use nom::branch::alt;
use nom::bytes::complete::{tag, take_while};
use nom::character::complete::satisfy;
use nom::combinator::{recognize, value};
use nom::sequence::pair;
use nom::IResult;

use super::errors::TokenizationError;
use crate::language::is_label_char;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Variable(String),
    Negation,
    Conjunction,
    Disjunction,
    Implication,
    Reduction,
    Equivalence,
    LeftParenthesis,
    RightParenthesis,
    End,
}

impl Token {
    /// How tightly the token binds to its operands, higher values bind first.
    pub fn binding_power(&self) -> u8 {
        match self {
            Self::Variable(_) => 100,
            Self::Negation => 80,
            Self::Conjunction => 60,
            Self::Disjunction => 40,
            Self::Implication | Self::Reduction | Self::Equivalence => 20,
            Self::LeftParenthesis | Self::RightParenthesis | Self::End => 0,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Variable(label) => write!(f, "variable \"{}\"", label),
            Self::Negation => write!(f, "\"-\""),
            Self::Conjunction => write!(f, "\"^\""),
            Self::Disjunction => write!(f, "\"|\""),
            Self::Implication => write!(f, "\"=>\""),
            Self::Reduction => write!(f, "\"<=\""),
            Self::Equivalence => write!(f, "\"<=>\""),
            Self::LeftParenthesis => write!(f, "\"(\""),
            Self::RightParenthesis => write!(f, "\")\""),
            Self::End => write!(f, "end of input"),
        }
    }
}

/// A token together with the byte offset it starts at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned {
    pub token: Token,
    pub position: usize,
}

fn variable(input: &str) -> IResult<&str, Token> {
    let mut parser = recognize(pair(satisfy(|c| c.is_ascii_lowercase()), take_while(is_label_char)));
    let (rest, label) = parser(input)?;

    Ok((rest, Token::Variable(label.to_string())))
}

fn operator(input: &str) -> IResult<&str, Token> {
    // Longer operators must be tried before their prefixes
    let mut parser = alt((
        value(Token::Equivalence, tag("<=>")),
        value(Token::Implication, tag("=>")),
        value(Token::Reduction, tag("<=")),
        value(Token::Negation, tag("-")),
        value(Token::Conjunction, tag("^")),
        value(Token::Disjunction, tag("|")),
        value(Token::LeftParenthesis, tag("(")),
        value(Token::RightParenthesis, tag(")")),
    ));

    parser(input)
}

fn token(input: &str) -> IResult<&str, Token> {
    let mut parser = alt((variable, operator));
    parser(input)
}

/// Split the input into tokens, terminated by a single [`Token::End`].
///
/// Whitespace between tokens is skipped. The first run of text that does not start with a
/// token is reported as a [`TokenizationError`].
pub fn tokenize(input: &str) -> Result<Vec<Spanned>, TokenizationError> {
    let mut tokens = Vec::new();
    let mut remaining = input;

    loop {
        let trimmed = remaining.trim_start();
        let position = input.len() - trimmed.len();

        if trimmed.is_empty() {
            tokens.push(Spanned {
                token: Token::End,
                position,
            });

            return Ok(tokens);
        }

        match token(trimmed) {
            Ok((rest, token)) => {
                tokens.push(Spanned { token, position });
                remaining = rest;
            }
            Err(_) => {
                let text = trimmed.split_whitespace().next().unwrap_or(trimmed);
                return Err(TokenizationError::new(text, position));
            }
        }
    }
}
