//! Parse strings into sentences and check them against directly built sentences.

#![cfg(feature = "parser")]

use std::error::Error;

use proplogic::language::{Assignment, Variable};
use proplogic::parser::{ParsingError, Parser};
use proplogic::{parse, Formula, Sentence};

fn atom(label: &str) -> Sentence {
    Sentence::atom(Variable::new(label).expect("valid label"))
}

#[test]
fn parse_and_evaluate() -> Result<(), Box<dyn Error>> {
    let sentence = parse("rain ^ -umbrella => wet")?;
    let mut values = Vec::new();

    for (label, value) in [("rain", true), ("umbrella", false), ("wet", false)] {
        values.push((Variable::new(label)?, value));
    }

    let assignment = Assignment::from_iter(values);

    assert!(!sentence.evaluate(&assignment)?);

    Ok(())
}

#[test]
fn reusable_parser() -> Result<(), ParsingError> {
    let parser = Parser::new();

    assert_eq!(parser.parse("a | b")?, Sentence::disjunction(atom("a"), atom("b")));
    assert_eq!(parser.parse("-a")?, Sentence::negation(atom("a")));

    Ok(())
}

#[test]
fn display_round_trip() -> Result<(), Box<dyn Error>> {
    let inputs = [
        "a",
        "-a",
        "--a",
        "a ^ b ^ c",
        "a ^ (b ^ c)",
        "-(a | b) <=> c",
        "a => b => c",
        "a => (b => c)",
        "(a <= b) ^ -(c <=> -d)",
        "a <=> b | c ^ -d",
    ];

    for input in inputs {
        let sentence = parse(input)?;
        let reparsed = parse(&sentence.to_string())?;

        assert_eq!(reparsed, sentence, "{} rendered as {}", input, sentence);
    }

    Ok(())
}

#[test]
fn round_trip_preserves_semantics() -> Result<(), Box<dyn Error>> {
    let sentence = parse("(a => b) ^ (b <= c) | -(a <=> c)")?;
    let reparsed = parse(&sentence.to_string())?;

    for assignment in sentence.vocabulary().all_assignments() {
        assert_eq!(sentence.evaluate(&assignment)?, reparsed.evaluate(&assignment)?);
    }

    Ok(())
}

#[test]
fn invalid_string_returns_error() {
    for input in ["", "A", "123", "a*b", "a b", "(a", "a => ", "a ^^ b"] {
        assert!(parse(input).is_err(), "{:?} should not parse", input);
    }
}

#[test]
fn deeply_nested_string_returns_error() {
    let nested = format!("{}a", "-".repeat(200_000));

    assert!(matches!(parse(&nested), Err(ParsingError::TooDeep { .. })));
}
