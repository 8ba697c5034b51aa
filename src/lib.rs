#![deny(clippy::all)]

//! Parse, evaluate and compare propositional logic sentences.
//!
//! Text is parsed into a [`Sentence`] with [`parse`], evaluated against an
//! [`Assignment`](language::Assignment) through the [`Formula`] trait, compared with other
//! sentences using the functions in [`semantics`] and tabulated with a
//! [`TruthTable`](display::TruthTable).
//!
//! ```rust
//! # #[cfg(feature = "parser")]
//! # fn main() {
//! use proplogic::display::TruthTable;
//! use proplogic::parse;
//!
//! let conjunction = parse("a ^ b").unwrap();
//! let disjunction = parse("a | b").unwrap();
//! let table = TruthTable::new(conjunction.vocabulary(), [conjunction.clone(), disjunction.clone()]);
//!
//! assert!(conjunction.logically_entails(&disjunction).unwrap());
//! println!("{}", table.simple_string().unwrap());
//! # }
//! # #[cfg(not(feature = "parser"))]
//! # fn main() {}
//! ```

use std::rc::Rc;
use std::sync::Arc;

pub mod display;
pub mod language;
pub mod logging;
#[cfg(feature = "parser")]
pub mod parser;
pub mod proof;
pub mod semantics;
pub mod sentence;

pub use crate::language::{Assignment, Variable, Vocabulary};
#[cfg(feature = "parser")]
pub use crate::parser::parse;
pub use crate::sentence::{Sentence, UnassignedVariable};

/// Evaluate a sentence-like value into a truth value under an assignment
pub trait Formula {
    /// Compute the truth value under the given assignment, which must assign every variable of
    /// the formula.
    fn evaluate(&self, assignment: &Assignment) -> Result<bool, UnassignedVariable>;

    /// The variables the formula depends on
    fn vocabulary(&self) -> Vocabulary;
}

impl<T> Formula for &T
where
    T: Formula + ?Sized,
{
    fn evaluate(&self, assignment: &Assignment) -> Result<bool, UnassignedVariable> {
        (**self).evaluate(assignment)
    }

    fn vocabulary(&self) -> Vocabulary {
        (**self).vocabulary()
    }
}

impl<T> Formula for Box<T>
where
    T: Formula + ?Sized,
{
    fn evaluate(&self, assignment: &Assignment) -> Result<bool, UnassignedVariable> {
        (**self).evaluate(assignment)
    }

    fn vocabulary(&self) -> Vocabulary {
        (**self).vocabulary()
    }
}

impl<T> Formula for Rc<T>
where
    T: Formula + ?Sized,
{
    fn evaluate(&self, assignment: &Assignment) -> Result<bool, UnassignedVariable> {
        (**self).evaluate(assignment)
    }

    fn vocabulary(&self) -> Vocabulary {
        (**self).vocabulary()
    }
}

impl<T> Formula for Arc<T>
where
    T: Formula + ?Sized,
{
    fn evaluate(&self, assignment: &Assignment) -> Result<bool, UnassignedVariable> {
        (**self).evaluate(assignment)
    }

    fn vocabulary(&self) -> Vocabulary {
        (**self).vocabulary()
    }
}
