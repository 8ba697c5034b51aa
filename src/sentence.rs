//! Propositional sentences.
//!
//! A [`Sentence`] is an immutable expression tree built from [`Variable`] atoms and the logical
//! connectives. Sentences are usually produced by the [parser](crate::parser) but can also be
//! built directly:
//!
//! ```rust
//! use proplogic::{Formula, Sentence};
//! use proplogic::language::{Assignment, Variable};
//!
//! let a = Variable::new("a").unwrap();
//! let b = Variable::new("b").unwrap();
//! let sentence = Sentence::implication(Sentence::atom(a.clone()), Sentence::atom(b.clone()));
//! let assignment = Assignment::from([(a, true), (b, false)]);
//!
//! assert_eq!(sentence.evaluate(&assignment), Ok(false));
//! ```

use std::collections::{btree_set, BTreeSet};
use std::fmt::{Display, Formatter};
use std::iter::Chain;
use std::option;

use either::Either;
use thiserror::Error;

use crate::language::{Assignment, Variable, Vocabulary};
use crate::semantics::{self, LogicalEquivalence};
use crate::Formula;

/// Error produced when evaluating an atom whose variable has no value in the assignment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("variable {variable} not assigned")]
pub struct UnassignedVariable {
    variable: Variable,
}

impl UnassignedVariable {
    pub fn variable(&self) -> &Variable {
        &self.variable
    }
}

impl From<Variable> for UnassignedVariable {
    fn from(variable: Variable) -> Self {
        Self { variable }
    }
}

/// A propositional logic expression.
///
/// Equality, ordering and hashing are structural. Operand order is significant for the binary
/// connectives, while a [`Sentence::SentenceSet`] compares as a set.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sentence {
    Atom(Variable),
    Negation(Box<Sentence>),
    Conjunction(Box<Sentence>, Box<Sentence>),
    Disjunction(Box<Sentence>, Box<Sentence>),

    /// `antecedent => consequent`
    Implication(Box<Sentence>, Box<Sentence>),

    /// `consequent <= antecedent`, the converse of an implication
    Reduction(Box<Sentence>, Box<Sentence>),
    Equivalence(Box<Sentence>, Box<Sentence>),

    /// Collection of sentences that holds when every member holds
    SentenceSet(BTreeSet<Sentence>),
}

impl Sentence {
    pub fn atom(variable: Variable) -> Self {
        Self::Atom(variable)
    }

    pub fn negation(target: Sentence) -> Self {
        Self::Negation(Box::new(target))
    }

    pub fn conjunction(left: Sentence, right: Sentence) -> Self {
        Self::Conjunction(Box::new(left), Box::new(right))
    }

    pub fn disjunction(left: Sentence, right: Sentence) -> Self {
        Self::Disjunction(Box::new(left), Box::new(right))
    }

    pub fn implication(antecedent: Sentence, consequent: Sentence) -> Self {
        Self::Implication(Box::new(antecedent), Box::new(consequent))
    }

    pub fn reduction(consequent: Sentence, antecedent: Sentence) -> Self {
        Self::Reduction(Box::new(consequent), Box::new(antecedent))
    }

    pub fn equivalence(left: Sentence, right: Sentence) -> Self {
        Self::Equivalence(Box::new(left), Box::new(right))
    }

    pub fn set<I>(sentences: I) -> Self
    where
        I: IntoIterator<Item = Sentence>,
    {
        Self::SentenceSet(sentences.into_iter().collect())
    }
}

pub type SubSentences<'a> =
    Either<Chain<option::IntoIter<&'a Sentence>, option::IntoIter<&'a Sentence>>, btree_set::Iter<'a, Sentence>>;

fn operands<'a>(first: Option<&'a Sentence>, second: Option<&'a Sentence>) -> SubSentences<'a> {
    Either::Left(first.into_iter().chain(second))
}

impl Sentence {
    /// Iterate over the immediate children of this sentence in operand order.
    pub fn sub_sentences(&self) -> SubSentences<'_> {
        match self {
            Self::Atom(_) => operands(None, None),
            Self::Negation(target) => operands(Some(target.as_ref()), None),
            Self::Conjunction(left, right)
            | Self::Disjunction(left, right)
            | Self::Implication(left, right)
            | Self::Reduction(left, right)
            | Self::Equivalence(left, right) => operands(Some(left.as_ref()), Some(right.as_ref())),
            Self::SentenceSet(sentences) => Either::Right(sentences.iter()),
        }
    }

    pub fn has_multiple_sentences(&self) -> bool {
        self.sub_sentences().nth(1).is_some()
    }

    /// The textual connective of this sentence, if it has one.
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            Self::Atom(_) | Self::SentenceSet(_) => None,
            Self::Negation(_) => Some("-"),
            Self::Conjunction(..) => Some("^"),
            Self::Disjunction(..) => Some("|"),
            Self::Implication(..) => Some("=>"),
            Self::Reduction(..) => Some("<="),
            Self::Equivalence(..) => Some("<=>"),
        }
    }

    /// Every variable that occurs in this sentence.
    pub fn variables(&self) -> BTreeSet<&Variable> {
        let mut variables = BTreeSet::new();
        self.collect_variables(&mut variables);
        variables
    }

    fn collect_variables<'a>(&'a self, variables: &mut BTreeSet<&'a Variable>) {
        match self {
            Self::Atom(variable) => {
                variables.insert(variable);
            }
            _ => self
                .sub_sentences()
                .for_each(|sentence| sentence.collect_variables(variables)),
        }
    }

    pub fn vocabulary(&self) -> Vocabulary {
        self.variables().into_iter().cloned().collect()
    }

    /// See [`semantics::determine_logical_equivalence`].
    pub fn determine_logical_equivalence(&self, other: &Sentence) -> Result<LogicalEquivalence, UnassignedVariable> {
        semantics::determine_logical_equivalence(self, other)
    }

    pub fn is_logically_equivalent(&self, other: &Sentence) -> Result<bool, UnassignedVariable> {
        semantics::is_logically_equivalent(self, other)
    }

    pub fn logically_entails(&self, other: &Sentence) -> Result<bool, UnassignedVariable> {
        semantics::logically_entails(self, other)
    }
}

impl From<Variable> for Sentence {
    fn from(variable: Variable) -> Self {
        Self::Atom(variable)
    }
}

type EvalResult = Result<bool, UnassignedVariable>;

fn binop<F>(left: EvalResult, right: EvalResult, f: F) -> EvalResult
where
    F: Fn(bool, bool) -> bool,
{
    let l_value = left?;
    let r_value = right?;

    Ok(f(l_value, r_value))
}

impl Formula for Sentence {
    fn evaluate(&self, assignment: &Assignment) -> EvalResult {
        match self {
            Self::Atom(variable) => assignment
                .get(variable)
                .ok_or_else(|| UnassignedVariable::from(variable.clone())),
            Self::Negation(target) => target.evaluate(assignment).map(|value| !value),
            Self::Conjunction(left, right) => binop(left.evaluate(assignment), right.evaluate(assignment), |l, r| l && r),
            Self::Disjunction(left, right) => binop(left.evaluate(assignment), right.evaluate(assignment), |l, r| l || r),
            Self::Implication(antecedent, consequent) => {
                binop(antecedent.evaluate(assignment), consequent.evaluate(assignment), |a, c| !a || c)
            }
            Self::Reduction(consequent, antecedent) => {
                binop(consequent.evaluate(assignment), antecedent.evaluate(assignment), |c, a| c || !a)
            }
            Self::Equivalence(left, right) => binop(left.evaluate(assignment), right.evaluate(assignment), |l, r| l == r),
            Self::SentenceSet(sentences) => {
                let values = sentences
                    .iter()
                    .map(|sentence| sentence.evaluate(assignment))
                    .collect::<Result<Vec<_>, _>>()?;

                Ok(values.into_iter().all(|value| value))
            }
        }
    }

    fn vocabulary(&self) -> Vocabulary {
        Sentence::vocabulary(self)
    }
}

fn fmt_operand(f: &mut Formatter<'_>, operand: &Sentence) -> std::fmt::Result {
    if operand.has_multiple_sentences() {
        write!(f, "({})", operand)
    } else {
        write!(f, "{}", operand)
    }
}

impl Display for Sentence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Atom(variable) => write!(f, "{}", variable),
            Self::Negation(target) => {
                f.write_str("-")?;
                fmt_operand(f, target)
            }
            Self::Conjunction(left, right)
            | Self::Disjunction(left, right)
            | Self::Implication(left, right)
            | Self::Reduction(left, right)
            | Self::Equivalence(left, right) => {
                fmt_operand(f, left)?;
                write!(f, " {} ", self.symbol().unwrap_or_default())?;
                fmt_operand(f, right)
            }
            Self::SentenceSet(sentences) => {
                f.write_str("{")?;

                for (index, sentence) in sentences.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }

                    write!(f, "{}", sentence)?;
                }

                f.write_str("}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Sentence, UnassignedVariable};
    use crate::language::{Assignment, Variable, Vocabulary};
    use crate::Formula;

    fn var(label: &str) -> Variable {
        Variable::new(label).unwrap()
    }

    fn atom(label: &str) -> Sentence {
        Sentence::atom(var(label))
    }

    fn assign(values: &[(&str, bool)]) -> Assignment {
        values.iter().map(|(label, value)| (var(label), *value)).collect()
    }

    fn examples() -> Vec<Sentence> {
        vec![
            atom("a"),
            Sentence::negation(atom("a")),
            Sentence::conjunction(atom("a"), atom("b")),
            Sentence::disjunction(atom("a"), atom("b")),
            Sentence::implication(atom("a"), atom("b")),
            Sentence::reduction(atom("a"), atom("b")),
            Sentence::equivalence(atom("a"), atom("b")),
            Sentence::set([atom("a"), atom("b")]),
        ]
    }

    #[test]
    fn atom_evaluation() {
        let sentence = atom("hello");

        assert_eq!(sentence.evaluate(&assign(&[("hello", true)])), Ok(true));
        assert_eq!(sentence.evaluate(&assign(&[("hello", false)])), Ok(false));
    }

    #[test]
    fn unassigned_variable() {
        let sentence = atom("world");
        let result = sentence.evaluate(&assign(&[("hello", true)]));

        assert_eq!(result, Err(UnassignedVariable::from(var("world"))));
    }

    #[test]
    fn partial_assignment_is_reported() {
        // The left operand alone decides the conjunction but the right is still unassigned
        let sentence = Sentence::conjunction(atom("a"), atom("b"));
        let result = sentence.evaluate(&assign(&[("a", false)]));

        assert!(result.is_err());
    }

    #[test]
    fn binary_truth_tables() -> Result<(), UnassignedVariable> {
        let cases = [
            // (a, b, and, or, a => b, a <= b, a <=> b)
            (true, true, true, true, true, true, true),
            (true, false, false, true, false, true, false),
            (false, true, false, true, true, false, false),
            (false, false, false, false, true, true, true),
        ];

        for (a, b, and, or, implies, reduces, equiv) in cases {
            let assignment = assign(&[("a", a), ("b", b)]);

            assert_eq!(Sentence::conjunction(atom("a"), atom("b")).evaluate(&assignment)?, and);
            assert_eq!(Sentence::disjunction(atom("a"), atom("b")).evaluate(&assignment)?, or);
            assert_eq!(Sentence::implication(atom("a"), atom("b")).evaluate(&assignment)?, implies);
            assert_eq!(Sentence::reduction(atom("a"), atom("b")).evaluate(&assignment)?, reduces);
            assert_eq!(Sentence::equivalence(atom("a"), atom("b")).evaluate(&assignment)?, equiv);
        }

        Ok(())
    }

    #[test]
    fn negation_evaluation() -> Result<(), UnassignedVariable> {
        let sentence = Sentence::negation(atom("a"));

        assert!(!sentence.evaluate(&assign(&[("a", true)]))?);
        assert!(sentence.evaluate(&assign(&[("a", false)]))?);

        Ok(())
    }

    #[test]
    fn sentence_set_evaluation() -> Result<(), UnassignedVariable> {
        let sentence = Sentence::set([atom("a"), atom("b")]);

        assert!(sentence.evaluate(&assign(&[("a", true), ("b", true)]))?);
        assert!(!sentence.evaluate(&assign(&[("a", true), ("b", false)]))?);
        assert!(Sentence::set(Vec::new()).evaluate(&Assignment::default())?);

        Ok(())
    }

    #[test]
    fn structural_equality() {
        assert_eq!(Sentence::conjunction(atom("a"), atom("b")), Sentence::conjunction(atom("a"), atom("b")));
        assert_ne!(Sentence::conjunction(atom("a"), atom("b")), Sentence::conjunction(atom("b"), atom("a")));
        assert_ne!(Sentence::conjunction(atom("a"), atom("b")), Sentence::disjunction(atom("a"), atom("b")));
        assert_eq!(Sentence::set([atom("a"), atom("b")]), Sentence::set([atom("b"), atom("a")]));
        assert!(atom("b") > atom("a"));
    }

    #[test]
    fn variables() {
        let sentence = Sentence::set([atom("a"), atom("b"), Sentence::conjunction(atom("a"), atom("c"))]);
        let expected: Vocabulary = [var("a"), var("b"), var("c")].into();

        assert_eq!(sentence.vocabulary(), expected);
        assert_eq!(Sentence::negation(atom("x")).variables().len(), 1);
    }

    #[test]
    fn sub_sentences() {
        let sentence = Sentence::implication(atom("a"), Sentence::negation(atom("b")));
        let children: Vec<_> = sentence.sub_sentences().collect();

        assert_eq!(children, vec![&atom("a"), &Sentence::negation(atom("b"))]);
        assert!(sentence.has_multiple_sentences());
        assert!(!Sentence::negation(atom("a")).has_multiple_sentences());
        assert_eq!(atom("a").sub_sentences().count(), 0);
    }

    #[test]
    fn display() {
        let rendered: Vec<_> = examples().iter().map(ToString::to_string).collect();

        assert_eq!(rendered, vec!["a", "-a", "a ^ b", "a | b", "a => b", "a <= b", "a <=> b", "{a, b}"]);

        let nested = Sentence::negation(Sentence::conjunction(
            Sentence::disjunction(atom("a"), atom("b")),
            Sentence::negation(atom("c")),
        ));
        assert_eq!(nested.to_string(), "-((a | b) ^ -c)");
    }

    #[test]
    fn equivalent_to_self() -> Result<(), UnassignedVariable> {
        for example in examples() {
            assert!(example.determine_logical_equivalence(&example)?.is_equivalent());
            assert!(example.is_logically_equivalent(&example)?);
            assert!(example.logically_entails(&example)?);
        }

        Ok(())
    }

    #[test]
    fn not_equivalent_to_negation() -> Result<(), UnassignedVariable> {
        for example in examples() {
            let negation = Sentence::negation(example.clone());

            assert!(!example.determine_logical_equivalence(&negation)?.is_equivalent());
            assert!(!example.is_logically_equivalent(&negation)?);
            assert!(!example.logically_entails(&negation)?);
        }

        Ok(())
    }
}
