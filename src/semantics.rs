//! Logical equivalence and entailment between formulas.
//!
//! Both relations are decided by brute force: every assignment over the combined vocabulary of
//! the two formulas is enumerated and evaluated. The cost is exponential in the number of
//! distinct variables.

use std::collections::BTreeSet;

use crate::language::Assignment;
use crate::logging::targets;
use crate::sentence::UnassignedVariable;
use crate::Formula;

/// Partition of the assignments over a vocabulary into those where two formulas agree and those
/// where they disagree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogicalEquivalence {
    equivalent_assignments: BTreeSet<Assignment>,
    unequivalent_assignments: BTreeSet<Assignment>,
}

impl LogicalEquivalence {
    pub fn new(equivalent_assignments: BTreeSet<Assignment>, unequivalent_assignments: BTreeSet<Assignment>) -> Self {
        Self {
            equivalent_assignments,
            unequivalent_assignments,
        }
    }

    /// True when there is no assignment the formulas disagree on.
    pub fn is_equivalent(&self) -> bool {
        self.unequivalent_assignments.is_empty()
    }

    pub fn equivalent_assignments(&self) -> &BTreeSet<Assignment> {
        &self.equivalent_assignments
    }

    pub fn unequivalent_assignments(&self) -> &BTreeSet<Assignment> {
        &self.unequivalent_assignments
    }
}

/// Evaluate both formulas under every assignment over their combined vocabulary and partition
/// the assignments by whether the formulas agree.
///
/// # Examples
///
/// ```rust
/// # #[cfg(feature = "parser")]
/// # fn main() {
/// use proplogic::parse;
/// use proplogic::semantics::determine_logical_equivalence;
///
/// let left = parse("a => b").unwrap();
/// let right = parse("-a | b").unwrap();
/// let result = determine_logical_equivalence(&left, &right).unwrap();
///
/// assert!(result.is_equivalent());
/// assert_eq!(result.equivalent_assignments().len(), 4);
/// # }
/// # #[cfg(not(feature = "parser"))]
/// # fn main() {}
/// ```
pub fn determine_logical_equivalence<L, R>(left: L, right: R) -> Result<LogicalEquivalence, UnassignedVariable>
where
    L: Formula,
    R: Formula,
{
    let vocabulary = left.vocabulary() + right.vocabulary();
    let mut result = LogicalEquivalence::default();

    for assignment in vocabulary.all_assignments() {
        let l_value = left.evaluate(&assignment)?;
        let r_value = right.evaluate(&assignment)?;

        if l_value == r_value {
            result.equivalent_assignments.insert(assignment);
        } else {
            result.unequivalent_assignments.insert(assignment);
        }
    }

    log::debug!(
        target: targets::SEMANTICS,
        "Formulas agree on {} and disagree on {} assignments over {}",
        result.equivalent_assignments.len(),
        result.unequivalent_assignments.len(),
        vocabulary
    );

    Ok(result)
}

pub fn is_logically_equivalent<L, R>(left: L, right: R) -> Result<bool, UnassignedVariable>
where
    L: Formula,
    R: Formula,
{
    determine_logical_equivalence(left, right).map(|result| result.is_equivalent())
}

/// Check that every assignment satisfying `premise` also satisfies `conclusion`.
///
/// This holds vacuously when `premise` is unsatisfiable.
pub fn logically_entails<P, C>(premise: P, conclusion: C) -> Result<bool, UnassignedVariable>
where
    P: Formula,
    C: Formula,
{
    let vocabulary = premise.vocabulary() + conclusion.vocabulary();

    for assignment in vocabulary.all_assignments() {
        if premise.evaluate(&assignment)? && !conclusion.evaluate(&assignment)? {
            log::debug!(target: targets::SEMANTICS, "Entailment fails under {}", assignment);
            return Ok(false);
        }
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::{determine_logical_equivalence, is_logically_equivalent, logically_entails, LogicalEquivalence};
    use crate::language::{Assignment, Variable};
    use crate::sentence::{Sentence, UnassignedVariable};

    fn var(label: &str) -> Variable {
        Variable::new(label).unwrap()
    }

    fn atom(label: &str) -> Sentence {
        Sentence::atom(var(label))
    }

    #[test]
    fn double_negation_is_equivalent() -> Result<(), UnassignedVariable> {
        let sentence = Sentence::negation(Sentence::negation(atom("a")));
        let result = determine_logical_equivalence(&sentence, &atom("a"))?;
        let expected = LogicalEquivalence::new(
            BTreeSet::from([Assignment::from([(var("a"), true)]), Assignment::from([(var("a"), false)])]),
            BTreeSet::new(),
        );

        assert_eq!(result, expected);
        assert!(is_logically_equivalent(&sentence, &atom("a"))?);

        Ok(())
    }

    #[test]
    fn different_variables_are_not_equivalent() -> Result<(), UnassignedVariable> {
        let result = determine_logical_equivalence(Sentence::negation(atom("a")), atom("b"))?;
        let expected = LogicalEquivalence::new(
            BTreeSet::from([
                Assignment::from([(var("a"), true), (var("b"), false)]),
                Assignment::from([(var("a"), false), (var("b"), true)]),
            ]),
            BTreeSet::from([
                Assignment::from([(var("a"), true), (var("b"), true)]),
                Assignment::from([(var("a"), false), (var("b"), false)]),
            ]),
        );

        assert_eq!(result, expected);
        assert!(!result.is_equivalent());

        Ok(())
    }

    #[test]
    fn reduction_is_reversed_implication() -> Result<(), UnassignedVariable> {
        let reduction = Sentence::reduction(atom("a"), atom("b"));
        let implication = Sentence::implication(atom("b"), atom("a"));

        assert!(is_logically_equivalent(&reduction, &implication)?);
        assert!(!is_logically_equivalent(&reduction, Sentence::implication(atom("a"), atom("b")))?);

        Ok(())
    }

    #[test]
    fn entailment() -> Result<(), UnassignedVariable> {
        assert!(!logically_entails(Sentence::set([atom("a")]), Sentence::set([atom("b")]))?);
        assert!(logically_entails(
            Sentence::set([Sentence::negation(Sentence::negation(atom("a")))]),
            Sentence::set([atom("a")])
        )?);
        assert!(logically_entails(Sentence::conjunction(atom("a"), atom("b")), atom("a"))?);
        assert!(!logically_entails(atom("a"), Sentence::conjunction(atom("a"), atom("b")))?);

        Ok(())
    }

    #[test]
    fn contradiction_entails_anything() -> Result<(), UnassignedVariable> {
        let contradiction = Sentence::conjunction(atom("a"), Sentence::negation(atom("a")));

        assert!(logically_entails(&contradiction, atom("z"))?);

        Ok(())
    }
}
