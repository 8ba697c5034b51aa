//! Proofs in Mendelson's axiom system for propositional logic.
//!
//! Only sentences built from atoms, negations and implications are valid in this system. The
//! [`BruteForceMendelsonProver`] looks for a proof of at most one step using implication
//! elimination (modus ponens). It is not a complete prover.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::logging::targets;
use crate::sentence::Sentence;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidProblem {
    #[error("invalid Mendelson sentence in conclusion: {0}")]
    Conclusion(Sentence),

    #[error("invalid Mendelson sentence in premise: {0}")]
    Premise(Sentence),
}

/// A rule application that produces a new premise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InferenceRule {
    /// From `a => b` (and `a`) derive `b`
    ImplicationElimination(Sentence),

    /// Axiom `(a => (b => c)) => ((a => b) => (a => c))`
    ImplicationDistribution(Sentence, Sentence, Sentence),

    /// Axiom `a => (b => a)`
    ImplicationCreation(Sentence, Sentence),

    /// Axiom `(-a => b) => ((-a => -b) => a)`
    ContradictionRealisation(Sentence, Sentence),
}

impl InferenceRule {
    /// The sentence this rule application derives.
    ///
    /// Implication elimination applied to a sentence that is not an implication derives nothing.
    pub fn resulting_premise(&self) -> Option<Sentence> {
        let implies = Sentence::implication;
        let not = Sentence::negation;

        match self {
            Self::ImplicationElimination(Sentence::Implication(_, consequent)) => Some((**consequent).clone()),
            Self::ImplicationElimination(_) => None,
            Self::ImplicationDistribution(a, b, c) => Some(implies(
                implies(a.clone(), implies(b.clone(), c.clone())),
                implies(implies(a.clone(), b.clone()), implies(a.clone(), c.clone())),
            )),
            Self::ImplicationCreation(a, b) => Some(implies(a.clone(), implies(b.clone(), a.clone()))),
            Self::ContradictionRealisation(a, b) => Some(implies(
                implies(not(a.clone()), b.clone()),
                implies(implies(not(a.clone()), not(b.clone())), a.clone()),
            )),
        }
    }
}

/// Sequence of rule applications deriving a conclusion. Empty when the conclusion is already a
/// premise, or when no proof was found.
pub type Proof = Vec<InferenceRule>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofProblem {
    premises: BTreeSet<Sentence>,
    conclusion: Sentence,
}

impl ProofProblem {
    pub fn new<I>(premises: I, conclusion: Sentence) -> Self
    where
        I: IntoIterator<Item = Sentence>,
    {
        Self {
            premises: premises.into_iter().collect(),
            conclusion,
        }
    }

    pub fn premises(&self) -> &BTreeSet<Sentence> {
        &self.premises
    }

    pub fn conclusion(&self) -> &Sentence {
        &self.conclusion
    }
}

/// Check that a sentence only uses the connectives of Mendelson's system.
pub fn is_valid_mendelson_sentence(sentence: &Sentence) -> bool {
    match sentence {
        Sentence::Atom(_) | Sentence::Negation(_) | Sentence::Implication(..) => {
            sentence.sub_sentences().all(is_valid_mendelson_sentence)
        }
        Sentence::Conjunction(..)
        | Sentence::Disjunction(..)
        | Sentence::Reduction(..)
        | Sentence::Equivalence(..)
        | Sentence::SentenceSet(_) => false,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceMendelsonProver;

impl BruteForceMendelsonProver {
    pub fn new() -> Self {
        Self
    }

    pub fn prove(&self, problem: &ProofProblem) -> Result<Proof, InvalidProblem> {
        if !is_valid_mendelson_sentence(problem.conclusion()) {
            return Err(InvalidProblem::Conclusion(problem.conclusion().clone()));
        }

        if let Some(premise) = problem.premises().iter().find(|p| !is_valid_mendelson_sentence(p)) {
            return Err(InvalidProblem::Premise(premise.clone()));
        }

        if problem.premises().contains(problem.conclusion()) {
            log::debug!(target: targets::PROOF, "Conclusion {} is a premise", problem.conclusion());
            return Ok(Proof::new());
        }

        Ok(self.find_best_solution(problem))
    }

    fn find_best_solution(&self, problem: &ProofProblem) -> Proof {
        let solution = problem
            .premises()
            .iter()
            .filter(|premise| matches!(premise, Sentence::Implication(..)))
            .map(|implication| InferenceRule::ImplicationElimination(implication.clone()))
            .find(|rule| rule.resulting_premise().as_ref() == Some(problem.conclusion()));

        match solution {
            Some(rule) => {
                log::debug!(target: targets::PROOF, "Found {:?} for {}", rule, problem.conclusion());
                vec![rule]
            }
            None => {
                log::debug!(target: targets::PROOF, "No single step proof of {}", problem.conclusion());
                Proof::new()
            }
        }
    }
}
