//! Propositional variables, truth assignments and vocabularies.
//!
//! A [`Variable`] is a named boolean unknown such as `raining` or `x_1`. A [`Vocabulary`] is a set
//! of variables and determines the space of [`Assignment`]s a sentence can be evaluated against.
//!
//! # Examples
//!
//! ```rust
//! use proplogic::language::{Variable, Vocabulary};
//!
//! let vocabulary = Vocabulary::from_labels(["a", "b"]).unwrap();
//! let a = Variable::new("a").unwrap();
//!
//! for assignment in vocabulary.all_assignments() {
//!     let _ = assignment.get(&a);
//! }
//! ```
//!
//! Enumerating assignments is exponential in the size of the vocabulary. Vocabularies with more
//! than 20 to 25 variables are not practical to enumerate.

use std::cmp::Ordering;
use std::collections::{btree_map, btree_set, BTreeMap, BTreeSet};
use std::fmt::{Display, Formatter};
use std::ops::{Add, Index};
use std::str::FromStr;

use thiserror::Error;

use crate::logging::targets;

/// Vocabularies larger than this produce a warning before their assignments are enumerated.
pub const ENUMERATION_WARNING_THRESHOLD: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidLabel {
    #[error("variable label must not be empty")]
    Empty,

    #[error("variable label \"{0}\" must start with a lowercase letter")]
    InvalidStart(String),

    #[error("variable label \"{0}\" can only contain letters, numbers and _")]
    InvalidCharacter(String),
}

/// An atomic boolean unknown identified by its label.
///
/// Labels start with a lowercase ASCII letter followed by any number of ASCII letters, digits or
/// underscores.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Variable {
    label: String,
}

impl Variable {
    /// Create a new variable, checking that the label is well formed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use proplogic::language::Variable;
    ///
    /// assert!(Variable::new("raining_or_snowing").is_ok());
    /// assert!(Variable::new("Raining").is_err());
    /// ```
    pub fn new(label: impl Into<String>) -> Result<Self, InvalidLabel> {
        let label = label.into();
        let mut chars = label.chars();

        match chars.next() {
            None => return Err(InvalidLabel::Empty),
            Some(first) if !first.is_ascii_lowercase() => return Err(InvalidLabel::InvalidStart(label)),
            Some(_) => {}
        }

        if !chars.all(is_label_char) {
            return Err(InvalidLabel::InvalidCharacter(label));
        }

        Ok(Self { label })
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

pub(crate) fn is_label_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}

impl FromStr for Variable {
    type Err = InvalidLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Variable {
    type Error = InvalidLabel;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Variable {
    type Error = InvalidLabel;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A mapping from variables to truth values.
///
/// Assignments are ordered by comparing their sorted `(variable, value)` pairs, where `true` is
/// ordered before `false`. For a fixed vocabulary this yields the conventional truth table row
/// order starting from the all-true row.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Default)]
pub struct Assignment {
    values: BTreeMap<Variable, bool>,
}

impl Assignment {
    pub fn new(values: BTreeMap<Variable, bool>) -> Self {
        Self { values }
    }

    pub fn get(&self, variable: &Variable) -> Option<bool> {
        self.values.get(variable).copied()
    }

    pub fn contains(&self, variable: &Variable) -> bool {
        self.values.contains_key(variable)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Combine two assignments, preferring the values of `other` when both assign a variable.
    pub fn overlay(&self, other: &Assignment) -> Assignment {
        let mut values = self.values.clone();
        values.extend(other.values.iter().map(|(variable, value)| (variable.clone(), *value)));

        Self { values }
    }

    /// The set of variables this assignment gives a value to.
    pub fn vocabulary(&self) -> Vocabulary {
        self.values.keys().cloned().collect()
    }

    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }
}

impl Add for Assignment {
    type Output = Assignment;

    fn add(mut self, rhs: Self) -> Self::Output {
        self.values.extend(rhs.values);
        self
    }
}

/// Sort key placing `true` before `false` for each variable.
fn ordering_key<'a>((variable, value): (&'a Variable, &bool)) -> (&'a Variable, bool) {
    (variable, !*value)
}

impl Ord for Assignment {
    fn cmp(&self, other: &Self) -> Ordering {
        self.values.iter().map(ordering_key).cmp(other.values.iter().map(ordering_key))
    }
}

impl PartialOrd for Assignment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Index<&Variable> for Assignment {
    type Output = bool;

    fn index(&self, index: &Variable) -> &Self::Output {
        self.values.index(index)
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;

        for (index, (variable, value)) in self.values.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }

            write!(f, "{}: {}", variable, u8::from(*value))?;
        }

        write!(f, "}}")
    }
}

pub struct Iter<'a> {
    values: btree_map::Iter<'a, Variable, bool>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a Variable, bool);

    fn next(&mut self) -> Option<Self::Item> {
        self.values.next().map(|(variable, value)| (variable, *value))
    }
}

impl<'a> IntoIterator for &'a Assignment {
    type Item = (&'a Variable, bool);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            values: self.values.iter(),
        }
    }
}

impl IntoIterator for Assignment {
    type Item = (Variable, bool);
    type IntoIter = btree_map::IntoIter<Variable, bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl FromIterator<(Variable, bool)> for Assignment {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (Variable, bool)>,
    {
        Self {
            values: BTreeMap::from_iter(iter),
        }
    }
}

impl<const N: usize> From<[(Variable, bool); N]> for Assignment {
    fn from(values: [(Variable, bool); N]) -> Self {
        Self::from_iter(values)
    }
}

/// A set of variables under consideration.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Default)]
pub struct Vocabulary {
    variables: BTreeSet<Variable>,
}

impl Vocabulary {
    pub fn new(variables: BTreeSet<Variable>) -> Self {
        Self { variables }
    }

    /// Build a vocabulary from a list of labels, failing on the first malformed label.
    pub fn from_labels<I, S>(labels: I) -> Result<Self, InvalidLabel>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        labels.into_iter().map(Variable::new).collect()
    }

    pub fn variables(&self) -> btree_set::Iter<'_, Variable> {
        self.variables.iter()
    }

    pub fn contains(&self, variable: &Variable) -> bool {
        self.variables.contains(variable)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn union(&self, other: &Vocabulary) -> Vocabulary {
        self.variables.union(&other.variables).cloned().collect()
    }

    /// Every total assignment over this vocabulary, `2^n` of them for `n` variables.
    ///
    /// An empty vocabulary has exactly one assignment, the empty one.
    pub fn all_assignments(&self) -> BTreeSet<Assignment> {
        let size = self.variables.len();

        if size > ENUMERATION_WARNING_THRESHOLD {
            log::warn!(target: targets::ASSIGNMENTS, "Enumerating 2^{size} assignments");
        }

        let mut assignments = BTreeSet::new();
        assignments.insert(Assignment::default());

        for variable in &self.variables {
            assignments = assignments
                .into_iter()
                .flat_map(|assignment| {
                    [true, false].map(|value| {
                        let mut values = assignment.values.clone();
                        values.insert(variable.clone(), value);
                        Assignment { values }
                    })
                })
                .collect();
        }

        log::trace!(target: targets::ASSIGNMENTS, "Enumerated {} assignments over {}", assignments.len(), self);
        assignments
    }
}

impl Add for Vocabulary {
    type Output = Vocabulary;

    fn add(mut self, rhs: Self) -> Self::Output {
        self.variables.extend(rhs.variables);
        self
    }
}

impl Display for Vocabulary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let labels: Vec<&str> = self.variables.iter().map(Variable::label).collect();
        write!(f, "{{{}}}", labels.join(", "))
    }
}

impl FromIterator<Variable> for Vocabulary {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Variable>,
    {
        Self {
            variables: BTreeSet::from_iter(iter),
        }
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a Variable;
    type IntoIter = btree_set::Iter<'a, Variable>;

    fn into_iter(self) -> Self::IntoIter {
        self.variables.iter()
    }
}

impl<const N: usize> From<[Variable; N]> for Vocabulary {
    fn from(variables: [Variable; N]) -> Self {
        Self::from_iter(variables)
    }
}
