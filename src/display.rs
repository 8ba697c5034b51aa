//! Truth tables.
//!
//! A [`TruthTable`] has one column for every variable of its vocabulary, in sorted order,
//! followed by one column for each additional sentence in the order they were given. There is
//! one row for every assignment over the vocabulary, starting from the all-true assignment.
//!
//! ```rust
//! # #[cfg(feature = "parser")]
//! # fn main() {
//! use proplogic::display::TruthTable;
//! use proplogic::language::Vocabulary;
//! use proplogic::parse;
//!
//! let vocabulary = Vocabulary::from_labels(["a", "b"]).unwrap();
//! let table = TruthTable::new(vocabulary, [parse("-a").unwrap()]);
//!
//! assert_eq!(
//!     table.simple_string().unwrap(),
//!     "+---+---+----+\n\
//!      | a | b | -a |\n\
//!      +---+---+----+\n\
//!      | 1 | 1 | 0  |\n\
//!      | 1 | 0 | 0  |\n\
//!      | 0 | 1 | 1  |\n\
//!      | 0 | 0 | 1  |\n\
//!      +---+---+----+"
//! );
//! # }
//! # #[cfg(not(feature = "parser"))]
//! # fn main() {}
//! ```

use std::fmt::{Display, Formatter};

use crate::language::Vocabulary;
use crate::logging::targets;
use crate::sentence::{Sentence, UnassignedVariable};
use crate::Formula;

/// A column of a truth table: the heading sentence and its value under each assignment.
pub type Column = (Sentence, Vec<bool>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    vocabulary: Vocabulary,
    sentences: Vec<Sentence>,
}

impl TruthTable {
    pub fn new<I>(vocabulary: Vocabulary, sentences: I) -> Self
    where
        I: IntoIterator<Item = Sentence>,
    {
        Self {
            vocabulary,
            sentences: sentences.into_iter().collect(),
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Evaluate every column of the table.
    ///
    /// Fails if one of the sentences uses a variable outside of the table vocabulary.
    pub fn matrix(&self) -> Result<Vec<Column>, UnassignedVariable> {
        let assignments = self.vocabulary.all_assignments();
        let headings = self
            .vocabulary
            .variables()
            .cloned()
            .map(Sentence::atom)
            .chain(self.sentences.iter().cloned());

        headings
            .map(|heading| -> Result<Column, UnassignedVariable> {
                let values = assignments
                    .iter()
                    .map(|assignment| heading.evaluate(assignment))
                    .collect::<Result<Vec<_>, _>>()?;

                Ok((heading, values))
            })
            .collect()
    }

    /// The table as text cells, one inner vector per column starting with the heading.
    pub fn string_matrix(&self) -> Result<Vec<Vec<String>>, UnassignedVariable> {
        let display = |value: bool| String::from(if value { "1" } else { "0" });
        let matrix = self.matrix()?;

        let columns = matrix
            .into_iter()
            .map(|(heading, values)| {
                let mut column = vec![heading.to_string()];
                column.extend(values.into_iter().map(display));
                column
            })
            .collect();

        Ok(columns)
    }

    /// Render the table as an ASCII grid.
    pub fn simple_string(&self) -> Result<String, UnassignedVariable> {
        let columns = self.string_matrix()?;
        let widths: Vec<usize> = columns
            .iter()
            .map(|column| column.iter().map(String::len).max().unwrap_or(0))
            .collect();

        let divider = widths.iter().fold(String::from("+"), |mut line, width| {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
            line
        });

        let row_count = columns.first().map(Vec::len).unwrap_or(0);
        let mut lines = vec![divider.clone()];

        for row in 0..row_count {
            let cells: Vec<String> = columns
                .iter()
                .zip(&widths)
                .map(|(column, width)| format!("{:<width$}", column[row], width = *width))
                .collect();

            lines.push(format!("| {} |", cells.join(" | ")));

            if row == 0 {
                lines.push(divider.clone());
            }
        }

        lines.push(divider);
        log::trace!(target: targets::DISPLAY, "Rendered {} columns and {} rows", columns.len(), row_count);

        Ok(lines.join("\n"))
    }
}

impl Display for TruthTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let table = self.simple_string().map_err(|_| std::fmt::Error)?;
        f.write_str(&table)
    }
}
