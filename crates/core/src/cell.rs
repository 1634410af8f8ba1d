//! # Cells and Rows — Tokenized Tabular Input
//!
//! The engine decodes tokenized input, never raw text:
//!
//! - [`Cell`]: one text span, the unit a primitive decoder consumes
//! - [`Row`]: an ordered sequence of cells, fixed at tokenization time
//!
//! Both are immutable once built. Everything downstream (registry,
//! composition rules, evaluator) only ever borrows them.
//!
//! ## Tokenizer Glue
//!
//! Splitting a line into cells is deliberately *not* part of the engine —
//! it is a trivial split on a separator character, with no quoting or
//! escaping. [`Row::tokenize`] and [`Row::tokenize_lines`] ship here so
//! examples and tests run end to end, but a caller with its own tokenizer
//! can construct rows directly via [`Row::new`].
//!
//! One edge case belongs to the tokenizer contract, not the engine:
//! `str::split` yields one empty cell for an empty line, so
//! `Row::tokenize("", ',')` has width 1, not 0. A genuinely empty row
//! only exists when constructed as `Row::new(vec![])`.

use std::fmt;

/// Default cell separator for tokenization.
pub const DEFAULT_SEPARATOR: char = ',';

/// A single text span within a row.
///
/// A cell is consumed by exactly one primitive decode attempt (the Sum
/// rule may try two decoders on the same cell, but each attempt sees the
/// same immutable text).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cell(String);

impl Cell {
    /// Create a cell from its text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The cell's text, exactly as tokenized.
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Whether the cell contains only whitespace (or nothing).
    ///
    /// This is the one and only "absent" signal the Optional rule honors.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// An ordered sequence of cells, produced by tokenizing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row(Vec<Cell>);

impl Row {
    /// Create a row from already-tokenized cells.
    pub fn new(cells: Vec<Cell>) -> Self {
        Self(cells)
    }

    /// Tokenize one line into a row by splitting on `separator`.
    ///
    /// No quoting, no escaping — glue for the common case, not a CSV
    /// parser. An empty line yields a single empty cell (see module docs).
    pub fn tokenize(line: &str, separator: char) -> Self {
        Self(line.split(separator).map(Cell::new).collect())
    }

    /// Tokenize a whole input: lines split on line breaks, cells on
    /// `separator`.
    pub fn tokenize_lines(input: &str, separator: char) -> Vec<Row> {
        input.lines().map(|line| Self::tokenize(line, separator)).collect()
    }

    /// Number of cells in this row.
    pub fn width(&self) -> usize {
        self.0.len()
    }

    /// Whether the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The cells, in order.
    pub fn cells(&self) -> &[Cell] {
        &self.0
    }

    /// The cell at `position`, if in range.
    pub fn get(&self, position: usize) -> Option<&Cell> {
        self.0.get(position)
    }

    /// Iterate over the cells in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.0.iter()
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}]",
            self.0
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
