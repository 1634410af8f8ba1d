//! # Composition Rules — Deriving Composite Decoders
//!
//! Four generative rules, each a pure function from sub-decoders to the
//! decoder for a containing shape. This is the heart of the engine: given
//! only primitive decoders, repeated application of these rules yields a
//! decoder for any finite composite shape, with no composite-specific
//! code from the caller.
//!
//! The rules inspect *shapes*, never runtime values — each returns a
//! closure, and only that closure ever looks at cell text.
//!
//! | Rule | Consumes | Produces |
//! |------|----------|----------|
//! | [`optional`] | one cell decoder | cell decoder |
//! | [`sum`] | two cell decoders | cell decoder |
//! | [`sequence`] | one cell decoder | row decoder |
//! | [`tuple`] | n cell decoders | row decoder |
//!
//! The cell/row asymmetry is structural: an optional or a sum still fits
//! in one cell, while a sequence or a tuple spreads across a whole row.
//! That is why the latter two cannot nest inside the former — a constraint
//! the resolver enforces before these rules are ever applied.

use std::sync::Arc;

use crate::capability::{CellFn, RowFn};
use crate::cell::{Cell, Row};
use crate::error::{CellError, RowError};
use crate::value::Value;

/// Derive a decoder for `Optional(T)` from the decoder for `T`.
///
/// A cell consisting solely of whitespace (after trimming) is the one and
/// only "absent" signal and yields [`Value::Absent`] without consulting
/// the inner decoder. Any other text delegates to the inner decoder: its
/// success is wrapped as [`Value::Present`], its failure propagates
/// unchanged — optionality never swallows a parse error on real text.
pub fn optional(inner: CellFn) -> CellFn {
    Arc::new(move |cell: &Cell| {
        if cell.is_blank() {
            return Ok(Value::Absent);
        }
        inner(cell).map(Value::present)
    })
}

/// Derive a decoder for `Sum(L, R)` from the decoders for `L` and `R`.
///
/// Left is always tried first; its success is tagged [`Value::Left`] and
/// the right decoder is never consulted. Only after a left failure is the
/// right decoder tried, tagging success as [`Value::Right`]. When both
/// fail, the combined error reports both attempts.
///
/// The left-before-right order is fixed. It is what makes decoding
/// deterministic when a cell's text is valid for both branches — callers
/// relying on a right-tagged result for ambiguous input are relying on
/// something this engine deliberately never does.
pub fn sum(left: CellFn, right: CellFn) -> CellFn {
    Arc::new(move |cell: &Cell| match left(cell) {
        Ok(value) => Ok(Value::left(value)),
        Err(left_err) => match right(cell) {
            Ok(value) => Ok(Value::right(value)),
            Err(right_err) => Err(CellError::NeitherBranch {
                left: Box::new(left_err),
                right: Box::new(right_err),
            }),
        },
    })
}

/// Derive a decoder for `Sequence(E)` from the decoder for `E`.
///
/// Applies the element decoder to every cell of the row independently,
/// in order. The first element failure aborts the whole sequence and
/// reports the failing position. An empty row is an empty sequence, not
/// a failure.
pub fn sequence(element: CellFn) -> RowFn {
    Arc::new(move |row: &Row| {
        let mut items = Vec::with_capacity(row.width());
        for (position, cell) in row.iter().enumerate() {
            match element(cell) {
                Ok(value) => items.push(value),
                Err(cause) => {
                    return Err(RowError::Cells {
                        failures: vec![(position, cause)],
                    })
                }
            }
        }
        Ok(Value::Seq(items))
    })
}

/// Derive a decoder for `Tuple([T0..Tn-1])` from the field decoders.
///
/// The row's width must equal the tuple's arity exactly; otherwise the
/// decode fails with a shape error naming expected vs. actual counts and
/// no field decoder runs. With the width right, field `i` decodes cell
/// `i` for all `i` — and unlike [`sequence`], failures are collected per
/// position rather than short-circuited, so one report shows every
/// malformed field in the row at once.
pub fn tuple(fields: Vec<CellFn>) -> RowFn {
    Arc::new(move |row: &Row| {
        if row.width() != fields.len() {
            return Err(RowError::Shape {
                expected: fields.len(),
                actual: row.width(),
            });
        }
        let mut values = Vec::with_capacity(fields.len());
        let mut failures = Vec::new();
        for (position, (field, cell)) in fields.iter().zip(row.iter()).enumerate() {
            match field(cell) {
                Ok(value) => values.push(value),
                Err(cause) => failures.push((position, cause)),
            }
        }
        if failures.is_empty() {
            Ok(Value::Record(values))
        } else {
            Err(RowError::Cells { failures })
        }
    })
}
