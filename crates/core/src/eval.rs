//! # Evaluator — Applying One Capability to Many Rows
//!
//! A thin driver over a resolved [`Capability`]: apply it to every row of
//! tokenized input, collect one result per row, aligned with input order.
//!
//! ## Fail Soft on Data
//!
//! The evaluator never short-circuits across rows — one malformed row does
//! not prevent evaluating the rest, so a caller always gets a complete
//! per-row report. A caller that *wants* to stop at the first bad row
//! implements that above the evaluator; there is no cancellation concept
//! at this layer.
//!
//! ## Parallelism
//!
//! Rows are independent and share only the read-only capability, so
//! per-row evaluation is embarrassingly parallel. [`decode_all_parallel`]
//! spawns one task per row and awaits the handles in input order, which
//! preserves row-index alignment regardless of completion order.

use crate::capability::Capability;
use crate::cell::Row;
use crate::error::RowError;
use crate::value::Value;

/// Decode every row with the given capability, one result per row, in
/// input order.
pub fn decode_all(capability: &Capability, rows: &[Row]) -> Vec<Result<Value, RowError>> {
    rows.iter().map(|row| capability.decode_row(row)).collect()
}

/// Parallel [`decode_all`]: one spawned task per row, results re-collected
/// in input order.
///
/// Produces exactly the same results as the synchronous version; the only
/// difference is scheduling.
pub async fn decode_all_parallel(
    capability: &Capability,
    rows: Vec<Row>,
) -> Vec<Result<Value, RowError>> {
    let mut handles = Vec::with_capacity(rows.len());
    for row in rows {
        let capability = capability.clone();
        handles.push(tokio::spawn(async move { capability.decode_row(&row) }));
    }

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        results.push(handle.await.expect("row decode task panicked"));
    }
    results
}
