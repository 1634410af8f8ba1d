//! # Capabilities — Resolved Decode Functions
//!
//! A [`Capability`] is an opaque, pure decode function tagged with the
//! [`Descriptor`] it satisfies. Callers obtain one from the resolver,
//! cache it, and reuse it across an entire decode run — re-resolving per
//! row is correct but wasteful.
//!
//! ## Two Scopes
//!
//! The composition rules produce decoders at two granularities, and a
//! capability records which it carries:
//!
//! - **cell-scoped**: `&Cell → Value` — primitives, optionals, sums
//! - **row-scoped**: `&Row → Value` — sequences, tuples
//!
//! [`Capability::decode_row`] is the uniform entry point: a row-scoped
//! capability consumes the whole row; a cell-scoped one requires exactly
//! one cell (a one-column table) and reports a shape error otherwise.
//!
//! Decode functions are `Arc`'d, `Send + Sync`, and own no mutable state,
//! so cloning a capability is cheap and sharing one across any number of
//! worker threads is safe.

use std::fmt;
use std::sync::Arc;

use crate::cell::{Cell, Row};
use crate::descriptor::Descriptor;
use crate::error::{CellError, RowError};
use crate::value::Value;

/// A cell-scoped decode function.
pub type CellFn = Arc<dyn Fn(&Cell) -> Result<Value, CellError> + Send + Sync>;

/// A row-scoped decode function.
pub type RowFn = Arc<dyn Fn(&Row) -> Result<Value, RowError> + Send + Sync>;

/// Which granularity a capability decodes at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Decodes a single cell.
    Cell,
    /// Decodes a whole row.
    Row,
}

#[derive(Clone)]
enum DecodeFn {
    Cell(CellFn),
    Row(RowFn),
}

/// A resolved decoder for a specific shape, tagged with its descriptor.
#[derive(Clone)]
pub struct Capability {
    descriptor: Descriptor,
    decode: DecodeFn,
}

impl Capability {
    /// Wrap a cell-scoped decode function.
    pub fn from_cell_fn(descriptor: Descriptor, decode: CellFn) -> Self {
        Self {
            descriptor,
            decode: DecodeFn::Cell(decode),
        }
    }

    /// Wrap a row-scoped decode function.
    pub fn from_row_fn(descriptor: Descriptor, decode: RowFn) -> Self {
        Self {
            descriptor,
            decode: DecodeFn::Row(decode),
        }
    }

    /// The descriptor this capability satisfies.
    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    /// The granularity this capability decodes at.
    pub fn scope(&self) -> Scope {
        match self.decode {
            DecodeFn::Cell(_) => Scope::Cell,
            DecodeFn::Row(_) => Scope::Row,
        }
    }

    /// Decode one row.
    ///
    /// A cell-scoped capability treats the row as a one-column table:
    /// any other width is a shape error with expected arity 1, the
    /// single-column analogue of the tuple arity check.
    pub fn decode_row(&self, row: &Row) -> Result<Value, RowError> {
        match &self.decode {
            DecodeFn::Row(decode) => decode(row),
            DecodeFn::Cell(decode) => {
                if row.width() != 1 {
                    return Err(RowError::Shape {
                        expected: 1,
                        actual: row.width(),
                    });
                }
                decode(&row.cells()[0]).map_err(|cause| RowError::Cells {
                    failures: vec![(0, cause)],
                })
            }
        }
    }

    /// The underlying cell-scoped function, if this capability has one.
    ///
    /// The resolver uses this to feed sub-capabilities into composition
    /// rules that require single-cell decoders.
    pub(crate) fn cell_fn(&self) -> Option<CellFn> {
        match &self.decode {
            DecodeFn::Cell(decode) => Some(Arc::clone(decode)),
            DecodeFn::Row(_) => None,
        }
    }
}

impl fmt::Debug for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capability")
            .field("descriptor", &self.descriptor.to_string())
            .field("scope", &self.scope())
            .finish()
    }
}
