//! # Descriptors — Requested Decode Shapes as Values
//!
//! A [`Descriptor`] is the value-level description of the shape a caller
//! wants decoded. The resolver walks it recursively, so the representation
//! matters:
//!
//! ## Design Choice: Owned Tree
//!
//! Descriptors are an owned recursive enum (`Box`/`Vec` children), not an
//! arena of indices. The payoff is that the acyclicity invariant holds *by
//! construction* — safe Rust cannot build an owned tree that references
//! itself, so there is no cycle to detect at resolution time. The resolver
//! still carries a defensive depth cap for pathologically deep trees, but
//! a construction-time cycle check has nothing to check.
//!
//! `Eq + Hash` are structural, which is exactly what the resolver's
//! memoization keys on: two fields of a tuple sharing the same sub-shape
//! resolve that sub-shape once.
//!
//! ## Cell vs. Row Scope
//!
//! `Primitive`, `Optional`, and `Sum` describe the contents of a single
//! cell. `Sequence` and `Tuple` describe a whole row. The distinction is
//! static — [`Descriptor::is_row_scoped`] — and the resolver rejects a
//! row-scoped shape in a single-cell slot (a tuple field, a sum branch)
//! at resolution time, before any data is touched.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The recursive description of a requested decode shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Descriptor {
    /// A primitive shape, referencing a registry tag.
    Primitive(String),
    /// A possibly-absent single-cell shape.
    Optional(Box<Descriptor>),
    /// A two-branch choice; the left branch is always tried first.
    Sum(Box<Descriptor>, Box<Descriptor>),
    /// A homogeneous, whole-row sequence of any length (including zero).
    Sequence(Box<Descriptor>),
    /// A fixed-arity, heterogeneous, whole-row tuple.
    Tuple(Vec<Descriptor>),
}

impl Descriptor {
    /// A primitive shape for the given registry tag.
    pub fn primitive(tag: impl Into<String>) -> Self {
        Descriptor::Primitive(tag.into())
    }

    /// An optional wrapper around a single-cell shape.
    pub fn optional(inner: Descriptor) -> Self {
        Descriptor::Optional(Box::new(inner))
    }

    /// A left-biased two-branch sum of single-cell shapes.
    pub fn sum(left: Descriptor, right: Descriptor) -> Self {
        Descriptor::Sum(Box::new(left), Box::new(right))
    }

    /// A whole-row sequence of one element shape.
    pub fn sequence(element: Descriptor) -> Self {
        Descriptor::Sequence(Box::new(element))
    }

    /// A whole-row tuple of field shapes.
    pub fn tuple(fields: Vec<Descriptor>) -> Self {
        Descriptor::Tuple(fields)
    }

    /// Whether this shape decodes a whole row rather than a single cell.
    pub fn is_row_scoped(&self) -> bool {
        matches!(self, Descriptor::Sequence(_) | Descriptor::Tuple(_))
    }

    /// Nesting depth of the shape tree (a primitive has depth 1).
    pub fn depth(&self) -> usize {
        match self {
            Descriptor::Primitive(_) => 1,
            Descriptor::Optional(inner) | Descriptor::Sequence(inner) => 1 + inner.depth(),
            Descriptor::Sum(left, right) => 1 + left.depth().max(right.depth()),
            Descriptor::Tuple(fields) => {
                1 + fields.iter().map(Descriptor::depth).max().unwrap_or(0)
            }
        }
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Descriptor::Primitive(tag) => write!(f, "{}", tag),
            Descriptor::Optional(inner) => write!(f, "optional({})", inner),
            Descriptor::Sum(left, right) => write!(f, "sum({}, {})", left, right),
            Descriptor::Sequence(element) => write!(f, "seq({})", element),
            Descriptor::Tuple(fields) => {
                let rendered: Vec<String> = fields.iter().map(|d| d.to_string()).collect();
                write!(f, "tuple({})", rendered.join(", "))
            }
        }
    }
}
