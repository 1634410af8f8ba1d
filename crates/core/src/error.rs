//! # Error Types
//!
//! Failures here are data, not panics, and they split along the two phases
//! of a decode run:
//!
//! - **Resolution** ([`ResolveError`]): the requested shape itself is
//!   unsatisfiable. Surfaced once, up front, before any row is touched —
//!   no row can succeed against an unresolvable shape.
//! - **Evaluation** ([`CellError`], [`RowError`]): one piece of data was
//!   malformed. Isolated to its row; other rows still evaluate.
//!
//! Every failure is a deterministic function of fixed input, so nothing in
//! this crate retries anything.

use thiserror::Error;

use crate::descriptor::Descriptor;

// ============================================================================
// Cell-Level Failures
// ============================================================================

/// A primitive or composed capability failed to decode one cell's text.
///
/// Position information is attached where the row is in scope — see
/// [`RowError::Cells`] — so primitive decoders stay position-unaware.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CellError {
    /// The cell's text did not parse as the expected shape.
    #[error("{reason}")]
    Decode { reason: String },

    /// Both branches of a sum failed; both attempts are reported.
    #[error("no branch matched (left: {left}) (right: {right})")]
    NeitherBranch {
        left: Box<CellError>,
        right: Box<CellError>,
    },
}

impl CellError {
    /// A decode failure with the given reason.
    pub fn decode(reason: impl Into<String>) -> Self {
        CellError::Decode {
            reason: reason.into(),
        }
    }
}

// ============================================================================
// Row-Level Failures
// ============================================================================

/// A row failed to decode against a resolved capability.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RowError {
    /// The row's width does not match the capability's arity.
    /// Never recovered automatically.
    #[error("row has {actual} cells, expected {expected}")]
    Shape { expected: usize, actual: usize },

    /// Cell failures for this row, tagged with their positions.
    ///
    /// A tuple decode collects *every* failing field here, so one report
    /// shows all malformed fields at once. A sequence decode aborts at the
    /// first failure, so its instance carries exactly one entry.
    #[error("{}", render_cell_failures(.failures))]
    Cells { failures: Vec<(usize, CellError)> },
}

fn render_cell_failures(failures: &[(usize, CellError)]) -> String {
    failures
        .iter()
        .map(|(position, cause)| format!("cell {}: {}", position, cause))
        .collect::<Vec<_>>()
        .join("; ")
}

// ============================================================================
// Resolution Failures
// ============================================================================

/// One step on the path from a root descriptor to a failing sub-shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment {
    /// Inside an `Optional`.
    OptionalInner,
    /// Inside the left branch of a `Sum`.
    SumLeft,
    /// Inside the right branch of a `Sum`.
    SumRight,
    /// Inside the element shape of a `Sequence`.
    SequenceElement,
    /// Inside field `i` of a `Tuple`.
    TupleField(usize),
}

impl std::fmt::Display for PathSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathSegment::OptionalInner => write!(f, "Optional inner"),
            PathSegment::SumLeft => write!(f, "Sum left branch"),
            PathSegment::SumRight => write!(f, "Sum right branch"),
            PathSegment::SequenceElement => write!(f, "Sequence element"),
            PathSegment::TupleField(index) => write!(f, "Tuple field {}", index),
        }
    }
}

/// Why a sub-shape could not be resolved.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ResolveErrorKind {
    /// A `Primitive` descriptor names a tag absent from the registry.
    #[error("no capability registered for primitive tag {tag:?}")]
    CapabilityNotFound { tag: String },

    /// A whole-row shape appeared where a single-cell shape is required
    /// (optional inner, sum branch, sequence element, or tuple field).
    #[error("{descriptor} decodes a whole row and cannot fill a single-cell slot")]
    RowScopedInner { descriptor: Descriptor },

    /// Descriptor nesting exceeded the resolver's defensive depth cap.
    #[error("descriptor nesting exceeds depth limit {limit}")]
    DepthExceeded { limit: usize },
}

/// A resolution failure, carrying the descriptor path that produced it.
///
/// The path reads outside-in, e.g.
/// `Tuple field 1 → Sum right branch → no capability registered for
/// primitive tag "int"`, so diagnosing a failure does not require
/// re-deriving the whole shape by hand.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("{}", render_resolve(.path, .kind))]
pub struct ResolveError {
    /// Path from the root descriptor to the failing sub-shape.
    pub path: Vec<PathSegment>,
    /// The underlying failure.
    pub kind: ResolveErrorKind,
}

impl ResolveError {
    /// A resolution failure at the current descriptor (empty path).
    pub fn new(kind: ResolveErrorKind) -> Self {
        Self { path: Vec::new(), kind }
    }

    /// Prefix the path with the segment the caller descended through.
    ///
    /// Called while unwinding the resolver's recursion, so the outermost
    /// segment ends up first.
    pub fn at(mut self, segment: PathSegment) -> Self {
        self.path.insert(0, segment);
        self
    }
}

fn render_resolve(path: &[PathSegment], kind: &ResolveErrorKind) -> String {
    if path.is_empty() {
        kind.to_string()
    } else {
        let rendered: Vec<String> = path.iter().map(|s| s.to_string()).collect();
        format!("{} → {}", rendered.join(" → "), kind)
    }
}
