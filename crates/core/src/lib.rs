//! # tabcap-core — Capability Composition for Tabular Decoding
//!
//! This crate turns flat tabular text into richly-typed values without one
//! hand-written decoder per composite shape:
//!
//! - **Cells & Rows**: immutable tokenized input ([`cell`])
//! - **Descriptors**: requested shapes as values ([`descriptor`])
//! - **Registry**: user-supplied primitive decoders by type tag ([`registry`])
//! - **Composition rules**: derive composite decoders from sub-decoders ([`compose`])
//! - **Resolver**: synthesize a capability for any finite shape, or fail
//!   with the path to the unsatisfiable part ([`resolver`])
//! - **Evaluator**: apply one capability to many rows, fail-soft per row ([`eval`])
//!
//! ## Design Philosophy
//!
//! "Composition-first" means the decoder for a composite shape is a value
//! derived from the decoders of its parts, not code a caller writes. The
//! caller registers primitives once, describes a shape, and the resolver
//! does the rest — deterministically, with failures reported as data.
//!
//! ## Example
//!
//! ```
//! use tabcap_core::{decode_all, resolve, Descriptor, Registry, Row, Value};
//!
//! let registry = Registry::with_builtins();
//! let shape = Descriptor::tuple(vec![
//!     Descriptor::primitive("int"),
//!     Descriptor::primitive("string"),
//! ]);
//!
//! let capability = resolve(&shape, &registry).unwrap();
//! let rows = Row::tokenize_lines("1997,Ford\n2000,Mercury", ',');
//!
//! for result in decode_all(&capability, &rows) {
//!     let value = result.unwrap();
//!     assert!(matches!(value, Value::Record(_)));
//! }
//! ```

pub mod capability;
pub mod cell;
pub mod compose;
pub mod descriptor;
pub mod error;
pub mod eval;
pub mod registry;
pub mod resolver;
pub mod value;

// Re-export key types at crate root for convenience
pub use capability::{Capability, CellFn, RowFn, Scope};
pub use cell::{Cell, Row, DEFAULT_SEPARATOR};
pub use descriptor::Descriptor;
pub use error::{CellError, PathSegment, ResolveError, ResolveErrorKind, RowError};
pub use eval::{decode_all, decode_all_parallel};
pub use registry::{PrimitiveFn, Registry};
pub use resolver::{resolve, MAX_DEPTH};
pub use value::Value;
