//! # Primitive Capability Registry
//!
//! The registry maps primitive type tags (`"int"`, `"string"`, …) to the
//! user-supplied functions that decode one cell's text into one value.
//! It is the *only* extension point the engine needs: everything composite
//! is synthesized by the resolver from what is registered here.
//!
//! ## Lifecycle
//!
//! Built once, then read-only for the lifetime of every resolution
//! performed against it. Resolution never mutates the registry, so sharing
//! one registry across threads needs no synchronization — immutability
//! after construction makes it safe by construction.
//!
//! Re-registering a tag overwrites the previous decoder (last one wins).
//! That is deliberate, not an error: it is how a caller overrides one of
//! the built-in primitive decoders.
//!
//! ## Example
//!
//! ```
//! use tabcap_core::{Cell, CellError, Registry, Value};
//!
//! let mut registry = Registry::with_builtins();
//! registry.register("year", |cell: &Cell| {
//!     let year: i64 = cell
//!         .text()
//!         .trim()
//!         .parse()
//!         .map_err(|_| CellError::decode(format!("invalid year: {}", cell)))?;
//!     Ok(Value::Int(year))
//! });
//!
//! assert!(registry.contains("year"));
//! assert!(registry.contains("int")); // built-in
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::cell::Cell;
use crate::error::CellError;
use crate::value::Value;

/// A registered primitive decoder: one cell's text to one value.
pub type PrimitiveFn = Arc<dyn Fn(&Cell) -> Result<Value, CellError> + Send + Sync>;

/// The primitive capability set, keyed by type tag.
#[derive(Default, Clone)]
pub struct Registry {
    decoders: HashMap<String, PrimitiveFn>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            decoders: HashMap::new(),
        }
    }

    /// A registry pre-populated with the standard primitives:
    /// `int`, `float`, `bool`, and `string`.
    ///
    /// Numeric and boolean decoders trim surrounding whitespace before
    /// parsing; `string` passes the cell text through unmodified.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("int", |cell: &Cell| {
            cell.text()
                .trim()
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|_| CellError::decode(format!("invalid int: {}", cell)))
        });
        registry.register("float", |cell: &Cell| {
            cell.text()
                .trim()
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|_| CellError::decode(format!("invalid float: {}", cell)))
        });
        registry.register("bool", |cell: &Cell| {
            cell.text()
                .trim()
                .parse::<bool>()
                .map(Value::Bool)
                .map_err(|_| CellError::decode(format!("invalid bool: {}", cell)))
        });
        registry.register("string", |cell: &Cell| {
            Ok(Value::Text(cell.text().to_string()))
        });
        registry
    }

    /// Register (or overwrite) the decoder for `tag`.
    pub fn register<F>(&mut self, tag: impl Into<String>, decoder: F)
    where
        F: Fn(&Cell) -> Result<Value, CellError> + Send + Sync + 'static,
    {
        self.decoders.insert(tag.into(), Arc::new(decoder));
    }

    /// Look up the decoder for `tag`.
    pub fn lookup(&self, tag: &str) -> Option<&PrimitiveFn> {
        self.decoders.get(tag)
    }

    /// Whether a decoder is registered for `tag`.
    pub fn contains(&self, tag: &str) -> bool {
        self.decoders.contains_key(tag)
    }

    /// Merge two registries; `other` wins on conflicting tags.
    pub fn merge(mut self, other: Self) -> Self {
        for (tag, decoder) in other.decoders {
            self.decoders.insert(tag, decoder);
        }
        self
    }

    /// The registered tags, sorted for stable output.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.decoders.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Number of registered primitives.
    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    /// Whether the registry has no primitives.
    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("tags", &self.tags())
            .finish()
    }
}
