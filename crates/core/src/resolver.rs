//! # Resolver — From Descriptor to Capability
//!
//! The resolver walks a [`Descriptor`] depth-first and synthesizes a
//! [`Capability`] for it: primitives come straight from the registry,
//! composites from recursively resolved sub-capabilities combined via the
//! composition rules. It either produces a capability or fails with the
//! exact path to the unsatisfiable sub-shape — errors as data, observably,
//! rather than an opaque "no instance found".
//!
//! ## Guarantees
//!
//! - **Deterministic order**: sub-shapes resolve left to right (`Sum`
//!   left branch before right, tuple fields in index order), and the
//!   first failure wins.
//! - **Memoization**: within one pass, structurally equal sub-descriptors
//!   resolve once; later occurrences reuse the cached capability (an
//!   `Arc` clone). This matters once a shape is shared across several
//!   fields of the same tuple.
//! - **Termination**: owned descriptor trees cannot be cyclic, so
//!   recursion is bounded by tree depth. A defensive cap ([`MAX_DEPTH`])
//!   turns pathological depth into an error instead of a blown stack.
//!
//! Resolution is synchronous, side-effect free, and never mutates the
//! registry, so any number of threads may resolve against the same
//! registry concurrently.

use std::collections::HashMap;

use crate::capability::{Capability, CellFn};
use crate::compose;
use crate::descriptor::Descriptor;
use crate::error::{PathSegment, ResolveError, ResolveErrorKind};
use crate::registry::Registry;

/// Defensive recursion cap. Descriptor trees deeper than this fail with
/// [`ResolveErrorKind::DepthExceeded`] rather than recursing unboundedly.
pub const MAX_DEPTH: usize = 128;

/// Resolve a capability for `descriptor` against `registry`.
///
/// # Example
///
/// ```
/// use tabcap_core::{decode_all, resolve, Descriptor, Registry, Row, Value};
///
/// let registry = Registry::with_builtins();
/// let shape = Descriptor::tuple(vec![
///     Descriptor::primitive("int"),
///     Descriptor::primitive("string"),
/// ]);
///
/// let capability = resolve(&shape, &registry).unwrap();
/// let rows = Row::tokenize_lines("1997,Ford", ',');
/// let results = decode_all(&capability, &rows);
/// assert_eq!(
///     results[0],
///     Ok(Value::Record(vec![Value::Int(1997), Value::Text("Ford".into())]))
/// );
/// ```
pub fn resolve(descriptor: &Descriptor, registry: &Registry) -> Result<Capability, ResolveError> {
    let mut memo = HashMap::new();
    resolve_with(descriptor, registry, &mut memo, 0)
}

fn resolve_with(
    descriptor: &Descriptor,
    registry: &Registry,
    memo: &mut HashMap<Descriptor, Capability>,
    depth: usize,
) -> Result<Capability, ResolveError> {
    if depth > MAX_DEPTH {
        return Err(ResolveError::new(ResolveErrorKind::DepthExceeded {
            limit: MAX_DEPTH,
        }));
    }
    if let Some(cached) = memo.get(descriptor) {
        return Ok(cached.clone());
    }

    let capability = match descriptor {
        Descriptor::Primitive(tag) => {
            let decode = registry.lookup(tag).ok_or_else(|| {
                ResolveError::new(ResolveErrorKind::CapabilityNotFound { tag: tag.clone() })
            })?;
            Capability::from_cell_fn(descriptor.clone(), decode.clone())
        }

        Descriptor::Optional(inner) => {
            let inner_fn = resolve_cell_fn(
                inner,
                registry,
                memo,
                depth + 1,
                PathSegment::OptionalInner,
            )?;
            Capability::from_cell_fn(descriptor.clone(), compose::optional(inner_fn))
        }

        Descriptor::Sum(left, right) => {
            // Left resolves first; a left failure is reported before the
            // right branch is even examined.
            let left_fn =
                resolve_cell_fn(left, registry, memo, depth + 1, PathSegment::SumLeft)?;
            let right_fn =
                resolve_cell_fn(right, registry, memo, depth + 1, PathSegment::SumRight)?;
            Capability::from_cell_fn(descriptor.clone(), compose::sum(left_fn, right_fn))
        }

        Descriptor::Sequence(element) => {
            let element_fn = resolve_cell_fn(
                element,
                registry,
                memo,
                depth + 1,
                PathSegment::SequenceElement,
            )?;
            Capability::from_row_fn(descriptor.clone(), compose::sequence(element_fn))
        }

        Descriptor::Tuple(fields) => {
            let mut field_fns = Vec::with_capacity(fields.len());
            for (index, field) in fields.iter().enumerate() {
                field_fns.push(resolve_cell_fn(
                    field,
                    registry,
                    memo,
                    depth + 1,
                    PathSegment::TupleField(index),
                )?);
            }
            Capability::from_row_fn(descriptor.clone(), compose::tuple(field_fns))
        }
    };

    memo.insert(descriptor.clone(), capability.clone());
    Ok(capability)
}

/// Resolve a sub-descriptor that must yield a cell-scoped decoder, tagging
/// any failure with the path segment the resolver descended through.
fn resolve_cell_fn(
    descriptor: &Descriptor,
    registry: &Registry,
    memo: &mut HashMap<Descriptor, Capability>,
    depth: usize,
    segment: PathSegment,
) -> Result<CellFn, ResolveError> {
    let capability =
        resolve_with(descriptor, registry, memo, depth).map_err(|err| err.at(segment))?;
    capability.cell_fn().ok_or_else(|| {
        ResolveError::new(ResolveErrorKind::RowScopedInner {
            descriptor: capability.descriptor().clone(),
        })
        .at(segment)
    })
}

impl Registry {
    /// Convenience for [`resolve`] with method syntax.
    pub fn resolve(&self, descriptor: &Descriptor) -> Result<Capability, ResolveError> {
        resolve(descriptor, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Scope;
    use crate::cell::Row;
    use crate::value::Value;

    #[test]
    fn test_primitive_resolves_from_registry() {
        let registry = Registry::with_builtins();
        let cap = resolve(&Descriptor::primitive("int"), &registry).unwrap();
        assert_eq!(cap.scope(), Scope::Cell);
        assert_eq!(cap.descriptor(), &Descriptor::primitive("int"));
    }

    #[test]
    fn test_primitive_not_found() {
        let registry = Registry::with_builtins();
        let err = resolve(&Descriptor::primitive("date"), &registry).unwrap_err();
        assert!(err.path.is_empty());
        assert_eq!(
            err.kind,
            ResolveErrorKind::CapabilityNotFound {
                tag: "date".to_string()
            }
        );
    }

    #[test]
    fn test_nested_failure_carries_path() {
        let registry = Registry::new(); // no "int" registered
        let shape = Descriptor::tuple(vec![
            Descriptor::primitive("string"),
            Descriptor::sum(Descriptor::primitive("string"), Descriptor::primitive("int")),
        ]);
        let err = resolve(&shape, &registry).unwrap_err();
        // First failure encountered wins: field 0's "string" is missing.
        assert_eq!(err.path, vec![PathSegment::TupleField(0)]);
    }

    #[test]
    fn test_sum_right_branch_path() {
        let mut registry = Registry::new();
        registry.register("string", |cell| Ok(Value::Text(cell.text().to_string())));
        let shape = Descriptor::tuple(vec![
            Descriptor::primitive("string"),
            Descriptor::sum(Descriptor::primitive("string"), Descriptor::primitive("int")),
        ]);
        let err = resolve(&shape, &registry).unwrap_err();
        assert_eq!(
            err.path,
            vec![PathSegment::TupleField(1), PathSegment::SumRight]
        );
        assert_eq!(
            err.to_string(),
            "Tuple field 1 → Sum right branch → no capability registered for primitive tag \"int\""
        );
    }

    #[test]
    fn test_row_scoped_shape_rejected_in_cell_slot() {
        let registry = Registry::with_builtins();
        let shape = Descriptor::tuple(vec![Descriptor::sequence(Descriptor::primitive("int"))]);
        let err = resolve(&shape, &registry).unwrap_err();
        assert_eq!(err.path, vec![PathSegment::TupleField(0)]);
        assert!(matches!(
            err.kind,
            ResolveErrorKind::RowScopedInner { .. }
        ));
    }

    #[test]
    fn test_optional_of_sequence_rejected() {
        let registry = Registry::with_builtins();
        let shape = Descriptor::optional(Descriptor::sequence(Descriptor::primitive("int")));
        let err = resolve(&shape, &registry).unwrap_err();
        assert_eq!(err.path, vec![PathSegment::OptionalInner]);
    }

    #[test]
    fn test_depth_cap() {
        let registry = Registry::with_builtins();
        let deep = (0..MAX_DEPTH + 10).fold(Descriptor::primitive("int"), |inner, _| {
            Descriptor::optional(inner)
        });
        let err = resolve(&deep, &registry).unwrap_err();
        assert!(matches!(
            err.kind,
            ResolveErrorKind::DepthExceeded { limit } if limit == MAX_DEPTH
        ));
    }

    #[test]
    fn test_shape_within_depth_cap_resolves() {
        let registry = Registry::with_builtins();
        let nested = (0..MAX_DEPTH - 1).fold(Descriptor::primitive("int"), |inner, _| {
            Descriptor::optional(inner)
        });
        assert!(resolve(&nested, &registry).is_ok());
    }

    #[test]
    fn test_shared_subshape_across_tuple_fields() {
        // Both fields share the same sub-descriptor; memoization returns
        // the same capability, and both fields decode correctly.
        let registry = Registry::with_builtins();
        let shared = Descriptor::optional(Descriptor::primitive("int"));
        let shape = Descriptor::tuple(vec![shared.clone(), shared]);
        let cap = resolve(&shape, &registry).unwrap();

        let row = Row::tokenize("1, ", ',');
        assert_eq!(
            cap.decode_row(&row),
            Ok(Value::Record(vec![
                Value::present(Value::Int(1)),
                Value::Absent
            ]))
        );
    }

    #[test]
    fn test_registry_resolve_method() {
        let registry = Registry::with_builtins();
        let cap = registry
            .resolve(&Descriptor::sequence(Descriptor::primitive("int")))
            .unwrap();
        assert_eq!(cap.scope(), Scope::Row);
    }
}
