//! Resolution tests: success keyed to registry contents, path-bearing
//! failures, scope checking, and the pass-through property for
//! registered primitives.

use tabcap_core::{
    decode_all, resolve, Cell, CellError, Descriptor, PathSegment, Registry, ResolveErrorKind,
    Row, Value,
};

// ============================================================================
// Pass-Through Property
// ============================================================================

#[test]
fn resolved_primitive_matches_registered_function() {
    let registry = Registry::with_builtins();
    let cap = resolve(&Descriptor::primitive("int"), &registry).unwrap();

    for text in ["1997", " 42 ", "Ford", "", "-3"] {
        let direct = (registry.lookup("int").unwrap())(&Cell::new(text));
        let via_cap = decode_all(&cap, &[Row::new(vec![Cell::new(text)])])
            .remove(0)
            .map_err(|err| match err {
                tabcap_core::RowError::Cells { mut failures } => failures.remove(0).1,
                other => panic!("unexpected row error: {}", other),
            });
        assert_eq!(via_cap, direct, "pass-through mismatch for {:?}", text);
    }
}

// ============================================================================
// Success Iff Tags Present
// ============================================================================

#[test]
fn all_tags_present_resolves() {
    let registry = Registry::with_builtins();
    let shape = Descriptor::tuple(vec![
        Descriptor::optional(Descriptor::primitive("float")),
        Descriptor::sum(Descriptor::primitive("int"), Descriptor::primitive("bool")),
        Descriptor::primitive("string"),
    ]);
    assert!(resolve(&shape, &registry).is_ok());
}

#[test]
fn absent_tag_fails_with_name_and_path() {
    let registry = Registry::with_builtins();
    let shape = Descriptor::tuple(vec![
        Descriptor::primitive("string"),
        Descriptor::sum(Descriptor::primitive("int"), Descriptor::primitive("date")),
    ]);
    let err = resolve(&shape, &registry).unwrap_err();

    assert_eq!(
        err.kind,
        ResolveErrorKind::CapabilityNotFound {
            tag: "date".to_string()
        }
    );
    assert_eq!(
        err.path,
        vec![PathSegment::TupleField(1), PathSegment::SumRight]
    );
}

#[test]
fn resolution_failure_happens_before_any_decoding() {
    // A registry with no primitives at all: resolution fails up front,
    // so there is never a capability to hand to the evaluator.
    let registry = Registry::new();
    let err = resolve(&Descriptor::sequence(Descriptor::primitive("int")), &registry).unwrap_err();
    assert_eq!(err.path, vec![PathSegment::SequenceElement]);
}

// ============================================================================
// Scope Checking
// ============================================================================

#[test]
fn sequence_of_sequence_is_rejected() {
    let registry = Registry::with_builtins();
    let shape = Descriptor::sequence(Descriptor::sequence(Descriptor::primitive("int")));
    let err = resolve(&shape, &registry).unwrap_err();
    assert_eq!(err.path, vec![PathSegment::SequenceElement]);
    assert!(matches!(err.kind, ResolveErrorKind::RowScopedInner { .. }));
}

#[test]
fn tuple_inside_tuple_is_rejected() {
    let registry = Registry::with_builtins();
    let shape = Descriptor::tuple(vec![
        Descriptor::primitive("int"),
        Descriptor::tuple(vec![Descriptor::primitive("string")]),
    ]);
    let err = resolve(&shape, &registry).unwrap_err();
    assert_eq!(err.path, vec![PathSegment::TupleField(1)]);
    assert!(matches!(err.kind, ResolveErrorKind::RowScopedInner { .. }));
}

// ============================================================================
// Optional Semantics Through Resolution
// ============================================================================

#[test]
fn optional_blank_is_absent_regardless_of_inner() {
    let mut registry = Registry::with_builtins();
    // An inner decoder that rejects everything, including empty text.
    registry.register("picky", |_: &Cell| {
        Err(CellError::decode("picky rejects all input"))
    });

    let cap = resolve(&Descriptor::optional(Descriptor::primitive("picky")), &registry).unwrap();
    let results = decode_all(&cap, &[Row::new(vec![Cell::new("   ")])]);
    assert_eq!(results[0], Ok(Value::Absent));
}

#[test]
fn optional_present_iff_inner_succeeds() {
    let registry = Registry::with_builtins();
    let cap = resolve(&Descriptor::optional(Descriptor::primitive("int")), &registry).unwrap();

    let ok = decode_all(&cap, &[Row::new(vec![Cell::new("7")])]);
    assert_eq!(ok[0], Ok(Value::present(Value::Int(7))));

    let err = decode_all(&cap, &[Row::new(vec![Cell::new("Ford")])]);
    assert!(err[0].is_err());
}

// ============================================================================
// Deeply Nested Shapes
// ============================================================================

#[test]
fn nested_composite_resolves_and_decodes() {
    let registry = Registry::with_builtins();
    // tuple(optional(sum(int, bool)), string, sum(float, string))
    let shape = Descriptor::tuple(vec![
        Descriptor::optional(Descriptor::sum(
            Descriptor::primitive("int"),
            Descriptor::primitive("bool"),
        )),
        Descriptor::primitive("string"),
        Descriptor::sum(Descriptor::primitive("float"), Descriptor::primitive("string")),
    ]);
    let cap = resolve(&shape, &registry).unwrap();

    let rows = Row::tokenize_lines(" ,Ford,1.5\ntrue,Mercury,cheap", ',');
    let results = decode_all(&cap, &rows);

    assert_eq!(
        results[0],
        Ok(Value::Record(vec![
            Value::Absent,
            Value::Text("Ford".into()),
            Value::left(Value::Float(1.5)),
        ]))
    );
    assert_eq!(
        results[1],
        Ok(Value::Record(vec![
            Value::present(Value::right(Value::Bool(true))),
            Value::Text("Mercury".into()),
            Value::right(Value::Text("cheap".into())),
        ]))
    );
}
