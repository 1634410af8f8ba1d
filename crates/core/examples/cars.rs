//! Cars: decoding a small table end to end.
//!
//! Run with: cargo run --example cars
//!
//! This example demonstrates:
//! - Registering primitive decoders (builtins here)
//! - Describing a composite shape as a descriptor
//! - Resolving once, decoding many rows, fail-soft per row

use tabcap_core::{decode_all, resolve, Descriptor, Registry, Row};

fn main() {
    println!("=== Cars ===\n");

    // -------------------------------------------------------------------------
    // Registry and Shape
    // -------------------------------------------------------------------------
    let registry = Registry::with_builtins();
    let shape = Descriptor::tuple(vec![
        Descriptor::sum(Descriptor::primitive("int"), Descriptor::primitive("bool")),
        Descriptor::primitive("string"),
        Descriptor::optional(Descriptor::primitive("float")),
    ]);
    println!("Registered primitives: {:?}", registry.tags());
    println!("Requested shape:       {}\n", shape);

    // -------------------------------------------------------------------------
    // Resolve Once
    // -------------------------------------------------------------------------
    let capability = match resolve(&shape, &registry) {
        Ok(capability) => capability,
        Err(err) => {
            eprintln!("unresolvable shape: {}", err);
            return;
        }
    };
    println!("Resolved: {:?}\n", capability);

    // -------------------------------------------------------------------------
    // Decode Many Rows
    // -------------------------------------------------------------------------
    let input = "\
1997,Ford,12500.50
true,Mercury,
2000,Edsel,not-a-price
oops,too,few,cells";

    let rows = Row::tokenize_lines(input, ',');
    for (line, result) in decode_all(&capability, &rows).iter().enumerate() {
        match result {
            Ok(value) => println!("row {}: {}", line, value),
            Err(err) => println!("row {}: FAILED — {}", line, err),
        }
    }
}
