//! # Values — Runtime-Typed Decode Output
//!
//! Every resolved capability produces a [`Value`]. One dynamic enum,
//! rather than one static type per composite shape, is what lets a single
//! resolver synthesize decoders for arbitrarily nested descriptors — the
//! same trade-off made for runtime shape checking elsewhere in this
//! workspace: flexibility for dynamically assembled shapes, at the cost of
//! pattern-matching on the result.
//!
//! The composite constructors mirror the descriptor variants:
//!
//! | Descriptor | Success value |
//! |------------|---------------|
//! | `Primitive` | `Int` / `Float` / `Bool` / `Text` (or user-defined) |
//! | `Optional` | `Absent` or `Present(inner)` |
//! | `Sum` | `Left(inner)` or `Right(inner)` |
//! | `Sequence` | `Seq(items)` |
//! | `Tuple` | `Record(fields)` |

use serde::{Deserialize, Serialize};
use std::fmt;

/// A decoded value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    /// Signed integer primitive.
    Int(i64),
    /// Floating-point primitive.
    Float(f64),
    /// Boolean primitive.
    Bool(bool),
    /// Text primitive (the cell's text, unmodified).
    Text(String),
    /// Optional shape: the cell was blank.
    Absent,
    /// Optional shape: the inner decoder succeeded.
    Present(Box<Value>),
    /// Sum shape: the left branch succeeded.
    Left(Box<Value>),
    /// Sum shape: the right branch succeeded (left had failed).
    Right(Box<Value>),
    /// Sequence shape: one element per cell, in row order.
    Seq(Vec<Value>),
    /// Tuple shape: one value per field, in field order.
    Record(Vec<Value>),
}

impl Value {
    /// Wrap a value as a present optional.
    pub fn present(inner: Value) -> Self {
        Value::Present(Box::new(inner))
    }

    /// Wrap a value as the left branch of a sum.
    pub fn left(inner: Value) -> Self {
        Value::Left(Box::new(inner))
    }

    /// Wrap a value as the right branch of a sum.
    pub fn right(inner: Value) -> Self {
        Value::Right(Box::new(inner))
    }

    /// The integer payload, if this is `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The text payload, if this is `Text`.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The boolean payload, if this is `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Text(s) => write!(f, "{:?}", s),
            Value::Absent => write!(f, "absent"),
            Value::Present(v) => write!(f, "present({})", v),
            Value::Left(v) => write!(f, "left({})", v),
            Value::Right(v) => write!(f, "right({})", v),
            Value::Seq(items) => {
                let rendered: Vec<String> = items.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", rendered.join(", "))
            }
            Value::Record(fields) => {
                let rendered: Vec<String> = fields.iter().map(|v| v.to_string()).collect();
                write!(f, "({})", rendered.join(", "))
            }
        }
    }
}
