//! # tabcap-lift — Single-Value Lifting Over a Context
//!
//! One trait, one operation: apply a plain function to the value(s) inside
//! a computational context (`Option`, `Result`, `Vec`), producing the same
//! context around the transformed value.
//!
//! ## Why a Separate Crate
//!
//! Lifting shares vocabulary with the capability-composition engine in
//! `tabcap-core` — both "combine functions inside structure" — but it is a
//! strictly shallower abstraction: one argument, one transformation, no
//! derivation of anything. Keeping it here, with no dependency in either
//! direction, keeps the two from being conflated.
//!
//! ## Example
//!
//! ```
//! use tabcap_lift::Lift;
//!
//! assert_eq!(Some(2).lift(|n| n * 10), Some(20));
//! assert_eq!(vec![1, 2, 3].lift(|n| n + 1), vec![2, 3, 4]);
//! let ok: Result<i32, String> = Ok(3);
//! assert_eq!(ok.lift(|n| n - 1), Ok(2));
//! ```

/// A context whose contained value(s) a plain function can be applied to.
pub trait Lift {
    /// The value type inside the context.
    type Item;
    /// The same context shape around a transformed value type.
    type Lifted<B>;

    /// Apply `f` inside the context.
    fn lift<B, F>(self, f: F) -> Self::Lifted<B>
    where
        F: FnMut(Self::Item) -> B;
}

impl<A> Lift for Option<A> {
    type Item = A;
    type Lifted<B> = Option<B>;

    fn lift<B, F>(self, f: F) -> Option<B>
    where
        F: FnMut(A) -> B,
    {
        self.map(f)
    }
}

impl<A, E> Lift for Result<A, E> {
    type Item = A;
    type Lifted<B> = Result<B, E>;

    fn lift<B, F>(self, f: F) -> Result<B, E>
    where
        F: FnMut(A) -> B,
    {
        self.map(f)
    }
}

impl<A> Lift for Vec<A> {
    type Item = A;
    type Lifted<B> = Vec<B>;

    fn lift<B, F>(self, f: F) -> Vec<B>
    where
        F: FnMut(A) -> B,
    {
        self.into_iter().map(f).collect()
    }
}
