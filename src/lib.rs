//! MVLA: a minimal vector and matrix linear algebra library.
//!
//! # Motivation
//!
//! Plenty of programs need 2/3/4-dimensional vectors, the occasional
//! dynamically-sized matrix, and nothing else. The big linear algebra
//! libraries serve that need, but at a cost: large APIs, frequent breaking
//! releases, and abstractions sized for problems MVLA does not have. This
//! crate provides exactly the small surface such programs use and tries to
//! keep it boring.
//!
//! # Goals & Non-Goals
//!
//! - Fixed-size vectors use const generics for their dimension; one generic
//!   [`Vector`] type replaces a zoo of per-kind structs.
//! - Dynamically-sized data gets its own dedicated types ([`DVec`] and
//!   [`DMat`]) instead of being shoehorned into the const-generic API.
//! - Be generic over the element type via small scalar traits ([`Number`],
//!   [`Sqrt`], [`Trig`], ...), but don't try to support non-[`Copy`] numeric
//!   types.
//! - Don't have any unstable public dependencies; approximate-equality test
//!   support is provided by the [`approx`] module rather than an external
//!   crate.
//! - Shape and length mismatches are treated as programming errors and
//!   panic. There is no `Result`-based API; nothing here is recoverable.

pub mod approx;
mod dmat;
mod dvec;
mod math;
mod traits;
mod vector;

pub use dmat::*;
pub use dvec::*;
pub use math::*;
pub use traits::*;
pub use vector::*;
