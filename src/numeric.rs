//! # Numeric Type Taxonomy
//!
//! Compile-time classification of the scalar types the stream operators may be
//! instantiated over: fixed-width signed integers, fixed-width floats, and
//! their union. The taxonomy has no runtime behavior of its own; it exists so
//! operator signatures resolve statically to a closed set of scalar types.
//!
//! ## Core Traits
//!
//! - **[`Numeric`]**: the union: every eligible scalar (`i8`, `i16`, `i32`,
//!   `i64`, `f32`, `f64`). Carries the widening hooks magnitude operators use.
//! - **[`Integer`]**: marker restricting to the fixed-width signed integers.
//! - **[`Float`]**: marker restricting to the fixed-width floats.
//!
//! The traits are sealed: the union cannot be extended from outside the crate,
//! so operators can rely on the exact widening semantics below.
//!
//! ## Widening Semantics
//!
//! [`Numeric::widen`] converts to `f64`, the widest available float.
//! [`Numeric::narrow`] converts back with `as`-cast semantics: an integer
//! magnitude that does not fit saturates at the type's maximum. `abs` over
//! `i64::MIN` is the canonical case: `|i64::MIN|` is not representable in
//! `i64`, and narrowing yields `i64::MAX`. This is documented behavior, not
//! corrected; see [`crate::operators::abs`].

use num_traits::{PrimInt, Signed};
use std::fmt;

mod sealed {
  pub trait Sealed {}
}

/// The union of scalar types eligible for stream operators.
///
/// Implemented for exactly `i8`, `i16`, `i32`, `i64`, `f32`, and `f64`.
/// Sealed; downstream crates cannot add members.
pub trait Numeric:
  sealed::Sealed + Copy + PartialOrd + fmt::Debug + Send + 'static
{
  /// Converts the value up to the widest available float.
  fn widen(self) -> f64;

  /// Converts a widened value back to `Self` with `as`-cast semantics.
  ///
  /// For integer types, a magnitude outside the representable range
  /// saturates at the boundary value.
  fn narrow(value: f64) -> Self;
}

/// Marker for the fixed-width signed integer members of [`Numeric`].
pub trait Integer: Numeric + PrimInt + Signed {}

/// Marker for the fixed-width float members of [`Numeric`].
pub trait Float: Numeric + num_traits::Float {}

macro_rules! impl_numeric {
  ($($ty:ty),* $(,)?) => {
    $(
      impl sealed::Sealed for $ty {}

      impl Numeric for $ty {
        #[inline]
        fn widen(self) -> f64 {
          self as f64
        }

        #[inline]
        fn narrow(value: f64) -> Self {
          value as $ty
        }
      }
    )*
  };
}

impl_numeric!(i8, i16, i32, i64, f32, f64);

impl Integer for i8 {}
impl Integer for i16 {}
impl Integer for i32 {}
impl Integer for i64 {}

impl Float for f32 {}
impl Float for f64 {}
