//! # Abs Operator
//!
//! [`abs`] replaces each value of a stream with its magnitude. It is
//! [`apply`](crate::operators::apply) parameterized with elementwise absolute
//! value: each element is widened to `f64`, its magnitude taken, then
//! narrowed back to `T`.
//!
//! ## Integer Minimum Edge Case
//!
//! For integer `T` at `T::MIN` the magnitude is not representable in `T`;
//! narrowing saturates at `T::MAX` (see [`Numeric::narrow`]). Documented
//! behavior, asserted in tests, deliberately not corrected.

use crate::numeric::Numeric;
use crate::operators::apply;
use crate::stream::Stream;

/// Maps each value of `input` to its magnitude.
pub fn abs<T: Numeric>(input: Stream<T>) -> Stream<T> {
  apply(input, |value| T::narrow(value.widen().abs()))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_abs_over_integers() {
    let input = Stream::from_iter(vec![-10, 20, -4, -5]);

    assert_eq!(abs(input).collect().await, vec![10, 20, 4, 5]);
  }

  #[tokio::test]
  async fn test_abs_over_floats() {
    let input = Stream::from_iter(vec![-1.5f64, 2.25, -0.0, -3.0]);

    assert_eq!(abs(input).collect().await, vec![1.5, 2.25, 0.0, 3.0]);
  }

  #[tokio::test]
  async fn test_abs_at_integer_minimum_saturates() {
    let input = Stream::from_iter(vec![i64::MIN, -1, i64::MAX]);

    // |i64::MIN| does not fit in i64; the narrowing cast saturates.
    assert_eq!(
      abs(input).collect().await,
      vec![i64::MAX, 1, i64::MAX]
    );
  }

  #[tokio::test]
  async fn test_abs_narrow_width_integers() {
    let input = Stream::from_iter(vec![i8::MIN, -12i8, 7]);

    assert_eq!(abs(input).collect().await, vec![i8::MAX, 12, 7]);
  }
}
