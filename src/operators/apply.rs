//! # Apply Operator
//!
//! [`apply`] is the unary transformation primitive: it maps each value of an
//! input stream through a caller-supplied function, one output value per
//! input value, order preserved.
//!
//! ## Contract
//!
//! - Output length equals input length; `out[i] == f(in[i])` for all `i`.
//! - The output stream closes exactly when the worker terminates, which
//!   happens when the input reaches end-of-stream.
//! - `f` must be pure and total. A panic in `f` aborts the worker before any
//!   send, leaving the output abandoned; it surfaces through the task panic
//!   path rather than being caught.
//!
//! Every send is a single-slot hand-off, so a slow consumer of the output
//! stalls this worker, which in turn stalls the input's producer.
//!
//! ## Example
//!
//! ```rust
//! use numweave::stream::Stream;
//! use numweave::operators::apply;
//!
//! # async fn example() {
//! let input = Stream::from_iter(vec![1, 2, 3]);
//! let doubled = apply(input, |n| n * 2);
//! assert_eq!(doubled.collect().await, vec![2, 4, 6]);
//! # }
//! ```

use crate::numeric::Numeric;
use crate::stream::{Stream, channel};
use tracing::trace;

/// Maps each value of `input` through `f`, returning the transformed stream.
///
/// Spawns one worker that owns the output stream and closes it when `input`
/// ends. If the output is abandoned the worker stops without reading further
/// input.
pub fn apply<T, F>(input: Stream<T>, f: F) -> Stream<T>
where
  T: Numeric,
  F: FnMut(T) -> T + Send + 'static,
{
  let (tx, output) = channel();

  tokio::spawn(async move {
    let mut input = input;
    let mut f = f;

    while let Some(value) = input.recv().await {
      if tx.send(f(value)).await.is_err() {
        trace!("apply: output abandoned, stopping worker");
        return;
      }
    }
    trace!("apply: input closed, closing output");
  });

  output
}
