//! # Operate Operator
//!
//! [`operate`] is the binary combination primitive: it pairs values from two
//! independently produced streams and emits one combined result per pair.
//!
//! ## Contract
//!
//! For inputs of length `m` and `n`, the output holds exactly `min(m, n)`
//! values, with `out[i] == o(a[i], b[i])`. Both inputs are always fully
//! consumed before the worker exits: when one stream ends, the remainder of
//! the other is drained (read and discarded, never forwarded) so its
//! producer is released.
//!
//! ## Truncation
//!
//! If `b` ends in an iteration where a value has already been read from `a`,
//! that value is discarded, not buffered or forwarded. A zip of
//! unequal-length streams therefore truncates silently to the shorter
//! stream; callers that need the trailing values must align their inputs.

use crate::operators::drain;
use crate::stream::{Stream, channel};
use tracing::trace;

/// Combines values from `a` and `b` pairwise through `o`.
///
/// Spawns one worker that owns the output stream. The worker reads one value
/// from `a`, then one from `b`; if either read observes end-of-stream, the
/// worker drains the other input, closes the output, and terminates.
pub fn operate<A, B, R, F>(a: Stream<A>, b: Stream<B>, o: F) -> Stream<R>
where
  A: Send + 'static,
  B: Send + 'static,
  R: Send + 'static,
  F: FnMut(A, B) -> R + Send + 'static,
{
  let (tx, output) = channel();

  tokio::spawn(async move {
    let mut a = a;
    let mut b = b;
    let mut o = o;

    loop {
      let Some(left) = a.recv().await else {
        trace!("operate: first input closed, draining second");
        drain(b).await;
        break;
      };

      let Some(right) = b.recv().await else {
        // `left` is discarded here: unequal-length inputs truncate to the
        // shorter stream.
        trace!("operate: second input closed, draining first");
        drain(a).await;
        break;
      };

      if tx.send(o(left, right)).await.is_err() {
        trace!("operate: output abandoned, stopping worker");
        return;
      }
    }
    trace!("operate: closing output");
  });

  output
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::stream::channel;

  #[tokio::test]
  async fn test_operate_pairs_equal_length_streams() {
    let a = Stream::from_iter(vec![1, 2, 3]);
    let b = Stream::from_iter(vec![10, 20, 30]);

    let sums = operate(a, b, |x, y| x + y);

    assert_eq!(sums.collect().await, vec![11, 22, 33]);
  }

  #[tokio::test]
  async fn test_operate_truncates_and_drains_longer_first_input() {
    let (atx, a) = channel();
    let producer = tokio::spawn(async move {
      for value in [1, 2, 3, 4] {
        if atx.send(value).await.is_err() {
          return false;
        }
      }
      true
    });

    let b = Stream::from_iter(vec![10, 20]);
    let sums = operate(a, b, |x, y| x + y);

    assert_eq!(sums.collect().await, vec![11, 22]);

    // Every send completed, so the remainder of `a` was taken by the drain
    // step rather than forwarded.
    assert!(producer.await.unwrap());
  }

  #[tokio::test]
  async fn test_operate_truncates_and_drains_longer_second_input() {
    let a = Stream::from_iter(vec![1, 2]);

    let (btx, b) = channel();
    let producer = tokio::spawn(async move {
      for value in [10, 20, 30, 40] {
        if btx.send(value).await.is_err() {
          return false;
        }
      }
      true
    });

    let sums = operate(a, b, |x, y| x + y);

    assert_eq!(sums.collect().await, vec![11, 22]);
    assert!(producer.await.unwrap());
  }

  #[tokio::test]
  async fn test_operate_empty_first_input_yields_empty_output() {
    let a = Stream::from_iter(Vec::<i32>::new());
    let b = Stream::from_iter(vec![10, 20, 30]);

    let sums = operate(a, b, |x, y| x + y);

    assert_eq!(sums.collect().await, Vec::<i32>::new());
  }

  #[tokio::test]
  async fn test_operate_over_mixed_types() {
    let a = Stream::from_iter(vec![1i64, 2, 3]);
    let b = Stream::from_iter(vec![0.5f64, 0.25, 0.125]);

    let scaled = operate(a, b, |x, y| x as f64 * y);

    assert_eq!(scaled.collect().await, vec![0.5, 0.5, 0.375]);
  }
}
