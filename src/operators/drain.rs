//! # Drain Operator
//!
//! [`drain`] is the discard sink: it consumes a stream to end-of-stream and
//! throws every value away. Operators use it to release a producer they can
//! no longer pair with: each discarded receive frees the hand-off slot the
//! producer is blocked on.

use crate::stream::Stream;

/// Consumes and discards every remaining value of `stream`, returning once
/// end-of-stream is observed.
///
/// Receive-only and blocking (awaits each hand-off); never returns early and
/// never transforms or forwards a value.
pub async fn drain<T: Send + 'static>(mut stream: Stream<T>) {
  while stream.recv().await.is_some() {}
}
