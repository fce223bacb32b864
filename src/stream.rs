//! # Stream Primitive
//!
//! The channel primitive every operator is built on: a unidirectional,
//! single-producer single-consumer sequence of typed values with an explicit
//! end-of-stream signal.
//!
//! ## Overview
//!
//! A stream is a pair of halves created by [`channel`]:
//!
//! - **[`StreamSender<T>`]**: the send half, owned by exactly one producer.
//!   Dropping it closes the stream; close happens exactly once because the
//!   half is moved, never shared.
//! - **[`Stream<T>`]**: the receive half, owned by exactly one consumer.
//!   [`Stream::recv`] yields `None` once the stream is closed and exhausted.
//!
//! ## Hand-Off Semantics
//!
//! The underlying channel has capacity 1, the native Tokio rendering of a
//! rendezvous hand-off: one value may be in flight, and the next send does
//! not complete until the consumer has taken it. Flow control therefore
//! propagates through a whole operator chain: a slow final consumer stalls
//! every upstream worker at its send point. There is no other buffering and
//! no other synchronization primitive anywhere in the substrate.
//!
//! ## Quick Start
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
//!
//! Downstream code that prefers the ecosystem trait can use any `Stream<T>`
//! as a [`futures::Stream`] and read at its own pace.

use crate::error::SendError;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::mpsc;
use tracing::trace;

/// Creates a connected stream pair.
///
/// The channel holds at most one in-flight value: a send completes only when
/// the slot is free, and the slot frees only when the consumer receives. This
/// single-slot hand-off is the sole form of buffering in the substrate.
pub fn channel<T: Send + 'static>() -> (StreamSender<T>, Stream<T>) {
  let (tx, rx) = mpsc::channel(1);
  (StreamSender { tx }, Stream { rx })
}

/// The send half of a stream.
///
/// Owned by exactly one producer. The stream closes when this half is
/// dropped; because the half is never cloned across operators, close happens
/// exactly once and no send can follow it.
pub struct StreamSender<T> {
  tx: mpsc::Sender<T>,
}

impl<T: Send + 'static> StreamSender<T> {
  /// Hands one value to the consumer.
  ///
  /// Completes only once the value is accepted into the single in-flight
  /// slot. Returns the value in [`SendError`] if the consumer was dropped.
  pub async fn send(&self, value: T) -> Result<(), SendError<T>> {
    self.tx.send(value).await.map_err(|err| SendError(err.0))
  }
}

/// The receive half of a stream.
///
/// Owned by exactly one consumer. An exhausted, closed stream yields `None`
/// from [`Stream::recv`]; it never blocks forever provided the producer
/// closes (a producer that never closes is a documented caller
/// responsibility, not guarded against here).
pub struct Stream<T> {
  rx: mpsc::Receiver<T>,
}

impl<T: Send + 'static> Stream<T> {
  /// Receives the next value, or `None` at end-of-stream.
  pub async fn recv(&mut self) -> Option<T> {
    self.rx.recv().await
  }

  /// Spawns a producer worker that feeds `values` through a fresh stream,
  /// closing it when the iterator is exhausted.
  ///
  /// The worker stops early if the stream is abandoned.
  pub fn from_iter<I>(values: I) -> Self
  where
    I: IntoIterator<Item = T> + Send + 'static,
    I::IntoIter: Send,
  {
    let (tx, out) = channel();

    tokio::spawn(async move {
      for value in values {
        if tx.send(value).await.is_err() {
          trace!("from_iter: stream abandoned, stopping producer");
          return;
        }
      }
    });

    out
  }

  /// Consumes the stream to end-of-stream, collecting every value in order.
  pub async fn collect(mut self) -> Vec<T> {
    let mut values = Vec::new();
    while let Some(value) = self.recv().await {
      values.push(value);
    }
    values
  }
}

impl<T: Send + 'static> futures::Stream for Stream<T> {
  type Item = T;

  fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
    self.get_mut().rx.poll_recv(cx)
  }
}
