//! # Error Types
//!
//! Error surface for the stream substrate. The substrate deliberately has no
//! retry, skip, or recovery machinery: a failure inside a caller-supplied
//! transform aborts its worker, and the only recoverable condition a caller
//! can observe is a send into a stream whose consumer is gone.

use std::fmt;
use thiserror::Error;

/// Error returned when a send cannot complete because the stream's consumer
/// has been dropped (the stream was abandoned).
///
/// The unsent value is returned to the caller. Operators treat this as the
/// signal to stop their worker: with the consumer gone there is nothing left
/// to hand values to.
#[derive(Error)]
#[error("stream abandoned: consumer dropped before hand-off")]
pub struct SendError<T>(
  /// The value that could not be handed off.
  pub T,
);

impl<T> fmt::Debug for SendError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SendError").finish_non_exhaustive()
  }
}
