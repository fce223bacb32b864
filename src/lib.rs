//! # NumWeave
//!
//! Composable, channel-based stream operators for numeric pipelines.
//!
//! NumWeave is the substrate higher-level numeric code (e.g. incremental
//! indicators over time-series data) composes pipelines from: a typed,
//! closable [`stream`](crate::stream) primitive plus a small set of
//! [`operators`](crate::operators) that each spawn exactly one worker task
//! owning exactly one output stream.
//!
//! ## Key Properties
//!
//! - **Rendezvous Hand-Off**: streams hold at most one in-flight value; a
//!   send completes only when the consumer takes it, so flow control
//!   propagates through a whole chain with minimal buffering
//! - **Deterministic Closing**: an operator's output closes exactly when its
//!   worker terminates, and a worker terminates exactly when its governing
//!   end-of-stream condition is observed
//! - **No Shared State**: workers coordinate only via stream hand-off; every
//!   stream has one writer and one reader, enforced by ownership
//! - **No Recovery**: a panic in a caller-supplied transform aborts that
//!   worker and abandons its output; there is no retry, catch, or timeout
//!
//! ## Quick Start
//!
//! ```rust
//! use numweave::operators::{abs, operate};
//! use numweave::stream::Stream;
//!
//! # async fn example() {
//! let a = abs(Stream::from_iter(vec![-1, 2, -3]));
//! let b = Stream::from_iter(vec![10, 20, 30]);
//!
//! let sums = operate(a, b, |x, y| x + y);
//! assert_eq!(sums.collect().await, vec![11, 22, 33]);
//! # }
//! ```

// Documentation enforcement - treat missing docs as errors
#![deny(missing_docs)]

/// Error types for the stream substrate.
pub mod error;
/// Compile-time taxonomy of eligible scalar types.
pub mod numeric;
/// The channel operators: apply, operate, drain, abs.
pub mod operators;
/// The stream primitive and its producer/consumer conveniences.
pub mod stream;


pub use error::SendError;
pub use numeric::{Float, Integer, Numeric};
pub use operators::{abs, apply, drain, operate};
pub use stream::{Stream, StreamSender, channel};
