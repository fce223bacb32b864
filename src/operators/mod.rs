//! # Channel Operators
//!
//! The composable operators of the substrate. Each call spawns exactly one
//! worker task that owns exactly one output stream; pipelines are directed
//! acyclic graphs of these workers connected by stream hand-off, with no
//! shared mutable state anywhere.
//!
//! - **[`apply`]**: unary mapper, one output value per input value.
//! - **[`operate`]**: binary combiner, pairs values from two streams.
//! - **[`drain`]**: sink, consumes and discards a stream to release its
//!   producer.
//! - **[`abs`]**: elementwise magnitude, an [`apply`] specialization.

pub mod abs;
pub mod apply;
pub mod drain;
pub mod operate;

pub use abs::abs;
pub use apply::apply;
pub use drain::drain;
pub use operate::operate;
