//! Binary serialization driven by a compile-time classification of types.
//!
//! Every serializable type has a [`Tier`], an associated const resolved by
//! trait impls alone:
//!
//! - [`Tier::Trivial`]: scalars, and types explicitly marked with
//!   [`trivial!`], plus arrays and tuples of them. Copied byte for byte.
//! - [`Tier::Simple`]: bulk-copyable dynamic containers of `Trivial`
//!   elements. One count, then one contiguous copy.
//! - [`Tier::Direct`]: any other nesting of registered [`Container`]s and
//!   aggregates, down to `Trivial` leaves. One count, then each element.
//! - [`Tier::Custom`]: types implementing the [`Serializable`] hook by hand.
//!
//! Anything else does not implement [`Serializable`] and is rejected by the
//! compiler. The wire layout of each tier is described in [`serde`].
//!
//! A session owns one stream for its lifetime: [`OutputSerializer`] encodes,
//! [`InputSerializer`] decodes, and both hand their stream back when done.
//!
//! ```
//! use tiered_serde::{InputSerializer, OutputSerializer, Serializer};
//!
//! let mut out: Vec<Vec<i32>> = vec![vec![0, 1, 2], vec![], vec![42, 69]];
//! let mut ser = OutputSerializer::new(vec![]);
//! ser.serialize(&mut out)?;
//! let bytes = ser.finish()?;
//!
//! let mut input: Vec<Vec<i32>> = vec![];
//! let mut deser = InputSerializer::new(&bytes[..]);
//! deser.serialize(&mut input)?;
//! assert_eq!(out, input);
//! # Ok::<(), tiered_serde::Error>(())
//! ```

mod config;
mod containers;
mod error;
pub mod serde;
mod tier;
mod types;

pub use config::*;
pub use containers::Container;
pub use error::*;
pub use serde::*;
pub use tier::*;
pub use types::*;
