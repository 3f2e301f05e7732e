//! # Serialization format
//!
//! There is no magic number, version tag or type information; the reader
//! must know the type it expects. All integers, including counts, are in host
//! byte order, so bytes are only portable between hosts of equal endianness.
//!
//! A `Trivial` value is its in-memory representation, `size_of::<T>()` bytes.
//! Fixed-size aggregates are their members back to back.
//!
//! ```text
//! struct Trivial {
//!     bytes:      [u8; size_of::<T>()],
//! }
//!
//! struct Array<T, N> / Tuple<A, B, ..> {
//!     member_0:   T / A,
//!     member_1:   T / B,
//!     ...
//!     // No count: the arity is static.
//! }
//! ```
//!
//! Every dynamic container writes its count before its elements. A `Simple`
//! container's elements are one bulk copy; a `Direct` container's elements are
//! encoded one by one, each according to its own tier. Map entries are
//! `(key, value)` tuples. Trivial aggregates inside a `Simple` container
//! keep their packed form, so their elements are written member by member.
//!
//! ```text
//! struct Simple<T> {
//!     count:      u64,
//!     elems:      [T; count],   // Packed, no padding.
//! }
//!
//! struct Direct<T> {
//!     count:      u64,
//!     elem_0:     T,
//!     elem_1:     T,
//!     ...
//! }
//! ```
//!
//! A `Custom` value is whatever its hook writes, in the hook's order.

mod lengths;
mod serde_reader;
mod serde_writer;
mod solo;

pub use lengths::*;
pub use serde_reader::*;
pub use serde_writer::*;
pub use solo::*;
