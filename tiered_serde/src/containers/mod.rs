//! The registry of dynamic container kinds.
//!
//! A kind is registered by implementing [`Container`]; the blanket [`Plain`]
//! impl then supplies its tier and the count-prefixed encoding, so sessions
//! never need to know about individual kinds.
//!
//! ```
//! use tiered_serde::{
//!     classify, from_bytes, to_bytes, Container, OutputSerializer, Plain, Result, Tier,
//! };
//! use std::io::Write;
//!
//! /// A log of the most recent values.
//! #[derive(PartialEq, Debug)]
//! struct Recent<T>(Vec<T>);
//!
//! impl<T> Default for Recent<T> {
//!     fn default() -> Self {
//!         Self(vec![])
//!     }
//! }
//!
//! impl<T: Plain> Container for Recent<T> {
//!     type Elem = T;
//!
//!     fn count(&self) -> usize {
//!         self.0.len()
//!     }
//!     fn encode_elems<W: Write>(&self, out: &mut OutputSerializer<W>) -> Result<()> {
//!         T::encode_slice(&self.0, out)
//!     }
//!     fn reset(&mut self, count: usize) {
//!         self.0.clear();
//!         self.0.reserve(count.min(16));
//!     }
//!     fn insert(&mut self, elem: T) {
//!         self.0.push(elem);
//!     }
//! }
//!
//! assert_eq!(Tier::Direct, classify::<Recent<u32>>());
//! assert_eq!(Tier::Direct, classify::<Vec<Recent<Vec<u8>>>>());
//!
//! let mut out = Recent(vec![vec![1u8, 2], vec![]]);
//! let bytes = to_bytes(&mut out)?;
//! assert_eq!(out, from_bytes::<Recent<Vec<u8>>>(&bytes)?);
//! # Ok::<(), tiered_serde::Error>(())
//! ```

mod maps;
mod sequences;
mod sets;
mod text;


use crate::serde::{InputSerializer, OutputSerializer};
use crate::{Plain, Result, Tier};
use std::io::{Read, Write};
use tracing::trace;

/// A dynamic container kind.
pub trait Container: Default {
    /// For map-like kinds, a `(key, value)` tuple.
    type Elem: Plain;

    /// Whether elements can be moved in bulk, making the container `Simple`
    /// when its elements are `Trivial`. Such kinds must route elements through
    /// [`Plain::encode_slice`] and [`Plain::decode_many`].
    const BULK: bool = false;

    fn count(&self) -> usize;

    /// Writes exactly [`Self::count()`] elements.
    fn encode_elems<W: Write>(&self, out: &mut OutputSerializer<W>) -> Result<()>;

    /// Clears the container, preparing it for `count` insertions.
    fn reset(&mut self, count: usize);

    fn insert(&mut self, elem: Self::Elem);

    fn decode_elems<R: Read>(&mut self, count: usize, input: &mut InputSerializer<R>) -> Result<()> {
        self.reset(count);
        for _ in 0..count {
            let elem = <Self::Elem as Plain>::decode(input)?;
            self.insert(elem);
        }
        Ok(())
    }
}

impl<C: Container> Plain for C {
    const TIER: Tier = Tier::of_container(C::BULK, <C::Elem as Plain>::TIER);

    fn encode<W: Write>(&self, out: &mut OutputSerializer<W>) -> Result<()> {
        out.write_len(self.count())?;
        self.encode_elems(out)
    }

    fn decode<R: Read>(input: &mut InputSerializer<R>) -> Result<Self> {
        let count = input.read_len()?;
        let tier = <Self as Plain>::TIER;
        trace!(count, %tier, "Decoding container");
        let mut moi = Self::default();
        moi.decode_elems(count, input)?;
        Ok(moi)
    }
}
