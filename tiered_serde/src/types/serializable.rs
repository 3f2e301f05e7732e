use crate::serde::{InputSerializer, OutputSerializer, PREALLOC_LIMIT};
use crate::{Result, Tier};
use std::io::{Read, Write};

/// A type whose byte form is resolved entirely by the framework:
/// the `Trivial`, `Simple` and `Direct` tiers.
///
/// Leaves opt in through [`crate::trivial!`]; dynamic containers through
/// [`crate::Container`]; arrays and tuples are covered by the crate.
pub trait Plain: Sized {
    const TIER: Tier;

    fn encode<W: Write>(&self, out: &mut OutputSerializer<W>) -> Result<()>;
    fn decode<R: Read>(input: &mut InputSerializer<R>) -> Result<Self>;

    /// Encodes consecutive items. `Trivial` leaves override this with one bulk write.
    fn encode_slice<W: Write>(items: &[Self], out: &mut OutputSerializer<W>) -> Result<()> {
        for item in items {
            item.encode(out)?;
        }
        Ok(())
    }

    /// Decodes exactly `count` consecutive items. `Trivial` leaves override
    /// this with one bulk read.
    fn decode_many<R: Read>(count: usize, input: &mut InputSerializer<R>) -> Result<Vec<Self>> {
        let mut items = Vec::with_capacity(count.min(PREALLOC_LIMIT));
        for _ in 0..count {
            items.push(Self::decode(input)?);
        }
        Ok(items)
    }
}

/// The bound every session accepts.
///
/// All [`Plain`] types are `Serializable` through a blanket impl. Any other
/// type becomes `Serializable`, with tier [`Tier::Custom`], by implementing the
/// hook itself. The hook is shared by both directions, so reading and writing
/// follow the same call sequence by construction. Fields the hook never
/// touches are neither written nor restored.
///
/// ```
/// use tiered_serde::{from_bytes_into, to_bytes, Result, Serializable, Serializer};
///
/// struct Sample {
///     readings: Vec<u16>,
///     label: String,
///     cached_sum: u64,
/// }
///
/// impl Serializable for Sample {
///     fn serialize<S: Serializer>(&mut self, s: &mut S) -> Result<()> {
///         s.serialize(&mut self.label)?;
///         s.serialize(&mut self.readings)
///     }
/// }
///
/// let mut out = Sample { readings: vec![3, 1, 4], label: "pi".into(), cached_sum: 8 };
/// let bytes = to_bytes(&mut out)?;
///
/// let mut input = Sample { readings: vec![], label: String::new(), cached_sum: 0 };
/// from_bytes_into(&bytes, &mut input)?;
/// assert_eq!(out.readings, input.readings);
/// assert_eq!(out.label, input.label);
/// # Ok::<(), tiered_serde::Error>(())
/// ```
///
/// Capability is never inherited. A wrapper around a `Serializable` base,
/// even one that derefs to it, must implement the hook itself:
///
/// ```compile_fail,E0277
/// use tiered_serde::{to_bytes, Result, Serializable, Serializer};
/// use std::ops::{Deref, DerefMut};
///
/// struct Base {
///     id: u32,
/// }
/// impl Serializable for Base {
///     fn serialize<S: Serializer>(&mut self, s: &mut S) -> Result<()> {
///         s.serialize(&mut self.id)
///     }
/// }
///
/// struct Derived {
///     base: Base,
///     extra: Vec<u8>,
/// }
/// impl Deref for Derived {
///     type Target = Base;
///     fn deref(&self) -> &Base {
///         &self.base
///     }
/// }
/// impl DerefMut for Derived {
///     fn deref_mut(&mut self) -> &mut Base {
///         &mut self.base
///     }
/// }
///
/// let mut derived = Derived { base: Base { id: 1 }, extra: vec![] };
/// to_bytes(&mut derived).ok();
/// ```
pub trait Serializable {
    /// Set by the crate's blanket impl. Overriding it in a hand-written hook
    /// is unsupported: the session still runs the hook, whatever tier is
    /// reported.
    #[doc(hidden)]
    const TIER: Tier = Tier::Custom;

    fn serialize<S: Serializer>(&mut self, s: &mut S) -> Result<()>;
}

impl<T: Plain> Serializable for T {
    const TIER: Tier = <T as Plain>::TIER;

    fn serialize<S: Serializer>(&mut self, s: &mut S) -> Result<()> {
        s.plain(self)
    }
}

/// A session, as seen from inside a hook.
///
/// Implemented by [`OutputSerializer`] and [`InputSerializer`]; a hook is
/// generic over it and runs unchanged in both directions.
pub trait Serializer: Sized {
    /// Writes `item`, or overwrites it with what is read.
    fn plain<T: Plain>(&mut self, item: &mut T) -> Result<()>;

    fn serialize<T: Serializable>(&mut self, item: &mut T) -> Result<()> {
        item.serialize(self)
    }
}
