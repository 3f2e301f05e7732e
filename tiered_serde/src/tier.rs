use crate::Serializable;
use std::fmt;

/// How a type is converted to and from bytes.
///
/// Tiers are associated consts, fixed at compile time and never derived
/// from a value's content. There is no `Unserializable` variant: such a type
/// has no [`Serializable`] impl, and every attempt to serialize it is
/// rejected by the compiler.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub enum Tier {
    /// Fixed size, copied byte for byte.
    ///
    /// Scalars and marked types occupy exactly `size_of::<T>()` bytes on the
    /// wire. Arrays and tuples of them are `Trivial` too, but are written
    /// member by member without padding, so a tuple's wire size can be
    /// smaller than its `size_of` (`(u8, u32)` takes 5 bytes, not 8).
    Trivial,
    /// Dynamic container of `Trivial` elements, copied in bulk.
    Simple,
    /// Nested containers (or aggregates) bottoming out at `Trivial` leaves.
    Direct,
    /// The type's own hook decides what is written, and in which order.
    Custom,
}

impl Tier {
    /// Tier of a dynamic container, given whether its storage can be copied
    /// in bulk and its element's tier.
    pub const fn of_container(bulk: bool, elem: Tier) -> Tier {
        match (bulk, elem) {
            (true, Tier::Trivial) => Tier::Simple,
            _ => Tier::Direct,
        }
    }

    /// Tier of a fixed-size aggregate (array, tuple) of the given members.
    pub const fn of_aggregate(members: &[Tier]) -> Tier {
        let mut i = 0;
        while i < members.len() {
            if !matches!(members[i], Tier::Trivial) {
                return Tier::Direct;
            }
            i += 1;
        }
        Tier::Trivial
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Trivial => "Trivial",
            Tier::Simple => "Simple",
            Tier::Direct => "Direct",
            Tier::Custom => "Custom",
        };
        f.write_str(name)
    }
}

/// The tier of `T`, resolved at compile time.
///
/// ```
/// use tiered_serde::{classify, Tier};
/// use std::collections::BTreeMap;
///
/// const NESTED: Tier = classify::<Vec<BTreeMap<u8, Vec<u64>>>>();
/// assert_eq!(Tier::Trivial, classify::<[i32; 3]>());
/// assert_eq!(Tier::Simple, classify::<Vec<f64>>());
/// assert_eq!(Tier::Direct, NESTED);
/// ```
pub const fn classify<T: Serializable>() -> Tier {
    <T as Serializable>::TIER
}
