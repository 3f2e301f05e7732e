use bytemuck::{CheckedBitPattern, NoUninit};

/// Explicit marker for types copied byte for byte.
///
/// The layout guarantees come from bytemuck's traits: [`NoUninit`] lets the
/// in-memory bytes be written out as-is, and [`CheckedBitPattern`] validates
/// bytes read back (e.g. a fieldless enum's discriminant). Deriving those
/// traits is not enough: a type is `Trivial` only once [`crate::trivial!`]
/// has been invoked on it, so a sibling with the same layout but no marker
/// stays unserializable.
///
/// ```compile_fail,E0277
/// use bytemuck::{Pod, Zeroable};
///
/// #[derive(Clone, Copy, Pod, Zeroable)]
/// #[repr(C)]
/// struct Unmarked {
///     x: i32,
///     y: i32,
/// }
///
/// tiered_serde::to_bytes(&mut Unmarked { x: 1, y: 2 }).ok();
/// ```
pub trait Trivial: NoUninit + CheckedBitPattern {}

/// Marks the given types as [`Trivial`] and registers their byte-for-byte
/// encoding.
///
/// ```
/// use bytemuck::{CheckedBitPattern, NoUninit, Pod, Zeroable};
/// use tiered_serde::{classify, from_bytes, to_bytes, trivial, Tier};
///
/// #[derive(Clone, Copy, PartialEq, Debug, Pod, Zeroable)]
/// #[repr(C)]
/// struct Point {
///     x: i32,
///     y: i32,
///     z: i32,
/// }
///
/// #[derive(Clone, Copy, PartialEq, Debug, NoUninit, CheckedBitPattern)]
/// #[repr(u8)]
/// enum Axis {
///     X = 0,
///     Y = 1,
///     Z = 2,
/// }
///
/// trivial!(Point, Axis);
///
/// assert_eq!(Tier::Trivial, classify::<Point>());
/// assert_eq!(Tier::Simple, classify::<Vec<Axis>>());
///
/// let mut out = vec![(Axis::Z, Point { x: 1, y: 1, z: 2 })];
/// let bytes = to_bytes(&mut out)?;
/// assert_eq!(out, from_bytes::<Vec<(Axis, Point)>>(&bytes)?);
/// # Ok::<(), tiered_serde::Error>(())
/// ```
#[macro_export]
macro_rules! trivial {
    ($($t:ty),+ $(,)?) => {$(
        impl $crate::Trivial for $t {}

        impl $crate::Plain for $t {
            const TIER: $crate::Tier = $crate::Tier::Trivial;

            fn encode<W: ::std::io::Write>(
                &self,
                out: &mut $crate::OutputSerializer<W>,
            ) -> $crate::Result<()> {
                out.write_trivial(self)
            }
            fn decode<R: ::std::io::Read>(
                input: &mut $crate::InputSerializer<R>,
            ) -> $crate::Result<Self> {
                input.read_trivial()
            }

            fn encode_slice<W: ::std::io::Write>(
                items: &[Self],
                out: &mut $crate::OutputSerializer<W>,
            ) -> $crate::Result<()> {
                out.write_trivial_slice(items)
            }
            fn decode_many<R: ::std::io::Read>(
                count: usize,
                input: &mut $crate::InputSerializer<R>,
            ) -> $crate::Result<::std::vec::Vec<Self>> {
                input.read_trivial_vec(count)
            }
        }
    )+};
}

trivial!(u8, u16, u32, u64, u128, usize);
trivial!(i8, i16, i32, i64, i128, isize);
trivial!(f32, f64);
trivial!(bool, char);
