//! Fixed-size aggregates. Their size is static, so no count is written.

use crate::serde::{InputSerializer, OutputSerializer};
use crate::{Error, Plain, Result, Tier};
use std::any;
use std::io::{Read, Write};

impl<T: Plain, const N: usize> Plain for [T; N] {
    const TIER: Tier = Tier::of_aggregate(&[<T as Plain>::TIER]);

    fn encode<W: Write>(&self, out: &mut OutputSerializer<W>) -> Result<()> {
        T::encode_slice(&self[..], out)
    }
    fn decode<R: Read>(input: &mut InputSerializer<R>) -> Result<Self> {
        let items = T::decode_many(N, input)?;
        Self::try_from(items).map_err(|_| Error::InvalidValue {
            type_name: any::type_name::<Self>(),
        })
    }
}

/// Members are encoded in declaration order, with no padding between them.
macro_rules! tuple_impls {
    ($($name:ident)+) => {
        impl<$($name: Plain),+> Plain for ($($name,)+) {
            const TIER: Tier = Tier::of_aggregate(&[$(<$name as Plain>::TIER),+]);

            #[allow(non_snake_case)]
            fn encode<W: Write>(&self, out: &mut OutputSerializer<W>) -> Result<()> {
                let ($($name,)+) = self;
                $($name.encode(out)?;)+
                Ok(())
            }
            fn decode<R: Read>(input: &mut InputSerializer<R>) -> Result<Self> {
                Ok(($($name::decode(input)?,)+))
            }
        }
    };
}

tuple_impls! { A }
tuple_impls! { A B }
tuple_impls! { A B C }
tuple_impls! { A B C D }
tuple_impls! { A B C D E }
tuple_impls! { A B C D E F }
tuple_impls! { A B C D E F G }
tuple_impls! { A B C D E F G H }
