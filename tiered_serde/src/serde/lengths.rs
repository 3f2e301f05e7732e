use derive_more::{Deref, From, Into};
use std::mem;

/// No more than this many elements are allocated ahead of decoding them.
pub const PREALLOC_LIMIT: usize = 4096;

/// The count prefixing every dynamic container.
#[derive(From, Into, Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct ContainerLen(u64);

impl ContainerLen {
    pub const SIZE: usize = mem::size_of::<u64>();

    pub fn from_count(count: usize) -> Self {
        // usize is never wider than u64 on supported targets.
        Self(count as u64)
    }

    pub fn to_ne_bytes(self) -> [u8; Self::SIZE] {
        self.0.to_ne_bytes()
    }
    pub fn from_ne_bytes(buf: [u8; Self::SIZE]) -> Self {
        Self(u64::from_ne_bytes(buf))
    }
}
