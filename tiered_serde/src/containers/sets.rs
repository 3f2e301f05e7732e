use crate::containers::Container;
use crate::serde::{OutputSerializer, PREALLOC_LIMIT};
use crate::{Plain, Result};
use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};
use std::io::Write;

impl<T: Plain + Ord> Container for BTreeSet<T> {
    type Elem = T;

    fn count(&self) -> usize {
        self.len()
    }
    fn encode_elems<W: Write>(&self, out: &mut OutputSerializer<W>) -> Result<()> {
        for elem in self {
            elem.encode(out)?;
        }
        Ok(())
    }

    fn reset(&mut self, _count: usize) {
        self.clear();
    }
    fn insert(&mut self, elem: T) {
        BTreeSet::insert(self, elem);
    }
}

impl<T, S> Container for HashSet<T, S>
where
    T: Plain + Eq + Hash,
    S: BuildHasher + Default,
{
    type Elem = T;

    fn count(&self) -> usize {
        self.len()
    }
    fn encode_elems<W: Write>(&self, out: &mut OutputSerializer<W>) -> Result<()> {
        for elem in self {
            elem.encode(out)?;
        }
        Ok(())
    }

    fn reset(&mut self, count: usize) {
        self.clear();
        self.reserve(count.min(PREALLOC_LIMIT));
    }
    fn insert(&mut self, elem: T) {
        HashSet::insert(self, elem);
    }
}
