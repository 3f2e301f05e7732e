use crate::containers::Container;
use crate::serde::{OutputSerializer, PREALLOC_LIMIT};
use crate::{Plain, Result};
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};
use std::io::Write;

/* Entries are written exactly as a `(K, V)` tuple would be. */

impl<K: Plain + Ord, V: Plain> Container for BTreeMap<K, V> {
    type Elem = (K, V);

    fn count(&self) -> usize {
        self.len()
    }
    fn encode_elems<W: Write>(&self, out: &mut OutputSerializer<W>) -> Result<()> {
        for (k, v) in self {
            k.encode(out)?;
            v.encode(out)?;
        }
        Ok(())
    }

    fn reset(&mut self, _count: usize) {
        self.clear();
    }
    fn insert(&mut self, (k, v): (K, V)) {
        BTreeMap::insert(self, k, v);
    }
}

impl<K, V, S> Container for HashMap<K, V, S>
where
    K: Plain + Eq + Hash,
    V: Plain,
    S: BuildHasher + Default,
{
    type Elem = (K, V);

    fn count(&self) -> usize {
        self.len()
    }
    fn encode_elems<W: Write>(&self, out: &mut OutputSerializer<W>) -> Result<()> {
        for (k, v) in self {
            k.encode(out)?;
            v.encode(out)?;
        }
        Ok(())
    }

    fn reset(&mut self, count: usize) {
        self.clear();
        self.reserve(count.min(PREALLOC_LIMIT));
    }
    fn insert(&mut self, (k, v): (K, V)) {
        HashMap::insert(self, k, v);
    }
}
