use crate::containers::Container;
use crate::serde::{InputSerializer, OutputSerializer, PREALLOC_LIMIT};
use crate::{Plain, Result};
use std::collections::{LinkedList, VecDeque};
use std::io::{Read, Write};

impl<T: Plain> Container for Vec<T> {
    type Elem = T;
    const BULK: bool = true;

    fn count(&self) -> usize {
        self.len()
    }
    fn encode_elems<W: Write>(&self, out: &mut OutputSerializer<W>) -> Result<()> {
        T::encode_slice(self, out)
    }

    fn reset(&mut self, count: usize) {
        self.clear();
        self.reserve(count.min(PREALLOC_LIMIT));
    }
    fn insert(&mut self, elem: T) {
        self.push(elem);
    }
    fn decode_elems<R: Read>(&mut self, count: usize, input: &mut InputSerializer<R>) -> Result<()> {
        *self = T::decode_many(count, input)?;
        Ok(())
    }
}

impl<T: Plain> Container for VecDeque<T> {
    type Elem = T;
    const BULK: bool = true;

    fn count(&self) -> usize {
        self.len()
    }
    fn encode_elems<W: Write>(&self, out: &mut OutputSerializer<W>) -> Result<()> {
        let (front, back) = self.as_slices();
        T::encode_slice(front, out)?;
        T::encode_slice(back, out)
    }

    fn reset(&mut self, count: usize) {
        self.clear();
        self.reserve(count.min(PREALLOC_LIMIT));
    }
    fn insert(&mut self, elem: T) {
        self.push_back(elem);
    }
    fn decode_elems<R: Read>(&mut self, count: usize, input: &mut InputSerializer<R>) -> Result<()> {
        *self = VecDeque::from(T::decode_many(count, input)?);
        Ok(())
    }
}

impl<T: Plain> Container for LinkedList<T> {
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
        self.push_back(elem);
    }
}
