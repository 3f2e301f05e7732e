use crate::serde::{ContainerLen, PREALLOC_LIMIT};
use crate::{Error, Plain, Result, Serializer, SessionConfig, Trivial};
use bytemuck::checked;
use std::any;
use std::io::{BufReader, ErrorKind, Read};
use std::mem;
use tracing::{debug, trace, warn};

/// Trivial values up to this size are read without touching the heap.
const STACK_SCRATCH_LEN: usize = 64;

/// A session that decodes values from a source, in the order they were written.
///
/// After a failed decode the destination is unspecified and must be discarded.
pub struct InputSerializer<R: Read> {
    r: BufReader<R>,
    r_len: usize,
    config: SessionConfig,
}

impl<R: Read> InputSerializer<R> {
    pub fn new(r: R) -> Self {
        Self::with_config(r, SessionConfig::default())
    }

    pub fn with_config(r: R, config: SessionConfig) -> Self {
        trace!(?config, "Opening input session");
        Self {
            r: BufReader::with_capacity(config.buffer_capacity, r),
            r_len: 0,
            config,
        }
    }

    /// Total bytes consumed so far.
    pub fn bytes_read(&self) -> usize {
        self.r_len
    }

    /// Releases the source. Bytes buffered but not yet consumed are dropped.
    pub fn into_inner(self) -> R {
        trace!(r_len = self.r_len, "Closing input session");
        self.r.into_inner()
    }

    /// Fills `buf` completely, or fails with [`Error::TruncatedStream`].
    pub fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.r.read(&mut buf[filled..]) {
                Ok(0) => {
                    self.r_len += filled;
                    return Err(Error::TruncatedStream {
                        needed: buf.len(),
                        available: filled,
                    });
                }
                Ok(delta) => filled += delta,
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                    self.r_len += filled;
                    return Err(Error::TruncatedStream {
                        needed: buf.len(),
                        available: filled,
                    });
                }
                Err(e) => return Err(Error::Io(e)),
            }
        }
        self.r_len += filled;
        Ok(())
    }

    /// Reads exactly `len` bytes, growing the buffer only as bytes arrive.
    pub fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(len.min(PREALLOC_LIMIT));
        let res = (&mut self.r).take(len as u64).read_to_end(&mut buf);
        let available = buf.len();
        self.r_len += available;
        match res {
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {}
            Err(e) => return Err(Error::Io(e)),
            Ok(_) => {}
        }
        if available < len {
            return Err(Error::TruncatedStream {
                needed: len,
                available,
            });
        }
        Ok(buf)
    }

    /// Reads a container's count, rejecting counts above the configured bound.
    pub fn read_len(&mut self) -> Result<usize> {
        let mut buf = [0u8; ContainerLen::SIZE];
        self.read_exact(&mut buf)?;
        let count = *ContainerLen::from_ne_bytes(buf);
        trace!(count, "Read container length");

        let limit = self.config.max_container_len.unwrap_or(usize::MAX);
        match usize::try_from(count) {
            Ok(count) if count <= limit => Ok(count),
            _ => {
                warn!(count, limit, "Rejecting implausible container length");
                Err(Error::SizeImplausible {
                    count,
                    limit: limit as u64,
                })
            }
        }
    }

    pub fn read_trivial<T: Trivial>(&mut self) -> Result<T> {
        let size = mem::size_of::<T>();
        if size <= STACK_SCRATCH_LEN {
            let mut scratch = [0u8; STACK_SCRATCH_LEN];
            let buf = &mut scratch[..size];
            self.read_exact(buf)?;
            checked_from_bytes(buf)
        } else {
            let buf = self.read_bytes(size)?;
            checked_from_bytes(&buf)
        }
    }

    /// Reads `count` items' bytes in one bulk read, then validates each item.
    pub fn read_trivial_vec<T: Trivial>(&mut self, count: usize) -> Result<Vec<T>> {
        let size = mem::size_of::<T>();
        if size == 0 {
            return (0..count).map(|_| checked_from_bytes::<T>(&[])).collect();
        }

        let len = count.checked_mul(size).ok_or(Error::SizeImplausible {
            count: count as u64,
            limit: (usize::MAX / size) as u64,
        })?;
        debug!(count, bytes = len, "Bulk read");
        let buf = self.read_bytes(len)?;
        buf.chunks_exact(size).map(checked_from_bytes::<T>).collect()
    }
}

fn checked_from_bytes<T: Trivial>(buf: &[u8]) -> Result<T> {
    checked::try_pod_read_unaligned(buf).map_err(|_| Error::InvalidValue {
        type_name: any::type_name::<T>(),
    })
}

impl<R: Read> Serializer for InputSerializer<R> {
    fn plain<T: Plain>(&mut self, item: &mut T) -> Result<()> {
        *item = T::decode(self)?;
        Ok(())
    }
}
