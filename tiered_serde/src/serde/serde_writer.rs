use crate::serde::ContainerLen;
use crate::{Plain, Result, Serializer, SessionConfig, Trivial};
use std::io::{BufWriter, Write};
use std::mem;
use tracing::{debug, trace};

/// A session that encodes values into a sink.
///
/// The session owns its sink, buffered, until [`Self::finish()`] hands it
/// back. Dropping the session instead still flushes the buffer, but a failure
/// to flush then goes unreported.
pub struct OutputSerializer<W: Write> {
    w: BufWriter<W>,
    w_len: usize,
}

impl<W: Write> OutputSerializer<W> {
    pub fn new(w: W) -> Self {
        Self::with_config(w, SessionConfig::default())
    }

    pub fn with_config(w: W, config: SessionConfig) -> Self {
        trace!(buffer_capacity = config.buffer_capacity, "Opening output session");
        Self {
            w: BufWriter::with_capacity(config.buffer_capacity, w),
            w_len: 0,
        }
    }

    /// Total bytes written so far, buffered or not.
    pub fn bytes_written(&self) -> usize {
        self.w_len
    }

    pub fn write_bytes(&mut self, buf: &[u8]) -> Result<()> {
        self.w.write_all(buf)?;
        self.w_len += buf.len();
        Ok(())
    }

    pub fn write_len(&mut self, count: usize) -> Result<()> {
        trace!(count, "Writing container length");
        self.write_bytes(&ContainerLen::from_count(count).to_ne_bytes())
    }

    /// Writes the value's in-memory bytes, in host byte order.
    pub fn write_trivial<T: Trivial>(&mut self, item: &T) -> Result<()> {
        self.write_bytes(bytemuck::bytes_of(item))
    }

    /// Writes the items' in-memory bytes in one contiguous write.
    pub fn write_trivial_slice<T: Trivial>(&mut self, items: &[T]) -> Result<()> {
        if mem::size_of::<T>() == 0 {
            return Ok(());
        }
        let buf: &[u8] = bytemuck::cast_slice(items);
        debug!(count = items.len(), bytes = buf.len(), "Bulk write");
        self.write_bytes(buf)
    }

    /// Flushes and releases the sink.
    pub fn finish(self) -> Result<W> {
        trace!(w_len = self.w_len, "Closing output session");
        let w = self.w.into_inner().map_err(|e| e.into_error())?;
        Ok(w)
    }
}

impl<W: Write> Serializer for OutputSerializer<W> {
    fn plain<T: Plain>(&mut self, item: &mut T) -> Result<()> {
        item.encode(self)
    }
}
