use crate::serde::{InputSerializer, OutputSerializer};
use crate::{Error, Plain, Result, Tier};
use std::any;
use std::io::{Read, Write};

/// Encoded like a `Vec<u8>` of its UTF-8 bytes.
impl Plain for String {
    const TIER: Tier = Tier::Simple;

    fn encode<W: Write>(&self, out: &mut OutputSerializer<W>) -> Result<()> {
        out.write_len(self.len())?;
        out.write_bytes(self.as_bytes())
    }

    fn decode<R: Read>(input: &mut InputSerializer<R>) -> Result<Self> {
        let len = input.read_len()?;
        let buf = input.read_bytes(len)?;
        String::from_utf8(buf).map_err(|_| Error::InvalidValue {
            type_name: any::type_name::<Self>(),
        })
    }
}
