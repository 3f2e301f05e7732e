use crate::{Error, InputSerializer, OutputSerializer, Plain, Result, Serializable, Serializer};

/// Encodes one value into a fresh buffer.
pub fn to_bytes<T: Serializable>(item: &mut T) -> Result<Vec<u8>> {
    let mut out = OutputSerializer::new(vec![]);
    out.serialize(item)?;
    out.finish()
}

/// Decodes one value into `item`, which must consume all of `buf`.
pub fn from_bytes_into<T: Serializable>(buf: &[u8], item: &mut T) -> Result<()> {
    let mut input = InputSerializer::new(buf);
    input.serialize(item)?;
    ensure_consumed(buf, &input)
}

/// Decodes one [`Plain`] value, which must consume all of `buf`.
pub fn from_bytes<T: Plain>(buf: &[u8]) -> Result<T> {
    let mut input = InputSerializer::new(buf);
    let moi = T::decode(&mut input)?;
    ensure_consumed(buf, &input)?;
    Ok(moi)
}

fn ensure_consumed(buf: &[u8], input: &InputSerializer<&[u8]>) -> Result<()> {
    match buf.len() - input.bytes_read() {
        0 => Ok(()),
        trailing => Err(Error::TrailingBytes(trailing)),
    }
}
