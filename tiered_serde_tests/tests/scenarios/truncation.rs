use anyhow::Result;
use std::collections::{BTreeMap, LinkedList};
use tiered_serde::{from_bytes, from_bytes_into, to_bytes, Error, InputSerializer, Serializer};

fn assert_truncated<T: tiered_serde::Plain + std::fmt::Debug>(bytes: &[u8]) {
    for cut in 0..bytes.len() {
        let res = from_bytes::<T>(&bytes[..cut]);
        assert!(
            matches!(res, Err(Error::TruncatedStream { .. })),
            "cut at {cut} of {}: {res:?}",
            bytes.len()
        );
    }
}

#[test]
fn truncated_simple_container() -> Result<()> {
    let bytes = to_bytes(&mut vec![1u32, 2, 3])?;
    assert_truncated::<Vec<u32>>(&bytes);
    Ok(())
}

#[test]
fn truncated_direct_containers() -> Result<()> {
    let bytes = to_bytes(&mut LinkedList::from([(1u8, 2u16), (3, 4)]))?;
    assert_truncated::<LinkedList<(u8, u16)>>(&bytes);

    let bytes = to_bytes(&mut BTreeMap::from([
        (String::from("a"), vec![1i64]),
        (String::from("bc"), vec![]),
    ]))?;
    assert_truncated::<BTreeMap<String, Vec<i64>>>(&bytes);
    Ok(())
}

#[test]
fn truncated_scalar() -> Result<()> {
    let mut input = InputSerializer::new(&[1u8, 2, 3][..]);
    let mut dest = 0u32;
    let res = input.serialize(&mut dest);
    assert!(
        matches!(
            res,
            Err(Error::TruncatedStream {
                needed: 4,
                available: 3
            })
        ),
        "{res:?}"
    );
    assert!(res.unwrap_err().is_truncation());
    Ok(())
}

#[test]
fn trailing_bytes_are_reported() -> Result<()> {
    let mut bytes = to_bytes(&mut vec![7u8])?;
    bytes.extend_from_slice(&[0, 0]);

    let res = from_bytes::<Vec<u8>>(&bytes);
    assert!(matches!(res, Err(Error::TrailingBytes(2))), "{res:?}");

    let mut dest: Vec<u8> = vec![];
    let res = from_bytes_into(&bytes, &mut dest);
    assert!(matches!(res, Err(Error::TrailingBytes(2))), "{res:?}");
    Ok(())
}

#[test]
fn session_reads_consecutive_values_and_stops() -> Result<()> {
    let mut bytes = to_bytes(&mut 5u16)?;
    bytes.extend(to_bytes(&mut String::from("tail"))?);

    let mut input = InputSerializer::new(&bytes[..]);
    let mut num = 0u16;
    let mut text = String::new();
    input.serialize(&mut num)?;
    input.serialize(&mut text)?;
    assert_eq!((5, "tail"), (num, text.as_str()));
    assert_eq!(bytes.len(), input.bytes_read());

    let res = input.serialize(&mut num);
    assert!(
        matches!(res, Err(Error::TruncatedStream { available: 0, .. })),
        "{res:?}"
    );
    Ok(())
}
