use super::helpers::{round_trip_via_file, TempFile};
use anyhow::Result;
use bytemuck::{Pod, Zeroable};
use std::mem;
use tiered_serde::{classify, from_bytes_into, to_bytes, trivial, Serializable, Serializer, Tier};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Pod, Zeroable)]
#[repr(C)]
struct Xyz {
    x: i32,
    y: i32,
    z: i32,
}
trivial!(Xyz);

struct Tracked {
    serialized: Xyz,
    #[allow(dead_code)]
    unserialized: usize,
    hook_calls: usize,
}
impl Tracked {
    fn new(serialized: Xyz) -> Self {
        Self {
            serialized,
            unserialized: 0,
            hook_calls: 0,
        }
    }
}
impl Serializable for Tracked {
    fn serialize<S: Serializer>(&mut self, s: &mut S) -> tiered_serde::Result<()> {
        s.serialize(&mut self.serialized)?;
        self.hook_calls += 1;
        Ok(())
    }
}

/// Composes a `Tracked`, and has to declare its own hook regardless.
struct TrackedWithHistory {
    base: Tracked,
    history: Vec<i32>,
}
impl Serializable for TrackedWithHistory {
    fn serialize<S: Serializer>(&mut self, s: &mut S) -> tiered_serde::Result<()> {
        self.base.serialize(s)?;
        s.serialize(&mut self.history)
    }
}

#[test]
fn hand_written_hooks_are_custom() {
    assert_eq!(Tier::Trivial, classify::<Xyz>());
    assert_eq!(Tier::Custom, classify::<Tracked>());
    assert_eq!(Tier::Custom, classify::<TrackedWithHistory>());
}

#[test]
fn hook_runs_once_per_call_on_each_side() -> Result<()> {
    let file = TempFile::new("hook_runs_once");

    let mut output = Tracked::new(Xyz { x: 1, y: 1, z: 2 });
    let mut input = Tracked::new(Xyz { x: -1, y: -1, z: -1 });
    input.hook_calls = 16;

    round_trip_via_file(&file, &mut output, &mut input)?;

    assert_eq!(1, output.hook_calls);
    assert_eq!(17, input.hook_calls);
    assert_eq!(output.serialized, input.serialized);
    Ok(())
}

#[test]
fn hook_writes_only_the_fields_it_serializes() -> Result<()> {
    let mut output = Tracked::new(Xyz { x: 0, y: 1, z: 2 });
    output.unserialized = 1234;
    let bytes = to_bytes(&mut output)?;
    assert_eq!(mem::size_of::<Xyz>(), bytes.len());

    let mut input = Tracked::new(Xyz { x: -1, y: -1, z: -1 });
    input.unserialized = 4949;
    from_bytes_into(&bytes, &mut input)?;
    assert_eq!(output.serialized, input.serialized);
    Ok(())
}

#[test]
fn composed_hook_delegates_to_its_base() -> Result<()> {
    let file = TempFile::new("composed_hook");

    let mut output = TrackedWithHistory {
        base: Tracked::new(Xyz { x: 1, y: 1, z: 2 }),
        history: vec![3, 5, 8],
    };
    let mut input = TrackedWithHistory {
        base: Tracked::new(Xyz { x: 0, y: 0, z: 3 }),
        history: vec![1, 4, 1, 5, 9, 2, 6, 5, 3, 5],
    };

    round_trip_via_file(&file, &mut output, &mut input)?;

    assert_eq!(output.base.serialized, input.base.serialized);
    assert_eq!(output.history, input.history);
    assert_eq!(1, output.base.hook_calls);
    assert_eq!(1, input.base.hook_calls);
    Ok(())
}

/// Writes its fields back to front.
#[derive(PartialEq, Debug, Default)]
struct Reversed {
    first: u8,
    second: u32,
}
impl Serializable for Reversed {
    fn serialize<S: Serializer>(&mut self, s: &mut S) -> tiered_serde::Result<()> {
        s.serialize(&mut self.second)?;
        s.serialize(&mut self.first)
    }
}

#[test]
fn hook_chooses_the_field_order() -> Result<()> {
    let mut output = Reversed {
        first: 0xAB,
        second: 0x0102_0304,
    };
    let bytes = to_bytes(&mut output)?;

    let mut expected = 0x0102_0304u32.to_ne_bytes().to_vec();
    expected.push(0xAB);
    assert_eq!(expected, bytes);

    let mut input = Reversed::default();
    from_bytes_into(&bytes, &mut input)?;
    assert_eq!(output, input);
    Ok(())
}

/// A custom type nested in another custom type, next to plain members.
struct Envelope {
    header: Reversed,
    body: Vec<Tracked>,
}

impl Serializable for Envelope {
    fn serialize<S: Serializer>(&mut self, s: &mut S) -> tiered_serde::Result<()> {
        s.serialize(&mut self.header)?;
        // Custom elements are not containable; the hook writes the count itself.
        let mut count = self.body.len() as u64;
        s.serialize(&mut count)?;
        self.body
            .resize_with(count as usize, || Tracked::new(Xyz::zeroed()));
        for tracked in &mut self.body {
            s.serialize(tracked)?;
        }
        Ok(())
    }
}

#[test]
fn custom_types_nest_through_hooks() -> Result<()> {
    let mut output = Envelope {
        header: Reversed {
            first: 1,
            second: 2,
        },
        body: vec![
            Tracked::new(Xyz { x: 1, y: 2, z: 3 }),
            Tracked::new(Xyz { x: 4, y: 5, z: 6 }),
        ],
    };
    let bytes = to_bytes(&mut output)?;

    let mut input = Envelope {
        header: Reversed::default(),
        body: vec![],
    };
    from_bytes_into(&bytes, &mut input)?;

    assert_eq!(output.header, input.header);
    assert_eq!(2, input.body.len());
    for (out, inp) in output.body.iter().zip(&input.body) {
        assert_eq!(out.serialized, inp.serialized);
        assert_eq!(1, inp.hook_calls);
    }
    Ok(())
}
