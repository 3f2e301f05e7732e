use anyhow::Result;
use std::fs::{self, File};
use std::path::PathBuf;
use std::{env, process};
use tiered_serde::{InputSerializer, OutputSerializer, Serializable, Serializer};

/// A scratch file, removed on drop.
pub struct TempFile(pub PathBuf);

impl TempFile {
    pub fn new(name: &str) -> Self {
        let path = env::temp_dir().join(format!("tiered_serde_{}_{name}.tmp", process::id()));
        Self(path)
    }
}
impl Drop for TempFile {
    fn drop(&mut self) {
        fs::remove_file(&self.0).ok();
    }
}

/// Writes `item` to `file` in one session, then reads it back into `dest`
/// in another.
pub fn round_trip_via_file<T: Serializable>(file: &TempFile, item: &mut T, dest: &mut T) -> Result<()> {
    {
        let mut out = OutputSerializer::new(File::create(&file.0)?);
        out.serialize(item)?;
    }
    {
        let mut input = InputSerializer::new(File::open(&file.0)?);
        input.serialize(dest)?;
    }
    Ok(())
}
