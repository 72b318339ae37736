//! Index entry representation
//!
//! Each entry records one pending change: a path staged for addition with the
//! blob it should point to, or a path staged for removal with the blob HEAD
//! tracked for it.

use crate::artifacts::objects::object::{Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::{Context, anyhow};
use byteorder::{ByteOrder, ReadBytesExt, WriteBytesExt};
use bytes::Bytes;
use derive_new::new;
use std::io::{BufRead, Write};

/// Size of the stage byte, the binary blob ID and the path length
pub const ENTRY_FIXED_SIZE: usize = 1 + 20 + 2;

/// Longest path an entry can carry
const MAX_PATH_SIZE: usize = u16::MAX as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Added,
    Removed,
}

impl Stage {
    fn as_byte(self) -> u8 {
        match self {
            Stage::Added => 0,
            Stage::Removed => 1,
        }
    }
}

impl TryFrom<u8> for Stage {
    type Error = anyhow::Error;

    fn try_from(value: u8) -> anyhow::Result<Self> {
        match value {
            0 => Ok(Stage::Added),
            1 => Ok(Stage::Removed),
            _ => Err(anyhow!("Invalid index entry stage {value}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct IndexEntry {
    pub name: String,
    pub oid: ObjectId,
    pub stage: Stage,
}

impl IndexEntry {
    /// Length of the path that follows a fixed-size entry prefix
    pub fn path_length(fixed_part: &[u8]) -> anyhow::Result<usize> {
        if fixed_part.len() < ENTRY_FIXED_SIZE {
            return Err(anyhow!("Truncated index entry"));
        }

        Ok(byteorder::NetworkEndian::read_u16(&fixed_part[ENTRY_FIXED_SIZE - 2..ENTRY_FIXED_SIZE]) as usize)
    }
}

impl Packable for IndexEntry {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        if self.name.len() > MAX_PATH_SIZE {
            return Err(anyhow!("Path too long for the index: {}", self.name));
        }

        let mut bytes = Vec::with_capacity(ENTRY_FIXED_SIZE + self.name.len());
        bytes.write_u8(self.stage.as_byte())?;
        self.oid.write_h40_to(&mut bytes)?;
        bytes.write_u16::<byteorder::NetworkEndian>(self.name.len() as u16)?;
        bytes.write_all(self.name.as_bytes())?;

        Ok(Bytes::from(bytes))
    }
}

impl Unpackable for IndexEntry {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let stage = Stage::try_from(reader.read_u8()?)?;
        let oid = ObjectId::read_h40_from(&mut reader)?;
        let name_length = reader.read_u16::<byteorder::NetworkEndian>()? as usize;

        let mut name = vec![0u8; name_length];
        reader
            .read_exact(&mut name)
            .context("Truncated index entry path")?;
        let name = String::from_utf8(name).context("Index entry path is not UTF-8")?;

        Ok(IndexEntry::new(name, oid, stage))
    }
}
