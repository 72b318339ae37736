use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Result;
use bytes::Bytes;
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub trait Packable {
    fn serialize(&self) -> Result<Bytes>;
}

pub trait Unpackable {
    fn deserialize(reader: impl BufRead) -> Result<Self>
    where
        Self: Sized;
}

/// A record that lives in the object store
///
/// Unlike the serialized record, the identifier is derived from the object's
/// canonical content only, so each type defines how it is hashed.
pub trait Object: Packable {
    fn object_type(&self) -> ObjectType;

    fn object_id(&self) -> Result<ObjectId>;

    /// Location relative to the store root; each type has its own key space
    fn object_path(&self) -> Result<PathBuf> {
        Ok(PathBuf::from(self.object_type().dir_name()).join(self.object_id()?.to_path()))
    }
}

/// Prefix `payload` with the `<type> <size>\0` record header
pub fn frame_record(object_type: ObjectType, payload: &[u8]) -> Result<Bytes> {
    let mut record = Vec::with_capacity(payload.len() + 16);
    let header = format!("{} {}\0", object_type.as_str(), payload.len());
    record.write_all(header.as_bytes())?;
    record.write_all(payload)?;

    Ok(Bytes::from(record))
}
