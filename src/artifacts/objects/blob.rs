//! Blob object
//!
//! Blobs store whole-file content. They carry no name: two files with the same
//! bytes share one blob, and the path lives in the commit snapshot.
//!
//! ## Format
//!
//! On disk: `blob <size>\0<content>`
//! Identifier: SHA-1 of the raw content bytes (the header is not hashed)

use crate::artifacts::objects::object::{Object, Packable, Unpackable, frame_record};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use bytes::Bytes;
use derive_new::new;
use std::io::BufRead;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    content: Bytes,
}

impl Blob {
    pub fn content(&self) -> &Bytes {
        &self.content
    }

    pub fn into_content(self) -> Bytes {
        self.content
    }
}

impl Packable for Blob {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        frame_record(self.object_type(), &self.content)
    }
}

impl Unpackable for Blob {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        // the header has already been read
        let content = reader
            .bytes()
            .collect::<Result<Vec<u8>, std::io::Error>>()?;

        Ok(Self::new(content.into()))
    }
}

impl Object for Blob {
    fn object_type(&self) -> ObjectType {
        ObjectType::Blob
    }

    fn object_id(&self) -> anyhow::Result<ObjectId> {
        Ok(ObjectId::hash(&self.content))
    }
}
