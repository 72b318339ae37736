use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::{Commit, SlimCommit};
use crate::artifacts::objects::object::{Object, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::BoughError;
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use std::io::{BufRead, Cursor, Read, Write};
use std::path::{Path, PathBuf};

/// Append-only content-addressed object store
#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    pub fn contains(&self, object_type: ObjectType, object_id: &ObjectId) -> bool {
        self.record_path(object_type, object_id).is_file()
    }

    /// Store an object unless an object of the same type and ID already exists
    pub fn store(&self, object: &impl Object) -> anyhow::Result<ObjectId> {
        let object_id = object.object_id()?;
        let object_path = self.path.join(object.object_path()?);

        if object_path.exists() {
            tracing::trace!(%object_id, "object already stored");
            return Ok(object_id);
        }

        std::fs::create_dir_all(
            object_path
                .parent()
                .context(format!("Invalid object path {}", object_path.display()))?,
        )
        .context(format!(
            "Unable to create object directory {}",
            object_path.display()
        ))?;

        self.write_object(object_path, object.serialize()?)?;
        tracing::debug!(%object_id, object_type = %object.object_type(), "stored object");

        Ok(object_id)
    }

    pub fn load_blob(&self, object_id: &ObjectId) -> crate::Result<Blob> {
        if !self.contains(ObjectType::Blob, object_id) {
            return Err(BoughError::MissingObject(object_id.clone()));
        }

        let object_reader = self.parse_object_as_bytes(ObjectType::Blob, object_id)?;
        Ok(Blob::deserialize(object_reader)?)
    }

    /// Load a commit and verify that its content still hashes to `object_id`
    pub fn load_commit(&self, object_id: &ObjectId) -> crate::Result<Commit> {
        if !self.contains(ObjectType::Commit, object_id) {
            return Err(BoughError::NoSuchCommit(object_id.to_string()));
        }

        let object_reader = self.parse_object_as_bytes(ObjectType::Commit, object_id)?;

        let commit = Commit::deserialize(object_reader)
            .with_context(|| format!("Unable to parse commit {object_id}"))?;

        let recomputed = commit.object_id()?;
        if &recomputed != object_id {
            return Err(anyhow::anyhow!(
                "Corrupt commit object {object_id}: content hashes to {recomputed}"
            )
            .into());
        }

        Ok(commit)
    }

    pub fn load_slim_commit(&self, object_id: &ObjectId) -> crate::Result<SlimCommit> {
        Ok(self.load_commit(object_id)?.to_slim(object_id.clone()))
    }

    /// Every commit in the store, in object-path order
    pub fn all_commits(&self) -> crate::Result<Vec<(ObjectId, Commit)>> {
        self.find_objects_by_prefix(ObjectType::Commit, "")?
            .into_iter()
            .map(|object_id| -> crate::Result<(ObjectId, Commit)> {
                let commit = self.load_commit(&object_id)?;
                Ok((object_id, commit))
            })
            .collect()
    }

    /// Resolve a possibly abbreviated commit ID to the single commit it names
    pub fn resolve_commit_prefix(&self, prefix: &str) -> crate::Result<ObjectId> {
        if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(BoughError::NoSuchCommit(prefix.to_string()));
        }

        let mut candidates =
            self.find_objects_by_prefix(ObjectType::Commit, &prefix.to_ascii_lowercase())?;

        match candidates.len() {
            0 => Err(BoughError::NoSuchCommit(prefix.to_string())),
            1 => Ok(candidates.remove(0)),
            _ => Err(BoughError::AmbiguousCommit {
                prefix: prefix.to_string(),
                candidates: candidates.iter().map(ObjectId::to_string).collect(),
            }),
        }
    }

    /// Find all objects of one type whose ID starts with the given prefix.
    ///
    /// For prefixes of two or more characters only the matching fan-out
    /// directory is read; shorter prefixes scan every directory. Temporary
    /// files left behind by interrupted writes are skipped.
    pub fn find_objects_by_prefix(
        &self,
        object_type: ObjectType,
        prefix: &str,
    ) -> anyhow::Result<Vec<ObjectId>> {
        let type_path = self.path.join(object_type.dir_name());
        let mut matches = Vec::new();

        let dir_names = if prefix.len() >= 2 {
            vec![prefix[..2].to_string()]
        } else {
            (0..=255u8).map(|i| format!("{i:02x}")).collect()
        };

        for dir_name in dir_names {
            let dir_path = type_path.join(&dir_name);
            if !dir_path.is_dir() {
                continue;
            }

            for entry in std::fs::read_dir(&dir_path)
                .with_context(|| format!("Unable to read object directory {}", dir_path.display()))?
            {
                let file_name = entry?.file_name();
                let full_oid = format!("{}{}", dir_name, file_name.to_string_lossy());

                if full_oid.starts_with(prefix)
                    && let Ok(oid) = ObjectId::try_parse(full_oid)
                {
                    matches.push(oid);
                }
            }
        }

        matches.sort();
        Ok(matches)
    }

    fn record_path(&self, object_type: ObjectType, object_id: &ObjectId) -> PathBuf {
        self.path
            .join(object_type.dir_name())
            .join(object_id.to_path())
    }

    /// Open a record and check its header against the directory it was read from
    fn parse_object_as_bytes(
        &self,
        expected_type: ObjectType,
        object_id: &ObjectId,
    ) -> anyhow::Result<impl BufRead + use<>> {
        let object_content = self.read_object(self.record_path(expected_type, object_id))?;
        let mut object_reader = Cursor::new(object_content);

        let (object_type, size) = ObjectType::read_header(&mut object_reader)?;
        if object_type != expected_type {
            anyhow::bail!("Object {object_id} is a {object_type}, expected a {expected_type}");
        }

        let remaining = object_reader.get_ref().len() - object_reader.position() as usize;
        if remaining != size {
            anyhow::bail!("Object {object_id} declares {size} bytes but holds {remaining}");
        }

        Ok(object_reader)
    }

    fn read_object(&self, object_path: PathBuf) -> anyhow::Result<Bytes> {
        let object_content = std::fs::read(&object_path).context(format!(
            "Unable to read object file {}",
            object_path.display()
        ))?;

        Self::decompress(object_content.into())
    }

    fn write_object(&self, object_path: PathBuf, object_content: Bytes) -> anyhow::Result<()> {
        let object_dir = object_path
            .parent()
            .context(format!("Invalid object path {}", object_path.display()))?;
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let object_content = Self::compress(object_content)?;

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_object_path)
            .context(format!(
                "Unable to open object file {}",
                temp_object_path.display()
            ))?;

        file.write_all(&object_content).context(format!(
            "Unable to write object file {}",
            temp_object_path.display()
        ))?;

        // a reader never observes a half-written object
        std::fs::rename(&temp_object_path, &object_path).context(format!(
            "Unable to rename object file to {}",
            object_path.display()
        ))?;

        Ok(())
    }

    fn compress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder
            .write_all(&data)
            .context("Unable to compress object content")?;

        encoder
            .finish()
            .map(|compressed_content| compressed_content.into())
            .context("Unable to finish compressing object content")
    }

    fn decompress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .context("Unable to decompress object content")?;

        Ok(decompressed_content.into())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}
