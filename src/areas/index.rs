//! Staging index
//!
//! The index holds the changes pending for the next commit: paths staged for
//! addition (with the blob they should point to) and paths staged for removal
//! (with the blob HEAD tracked for them). It is persisted as a checksummed
//! binary file and is empty after every commit, checkout, reset and merge.

use crate::artifacts::index::checksum::Checksum;
use crate::artifacts::index::index_entry::{ENTRY_FIXED_SIZE, IndexEntry, Stage};
use crate::artifacts::index::index_header::IndexHeader;
use crate::artifacts::index::{HEADER_SIZE, SIGNATURE, VERSION};
use crate::artifacts::objects::commit::Snapshot;
use crate::artifacts::objects::object::{Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::anyhow;
use std::ops::DerefMut;
use std::path::Path;

/// Effect of staging a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageOutcome {
    /// The content differs from HEAD and is now pending
    Staged,
    /// The content matches HEAD and a pending entry for the path was dropped
    Reverted,
    /// The content matches HEAD and nothing was pending
    Unchanged,
}

impl StageOutcome {
    pub fn changed(&self) -> bool {
        !matches!(self, StageOutcome::Unchanged)
    }
}

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (`.bough/index`)
    path: Box<Path>,
    added: Snapshot,
    removed: Snapshot,
    /// Set whenever the in-memory state diverges from the file
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            added: Snapshot::new(),
            removed: Snapshot::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn added(&self) -> &Snapshot {
        &self.added
    }

    pub fn removed(&self) -> &Snapshot {
        &self.removed
    }

    pub fn is_clean(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    pub fn has_changed(&self) -> bool {
        self.changed
    }

    /// Record `blob_id` as the pending content of `path`
    ///
    /// `head_tracked` is the blob HEAD's snapshot holds for the path. Staging
    /// content identical to it drops any pending entry instead.
    pub fn stage(
        &mut self,
        path: &str,
        blob_id: ObjectId,
        head_tracked: Option<&ObjectId>,
    ) -> StageOutcome {
        if head_tracked == Some(&blob_id) {
            let had_added = self.added.remove(path).is_some();
            let had_removed = self.removed.remove(path).is_some();

            return if had_added || had_removed {
                self.changed = true;
                StageOutcome::Reverted
            } else {
                StageOutcome::Unchanged
            };
        }

        self.removed.remove(path);
        self.added.insert(path.to_string(), blob_id);
        self.changed = true;

        StageOutcome::Staged
    }

    /// Drop a pending addition, returning whether there was one
    pub fn unstage(&mut self, path: &str) -> bool {
        let dropped = self.added.remove(path).is_some();
        self.changed |= dropped;
        dropped
    }

    /// Stage `path` for removal with the blob HEAD tracks for it
    pub fn record_removal(&mut self, path: &str, head_blob_id: ObjectId) {
        self.added.remove(path);
        self.removed.insert(path.to_string(), head_blob_id);
        self.changed = true;
    }

    pub fn clear(&mut self) {
        if !self.is_clean() {
            self.changed = true;
        }
        self.added.clear();
        self.removed.clear();
    }

    /// Load the index from disk
    ///
    /// A missing or empty file is an empty index. Acquires a shared lock on
    /// the index file while reading and verifies the trailing checksum.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.added.clear();
        self.removed.clear();
        self.changed = false;

        if !self.path.exists() {
            return Ok(());
        }

        let mut index_file = std::fs::OpenOptions::new().read(true).open(self.path())?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Shared, 0, 1)?;

        if lock.deref_mut().metadata()?.len() == 0 {
            return Ok(());
        }

        let mut reader = Checksum::new(lock);
        let entries_count = Self::parse_header(&mut reader)?;
        self.parse_entries(entries_count, &mut reader)?;

        reader.verify()
    }

    fn parse_header(reader: &mut Checksum<'_>) -> anyhow::Result<u32> {
        let header_bytes = reader.read(HEADER_SIZE)?;
        let header = IndexHeader::deserialize(std::io::Cursor::new(header_bytes))?;

        if header.marker != SIGNATURE {
            return Err(anyhow!("Invalid index file signature"));
        }

        if header.version != VERSION {
            return Err(anyhow!(
                "Unsupported index file version: {}",
                header.version
            ));
        }

        Ok(header.entries_count)
    }

    fn parse_entries(&mut self, entries_count: u32, reader: &mut Checksum<'_>) -> anyhow::Result<()> {
        for _ in 0..entries_count {
            let fixed_part = reader.read(ENTRY_FIXED_SIZE)?;
            let path_part = reader.read(IndexEntry::path_length(&fixed_part)?)?;

            let entry_bytes = [fixed_part.as_ref(), path_part.as_ref()].concat();
            let entry = IndexEntry::deserialize(std::io::Cursor::new(entry_bytes))?;

            match entry.stage {
                Stage::Added => self.added.insert(entry.name, entry.oid),
                Stage::Removed => self.removed.insert(entry.name, entry.oid),
            };
        }

        Ok(())
    }

    fn entries(&self) -> impl Iterator<Item = IndexEntry> + '_ {
        let added = self
            .added
            .iter()
            .map(|(name, oid)| IndexEntry::new(name.clone(), oid.clone(), Stage::Added));
        let removed = self
            .removed
            .iter()
            .map(|(name, oid)| IndexEntry::new(name.clone(), oid.clone(), Stage::Removed));

        added.chain(removed)
    }

    /// Persist the index, holding an exclusive lock on the file
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        let mut index_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(self.path())?;
        let lock = file_guard::lock(&mut index_file, file_guard::Lock::Exclusive, 0, 1)?;

        let mut writer = Checksum::new(lock);

        let entries_count = (self.added.len() + self.removed.len()) as u32;
        let header = IndexHeader {
            entries_count,
            ..IndexHeader::empty()
        };
        writer.write(&header.serialize()?)?;

        for entry in self.entries() {
            writer.write(&entry.serialize()?)?;
        }

        writer.write_checksum()?;
        self.changed = false;

        Ok(())
    }
}
