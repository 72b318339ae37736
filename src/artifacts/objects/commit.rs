//! Commit object
//!
//! Commits are immutable history nodes. Each one records:
//! - A full snapshot mapping path names to blob IDs
//! - The first parent (absent only for the synthetic root commit)
//! - The second parent, for merge commits
//! - A timestamp and a message
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! parent <parent-sha>
//! merge <second-parent-sha>
//! date <unix-seconds> <timezone>
//! blob <blob-sha> <path>
//!
//! <commit message>
//! ```
//!
//! ## Identity
//!
//! The commit ID is the SHA-1 of the second parent ID (or nothing), the
//! message, the human-readable timestamp and the canonical snapshot, in that
//! order. The snapshot is a `BTreeMap`, so its iteration order is the
//! lexicographic order of path names.

use crate::artifacts::objects::object::{Object, Packable, Unpackable, frame_record};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use chrono::{DateTime, FixedOffset, Utc};
use std::collections::BTreeMap;
use std::io::BufRead;

/// Path name to blob ID mapping tracked by a commit
pub type Snapshot = BTreeMap<String, ObjectId>;

pub const ROOT_COMMIT_MESSAGE: &str = "initial commit";

/// Environment variable overriding the wall clock for new commits
pub const COMMIT_DATE_ENV: &str = "BOUGH_COMMIT_DATE";

const READABLE_DATE_FORMAT: &str = "%a %b %-d %H:%M:%S %Y %z";

/// Parent links of a commit, enough to walk the graph
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SlimCommit {
    pub oid: ObjectId,
    /// First parent followed by the second parent, when present
    pub parents: Vec<ObjectId>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    parent: Option<ObjectId>,
    merge_parent: Option<ObjectId>,
    timestamp: DateTime<FixedOffset>,
    message: String,
    snapshot: Snapshot,
}

impl Commit {
    pub fn new(
        parent: Option<ObjectId>,
        merge_parent: Option<ObjectId>,
        timestamp: DateTime<FixedOffset>,
        message: String,
        snapshot: Snapshot,
    ) -> Self {
        Commit {
            parent,
            merge_parent,
            timestamp: truncate_to_seconds(timestamp),
            message,
            snapshot,
        }
    }

    /// The synthetic first commit every repository starts from
    pub fn root() -> Self {
        Commit::new(
            None,
            None,
            DateTime::<Utc>::UNIX_EPOCH.fixed_offset(),
            ROOT_COMMIT_MESSAGE.to_string(),
            Snapshot::new(),
        )
    }

    /// Build a child commit from a base snapshot and pending changes
    ///
    /// The new snapshot starts as a copy of `base`; every `added` entry
    /// overwrites, then every `removed` path is dropped.
    pub fn with_changes(
        message: String,
        base: &Snapshot,
        added: &Snapshot,
        removed: &Snapshot,
        parent: ObjectId,
        merge_parent: Option<ObjectId>,
        timestamp: DateTime<FixedOffset>,
    ) -> Self {
        let mut snapshot = base.clone();
        snapshot.extend(
            added
                .iter()
                .map(|(path, oid)| (path.clone(), oid.clone())),
        );
        for path in removed.keys() {
            snapshot.remove(path);
        }

        Commit::new(Some(parent), merge_parent, timestamp, message, snapshot)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn merge_parent(&self) -> Option<&ObjectId> {
        self.merge_parent.as_ref()
    }

    pub fn is_merge(&self) -> bool {
        self.merge_parent.is_some()
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn into_snapshot(self) -> Snapshot {
        self.snapshot
    }

    pub fn tracked(&self, path: &str) -> Option<&ObjectId> {
        self.snapshot.get(path)
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// Timestamp in the form "Thu Jan 1 00:00:00 1970 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp.format(READABLE_DATE_FORMAT).to_string()
    }

    pub fn to_slim(&self, oid: ObjectId) -> SlimCommit {
        SlimCommit {
            oid,
            parents: self
                .parent
                .iter()
                .chain(self.merge_parent.iter())
                .cloned()
                .collect(),
        }
    }

    /// Timestamp for a new commit: `BOUGH_COMMIT_DATE` when set, otherwise now
    pub fn load_timestamp_from_env() -> anyhow::Result<DateTime<FixedOffset>> {
        match std::env::var(COMMIT_DATE_ENV) {
            Ok(date_str) => chrono::DateTime::parse_from_rfc2822(&date_str)
                .or_else(|_| chrono::DateTime::parse_from_str(&date_str, "%Y-%m-%d %H:%M:%S %z"))
                .with_context(|| format!("{COMMIT_DATE_ENV} is not a valid date: {date_str}")),
            Err(_) => Ok(chrono::Local::now().fixed_offset()),
        }
    }

    fn canonical_snapshot(&self) -> Vec<u8> {
        let mut canonical = Vec::new();
        for (path, oid) in &self.snapshot {
            canonical.extend_from_slice(path.as_bytes());
            canonical.push(0);
            canonical.extend_from_slice(oid.as_ref().as_bytes());
            canonical.push(b'\n');
        }
        canonical
    }
}

fn truncate_to_seconds(timestamp: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    DateTime::from_timestamp(timestamp.timestamp(), 0)
        .map(|utc| utc.with_timezone(timestamp.offset()))
        .unwrap_or(timestamp)
}

/// Parse a `+hhmm` / `-hhmm` timezone offset
fn parse_offset(raw: &str) -> anyhow::Result<FixedOffset> {
    let (sign, digits) = match raw.split_at_checked(1) {
        Some(("+", digits)) => (1, digits),
        Some(("-", digits)) => (-1, digits),
        _ => anyhow::bail!("Invalid timezone offset: {raw}"),
    };

    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        anyhow::bail!("Invalid timezone offset: {raw}");
    }

    let hours: i32 = digits[..2].parse()?;
    let minutes: i32 = digits[2..].parse()?;

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
        .with_context(|| format!("Timezone offset out of range: {raw}"))
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut lines = vec![];

        if let Some(parent) = &self.parent {
            lines.push(format!("parent {parent}"));
        }
        if let Some(merge_parent) = &self.merge_parent {
            lines.push(format!("merge {merge_parent}"));
        }
        lines.push(format!(
            "date {} {}",
            self.timestamp.timestamp(),
            self.timestamp.format("%z")
        ));
        for (path, oid) in &self.snapshot {
            lines.push(format!("blob {oid} {path}"));
        }
        lines.push(String::new());
        lines.push(self.message.clone());

        frame_record(self.object_type(), lines.join("\n").as_bytes())
    }
}

impl Unpackable for Commit {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let content = reader
            .bytes()
            .collect::<Result<Vec<u8>, std::io::Error>>()?;
        let content = String::from_utf8(content)?;

        let (header, message) = content
            .split_once("\n\n")
            .context("Invalid commit object: missing message separator")?;

        let mut parent = None;
        let mut merge_parent = None;
        let mut timestamp = None;
        let mut snapshot = Snapshot::new();

        for line in header.lines() {
            let (field, value) = line
                .split_once(' ')
                .with_context(|| format!("Invalid commit object: malformed line {line:?}"))?;

            match field {
                "parent" => parent = Some(ObjectId::try_parse(value.to_string())?),
                "merge" => merge_parent = Some(ObjectId::try_parse(value.to_string())?),
                "date" => {
                    let (seconds, offset) = value
                        .split_once(' ')
                        .context("Invalid commit object: malformed date line")?;
                    let seconds = seconds
                        .parse::<i64>()
                        .context("Invalid commit object: invalid timestamp")?;
                    let utc = DateTime::from_timestamp(seconds, 0)
                        .context("Invalid commit object: timestamp out of range")?;
                    timestamp = Some(utc.with_timezone(&parse_offset(offset)?));
                }
                "blob" => {
                    let (oid, path) = value
                        .split_once(' ')
                        .context("Invalid commit object: malformed blob line")?;
                    snapshot.insert(path.to_string(), ObjectId::try_parse(oid.to_string())?);
                }
                _ => anyhow::bail!("Invalid commit object: unknown field {field:?}"),
            }
        }

        let timestamp = timestamp.context("Invalid commit object: missing date line")?;

        Ok(Commit::new(
            parent,
            merge_parent,
            timestamp,
            message.to_string(),
            snapshot,
        ))
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }

    fn object_id(&self) -> anyhow::Result<ObjectId> {
        let merge_parent = self
            .merge_parent
            .as_ref()
            .map(|oid| oid.as_ref())
            .unwrap_or("");
        let readable_timestamp = self.readable_timestamp();
        let canonical_snapshot = self.canonical_snapshot();

        Ok(ObjectId::hash_chunks([
            merge_parent.as_bytes(),
            self.message.as_bytes(),
            readable_timestamp.as_bytes(),
            canonical_snapshot.as_slice(),
        ]))
    }
}
