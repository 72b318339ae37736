//! Branch pointers and HEAD
//!
//! Branches are files under `refs/heads/` holding a 40-character commit ID.
//! Hierarchical names (`feature/x`) become nested directories.
//!
//! HEAD is always symbolic: `ref: refs/heads/<branch>`. The commit HEAD names
//! is whatever the current branch points to, so moving HEAD and moving the
//! current branch are one write.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::BoughError;
use anyhow::Context;
use derive_new::new;
use fake::rand;
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::Path;
use walkdir::WalkDir;

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: refs/heads/(.+)$";

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the repository state directory (`.bough`)
    path: Box<Path>,
}

impl Refs {
    /// Name of the branch HEAD follows
    pub fn current_branch(&self) -> crate::Result<BranchName> {
        let head_path = self.head_path();
        let content = std::fs::read_to_string(&head_path)
            .with_context(|| format!("failed to read HEAD at {head_path:?}"))?;
        let content = content.trim();

        let symref = regex::Regex::new(SYMREF_REGEX)
            .context("invalid symref regex")?
            .captures(content)
            .with_context(|| format!("HEAD is not a branch reference: {content:?}"))?;

        BranchName::try_parse(symref[1].to_string())
    }

    pub fn is_current_branch(&self, branch_name: &BranchName) -> crate::Result<bool> {
        Ok(&self.current_branch()? == branch_name)
    }

    /// Commit the current branch points to
    pub fn read_head(&self) -> crate::Result<ObjectId> {
        let current = self.current_branch()?;

        self.read_branch(&current)?
            .ok_or(BoughError::NoSuchBranch(current.to_string()))
    }

    /// Make HEAD follow `branch_name`
    pub fn set_current_branch(&self, branch_name: &BranchName) -> anyhow::Result<()> {
        self.update_ref_file(
            &self.head_path(),
            &format!("ref: refs/heads/{branch_name}"),
        )
    }

    /// Move the current branch (and therefore HEAD) to `oid`
    pub fn update_head(&self, oid: &ObjectId) -> crate::Result<()> {
        let current = self.current_branch()?;
        self.update_branch(&current, oid)?;

        Ok(())
    }

    pub fn branch_exists(&self, branch_name: &BranchName) -> bool {
        self.branch_path(branch_name).is_file()
    }

    pub fn read_branch(&self, branch_name: &BranchName) -> anyhow::Result<Option<ObjectId>> {
        let branch_path = self.branch_path(branch_name);
        if !branch_path.is_file() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&branch_path)
            .with_context(|| format!("failed to read ref file at {branch_path:?}"))?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        Ok(Some(ObjectId::try_parse(content.to_string())?))
    }

    pub fn create_branch(&self, branch_name: &BranchName, oid: &ObjectId) -> crate::Result<()> {
        let branch_path = self.branch_path(branch_name);
        if branch_path.is_file() {
            return Err(BoughError::BranchExists(branch_name.to_string()));
        }

        // `a` and `a/b` cannot both be branches
        let heads_path = self.heads_path();
        let nests_under_branch = branch_path
            .ancestors()
            .skip(1)
            .take_while(|ancestor| *ancestor != heads_path.as_ref())
            .any(Path::is_file);
        if branch_path.exists() || nests_under_branch {
            return Err(BoughError::InvalidBranchName(format!(
                "{branch_name} clashes with an existing branch"
            )));
        }

        self.update_branch(branch_name, oid)?;
        tracing::debug!(branch = %branch_name, %oid, "created branch");

        Ok(())
    }

    pub fn update_branch(&self, branch_name: &BranchName, oid: &ObjectId) -> anyhow::Result<()> {
        self.update_ref_file(&self.branch_path(branch_name), oid.as_ref())
    }

    /// Remove a branch pointer, returning the commit it named
    pub fn delete_branch(&self, branch_name: &BranchName) -> crate::Result<ObjectId> {
        let oid = self
            .read_branch(branch_name)?
            .ok_or_else(|| BoughError::NoSuchBranch(branch_name.to_string()))?;

        let branch_path = self.branch_path(branch_name);
        std::fs::remove_file(&branch_path)
            .with_context(|| format!("failed to delete branch file at {branch_path:?}"))?;
        self.prune_branch_empty_parent_dirs(&branch_path)?;

        Ok(oid)
    }

    /// Every branch name, sorted
    pub fn list_branches(&self) -> crate::Result<Vec<BranchName>> {
        let heads_path = self.heads_path();

        let mut branches = WalkDir::new(&heads_path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| !entry.file_name().to_string_lossy().starts_with('.'))
            .filter_map(|entry| {
                let relative_path = entry.path().strip_prefix(&heads_path).ok()?;
                let name = relative_path
                    .components()
                    .map(|component| component.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");
                Some(name)
            })
            .map(BranchName::try_parse)
            .collect::<crate::Result<Vec<_>>>()?;
        branches.sort();

        Ok(branches)
    }

    /// Replace a ref file through a temporary sibling so readers see either
    /// the old value or the new one, never an empty file
    fn update_ref_file(&self, path: &Path, raw_ref: &str) -> anyhow::Result<()> {
        let ref_dir = path.parent().with_context(|| {
            format!("failed to create parent directories for ref file at {path:?}")
        })?;
        std::fs::create_dir_all(ref_dir)?;

        let file_name = path
            .file_name()
            .with_context(|| format!("invalid ref file path {path:?}"))?;
        let temp_path = ref_dir.join(format!(
            ".{}.{}.lock",
            file_name.to_string_lossy(),
            rand::random::<u32>()
        ));

        let mut temp_file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_path)
            .with_context(|| format!("failed to open ref file at {temp_path:?}"))?;
        {
            let mut lock = file_guard::lock(&mut temp_file, Lock::Exclusive, 0, 1)?;
            lock.deref_mut().write_all(raw_ref.as_bytes())?;
        }
        temp_file.sync_all()?;

        std::fs::rename(&temp_path, path)
            .with_context(|| format!("failed to move ref file into place at {path:?}"))?;

        Ok(())
    }

    fn prune_branch_empty_parent_dirs(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && parent != self.heads_path().as_ref()
            && parent.read_dir()?.next().is_none()
        {
            std::fs::remove_dir(parent).with_context(|| {
                format!("failed to remove empty branch directory at {parent:?}")
            })?;
            self.prune_branch_empty_parent_dirs(parent)?;
        }

        Ok(())
    }

    fn branch_path(&self, branch_name: &BranchName) -> Box<Path> {
        self.heads_path().join(branch_name.as_ref()).into_boxed_path()
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }
}
