use crate::artifacts::checkout::migration::{ActionType, Migration};
use crate::artifacts::objects::blob::Blob;
use crate::errors::BoughError;
use anyhow::Context;
use bytes::Bytes;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Name of the repository state directory, never listed as a working file
pub const STATE_DIR_NAME: &str = ".bough";

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Turn a user-supplied relative path into the `/`-separated name
    /// snapshots are keyed by
    pub fn normalize(raw_path: &str) -> crate::Result<String> {
        let mut parts = Vec::new();

        for component in Path::new(raw_path).components() {
            match component {
                Component::Normal(part) => parts.push(part.to_string_lossy().to_string()),
                Component::CurDir => {}
                _ => {
                    return Err(BoughError::UserInput(format!(
                        "Path must stay inside the working directory: {raw_path}"
                    )));
                }
            }
        }

        if parts.is_empty() || parts[0] == STATE_DIR_NAME {
            return Err(BoughError::UserInput(format!("Invalid file name: {raw_path}")));
        }

        Ok(parts.join("/"))
    }

    /// Every regular file below the root, as sorted `/`-separated names
    pub fn list_files(&self) -> anyhow::Result<Vec<String>> {
        let mut files = WalkDir::new(&self.path)
            .min_depth(1)
            .into_iter()
            .filter_entry(|entry| entry.file_name() != STATE_DIR_NAME)
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| self.file_name_of(entry.path()))
            .collect::<Vec<_>>();
        files.sort();

        Ok(files)
    }

    fn file_name_of(&self, path: &Path) -> Option<String> {
        let relative_path = path.strip_prefix(self.path()).ok()?;

        Some(
            relative_path
                .components()
                .map(|component| component.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/"),
        )
    }

    fn full_path(&self, file_name: &str) -> PathBuf {
        self.path.join(file_name)
    }

    pub fn exists(&self, file_name: &str) -> bool {
        self.full_path(file_name).is_file()
    }

    pub fn read_file(&self, file_name: &str) -> anyhow::Result<Bytes> {
        let file_path = self.full_path(file_name);

        let content = std::fs::read(&file_path)
            .with_context(|| format!("Unable to read working file {file_path:?}"))?;

        Ok(content.into())
    }

    pub fn parse_blob(&self, file_name: &str) -> anyhow::Result<Blob> {
        Ok(Blob::new(self.read_file(file_name)?))
    }

    /// Write a file, creating parent directories and replacing whatever is
    /// in its place
    pub fn write_file(&self, file_name: &str, data: &[u8]) -> anyhow::Result<()> {
        let file_path = self.full_path(file_name);

        if file_path.is_dir() {
            std::fs::remove_dir_all(&file_path)
                .with_context(|| format!("Failed to remove existing directory: {file_name:?}"))?;
        }

        if let Some(parent) = file_path.parent() {
            self.make_directory(parent)?;
        }

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&file_path)
            .with_context(|| format!("Failed to open file: {file_name:?}"))?;

        file.write_all(data)
            .with_context(|| format!("Failed to write to file: {file_name:?}"))?;

        Ok(())
    }

    /// Delete a file if present and prune directories it leaves empty
    pub fn remove_file(&self, file_name: &str) -> anyhow::Result<()> {
        let file_path = self.full_path(file_name);

        if file_path.is_file() {
            std::fs::remove_file(&file_path)
                .with_context(|| format!("Failed to remove file: {file_name:?}"))?;
        }

        self.prune_empty_parent_dirs(&file_path)
    }

    /// Deletions first, then modifications and additions
    pub fn apply_migration(&self, migration: &Migration<'_>) -> crate::Result<()> {
        for action in [ActionType::Delete, ActionType::Modify, ActionType::Add] {
            for (file_name, oid) in migration.actions_of(action) {
                match (action, oid) {
                    (ActionType::Delete, _) => self.remove_file(file_name)?,
                    (ActionType::Add | ActionType::Modify, Some(oid)) => {
                        let data = migration.load_blob_data(oid)?;
                        self.write_file(file_name, &data)?;
                    }
                    _ => {
                        return Err(anyhow::anyhow!("Invalid action and entry combination").into());
                    }
                }
            }
        }

        Ok(())
    }

    fn make_directory(&self, dir_path: &Path) -> anyhow::Result<()> {
        // a file may sit where a directory is needed
        for ancestor in dir_path
            .ancestors()
            .take_while(|ancestor| *ancestor != self.path())
        {
            if ancestor.is_file() {
                std::fs::remove_file(ancestor)
                    .with_context(|| format!("Failed to remove file in the way: {ancestor:?}"))?;
            }
        }

        std::fs::create_dir_all(dir_path)
            .with_context(|| format!("Failed to create directory: {dir_path:?}"))
    }

    fn prune_empty_parent_dirs(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && parent != self.path()
            && parent.is_dir()
            && parent.read_dir()?.next().is_none()
        {
            std::fs::remove_dir(parent)
                .with_context(|| format!("Failed to remove empty directory: {parent:?}"))?;
            self.prune_empty_parent_dirs(parent)?;
        }

        Ok(())
    }
}
