use anyhow::Context;
use std::io::BufRead;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Blob,
    Commit,
}

impl ObjectType {
    pub fn as_str(&self) -> &str {
        match self {
            ObjectType::Blob => "blob",
            ObjectType::Commit => "commit",
        }
    }

    /// Directory under the object store holding records of this type
    pub fn dir_name(&self) -> &str {
        match self {
            ObjectType::Blob => "blobs",
            ObjectType::Commit => "commits",
        }
    }

    /// Consume a `<type> <size>\0` record header, returning the type and the
    /// declared payload size
    pub fn read_header(reader: &mut impl BufRead) -> anyhow::Result<(ObjectType, usize)> {
        let mut header = Vec::new();
        reader.read_until(b'\0', &mut header)?;
        if header.pop() != Some(b'\0') {
            anyhow::bail!("Unterminated object header");
        }

        let header = std::str::from_utf8(&header).context("Object header is not UTF-8")?;
        let (object_type, size) = header
            .split_once(' ')
            .with_context(|| format!("Malformed object header {header:?}"))?;
        let size = size
            .parse::<usize>()
            .with_context(|| format!("Invalid object size in header {header:?}"))?;

        Ok((object_type.parse()?, size))
    }
}

impl FromStr for ObjectType {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> anyhow::Result<Self> {
        match value {
            "blob" => Ok(ObjectType::Blob),
            "commit" => Ok(ObjectType::Commit),
            _ => Err(anyhow::anyhow!("Invalid object type {value:?}")),
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
