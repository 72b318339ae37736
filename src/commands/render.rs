//! Text rendering of operation payloads
//!
//! Colors go through `colored` and are switched off by the binary when
//! stdout is not a terminal, so the plain text below is what scripts see.

use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::status_info::StatusInfo;
use crate::commands::porcelain::merge::MergeOutcome;
use colored::Colorize;
use std::io::Write;

pub const ANCESTOR_MESSAGE: &str = "Given branch is an ancestor of the current branch.";
pub const FAST_FORWARD_MESSAGE: &str = "Current branch fast-forwarded.";
pub const CONFLICT_MESSAGE: &str = "Encountered a merge conflict.";

/// One history entry:
///
/// ```text
/// ===
/// commit <id>
/// Merge: <parent7> <merge7>
/// Date: <timestamp>
/// <message>
///
/// ```
pub fn write_log_entry(writer: &mut dyn Write, oid: &ObjectId, commit: &Commit) -> anyhow::Result<()> {
    writeln!(writer, "===")?;
    writeln!(writer, "{}", format!("commit {oid}").yellow())?;
    if let (Some(parent), Some(merge_parent)) = (commit.parent(), commit.merge_parent()) {
        writeln!(
            writer,
            "Merge: {} {}",
            parent.to_short_oid(),
            merge_parent.to_short_oid()
        )?;
    }
    writeln!(writer, "Date: {}", commit.readable_timestamp())?;
    writeln!(writer, "{}", commit.message())?;
    writeln!(writer)?;

    Ok(())
}

pub fn write_status(writer: &mut dyn Write, status: &StatusInfo) -> anyhow::Result<()> {
    writeln!(writer, "=== Branches ===")?;
    for branch in &status.branches {
        if branch == &status.current_branch {
            writeln!(writer, "{}", format!("*{branch}").green())?;
        } else {
            writeln!(writer, "{branch}")?;
        }
    }
    writeln!(writer)?;

    writeln!(writer, "=== Staged Files ===")?;
    for path in &status.staged {
        writeln!(writer, "{}", path.green())?;
    }
    writeln!(writer)?;

    writeln!(writer, "=== Removed Files ===")?;
    for path in &status.removed {
        writeln!(writer, "{}", path.green())?;
    }
    writeln!(writer)?;

    writeln!(writer, "=== Modifications Not Staged For Commit ===")?;
    for (path, modification) in &status.modified {
        writeln!(
            writer,
            "{}",
            format!("{path} ({})", modification.as_str()).red()
        )?;
    }
    writeln!(writer)?;

    writeln!(writer, "=== Untracked Files ===")?;
    for path in &status.untracked {
        writeln!(writer, "{}", path.red())?;
    }
    writeln!(writer)?;

    Ok(())
}

pub fn write_merge_outcome(writer: &mut dyn Write, outcome: &MergeOutcome) -> anyhow::Result<()> {
    match outcome {
        MergeOutcome::AlreadyAncestor => writeln!(writer, "{ANCESTOR_MESSAGE}")?,
        MergeOutcome::FastForwarded { .. } => writeln!(writer, "{FAST_FORWARD_MESSAGE}")?,
        MergeOutcome::Merged { .. } if outcome.has_conflicts() => {
            writeln!(writer, "{}", CONFLICT_MESSAGE.red())?
        }
        MergeOutcome::Merged { .. } => {}
    }

    Ok(())
}
