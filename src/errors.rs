//! Failure taxonomy for repository operations
//!
//! Every core entry point returns [`Result`]. Variants carry the data the
//! command layer needs to explain the failure; [`BoughError::kind`] collapses
//! them onto a small set of kinds for callers that only need to branch on the
//! category.

use crate::artifacts::objects::object_id::ObjectId;
use thiserror::Error;

/// Coarse classification of a [`BoughError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UserInput,
    NotInitialized,
    NotFound,
    AlreadyExists,
    NoOpCondition,
    CannotRemoveCurrent,
    CannotMergeSelf,
    UncommittedChanges,
    UntrackedObstruction,
    AmbiguousOrNotFound,
    Internal,
}

#[derive(Debug, Error)]
pub enum BoughError {
    #[error("{0}")]
    UserInput(String),

    #[error("Not in an initialized Bough directory.")]
    NotInitialized,

    #[error("A Bough version-control system already exists in the current directory.")]
    AlreadyInitialized,

    #[error("No commit with that id exists.")]
    NoSuchCommit(String),

    #[error("A branch with that name does not exist.")]
    NoSuchBranch(String),

    #[error("Object {0} is missing from the object store.")]
    MissingObject(ObjectId),

    #[error("File does not exist in that commit.")]
    FileNotInCommit(String),

    #[error("Found no commit with that message.")]
    NoCommitWithMessage(String),

    #[error("A branch with that name already exists.")]
    BranchExists(String),

    #[error("Invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("No changes added to the commit.")]
    NothingToCommit,

    #[error("No need to checkout the current branch.")]
    AlreadyOnBranch(String),

    #[error("No reason to remove the file.")]
    NoReasonToRemove(String),

    #[error("Cannot remove the current branch.")]
    CannotRemoveCurrent(String),

    #[error("Cannot merge a branch with itself.")]
    CannotMergeSelf(String),

    #[error("You have uncommitted changes.")]
    UncommittedChanges,

    #[error("There is an untracked file in the way; delete it, or add and commit it first.")]
    UntrackedObstruction(Vec<String>),

    #[error("Commit id prefix {prefix} is ambiguous: {}", .candidates.join(", "))]
    AmbiguousCommit {
        prefix: String,
        candidates: Vec<String>,
    },

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl BoughError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BoughError::UserInput(_) | BoughError::InvalidBranchName(_) => ErrorKind::UserInput,
            BoughError::NotInitialized => ErrorKind::NotInitialized,
            BoughError::AlreadyInitialized | BoughError::BranchExists(_) => {
                ErrorKind::AlreadyExists
            }
            BoughError::NoSuchBranch(_)
            | BoughError::MissingObject(_)
            | BoughError::FileNotInCommit(_)
            | BoughError::NoCommitWithMessage(_) => ErrorKind::NotFound,
            BoughError::NothingToCommit
            | BoughError::AlreadyOnBranch(_)
            | BoughError::NoReasonToRemove(_) => ErrorKind::NoOpCondition,
            BoughError::CannotRemoveCurrent(_) => ErrorKind::CannotRemoveCurrent,
            BoughError::CannotMergeSelf(_) => ErrorKind::CannotMergeSelf,
            BoughError::UncommittedChanges => ErrorKind::UncommittedChanges,
            BoughError::UntrackedObstruction(_) => ErrorKind::UntrackedObstruction,
            BoughError::NoSuchCommit(_) | BoughError::AmbiguousCommit { .. } => {
                ErrorKind::AmbiguousOrNotFound
            }
            BoughError::Internal(_) => ErrorKind::Internal,
        }
    }
}

impl From<std::io::Error> for BoughError {
    fn from(error: std::io::Error) -> Self {
        BoughError::Internal(error.into())
    }
}

/// Result alias used by every repository entry point
pub type Result<T> = std::result::Result<T, BoughError>;
