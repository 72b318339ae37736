use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::BoughError;

impl Repository {
    /// IDs of every commit whose message is exactly `message`, sorted
    pub fn find_by_message(&self, message: &str) -> crate::Result<Vec<ObjectId>> {
        let mut matches = self
            .database()
            .all_commits()?
            .into_iter()
            .filter(|(_, commit)| commit.message() == message)
            .map(|(oid, _)| oid)
            .collect::<Vec<_>>();

        if matches.is_empty() {
            return Err(BoughError::NoCommitWithMessage(message.to_string()));
        }
        matches.sort();

        Ok(matches)
    }
}
