pub mod branch_name;

/// Names matching this pattern cannot be stored as ref files
pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";

/// Branch every new repository starts on
pub const DEFAULT_BRANCH: &str = "master";
