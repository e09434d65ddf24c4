use serde::{Deserialize, Serialize};
use std::fmt;

/// Addresses one dataset: a branch (task) inside a user's repository.
///
/// Built fresh for every request and never persisted. `task_id` always
/// mirrors `branch_id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositoryRef {
    #[serde(rename = "UserID")]
    pub user_id: String,
    #[serde(rename = "RepoID")]
    pub repo_id: String,
    #[serde(rename = "BranchID")]
    pub branch_id: String,
    #[serde(rename = "TaskID")]
    pub task_id: String,
}

impl RepositoryRef {
    pub fn new(user_id: &str, repo_id: &str, branch_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            repo_id: repo_id.to_string(),
            branch_id: branch_id.to_string(),
            task_id: branch_id.to_string(),
        }
    }

    /// Key used by stores to locate the dataset behind this ref
    pub fn key(&self) -> (String, String, String) {
        (
            self.user_id.clone(),
            self.repo_id.clone(),
            self.branch_id.clone(),
        )
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}@{}", self.user_id, self.repo_id, self.branch_id)
    }
}
