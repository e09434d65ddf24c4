use crate::api::error::ApiError;
use crate::api::params::parse_string_list;
use crate::model::RepositoryRef;

pub const INVALID_CANDIDATES_MSG: &str = "Invalid candidate_dataset_ids.";
pub const CANDIDATES_COUNT_MSG: &str = "candidate_dataset_ids requires exact two datasets.";

pub fn resolve_one(user_id: &str, repo_id: &str, branch_id: &str) -> RepositoryRef {
    RepositoryRef::new(user_id, repo_id, branch_id)
}

/// Resolve the two datasets named by a comma separated `candidate_dataset_ids`.
///
/// Output order follows the input order.
pub fn resolve_two(
    user_id: &str,
    repo_id: &str,
    candidates: Option<&str>,
) -> Result<(RepositoryRef, RepositoryRef), ApiError> {
    let raw = match candidates {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Err(ApiError::InvalidParams(INVALID_CANDIDATES_MSG.to_string())),
    };

    match parse_string_list(raw).as_slice() {
        [branch0, branch1] => Ok((
            resolve_one(user_id, repo_id, branch0),
            resolve_one(user_id, repo_id, branch1),
        )),
        _ => Err(ApiError::InvalidParams(CANDIDATES_COUNT_MSG.to_string())),
    }
}
