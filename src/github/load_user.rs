//! Signed-in user lookup.

use crate::github::error::GitHubError;
use crate::github::models::User;
use crate::github::util::spawn_task;
use crate::runtime::ApiTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Get the user the client is authenticated as.
///
/// Anonymous clients resolve to `None` without calling the API.
pub(crate) fn load_user(inner: Arc<Octocrab>, authenticated: bool) -> ApiTask<Option<User>> {
    spawn_task(async move {
        if !authenticated {
            return Ok(None);
        }
        let user = inner.current().user().await.map_err(GitHubError::from)?;
        Ok(Some(User::from(user)))
    })
}
