//! Users API methods

use super::GitHubClient;
use crate::github::models::User;
use crate::runtime::ApiTask;

impl GitHubClient {
    /// Get the signed-in user; anonymous clients get `None`
    #[must_use]
    pub fn load_user(&self) -> ApiTask<Option<User>> {
        crate::github::load_user::load_user(self.inner.clone(), self.authenticated)
    }
}
