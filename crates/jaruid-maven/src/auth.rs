//! Repository authentication header selection.

use reqwest::RequestBuilder;

use crate::repository::MavenRepository;

/// Apply Basic auth if both username and password are present, Bearer if
/// only a password/token is configured, otherwise leave the request as-is.
pub fn apply_auth(request: RequestBuilder, repo: &MavenRepository) -> RequestBuilder {
    match (&repo.username, &repo.password) {
        (Some(user), Some(pass)) => request.basic_auth(user, Some(pass)),
        (Some(user), None) => request.basic_auth(user, None::<&str>),
        (None, Some(token)) => request.bearer_auth(token),
        (None, None) => request,
    }
}
