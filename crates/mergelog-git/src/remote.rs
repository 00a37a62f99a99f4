//! Remote URL normalisation.

use std::sync::LazyLock;

use regex::Regex;

use crate::{GitError, GitResult};

static GITHUB_REMOTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:https://github\.com/|git@github\.com:|ssh://git@github\.com/)(?P<path>[^/\s]+/[^/\s]+?)(?:\.git)?/?$",
    )
    .expect("invalid regex")
});

const GITHUB_BASE: &str = "https://github.com";

/// Rewrites a GitHub remote URL into its web form, `https://github.com/<org>/<repo>`.
///
/// Both HTTPS and SSH remotes are accepted, with or without the `.git`
/// suffix.
///
/// # Errors
///
/// Returns [`GitError::UnsupportedRemote`] if the URL does not point at a
/// GitHub repository.
pub fn github_base_url(remote_url: &str) -> GitResult<String> {
    let remote_url = remote_url.trim();
    let captures = GITHUB_REMOTE_RE
        .captures(remote_url)
        .ok_or_else(|| GitError::UnsupportedRemote(remote_url.to_string()))?;

    Ok(format!("{GITHUB_BASE}/{}", &captures["path"]))
}
