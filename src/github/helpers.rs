use super::GitHubError;

/// GitHub caps logins at 39 characters.
const MAX_LOGIN_LEN: usize = 39;

fn is_valid_login(s: &str) -> bool {
    !s.is_empty()
        && s.len() <= MAX_LOGIN_LEN
        && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !s.starts_with('-')
        && !s.ends_with('-')
}

/// Parse a user identifier into a bare login.
///
/// Accepts `"login"`, `"@login"`, and profile URLs like `https://github.com/login`.
/// The result is safe for direct URL interpolation.
pub fn validate_user(user: &str) -> Result<&str, GitHubError> {
    let trimmed = user.trim();
    let login = trimmed
        .strip_prefix("https://github.com/")
        .or_else(|| trimmed.strip_prefix("http://github.com/"))
        .or_else(|| trimmed.strip_prefix('@'))
        .unwrap_or(trimmed)
        .trim_end_matches('/');

    if !is_valid_login(login) {
        return Err(GitHubError::InvalidUser(user.to_string()));
    }
    Ok(login)
}
