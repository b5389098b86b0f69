// /auth-portal/services/portal-service/src/utils/common.rs

use sha2::{Digest, Sha512};
use tower_sessions::cookie::Key;

use super::error::{AppError, AppResult};

/// Escape text before interpolating it into an HTML page
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Derive the cookie signing key from the configured secret.
///
/// The signing key must be 64 bytes, so the secret is stretched with SHA-512
/// instead of being used directly. Any non-empty secret is accepted.
pub fn derive_session_key(secret: &str) -> AppResult<Key> {
    if secret.is_empty() {
        return Err(AppError::Configuration("SECRET_KEY must not be empty".to_string()));
    }

    let digest = Sha512::digest(secret.as_bytes());
    Ok(Key::from(digest.as_slice()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("alice"), "alice");
        assert_eq!(
            escape_html(r#"<script>alert("x")</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("tom & jerry's"), "tom &amp; jerry&#x27;s");
    }

    #[test]
    fn test_session_key_is_deterministic() {
        let a = derive_session_key("dev").unwrap();
        let b = derive_session_key("dev").unwrap();
        let c = derive_session_key("other").unwrap();

        assert_eq!(a.master(), b.master());
        assert_ne!(a.master(), c.master());
    }

    #[test]
    fn test_empty_secret_rejected() {
        assert!(matches!(derive_session_key(""), Err(AppError::Configuration(_))));
    }
}
