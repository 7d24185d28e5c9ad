//! Redacting wrapper for tokens and API keys.

use std::fmt;

/// A string whose value never appears in `Debug` or `Display` output.
///
/// # Example
///
/// ```
/// use persona_assessment::config::SecretString;
///
/// let token = SecretString::new("hf_abc123");
/// assert_eq!(format!("{token:?}"), "<REDACTED>");
/// assert_eq!(token.expose(), "hf_abc123");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SecretString(String);

impl SecretString {
    /// Wrap a value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Wrap a value unless it is blank.
    #[must_use]
    pub fn non_blank(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    /// The raw value, for building request headers.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Whether the value is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<REDACTED>")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<REDACTED>")
    }
}

impl From<String> for SecretString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for SecretString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_and_display_redacted() {
        let secret = SecretString::new("sk-ant-secret");
        assert_eq!(format!("{secret:?}"), "<REDACTED>");
        assert_eq!(format!("{secret}"), "<REDACTED>");
        assert_eq!(secret.expose(), "sk-ant-secret");
    }

    #[test]
    fn test_non_blank() {
        assert!(SecretString::non_blank("  ").is_none());
        assert!(SecretString::non_blank("").is_none());
        assert_eq!(
            SecretString::non_blank("hf_x").map(|s| s.expose().to_string()),
            Some("hf_x".to_string())
        );
    }

    #[test]
    fn test_conversions_and_eq() {
        let a: SecretString = "k".into();
        let b: SecretString = String::from("k").into();
        assert_eq!(a, b);
        assert_ne!(a, SecretString::new("other"));
        assert!(SecretString::new("").is_empty());
    }
}
