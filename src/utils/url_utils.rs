use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

const HTTPS_SCHEME: &str = "https://";
const STRIPPED_PREFIXES: [&str; 3] = ["http://", "https://", "www."];

/// An absolute `https://` URL with no duplicated scheme or `www.` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NormalizedUrl(String);

impl NormalizedUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<NormalizedUrl> for String {
    fn from(url: NormalizedUrl) -> Self {
        url.0
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("`{0}` is not a normalized https URL")]
pub struct NotNormalized(pub String);

impl TryFrom<String> for NormalizedUrl {
    type Error = NotNormalized;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let normalized = normalize_url(&value);
        if normalized.0 == value {
            Ok(normalized)
        } else {
            Err(NotNormalized(value))
        }
    }
}

/// Strips any leading scheme and `www.` and re-adds `https://`.
///
/// Nothing after the prefixes is touched: no host validation, no
/// percent-encoding, path and query are kept as typed. Callers reject
/// blank input before getting here.
pub fn normalize_url(raw: &str) -> NormalizedUrl {
    let mut rest = raw.trim();
    while let Some(stripped) = STRIPPED_PREFIXES
        .iter()
        .find_map(|prefix| rest.strip_prefix(prefix))
    {
        rest = stripped;
    }
    NormalizedUrl(format!("{}{}", HTTPS_SCHEME, rest))
}

/// True when the raw input has nothing but whitespace.
pub fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_https_to_bare_domain() {
        assert_eq!(normalize_url("example.com").as_str(), "https://example.com");
    }

    #[test]
    fn replaces_http_scheme() {
        assert_eq!(
            normalize_url("http://example.com").as_str(),
            "https://example.com"
        );
    }

    #[test]
    fn strips_www_after_scheme() {
        assert_eq!(
            normalize_url("https://www.example.com").as_str(),
            "https://example.com"
        );
        assert_eq!(normalize_url("www.example.com").as_str(), "https://example.com");
    }

    #[test]
    fn trims_whitespace_and_keeps_path() {
        assert_eq!(
            normalize_url("  http://www.example.com/blog?page=2 \n").as_str(),
            "https://example.com/blog?page=2"
        );
    }

    #[test]
    fn scheme_match_is_case_sensitive() {
        assert_eq!(
            normalize_url("HTTP://example.com").as_str(),
            "https://HTTP://example.com"
        );
    }

    #[test]
    fn normalizing_twice_changes_nothing() {
        let inputs = [
            "example.com",
            "http://example.com",
            "https://www.example.com",
            "www.http://example.com",
            "http://www.www.example.com",
            "https://",
            "  spaced.example.com/a b ",
            "HTTP://shouting.example.com",
        ];
        for input in inputs {
            let once = normalize_url(input);
            let twice = normalize_url(once.as_str());
            assert_eq!(once, twice, "input {:?}", input);
        }
    }

    #[test]
    fn deserialize_rejects_unnormalized_strings() {
        let ok: NormalizedUrl = serde_json::from_str("\"https://example.com\"").unwrap();
        assert_eq!(ok.as_str(), "https://example.com");
        assert!(serde_json::from_str::<NormalizedUrl>("\"http://example.com\"").is_err());
        assert!(serde_json::from_str::<NormalizedUrl>("\"example.com\"").is_err());
    }

    #[test]
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\n"));
        assert!(!is_blank(" a "));
    }
}
