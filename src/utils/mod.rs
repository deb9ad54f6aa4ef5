pub mod url_utils;

pub use url_utils::{is_blank, normalize_url, NormalizedUrl, NotNormalized};
