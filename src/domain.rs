/// URL normalization and origin rewriting for Domain Switcher
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::error::SwitchError;

static SCHEME_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://").expect("scheme prefix pattern is valid"));

/// Turn raw user input into the canonical URL stored in a domain record
///
/// Algorithm:
/// 1. Trim whitespace
/// 2. "localhost" or "localhost:<port>" → prefix "http://"
/// 3. Anything else without an http(s) scheme → prefix "https://"
/// 4. Parse as an absolute URL
/// 5. Strip a single trailing "/" from the serialized form
///
/// Examples:
/// - localhost:3000 → http://localhost:3000
/// - example.com/ → https://example.com
/// - http://example.com/ → http://example.com
pub fn normalize_domain_url(raw: &str) -> Result<String, SwitchError> {
    let input = raw.trim();

    let candidate = if input == "localhost" || input.starts_with("localhost:") {
        format!("http://{}", input)
    } else if input.starts_with("http://") || input.starts_with("https://") {
        input.to_string()
    } else {
        format!("https://{}", input)
    };

    let parsed = Url::parse(&candidate)?;
    let serialized = parsed.as_str();

    Ok(serialized
        .strip_suffix('/')
        .unwrap_or(serialized)
        .to_string())
}

/// Move the path, query and fragment of `current_url` onto `target`
///
/// The components are copied onto the parsed target rather than joined as a
/// string, so a path starting with "//" cannot replace the target host.
pub fn rewrite_url(current_url: &str, target: &str) -> Result<String, SwitchError> {
    let current = Url::parse(current_url)?;
    let mut rewritten = Url::parse(target)?;

    if rewritten.cannot_be_a_base() {
        return Err(SwitchError::InvalidUrl(format!(
            "{} cannot be used as a base URL",
            target
        )));
    }

    rewritten.set_path(current.path());
    rewritten.set_query(current.query());
    rewritten.set_fragment(current.fragment());

    Ok(rewritten.into())
}

/// Serialized origin of a URL, comparable to stored domain URLs
pub fn origin_of(url: &str) -> Result<String, SwitchError> {
    Ok(Url::parse(url)?.origin().ascii_serialization())
}

/// Stored URL as the user would type it into the edit form
pub fn display_input(url: &str) -> String {
    SCHEME_PREFIX.replace(url, "").into_owned()
}
