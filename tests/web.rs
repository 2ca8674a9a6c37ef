//! In-browser tests for the exported URL functions
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_normalize_exported() {
    assert_eq!(
        domain_switcher::normalize_domain_url("localhost:3000").ok().as_deref(),
        Some("http://localhost:3000")
    );
    assert_eq!(
        domain_switcher::normalize_domain_url("example.com/").ok().as_deref(),
        Some("https://example.com")
    );
    assert!(domain_switcher::normalize_domain_url("not a url").is_err());
}

#[wasm_bindgen_test]
fn test_rewrite_exported() {
    assert_eq!(
        domain_switcher::rewrite_url(
            "https://staging.example.com/path?q=1#frag",
            "https://prod.example.com"
        )
        .ok()
        .as_deref(),
        Some("https://prod.example.com/path?q=1#frag")
    );
    assert!(domain_switcher::rewrite_url("nope", "https://prod.example.com").is_err());
}
