//! Referer-origin policy.
//!
//! # Responsibilities
//! - Parse the inbound referer as a URL
//! - Check its host against the configured serving name
//! - Deny absent, unparseable, or host-less referers
//!
//! # Design Decisions
//! - Host matching is case-insensitive
//! - Containment is substring matching, not exact host comparison

use url::Url;

/// Returns true when the referer names a host containing `server_name`.
///
/// Substring containment, not equality: a referer host of
/// `files.myhost.example` passes for a serving name of `myhost.example`,
/// and so would `myhost.example.attacker.net`. Kept for compatibility with
/// existing callers; this check is not a security boundary.
pub fn referer_allowed(referer: Option<&str>, server_name: &str) -> bool {
    let Some(referer) = referer else {
        return false;
    };
    let Ok(parsed) = Url::parse(referer) else {
        return false;
    };
    let Some(host) = parsed.host_str() else {
        return false;
    };

    host.to_lowercase().contains(&server_name.to_lowercase())
}
