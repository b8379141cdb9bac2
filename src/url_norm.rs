//! Website URL normalization for consistent comparison.
//!
//! Canonical form: scheme-qualified, `www.`-stripped, no trailing slash on
//! the path, query and fragment preserved verbatim. Hand parsing on the
//! standard delimiters (`://`, `/`, `?`, `#`) rather than a full URL library:
//! the canonical form must leave the host's case and an empty path alone, and
//! malformed input must pass through best-effort instead of being rejected.

/// Pieces of a URL, split on `://`, `/`, `?`, `#`.
///
/// URLs without a `://` delimiter have an empty scheme and authority;
/// everything before the query lands in `path`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UrlParts<'a> {
    pub scheme: &'a str,
    pub authority: &'a str,
    pub path: &'a str,
    pub query: &'a str,
    pub fragment: &'a str,
}

pub fn split_url(url: &str) -> UrlParts<'_> {
    let (rest, fragment) = match url.split_once('#') {
        Some((r, f)) => (r, f),
        None => (url, ""),
    };
    let (rest, query) = match rest.split_once('?') {
        Some((r, q)) => (r, q),
        None => (rest, ""),
    };
    let (scheme, rest) = match rest.split_once("://") {
        Some((s, r)) => (s, r),
        None => {
            return UrlParts {
                path: rest,
                query,
                fragment,
                ..Default::default()
            };
        }
    };
    // Authority runs up to the first `/`; the path keeps its leading slash.
    let (authority, path) = match rest.find('/') {
        Some(i) => rest.split_at(i),
        None => (rest, ""),
    };
    UrlParts {
        scheme,
        authority,
        path,
        query,
        fragment,
    }
}

/// Exact, case-sensitive `www.` prefix strip.
pub fn strip_www(host: &str) -> &str {
    host.strip_prefix("www.").unwrap_or(host)
}

/// The authority component of `url`, minus any `www.` prefix.
/// Empty for scheme-less input, same as for no input at all.
pub fn host(url: &str) -> &str {
    strip_www(split_url(url).authority)
}

/// Normalize a URL so variants of the same address compare equal.
///
/// Handles variations like a missing scheme, a `www.` host prefix, and a
/// trailing slash. Empty input is a "no URL" sentinel and passes through
/// unchanged; nothing is ever rejected.
pub fn normalize(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }

    let schemed = if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    };

    let parts = split_url(&schemed);
    let authority = strip_www(parts.authority);
    let path = parts.path.strip_suffix('/').unwrap_or(parts.path);

    let mut normalized = format!("{}://{}{}", parts.scheme, authority, path);
    if !parts.query.is_empty() {
        normalized.push('?');
        normalized.push_str(parts.query);
    }
    if !parts.fragment.is_empty() {
        normalized.push('#');
        normalized.push_str(parts.fragment);
    }
    normalized
}

// ── Tests ──
