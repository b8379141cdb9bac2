//! Company records derived from raw client data.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::url_norm;

/// Display name used when no usable host segment exists.
pub const UNKNOWN_COMPANY: &str = "Unknown Company";

// First host label only: splitting on dots and hyphens drops the TLD and any
// hyphenated or sub-domain tail.
static HOST_SEGMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.-]").unwrap());

/// An immutable client company record.
///
/// `name` is never empty; `website_url` holds the normalized URL the record
/// was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Company {
    pub name: String,
    pub website_url: String,
}

/// One raw client entry as it arrives from extraction output.
/// A missing field and an empty string mean the same thing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
}

/// Derive a human-readable company name from a URL's host.
///
/// Takes the first label of the host, recovers word boundaries by splitting
/// before every uppercase letter, capitalizes each word, and joins with
/// spaces. Falls back to [`UNKNOWN_COMPANY`] when the host is empty or
/// yields no words.
pub fn derive_name(url: &str) -> String {
    let host = url_norm::host(url);
    if host.is_empty() {
        return UNKNOWN_COMPANY.to_string();
    }

    let segment = HOST_SEGMENT_RE.split(host).next().unwrap_or("");
    let name = split_before_uppercase(segment)
        .iter()
        .filter(|word| !word.is_empty())
        .map(|word| capitalize(word))
        .collect::<Vec<_>>()
        .join(" ");
    debug!(host, segment, name = %name, "derived company name");

    if name.is_empty() {
        UNKNOWN_COMPANY.to_string()
    } else {
        name
    }
}

/// Build a [`Company`] from one client record, falling back to
/// `fallback_url` when the record carries no URL of its own.
///
/// Returns `None` when no URL resolves at all; that is the normal "nothing
/// to build from" outcome, not an error.
pub fn from_client_data(record: &ClientRecord, fallback_url: Option<&str>) -> Option<Company> {
    let url = non_empty(record.website_url.as_deref()).or_else(|| non_empty(fallback_url))?;
    let website_url = url_norm::normalize(url);

    let name = match non_empty(record.name.as_deref()) {
        Some(name) => name.to_string(),
        None => derive_name(&website_url),
    };
    debug!(name = %name, url = %website_url, "built company");

    Some(Company { name, website_url })
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// Zero-width split immediately before every ASCII uppercase letter.
///
/// Naive on purpose: consecutive capitals become single-letter words
/// ("airBnB" -> ["air", "Bn", "B"]). Downstream data depends on this exact
/// tokenization, so it stays as-is.
fn split_before_uppercase(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    for (i, c) in s.char_indices() {
        if i > 0 && c.is_ascii_uppercase() {
            parts.push(&s[start..i]);
            start = i;
        }
    }
    parts.push(&s[start..]);
    parts
}

/// Uppercase the first character, lowercase the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_domains() {
        assert_eq!(derive_name("https://amazon.com"), "Amazon");
        assert_eq!(derive_name("https://www.google.com"), "Google");
        assert_eq!(derive_name("https://apple.com"), "Apple");
    }

    #[test]
    fn hyphenated_domains_keep_first_segment() {
        assert_eq!(derive_name("https://acme-corp.com"), "Acme");
        assert_eq!(derive_name("https://example-site.io"), "Example");
        assert_eq!(derive_name("https://micro-soft.com"), "Micro");
    }

    #[test]
    fn camel_case_splits_into_words() {
        assert_eq!(derive_name("http://myCompany-site.co.uk"), "My Company");
        // Consecutive capitals are not merged; the heuristic is deliberately naive.
        assert_eq!(derive_name("https://airBnB.com"), "Air Bn B");
    }

    #[test]
    fn empty_url_falls_back() {
        assert_eq!(derive_name(""), UNKNOWN_COMPANY);
    }

    #[test]
    fn scheme_less_url_has_no_host() {
        assert_eq!(derive_name("amazon.com"), UNKNOWN_COMPANY);
    }

    fn record(name: Option<&str>, url: Option<&str>) -> ClientRecord {
        ClientRecord {
            name: name.map(str::to_string),
            website_url: url.map(str::to_string),
        }
    }

    #[test]
    fn complete_client_data() {
        let c = from_client_data(&record(Some("Acme Inc"), Some("www.acme.com")), None).unwrap();
        assert_eq!(c.name, "Acme Inc");
        assert_eq!(c.website_url, "https://acme.com");
    }

    #[test]
    fn missing_name_derives_from_url() {
        let c = from_client_data(&record(None, Some("example.com")), None).unwrap();
        assert_eq!(c.name, "Example");
        assert_eq!(c.website_url, "https://example.com");
    }

    #[test]
    fn missing_url_uses_fallback() {
        let c = from_client_data(&record(Some("Backup Company"), None), Some("backup.com")).unwrap();
        assert_eq!(c.name, "Backup Company");
        assert_eq!(c.website_url, "https://backup.com");
    }

    #[test]
    fn empty_client_data_with_fallback_derives_everything() {
        let c = from_client_data(&ClientRecord::default(), Some("last-resort.com")).unwrap();
        assert_eq!(c.name, "Last");
        assert_eq!(c.website_url, "https://last-resort.com");
    }

    #[test]
    fn no_url_anywhere_builds_nothing() {
        assert!(from_client_data(&record(Some("No URL Company"), None), None).is_none());
        assert!(from_client_data(&ClientRecord::default(), None).is_none());
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let c = from_client_data(&record(Some(""), Some("")), Some("acme.com")).unwrap();
        assert_eq!(c.name, "Acme");
        assert_eq!(c.website_url, "https://acme.com");
    }

    #[test]
    fn client_record_parses_with_missing_fields() {
        let records: Vec<ClientRecord> =
            serde_json::from_str(r#"[{"name":"Acme Inc","website_url":"www.acme.com"},{}]"#)
                .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name.as_deref(), Some("Acme Inc"));
        assert!(records[1].name.is_none() && records[1].website_url.is_none());
    }
}
