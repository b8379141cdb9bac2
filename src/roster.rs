//! In-memory roster of client companies, deduplicated by normalized URL.

use std::collections::HashSet;

use tracing::debug;

use crate::company::{self, ClientRecord, Company};

/// What happened to one record offered to the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Added,
    Duplicate,
    NoUrl,
}

/// Per-outcome totals for a batch ingest.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestCounts {
    pub added: usize,
    pub duplicates: usize,
    pub no_url: usize,
}

/// Companies in insertion order, with each normalized URL admitted once.
#[derive(Debug, Default)]
pub struct Roster {
    companies: Vec<Company>,
    seen_urls: HashSet<String>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a company from one record and add it, unless its normalized
    /// URL is already on the roster or no URL resolves at all.
    pub fn add(&mut self, record: &ClientRecord, fallback_url: Option<&str>) -> Outcome {
        let Some(company) = company::from_client_data(record, fallback_url) else {
            return Outcome::NoUrl;
        };
        if !self.seen_urls.insert(company.website_url.clone()) {
            debug!(url = %company.website_url, "skipping already-known client");
            return Outcome::Duplicate;
        }
        self.companies.push(company);
        Outcome::Added
    }

    pub fn ingest(&mut self, records: &[ClientRecord], fallback_url: Option<&str>) -> IngestCounts {
        let mut counts = IngestCounts::default();
        for record in records {
            match self.add(record, fallback_url) {
                Outcome::Added => counts.added += 1,
                Outcome::Duplicate => counts.duplicates += 1,
                Outcome::NoUrl => counts.no_url += 1,
            }
        }
        counts
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }
}

// ── Tests ──
