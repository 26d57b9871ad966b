//! Publication statistics over parsed BibTeX entries.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::schemas::bib_entry::BibEntry;

static AUTHOR_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\sand\s").expect("valid author separator"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));
static PROCEEDINGS_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^proceedings of\s*").expect("valid proceedings prefix"));
static THE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^the\s+").expect("valid article prefix"));
static FOUR_DIGIT_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}").expect("valid year pattern"));

/// Occurrence counts that remember first-seen order, so ties rank stably.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    counts: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl Tally {
    pub fn add(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&slot) => self.counts[slot].1 += 1,
            None => {
                self.index.insert(key.to_string(), self.counts.len());
                self.counts.push((key.to_string(), 1));
            }
        }
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> usize {
        self.index.get(key).map_or(0, |&slot| self.counts[slot].1)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// All keys, highest count first; equal counts keep first-seen order.
    pub fn by_count(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(key, count)| (key.as_str(), *count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    pub fn most_common(&self, n: usize) -> Vec<(&str, usize)> {
        let mut ranked = self.by_count();
        ranked.truncate(n);
        ranked
    }
}

#[derive(Debug, Clone, Default)]
pub struct BibStats {
    pub total_entries: usize,
    pub entry_types: Tally,
    pub authors: Tally,
    pub journals: Tally,
    pub conferences: Tally,
    pub years: Tally,
}

/// Splits an `author` field into individual names.
pub fn extract_authors(author_field: &str) -> Vec<String> {
    AUTHOR_SEPARATOR
        .split(author_field)
        .map(|author| {
            let collapsed = WHITESPACE_RUN.replace_all(author.trim(), " ");
            collapsed.replace(['{', '}'], "")
        })
        .filter(|author| !author.is_empty())
        .collect()
}

/// Journal and conference names for an entry; either may be empty.
pub fn extract_venues(entry: &BibEntry) -> (String, String) {
    let journal = entry
        .field("journal")
        .or_else(|| entry.field("journaltitle"))
        .map(|journal| {
            let journal = journal.replace(['{', '}'], "");
            let journal = PROCEEDINGS_PREFIX.replace(&journal, "");
            THE_PREFIX.replace(&journal, "").trim().to_string()
        })
        .unwrap_or_default();

    let conference = entry
        .field("booktitle")
        .or_else(|| entry.field("conference"))
        .map(|conference| {
            let conference = conference.replace(['{', '}'], "");
            PROCEEDINGS_PREFIX.replace(&conference, "").trim().to_string()
        })
        .unwrap_or_default();

    (journal, conference)
}

/// The first four-digit run in a `year` field.
pub fn extract_year(year_field: &str) -> Option<&str> {
    FOUR_DIGIT_YEAR.find(year_field).map(|m| m.as_str())
}

pub fn calculate_statistics(entries: &[BibEntry]) -> BibStats {
    let mut stats = BibStats {
        total_entries: entries.len(),
        ..BibStats::default()
    };

    for entry in entries {
        stats.entry_types.add(&entry.kind);

        if let Some(author_field) = entry.field("author") {
            for author in extract_authors(author_field) {
                stats.authors.add(&author);
            }
        }

        let (journal, conference) = extract_venues(entry);
        if !journal.is_empty() {
            stats.journals.add(&journal);
        }
        if !conference.is_empty() {
            stats.conferences.add(&conference);
        }

        if let Some(year) = entry.field("year").and_then(extract_year) {
            stats.years.add(year);
        }
    }

    stats
}
