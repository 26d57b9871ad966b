// BibTeX statistics: a forgiving line-based parser, aggregate counters and a
// Markdown report.

use std::fs;
use std::path::Path;

pub mod parser;
pub mod report;
pub mod stats;

use stats::BibStats;

/// Progress line printed to stderr for each input file.
pub fn processing_line(path: &Path) -> String {
    format!("Processing {}...", path.display())
}

/// Parses every file and aggregates their entries into one set of statistics.
pub fn analyze_files<P: AsRef<Path>>(paths: &[P]) -> std::io::Result<BibStats> {
    let mut entries = Vec::new();
    for path in paths {
        let path = path.as_ref();
        eprintln!("{}", processing_line(path));
        let text = parser::decode_bibtex_bytes(fs::read(path)?);
        entries.extend(parser::parse_bibtex(&text));
    }
    Ok(stats::calculate_statistics(&entries))
}
