//! Markdown rendering of `BibStats`.

use std::path::Path;

use super::stats::{BibStats, Tally};

const TOP_N: usize = 10;

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

fn push_ranked_table(out: &mut Vec<String>, heading: &str, column: &str, tally: &Tally) {
    if tally.is_empty() {
        return;
    }
    out.push(format!("### {heading}"));
    out.push(format!("| Rank | {column} | Count |"));
    out.push(format!("|------|{}|-------|", "-".repeat(column.len() + 2)));
    for (rank, (name, count)) in tally.most_common(TOP_N).into_iter().enumerate() {
        out.push(format!("| {} | {} | {} |", rank + 1, escape_cell(name), count));
    }
    out.push(String::new());
}

/// Renders the report. Only the basename of each input file is listed.
pub fn format_markdown<P: AsRef<Path>>(stats: &BibStats, filenames: &[P]) -> String {
    let mut out = vec!["# BibTeX Statistics Report".to_string(), String::new()];

    out.push("## Files Analyzed".to_string());
    for filename in filenames {
        let path = filename.as_ref();
        let base = path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        out.push(format!("- `{base}`"));
    }
    out.push(String::new());

    out.push("## Summary Statistics".to_string());
    out.push(format!("- **Total publications:** {}", stats.total_entries));
    out.push(String::new());

    if !stats.entry_types.is_empty() {
        out.push("### Publication Types".to_string());
        for (kind, count) in stats.entry_types.by_count() {
            out.push(format!("- `{kind}`: {count}"));
        }
        out.push(String::new());
    }

    push_ranked_table(&mut out, "Top 10 Authors", "Author", &stats.authors);
    push_ranked_table(&mut out, "Top 10 Journals", "Journal", &stats.journals);
    push_ranked_table(&mut out, "Top 10 Conferences", "Conference", &stats.conferences);
    push_ranked_table(&mut out, "Publication Years (Top 10)", "Year", &stats.years);

    out.join("\n")
}
