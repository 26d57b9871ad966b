//! Line-oriented BibTeX reader.
//!
//! An entry starts on a line containing `@type{` and ends on the line that
//! brings its brace depth back to zero. Fields inside the entry are read by
//! a small scanner that understands `{...}` (nested), `"..."` and bare values.

use std::sync::LazyLock;

use regex::Regex;

use crate::schemas::bib_entry::BibEntry;

static ENTRY_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@(\w+)\s*\{").expect("valid entry header pattern"));

/// Decodes file contents as UTF-8, falling back to Latin-1 byte-for-byte.
pub fn decode_bibtex_bytes(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => e.into_bytes().iter().map(|&b| b as char).collect(),
    }
}

fn brace_balance(line: &str) -> i64 {
    line.chars().fold(0, |acc, c| match c {
        '{' => acc + 1,
        '}' => acc - 1,
        _ => acc,
    })
}

/// Starts an entry from its header line, or `None` if the line has no `@type{`.
fn parse_header(line: &str) -> Option<BibEntry> {
    let caps = ENTRY_HEADER.captures(line)?;
    let kind = caps[1].to_lowercase();
    let after_brace = &line[caps.get(0)?.end()..];
    let key = after_brace
        .split([',', '}'])
        .next()
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .unwrap_or("unknown");
    Some(BibEntry::new(kind, key))
}

/// Parses every entry in `text`.
pub fn parse_bibtex(text: &str) -> Vec<BibEntry> {
    let mut entries = Vec::new();
    // The open entry, its lines so far and its brace depth.
    let mut current: Option<(BibEntry, Vec<&str>, i64)> = None;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('%') {
            continue;
        }

        match current.as_mut() {
            None => {
                if !line.contains('@') {
                    continue;
                }
                let Some(mut entry) = parse_header(line) else {
                    continue;
                };
                let depth = brace_balance(line);
                if line.contains('}') && depth <= 0 {
                    parse_fields_into(&mut entry, line);
                    entries.push(entry);
                } else {
                    current = Some((entry, vec![line], depth));
                }
            }
            Some((_, lines, depth)) => {
                lines.push(line);
                *depth += brace_balance(line);
                if *depth <= 0 {
                    if let Some((mut entry, lines, _)) = current.take() {
                        parse_fields_into(&mut entry, &lines.join("\n"));
                        entries.push(entry);
                    }
                }
            }
        }
    }

    entries
}

/// Reads `name = value` pairs from the body of an entry (everything after the key).
fn parse_fields_into(entry: &mut BibEntry, entry_text: &str) {
    let body = match entry_text.split_once('\n') {
        Some((header, rest)) => match header.split_once(',') {
            Some((_, fields_on_header)) => format!("{fields_on_header}\n{rest}"),
            None => rest.to_string(),
        },
        None => entry_text
            .split_once(',')
            .map(|(_, rest)| rest.to_string())
            .unwrap_or_default(),
    };

    let mut scanner = FieldScanner::new(&body);
    while let Some((name, value)) = scanner.next_field() {
        entry.set_field(name, value);
    }
}

struct FieldScanner {
    chars: Vec<char>,
    pos: usize,
}

impl FieldScanner {
    fn new(body: &str) -> Self {
        Self {
            chars: body.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn skip_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.pos += 1;
        }
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let start = self.pos;
        self.skip_while(pred);
        self.chars[start..self.pos].iter().collect()
    }

    fn next_field(&mut self) -> Option<(String, String)> {
        loop {
            self.skip_while(|c| c.is_whitespace() || c == ',');
            // A bare closing brace here is the end of the entry.
            match self.peek() {
                None | Some('}') => return None,
                _ => {}
            }

            let name = self.take_while(|c| c.is_alphanumeric() || c == '_' || c == '-');
            if name.is_empty() {
                self.pos += 1;
                continue;
            }

            self.skip_while(char::is_whitespace);
            if self.peek() != Some('=') {
                self.skip_while(|c| c != ',');
                continue;
            }
            self.pos += 1;
            self.skip_while(char::is_whitespace);

            let value = self.read_value();
            return Some((name.to_lowercase(), clean_value(&value)));
        }
    }

    fn read_value(&mut self) -> String {
        match self.peek() {
            Some('{') => {
                self.pos += 1;
                self.read_until_close(true)
            }
            Some('"') => {
                self.pos += 1;
                self.read_until_close(false)
            }
            _ => self.take_while(|c| c != ',' && c != '}' && c != '\n'),
        }
    }

    /// Reads up to the unnested closing `}` (braced) or `"` (quoted) and consumes it.
    fn read_until_close(&mut self, braced: bool) -> String {
        let mut depth = 0usize;
        let mut value = String::new();
        while let Some(c) = self.peek() {
            self.pos += 1;
            match c {
                '{' => depth += 1,
                '}' if depth == 0 && braced => return value,
                '}' => depth = depth.saturating_sub(1),
                '"' if depth == 0 && !braced => return value,
                _ => {}
            }
            value.push(c);
        }
        value
    }
}

fn clean_value(value: &str) -> String {
    let collapsed = value.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.trim_end_matches(',').trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
% A comment line
@article{smith2020,
  author = {John Smith and Jane Doe},
  title = {A {Nested} Title},
  journal = "Journal of Things",
  year = 2020,
}

@InProceedings{ doe2021 ,
  Author = {Jane Doe},
  booktitle = {Proceedings of the Conference on Stuff},
  year = {2021}
}
"#;

    #[test]
    fn test_parses_types_and_keys() {
        let entries = parse_bibtex(SAMPLE);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind, "article");
        assert_eq!(entries[0].key, "smith2020");
        assert_eq!(entries[1].kind, "inproceedings");
        assert_eq!(entries[1].key, "doe2021");
    }

    #[test]
    fn test_parses_braced_quoted_and_bare_fields() {
        let entries = parse_bibtex(SAMPLE);
        let article = &entries[0];
        assert_eq!(article.field("author"), Some("John Smith and Jane Doe"));
        assert_eq!(article.field("title"), Some("A {Nested} Title"));
        assert_eq!(article.field("journal"), Some("Journal of Things"));
        assert_eq!(article.field("year"), Some("2020"));
    }

    #[test]
    fn test_field_names_are_lowercased() {
        let entries = parse_bibtex(SAMPLE);
        assert_eq!(entries[1].field("author"), Some("Jane Doe"));
    }

    #[test]
    fn test_single_line_entry() {
        let entries = parse_bibtex("@misc{note1, title = {Short}, year = 1999}\n");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].key, "note1");
        assert_eq!(entries[0].field("title"), Some("Short"));
        assert_eq!(entries[0].field("year"), Some("1999"));
    }

    #[test]
    fn test_multiline_value_is_collapsed() {
        let text = "@book{b1,\n  title = {A Long\n    Title},\n  year = {2001}\n}\n";
        let entries = parse_bibtex(text);
        assert_eq!(entries[0].field("title"), Some("A Long Title"));
    }

    #[test]
    fn test_missing_key_is_unknown() {
        let entries = parse_bibtex("@misc{,\n  year = {2000}\n}\n");
        assert_eq!(entries[0].key, "unknown");
    }

    #[test]
    fn test_latin1_fallback() {
        let bytes = b"@misc{k,\n  author = {Jos\xe9}\n}\n".to_vec();
        let text = decode_bibtex_bytes(bytes);
        let entries = parse_bibtex(&text);
        assert_eq!(entries[0].field("author"), Some("José"));
    }
}
