/// A single `@type{key, field = value, ...}` record from a `.bib` file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BibEntry {
    /// Entry type, lower-cased (`article`, `inproceedings`, ...).
    pub kind: String,
    /// Citation key, or `unknown` when the header carries none.
    pub key: String,
    /// Fields in file order. Names are lower-cased; a repeated name keeps its last value.
    pub fields: Vec<(String, String)>,
}

impl BibEntry {
    pub fn new(kind: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            key: key.into(),
            fields: Vec::new(),
        }
    }

    /// Returns the value of `name`, treating an empty value as absent.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
            .filter(|value| !value.is_empty())
    }

    /// Inserts or replaces a field.
    pub fn set_field(&mut self, name: String, value: String) {
        match self.fields.iter_mut().find(|(field, _)| *field == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
    }
}
