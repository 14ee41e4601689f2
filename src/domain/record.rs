/// One extracted unit of page data: an ordered field-name to value mapping.
///
/// Field order is insertion order and doubles as display order. Lookups
/// never fail; an absent field reads as the empty string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self { fields: vec![] }
    }

    pub fn insert(&mut self, name: &str, value: String) {
        match self.fields.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value,
            None => self.fields.push((name.to_string(), value)),
        }
    }

    /// Field value, or `""` when the field was never extracted.
    pub fn get(&self, name: &str) -> &str {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    /// Field value, falling back to `default` when absent or empty.
    pub fn get_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        match self.get(name) {
            "" => default,
            value => value,
        }
    }

    pub fn has(&self, name: &str) -> bool {
        !self.get(name).is_empty()
    }
}
