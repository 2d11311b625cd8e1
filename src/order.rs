use std::cmp::Ordering;

/// Leading number of an entry name, taken from the segment before the first `.`
///
/// Names without a numeric prefix sort after every numbered name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Ordinal<'a> {
    Numbered(Digits<'a>),
    Unnumbered,
}

/// Decimal digits without leading zeros, ordered by numeric value at any length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digits<'a>(&'a str);

impl<'a> Digits<'a> {
    fn new(digits: &'a str) -> Self {
        Self(digits.trim_start_matches('0'))
    }

    pub fn as_str(&self) -> &'a str {
        if self.0.is_empty() { "0" } else { self.0 }
    }
}

impl Ord for Digits<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(other.0))
    }
}

impl PartialOrd for Digits<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub type OrdinalKey<'a> = (Ordinal<'a>, &'a str);

pub fn ordinal(name: &str) -> Ordinal<'_> {
    let prefix = name.split('.').next().unwrap_or_default();
    if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_digit()) {
        return Ordinal::Unnumbered;
    }
    Ordinal::Numbered(Digits::new(prefix))
}

pub fn ordinal_key(name: &str) -> OrdinalKey<'_> {
    (ordinal(name), name)
}

pub fn compare_ordinal(a: &str, b: &str) -> Ordering {
    ordinal_key(a).cmp(&ordinal_key(b))
}

pub fn sort_ordinal<S: AsRef<str>>(names: &mut [S]) {
    names.sort_by(|a, b| compare_ordinal(a.as_ref(), b.as_ref()));
}
