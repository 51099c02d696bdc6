//! Ordered keyword rule tables.
//!
//! Patterns are stored lower-case and matched against lower-cased input, so
//! every table is case-insensitive.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Contains,
    Prefix,
}

#[derive(Debug, Clone, Copy)]
pub struct KeywordRule<T> {
    pub patterns: &'static [&'static str],
    pub kind: MatchKind,
    pub result: T,
    /// Table-specific weight (symptom severity, for example). Ties keep table order.
    pub priority: u8,
}

impl<T> KeywordRule<T> {
    pub const fn contains(patterns: &'static [&'static str], result: T, priority: u8) -> Self {
        Self { patterns, kind: MatchKind::Contains, result, priority }
    }

    pub const fn prefix(patterns: &'static [&'static str], result: T) -> Self {
        Self { patterns, kind: MatchKind::Prefix, result, priority: 0 }
    }

    /// `lowered` must already be lower-case.
    pub fn matches(&self, lowered: &str) -> bool {
        self.patterns.iter().any(|p| match self.kind {
            MatchKind::Contains => lowered.contains(p),
            MatchKind::Prefix => lowered.starts_with(p),
        })
    }
}

pub fn first_match<'r, T>(rules: &'r [KeywordRule<T>], text: &str) -> Option<&'r KeywordRule<T>> {
    let lowered = text.to_lowercase();
    rules.iter().find(|r| r.matches(&lowered))
}

pub fn all_matches<'r, T>(rules: &'r [KeywordRule<T>], text: &str) -> Vec<&'r KeywordRule<T>> {
    let lowered = text.to_lowercase();
    rules.iter().filter(|r| r.matches(&lowered)).collect()
}

pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    let lowered = text.to_lowercase();
    keywords.iter().any(|k| lowered.contains(k))
}
