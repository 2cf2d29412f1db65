//! Repair rules for the near-JSON encoding of relation cells.
//!
//! The source writes lists of objects with single-quoted strings, sometimes
//! drops the comma between adjacent objects, and sprinkles non-breaking spaces.
//! Each defect has one rule; the pipeline runs them in a fixed order.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// `}` and `{` separated only by whitespace.
static OBJECT_SEPARATOR_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\}\s*\{").ok());

/// One structural repair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepairRule {
    /// `'` → `"`.
    SingleQuotes,
    /// `}{` / `} {` → `},{`.
    MissingObjectSeparator,
    /// U+00A0 → space.
    NonBreakingSpace,
}

impl RepairRule {
    /// Apply the rule, borrowing when there is nothing to change.
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            Self::SingleQuotes => {
                if text.contains('\'') {
                    Cow::Owned(text.replace('\'', "\""))
                } else {
                    Cow::Borrowed(text)
                }
            }
            Self::MissingObjectSeparator => match OBJECT_SEPARATOR_RE.as_ref() {
                Some(re) => re.replace_all(text, "},{"),
                None => Cow::Borrowed(text),
            },
            Self::NonBreakingSpace => {
                if text.contains('\u{a0}') {
                    Cow::Owned(text.replace('\u{a0}', " "))
                } else {
                    Cow::Borrowed(text)
                }
            }
        }
    }
}

/// The rule order used for every cell. Quotes are fixed before separators so
/// the separator rule sees the final brace layout.
pub const STANDARD_RULES: [RepairRule; 3] = [
    RepairRule::SingleQuotes,
    RepairRule::MissingObjectSeparator,
    RepairRule::NonBreakingSpace,
];

/// An ordered list of repair rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairPipeline {
    rules: Vec<RepairRule>,
}

impl RepairPipeline {
    pub fn new(rules: Vec<RepairRule>) -> Self {
        Self { rules }
    }

    /// Pipeline running [`STANDARD_RULES`].
    pub fn standard() -> Self {
        Self::new(STANDARD_RULES.to_vec())
    }

    pub fn repair<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        repair_with(&self.rules, raw)
    }
}

impl Default for RepairPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

/// Run `rules` in order over `raw`.
pub fn repair_with<'a>(rules: &[RepairRule], raw: &'a str) -> Cow<'a, str> {
    let mut text = Cow::Borrowed(raw);
    for rule in rules {
        let changed = match rule.apply(&text) {
            Cow::Owned(s) => Some(s),
            Cow::Borrowed(_) => None,
        };
        if let Some(s) = changed {
            text = Cow::Owned(s);
        }
    }
    text
}
