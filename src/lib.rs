use chrono::NaiveDateTime;
use regex::{Captures, Regex};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod fallback;
pub mod locale;
mod rules;

pub use api::{
    Context, DateValue, NumeralMatch, Options, OverlapPolicy, TaggedSpan, convert_number, date_tagger, date_tagger_with,
    find_all, find_all_numbers, find_all_with, parse_date, parse_date_with,
};
pub use error::{Error, Result};
pub use fallback::{EnglishFallback, FallbackParser};

use crate::engine::Buckets;
use crate::rules::time::constructor::DateSpec;

// --- Resolved values --------------------------------------------------------

/// Unit of a recurring period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceUnit {
    Week,
    Month,
    Year,
}

impl RecurrenceUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            RecurrenceUnit::Week => "week",
            RecurrenceUnit::Month => "month",
            RecurrenceUnit::Year => "year",
        }
    }
}

/// A recurrence descriptor without an explicit end, e.g. "every monday".
///
/// Serializes as a single-entry map `{unit: anchor}`, e.g. `{"week": "pazartesi"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Period {
    pub unit: RecurrenceUnit,
    /// Either a weekday/month name, a day-of-month number, or a literal anchor.
    pub anchor: String,
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.unit.as_str(), &self.anchor)?;
        map.end()
    }
}

/// The value a temporal expression resolves to.
///
/// Equality is value equality; the tagger uses it to merge adjacent tokens
/// that resolved to the same thing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedValue {
    Instant(NaiveDateTime),
    /// Inclusive `[start, end]`. Start is not guaranteed to precede end.
    Span(NaiveDateTime, NaiveDateTime),
    Period(Period),
}

impl ResolvedValue {
    pub fn kind(&self) -> TagKind {
        match self {
            ResolvedValue::Instant(_) => TagKind::DateTime,
            ResolvedValue::Span(..) => TagKind::DateSpan,
            ResolvedValue::Period(_) => TagKind::DatePeriod,
        }
    }
}

/// Output type label of a tagged span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TagKind {
    #[serde(rename = "datetime")]
    DateTime,
    #[serde(rename = "date-span")]
    DateSpan,
    #[serde(rename = "date-period")]
    DatePeriod,
}

impl TagKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TagKind::DateTime => "datetime",
            TagKind::DateSpan => "date-span",
            TagKind::DatePeriod => "date-period",
        }
    }
}

// --- Grammar rules ----------------------------------------------------------

/// Where a period rule takes its anchor from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Anchor {
    Literal(&'static str),
    Group(usize),
}

/// Semantic action attached to a rule.
#[derive(Debug, Clone)]
pub(crate) enum Action {
    Instant(DateSpec),
    Span(DateSpec, DateSpec),
    Period { unit: RecurrenceUnit, anchor: Anchor },
}

/// A grammar rule: a name, a full-string `pattern`, and the action run on
/// its captures.
///
/// `buckets` lists the coarse input features the pattern cannot match
/// without; the resolver skips the rule early when one is missing.
#[derive(Debug)]
pub(crate) struct Rule {
    pub name: &'static str,
    pub pattern: Regex,
    pub action: Action,
    pub buckets: Buckets,
}

impl Rule {
    pub fn new(name: &'static str, pattern: impl AsRef<str>, action: Action, buckets: Buckets) -> Self {
        let anchored = format!("^(?:{})$", pattern.as_ref());
        let pattern =
            Regex::new(&anchored).unwrap_or_else(|err| panic!("rule '{name}' has an invalid pattern: {err}"));
        Rule { name, pattern, action, buckets }
    }

    pub fn kind(&self) -> TagKind {
        match self.action {
            Action::Instant(_) => TagKind::DateTime,
            Action::Span(..) => TagKind::DateSpan,
            Action::Period { .. } => TagKind::DatePeriod,
        }
    }

    /// Run the action against the captures of a successful match.
    ///
    /// `None` means the captured values did not form a valid date; the
    /// resolver then moves on to the next rule.
    pub fn apply(&self, caps: &Captures<'_>, reference: NaiveDateTime) -> Option<ResolvedValue> {
        match &self.action {
            Action::Instant(at) => at.build(caps, reference).map(ResolvedValue::Instant),
            Action::Span(start, end) => {
                let start = start.build(caps, reference)?;
                let end = end.build(caps, reference)?;
                Some(ResolvedValue::Span(start, end))
            }
            Action::Period { unit, anchor } => {
                let anchor = match anchor {
                    Anchor::Literal(value) => (*value).to_string(),
                    Anchor::Group(idx) => caps.get(*idx)?.as_str().to_string(),
                };
                Some(ResolvedValue::Period(Period { unit: *unit, anchor }))
            }
        }
    }
}
