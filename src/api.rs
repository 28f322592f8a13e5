use std::fmt;
use std::sync::Arc;

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::engine::{Resolver, Tagger};
use crate::error::Result;
use crate::fallback::{EnglishFallback, FallbackParser};
use crate::rules::numeral;
use crate::{Period, ResolvedValue, Rule, TagKind};

pub use crate::rules::numeral::NumeralMatch;

pub(crate) static DEFAULT_RULES: Lazy<Vec<Rule>> = Lazy::new(crate::rules::time::get);

/// Resolution context.
///
/// Holds the clock relative expressions ("dün", "geçen hafta") are resolved
/// against. Every window of one sentence is resolved with the same reference.
#[derive(Debug, Clone)]
pub struct Context {
    pub reference_time: NaiveDateTime,
}

impl Default for Context {
    fn default() -> Self {
        if cfg!(test) {
            let date = NaiveDate::from_ymd_opt(2021, 6, 15).unwrap();
            let time = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
            Self { reference_time: NaiveDateTime::new(date, time) }
        } else {
            Self { reference_time: Local::now().naive_local() }
        }
    }
}

/// What to do when windows of equal size overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlapPolicy {
    /// Every successful window overwrites its tokens, so a later window of
    /// the same size can take tokens from an earlier one.
    #[default]
    LastWriteWins,
    /// A window overwrites only when it is longer than every window that
    /// already tagged one of its tokens.
    LongestMatch,
}

/// Options that affect resolution.
#[derive(Clone)]
pub struct Options {
    /// Parser consulted when no grammar rule matches; `None` disables it.
    pub fallback: Option<Arc<dyn FallbackParser>>,
    pub overlap: OverlapPolicy,
}

impl Default for Options {
    fn default() -> Self {
        Self { fallback: Some(Arc::new(EnglishFallback::default())), overlap: OverlapPolicy::default() }
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("fallback", &self.fallback.as_ref().map(|_| "..."))
            .field("overlap", &self.overlap)
            .finish()
    }
}

impl Options {
    pub fn without_fallback(mut self) -> Self {
        self.fallback = None;
        self
    }

    pub fn with_fallback(mut self, fallback: impl FallbackParser + 'static) -> Self {
        self.fallback = Some(Arc::new(fallback));
        self
    }

    pub fn with_overlap(mut self, overlap: OverlapPolicy) -> Self {
        self.overlap = overlap;
        self
    }
}

/// Either end of a tagged span: a timestamp, or for periods the
/// `{unit: anchor}` descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DateValue {
    Timestamp(NaiveDateTime),
    Period(Period),
}

/// A temporal expression found in a sentence.
///
/// `start_index`/`end_index` are character offsets into the input,
/// `end_index` exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaggedSpan {
    pub start_index: usize,
    pub end_index: usize,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: TagKind,
    pub start_date: DateValue,
    pub end_date: DateValue,
}

impl TaggedSpan {
    pub(crate) fn new(start_index: usize, token: &str, value: &ResolvedValue) -> Self {
        let (start_date, end_date) = match value {
            ResolvedValue::Instant(at) => (DateValue::Timestamp(*at), DateValue::Timestamp(*at)),
            ResolvedValue::Span(start, end) => (DateValue::Timestamp(*start), DateValue::Timestamp(*end)),
            ResolvedValue::Period(period) => (DateValue::Period(period.clone()), DateValue::Period(period.clone())),
        };

        TaggedSpan {
            start_index,
            end_index: start_index + token.chars().count(),
            text: token.to_string(),
            kind: value.kind(),
            start_date,
            end_date,
        }
    }
}

fn resolver<'a>(context: &Context, options: &'a Options) -> Resolver<'a> {
    Resolver::new(&DEFAULT_RULES, context.reference_time, options.fallback.as_deref())
}

/// Find every temporal expression in `text` using a default [`Context`] and
/// [`Options`].
///
/// # Example
/// ```
/// use tarih::find_all;
///
/// let spans = find_all("toplantı geçen hafta yapıldı").unwrap();
/// assert_eq!(spans[0].text, "geçen hafta");
/// ```
pub fn find_all(text: &str) -> Result<Vec<TaggedSpan>> {
    find_all_with(text, &Context::default(), &Options::default())
}

pub fn find_all_with(text: &str, context: &Context, options: &Options) -> Result<Vec<TaggedSpan>> {
    Tagger::new(resolver(context, options), options.overlap).spans(text)
}

/// Tag each space-separated token of `sentence`; tokens that are not part
/// of a temporal expression get `None`.
pub fn date_tagger(sentence: &str) -> Vec<Option<ResolvedValue>> {
    date_tagger_with(sentence, &Context::default(), &Options::default())
}

pub fn date_tagger_with(sentence: &str, context: &Context, options: &Options) -> Vec<Option<ResolvedValue>> {
    Tagger::new(resolver(context, options), options.overlap).tag(sentence)
}

/// Resolve a whole expression, e.g. `"3 gün önce"`.
pub fn parse_date(expr: &str) -> Option<ResolvedValue> {
    parse_date_with(expr, &Context::default(), &Options::default())
}

pub fn parse_date_with(expr: &str, context: &Context, options: &Options) -> Option<ResolvedValue> {
    resolver(context, options).resolve(expr)
}

/// Find every numeral in `text`.
pub fn find_all_numbers(text: &str) -> Vec<NumeralMatch> {
    numeral::find_all(text)
}

/// Numeric value of a numeral expression (`"yüz yirmi üç"` -> `123.0`).
pub fn convert_number(text: &str) -> f64 {
    numeral::convert(text)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::RecurrenceUnit;

    fn ymd_hms(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, s).unwrap()
    }

    fn parse(expr: &str) -> Option<ResolvedValue> {
        parse_date_with(expr, &Context::default(), &Options::default().without_fallback())
    }

    #[test]
    fn days_before() {
        assert_eq!(parse("3 gün önce"), Some(ResolvedValue::Instant(ymd_hms(2021, 6, 12, 12, 0, 0))));
    }

    #[test]
    fn last_week_spans_monday_to_sunday() {
        assert_eq!(
            parse("geçen hafta"),
            Some(ResolvedValue::Span(ymd_hms(2021, 6, 7, 0, 0, 0), ymd_hms(2021, 6, 13, 23, 59, 59)))
        );
    }

    #[test]
    fn bare_year() {
        assert_eq!(
            parse("2017"),
            Some(ResolvedValue::Span(ymd_hms(2017, 1, 1, 0, 0, 0), ymd_hms(2017, 12, 31, 23, 59, 59)))
        );
    }

    #[test]
    fn number_words() {
        assert_eq!(convert_number("yüz yirmi üç"), 123.0);
    }

    #[test]
    fn month_and_year() {
        assert_eq!(
            parse("ocak 2005"),
            Some(ResolvedValue::Span(ymd_hms(2005, 1, 1, 0, 0, 0), ymd_hms(2005, 1, 31, 23, 59, 59)))
        );
    }

    #[test]
    fn every_monday() {
        assert_eq!(
            parse("her pazartesi"),
            Some(ResolvedValue::Period(Period { unit: RecurrenceUnit::Week, anchor: "pazartesi".to_string() }))
        );
    }

    #[test]
    fn unknown_expression_without_fallback() {
        assert_eq!(parse("elma"), None);
        assert_eq!(parse(""), None);
    }

    #[test]
    fn fallback_reads_what_the_grammar_misses() {
        let value = parse_date_with("2020-03-01", &Context::default(), &Options::default());
        let Some(ResolvedValue::Instant(at)) = value else {
            panic!("expected an instant, got {value:?}");
        };
        assert_eq!(at.date(), NaiveDate::from_ymd_opt(2020, 3, 1).unwrap());
    }

    #[test]
    fn find_all_serializes_spans() {
        let options = Options::default().without_fallback();
        let spans = find_all_with("her pazartesi geçen hafta", &Context::default(), &options).unwrap();
        let json = serde_json::to_value(&spans).unwrap();

        assert_eq!(
            json,
            serde_json::json!([
                {
                    "start_index": 0,
                    "end_index": 13,
                    "text": "her pazartesi",
                    "type": "date-period",
                    "start_date": {"week": "pazartesi"},
                    "end_date": {"week": "pazartesi"},
                },
                {
                    "start_index": 14,
                    "end_index": 25,
                    "text": "geçen hafta",
                    "type": "date-span",
                    "start_date": "2021-06-07T00:00:00",
                    "end_date": "2021-06-13T23:59:59",
                },
            ])
        );
    }

    #[test]
    fn default_options_tag_turkish_sentences() {
        let spans = find_all("toplantı geçen hafta yapıldı").unwrap();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "geçen hafta");
        assert_eq!((spans[0].start_index, spans[0].end_index), (9, 20));

        let spans = find_all("çarşamba öğleden sonra görüşürüz").unwrap();
        assert!(spans.iter().all(|span| span.text != "görüşürüz"));
    }

    #[test]
    fn default_options_still_use_the_fallback_for_ascii() {
        let spans = find_all("2020-03-01").unwrap();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].kind, TagKind::DateTime);
    }

    #[test]
    fn date_tagger_has_one_tag_per_token() {
        let tags = date_tagger_with("yarın gel", &Context::default(), &Options::default().without_fallback());
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0], Some(ResolvedValue::Span(ymd_hms(2021, 6, 16, 0, 0, 0), ymd_hms(2021, 6, 16, 23, 59, 59))));
        assert_eq!(tags[1], None);
    }

    #[test]
    fn numbers_are_found_in_sentences() {
        let found = find_all_numbers("iki bin yirmi bir yılında");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].value, 2021.0);
    }

    #[test]
    fn options_debug_hides_the_parser() {
        let debug = format!("{:?}", Options::default());
        assert!(debug.contains("LastWriteWins"));
    }
}
