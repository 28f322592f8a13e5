//! Last-resort parsing for expressions no grammar rule matches.

use chrono::{NaiveDateTime, TimeZone, Utc};
use chrono_english::{Dialect, parse_date_string};

/// A general-purpose date parser consulted when the grammar has no match.
///
/// Implementations return `None` for anything they cannot read; errors never
/// escape the resolver.
pub trait FallbackParser: Send + Sync {
    fn parse(&self, text: &str, reference: NaiveDateTime) -> Option<NaiveDateTime>;
}

/// Fallback backed by `chrono-english`.
///
/// Reads absolute dates (`2021-06-15`, `15/06/2021`) and English relative
/// phrases (`next friday`, `3 days ago`). The reference time is treated as
/// UTC and the result is returned naive.
#[derive(Debug, Clone, Copy)]
pub struct EnglishFallback {
    pub dialect: Dialect,
}

impl EnglishFallback {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }
}

impl Default for EnglishFallback {
    /// Day-first dates (`15/06/2021`), as written in Turkish.
    fn default() -> Self {
        Self::new(Dialect::Uk)
    }
}

impl FallbackParser for EnglishFallback {
    fn parse(&self, text: &str, reference: NaiveDateTime) -> Option<NaiveDateTime> {
        // chrono-english slices words by byte offset and panics inside
        // multi-byte letters; it reads only English anyway.
        if !text.is_ascii() {
            return None;
        }
        let now = Utc.from_utc_datetime(&reference);
        parse_date_string(text, now, self.dialect).ok().map(|date| date.naive_utc())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn reference() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 6, 15).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    #[test]
    fn reads_iso_dates() {
        let parsed = EnglishFallback::default().parse("2020-03-01", reference()).unwrap();
        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2020, 3, 1).unwrap());
    }

    #[test]
    fn unreadable_text_is_none() {
        assert_eq!(EnglishFallback::default().parse("elma armut", reference()), None);
    }

    #[test]
    fn turkish_letters_are_not_handed_to_the_parser() {
        let fallback = EnglishFallback::default();
        for word in ["geçen", "şubat", "ağustos", "yapıldı", "öğle", "üç"] {
            assert_eq!(fallback.parse(word, reference()), None, "{word}");
        }
    }
}
