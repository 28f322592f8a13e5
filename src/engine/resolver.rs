//! Single-expression resolution.
//!
//! ```text
//! expr ── normalize ──> "3 gün önce"        numerals as digits, lowercased,
//!                                           whole-expression month spellings
//!                                           canonicalized
//!      ── Buckets::scan ──> HAS_DIGITS      gate the grammar
//!      ── rules in order ──> first rule whose pattern matches and whose
//!                            dates can be built
//!      ── fallback ──> only for plausible leftovers
//! ```

use chrono::NaiveDateTime;
use tracing::{debug, trace};

use super::buckets::Buckets;
use crate::fallback::FallbackParser;
use crate::rules::numeral;
use crate::rules::time::helpers::months::canonical_month;
use crate::{ResolvedValue, Rule, locale};

/// Resolves candidate expressions against a grammar with a fixed reference
/// time.
pub struct Resolver<'a> {
    rules: &'a [Rule],
    reference: NaiveDateTime,
    fallback: Option<&'a dyn FallbackParser>,
}

impl<'a> Resolver<'a> {
    pub fn new(rules: &'a [Rule], reference: NaiveDateTime, fallback: Option<&'a dyn FallbackParser>) -> Self {
        Self { rules, reference, fallback }
    }

    /// Resolve one expression, or `None` if nothing recognizes it.
    pub fn resolve(&self, expr: &str) -> Option<ResolvedValue> {
        let normalized = normalize(expr);
        let buckets = Buckets::scan(&normalized);

        for rule in self.rules {
            if !buckets.contains(rule.buckets) {
                continue;
            }
            let Some(caps) = rule.pattern.captures(&normalized) else {
                continue;
            };
            match rule.apply(&caps, self.reference) {
                Some(value) => {
                    debug!(rule = rule.name, kind = rule.kind().as_str(), expr = %normalized, "rule matched");
                    return Some(value);
                }
                None => trace!(rule = rule.name, expr = %normalized, "pattern matched but no valid date"),
            }
        }

        self.fall_back(&normalized)
    }

    fn fall_back(&self, expr: &str) -> Option<ResolvedValue> {
        let fallback = self.fallback?;
        if !fallback_candidate(expr) {
            trace!(expr, "skipping fallback");
            return None;
        }

        let value = fallback.parse(expr, self.reference)?;
        debug!(expr, %value, "resolved by fallback parser");
        Some(ResolvedValue::Instant(value))
    }
}

/// Prepare an expression for the grammar.
///
/// The text is lowercased with Turkish rules, numerals that are not plain
/// digit strings are replaced by their integer value (`"üç gün önce"` ->
/// `"3 gün önce"`), and an expression that is only a month spelling is
/// mapped to the month's name.
pub fn normalize(expr: &str) -> String {
    let lowered = locale::lower(expr);
    let mut text = lowered.clone();

    // Right to left, so the ranges still to visit keep their positions.
    for range in numeral::rules::scan(&lowered).into_iter().rev() {
        let body = &lowered[range.clone()];
        if is_plain_digits(body) {
            continue;
        }
        let value = numeral::convert(body).trunc() as i64;
        text.replace_range(range, &value.to_string());
    }

    match canonical_month(&text) {
        Some(month) => month.to_string(),
        None => text,
    }
}

/// Digits once date and number separators are removed (`"15.06.2021"`).
fn is_plain_digits(text: &str) -> bool {
    let stripped: Vec<char> =
        text.chars().filter(|c| !matches!(c, '_' | ',' | ' ' | '-' | '.' | '\\' | '/' | '+' | '=')).collect();
    !stripped.is_empty() && stripped.iter().all(char::is_ascii_digit)
}

/// Whether an expression the grammar missed is worth handing to the fallback.
///
/// Bare numbers other than years, and anything arithmetic-looking, tend to
/// be misread as dates.
fn fallback_candidate(expr: &str) -> bool {
    if expr.is_empty() || expr.contains(['+', '=', '$']) {
        return false;
    }
    let all_digits = expr.bytes().all(|b| b.is_ascii_digit());
    !all_digits || regex!(r"^(?:19[0-9][0-9]|20[0-9][0-9])$").is_match(expr)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    struct Fixed;

    impl FallbackParser for Fixed {
        fn parse(&self, _text: &str, reference: NaiveDateTime) -> Option<NaiveDateTime> {
            Some(reference)
        }
    }

    fn reference() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 6, 15).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    #[test]
    fn normalize_substitutes_word_numerals() {
        assert_eq!(normalize("üç gün önce"), "3 gün önce");
        assert_eq!(normalize("Son İki Hafta"), "son 2 hafta");
        assert_eq!(normalize("yirmi beş dakika sonra"), "25 dakika sonra");
    }

    #[test]
    fn normalize_keeps_digit_strings() {
        assert_eq!(normalize("15.06.2021"), "15.06.2021");
        assert_eq!(normalize("3 gün önce"), "3 gün önce");
        assert_eq!(normalize("12:30"), "12:30");
    }

    #[test]
    fn normalize_canonicalizes_whole_month_spellings() {
        assert_eq!(normalize("Oca"), "ocak");
        assert_eq!(normalize("AĞUSTOSUN"), "ağustos");
        assert_eq!(normalize("may 2005"), "may 2005");
    }

    #[test]
    fn plain_digit_detection() {
        assert!(is_plain_digits("2017"));
        assert!(is_plain_digits("1.000.000"));
        assert!(is_plain_digits("3,5"));
        assert!(!is_plain_digits("iki"));
        assert!(!is_plain_digits("2 bin"));
        assert!(!is_plain_digits(""));
    }

    #[test]
    fn fallback_guard() {
        assert!(!fallback_candidate(""));
        assert!(!fallback_candidate("42"));
        assert!(!fallback_candidate("1+1"));
        assert!(!fallback_candidate("x=3"));
        assert!(!fallback_candidate("$5"));
        assert!(fallback_candidate("2017"));
        assert!(fallback_candidate("next friday"));
    }

    #[test]
    fn fallback_runs_only_after_a_total_miss() {
        let fallback = Fixed;
        let resolver = Resolver::new(&[], reference(), Some(&fallback));
        assert_eq!(resolver.resolve("anything"), Some(ResolvedValue::Instant(reference())));
        assert_eq!(resolver.resolve("42"), None);

        let without = Resolver::new(&[], reference(), None);
        assert_eq!(without.resolve("anything"), None);
    }
}
