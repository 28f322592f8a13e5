//! Year spans and months counted within a year.

use crate::Rule;
use crate::engine::Buckets;
use crate::rules::time::constructor::{LAST_DAY, at, group};
use crate::rules::time::helpers::*;

/// "bu yıl", "bu seneki"
pub fn rule_this_year() -> Rule {
    rule! {
        name: "this year",
        pattern: format!("bu {YEAR_NOUN}(?:{PRONOUN})?"),
        span: [at().month(1).day(1).start_of_day(), at()],
    }
}

/// "geçen yıl", "son 1 yılki", "1 sene önce"
pub fn rule_last_year() -> Rule {
    rule! {
        name: "last year",
        pattern: format!("{BEFORE}(?: 0*1)? {YEAR_NOUN}(?:{CASE}|{PRONOUN})?|0*1 {YEAR_NOUN} {BEFORE}"),
        span: [at().dyear(-1).start_of_day(), at()],
    }
}

/// "geçen yıl eylül ayında"
pub fn rule_last_year_month() -> Rule {
    rule! {
        name: "last year <month>",
        buckets: Buckets::MONTHISH,
        pattern: format!("{BEFORE} {YEAR_NOUN} ({MONTH_NAMES}) ayında"),
        span: [
            at().dyear(-1).month_name(1).day(1).start_of_day(),
            at().dyear(-1).month_name(1).day(LAST_DAY).end_of_day(),
        ],
    }
}

/// "1 yıl sonra", "1 yıla kadar", "gelecek yıl", "seneye"
pub fn rule_one_year_later() -> Rule {
    rule! {
        name: "one year later",
        pattern: format!(
            "(?:bir|0*1) {YEAR_NOUN}(?:{CASE})?(?: kadar)?(?: sonra(?:[sk][ıi])?)?|{LATER} {YEAR_NOUN}(?:{CASE})?|seneye"
        ),
        span: [at(), at().dyear(1)],
    }
}

/// "3 yıl önce"
pub fn rule_years_before() -> Rule {
    rule! {
        name: "<n> years before",
        buckets: Buckets::HAS_DIGITS,
        pattern: format!("([1-9][0-9]*) {YEAR_NOUN}(?:{CASE})? {BEFORE}"),
        span: [at().dyear(group(1).negated()).start_of_day(), at()],
    }
}

/// "yılın ilk 3 ayı"
pub fn rule_first_n_months_of_year() -> Rule {
    rule! {
        name: "first <n> months of the year",
        buckets: Buckets::HAS_DIGITS,
        pattern: format!("(?:bu )?{YEAR_NOUN}(?:{CASE})? ilk (1?[0-9]) {MONTH_NOUN}(?:{CASE})?"),
        span: [
            at().month(1).day(1).start_of_day(),
            at().month(group(1)).day(LAST_DAY).end_of_day(),
        ],
    }
}

/// "yılın son 3 ayı"
pub fn rule_last_n_months_of_year() -> Rule {
    rule! {
        name: "last <n> months of the year",
        buckets: Buckets::HAS_DIGITS,
        pattern: format!("(?:bu )?{YEAR_NOUN}(?:{CASE})? son ([0-9]) {MONTH_NOUN}(?:{CASE})?"),
        span: [
            // December counts as the first of the n months.
            at().month(12).dmonth(group(1).negated().plus(1)).day(1).start_of_day(),
            at().month(12).day(LAST_DAY).end_of_day(),
        ],
    }
}

/// "geçen 4 yılda"
pub fn rule_last_n_years() -> Rule {
    rule! {
        name: "last <n> years",
        buckets: Buckets::HAS_DIGITS,
        pattern: format!("{BEFORE} ([1-9][0-9]*) {YEAR_NOUN}(?:{CASE})?(?: {SPAN_IMPLYING})?"),
        span: [at().dyear(group(1).negated()).start_of_day(), at()],
    }
}
