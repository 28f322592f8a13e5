//! Month spans: relative months, named months, and spans running up to today.

use crate::Rule;
use crate::engine::Buckets;
use crate::rules::time::constructor::{LAST_DAY, at, group};
use crate::rules::time::helpers::*;

const UNTIL_NOW: &str = "(?:bugüne|bu yana|yana|beri|sonra)";

/// "bu ay", "bu ay içinde"
pub fn rule_this_month() -> Rule {
    rule! {
        name: "this month",
        pattern: format!("bu {MONTH_NOUN}(?: {SPAN_IMPLYING})?"),
        span: [at().day(1).start_of_day(), at()],
    }
}

/// "gelecek ay", "önümüzdeki ayda"
pub fn rule_next_month() -> Rule {
    rule! {
        name: "next month",
        pattern: format!("{LATER} {MONTH_NOUN}(?:{CASE})?"),
        span: [
            at().dmonth(1).day(1).start_of_day(),
            at().dmonth(1).day(LAST_DAY).end_of_day(),
        ],
    }
}

/// "geçtiğimiz ay", "geçenlerde"
pub fn rule_previous_month() -> Rule {
    rule! {
        name: "previous month",
        pattern: format!("{BEFORE} {MONTH_NOUN}(?:{CASE})?|geçenlerde"),
        span: [
            at().dmonth(-1).day(1).start_of_day(),
            at().dmonth(-1).day(LAST_DAY).end_of_day(),
        ],
    }
}

/// "2 ay önce"
pub fn rule_months_before() -> Rule {
    rule! {
        name: "<n> months before",
        buckets: Buckets::HAS_DIGITS,
        pattern: format!("([1-9][0-9]*) {MONTH_NOUN} {BEFORE}"),
        span: [
            at().dmonth(group(1).negated()).day(1).start_of_day(),
            at().dmonth(group(1).negated()).day(LAST_DAY).end_of_day(),
        ],
    }
}

/// "son 6 ay", "son 6 ay içinde"
pub fn rule_last_n_months() -> Rule {
    rule! {
        name: "last <n> months",
        buckets: Buckets::HAS_DIGITS,
        pattern: format!("{BEFORE} ([01]?[0-9]) {MONTH_NOUN}(?:{CASE})?(?: {SPAN_IMPLYING})?"),
        span: [at().dmonth(group(1).negated()).day(1).start_of_day(), at()],
    }
}

/// "eylül ayında"
pub fn rule_in_month() -> Rule {
    rule! {
        name: "<month> month",
        buckets: Buckets::MONTHISH,
        pattern: format!("({MONTH_NAMES}) {MONTH_NOUN}(?:{CASE})?"),
        span: [
            at().month_name(1).day(1).start_of_day(),
            at().month_name(1).day(LAST_DAY).end_of_day(),
        ],
    }
}

/// "ocak", "ocakta"
pub fn rule_month() -> Rule {
    rule! {
        name: "<month>",
        buckets: Buckets::MONTHISH,
        pattern: format!("({MONTH_NAMES})(?:{CASE})?"),
        span: [
            at().month_name(1).day(1).start_of_day(),
            at().month_name(1).day(LAST_DAY).end_of_day(),
        ],
    }
}

/// "ocaktan beri", "ocak ayından bu yana"
pub fn rule_since_month() -> Rule {
    rule! {
        name: "since <month>",
        buckets: Buckets::MONTHISH,
        pattern: format!("({MONTH_NAMES})(?:{CASE})? (?:(?:{MONTH_NOUN}(?:{CASE})?|tarihinden) )?{UNTIL_NOW}"),
        span: [at().month_name(1).day(1).start_of_day().round_year(), at()],
    }
}

/// "12 aralıktan beri"
pub fn rule_since_day_month() -> Rule {
    rule! {
        name: "since <day> <month>",
        buckets: Buckets::HAS_DIGITS | Buckets::MONTHISH,
        pattern: format!(
            "([0-3]?[0-9]) ({MONTH_NAMES})(?:{CASE})? (?:(?:{MONTH_NOUN}(?:{CASE})?|tarihinden) )?{UNTIL_NOW}"
        ),
        span: [at().month_name(2).day(group(1)).start_of_day().round_year(), at()],
    }
}

/// "geçen aydan bugüne"
pub fn rule_previous_month_until_today() -> Rule {
    rule! {
        name: "previous month until today",
        pattern: format!("{BEFORE} {MONTH_NOUN}(?:{CASE})? bu(?:güne| yana)"),
        span: [at().dmonth(-1).day(1).start_of_day(), at()],
    }
}

/// "mayıs ve temmuz arasında", "mayıs ile temmuz ayları arasında"
pub fn rule_between_months() -> Rule {
    rule! {
        name: "between <month> and <month>",
        buckets: Buckets::MONTHISH,
        pattern: format!(
            "({MONTH_NAMES}){CONJUNCTION}({MONTH_NAMES})(?: {MONTH_NOUN}(?:{PLURAL})?(?:{POSSESSIVE}|{CASE})?)? {SPAN_IMPLYING}"
        ),
        span: [
            at().month_name(1).day(1).start_of_day(),
            at().month_name(2).day(LAST_DAY).end_of_day(),
        ],
    }
}
