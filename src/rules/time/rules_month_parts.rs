//! Days inside a month: named days, month starts and ends.

use crate::Rule;
use crate::engine::Buckets;
use crate::rules::time::constructor::{LAST_DAY, at, group};
use crate::rules::time::helpers::*;

/// "19 ağustos", "19 ağustosta"
pub fn rule_day_month() -> Rule {
    rule! {
        name: "<day> <month>",
        buckets: Buckets::HAS_DIGITS | Buckets::MONTHISH,
        pattern: format!("([0-3]?[0-9]){DATE_SEP}({MONTH_NAMES})(?:{CASE})?"),
        instant: at().month_name(2).day(group(1)),
    }
}

/// "ağustos sonu", "ağustos ayı sonundaki"
pub fn rule_month_end() -> Rule {
    rule! {
        name: "end of <month>",
        buckets: Buckets::MONTHISH,
        pattern: format!("({MONTH_NAMES})(?:{CASE}| ayı)? sonu(?:ndaki)?"),
        instant: at().month_name(1).day(LAST_DAY),
    }
}

/// "ekim başı", "ekim ilk günü"
pub fn rule_month_start() -> Rule {
    rule! {
        name: "start of <month>",
        buckets: Buckets::MONTHISH,
        pattern: format!("({MONTH_NAMES})(?:{CASE})? (?:ilk günü(?:ndeki)?|başı(?:nda(?:ki)?)?)"),
        instant: at().month_name(1).day(1),
    }
}

/// "bu ayın ilk günü", "ay başında"
pub fn rule_this_month_start() -> Rule {
    rule! {
        name: "start of this month",
        pattern: format!("(?:bu )?{MONTH_NOUN} (?:{FIRST} günü(?:{CASE})?|başı(?:nda(?:ki)?)?|biri)"),
        instant: at().day(1),
    }
}

/// "geçen ayın birinci günü"
pub fn rule_previous_month_start() -> Rule {
    rule! {
        name: "start of previous month",
        pattern: format!("{BEFORE} {MONTH_NOUN} (?:(?:ilk|birinci) günü(?:ndeki)?|başı(?:nda(?:ki)?)?|biri)"),
        instant: at().dmonth(-1).day(1),
    }
}

/// "bu ayın sonu", "ayın son günü"
pub fn rule_this_month_end() -> Rule {
    rule! {
        name: "end of this month",
        pattern: format!("(?:bu )?{MONTH_NOUN} (?:sonu(?:ndaki)?|son günü)"),
        instant: at().day(LAST_DAY),
    }
}

/// "ayın 16sında"
pub fn rule_day_of_this_month() -> Rule {
    rule! {
        name: "<day> of this month",
        buckets: Buckets::HAS_DIGITS,
        pattern: format!("(?:bu )?{MONTH_NOUN} ([0-3]?[0-9])[ '.]?{GENITIVE}{CASE}"),
        instant: at().day(group(1)),
    }
}

/// "geçen ayın 16sında"
pub fn rule_day_of_previous_month() -> Rule {
    rule! {
        name: "<day> of previous month",
        buckets: Buckets::HAS_DIGITS,
        pattern: format!("{BEFORE} {MONTH_NOUN} ([0-3]?[0-9])[ '.]?{GENITIVE}{CASE}"),
        instant: at().dmonth(-1).day(group(1)),
    }
}

/// "ocak ayının birinci haftası"
pub fn rule_first_week_of_month() -> Rule {
    rule! {
        name: "first week of <month>",
        buckets: Buckets::MONTHISH,
        pattern: format!("({MONTH_NAMES}) {MONTH_NOUN}{CASE} (?:ilk|birinci) {WEEK_NOUN}"),
        span: [
            at().month_name(1).day(1).start_of_day(),
            at().month_name(1).day(7).end_of_day(),
        ],
    }
}
