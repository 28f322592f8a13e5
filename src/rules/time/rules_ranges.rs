//! Explicit date ranges: "<date> ile <date> arasında".
//!
//! The two ends may be joined by a date separator or a conjunction. Start
//! dates open at 00:00:00, end dates close at 23:59:59.

use crate::Rule;
use crate::engine::Buckets;
use crate::rules::time::constructor::{at, group};
use crate::rules::time::helpers::*;

const DAY: &str = "([0-3]?[0-9])";
const BETWEEN: &str = "(?: tarihleri)? arası";

/// "10 ocak ile 12 mayıs arasında"
pub fn rule_day_month_to_day_month() -> Rule {
    rule! {
        name: "<day> <month> - <day> <month>",
        buckets: Buckets::HAS_DIGITS | Buckets::MONTHISH,
        pattern: format!(
            "{DAY} ({MONTH_NAMES})(?:{DATE_SEP}|{CONJUNCTION}){DAY} ({MONTH_NAMES}){BETWEEN}(?:{CASE})?"
        ),
        span: [
            at().month_name(2).day(group(1)).start_of_day(),
            at().month_name(4).day(group(3)).end_of_day(),
        ],
    }
}

/// "01.02.2017 - 05.02.2017", "01.02.2017 ve 05.02.2017 tarihleri arasında"
pub fn rule_numeric_date_range() -> Rule {
    let dmy = format!("([0-3][0-9]){DATE_SEP}([01][0-9]){DATE_SEP}({YEAR_ONLY})");
    rule! {
        name: "dd.mm.yyyy - dd.mm.yyyy",
        buckets: Buckets::HAS_DIGITS,
        pattern: format!("{dmy}(?:{DATE_SEP}|{CONJUNCTION})?{dmy}(?: (?:tarihleri )?arası(?:{CASE})?)?"),
        span: [
            at().year(group(3)).month(group(2)).day(group(1)).start_of_day(),
            at().year(group(6)).month(group(5)).day(group(4)).end_of_day(),
        ],
    }
}

/// "12 aralık 2017 ve 13 ocak 2018 arasında"
pub fn rule_dmy_to_dmy() -> Rule {
    rule! {
        name: "<day> <month> <year> - <day> <month> <year>",
        buckets: Buckets::HAS_DIGITS | Buckets::MONTHISH,
        pattern: format!(
            "{DAY} ({MONTH_NAMES}) ({YEAR_ONLY})(?:{DATE_SEP}|{CONJUNCTION}){DAY} ({MONTH_NAMES}) ({YEAR_ONLY}){BETWEEN}(?:{CASE})?"
        ),
        span: [
            at().year(group(3)).month_name(2).day(group(1)).start_of_day(),
            at().year(group(6)).month_name(5).day(group(4)).end_of_day(),
        ],
    }
}

/// "10 15 şubat 2017 tarihleri arasında"
pub fn rule_day_to_dmy() -> Rule {
    rule! {
        name: "<day> - <day> <month> <year>",
        buckets: Buckets::HAS_DIGITS | Buckets::MONTHISH,
        pattern: format!(
            "{DAY}(?:{DATE_SEP}|{CONJUNCTION}| ){DAY} ({MONTH_NAMES}) ({YEAR_ONLY}){BETWEEN}(?:{CASE})?"
        ),
        span: [
            at().year(group(4)).month_name(3).day(group(1)).start_of_day(),
            at().year(group(4)).month_name(3).day(group(2)).end_of_day(),
        ],
    }
}

/// "10 15 şubat tarihleri arasında"
pub fn rule_day_to_day_month() -> Rule {
    rule! {
        name: "<day> - <day> <month>",
        buckets: Buckets::HAS_DIGITS | Buckets::MONTHISH,
        pattern: format!("{DAY}(?:{DATE_SEP}|{CONJUNCTION}| ){DAY} ({MONTH_NAMES}){BETWEEN}(?:{CASE})?"),
        span: [
            at().month_name(3).day(group(1)).start_of_day(),
            at().month_name(3).day(group(2)).end_of_day(),
        ],
    }
}

/// "21 mart 2017 ve 29 mart arasında"
pub fn rule_dmy_to_day_month() -> Rule {
    rule! {
        name: "<day> <month> <year> - <day> <month>",
        buckets: Buckets::HAS_DIGITS | Buckets::MONTHISH,
        pattern: format!(
            "{DAY} ({MONTH_NAMES}) ({YEAR_ONLY})(?:{DATE_SEP}|{CONJUNCTION}){DAY} ({MONTH_NAMES}){BETWEEN}(?:{CASE})?"
        ),
        span: [
            at().year(group(3)).month_name(2).day(group(1)).start_of_day(),
            at().year(group(3)).month_name(5).day(group(4)).end_of_day(),
        ],
    }
}

/// "21 mart ve 29 mart 2017 arasında"
pub fn rule_day_month_to_dmy() -> Rule {
    rule! {
        name: "<day> <month> - <day> <month> <year>",
        buckets: Buckets::HAS_DIGITS | Buckets::MONTHISH,
        pattern: format!(
            "{DAY} ({MONTH_NAMES})(?:{DATE_SEP}|{CONJUNCTION}){DAY} ({MONTH_NAMES}) ({YEAR_ONLY}){BETWEEN}(?:{CASE})?"
        ),
        span: [
            at().year(group(5)).month_name(2).day(group(1)).start_of_day(),
            at().year(group(5)).month_name(4).day(group(3)).end_of_day(),
        ],
    }
}
