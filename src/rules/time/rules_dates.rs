//! Calendar dates written out with a year.

use crate::Rule;
use crate::engine::Buckets;
use crate::rules::time::constructor::{LAST_DAY, at, group};
use crate::rules::time::helpers::*;

/// "19 ocak 2005", "19 ocak 2005'te"
pub fn rule_day_month_year() -> Rule {
    rule! {
        name: "<day> <month> <year>",
        buckets: Buckets::HAS_DIGITS | Buckets::MONTHISH,
        pattern: format!("([0-3]?[0-9]) ({MONTH_NAMES}) ({YEAR_ONLY})(?:{CASE})?"),
        span: [
            at().year(group(3)).month_name(2).day(group(1)).start_of_day(),
            at().year(group(3)).month_name(2).day(group(1)).end_of_day(),
        ],
    }
}

/// "ocak 2005"
pub fn rule_month_year() -> Rule {
    rule! {
        name: "<month> <year>",
        buckets: Buckets::HAS_DIGITS | Buckets::MONTHISH,
        pattern: format!("({MONTH_NAMES}) ({YEAR_ONLY})(?:{CASE})?"),
        span: [
            at().year(group(2)).month_name(1).day(1).start_of_day(),
            at().year(group(2)).month_name(1).day(LAST_DAY).end_of_day(),
        ],
    }
}

/// "15.06.2021", "15/06/2021'de"
pub fn rule_numeric_date() -> Rule {
    rule! {
        name: "dd.mm.yyyy",
        buckets: Buckets::HAS_DIGITS,
        pattern: format!("([0-3][0-9]){DATE_SEP}([01][0-9]){DATE_SEP}({YEAR_ONLY})(?:{CASE})?"),
        span: [
            at().year(group(3)).month(group(2)).day(group(1)).start_of_day(),
            at().year(group(3)).month(group(2)).day(group(1)).end_of_day(),
        ],
    }
}

/// "2017", "2017'de", "2017 yılında"
pub fn rule_whole_year() -> Rule {
    rule! {
        name: "<year>",
        buckets: Buckets::HAS_DIGITS,
        pattern: format!("({YEAR_ONLY})(?:{CASE}| {YEAR_NOUN}(?:{CASE})?)?"),
        span: [
            at().year(group(1)).month(1).day(1).start_of_day(),
            at().year(group(1)).month(12).day(LAST_DAY).end_of_day(),
        ],
    }
}
