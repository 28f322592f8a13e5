//! Seasons. "this" and "last" forms resolve alike: the most recent
//! occurrence that has already started.

use crate::Rule;
use crate::rules::time::constructor::{DateSpec, LAST_DAY, at};
use crate::rules::time::helpers::*;

fn season(first_month: i32, last_month: i32) -> [DateSpec; 2] {
    let mut end = at().month(last_month).day(LAST_DAY).end_of_day().round_year_by(first_month);
    if last_month < first_month {
        end = end.dyear(1);
    }
    [at().month(first_month).day(1).start_of_day().round_year(), end]
}

/// "yaz", "bu yaz", "geçen yazın"
pub fn rule_summer() -> Rule {
    let [start, end] = season(6, 8);
    rule! {
        name: "summer",
        pattern: format!("(?:(?:{BEFORE}|bu) )?yaz(?:{CASE})?"),
        span: [start, end],
    }
}

/// "kış", "geçen kışın"
pub fn rule_winter() -> Rule {
    let [start, end] = season(12, 2);
    rule! {
        name: "winter",
        pattern: format!("(?:(?:{BEFORE}|bu) )?kı[şs](?:{CASE})?"),
        span: [start, end],
    }
}

/// "ilkbahar", "geçen bahar"
pub fn rule_spring() -> Rule {
    let [start, end] = season(3, 5);
    rule! {
        name: "spring",
        // "son bahar" is autumn, so `son` is not accepted as a prefix here.
        pattern: format!("(?:(?:{BEFORE_STRICT}|bu) )?(?:ilk ?)?bahar(?:{CASE})?"),
        span: [start, end],
    }
}

/// "sonbahar", "geçen sonbaharda"
pub fn rule_autumn() -> Rule {
    let [start, end] = season(9, 11);
    rule! {
        name: "autumn",
        pattern: format!("(?:(?:{BEFORE}|bu) )?son ?bahar(?:{CASE})?"),
        span: [start, end],
    }
}
