//! Fixed-date public holidays.
//!
//! Apart from new year, a holiday whose month lies after the reference month
//! resolves to last year's occurrence.

use crate::Rule;
use crate::rules::time::constructor::{DateSpec, at};
use crate::rules::time::helpers::*;

fn holiday(month: i32, day: i32) -> [DateSpec; 2] {
    let date = at().month(month).day(day).round_year();
    [date.clone().start_of_day(), date.end_of_day()]
}

/// "yılbaşı", "yıl başında"
pub fn rule_new_year() -> Rule {
    rule! {
        name: "new year",
        pattern: format!("yıl ?ba[sş][iı](?:{CASE})?"),
        span: [at().month(1).day(1).start_of_day(), at().month(1).day(1).end_of_day()],
    }
}

/// "sevgililer günü"
pub fn rule_valentines_day() -> Rule {
    let [start, end] = holiday(2, 14);
    rule! {
        name: "valentine's day",
        pattern: format!("sevgililer g[uü]n[uü](?:{CASE})?"),
        span: [start, end],
    }
}

/// "cumhuriyet bayramında"
pub fn rule_republic_day() -> Rule {
    let [start, end] = holiday(10, 29);
    rule! {
        name: "republic day",
        pattern: format!("cumhuriyet bayram[iı](?:{CASE})?"),
        span: [start, end],
    }
}

/// "çocuk bayramı", "çocuk şenliği"
pub fn rule_childrens_day() -> Rule {
    let [start, end] = holiday(4, 23);
    rule! {
        name: "children's day",
        pattern: format!("[çc]ocuk (?:bayram[iı]|[şs]enli[ğg]i)(?:{CASE})?"),
        span: [start, end],
    }
}

/// "işçi bayramı"
pub fn rule_labour_day() -> Rule {
    let [start, end] = holiday(5, 1);
    rule! {
        name: "labour day",
        pattern: format!("i[şs][çc]i bayram[iı](?:{CASE})?"),
        span: [start, end],
    }
}
