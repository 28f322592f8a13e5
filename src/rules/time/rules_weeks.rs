//! Week spans.

use crate::Rule;
use crate::engine::Buckets;
use crate::rules::time::constructor::{at, group};
use crate::rules::time::helpers::*;

/// "bu hafta", "bu haftaki"
pub fn rule_this_week() -> Rule {
    rule! {
        name: "this week",
        pattern: format!("bu hafta(?:{PRONOUN})?"),
        span: [at().weekday(0).start_of_day(), at()],
    }
}

/// "geçen hafta"
pub fn rule_last_week() -> Rule {
    rule! {
        name: "last week",
        pattern: format!("{BEFORE} {WEEK_NOUN}"),
        span: [
            at().dweek(-1).weekday(0).start_of_day(),
            at().dweek(-1).weekday(6).end_of_day(),
        ],
    }
}

/// "son 3 hafta"
pub fn rule_last_n_weeks() -> Rule {
    rule! {
        name: "last <n> weeks",
        buckets: Buckets::HAS_DIGITS,
        pattern: format!("{BEFORE} ([1-9][0-9]*) {WEEK_NOUN}"),
        span: [at().dweek(group(1).negated()), at()],
    }
}

/// "son 3 gün içinde"
pub fn rule_last_n_days() -> Rule {
    rule! {
        name: "last <n> days",
        buckets: Buckets::HAS_DIGITS,
        pattern: format!("{BEFORE} ([1-9][0-9]*) gün(?:{PRONOUN}| {SPAN_IMPLYING})?"),
        span: [at().dday(group(1).negated()), at()],
    }
}

/// "hafta içi", "bu haftaiçinde"
pub fn rule_weekdays() -> Rule {
    rule! {
        name: "weekdays",
        pattern: format!("(?:bu )?hafta ?içi(?:{CASE})?"),
        span: [at().weekday(0).start_of_day(), at().weekday(4).end_of_day()],
    }
}

/// "hafta sonu", "geçen hafta sonunda"
pub fn rule_weekend() -> Rule {
    rule! {
        name: "weekend",
        pattern: format!("(?:{BEFORE} )?hafta ?sonu(?:{CASE})?"),
        span: [
            at().dweek(-1).weekday(5).start_of_day(),
            at().dweek(-1).weekday(6).end_of_day(),
        ],
    }
}
