//! Whole days relative to today.

use crate::Rule;
use crate::rules::time::constructor::at;
use crate::rules::time::helpers::*;

/// "bugün", "bugünkü", "gün içinde"
pub fn rule_today() -> Rule {
    rule! {
        name: "today",
        pattern: format!("bu ?gün(?:{PRONOUN})?|gün {SPAN_IMPLYING}"),
        span: [at().start_of_day(), at().end_of_day()],
    }
}

/// "dün", "dünkü", "geçen gün"
pub fn rule_yesterday() -> Rule {
    rule! {
        name: "yesterday",
        pattern: format!("dün(?:{PRONOUN})?|{BEFORE} gün"),
        span: [at().dday(-1).start_of_day(), at().dday(-1).end_of_day()],
    }
}

/// "yarın", "yarınki", "yarına"
pub fn rule_tomorrow() -> Rule {
    rule! {
        name: "tomorrow",
        pattern: format!("yarın(?:ki|{CASE})?"),
        span: [at().dday(1).start_of_day(), at().dday(1).end_of_day()],
    }
}
