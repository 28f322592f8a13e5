//! Recurrences. These produce a `{unit: anchor}` descriptor instead of
//! timestamps.

use crate::engine::Buckets;
use crate::rules::time::helpers::*;
use crate::{Anchor, RecurrenceUnit, Rule};

/// "her pazartesi", "her hafta cuma"
pub fn rule_every_weekday() -> Rule {
    rule! {
        name: "every <weekday>",
        buckets: Buckets::WEEKDAYISH,
        pattern: format!("her (?:{WEEK_NOUN} )?({DAY_NAMES})"),
        period: (RecurrenceUnit::Week, Anchor::Group(1)),
    }
}

/// "her hafta", "haftalık"
pub fn rule_every_week() -> Rule {
    rule! {
        name: "every week",
        pattern: format!("her {WEEK_NOUN}|haftalık"),
        period: (RecurrenceUnit::Week, Anchor::Literal("pazartesi")),
    }
}

/// "her ay", "aylık"
pub fn rule_every_month() -> Rule {
    rule! {
        name: "every month",
        pattern: format!("her {MONTH_NOUN}|aylık"),
        period: (RecurrenceUnit::Month, Anchor::Literal("1")),
    }
}

/// "her ayın 5inde"
pub fn rule_every_day_of_month() -> Rule {
    rule! {
        name: "every <day> of month",
        buckets: Buckets::HAS_DIGITS,
        pattern: format!("her {MONTH_NOUN} ([0-3]?[0-9])(?:{CASE})?"),
        period: (RecurrenceUnit::Month, Anchor::Group(1)),
    }
}

/// "her yıl mart ayında"
pub fn rule_every_month_of_year() -> Rule {
    rule! {
        name: "every <month> of year",
        buckets: Buckets::MONTHISH,
        pattern: format!("her {YEAR_NOUN} ({MONTH_NAMES}) {MONTH_NOUN}(?:{CASE})?"),
        period: (RecurrenceUnit::Year, Anchor::Group(1)),
    }
}
