//! Clock times and day-relative instants.

use crate::Rule;
use crate::engine::Buckets;
use crate::rules::time::constructor::{at, group, weekday_of};
use crate::rules::time::helpers::*;

/// "şimdi", "hemen", "birazdan"
pub fn rule_now() -> Rule {
    rule! {
        name: "now",
        pattern: format!("(?:şuan|şimdi|hemen|acil|birazdan|tez(?: zaman)?|derhal)(?:{CASE})?"),
        instant: at(),
    }
}

/// "5 dakika önce"
pub fn rule_minutes_before() -> Rule {
    rule! {
        name: "<n> minutes before",
        buckets: Buckets::HAS_DIGITS,
        pattern: format!("([0-9]+) {MINUTE_NOUN} {BEFORE}"),
        instant: at().dminute(group(1).negated()),
    }
}

/// "10 dkya", "10 dakika sonra"
pub fn rule_minutes_after() -> Rule {
    rule! {
        name: "<n> minutes after",
        buckets: Buckets::HAS_DIGITS,
        pattern: format!("([0-9]+) {MINUTE_NOUN}(?:y[ae]| {LATER})"),
        instant: at().dminute(group(1)),
    }
}

/// "12:59", "09.30"
pub fn rule_clock() -> Rule {
    rule! {
        name: "hh:mm",
        buckets: Buckets::HAS_DIGITS,
        pattern: "([012][0-9])[: ,.]([0-6][0-9])",
        instant: at().hour(group(1)).minute(group(2)),
    }
}

/// "akşamüstü 5"
pub fn rule_pm_hour() -> Rule {
    rule! {
        name: "evening <hour>",
        buckets: Buckets::HAS_DIGITS,
        pattern: format!("{PM} ([01]?[0-9])"),
        instant: at().hour(group(1)).dhour(12).minute(0).second(0),
    }
}

pub fn rule_pm() -> Rule {
    rule! {
        name: "evening",
        pattern: PM,
        instant: at().hms(17, 0, 0),
    }
}

/// "sabah 8"
pub fn rule_am_hour() -> Rule {
    rule! {
        name: "morning <hour>",
        buckets: Buckets::HAS_DIGITS,
        pattern: format!("{AM} ([01]?[0-9])"),
        instant: at().hour(group(1)).minute(0).second(0),
    }
}

pub fn rule_am() -> Rule {
    rule! {
        name: "morning",
        pattern: AM,
        instant: at().hms(8, 0, 0),
    }
}

/// "öbür gün", "öbürsü gün"
pub fn rule_day_after_tomorrow() -> Rule {
    rule! {
        name: "day after tomorrow",
        pattern: "öbür(?:sü)? gün",
        instant: at().dday(2),
    }
}

/// "önümüzdeki salı"
pub fn rule_next_weekday() -> Rule {
    rule! {
        name: "next <weekday>",
        buckets: Buckets::WEEKDAYISH,
        pattern: format!("{LATER} ({DAY_NAMES})"),
        instant: at().weekday(weekday_of(1)).dweek(1),
    }
}

/// "geçen salı"
pub fn rule_previous_weekday() -> Rule {
    rule! {
        name: "previous <weekday>",
        buckets: Buckets::WEEKDAYISH,
        pattern: format!("{BEFORE} ({DAY_NAMES})"),
        instant: at().weekday(weekday_of(1)).dweek(-1),
    }
}

/// "10 gün sonra", "3 gün içinde"
pub fn rule_days_later() -> Rule {
    rule! {
        name: "<n> days later",
        buckets: Buckets::HAS_DIGITS,
        pattern: "([0-9]+) gün (?:içinde|boyunca|sonra(?:sı(?:nda)?)?)",
        instant: at().dday(group(1)),
    }
}

/// "4 gün önce"
pub fn rule_days_before() -> Rule {
    rule! {
        name: "<n> days before",
        buckets: Buckets::HAS_DIGITS,
        pattern: format!("([0-9]+) gün {BEFORE}"),
        instant: at().dday(group(1).negated()),
    }
}

/// "<n> weeks later <weekday>": "2 hafta sonra pazartesi"
pub fn rule_weeks_later_at_weekday() -> Rule {
    rule! {
        name: "<n> weeks later <weekday>",
        buckets: Buckets::HAS_DIGITS | Buckets::WEEKDAYISH,
        pattern: format!("([0-9]+) {WEEK_NOUN} {LATER} ({DAY_NAMES})"),
        instant: at().dweek(group(1)).weekday(weekday_of(2)),
    }
}

/// "3 hafta önce pazartesi"
pub fn rule_weeks_before_at_weekday() -> Rule {
    rule! {
        name: "<n> weeks before <weekday>",
        buckets: Buckets::HAS_DIGITS | Buckets::WEEKDAYISH,
        pattern: format!("([0-9]+) {WEEK_NOUN} {BEFORE} ({DAY_NAMES})"),
        instant: at().dweek(group(1).negated()).weekday(weekday_of(2)),
    }
}
