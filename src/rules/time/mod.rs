//! Turkish time grammar.
//!
//! Rules are evaluated in the order [`get`] returns them and the first rule
//! whose pattern matches the whole expression (and whose dates can be built)
//! wins, so specific patterns must precede the general ones they overlap.

pub mod constructor;
pub mod helpers;
pub mod rules_dates;
pub mod rules_days;
pub mod rules_holidays;
pub mod rules_instants;
pub mod rules_month_parts;
pub mod rules_months;
pub mod rules_periods;
pub mod rules_ranges;
pub mod rules_seasons;
pub mod rules_weeks;
pub mod rules_years;


use crate::Rule;

use self::{
    rules_dates::*, rules_days::*, rules_holidays::*, rules_instants::*, rules_month_parts::*, rules_months::*,
    rules_periods::*, rules_ranges::*, rules_seasons::*, rules_weeks::*, rules_years::*,
};

pub fn get() -> Vec<Rule> {
    vec![
        // instants
        rule_now(),
        rule_minutes_before(),
        rule_minutes_after(),
        rule_clock(),
        rule_pm_hour(),
        rule_pm(),
        rule_am_hour(),
        rule_am(),
        rule_day_after_tomorrow(),
        rule_next_weekday(),
        rule_previous_weekday(),
        rule_days_later(),
        rule_days_before(),
        rule_day_month(),
        rule_month_end(),
        rule_month_start(),
        rule_this_month_start(),
        rule_previous_month_start(),
        rule_this_month_end(),
        rule_day_of_this_month(),
        rule_day_of_previous_month(),
        rule_weeks_later_at_weekday(),
        rule_weeks_before_at_weekday(),
        // spans
        rule_day_month_year(),
        rule_month_year(),
        rule_today(),
        rule_yesterday(),
        rule_tomorrow(),
        rule_new_year(),
        rule_valentines_day(),
        rule_republic_day(),
        rule_childrens_day(),
        rule_labour_day(),
        rule_this_week(),
        rule_last_week(),
        rule_last_n_weeks(),
        rule_last_n_days(),
        rule_weekdays(),
        rule_weekend(),
        rule_this_year(),
        rule_last_year(),
        rule_last_year_month(),
        rule_one_year_later(),
        rule_years_before(),
        rule_this_month(),
        rule_next_month(),
        rule_previous_month(),
        rule_months_before(),
        rule_last_n_months(),
        rule_in_month(),
        rule_month(),
        rule_since_month(),
        rule_since_day_month(),
        rule_previous_month_until_today(),
        rule_between_months(),
        rule_day_month_to_day_month(),
        rule_numeric_date_range(),
        rule_numeric_date(),
        rule_dmy_to_dmy(),
        rule_day_to_dmy(),
        rule_day_to_day_month(),
        rule_dmy_to_day_month(),
        rule_day_month_to_dmy(),
        rule_first_n_months_of_year(),
        rule_last_n_months_of_year(),
        rule_first_week_of_month(),
        rule_whole_year(),
        rule_last_n_years(),
        rule_summer(),
        rule_winter(),
        rule_spring(),
        rule_autumn(),
        // periods
        rule_every_weekday(),
        rule_every_week(),
        rule_every_month(),
        rule_every_day_of_month(),
        rule_every_month_of_year(),
    ]
}
