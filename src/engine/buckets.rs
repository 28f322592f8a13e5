//! Coarse input classification.
//!
//! Every rule declares the buckets its pattern cannot match without. Before
//! the grammar runs, the normalized expression is scanned once and rules
//! whose buckets are not all present are skipped. The scan must only ever
//! over-approximate: a missing bucket has to imply that the rule's pattern
//! fails, so gating never changes which rule wins.

use crate::rules::time::helpers::{MONTHS, WEEKDAYS};

bitflags::bitflags! {
    /// Coarse features of a normalized expression.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Buckets: u8 {
        const HAS_DIGITS = 1 << 0;
        const MONTHISH   = 1 << 1;
        const WEEKDAYISH = 1 << 2;
    }
}

impl Buckets {
    /// Scan a normalized (lowercased, month-canonicalized) expression.
    pub fn scan(expr: &str) -> Self {
        let mut buckets = Buckets::empty();

        if expr.bytes().any(|b| b.is_ascii_digit()) {
            buckets |= Buckets::HAS_DIGITS;
        }
        // Substring checks: names appear with case suffixes attached.
        if MONTHS.iter().any(|month| expr.contains(month)) {
            buckets |= Buckets::MONTHISH;
        }
        if WEEKDAYS.iter().any(|day| expr.contains(day)) {
            buckets |= Buckets::WEEKDAYISH;
        }

        buckets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_detects_each_bucket() {
        assert_eq!(Buckets::scan("geçen hafta"), Buckets::empty());
        assert_eq!(Buckets::scan("3 gün önce"), Buckets::HAS_DIGITS);
        assert_eq!(Buckets::scan("ocakta"), Buckets::MONTHISH);
        assert_eq!(Buckets::scan("her pazartesi"), Buckets::WEEKDAYISH);
        assert_eq!(Buckets::scan("19 ağustos 2005"), Buckets::HAS_DIGITS | Buckets::MONTHISH);
    }

    #[test]
    fn suffixed_names_still_count() {
        assert!(Buckets::scan("cumartesiye").contains(Buckets::WEEKDAYISH));
        assert!(Buckets::scan("aralıktan beri").contains(Buckets::MONTHISH));
    }
}
