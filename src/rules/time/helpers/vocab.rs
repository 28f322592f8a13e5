//! Regex fragments shared by the time grammar.
//!
//! Fragments are plain alternations without anchors; rules splice them into
//! their patterns with `format!`. None of them opens a capture group.

macro_rules! case_suffix {
    () => {
        r#"['."]?[yşsn]?(?: ?(?:[dt][ea](?:n|k[iı])?)|[iıuü]?nd[ae]n?| ?[ae]| ?[iıuü]n?)"#
    };
}

macro_rules! genitive {
    () => {
        "(?:[yşsn]?[ıiuü]n)"
    };
}

/// Case endings: locative, ablative, dative, accusative and their buffer
/// consonants (`ocakta`, `mayısın`, `2020'de`).
pub const CASE: &str = case_suffix!();
pub const GENITIVE: &str = genitive!();
pub const PRONOUN: &str = "(?:(?:[dt][ea])?k[iü])";
pub const PLURAL: &str = "l[ae]r";
pub const POSSESSIVE: &str = "[ıiuü]";
pub const CONJUNCTION: &str = "(?: ve | ile |[y']?l[ae] )";

pub const SPAN_IMPLYING: &str = "(?:boyunca|süresince|arası(?:nda)?|içeri?sinde|içinde)";
pub const BEFORE: &str = "(?:geçen(?:ki)?|önce(?:[sk]i)?|evvel(?:[sk]i)?|geçtiğimiz|diğer|son)";
/// [`BEFORE`] without `son` and `diğer`, for patterns where `son` would eat
/// into a following word.
pub const BEFORE_STRICT: &str = "(?:geçen(?:ki)?|önce(?:[sk]i)?|evvel(?:[sk]i)?|geçtiğimiz)";
pub const FIRST: &str = r"(?:ilk|birinci|1\.?|1(?:inci)?)";
pub const LATER: &str = "(?:sonra(?:[ks][iı])?|önümüzdeki|haftaya|gelecek|içinde)";

pub const MINUTE_NOUN: &str = "(?:daki?ka|dk)";
pub const YEAR_NOUN: &str = "(?:yıl|sene)";
pub const MONTH_NOUN: &str = "(?:ay(?:ın|ki|a)?|dönem)";
pub const WEEK_NOUN: &str = concat!("(?:hafta(?:", case_suffix!(), "|", genitive!(), ")?)");

pub const PM: &str = "(?:akşam ?üstü|öğleden sonra|akşam|akşam ?üzeri)";
pub const AM: &str = "(?:öğlenden önce|sabah|gece)";

pub const DAY_NAMES: &str = "(?:pazartesi|salı|çarşamba|perşembe|cuma|cumartesi|pazar)";
pub const MONTH_NAMES: &str =
    "(?:ocak|şubat|mart|nisan|mayıs|haziran|temmuz|ağustos|eylül|ekim|kasım|aralık)";

pub const DATE_SEP: &str = r"(?:[_, \-.\\/])";
pub const YEAR_ONLY: &str = "(?:19[0-9][0-9]|20[0-9][0-9])";

/// Weekday names, Monday first.
pub const WEEKDAYS: [&str; 7] = ["pazartesi", "salı", "çarşamba", "perşembe", "cuma", "cumartesi", "pazar"];

/// Month names, January first.
pub const MONTHS: [&str; 12] =
    ["ocak", "şubat", "mart", "nisan", "mayıs", "haziran", "temmuz", "ağustos", "eylül", "ekim", "kasım", "aralık"];

/// Days since Monday for a weekday name.
pub fn weekday_offset(name: &str) -> Option<i64> {
    WEEKDAYS.iter().position(|&day| day == name).map(|i| i as i64)
}

/// 1-based month number for a month name.
pub fn month_number(name: &str) -> Option<i64> {
    MONTHS.iter().position(|&month| month == name).map(|i| i as i64 + 1)
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::*;

    fn full(fragment: &str) -> Regex {
        Regex::new(&format!("^(?:{fragment})$")).unwrap()
    }

    #[test]
    fn case_accepts_common_endings() {
        let re = full(&format!("ocak{CASE}"));
        for word in ["ocakta", "ocaktan", "ocak'ta", "ocakın", "ocak a"] {
            assert!(re.is_match(word), "{word}");
        }
        assert!(!re.is_match("ocaklar"));
    }

    #[test]
    fn week_noun_takes_suffixes() {
        let re = full(WEEK_NOUN);
        for word in ["hafta", "haftada", "haftanın", "haftayı"] {
            assert!(re.is_match(word), "{word}");
        }
    }

    #[test]
    fn name_lookups() {
        assert_eq!(weekday_offset("pazartesi"), Some(0));
        assert_eq!(weekday_offset("pazar"), Some(6));
        assert_eq!(weekday_offset("yarın"), None);
        assert_eq!(month_number("ocak"), Some(1));
        assert_eq!(month_number("aralık"), Some(12));
        assert_eq!(month_number("ay"), None);
    }
}
