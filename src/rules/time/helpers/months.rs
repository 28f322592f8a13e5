use regex::Regex;

/// Canonical month name for an expression that is, as a whole, a month
/// spelling: the full name, its three-letter abbreviation or its genitive
/// (`oca`, `ocağın` -> `ocak`).
///
/// Expects lowercased input. Month names inside longer expressions are left
/// for the grammar to handle.
pub fn canonical_month(expr: &str) -> Option<&'static str> {
    let table: [(&'static str, &'static Regex); 12] = [
        ("ocak", regex!(r"^(?:oca(?:k|ğın)?)$")),
        ("şubat", regex!(r"^(?:şubat(?:ın)?|şub)$")),
        ("mart", regex!(r"^(?:mart(?:ın)?|mar)$")),
        ("nisan", regex!(r"^(?:nisan(?:ın)?|nis)$")),
        ("mayıs", regex!(r"^(?:mayıs(?:ın)?|may)$")),
        ("haziran", regex!(r"^(?:haziran(?:ın)?|haz)$")),
        ("temmuz", regex!(r"^(?:temmuz(?:un)?|tem)$")),
        ("ağustos", regex!(r"^(?:ağustos(?:un)?|ağu)$")),
        ("eylül", regex!(r"^(?:eylül(?:ün)?|eyl)$")),
        ("ekim", regex!(r"^(?:ekim(?:in)?|eki)$")),
        ("kasım", regex!(r"^(?:kasım(?:ın)?|kas)$")),
        ("aralık", regex!(r"^(?:aralı(?:k|ğın)|ara)$")),
    ];

    table.iter().find(|(_, re)| re.is_match(expr)).map(|&(name, _)| name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abbreviations_and_genitives_map_to_the_name() {
        assert_eq!(canonical_month("oca"), Some("ocak"));
        assert_eq!(canonical_month("ocağın"), Some("ocak"));
        assert_eq!(canonical_month("ocak"), Some("ocak"));
        assert_eq!(canonical_month("may"), Some("mayıs"));
        assert_eq!(canonical_month("ağustosun"), Some("ağustos"));
        assert_eq!(canonical_month("aralığın"), Some("aralık"));
        assert_eq!(canonical_month("ara"), Some("aralık"));
    }

    #[test]
    fn only_whole_expressions_are_mapped() {
        assert_eq!(canonical_month("ocak 2005"), None);
        assert_eq!(canonical_month("mayısta"), None);
        assert_eq!(canonical_month("mars"), None);
        assert_eq!(canonical_month(""), None);
    }
}
