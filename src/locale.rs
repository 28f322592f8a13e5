//! Turkish case folding.
//!
//! Turkish has a dotted (`i`/`İ`) and a dotless (`ı`/`I`) letter pair. The
//! default Unicode mappings fold `I` to `i` and `İ` to `i̇` (with a combining
//! dot), both wrong for Turkish text, so the two pairs are mapped by hand
//! before the generic fold runs.

/// Lowercase `text` using Turkish rules.
pub fn lower(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            'I' => out.push('ı'),
            'İ' => out.push('i'),
            _ => out.extend(ch.to_lowercase()),
        }
    }
    out
}

/// Uppercase `text` using Turkish rules.
pub fn upper(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            'i' => out.push('İ'),
            'ı' => out.push('I'),
            _ => out.extend(ch.to_uppercase()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_maps_dotted_and_dotless_i() {
        assert_eq!(lower("IŞIK"), "ışık");
        assert_eq!(lower("İSTANBUL"), "istanbul");
        assert_eq!(lower("Çarşamba"), "çarşamba");
    }

    #[test]
    fn upper_maps_dotted_and_dotless_i() {
        assert_eq!(upper("ışık"), "IŞIK");
        assert_eq!(upper("istanbul"), "İSTANBUL");
        assert_eq!(upper("salı"), "SALI");
    }

    #[test]
    fn folding_round_trips_turkish_words() {
        for word in ["pazartesi", "ağustos", "kasım", "şimdi", "öbürsü"] {
            assert_eq!(lower(&upper(word)), word);
        }
    }
}
