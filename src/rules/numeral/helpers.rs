use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Turkish number words and their values.
pub static WORD_VALUES: Lazy<HashMap<&'static str, i64>> = Lazy::new(|| {
    HashMap::from([
        ("sıfır", 0),
        ("bir", 1),
        ("iki", 2),
        ("üç", 3),
        ("dört", 4),
        ("beş", 5),
        ("altı", 6),
        ("yedi", 7),
        ("sekiz", 8),
        ("dokuz", 9),
        ("on", 10),
        ("yirmi", 20),
        ("otuz", 30),
        ("kırk", 40),
        ("elli", 50),
        ("altmış", 60),
        ("yetmiş", 70),
        ("seksen", 80),
        ("doksan", 90),
        ("yüz", 100),
        ("bin", 1_000),
        ("milyon", 1_000_000),
        ("milyar", 1_000_000_000),
        ("trilyon", 1_000_000_000_000),
        ("katrilyon", 1_000_000_000_000_000),
    ])
});

/// Regex alternation of every entry in [`WORD_VALUES`].
pub const NUMBER_WORDS: &str = "(?:bir|iki|üç|dört|beş|altı|yedi|sekiz|dokuz|on|sıfır|yirmi|otuz|kırk|elli|altmış|\
                                yetmiş|seksen|doksan|yüz|bin|milyon|milyar|trilyon|katrilyon)";

/// Power-of-ten exponent of an atom (`1000 -> 3`, `0 -> 0`).
fn exponent(atom: i64) -> i32 {
    atom.unsigned_abs().checked_ilog10().unwrap_or(0) as i32
}

/// Combine juxtaposed numeral atoms into one value.
///
/// Written numbers list their parts without explicit multiplication: "iki yüz
/// bin" is `[2, 100, 1000]` and means 200 000. Atoms are walked from the
/// least significant end:
///
/// ```text
/// [3, 1_000_000, 2, 100, 1000]
///                        ^ sets bin = 3, no coefficient (preceded by 100)
///                   ^^^^^ 2 * 100 * 10^3
///     ^^^^^^^^^ sets bin = 6, coefficient 3
/// = 3_200_000
/// ```
///
/// A multiple of 1000 opens a new bin and takes the sum of the directly
/// preceding non-hundred atoms as its coefficient. A multiple of 100 takes
/// the atom before it as its coefficient (or stands alone) and is scaled by
/// the current bin. Anything else adds as is.
pub fn place_value(atoms: &[i64]) -> f64 {
    let mut total = 0.0;
    let mut bin = 0;
    let mut i = atoms.len();

    while i > 0 {
        let idx = i - 1;
        let atom = atoms[idx];

        if atom % 1000 == 0 {
            bin = exponent(atom);

            let mut j = idx;
            let mut coefficient = 0.0;
            while j > 0 && atoms[j - 1] % 100 != 0 {
                coefficient += atoms[j - 1] as f64;
                j -= 1;
            }

            if coefficient != 0.0 {
                total += coefficient * atom as f64;
                i = j;
                continue;
            }
            if idx == 0 || atoms[idx - 1] % 100 != 0 {
                total += atom as f64;
            }
        } else if atom % 100 == 0 {
            let scale = 10f64.powi(bin);
            if idx > 0 && atoms[idx - 1] % 100 != 0 {
                total += atoms[idx - 1] as f64 * 100.0 * scale;
                i -= 1;
            } else {
                total += atom as f64 * scale;
            }
        } else {
            total += atom as f64;
        }

        i -= 1;
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hundreds_take_a_single_coefficient() {
        assert_eq!(place_value(&[2, 100]), 200.0);
        assert_eq!(place_value(&[100, 20, 3]), 123.0);
    }

    #[test]
    fn thousands_collect_preceding_units() {
        assert_eq!(place_value(&[20, 1000]), 20_000.0);
        assert_eq!(place_value(&[100, 20, 1000]), 120_000.0);
        assert_eq!(place_value(&[1000, 9, 100]), 1_900.0);
    }

    #[test]
    fn hundred_before_thousand_is_scaled_by_the_bin() {
        assert_eq!(place_value(&[100, 1000]), 100_000.0);
        assert_eq!(place_value(&[2, 100, 1000]), 200_000.0);
        assert_eq!(place_value(&[3, 1_000_000, 2, 100, 1000]), 3_200_000.0);
    }

    #[test]
    fn zero_and_empty() {
        assert_eq!(place_value(&[]), 0.0);
        assert_eq!(place_value(&[0]), 0.0);
    }

    #[test]
    fn exponent_counts_digits() {
        assert_eq!(exponent(0), 0);
        assert_eq!(exponent(1000), 3);
        assert_eq!(exponent(-1_000_000), 6);
        assert_eq!(exponent(1_000_000_000_000_000), 15);
    }
}
