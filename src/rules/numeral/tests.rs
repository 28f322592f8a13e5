use proptest::prelude::*;

use crate::rules::numeral::{convert, find_all};

#[test]
fn numeral_examples_converting() {
    // Array of (expected_value, input_string)
    let cases: Vec<(f64, &str)> = vec![
        (0.0, "0"),
        (0.0, "sıfır"),
        (1.0, "bir"),
        (3.0, "üç"),
        (3.0, "ÜÇ"),
        (6.0, "altı"),
        (10.0, "on"),
        (15.0, "on beş"),
        (15.0, "onbeş"),
        (33.0, "33"),
        (33.0, "otuz üç"),
        (33.0, "0033"),
        (60.0, "altmış"),
        (99.0, "doksan dokuz"),
        (100.0, "yüz"),
        (123.0, "yüz yirmi üç"),
        (123.0, "yüzyirmiüç"),
        (200.0, "iki yüz"),
        (1000.0, "bin"),
        (1900.0, "bin dokuz yüz"),
        (2017.0, "2017"),
        (2017.0, "iki bin on yedi"),
        (2300.0, "iki bin üç yüz"),
        (20000.0, "yirmi bin"),
        (100000.0, "yüz bin"),
        (120000.0, "yüz yirmi bin"),
        (200000.0, "iki yüz bin"),
        (1000000.0, "1.000.000"),
        (3200000.0, "üç milyon iki yüz bin"),
        (2e9, "iki milyar"),
        (1e15, "katrilyon"),
        (-504.0, "-504"),
        (3.5, "3,5"),
        (3.05, "3,05"),
        (-2.5, "-2,5"),
        (16.0, "1 5 10"),
    ];

    for (expected, input) in cases {
        let value = convert(input);
        assert!((value - expected).abs() < 1e-9, "convert({input:?}) = {value}, expected {expected}");
    }
}

#[test]
fn unknown_material_is_ignored() {
    assert_eq!(convert("elma"), 0.0);
    assert_eq!(convert("iki elma üç"), 5.0);
    assert_eq!(convert("1/4"), 5.0);
}

#[test]
fn find_all_reports_char_offsets() {
    let found = find_all("şubat ayında yüz yirmi üç kişi geldi");
    assert_eq!(found.len(), 1);
    let m = &found[0];
    assert_eq!(m.text, "yüz yirmi üç");
    assert_eq!(m.start_index, 13);
    assert_eq!(m.end_index, 25);
    assert_eq!(m.value, 123.0);
}

#[test]
fn find_all_handles_digits_and_mixed_sequences() {
    let found = find_all("toplam 12 ve 3,5 ile iki bin");
    let texts: Vec<&str> = found.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec!["12", "3,5", "iki bin"]);
    assert_eq!(found[1].value, 3.5);
    assert_eq!(found[2].value, 2000.0);
}

#[test]
fn find_all_requires_separators() {
    // "birinci" contains "bir" but is not a numeral on its own.
    assert!(find_all("birinci gün").is_empty());
    assert!(find_all("onlar geldi").is_empty());
    let found = find_all("saat:12;30");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].text, "12");
}

#[test]
fn find_all_matches_fractions_and_grouped_numbers() {
    let found = find_all("1/4 ve 1.250.000");
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].text, "1/4");
    assert_eq!(found[1].text, "1.250.000");
    assert_eq!(found[1].value, 1_250_000.0);
}

proptest! {
    #[test]
    fn digit_strings_round_trip(n in 0u64..10_000_000_000) {
        prop_assert_eq!(convert(&n.to_string()), n as f64);
    }

    #[test]
    fn found_offsets_slice_the_match(words in proptest::collection::vec("(iki|yüz|bin|elma|12|armut|on)", 1..8)) {
        let text = words.join(" ");
        let chars: Vec<char> = text.chars().collect();
        for m in find_all(&text) {
            let slice: String = chars[m.start_index..m.end_index].iter().collect();
            prop_assert_eq!(slice, m.text);
        }
    }
}
