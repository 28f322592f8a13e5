use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::locale;
use crate::rules::numeral::helpers::{NUMBER_WORDS, WORD_VALUES, place_value};

// Digit forms, tried in this order at every position.
const INTEGER: &str = r"-?[0-9]+";
// -3.4, .2, 4., 3,4
const DOUBLE: &str = r"-?(?:[0-9]*[,.][0-9]+|[0-9]+[,.][0-9]*)";
const FRACTION: &str = r"-?[0-9]+/[1-9][0-9]*";
const DOT_GROUPED: &str = r"[1-9]{1,2}(?:\.[0-9]{3})*";

/// Numeral expressions flanked by separators or text boundaries.
///
/// Group 2 is the numeral itself; the separators around it are consumed, so
/// two numerals need two separators between them to both be found.
static NUMBER_SEARCH: Lazy<Regex> = Lazy::new(|| {
    let atom = format!("(?:{INTEGER}|{DOUBLE}|{FRACTION}|{DOT_GROUPED}|{NUMBER_WORDS})+");
    Regex::new(&format!("(?i)(^|[ ;:]+)({atom}(?: {atom})*)(?:[ ;:]+|$)")).unwrap()
});

/// A numeral found in free text.
///
/// Offsets are character offsets into the searched text, `end_index`
/// exclusive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumeralMatch {
    pub start_index: usize,
    pub end_index: usize,
    pub text: String,
    pub value: f64,
}

/// Extract the numeric value of a numeral expression.
///
/// `.` is read as a thousands separator and `,` as the decimal separator.
/// Digit runs and number words are collected into atoms which are then
/// combined by [`place_value`]. Material that is neither is ignored, so
/// `"1/4"` reads as the atoms `[1, 4]`.
pub fn convert(text: &str) -> f64 {
    let text = locale::lower(&text.replace('.', ""));

    if let Some((whole, fraction)) = text.split_once(',') {
        let fraction: String = fraction.chars().filter(|&c| c != ',').collect();
        let scale = 10f64.powi(fraction.chars().count() as i32);
        let whole_value = convert(whole);
        let fraction_value = convert(&fraction) / scale;
        return if whole.trim_start().starts_with('-') {
            whole_value - fraction_value
        } else {
            whole_value + fraction_value
        };
    }

    place_value(&atoms(&text))
}

fn atoms(text: &str) -> Vec<i64> {
    let mut atoms = Vec::new();
    let mut digits = String::new();
    let mut word = String::new();

    for ch in text.chars() {
        if ch.is_ascii_digit() || (ch == '-' && digits.is_empty()) {
            word.clear();
            digits.push(ch);
            continue;
        }

        flush_digits(&mut digits, &mut atoms);

        if !ch.is_alphabetic() {
            word.clear();
            continue;
        }

        word.push(ch);
        if let Some(&value) = WORD_VALUES.get(word.as_str()) {
            atoms.push(value);
            word.clear();
        }
    }
    flush_digits(&mut digits, &mut atoms);

    atoms
}

fn flush_digits(digits: &mut String, atoms: &mut Vec<i64>) {
    if digits.is_empty() {
        return;
    }
    // A lone "-" or an out-of-range run contributes nothing.
    if let Ok(value) = digits.parse::<i64>() {
        atoms.push(value);
    }
    digits.clear();
}

/// Byte ranges of every numeral in `text`, left to right.
pub(crate) fn scan(text: &str) -> Vec<Range<usize>> {
    NUMBER_SEARCH.captures_iter(text).filter_map(|caps| caps.get(2)).map(|m| m.range()).collect()
}

/// Find every numeral in `text` together with its value.
pub fn find_all(text: &str) -> Vec<NumeralMatch> {
    scan(text)
        .into_iter()
        .map(|range| {
            let start_index = text[..range.start].chars().count();
            let body = &text[range];
            NumeralMatch {
                start_index,
                end_index: start_index + body.chars().count(),
                text: body.to_string(),
                value: convert(body),
            }
        })
        .collect()
}
