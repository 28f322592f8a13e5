//! Windowed tagging of whole sentences.
//!
//! A sentence is split on single spaces. Every token is resolved on its own,
//! then every contiguous window of 2..=n tokens, smallest windows first. A
//! window that resolves writes its value onto each of its tokens, subject to
//! the [`OverlapPolicy`]. Runs of adjacent tokens carrying equal values are
//! finally merged into [`TaggedSpan`]s.
//!
//! ```text
//! tokens   geçen   hafta   içi
//! size 1   -       -       -
//! size 2   [last week    ]
//!                  [weekdays    ]   LastWriteWins overwrites "hafta",
//!                                   LongestMatch keeps it
//! size 3   (no match)
//! ```

use tracing::trace;

use super::resolver::Resolver;
use crate::api::{OverlapPolicy, TaggedSpan};
use crate::error::{Error, Result};
use crate::ResolvedValue;

/// Split on single spaces; doubled spaces yield empty tokens.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(' ').collect()
}

pub struct Tagger<'a> {
    resolver: Resolver<'a>,
    overlap: OverlapPolicy,
}

impl<'a> Tagger<'a> {
    pub fn new(resolver: Resolver<'a>, overlap: OverlapPolicy) -> Self {
        Self { resolver, overlap }
    }

    /// One tag per token of `sentence`.
    pub fn tag(&self, sentence: &str) -> Vec<Option<ResolvedValue>> {
        self.tag_tokens(&tokenize(sentence))
    }

    fn tag_tokens(&self, tokens: &[&str]) -> Vec<Option<ResolvedValue>> {
        let mut tags: Vec<Option<ResolvedValue>> = tokens.iter().map(|token| self.resolver.resolve(token)).collect();
        // Size of the window that last wrote each token.
        let mut cover = vec![1usize; tokens.len()];

        for size in 2..=tokens.len() {
            for start in 0..=tokens.len() - size {
                let window = start..start + size;
                if self.overlap == OverlapPolicy::LongestMatch && cover[window.clone()].iter().any(|&c| c >= size) {
                    continue;
                }

                let expr = tokens[window.clone()].join(" ");
                let Some(value) = self.resolver.resolve(&expr) else {
                    continue;
                };
                trace!(start, size, expr = %expr, "window resolved");

                for idx in window {
                    tags[idx] = Some(value.clone());
                    cover[idx] = size;
                }
            }
        }

        tags
    }

    /// Tag `text` and merge the tags into spans with character offsets.
    pub fn spans(&self, text: &str) -> Result<Vec<TaggedSpan>> {
        let tokens = tokenize(text);
        let tags = self.tag_tokens(&tokens);

        let expected = text.chars().count();
        let actual = tokens.iter().map(|token| token.chars().count()).sum::<usize>() + tokens.len() - 1;
        if actual != expected {
            return Err(Error::Tokenization { expected, actual });
        }
        if tags.len() != tokens.len() {
            return Err(Error::TagCount { tokens: tokens.len(), tags: tags.len() });
        }

        Ok(merge(&tokens, &tags))
    }
}

/// Collapse runs of equal adjacent tags into spans.
fn merge(tokens: &[&str], tags: &[Option<ResolvedValue>]) -> Vec<TaggedSpan> {
    let mut spans: Vec<TaggedSpan> = Vec::new();
    let mut offset = 0;

    for (idx, (token, tag)) in tokens.iter().zip(tags).enumerate() {
        let len = token.chars().count();

        if let Some(value) = tag {
            let continues = idx > 0 && tags[idx - 1].as_ref() == Some(value);
            match spans.last_mut() {
                Some(last) if continues => {
                    last.end_index += len + 1;
                    last.text.push(' ');
                    last.text.push_str(token);
                }
                _ => spans.push(TaggedSpan::new(offset, token, value)),
            }
        }

        offset += len + 1;
    }

    spans
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use proptest::prelude::*;

    use super::*;
    use crate::TagKind;
    use crate::api::DEFAULT_RULES;

    fn reference() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 6, 15).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    fn tagger(overlap: OverlapPolicy) -> Tagger<'static> {
        Tagger::new(Resolver::new(&DEFAULT_RULES, reference(), None), overlap)
    }

    #[test]
    fn multi_token_expression_becomes_one_span() {
        let spans = tagger(OverlapPolicy::LastWriteWins).spans("3 gün önce geldi").unwrap();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "3 gün önce");
        assert_eq!((spans[0].start_index, spans[0].end_index), (0, 10));
        assert_eq!(spans[0].kind, TagKind::DateTime);
    }

    #[test]
    fn offsets_count_characters() {
        let spans = tagger(OverlapPolicy::LastWriteWins).spans("dün ve bugün").unwrap();
        let found: Vec<(usize, usize, &str)> =
            spans.iter().map(|s| (s.start_index, s.end_index, s.text.as_str())).collect();
        assert_eq!(found, vec![(0, 3, "dün"), (7, 12, "bugün")]);
    }

    #[test]
    fn untagged_sentence_yields_nothing() {
        assert!(tagger(OverlapPolicy::LastWriteWins).spans("elma armut").unwrap().is_empty());
        assert!(tagger(OverlapPolicy::LastWriteWins).spans("").unwrap().is_empty());
    }

    #[test]
    fn doubled_spaces_are_empty_tokens() {
        let tagger = tagger(OverlapPolicy::LastWriteWins);
        assert_eq!(tagger.tag("dün  bugün").len(), 3);
        let spans = tagger.spans("dün  bugün").unwrap();
        assert_eq!(spans.len(), 2);
        assert_eq!((spans[1].start_index, spans[1].end_index), (5, 10));
    }

    #[test]
    fn overlap_policies_differ_on_equal_size_windows() {
        let text = "geçen hafta içi";

        let last_write = tagger(OverlapPolicy::LastWriteWins).spans(text).unwrap();
        let texts: Vec<&str> = last_write.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["geçen", "hafta içi"]);

        let longest = tagger(OverlapPolicy::LongestMatch).spans(text).unwrap();
        let texts: Vec<&str> = longest.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["geçen hafta"]);
    }

    #[test]
    fn merge_extends_end_by_token_and_space() {
        let value = ResolvedValue::Instant(reference());
        let tags = vec![Some(value.clone()), Some(value.clone()), None, Some(value)];
        let spans = merge(&["ab", "çd", "x", "y"], &tags);
        assert_eq!(spans.len(), 2);
        assert_eq!((spans[0].start_index, spans[0].end_index, spans[0].text.as_str()), (0, 5, "ab çd"));
        assert_eq!((spans[1].start_index, spans[1].end_index), (8, 9));
    }

    fn sentence() -> impl Strategy<Value = String> {
        let words = prop::sample::select(vec![
            "geçen", "hafta", "3", "gün", "önce", "ocak", "2005", "her", "pazartesi", "elma", "bugün", "içi", "",
        ]);
        prop::collection::vec(words, 0..6).prop_map(|words| words.join(" "))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn one_tag_per_token(text in sentence()) {
            let tagger = tagger(OverlapPolicy::LastWriteWins);
            prop_assert_eq!(tagger.tag(&text).len(), tokenize(&text).len());
        }

        #[test]
        fn spans_slice_the_input(text in sentence()) {
            let chars: Vec<char> = text.chars().collect();
            for span in tagger(OverlapPolicy::LongestMatch).spans(&text).unwrap() {
                let slice: String = chars[span.start_index..span.end_index].iter().collect();
                prop_assert_eq!(slice, span.text);
            }
        }

        #[test]
        fn tagging_is_idempotent(text in sentence()) {
            let tagger = tagger(OverlapPolicy::LastWriteWins);
            prop_assert_eq!(tagger.spans(&text).unwrap(), tagger.spans(&text).unwrap());
        }
    }
}
