//! Phrase matching over a token stream.

use std::collections::HashSet;

use crate::matching::tokenizer::Token;
use crate::matching::vocabulary::CompiledVocabulary;

/// Returns the set of distinct vocabulary phrases present in `tokens`.
///
/// Every start position is tried and the longest match at each position wins,
/// so "Java" never fires inside "javascript" while "C" and "C++" are still
/// discovered independently at their own positions. The scan always advances
/// one token at a time; a phrase is reported once no matter how often it
/// occurs. Cost is `O(tokens x longest phrase)`, independent of vocabulary
/// size.
pub fn match_phrases<'v>(
    vocabulary: &'v CompiledVocabulary,
    tokens: &[Token],
) -> HashSet<&'v str> {
    let mut found = HashSet::new();
    for start in 0..tokens.len() {
        if let Some(phrase) = vocabulary.longest_match_at(tokens, start) {
            found.insert(phrase);
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::tokenizer::tokenize;

    fn matched(entries: &[&str], text: &str) -> HashSet<String> {
        let vocab = CompiledVocabulary::compile(entries.iter().copied());
        let tokens = tokenize(text);
        match_phrases(&vocab, &tokens)
            .into_iter()
            .map(String::from)
            .collect()
    }

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_longest_match_wins_over_shared_prefix() {
        let skills = matched(&["Java", "JavaScript"], "I use javascript daily");
        assert_eq!(skills, set(&["JavaScript"]));
    }

    #[test]
    fn test_overlapping_entries_found_independently() {
        let skills = matched(&["C", "C++"], "I code in c++ and also c");
        assert_eq!(skills, set(&["C++", "C"]));
    }

    #[test]
    fn test_case_insensitive_with_original_casing_output() {
        let skills = matched(&["Python"], "I KNOW PYTHON");
        assert_eq!(skills, set(&["Python"]));
    }

    #[test]
    fn test_multi_word_phrase_requires_contiguous_tokens() {
        assert!(matched(&["Machine Learning"], "machine and learning are separate").is_empty());
        assert_eq!(
            matched(&["Machine Learning"], "I study machine learning daily"),
            set(&["Machine Learning"])
        );
    }

    #[test]
    fn test_empty_input_yields_empty_set() {
        assert!(matched(&["Python"], "").is_empty());
    }

    #[test]
    fn test_empty_vocabulary_yields_empty_set() {
        assert!(matched(&[], "python everywhere").is_empty());
    }

    #[test]
    fn test_repeated_occurrences_reported_once() {
        let skills = matched(&["Python"], "python, Python and PYTHON");
        assert_eq!(skills.len(), 1);
    }

    #[test]
    fn test_every_result_is_verbatim_from_vocabulary() {
        let entries = ["Node.js", "React Native", "SQL"];
        let skills = matched(&entries, "node.js and react native on top of sql");
        assert_eq!(skills.len(), 3);
        for skill in &skills {
            assert!(entries.contains(&skill.as_str()));
        }
    }

    #[test]
    fn test_longer_phrase_beats_its_prefix_at_the_same_position() {
        let skills = matched(&["Ruby on Rails", "Ruby"], "ruby on rails shop");
        assert_eq!(skills, set(&["Ruby on Rails"]));
    }

    #[test]
    fn test_prefix_entry_still_found_at_its_own_position() {
        let skills = matched(&["Ruby on Rails", "Ruby"], "ruby on rails shop, plain ruby too");
        assert_eq!(skills, set(&["Ruby on Rails", "Ruby"]));
    }

    #[test]
    fn test_deterministic_across_calls() {
        let vocab = CompiledVocabulary::compile(["Rust", "Go", "Machine Learning"]);
        let tokens = tokenize("rust and go and machine learning");
        assert_eq!(match_phrases(&vocab, &tokens), match_phrases(&vocab, &tokens));
    }
}
