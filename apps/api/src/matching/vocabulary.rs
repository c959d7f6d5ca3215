//! Skill vocabulary compilation.
//!
//! Phrases are tokenized with the same rules as document text and inserted
//! into a token trie whose terminal nodes carry the original-cased phrase.
//! Lookup cost depends on the longest phrase, not on vocabulary size.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::matching::tokenizer::{tokenize, Token};

#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<String, TrieNode>,
    /// Original-cased phrase ending at this node, if any.
    phrase: Option<String>,
}

/// A skill vocabulary compiled into a token trie.
///
/// Built once at startup and shared read-only across requests.
#[derive(Debug, Default)]
pub struct CompiledVocabulary {
    root: TrieNode,
    phrases: usize,
    max_phrase_tokens: usize,
}

impl CompiledVocabulary {
    /// Compiles an ordered list of skill phrases.
    ///
    /// A phrase that normalizes to an empty token sequence is skipped with a
    /// warning rather than failing the whole vocabulary. When two phrases
    /// normalize to the same token sequence the first one wins.
    pub fn compile<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocab = CompiledVocabulary::default();
        for phrase in phrases {
            let phrase = phrase.as_ref();
            let tokens = tokenize(phrase);
            if tokens.is_empty() {
                warn!("skipping vocabulary phrase with no tokens: {phrase:?}");
                continue;
            }

            let mut node = &mut vocab.root;
            for token in &tokens {
                node = node.children.entry(token.text.clone()).or_default();
            }
            if node.phrase.is_some() {
                debug!("duplicate vocabulary phrase {phrase:?} ignored, first entry wins");
                continue;
            }
            node.phrase = Some(phrase.to_string());
            vocab.phrases += 1;
            vocab.max_phrase_tokens = vocab.max_phrase_tokens.max(tokens.len());
        }
        vocab
    }

    /// Number of distinct phrases in the vocabulary.
    pub fn len(&self) -> usize {
        self.phrases
    }

    pub fn is_empty(&self) -> bool {
        self.phrases == 0
    }

    /// Token length of the longest compiled phrase.
    pub fn max_phrase_tokens(&self) -> usize {
        self.max_phrase_tokens
    }

    /// Returns the longest vocabulary phrase whose token sequence is a prefix
    /// of `tokens[start..]`, if any.
    ///
    /// Walking the trie keeps the deepest terminal seen, so "JavaScript"
    /// beats "Java" and "Machine Learning" beats "Machine" at the same start
    /// position.
    pub fn longest_match_at(&self, tokens: &[Token], start: usize) -> Option<&str> {
        let mut node = &self.root;
        let mut best = None;
        for token in &tokens[start..] {
            match node.children.get(token.text.as_str()) {
                Some(child) => node = child,
                None => break,
            }
            if let Some(phrase) = &node.phrase {
                best = Some(phrase.as_str());
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_counts_distinct_phrases() {
        let vocab = CompiledVocabulary::compile(["Python", "Machine Learning", "C++"]);
        assert_eq!(vocab.len(), 3);
        assert!(!vocab.is_empty());
    }

    #[test]
    fn test_duplicate_normalization_first_wins() {
        let vocab = CompiledVocabulary::compile(["Node.js", "NODE.JS", "node.js"]);
        assert_eq!(vocab.len(), 1);
        let tokens = tokenize("we ship node.js services");
        assert_eq!(vocab.longest_match_at(&tokens, 2), Some("Node.js"));
    }

    #[test]
    fn test_phrase_without_tokens_is_skipped() {
        let vocab = CompiledVocabulary::compile(["++", "...", "", "Rust"]);
        assert_eq!(vocab.len(), 1);
    }

    #[test]
    fn test_longest_match_prefers_longer_phrase() {
        let vocab = CompiledVocabulary::compile(["Machine", "Machine Learning"]);
        let tokens = tokenize("machine learning models");
        assert_eq!(vocab.longest_match_at(&tokens, 0), Some("Machine Learning"));
    }

    #[test]
    fn test_shorter_phrase_still_found_when_longer_breaks_off() {
        let vocab = CompiledVocabulary::compile(["Machine", "Machine Learning"]);
        let tokens = tokenize("machine shop");
        assert_eq!(vocab.longest_match_at(&tokens, 0), Some("Machine"));
    }

    #[test]
    fn test_incomplete_phrase_does_not_match() {
        let vocab = CompiledVocabulary::compile(["Machine Learning"]);
        let tokens = tokenize("machine");
        assert_eq!(vocab.longest_match_at(&tokens, 0), None);
    }

    #[test]
    fn test_match_is_case_insensitive_and_returns_original_casing() {
        let vocab = CompiledVocabulary::compile(["PyTorch"]);
        let tokens = tokenize("PYTORCH");
        assert_eq!(vocab.longest_match_at(&tokens, 0), Some("PyTorch"));
    }

    #[test]
    fn test_max_phrase_tokens_tracks_longest_entry() {
        let vocab = CompiledVocabulary::compile(["C", "Ruby on Rails"]);
        assert_eq!(vocab.max_phrase_tokens(), 3);
    }
}
