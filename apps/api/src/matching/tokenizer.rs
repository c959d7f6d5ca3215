//! Tokenization shared by document text and vocabulary phrases.
//!
//! Both sides MUST normalize identically or phrase matching silently fails,
//! so the rules live in exactly one place:
//! - a token starts at an alphanumeric character;
//! - it continues over alphanumerics, `+`, `#`, and a `.` that is immediately
//!   followed by an alphanumeric;
//! - everything else separates tokens.
//!
//! "C++", "C#", and "Node.js" stay single tokens; sentence punctuation is
//! stripped ("daily." yields `daily`); "CI/CD" splits into two tokens on both
//! sides of the match.

/// A normalized word unit with its byte span in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Lowercased token text.
    pub text: String,
    /// Byte offset of the token start in the source text.
    pub start: usize,
    /// Byte offset one past the token end.
    pub end: usize,
}

/// Splits `text` into an ordered sequence of normalized tokens.
///
/// Pure and deterministic; tokens are never empty.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();
    // Start byte of the token currently being scanned, if any.
    let mut current: Option<usize> = None;

    while let Some((i, c)) = chars.next() {
        let next_is_alnum = chars
            .peek()
            .is_some_and(|&(_, next)| next.is_alphanumeric());
        let keep = if c.is_alphanumeric() {
            true
        } else {
            match c {
                // '+' and '#' extend a token but never start one.
                '+' | '#' => current.is_some(),
                // Interior dot only: "node.js" holds together, "daily." does not.
                '.' => current.is_some() && next_is_alnum,
                _ => false,
            }
        };

        if keep {
            if current.is_none() {
                current = Some(i);
            }
        } else if let Some(start) = current.take() {
            tokens.push(make_token(text, start, i));
        }
    }
    if let Some(start) = current {
        tokens.push(make_token(text, start, text.len()));
    }
    tokens
}

fn make_token(text: &str, start: usize, end: usize) -> Token {
    Token {
        text: text[start..end].to_lowercase(),
        start,
        end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<String> {
        tokenize(input).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_lowercases_and_splits_on_whitespace() {
        assert_eq!(texts("I KNOW Python"), vec!["i", "know", "python"]);
    }

    #[test]
    fn test_cpp_and_csharp_stay_single_tokens() {
        assert_eq!(texts("C++ and C#"), vec!["c++", "and", "c#"]);
    }

    #[test]
    fn test_interior_dot_kept_trailing_dot_stripped() {
        assert_eq!(texts("Node.js daily."), vec!["node.js", "daily"]);
    }

    #[test]
    fn test_slash_and_hyphen_separate_tokens() {
        assert_eq!(texts("IDS/IPS"), vec!["ids", "ips"]);
        assert_eq!(texts("Objective-C"), vec!["objective", "c"]);
    }

    #[test]
    fn test_plus_and_hash_never_start_a_token() {
        assert_eq!(texts("+ #rust c++"), vec!["rust", "c++"]);
    }

    #[test]
    fn test_vocabulary_and_document_tokenize_identically() {
        // Any divergence here is the single largest source of missed matches.
        for phrase in ["C++", "C#", "Node.js", "GitLab CI/CD", "Objective-C"] {
            let vocab = texts(phrase);
            let doc = texts(&format!("experience with {phrase}, among others"));
            assert!(
                doc.windows(vocab.len()).any(|w| w == vocab.as_slice()),
                "{phrase}: vocabulary tokens {vocab:?} not contiguous in document tokens {doc:?}"
            );
        }
    }

    #[test]
    fn test_empty_and_punctuation_only_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ... !!! -- ").is_empty());
    }

    #[test]
    fn test_no_empty_tokens() {
        for token in tokenize("a,,b .. c++/d") {
            assert!(!token.text.is_empty());
        }
    }

    #[test]
    fn test_spans_point_into_source() {
        let source = "Rust and C++";
        let tokens = tokenize(source);
        assert_eq!(tokens[2].text, "c++");
        assert_eq!(&source[tokens[2].start..tokens[2].end], "C++");
    }

    #[test]
    fn test_deterministic_for_identical_input() {
        let input = "Machine Learning with PyTorch, repeatedly.";
        assert_eq!(tokenize(input), tokenize(input));
    }
}
