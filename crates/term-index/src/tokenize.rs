use unicode_segmentation::UnicodeSegmentation;

/// Split text into lowercase word tokens.
///
/// Uses Unicode word segmentation, so hyphenated and accented words come out
/// the way a reader would expect and punctuation never leaks into terms.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    text.unicode_words().map(|w| w.to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tokenize_lowercases_and_drops_punctuation() {
        assert_eq!(
            tokenize("The cat, the DOG; and 2 birds!"),
            vec!["the", "cat", "the", "dog", "and", "2", "birds"]
        );
    }

    #[test]
    fn test_tokenize_unicode() {
        assert_eq!(tokenize("Écoute naïve"), vec!["écoute", "naïve"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ...  ").is_empty());
    }
}
