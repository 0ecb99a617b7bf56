//! Name normalization: reconstruct canonical employee names from the noisy
//! fragments the biometric devices emit (arbitrary punctuation and casing,
//! often with no inter-word spacing at all).

use crate::config::rules::NameRules;

/// Applies the ordered rule chain: sanitize, exception override, dictionary
/// segmentation with character-class fallbacks. Pure: same input, same
/// output. The canonical result is the join key for all downstream records.
pub struct NameNormalizer {
    rules: NameRules,
    /// Vocabulary held longest-first so a short word never pre-empts a
    /// longer one sharing the same prefix (MARIACRUZ before MARIA).
    vocabulary: Vec<String>,
}

impl NameNormalizer {
    pub fn new(rules: NameRules) -> Self {
        let mut vocabulary = rules.vocabulary.clone();
        vocabulary.sort_by(|a, b| b.len().cmp(&a.len()));
        Self { rules, vocabulary }
    }

    pub fn normalize(&self, raw: &str) -> String {
        let cleaned = sanitize(raw);

        // Exceptions win over everything else: some real individuals'
        // names cannot be reconstructed by segmentation alone.
        if let Some(canonical) = self.exception_override(&cleaned) {
            return canonical;
        }

        self.segment(&cleaned)
    }

    /// Exception table lookup, space- and case-insensitive.
    fn exception_override(&self, cleaned: &str) -> Option<String> {
        let squashed = squash(cleaned);
        for (variant, canonical) in &self.rules.exceptions {
            if squashed == squash(&variant.to_uppercase()) {
                return Some(canonical.clone());
            }
        }
        None
    }

    /// Longest-prefix dictionary segmentation. Whitespace in the remainder
    /// acts as a token boundary and is consumed silently.
    fn segment(&self, cleaned: &str) -> String {
        let mut tokens: Vec<&str> = Vec::new();
        let mut remaining = cleaned;

        while !remaining.is_empty() {
            if let Some(rest) = remaining.strip_prefix(' ') {
                remaining = rest;
                continue;
            }

            if let Some(word) = self
                .vocabulary
                .iter()
                .find(|w| remaining.starts_with(w.as_str()))
            {
                tokens.push(&remaining[..word.len()]);
                remaining = &remaining[word.len()..];
                continue;
            }

            let (token, rest) = fallback_token(remaining);
            tokens.push(token);
            remaining = rest;
        }

        tokens.join(" ")
    }
}

/// Strip everything except letters, periods, hyphens and spaces; upper-case.
fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphabetic() || matches!(c, '.' | '-' | ' '))
        .collect::<String>()
        .to_uppercase()
}

fn squash(s: &str) -> String {
    s.chars().filter(|c| *c != ' ').collect()
}

/// Fallback tokenizer for remainders no vocabulary word prefixes.
/// Strict order: middle initial (one capital, optional trailing period),
/// a maximal run of two or more capitals, then a single character, which
/// guarantees termination.
fn fallback_token(s: &str) -> (&str, &str) {
    let bytes = s.as_bytes();

    if bytes[0].is_ascii_uppercase() {
        if bytes.len() > 1 && bytes[1] == b'.' {
            return s.split_at(2);
        }
        return s.split_at(1);
    }

    let run = bytes.iter().take_while(|b| b.is_ascii_uppercase()).count();
    if run >= 2 {
        return s.split_at(run);
    }

    let len = s.chars().next().map(char::len_utf8).unwrap_or(1);
    s.split_at(len)
}
