use std::collections::HashSet;
use std::sync::OnceLock;

const MIN_TOKEN_CHARS: usize = 2;

// ASCII word characters plus Hangul syllables; everything else is a
// separator. Session text mixes English, Korean, and code fragments.
const HANGUL_SYLLABLE_START: char = '\u{AC00}';
const HANGUL_SYLLABLE_END: char = '\u{D7A3}';

const ENGLISH_STOPWORDS: &[&str] = &[
    "a", "an", "the", "is", "it", "in", "on", "of", "to", "and", "or", "for", "with", "this",
    "that", "be", "are", "was", "were", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "could", "should", "may", "might", "can", "shall", "not", "no",
    "but", "if", "at", "by", "from", "as", "into", "about", "up", "out", "so", "its", "you",
    "your", "i", "my", "we", "our", "they", "them", "their", "he", "she", "his", "her", "what",
    "when", "where", "which", "who", "why", "how", "all", "any", "each", "more", "most",
    "other", "some", "such", "than", "then", "too", "very", "just", "also", "there", "here",
];

// Standalone Korean function words. Particles fused onto content words pass
// through untouched; only full-token forms are filtered.
const KOREAN_STOPWORDS: &[&str] = &[
    "\u{ADF8}\u{B9AC}\u{ACE0}",         // 그리고
    "\u{ADF8}\u{B798}\u{C11C}",         // 그래서
    "\u{D558}\u{C9C0}\u{B9CC}",         // 하지만
    "\u{ADF8}\u{B7F0}\u{B370}",         // 그런데
    "\u{B610}\u{D55C}",                 // 또한
    "\u{B610}\u{B294}",                 // 또는
    "\u{C5D0}\u{C11C}",                 // 에서
    "\u{C73C}\u{B85C}",                 // 으로
    "\u{BD80}\u{D130}",                 // 부터
    "\u{AE4C}\u{C9C0}",                 // 까지
    "\u{CC98}\u{B7FC}",                 // 처럼
    "\u{BCF4}\u{B2E4}",                 // 보다
    "\u{D558}\u{B294}",                 // 하는
    "\u{D558}\u{B2E4}",                 // 하다
    "\u{D588}\u{B2E4}",                 // 했다
    "\u{D569}\u{B2C8}\u{B2E4}",         // 합니다
    "\u{C788}\u{B294}",                 // 있는
    "\u{C788}\u{B2E4}",                 // 있다
    "\u{C788}\u{C2B5}\u{B2C8}\u{B2E4}", // 있습니다
    "\u{C5C6}\u{B294}",                 // 없는
    "\u{C5C6}\u{B2E4}",                 // 없다
    "\u{B418}\u{B294}",                 // 되는
    "\u{B418}\u{B2E4}",                 // 되다
    "\u{B429}\u{B2C8}\u{B2E4}",         // 됩니다
    "\u{B300}\u{D55C}",                 // 대한
    "\u{B300}\u{D574}",                 // 대해
    "\u{C704}\u{D55C}",                 // 위한
    "\u{C704}\u{D574}",                 // 위해
    "\u{D1B5}\u{D574}",                 // 통해
    "\u{AC19}\u{C740}",                 // 같은
    "\u{AC19}\u{C774}",                 // 같이
    "\u{B54C}\u{BB38}\u{C5D0}",         // 때문에
    "\u{ACBD}\u{C6B0}",                 // 경우
    "\u{C774}\u{AC83}",                 // 이것
    "\u{ADF8}\u{AC83}",                 // 그것
    "\u{C800}\u{AC83}",                 // 저것
    "\u{C6B0}\u{B9AC}",                 // 우리
    "\u{C81C}\u{AC00}",                 // 제가
    "\u{C800}\u{B294}",                 // 저는
    "\u{B098}\u{B294}",                 // 나는
    "\u{B2F9}\u{C2E0}",                 // 당신
    "\u{BB34}\u{C5C7}",                 // 무엇
    "\u{C5B4}\u{B5A4}",                 // 어떤
    "\u{C5B4}\u{B5BB}\u{AC8C}",         // 어떻게
];

// Session documents quote a lot of code; bare language keywords carry no
// topical signal and would otherwise dominate document frequency.
const CODE_NOISE_STOPWORDS: &[&str] = &[
    "const",
    "let",
    "var",
    "function",
    "return",
    "import",
    "export",
    "class",
    "interface",
    "type",
    "enum",
    "async",
    "await",
    "true",
    "false",
    "null",
    "undefined",
    "void",
    "new",
    "static",
    "public",
    "private",
    "protected",
    "abstract",
    "extends",
    "implements",
    "super",
    "require",
    "module",
    "default",
    "switch",
    "case",
    "break",
    "continue",
    "while",
    "try",
    "catch",
    "finally",
    "throw",
    "typeof",
    "instanceof",
    "delete",
    "yield",
];

fn stopwords() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| {
        ENGLISH_STOPWORDS
            .iter()
            .chain(KOREAN_STOPWORDS)
            .chain(CODE_NOISE_STOPWORDS)
            .copied()
            .collect()
    })
}

/// Free text to normalized keywords: lowercase, non-word characters become
/// separators, then short tokens, stopwords, and pure-numeric tokens drop.
/// Duplicates are kept; they drive term frequency.
#[must_use]
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut cleaned = String::with_capacity(lowered.len());
    for c in lowered.chars() {
        if is_token_char(c) {
            cleaned.push(c);
        } else {
            cleaned.push(' ');
        }
    }
    cleaned
        .split_whitespace()
        .filter(|token| keep_token(token))
        .map(str::to_string)
        .collect()
}

/// Path to normalized keywords: per segment, strip the final extension,
/// discard trivial segments, split camelCase and kebab/snake joints, then
/// apply the same token filter as `tokenize`.
///
/// `src/auth/handleUserLogin.js` surfaces `src`, `auth`, `handle`, `user`,
/// `login`.
#[must_use]
pub(crate) fn tokenize_path(path: &str) -> Vec<String> {
    let normalized = path.replace('\\', "/");
    let mut out = Vec::new();
    for segment in normalized.split('/') {
        let stem = strip_last_extension(segment);
        if stem.chars().count() <= 1 {
            continue;
        }
        for word in split_identifier_words(stem) {
            if keep_token(&word) {
                out.push(word);
            }
        }
    }
    out
}

#[must_use]
pub(crate) fn truncate_text(text: &str, max_chars: usize) -> String {
    let Some((clip_idx, _)) = text.char_indices().nth(max_chars) else {
        return text.to_string();
    };

    let mut out = text[..clip_idx].to_string();
    out.push_str("...");
    out
}

const fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || (c >= HANGUL_SYLLABLE_START && c <= HANGUL_SYLLABLE_END)
}

fn keep_token(token: &str) -> bool {
    if token.chars().count() < MIN_TOKEN_CHARS {
        return false;
    }
    if stopwords().contains(token) {
        return false;
    }
    !token.chars().all(|c| c.is_ascii_digit())
}

// `archive.tar.gz` keeps `archive.tar`; `.env` strips to nothing and is
// discarded by the segment-length check.
fn strip_last_extension(segment: &str) -> &str {
    match segment.rsplit_once('.') {
        Some((stem, ext)) if !ext.is_empty() => stem,
        _ => segment,
    }
}

fn split_identifier_words(segment: &str) -> Vec<String> {
    let mut spaced = String::with_capacity(segment.len() + 8);
    let mut prev_was_lower = false;
    for c in segment.chars() {
        if c.is_ascii_uppercase() && prev_was_lower {
            spaced.push(' ');
        }
        prev_was_lower = c.is_ascii_lowercase();
        spaced.push(c);
    }
    spaced
        .split(|c: char| !is_token_char(c) || c == '_')
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_is_deterministic_and_filters_noise() {
        let input = "The auth Service handles JWT refresh, not the CSS layout!";
        let first = tokenize(input);
        let second = tokenize(input);
        assert_eq!(first, second);
        assert_eq!(
            first,
            vec!["auth", "service", "handles", "jwt", "refresh", "css", "layout"]
        );
        assert!(first.iter().all(|t| t.chars().count() >= 2));
    }

    #[test]
    fn tokenize_keeps_duplicates_for_term_frequency() {
        let tokens = tokenize("token token refresh");
        assert_eq!(tokens, vec!["token", "token", "refresh"]);
    }

    #[test]
    fn tokenize_drops_stopwords_pure_numbers_and_short_tokens() {
        let tokens = tokenize("a an 42 x const function auth 2024 v2");
        assert_eq!(tokens, vec!["auth", "v2"]);
    }

    #[test]
    fn tokenize_handles_empty_and_symbol_only_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \t\n").is_empty());
        assert!(tokenize("!@#$%^&*()").is_empty());
    }

    #[test]
    fn tokenize_preserves_hangul_tokens_and_drops_korean_function_words() {
        let tokens = tokenize(
            "\u{B85C}\u{ADF8}\u{C778} \u{ADF8}\u{B9AC}\u{ACE0} \u{C138}\u{C158} \u{B9CC}\u{B8CC}",
        );
        // 로그인 / 세션 / 만료 survive; 그리고 is filtered.
        assert_eq!(
            tokens,
            vec![
                "\u{B85C}\u{ADF8}\u{C778}",
                "\u{C138}\u{C158}",
                "\u{B9CC}\u{B8CC}"
            ]
        );
    }

    #[test]
    fn tokenize_path_splits_camel_case_and_separators() {
        let tokens = tokenize_path("src/auth/handleUserLogin.js");
        assert_eq!(tokens, vec!["src", "auth", "handle", "user", "login"]);
    }

    #[test]
    fn tokenize_path_normalizes_windows_separators() {
        let tokens = tokenize_path("src\\payment_gateway\\charge-card.ts");
        assert_eq!(tokens, vec!["src", "payment", "gateway", "charge", "card"]);
    }

    #[test]
    fn tokenize_path_strips_only_the_last_extension() {
        let tokens = tokenize_path("dist/release.tar.gz");
        assert_eq!(tokens, vec!["dist", "release", "tar"]);
    }

    #[test]
    fn tokenize_path_discards_trivial_and_hidden_segments() {
        assert!(tokenize_path("").is_empty());
        assert!(tokenize_path("/").is_empty());
        assert!(tokenize_path("a/.env").is_empty());
    }

    #[test]
    fn truncate_text_preserves_utf8_char_boundaries() {
        let input = "\u{C138}\u{C158} \u{C694}\u{C57D} summary";
        let clipped = truncate_text(input, 2);
        assert_eq!(clipped, format!("{}...", "\u{C138}\u{C158}"));
        assert_eq!(truncate_text("short", 10), "short");
    }
}
