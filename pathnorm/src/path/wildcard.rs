//! Wildcard matching of file names.
//!
//! `?` matches exactly one character and `*` matches any run of characters,
//! including none. There is no escaping and no character classes. The match
//! is against the whole name, so separators are ordinary characters here.

use super::types::{CaseSensitivity, Flavor};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(Vec<char>),
    AnyOne,
    AnyRun,
}

/// Matches a name against a wildcard pattern.
///
/// Two absent values match; an absent value never matches a present one.
/// `flavor` is only consulted when `case` is [`CaseSensitivity::System`].
///
/// # Examples
///
/// ```
/// use pathnorm::path::{wildcard_match, CaseSensitivity, Flavor};
///
/// let sensitive = CaseSensitivity::Sensitive;
/// assert!(wildcard_match(Some("c.txt"), Some("*.txt"), sensitive, Flavor::Unix));
/// assert!(wildcard_match(Some("c.txt"), Some("?.txt"), sensitive, Flavor::Unix));
/// assert!(!wildcard_match(Some("c.txt"), Some("*.jpg"), sensitive, Flavor::Unix));
/// assert!(wildcard_match(None, None, sensitive, Flavor::Unix));
/// ```
#[must_use]
pub fn wildcard_match(
    name: Option<&str>,
    pattern: Option<&str>,
    case: CaseSensitivity,
    flavor: Flavor,
) -> bool {
    match (name, pattern) {
        (None, None) => true,
        (Some(name), Some(pattern)) => matches(name, pattern, case, flavor),
        _ => false,
    }
}

/// Matches a name against a wildcard pattern using the flavor's case rules.
///
/// # Examples
///
/// ```
/// use pathnorm::path::{wildcard_match_on_system, Flavor};
///
/// assert!(wildcard_match_on_system(Some("README.TXT"), Some("*.txt"), Flavor::Windows));
/// assert!(!wildcard_match_on_system(Some("README.TXT"), Some("*.txt"), Flavor::Unix));
/// ```
#[must_use]
pub fn wildcard_match_on_system(name: Option<&str>, pattern: Option<&str>, flavor: Flavor) -> bool {
    wildcard_match(name, pattern, CaseSensitivity::System, flavor)
}

fn matches(name: &str, pattern: &str, case: CaseSensitivity, flavor: Flavor) -> bool {
    let text: Vec<char> = name.chars().collect();
    let tokens = split_on_tokens(pattern);
    let mut backtrack: Vec<(usize, usize)> = Vec::new();

    let mut any_chars = false;
    let mut text_idx = 0;
    let mut token_idx = 0;

    loop {
        if let Some((saved_token, saved_text)) = backtrack.pop() {
            token_idx = saved_token;
            text_idx = saved_text;
            any_chars = true;
        }

        while let Some(token) = tokens.get(token_idx) {
            match token {
                Token::AnyOne => {
                    text_idx += 1;
                    if text_idx > text.len() {
                        break;
                    }
                    any_chars = false;
                }
                Token::AnyRun => {
                    any_chars = true;
                    if token_idx == tokens.len() - 1 {
                        text_idx = text.len();
                    }
                }
                Token::Literal(literal) => {
                    if any_chars {
                        let Some(found) = find_from(&text, text_idx, literal, case, flavor) else {
                            break;
                        };
                        if let Some(repeat) = find_from(&text, found + 1, literal, case, flavor) {
                            backtrack.push((token_idx, repeat));
                        }
                        text_idx = found + literal.len();
                    } else {
                        if !region_matches(&text, text_idx, literal, case, flavor) {
                            break;
                        }
                        text_idx += literal.len();
                    }
                    any_chars = false;
                }
            }
            token_idx += 1;
        }

        if token_idx == tokens.len() && text_idx == text.len() {
            return true;
        }
        if backtrack.is_empty() {
            return false;
        }
    }
}

/// Splits a pattern into literals and wildcards, collapsing runs of `*`.
fn split_on_tokens(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut literal = Vec::new();

    for c in pattern.chars() {
        match c {
            '?' | '*' => {
                if !literal.is_empty() {
                    tokens.push(Token::Literal(std::mem::take(&mut literal)));
                }
                if c == '?' {
                    tokens.push(Token::AnyOne);
                } else if tokens.last() != Some(&Token::AnyRun) {
                    tokens.push(Token::AnyRun);
                }
            }
            _ => literal.push(c),
        }
    }
    if !literal.is_empty() || tokens.is_empty() {
        tokens.push(Token::Literal(literal));
    }
    tokens
}

fn region_matches(
    text: &[char],
    start: usize,
    literal: &[char],
    case: CaseSensitivity,
    flavor: Flavor,
) -> bool {
    text.get(start..start + literal.len()).is_some_and(|region| {
        region
            .iter()
            .zip(literal)
            .all(|(&a, &b)| case.chars_eq(a, b, flavor))
    })
}

fn find_from(
    text: &[char],
    start: usize,
    literal: &[char],
    case: CaseSensitivity,
    flavor: Flavor,
) -> Option<usize> {
    let last_start = text.len().checked_sub(literal.len())?;
    (start..=last_start).find(|&i| region_matches(text, i, literal, case, flavor))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENSITIVE: CaseSensitivity = CaseSensitivity::Sensitive;
    const INSENSITIVE: CaseSensitivity = CaseSensitivity::Insensitive;

    fn wm(name: &str, pattern: &str) -> bool {
        wildcard_match(Some(name), Some(pattern), SENSITIVE, Flavor::Unix)
    }

    #[test]
    fn test_absent_values() {
        assert!(!wildcard_match(Some("Foo"), None, SENSITIVE, Flavor::Unix));
        assert!(!wildcard_match(None, Some("Foo"), SENSITIVE, Flavor::Unix));
        assert!(wildcard_match(None, None, SENSITIVE, Flavor::Unix));
    }

    #[test]
    fn test_literal_patterns() {
        assert!(wm("Foo", "Foo"));
        assert!(wm("", ""));
        assert!(!wm("Foo", ""));
        assert!(!wm("", "Foo"));
        assert!(!wm("Foo", "Fo"));
        assert!(!wm("Foo", "foo"));
    }

    #[test]
    fn test_star_patterns() {
        assert!(wm("", "*"));
        assert!(wm("Foo", "*"));
        assert!(wm("Foo", "Fo*"));
        assert!(wm("Foo", "*o"));
        assert!(wm("Foo", "**"));
        assert!(wm("Foo Bar and Catflap", "Fo*"));
        assert!(wm("New Bookmarks", "N?w ?o?k??r?s"));
        assert!(!wm("FooBar", "Foo"));
        assert!(wm("Adobe Acrobat Installer", "Ad*er"));
        assert!(wm("Foo", "*Foo"));
        assert!(wm("BarFoo", "*Foo"));
        assert!(wm("Foo", "Foo*"));
        assert!(wm("FooBar", "Foo*"));
        assert!(!wm("FOO", "*Foo"));
        assert!(!wm("BARFOO", "*Foo"));
    }

    #[test]
    fn test_question_mark_patterns() {
        assert!(wm("Foo", "Fo?"));
        assert!(wm("Foo", "F??"));
        assert!(!wm("Foo", "F?"));
        assert!(!wm("Foo", "F????"));
        assert!(wm("Foo", "???"));
        assert!(wm("Foo", "?*"));
        assert!(!wm("", "?"));
    }

    #[test]
    fn test_backtracking() {
        assert!(wm("aaa", "aa*"));
        assert!(wm("abcabc", "*abc"));
        assert!(wm("log.txt", "*.*"));
        assert!(wm("log.txt", "*.???"));
        assert!(!wm("log.text", "*.???"));
        assert!(wm("a.b.c.d", "*.c*"));
        assert!(wm("abababc", "*abc"));
        assert!(wm("mississippi", "m*iss*ppi"));
        assert!(wm("mississippi", "*sip*"));
        assert!(!wm("mississippi", "*sipx*"));
        assert!(wm("c:\\dir\\file.log", "*\\file.*"));
    }

    #[test]
    fn test_case_sensitivity() {
        assert!(wildcard_match(Some("FOO"), Some("*Foo"), INSENSITIVE, Flavor::Unix));
        assert!(wildcard_match(Some("BARFOO"), Some("*Foo"), INSENSITIVE, Flavor::Unix));
        assert!(wildcard_match(Some("ABC.TXT"), Some("a?c.*"), INSENSITIVE, Flavor::Unix));
        assert!(wildcard_match_on_system(Some("Report.PDF"), Some("*.pdf"), Flavor::Windows));
        assert!(!wildcard_match_on_system(Some("Report.PDF"), Some("*.pdf"), Flavor::Unix));
    }

    #[test]
    fn test_multibyte_characters() {
        assert!(wm("日本語.txt", "???.txt"));
        assert!(wm("café", "caf?"));
    }

    #[test]
    fn test_split_on_tokens() {
        assert_eq!(split_on_tokens("Ad*er"), vec![
            Token::Literal(vec!['A', 'd']),
            Token::AnyRun,
            Token::Literal(vec!['e', 'r']),
        ]);
        assert_eq!(split_on_tokens("**?*"), vec![Token::AnyRun, Token::AnyOne, Token::AnyRun]);
        assert_eq!(split_on_tokens(""), vec![Token::Literal(Vec::new())]);
    }
}
