//! Palindrome classification.
//!
//! Case-insensitive and space-insensitive, punctuation-sensitive:
//! `"A man a plan a canal Panama"` is a palindrome, `"A man, a plan"` is not.

/// Check whether `content` reads the same backwards.
///
/// The input is lower-cased and ASCII spaces are removed; every other
/// character (punctuation, tabs, newlines) is compared as-is. The empty
/// string is a palindrome.
pub fn is_palindrome(content: &str) -> bool {
    let chars: Vec<char> = content
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| *c != ' ')
        .collect();

    chars.iter().eq(chars.iter().rev())
}
