//! String case and slug helpers.

use unicode_normalization::UnicodeNormalization;

/// Combining diacritical marks block, stripped after NFD decomposition.
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Uppercases the first character.
///
/// ```
/// use shortkit_util::strings::capitalize;
///
/// assert_eq!(capitalize("hello world"), "Hello world");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Keeps the first `length` characters and appends `ellipsis` when `s` is
/// longer than that; otherwise returns `s` unchanged.
pub fn truncate(s: &str, length: usize, ellipsis: &str) -> String {
    match s.char_indices().nth(length) {
        Some((cut, _)) => {
            let mut out = String::with_capacity(cut + ellipsis.len());
            out.push_str(&s[..cut]);
            out.push_str(ellipsis);
            out
        }
        None => s.to_owned(),
    }
}

/// Turns free text into a URL slug.
///
/// Accents are folded through NFD decomposition, whitespace runs become a
/// single `-`, and anything other than ASCII word characters and `-` is
/// dropped.
///
/// ```
/// use shortkit_util::strings::slugify;
///
/// assert_eq!(slugify("  Crème Brûlée & Co!  "), "creme-brulee-co");
/// ```
pub fn slugify(s: &str) -> String {
    let folded: String = s
        .nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .collect::<String>()
        .to_lowercase();

    let mut dashed = String::with_capacity(folded.len());
    let mut in_space = false;
    for c in folded.trim().chars() {
        if c.is_whitespace() {
            if !in_space {
                dashed.push('-');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        if is_word_char(c) || c == '-' {
            dashed.push(c);
        }
    }

    let mut out = String::with_capacity(dashed.len());
    for c in dashed.chars() {
        if c == '-' && out.ends_with('-') {
            continue;
        }
        out.push(c);
    }
    out
}

/// `kebab-case` to `camelCase`: a `-` followed by a word character is
/// replaced by that character uppercased.
pub fn camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '-' {
            if let Some(&next) = chars.peek() {
                if is_word_char(next) {
                    out.push(next.to_ascii_uppercase());
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

/// `camelCase` to `kebab-case`: every ASCII uppercase letter gets a `-`
/// prefix, then the whole string is lowercased.
pub fn kebab_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
        }
        out.push(c);
    }
    out.to_lowercase()
}
