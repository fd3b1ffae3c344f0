//! String helpers: dotted paths, parsing loose flags, and case conversion.
//!
//! The case converters share one word splitter: the input is cut at every run
//! of non-alphanumeric characters and again before every ASCII capital.
//!
//! # Examples
//!
//! ```rust
//! use adjunct::string::{camel_case, kebab_case, pascal_case, snake_case};
//!
//! assert_eq!(kebab_case("  hello-/ world/ "), "hello-world");
//! assert_eq!(snake_case("HelloWorld/ "), "hello_world");
//! assert_eq!(pascal_case("hello- world"), "HelloWorld");
//! assert_eq!(camel_case("HelloWorld/ "), "helloWorld");
//! ```

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use serde_json::Value;

use crate::error::PatternError;

static NON_ALPHAMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9]+").expect("Invalid regex pattern"));

// =============================================================================
// Dotted paths
// =============================================================================

/// The first component of a dotted path.
///
/// # Examples
///
/// ```rust
/// use adjunct::string::{split_head, split_tail};
///
/// assert_eq!(split_head("a.b.c"), "a");
/// assert_eq!(split_tail("a.b.c"), "b.c");
/// assert_eq!(split_tail("a"), "");
/// ```
pub fn split_head(path: &str) -> &str {
    path.split_once('.').map_or(path, |(head, _)| head)
}

/// Everything after the first component of a dotted path.
pub fn split_tail(path: &str) -> &str {
    path.split_once('.').map_or("", |(_, tail)| tail)
}

/// Splits comma separated text; arrays pass through and other values are
/// wrapped.
///
/// # Examples
///
/// ```rust
/// use adjunct::string::split_or_array;
/// use serde_json::json;
///
/// assert_eq!(split_or_array(json!("a,b")), vec![json!("a"), json!("b")]);
/// assert_eq!(split_or_array(json!([1, 2])), vec![json!(1), json!(2)]);
/// assert_eq!(split_or_array(json!({"a": 1})), vec![json!({"a": 1})]);
/// ```
pub fn split_or_array(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::String(text) => text
            .split(',')
            .map(|part| Value::String(part.to_owned()))
            .collect(),
        other => vec![other],
    }
}

// =============================================================================
// Loose parsing
// =============================================================================

const NIL_WORDS: [&str; 5] = ["null", "undefined", "0", "false", "NaN"];

/// `None` for the textual spellings of nothing, the text itself otherwise.
///
/// `"null"`, `"undefined"`, `"0"`, `"false"` and `"NaN"` count as nothing.
pub fn parse_nil(text: &str) -> Option<&str> {
    (!NIL_WORDS.contains(&text)).then_some(text)
}

/// `false` for empty text and the spellings accepted by [`parse_nil`],
/// `true` for anything else.
///
/// # Examples
///
/// ```rust
/// use adjunct::string::parse_bool;
///
/// assert!(parse_bool("yes"));
/// assert!(parse_bool("true"));
/// assert!(!parse_bool("undefined"));
/// assert!(!parse_bool(""));
/// ```
pub fn parse_bool(text: &str) -> bool {
    !text.is_empty() && parse_nil(text).is_some()
}

/// Cuts `text` to `length` characters, appending `…` when anything was cut.
///
/// # Examples
///
/// ```rust
/// use adjunct::string::truncate;
///
/// assert_eq!(truncate(5, "hello world"), "hello…");
/// assert_eq!(truncate(5, "hello"), "hello");
/// ```
pub fn truncate(length: usize, text: &str) -> String {
    match text.char_indices().nth(length) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text.to_owned(),
    }
}

// =============================================================================
// Patterns
// =============================================================================

/// Compiles `pattern` with flag letters in the usual regular expression
/// notation.
///
/// `i` ignores case, `m` makes `^`/`$` match at line ends, `s` lets `.` match
/// newlines, and `x` allows whitespace and comments. `g`, `u` and `y` are
/// accepted and have no effect.
///
/// # Errors
///
/// Returns [`PatternError::InvalidFlag`] for any other letter and
/// [`PatternError::Syntax`] when the pattern does not compile.
///
/// # Examples
///
/// ```rust
/// use adjunct::string::reg_exp;
///
/// let ends = reg_exp("end$", "gi").unwrap();
/// assert!(ends.is_match("in the END"));
/// assert!(reg_exp("a", "q").is_err());
/// ```
pub fn reg_exp(pattern: &str, flags: &str) -> Result<Regex, PatternError> {
    let mut builder = RegexBuilder::new(pattern);
    for flag in flags.chars() {
        match flag {
            'i' => builder.case_insensitive(true),
            'm' => builder.multi_line(true),
            's' => builder.dot_matches_new_line(true),
            'x' => builder.ignore_whitespace(true),
            'g' | 'u' | 'y' => &mut builder,
            other => {
                tracing::debug!(flag = %other, pattern, "rejected regular expression flag");
                return Err(PatternError::InvalidFlag(other));
            }
        };
    }
    Ok(builder.build()?)
}

/// `true` when `text` starts with `prefix`, ignoring case.
///
/// # Examples
///
/// ```rust
/// use adjunct::string::{prefix_with, suffix_with};
///
/// assert!(prefix_with("HEL", "hello"));
/// assert!(!prefix_with("h", "good bye"));
/// assert!(suffix_with("ELLO", "hello"));
/// ```
pub fn prefix_with(prefix: &str, text: &str) -> bool {
    text.to_lowercase().starts_with(&prefix.to_lowercase())
}

/// `true` when `text` ends with `suffix`, ignoring case.
pub fn suffix_with(suffix: &str, text: &str) -> bool {
    text.to_lowercase().ends_with(&suffix.to_lowercase())
}

// =============================================================================
// Word splitting
// =============================================================================

/// Splits on every run of characters outside `[a-zA-Z0-9]`, dropping empty
/// pieces.
///
/// # Examples
///
/// ```rust
/// use adjunct::string::split_alphameric;
///
/// assert_eq!(split_alphameric("Hello    world/1"), vec!["Hello", "world", "1"]);
/// ```
pub fn split_alphameric(text: &str) -> Vec<&str> {
    NON_ALPHAMERIC
        .split(text)
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// Splits before every ASCII capital letter except a leading one.
///
/// # Examples
///
/// ```rust
/// use adjunct::string::split_capital;
///
/// assert_eq!(split_capital("helloBigWorld"), vec!["hello", "Big", "World"]);
/// assert_eq!(split_capital("ABC"), vec!["A", "B", "C"]);
/// ```
pub fn split_capital(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for (index, character) in text.char_indices().skip(1) {
        if character.is_ascii_uppercase() {
            pieces.push(&text[start..index]);
            start = index;
        }
    }
    pieces.push(&text[start..]);
    pieces
}

/// [`split_alphameric`] followed by [`split_capital`] on each piece.
pub fn split_capital_alphameric(text: &str) -> Vec<&str> {
    split_alphameric(text)
        .into_iter()
        .flat_map(split_capital)
        .collect()
}

// =============================================================================
// Case conversion
// =============================================================================

fn map_first(text: &str, convert: impl FnOnce(char) -> String) -> String {
    let mut characters = text.chars();
    characters.next().map_or_else(String::new, |first| {
        let mut converted = convert(first);
        converted.push_str(characters.as_str());
        converted
    })
}

/// Lowercases the first character.
///
/// # Examples
///
/// ```rust
/// use adjunct::string::lower_first;
///
/// assert_eq!(lower_first("HELLO WORLD"), "hELLO WORLD");
/// ```
pub fn lower_first(text: &str) -> String {
    map_first(text, |first| first.to_lowercase().collect())
}

/// Uppercases the first character.
pub fn upper_first(text: &str) -> String {
    map_first(text, |first| first.to_uppercase().collect())
}

/// Uppercases the first character of the first line.
pub fn capitalize(text: &str) -> String {
    if text.starts_with('\n') {
        return text.to_owned();
    }
    upper_first(text)
}

fn join_lowercase(text: &str, separator: &str) -> String {
    split_capital_alphameric(text)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

/// `dot.case`.
pub fn dot_case(text: &str) -> String {
    join_lowercase(text, ".")
}

/// `kebab-case`.
pub fn kebab_case(text: &str) -> String {
    join_lowercase(text, "-")
}

/// `snake_case`.
pub fn snake_case(text: &str) -> String {
    join_lowercase(text, "_")
}

/// `PascalCase`. Only the first letter of each word changes.
pub fn pascal_case(text: &str) -> String {
    split_capital_alphameric(text)
        .into_iter()
        .map(upper_first)
        .collect()
}

/// `camelCase`.
pub fn camel_case(text: &str) -> String {
    lower_first(&pascal_case(text))
}
