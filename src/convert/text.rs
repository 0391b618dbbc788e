use logos::Logos;

use crate::numeral::{MAX_VALUE, MIN_VALUE, Numeral};

/// Free text seen as alternating words and gaps.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
enum Segment {
    /// A maximal run of word characters.
    #[regex(r"\w+")]
    Word,
    /// Anything between words, copied through verbatim.
    #[regex(r"\W+")]
    Gap,
}

/// Rewrites every whole word for which `replace` returns a substitute.
fn substitute<F>(text: &str, replace: F) -> String
    where F: Fn(&str) -> Option<String>
{
    let mut output = String::with_capacity(text.len());
    let mut lexer = Segment::lexer(text);

    while let Some(segment) = lexer.next() {
        let slice = lexer.slice();
        match segment.ok().filter(|s| *s == Segment::Word).and_then(|_| replace(slice)) {
            Some(replacement) => output.push_str(&replacement),
            None => output.push_str(slice),
        }
    }

    output
}

/// Replaces every numeral standing as a whole word with its decimal.
///
/// Words are maximal runs of word characters, so a numeral embedded in a
/// longer word is left alone, as is every other part of the text.
///
/// # Example
/// ```
/// use numera::convert::replace_numerals_in_text;
///
/// assert_eq!(replace_numerals_in_text("XX in Roman is 20."), "20 in Roman is 20.");
/// assert_eq!(replace_numerals_in_text("MIX and MAX"), "1009 and MAX");
/// ```
#[must_use]
pub fn replace_numerals_in_text(text: &str) -> String {
    substitute(text, |word| {
        Numeral::parse(word).ok()
                            .map(|numeral| numeral.to_decimal().to_string())
    })
}

/// Replaces every decimal standing as a whole word with its numeral.
///
/// Only canonically written decimals in `[1, 3999]` are replaced: no sign,
/// no leading zero.
///
/// # Example
/// ```
/// use numera::convert::replace_decimals_in_text;
///
/// assert_eq!(replace_decimals_in_text("Chapter 14 of 4000"), "Chapter XIV of 4000");
/// ```
#[must_use]
pub fn replace_decimals_in_text(text: &str) -> String {
    substitute(text, |word| {
        if word.starts_with('0') || !word.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        word.parse::<u16>()
            .ok()
            .filter(|value| (MIN_VALUE..=MAX_VALUE).contains(value))
            .and_then(|value| Numeral::from_decimal(i64::from(value)).ok())
            .map(|numeral| numeral.to_string())
    })
}
