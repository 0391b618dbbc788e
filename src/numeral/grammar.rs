use crate::error::{GrammarReason, NumeralError};

/// The scanning phases of the numeral grammar, in the order they are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Zero to three `M`.
    Thousands,
    /// Digits built from `C`, `D` and `M`.
    Hundreds,
    /// Digits built from `X`, `L` and `C`.
    Tens,
    /// Digits built from `I`, `V` and `X`.
    Units,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Thousands => write!(f, "thousands"),
            Self::Hundreds => write!(f, "hundreds"),
            Self::Tens => write!(f, "tens"),
            Self::Units => write!(f, "units"),
        }
    }
}

/// Symbols of a decimal digit phase: the one, five and ten of the place.
struct PhaseSymbols {
    phase: Phase,
    one:   u8,
    five:  u8,
    ten:   u8,
}

const DIGIT_PHASES: [PhaseSymbols; 3] = [PhaseSymbols { phase: Phase::Hundreds,
                                                        one:   b'C',
                                                        five:  b'D',
                                                        ten:   b'M', },
                                         PhaseSymbols { phase: Phase::Tens,
                                                        one:   b'X',
                                                        five:  b'L',
                                                        ten:   b'C', },
                                         PhaseSymbols { phase: Phase::Units,
                                                        one:   b'I',
                                                        five:  b'V',
                                                        ten:   b'X', }];

/// Characters that may appear in a numeral at all.
const SYMBOLS: &str = "MDCLXVI";

/// Counts up to `limit` leading repetitions of `symbol`.
fn count_repeats(input: &[u8], symbol: u8, limit: usize) -> usize {
    input.iter().take(limit).take_while(|&&b| b == symbol).count()
}

/// Scans one digit phase starting at `input` and returns how many bytes it
/// consumed.
///
/// A digit is one of: the subtractive pair `one ten` or `one five`, or an
/// optional `five` followed by up to three `one`.
fn scan_digit(input: &[u8], symbols: &PhaseSymbols) -> usize {
    match input {
        [first, second, ..]
            if *first == symbols.one && (*second == symbols.ten || *second == symbols.five) =>
        {
            2
        },
        [first, rest @ ..] if *first == symbols.five => 1 + count_repeats(rest, symbols.one, 3),
        _ => count_repeats(input, symbols.one, 3),
    }
}

/// Validates `input` against the numeral grammar.
///
/// The thousands phase accepts up to three `M`. Each following phase accepts
/// zero to three of its `one` symbol, the `five` symbol followed by up to
/// three `one`, or one of the two subtractive pairs. The whole input must be
/// consumed and must not be empty.
///
/// # Errors
/// Returns [`NumeralError::Grammar`] describing why the input was rejected.
///
/// # Example
/// ```
/// use numera::numeral::grammar::validate;
///
/// assert!(validate("MCMXCIV").is_ok());
/// assert!(validate("IIII").is_err());
/// assert!(validate("mcm").is_err());
/// ```
pub fn validate(input: &str) -> Result<(), NumeralError> {
    let reject = |reason| NumeralError::Grammar { input: input.to_string(),
                                                  reason };

    if input.is_empty() {
        return Err(reject(GrammarReason::Empty));
    }

    if let Some((position, character)) = input.char_indices().find(|(_, c)| !SYMBOLS.contains(*c))
    {
        return Err(reject(GrammarReason::InvalidCharacter { character, position }));
    }

    let bytes = input.as_bytes();
    let mut position = count_repeats(bytes, b'M', 3);
    let mut after = Phase::Thousands;

    for symbols in &DIGIT_PHASES {
        let consumed = scan_digit(&bytes[position..], symbols);
        if consumed > 0 {
            position += consumed;
            after = symbols.phase;
        }
    }

    if position < bytes.len() {
        return Err(reject(GrammarReason::Unexpected { remainder: input[position..].to_string(),
                                                      after }));
    }

    Ok(())
}

/// Returns `true` if `input` is a valid Roman numeral.
#[must_use]
pub fn is_numeral(input: &str) -> bool {
    validate(input).is_ok()
}
