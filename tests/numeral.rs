use std::{
    cmp::Ordering,
    collections::{HashMap, HashSet},
};

use numera::{
    error::{GrammarReason, NumeralError},
    interpreter::value::Value,
    numeral::{BinaryOperator, MAX_VALUE, MIN_VALUE, Numeral, apply, grammar::Phase},
};

fn roman(s: &str) -> Numeral {
    Numeral::parse(s).unwrap()
}

#[test]
fn decimal_round_trip() {
    for decimal in i64::from(MIN_VALUE)..=i64::from(MAX_VALUE) {
        let numeral = Numeral::from_decimal(decimal).unwrap();
        let reparsed = Numeral::parse(&numeral.to_string()).unwrap();
        assert_eq!(i64::from(reparsed), decimal, "round trip of {decimal} via {numeral}");
    }
}

#[test]
fn canonical_forms_are_unique() {
    let mut seen = HashMap::new();
    for decimal in i64::from(MIN_VALUE)..=i64::from(MAX_VALUE) {
        let canonical = Numeral::from_decimal(decimal).unwrap().to_canonical();
        if let Some(previous) = seen.insert(canonical.clone(), decimal) {
            panic!("{canonical} encodes both {previous} and {decimal}");
        }
    }
    assert_eq!(seen.len(), usize::from(MAX_VALUE));
}

#[test]
fn every_accepted_spelling_is_canonical() {
    const LETTERS: [char; 7] = ['M', 'D', 'C', 'L', 'X', 'V', 'I'];
    const MAX_LEN: usize = 7;

    let canonical: HashSet<String> =
        (i64::from(MIN_VALUE)..=i64::from(MAX_VALUE)).map(|d| Numeral::from_decimal(d).unwrap().to_canonical())
                                                     .filter(|s| s.len() <= MAX_LEN)
                                                     .collect();

    let mut accepted = HashSet::new();
    let mut current = vec![String::new()];
    for _ in 0..MAX_LEN {
        current = current.iter()
                         .flat_map(|prefix| {
                             LETTERS.iter().map(move |letter| {
                                                let mut word = prefix.clone();
                                                word.push(*letter);
                                                word
                                            })
                         })
                         .collect();

        for word in &current {
            if let Ok(numeral) = Numeral::parse(word) {
                assert_eq!(numeral.to_canonical(), *word, "{word} decodes to {}", numeral.to_decimal());
                accepted.insert(word.clone());
            }
        }
    }

    assert_eq!(accepted, canonical);
}

#[test]
fn known_values() {
    let cases = [("I", 1),
                 ("IV", 4),
                 ("IX", 9),
                 ("XII", 12),
                 ("XL", 40),
                 ("L", 50),
                 ("XC", 90),
                 ("C", 100),
                 ("CD", 400),
                 ("D", 500),
                 ("CM", 900),
                 ("M", 1000),
                 ("MCMXCIV", 1994),
                 ("MMXXIV", 2024),
                 ("MMMDCCCLXXXVIII", 3888),
                 ("MMMCMXCIX", 3999)];

    for (numeral, decimal) in cases {
        assert_eq!(roman(numeral).to_decimal(), decimal);
        assert_eq!(Numeral::from_decimal(i64::from(decimal)).unwrap().to_string(), numeral);
    }
}

#[test]
fn range_guard() {
    assert_eq!(Numeral::from_decimal(0), Err(NumeralError::Range { value: 0 }));
    assert_eq!(Numeral::from_decimal(4000), Err(NumeralError::Range { value: 4000 }));
    assert_eq!(Numeral::from_decimal(-1), Err(NumeralError::Range { value: -1 }));
    assert!(Numeral::try_from(i64::MAX).is_err());
}

#[test]
fn invalid_numerals_are_rejected() {
    for input in ["IIII", "VV", "LL", "DD", "MMMM", "ABC", "IC", "XM", "VX", "IL", "CMC", "XIIII",
                  "x", "mcm", "X ", " X", "XIV!"]
    {
        assert!(matches!(Numeral::parse(input), Err(NumeralError::Grammar { .. })),
                "{input} should be rejected");
    }
}

#[test]
fn grammar_reports_phase() {
    let reason = |input: &str| match Numeral::parse(input) {
        Err(NumeralError::Grammar { reason, .. }) => reason,
        other => panic!("expected a grammar failure for {input}, got {other:?}"),
    };

    assert_eq!(reason(""), GrammarReason::Empty);
    assert_eq!(reason("XIV!"),
               GrammarReason::InvalidCharacter { character: '!',
                                                 position:  3, });
    assert_eq!(reason("xiv"),
               GrammarReason::InvalidCharacter { character: 'x',
                                                 position:  0, });
    assert_eq!(reason("IIII"),
               GrammarReason::Unexpected { remainder: "I".to_string(),
                                           after:     Phase::Units, });
    assert_eq!(reason("MMMM"),
               GrammarReason::Unexpected { remainder: "M".to_string(),
                                           after:     Phase::Thousands, });
    assert_eq!(reason("CMC"),
               GrammarReason::Unexpected { remainder: "C".to_string(),
                                           after:     Phase::Hundreds, });
}

#[test]
fn comparisons_across_shapes() {
    let ten = roman("X");

    assert!(ten.equals(roman("X")).unwrap());
    assert!(!ten.equals(roman("V")).unwrap());
    assert!(ten.equals("X").unwrap());
    assert!(!ten.equals("V").unwrap());
    assert!(ten.equals(10_i64).unwrap());
    assert!(!ten.equals(5_i64).unwrap());

    assert_eq!(ten.compare("L").unwrap(), Ordering::Less);
    assert_eq!(ten.compare(50_i64).unwrap(), Ordering::Less);
    assert_eq!(ten.compare(&roman("V")).unwrap(), Ordering::Greater);
    assert!(ten < roman("L"));
    assert!(ten > 5_i64);
    assert!(ten == 10_i64);

    assert!(ten.compare("ten").is_err());
    assert!(matches!(ten.compare(&Value::Real(10.0)),
                     Err(NumeralError::TypeMismatch { .. })));
}

#[test]
fn numeral_arithmetic_stays_in_range() {
    assert_eq!(roman("X") + roman("V"), Ok(roman("XV")));
    assert_eq!(roman("X") - roman("V"), Ok(roman("V")));
    assert_eq!(roman("X") * roman("V"), Ok(roman("L")));
    assert_eq!(roman("MMM") + roman("CMXCIX"), Ok(roman("MMMCMXCIX")));

    assert_eq!(roman("MMM") + roman("M"), Err(NumeralError::Range { value: 4000 }));
    assert_eq!(roman("V") - roman("V"), Err(NumeralError::Range { value: 0 }));
    assert_eq!(roman("C") * roman("C"), Err(NumeralError::Range { value: 10_000 }));
}

#[test]
fn sums_match_decimal_sums() {
    for (a, b) in [(1, 1), (4, 5), (999, 1), (1994, 2005), (3998, 1), (2000, 1999)] {
        let sum = apply(BinaryOperator::Add,
                        Numeral::from_decimal(a).unwrap(),
                        Numeral::from_decimal(b).unwrap()).unwrap();
        assert_eq!(sum, Value::Numeral(Numeral::from_decimal(a + b).unwrap()));
    }
}

#[test]
fn mixed_operands() {
    use BinaryOperator::{Add, Div, Mul, Sub};

    assert_eq!(apply(Add, roman("X"), 5_i64), Ok(Value::Numeral(roman("XV"))));
    assert_eq!(apply(Add, 5_i64, roman("X")), Ok(Value::Numeral(roman("XV"))));
    assert_eq!(apply(Add, roman("X"), "V"), Ok(Value::Numeral(roman("XV"))));
    assert_eq!(apply(Sub, "X", roman("V")), Ok(Value::Numeral(roman("V"))));
    assert_eq!(apply(Mul, roman("X"), 400_i64), Err(NumeralError::Range { value: 4000 }));
    assert_eq!(apply(Div, roman("X"), roman("IV")), Ok(Value::Real(2.5)));
    assert_eq!(apply(Div, roman("X"), 0_i64), Err(NumeralError::DivisionByZero));
}

#[test]
fn text_on_the_left_concatenates() {
    assert_eq!(apply(BinaryOperator::Add, "X", roman("V")), Ok(Value::Text("XV".to_string())));
    assert_eq!(apply(BinaryOperator::Add, "V", roman("X")), Ok(Value::Text("VX".to_string())));
    assert_eq!(apply(BinaryOperator::Add, roman("V"), "X"), Ok(Value::Numeral(roman("XV"))));
}

#[test]
fn plain_integers_have_no_range() {
    use BinaryOperator::{Add, Div, FloorDiv, Mod, Mul, Pow, Sub};

    assert_eq!(apply(Add, 3000_i64, 3000_i64), Ok(Value::Integer(6000)));
    assert_eq!(apply(Sub, 1_i64, 5_i64), Ok(Value::Integer(-4)));
    assert_eq!(apply(Mul, -7_i64, 6_i64), Ok(Value::Integer(-42)));
    assert_eq!(apply(Div, 7_i64, 2_i64), Ok(Value::Real(3.5)));
    assert_eq!(apply(FloorDiv, -7_i64, 2_i64), Ok(Value::Integer(-4)));
    assert_eq!(apply(Mod, -7_i64, 2_i64), Ok(Value::Integer(1)));
    assert_eq!(apply(Mod, 7_i64, -2_i64), Ok(Value::Integer(-1)));
    assert_eq!(apply(Pow, 2_i64, 10_i64), Ok(Value::Integer(1024)));
    assert_eq!(apply(Pow, 2_i64, -1_i64), Ok(Value::Real(0.5)));
    assert_eq!(apply(Add, i64::MAX, 1_i64), Err(NumeralError::Overflow));
    assert_eq!(apply(Mod, 1_i64, 0_i64), Err(NumeralError::DivisionByZero));
}

#[test]
fn unsupported_operations_are_type_mismatches() {
    use BinaryOperator::{Add, FloorDiv, Mod, Pow, Sub};

    for op in [FloorDiv, Mod, Pow] {
        assert!(matches!(apply(op, roman("X"), roman("V")), Err(NumeralError::TypeMismatch { .. })));
        assert!(matches!(apply(op, roman("X"), 2_i64), Err(NumeralError::TypeMismatch { .. })));
        assert!(matches!(apply(op, 2_i64, "X"), Err(NumeralError::TypeMismatch { .. })));
    }

    assert!(matches!(apply(Add, "X", "V"), Err(NumeralError::TypeMismatch { .. })));
    assert!(matches!(apply(Sub, "X", 1_i64), Err(NumeralError::TypeMismatch { .. })));
    assert!(matches!(apply(Add, &Value::Real(1.5), roman("I")),
                     Err(NumeralError::TypeMismatch { .. })));
    assert!(matches!(apply(Add, roman("I"), "nope"), Err(NumeralError::Grammar { .. })));
}
