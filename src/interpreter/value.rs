use crate::numeral::Numeral;

/// Represents a runtime value in the interpreter.
///
/// Tokens only ever resolve to numerals and plain integers; the remaining
/// variants are produced by operations, such as the real quotient of a
/// division or the textual form returned by `display`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A Roman numeral in `[1, 3999]`.
    Numeral(Numeral),
    /// A plain integer (64 bit).
    Integer(i64),
    /// A real number (double precision floating-point).
    Real(f64),
    /// Text, such as the result of `display`.
    Text(String),
}

/// The kind of a [`Value`], recorded alongside stored variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// See [`Value::Numeral`].
    Numeral,
    /// See [`Value::Integer`].
    Integer,
    /// See [`Value::Real`].
    Real,
    /// See [`Value::Text`].
    Text,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeral => write!(f, "numeral"),
            Self::Integer => write!(f, "integer"),
            Self::Real => write!(f, "real"),
            Self::Text => write!(f, "text"),
        }
    }
}

impl From<Numeral> for Value {
    fn from(n: Numeral) -> Self {
        Self::Numeral(n)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl Value {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Numeral(_) => ValueKind::Numeral,
            Self::Integer(_) => ValueKind::Integer,
            Self::Real(_) => ValueKind::Real,
            Self::Text(_) => ValueKind::Text,
        }
    }

    /// Returns the numeral if the value is one.
    #[must_use]
    pub const fn as_numeral(&self) -> Option<Numeral> {
        match self {
            Self::Numeral(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns `true` if the value is [`Value::Numeral`].
    #[must_use]
    pub const fn is_numeral(&self) -> bool {
        matches!(self, Self::Numeral(..))
    }

    /// Returns `true` if the value is [`Value::Integer`].
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeral(n) => write!(f, "{n}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Real(r) => write!(f, "{r:?}"),
            Self::Text(t) => f.write_str(t),
        }
    }
}
