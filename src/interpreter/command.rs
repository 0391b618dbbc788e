use std::str::FromStr;

use crate::{
    error::RuntimeError,
    interpreter::{core::EvalResult, lexer::statement_words},
    numeral::BinaryOperator,
};

/// The operation keyword that starts every statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `set NAME VALUE`
    Set,
    /// `add A B`
    Add,
    /// `subtract A B`
    Subtract,
    /// `multiply A B`
    Multiply,
    /// `divide A B`
    Divide,
    /// `convert VALUE`
    Convert,
    /// `display VALUE`
    Display,
}

/// The closed set of statement categories, one handler each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Binds a value to a variable name.
    Assignment,
    /// Computes with two values.
    Arithmetic,
    /// Converts between numerals and integers.
    Conversion,
    /// Produces the textual form of a value.
    Display,
}

impl Keyword {
    /// Every keyword, in declaration order.
    pub const ALL: [Self; 7] = [Self::Set,
                                Self::Add,
                                Self::Subtract,
                                Self::Multiply,
                                Self::Divide,
                                Self::Convert,
                                Self::Display];

    /// The keyword as it is written in source.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Set => "set",
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Convert => "convert",
            Self::Display => "display",
        }
    }

    /// The category the keyword belongs to.
    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            Self::Set => Category::Assignment,
            Self::Add | Self::Subtract | Self::Multiply | Self::Divide => Category::Arithmetic,
            Self::Convert => Category::Conversion,
            Self::Display => Category::Display,
        }
    }

    /// The arithmetic operator of the keyword, if it is an arithmetic one.
    #[must_use]
    pub const fn operator(self) -> Option<BinaryOperator> {
        match self {
            Self::Add => Some(BinaryOperator::Add),
            Self::Subtract => Some(BinaryOperator::Sub),
            Self::Multiply => Some(BinaryOperator::Mul),
            Self::Divide => Some(BinaryOperator::Div),
            Self::Set | Self::Convert | Self::Display => None,
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Keyword {
    type Err = RuntimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter()
                 .find(|keyword| keyword.as_str() == s)
                 .ok_or_else(|| RuntimeError::MalformedCommand { details: format!("unknown operation '{s}'") })
    }
}

/// A single parsed statement: an operation keyword and its argument tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    keyword:   Keyword,
    arguments: Vec<String>,
}

impl Command {
    /// Parses one statement.
    ///
    /// The statement is split on whitespace after an optional trailing
    /// separator is removed. The first word is the keyword, every further
    /// word is an argument.
    ///
    /// # Errors
    /// Returns [`RuntimeError::MalformedCommand`] if the statement has fewer
    /// than two words, holds more than one statement, or starts with an
    /// unknown keyword.
    ///
    /// # Example
    /// ```
    /// use numera::interpreter::command::{Category, Command, Keyword};
    ///
    /// let command = Command::parse("add a XIV;").unwrap();
    /// assert_eq!(command.keyword(), Keyword::Add);
    /// assert_eq!(command.category(), Category::Arithmetic);
    /// assert_eq!(command.arguments(), ["a", "XIV"]);
    ///
    /// assert!(Command::parse("display").is_err());
    /// assert!(Command::parse("print a").is_err());
    /// ```
    pub fn parse(statement: &str) -> EvalResult<Self> {
        let words = statement_words(statement).ok_or_else(|| {
            RuntimeError::MalformedCommand { details: "expected a single statement".to_string() }
        })?;

        let [keyword, arguments @ ..] = words.as_slice() else {
            return Err(Self::too_short());
        };
        if arguments.is_empty() {
            return Err(Self::too_short());
        }

        Ok(Self { keyword:   keyword.parse()?,
                  arguments: arguments.iter().map(ToString::to_string).collect(), })
    }

    fn too_short() -> RuntimeError {
        RuntimeError::MalformedCommand { details: "must have at least 2 parts".to_string() }
    }

    /// The operation keyword.
    #[must_use]
    pub const fn keyword(&self) -> Keyword {
        self.keyword
    }

    /// The category of the operation.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.keyword.category()
    }

    /// The argument tokens, in order.
    #[must_use]
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// Returns the arguments if there are exactly `N` of them.
    ///
    /// # Errors
    /// Returns [`RuntimeError::MalformedCommand`] naming the keyword and the
    /// expected count otherwise.
    pub fn expect_arguments<const N: usize>(&self) -> EvalResult<&[String; N]> {
        <&[String; N]>::try_from(self.arguments.as_slice()).map_err(|_| {
            RuntimeError::MalformedCommand { details: format!("'{}' expects {} argument{}, found {}",
                                                              self.keyword,
                                                              N,
                                                              if N == 1 { "" } else { "s" },
                                                              self.arguments.len()) }
        })
    }
}
