use logos::Logos;

/// The character separating statements on a line.
pub const STATEMENT_SEPARATOR: char = ';';

/// Represents a lexical token of the command language.
///
/// A line is nothing more than words and statement separators; whitespace
/// between words is skipped.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token<'source> {
    /// `;`
    #[token(";")]
    Separator,
    /// A keyword, literal or variable name such as `add`, `XIV`, `12` or `a`.
    #[regex(r"[^ \t\r\n\f;]+", |lex| lex.slice())]
    Word(&'source str),
}

/// Splits a line into its raw statements.
///
/// Statements are the stretches of source between separators, trimmed of
/// surrounding whitespace. Blank statements, such as the one following a
/// trailing separator, are dropped.
///
/// # Example
/// ```
/// use numera::interpreter::lexer::split_statements;
///
/// let statements = split_statements("set a X; display a;");
/// assert_eq!(statements, vec!["set a X", "display a"]);
/// ```
#[must_use]
pub fn split_statements(line: &str) -> Vec<&str> {
    let mut statements = Vec::new();
    let mut start = 0;

    for (token, span) in Token::lexer(line).spanned() {
        if token == Ok(Token::Separator) {
            statements.push(&line[start..span.start]);
            start = span.end;
        }
    }
    statements.push(&line[start..]);

    statements.into_iter().map(str::trim).filter(|s| !s.is_empty()).collect()
}

/// Splits a single statement into its words.
///
/// One trailing separator is accepted and ignored. Any other separator means
/// the text holds more than one statement, which is reported as `None`.
#[must_use]
pub fn statement_words(statement: &str) -> Option<Vec<&str>> {
    let mut tokens: Vec<Token<'_>> = Token::lexer(statement).filter_map(Result::ok).collect();

    if tokens.last() == Some(&Token::Separator) {
        tokens.pop();
    }

    tokens.into_iter()
          .map(|token| match token {
              Token::Word(word) => Some(word),
              Token::Separator => None,
          })
          .collect()
}
