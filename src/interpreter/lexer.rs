use std::ops::Range;

use logos::Logos;

use crate::error::LexError;

/// The kind of a lexical token.
///
/// Numbers and identifiers carry no value; their text is recovered from the
/// token's span when the parser needs it.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t]+")]
pub enum TokenKind {
    /// A run of digits and dots, such as `3.14`, `.5` or `1.2.3`.
    ///
    /// Runs with more than one dot still lex as one token and are rejected
    /// when the parser converts them.
    #[regex(r"[0-9.]+")]
    Number,
    /// Variable names such as `x` or `rate2`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*")]
    Identifier,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Solidus,
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `=`
    #[token("=")]
    Equals,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Number => "Number",
            Self::Identifier => "Ident",
            Self::Plus => "Plus",
            Self::Minus => "Minus",
            Self::Asterisk => "Asterisk",
            Self::Solidus => "Solidus",
            Self::LeftParen => "LeftParen",
            Self::RightParen => "RightParen",
            Self::Equals => "Equals",
        };
        write!(f, "{name}")
    }
}

/// A single token and the byte range of the source it covers.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// Byte range into the source line.
    pub span: Range<usize>,
}

impl Token {
    /// Returns the source text covered by this token.
    ///
    /// `source` must be the line this token was produced from.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span.clone()]
    }

    /// Returns the 1-based column where this token starts.
    #[must_use]
    pub fn column(&self, source: &str) -> usize {
        column_at(source, self.span.start)
    }
}

/// Converts a byte offset into a 1-based character column.
#[must_use]
pub fn column_at(source: &str, offset: usize) -> usize {
    source[..offset].chars().count() + 1
}

/// Splits a line into tokens.
///
/// Whitespace is skipped. The first character that starts no token aborts
/// the whole line; no partial token list is returned.
///
/// # Errors
/// Returns [`LexError::UnknownSymbol`] for any character other than a digit,
/// `.`, an ASCII letter, one of `+ - * / ( ) =`, a space or a tab.
///
/// # Examples
/// ```
/// use reckon::interpreter::lexer::{TokenKind, tokenize};
///
/// let source = "rate * 1.5";
/// let tokens = tokenize(source).unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds, [TokenKind::Identifier, TokenKind::Asterisk, TokenKind::Number]);
/// assert_eq!(tokens[2].text(source), "1.5");
///
/// assert!(tokenize("2 % 3").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(kind) = lexer.next() {
        let span = lexer.span();
        if let Ok(kind) = kind {
            tokens.push(Token { kind, span });
        } else {
            let symbol = source[span.start..].chars().next().unwrap_or_default();
            return Err(LexError::UnknownSymbol { symbol,
                                                 column: column_at(source, span.start) });
        }
    }

    Ok(tokens)
}
