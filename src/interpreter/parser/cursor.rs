use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind, column_at},
        parser::core::ParseResult,
    },
};

/// A read position over the tokens of one line.
///
/// All lookahead goes through `peek`/`peek_nth`, which return `None` past the
/// last token instead of indexing out of bounds. The source line is kept so
/// number and identifier text can be read back from token spans.
///
/// The cursor also counts how deeply the tree under construction is nested.
/// Parsing and evaluation both recurse once per level, so the depth is capped
/// at [`MAX_DEPTH`].
#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    tokens:   &'a [Token],
    source:   &'a str,
    position: usize,
    depth:    usize,
}

/// Deepest tree a single line may produce.
pub const MAX_DEPTH: usize = 256;

impl<'a> TokenCursor<'a> {
    /// Creates a cursor positioned at the first token.
    #[must_use]
    pub const fn new(tokens: &'a [Token], source: &'a str) -> Self {
        Self { tokens,
               source,
               position: 0,
               depth: 0 }
    }

    /// Descends one level into the tree.
    ///
    /// # Errors
    /// Returns [`ParseError::NestingTooDeep`] once more than [`MAX_DEPTH`]
    /// levels are open. `token` is the token that opened the level.
    pub fn descend(&mut self, token: &Token) -> ParseResult<()> {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::NestingTooDeep { column: self.column(token) });
        }
        self.depth += 1;
        Ok(())
    }

    /// Closes `levels` levels opened with [`descend`](Self::descend).
    pub fn ascend(&mut self, levels: usize) {
        self.depth = self.depth.saturating_sub(levels);
    }

    /// Returns the current token without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&'a Token> {
        self.peek_nth(0)
    }

    /// Returns the token `n` positions after the current one.
    #[must_use]
    pub fn peek_nth(&self, n: usize) -> Option<&'a Token> {
        self.tokens.get(self.position + n)
    }

    /// Returns the kind of the token `n` positions ahead.
    #[must_use]
    pub fn peek_kind(&self, n: usize) -> Option<TokenKind> {
        self.peek_nth(n).map(|token| token.kind)
    }

    /// Consumes and returns the current token.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token)
    }

    /// Consumes the current token, failing if the input is exhausted.
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedEndOfInput`] when no token is left.
    pub fn expect_next(&mut self) -> ParseResult<&'a Token> {
        self.advance()
            .ok_or(ParseError::UnexpectedEndOfInput { column: self.end_column() })
    }

    /// Consumes the current token if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> Option<&'a Token> {
        if self.peek_kind(0) == Some(kind) {
            self.advance()
        } else {
            None
        }
    }

    /// Returns the source text of a token.
    #[must_use]
    pub fn text(&self, token: &Token) -> &'a str {
        token.text(self.source)
    }

    /// Returns the source line from the start of `token` to the end.
    #[must_use]
    pub fn rest_from(&self, token: &Token) -> &'a str {
        self.source[token.span.start..].trim_end()
    }

    /// Returns the 1-based column of a token.
    #[must_use]
    pub fn column(&self, token: &Token) -> usize {
        token.column(self.source)
    }

    /// Returns the column just past the end of the line.
    #[must_use]
    pub fn end_column(&self) -> usize {
        column_at(self.source, self.source.len())
    }
}
