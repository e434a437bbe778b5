use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_additive, cursor::TokenCursor, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses the tokens of one line into a single tree.
///
/// The whole token list must form exactly one statement; anything left over
/// after the statement is an error.
///
/// # Parameters
/// - `tokens`: The tokens produced by the lexer for `source`.
/// - `source`: The line the tokens were produced from.
///
/// # Errors
/// - `UnexpectedEndOfInput` if the tokens end while a token is still required,
///   including for an empty line.
/// - `UnexpectedTrailingTokens` if tokens remain after a complete statement.
/// - Any error raised while parsing the statement itself.
pub fn parse(tokens: &[Token], source: &str) -> ParseResult<Node> {
    let mut cursor = TokenCursor::new(tokens, source);
    let node = parse_statement(&mut cursor)?;

    if let Some(extra) = cursor.peek() {
        return Err(ParseError::UnexpectedTrailingTokens { token:  cursor.rest_from(extra)
                                                                        .to_string(),
                                                          column: cursor.column(extra), });
    }

    Ok(node)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition, and descends through the precedence
/// hierarchy.
///
/// Grammar: `expression := additive`
pub fn parse_expression(tokens: &mut TokenCursor<'_>) -> ParseResult<Node> {
    parse_additive(tokens)
}
