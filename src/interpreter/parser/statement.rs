use crate::{
    ast::Node,
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseResult, parse_expression},
            cursor::TokenCursor,
        },
    },
};

/// Parses a single statement.
///
/// A statement is either an assignment or an expression. An assignment is
/// recognized only when an identifier is immediately followed by `=`;
/// everything else is parsed as an expression.
///
/// Grammar:
/// ```text
///     statement := IDENT "=" expression
///                | expression
/// ```
pub fn parse_statement(tokens: &mut TokenCursor<'_>) -> ParseResult<Node> {
    if let Some(statement) = parse_assignment(tokens)? {
        return Ok(statement);
    }

    parse_expression(tokens)
}

/// Parses an assignment of the form `<name> = <expression>`.
///
/// Returns `Ok(None)` without consuming anything when the next two tokens
/// are not an identifier and `=`.
fn parse_assignment(tokens: &mut TokenCursor<'_>) -> ParseResult<Option<Node>> {
    if tokens.peek_kind(0) != Some(TokenKind::Identifier)
       || tokens.peek_kind(1) != Some(TokenKind::Equals)
    {
        return Ok(None);
    }

    let target = tokens.expect_next()?;
    tokens.expect_next()?;

    let value = parse_expression(tokens)?;
    Ok(Some(Node::assignment(tokens.text(target), value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ParseError, interpreter::lexer::tokenize};

    fn parse_str(source: &str) -> ParseResult<Node> {
        let tokens = tokenize(source).unwrap();
        parse_statement(&mut TokenCursor::new(&tokens, source))
    }

    #[test]
    fn assignment_takes_a_full_expression() {
        assert_eq!(parse_str("total = 1 + 2 * 3").unwrap().to_string(),
                   "total = (1 + (2 * 3))");
    }

    #[test]
    fn identifier_without_equals_is_an_expression() {
        assert_eq!(parse_str("x"), Ok(Node::identifier("x", 1)));
        assert_eq!(parse_str("x + 1").unwrap().to_string(), "(x + 1)");
    }

    #[test]
    fn assignment_needs_a_value() {
        assert_eq!(parse_str("x ="),
                   Err(ParseError::UnexpectedEndOfInput { column: 4 }));
    }

    #[test]
    fn equals_without_target_is_unexpected() {
        assert!(matches!(parse_str("= 5"), Err(ParseError::UnexpectedToken { column: 1, .. })));
        assert!(matches!(parse_str("2 = 5"), Ok(Node::Literal { .. })));
    }
}
