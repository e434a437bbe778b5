use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            cursor::TokenCursor,
        },
    },
};

/// Parses a primary expression.
///
/// A primary expression is the highest-precedence construct:
/// - number literals, such as `3.14`,
/// - variable references, such as `x`,
/// - a parenthesized expression, such as `(1 + 2)`.
///
/// Grammar:
/// ```text
///     primary := NUMBER | IDENT | "(" expression ")"
/// ```
/// # Errors
/// - `UnexpectedEndOfInput` if no token is left.
/// - `UnexpectedToken` for an operator, `)` or `=` in operand position.
/// - Errors from [`parse_literal`] and [`parse_grouping`].
pub(crate) fn parse_primary(tokens: &mut TokenCursor<'_>) -> ParseResult<Node> {
    let token = tokens.expect_next()?;

    match token.kind {
        TokenKind::Number => parse_literal(tokens, token),
        TokenKind::Identifier => Ok(Node::identifier(tokens.text(token), tokens.column(token))),
        TokenKind::LeftParen => parse_grouping(tokens, token),
        kind => Err(ParseError::UnexpectedToken { token:  format!("{kind} '{}'",
                                                                  tokens.text(token)),
                                                  column: tokens.column(token), }),
    }
}

/// Converts a number token into a literal node.
///
/// The lexer accepts any run of digits and dots, so this is where text such
/// as `1.2.3` or a lone `.` is rejected.
///
/// # Errors
/// Returns `InvalidNumber` when the token text is not a valid `f64` or is too
/// large to be represented as a finite one.
fn parse_literal(tokens: &TokenCursor<'_>, token: &Token) -> ParseResult<Node> {
    let literal = tokens.text(token);
    match literal.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Node::literal(value)),
        _ => Err(ParseError::InvalidNumber { literal: literal.to_string(),
                                             column:  tokens.column(token), }),
    }
}

/// Parses a parenthesized expression.
///
/// The opening parenthesis has already been consumed; `open` is used for the
/// error position.
///
/// # Errors
/// - `ExpectedClosingParen` if the enclosed expression is not followed
///   immediately by `)`.
/// - `NestingTooDeep` if the group opens one level too many.
fn parse_grouping(tokens: &mut TokenCursor<'_>, open: &Token) -> ParseResult<Node> {
    tokens.descend(open)?;
    let expr = parse_expression(tokens)?;
    tokens.ascend(1);

    match tokens.eat(TokenKind::RightParen) {
        Some(_) => Ok(expr),
        None => Err(ParseError::ExpectedClosingParen { column: tokens.column(open) }),
    }
}
