use crate::{
    ast::{BinaryOperator, Node},
    interpreter::{
        lexer::TokenKind,
        parser::{core::ParseResult, cursor::TokenCursor, primary::parse_primary},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`. Each new operand
/// is folded into the tree built so far, so `8 - 4 - 2` becomes
/// `(8 - 4) - 2`. Every operator adds a level to the left spine, so each one
/// counts against the cursor's depth limit.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Cursor over the line's tokens.
///
/// # Returns
/// A `Node::BinaryOp` tree representing the parsed expression.
pub fn parse_additive(tokens: &mut TokenCursor<'_>) -> ParseResult<Node> {
    let mut left = parse_multiplicative(tokens)?;
    let mut levels = 0;
    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token.kind)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.advance();
            tokens.descend(token)?;
            levels += 1;
            let right = parse_multiplicative(tokens)?;
            left = Node::binary(op, left, right, tokens.column(token));
            continue;
        }
        break;
    }
    tokens.ascend(levels);
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*` and `/`.
///
/// The rule is: `multiplicative := primary (("*" | "/") primary)*`
///
/// # Parameters
/// - `tokens`: Cursor over the line's tokens.
///
/// # Returns
/// A binary expression tree combining primary nodes.
pub fn parse_multiplicative(tokens: &mut TokenCursor<'_>) -> ParseResult<Node> {
    let mut left = parse_primary(tokens)?;
    let mut levels = 0;
    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token.kind)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            tokens.advance();
            tokens.descend(token)?;
            levels += 1;
            let right = parse_primary(tokens)?;
            left = Node::binary(op, left, right, tokens.column(token));
            continue;
        }
        break;
    }
    tokens.ascend(levels);
    Ok(left)
}

/// Maps a token kind to the binary operator it denotes, if any.
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Asterisk => Some(BinaryOperator::Mul),
        TokenKind::Solidus => Some(BinaryOperator::Div),
        _ => None,
    }
}
