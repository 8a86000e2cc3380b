use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, parse_target},
        },
    },
};

/// Parses prefix negation.
///
/// The rule is: `unary := "-" unary | term`
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, line)) = tokens.peek().copied() {
        tokens.next();
        let expr = parse_unary(tokens)?;

        return Ok(Expr::UnaryOp { op:   UnaryOperator::Negate,
                                  expr: Box::new(expr),
                                  line: *line, });
    }

    parse_term(tokens)
}

/// Parses a primary expression: a number, a variable, a vector element or
/// a parenthesised expression.
///
/// The rule is: `term := number | ident ["[" expr "]"] | "(" expr ")"`
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek().copied() {
        Some((Token::Integer(n), line)) => {
            tokens.next();
            Ok(Expr::Literal { value: LiteralValue::Integer(*n),
                               line:  *line, })
        },
        Some((Token::Real(r), line)) => {
            tokens.next();
            Ok(Expr::Literal { value: LiteralValue::Real(*r),
                               line:  *line, })
        },
        Some((Token::Identifier(_), line)) => {
            let target = parse_target(tokens, *line)?;

            Ok(match target.index {
                   Some(index) => Expr::Index { name:  target.name,
                                                index: Box::new(index),
                                                line:  target.line, },
                   None => Expr::Variable { name: target.name,
                                            line: target.line, },
               })
        },
        Some((Token::LParen, line)) => {
            tokens.next();
            let expr = parse_expression(tokens)?;
            expect(tokens, &Token::RParen, "')' after the expression", *line)?;
            Ok(expr)
        },
        Some((token, line)) => Err(ParseError::Expected { expected: "an expression".to_string(),
                                                          found:    format!("{token:?}"),
                                                          line:     *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}
