use std::iter::Peekable;

use crate::{
    ast::Target,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a non-empty comma-separated list.
///
/// This utility is shared by declarations, `read` and `write`. It calls
/// `parse_item` once, then again after every `,`. The list ends at the
/// first token that is not a comma, which is left in the stream.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item.
/// - `parse_item`: Function used to parse each list element.
///
/// # Returns
/// A vector of parsed items.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = vec![parse_item(tokens)?];

    while let Some((Token::Comma, _)) = tokens.peek() {
        tokens.next();
        items.push(parse_item(tokens)?);
    }

    Ok(items)
}

/// Parses a plain identifier and returns its name and line.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
/// - `line`: Line reported if input ends here.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>,
                                                              line: usize)
                                                              -> ParseResult<(String, usize)>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Identifier(name), line)) => Ok((name.clone(), *line)),
        Some((token, line)) => Err(ParseError::Expected { expected: "an identifier".to_string(),
                                                          found:    format!("{token:?}"),
                                                          line:     *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Parses an assignment or `read` target: `ident ["[" expr "]"]`.
pub(in crate::interpreter::parser) fn parse_target<'a, I>(tokens: &mut Peekable<I>,
                                                          line: usize)
                                                          -> ParseResult<Target>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, line) = parse_identifier(tokens, line)?;

    let index = if let Some((Token::LBracket, _)) = tokens.peek() {
        tokens.next();
        let index = parse_expression(tokens)?;
        expect(tokens, &Token::RBracket, "']' after the index", line)?;
        Some(index)
    } else {
        None
    };

    Ok(Target { name, index, line })
}

/// Consumes the next token, which must equal `expected`.
///
/// # Parameters
/// - `expected`: The required token.
/// - `description`: How to name it in the error message.
/// - `line`: Line reported if input ends here.
///
/// # Returns
/// The line of the consumed token.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token,
                                                    description: &str,
                                                    line: usize)
                                                    -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((token, line)) if token == expected => Ok(*line),
        Some((token, line)) => Err(ParseError::Expected { expected: description.to_string(),
                                                          found:    format!("{token:?}"),
                                                          line:     *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}
