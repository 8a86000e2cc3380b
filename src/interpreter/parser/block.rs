use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            statement::{is_declaration, parse_declaration, parse_statement},
        },
    },
};

/// Parses the statements of a block or loop body up to and including its
/// closing `end`.
///
/// The rule is: `body := { item ";" } [item] "end"`
///
/// Statements are separated by `;`; a separator before `end` is optional,
/// and a doubled separator yields an empty statement. Each label becomes its
/// own [`Statement::Label`] marker directly before the statement it labels.
///
/// # Parameters
/// - `tokens`: Token stream positioned after `begin` or `loop`.
/// - `line`: Line of the opening keyword, reported if `end` is missing.
///
/// # Errors
/// `MissingEnd` if input runs out before the closing `end`.
pub fn parse_body<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::End, _)) => {
                tokens.next();
                return Ok(statements);
            },
            None => return Err(ParseError::MissingEnd { line }),
            _ => {},
        }

        parse_item(tokens, &mut statements)?;

        match tokens.peek().copied() {
            Some((Token::Semicolon, _)) => {
                tokens.next();
            },
            Some((Token::End, _)) => {},
            Some((token, line)) => {
                return Err(ParseError::Expected { expected: "';' or 'end'".to_string(),
                                                  found:    format!("{token:?}"),
                                                  line:     *line, });
            },
            None => return Err(ParseError::MissingEnd { line }),
        }
    }
}

/// What a body item starts with.
enum Item {
    /// A label definition spanning `width` tokens.
    Label {
        name:  String,
        line:  usize,
        width: usize,
    },
    Declaration,
    Statement,
}

/// Parses one body item: any number of labels, then a declaration or a
/// statement.
///
/// A label with nothing after it labels an empty statement.
fn parse_item<'a, I>(tokens: &mut Peekable<I>, statements: &mut Vec<Statement>) -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    loop {
        match classify(tokens) {
            Item::Label { name, line, width } => {
                for _ in 0..width {
                    tokens.next();
                }
                statements.push(Statement::Label { name, line });
            },
            Item::Declaration => {
                statements.push(parse_declaration(tokens)?);
                return Ok(());
            },
            Item::Statement => {
                statements.push(parse_statement(tokens)?);
                return Ok(());
            },
        }
    }
}

/// Looks ahead without consuming to decide how the next item begins.
///
/// Besides the lexer's `name:` label token, `name :` written with a space is
/// also a label as long as it is not the start of a declaration.
fn classify<'a, I>(tokens: &Peekable<I>) -> Item
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();

    match lookahead.next() {
        Some((Token::Label(name), line)) => Item::Label { name:  name.clone(),
                                                          line:  *line,
                                                          width: 1, },
        Some((Token::Identifier(_), _)) if is_declaration(tokens.clone()) => Item::Declaration,
        Some((Token::Identifier(name), line))
            if matches!(lookahead.peek(), Some((Token::Colon, _))) =>
        {
            Item::Label { name:  name.clone(),
                          line:  *line,
                          width: 2, }
        },
        _ => Item::Statement,
    }
}
