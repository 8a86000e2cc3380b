use std::iter::Peekable;

use crate::{
    ast::{Block, ElementType, Layout, Statement, WriteItem},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_body,
            core::{ParseResult, parse_expression, parse_if},
            utils::{expect, parse_comma_separated, parse_identifier, parse_target},
        },
    },
};

/// Parses a single unlabelled statement.
///
/// Dispatches on the first token:
/// - `begin` opens a nested block, `loop` an endless loop,
/// - `if`, `goto`, `read` and `write` start their statements,
/// - an identifier starts an assignment,
/// - `;`, `end` or `else` leave an empty statement without consuming.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the statement.
///
/// # Returns
/// The parsed [`Statement`].
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek().copied() {
        Some((Token::Begin, line)) => {
            tokens.next();
            let statements = parse_body(tokens, *line)?;
            Ok(Statement::Block(Block { statements,
                                        line: *line }))
        },
        Some((Token::Loop, line)) => {
            tokens.next();
            let statements = parse_body(tokens, *line)?;
            Ok(Statement::Loop { body: Block { statements,
                                               line: *line },
                                 line: *line, })
        },
        Some((Token::If, line)) => {
            tokens.next();
            parse_if(tokens, *line)
        },
        Some((Token::Goto, line)) => {
            tokens.next();
            let (label, _) = parse_identifier(tokens, *line)?;
            Ok(Statement::Goto { label,
                                 line: *line })
        },
        Some((Token::Read, line)) => {
            tokens.next();
            let targets = parse_comma_separated(tokens, |t| parse_target(t, *line))?;
            Ok(Statement::Read { targets,
                                 line: *line })
        },
        Some((Token::Write, line)) => {
            tokens.next();
            let items = parse_comma_separated(tokens, parse_write_item)?;
            Ok(Statement::Write { items,
                                  line: *line })
        },
        Some((Token::Identifier(_), line)) => parse_assignment(tokens, *line),
        Some((Token::Semicolon | Token::End | Token::Else, line)) => {
            Ok(Statement::Empty { line: *line })
        },
        Some((token, line)) => Err(ParseError::UnexpectedToken { token: format!("{token:?}"),
                                                                 line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses `target := expression`.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let target = parse_target(tokens, line)?;
    expect(tokens, &Token::Assign, "':=' in assignment", line)?;
    let value = parse_expression(tokens)?;

    Ok(Statement::Assign { target,
                           value,
                           line })
}

/// Parses one `write` item: a layout keyword or an expression.
fn parse_write_item<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<WriteItem>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let layout = match tokens.peek() {
        Some((Token::Space, _)) => Layout::Space,
        Some((Token::Tab, _)) => Layout::Tab,
        Some((Token::Skip, _)) => Layout::Skip,
        _ => return Ok(WriteItem::Expr(parse_expression(tokens)?)),
    };

    tokens.next();
    Ok(WriteItem::Layout(layout))
}

/// Whether the tokens start a declaration: `name {, name} : type`, where
/// the type begins with `integer`, `real` or `vector`.
///
/// Takes a copy of the stream and consumes only that.
pub fn is_declaration<'a, I>(mut lookahead: Peekable<I>) -> bool
    where I: Iterator<Item = &'a (Token, usize)>
{
    loop {
        if !matches!(lookahead.next(), Some((Token::Identifier(_), _))) {
            return false;
        }

        match lookahead.next() {
            Some((Token::Comma, _)) => {},
            Some((Token::Colon, _)) => {
                return matches!(lookahead.next(),
                                Some((Token::IntegerType | Token::RealType | Token::Vector, _)));
            },
            _ => return false,
        }
    }
}

/// Parses a declaration of one or more variables.
///
/// The rule is:
/// `declaration := ident {"," ident} ":" ["vector" "[" expr "]" "of"] type`
///
/// All names share one [`Statement::VarDecl`].
pub fn parse_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = tokens.peek().map_or(0, |(_, line)| *line);

    let names = parse_comma_separated(tokens, |t| parse_identifier(t, line).map(|(name, _)| name))?;
    expect(tokens, &Token::Colon, "':' after the declared names", line)?;

    let size = if let Some((Token::Vector, _)) = tokens.peek() {
        tokens.next();
        expect(tokens, &Token::LBracket, "'[' after 'vector'", line)?;
        let size = parse_expression(tokens)?;
        expect(tokens, &Token::RBracket, "']' after the vector size", line)?;
        expect(tokens, &Token::Of, "'of' after the vector size", line)?;
        Some(size)
    } else {
        None
    };

    let element_type = match tokens.next() {
        Some((Token::IntegerType, _)) => ElementType::Integer,
        Some((Token::RealType, _)) => ElementType::Real,
        Some((token, line)) => {
            return Err(ParseError::Expected { expected: "'integer' or 'real'".to_string(),
                                              found:    format!("{token:?}"),
                                              line:     *line, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line }),
    };

    Ok(Statement::VarDecl { names,
                            is_vector: size.is_some(),
                            size,
                            element_type,
                            line })
}
