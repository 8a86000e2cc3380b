use std::iter::Peekable;

use crate::{
    ast::{Block, Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_relational, block::parse_body, statement::parse_statement, utils::expect,
        },
    },
};

/// Result type used by the parser.
///
/// Every parsing rule returns either the node it built or the `ParseError`
/// that stopped it.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete program.
///
/// A program is a single `begin ... end` block. Trailing `;` separators after
/// the final `end` are accepted; anything else after it is an error.
///
/// # Parameters
/// - `tokens`: The tokens produced by the lexer.
///
/// # Returns
/// The root [`Block`].
///
/// # Example
/// ```
/// use hopscotch::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let tokens = tokenize("begin x: integer; x := 1 end").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.statements.len(), 2);
/// assert!(parse_program(&tokenize("x := 1").unwrap()).is_err());
/// ```
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseResult<Block> {
    let last_line = tokens.last().map_or(1, |(_, line)| *line);

    parse_block_program(tokens).map_err(|error| match error {
                                   ParseError::UnexpectedEndOfInput { .. } => {
                                       ParseError::UnexpectedEndOfInput { line: last_line }
                                   },
                                   other => other,
                               })
}

/// Parses the program block. Rules that run out of tokens report
/// `UnexpectedEndOfInput` with whatever line they know; [`parse_program`]
/// replaces it with the line of the last token.
fn parse_block_program(tokens: &[(Token, usize)]) -> ParseResult<Block> {
    let mut tokens = tokens.iter().peekable();

    let line = match tokens.next() {
        Some((Token::Begin, line)) => *line,
        Some((_, line)) => return Err(ParseError::ProgramNotBlock { line: *line }),
        None => return Err(ParseError::ProgramNotBlock { line: 1 }),
    };

    let statements = parse_body(&mut tokens, line)?;

    while let Some((Token::Semicolon, _)) = tokens.peek() {
        tokens.next();
    }

    if let Some((token, line)) = tokens.next() {
        return Err(ParseError::UnexpectedToken { token: format!("{token:?} after the program's final 'end'"),
                                                 line:  *line, });
    }

    Ok(Block { statements, line })
}

/// Parses an expression.
///
/// This is the entry point for expression parsing; it starts at the lowest
/// precedence level, the relational operators.
///
/// The full precedence ladder, lowest first:
/// `relational -> additive -> multiplicative -> unary -> term`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_relational(tokens)
}

/// Parses an `if` statement after its `if` keyword has been consumed.
///
/// The rule is: `if := "if" expr "then" statement ["else" statement]`
///
/// Both branches are single unlabelled statements; a `begin ... end` block
/// groups several. A dangling `else` binds to the nearest `if`.
///
/// # Parameters
/// - `tokens`: Token stream positioned after `if`.
/// - `line`: Line of the `if` keyword.
pub fn parse_if<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let condition = parse_expression(tokens)?;
    expect(tokens, &Token::Then, "'then' after the condition", line)?;
    let then_branch = parse_statement(tokens)?;

    let else_branch = if let Some((Token::Else, _)) = tokens.peek() {
        tokens.next();
        Some(Box::new(parse_statement(tokens)?))
    } else {
        None
    };

    Ok(Statement::If { condition,
                       then_branch: Box::new(then_branch),
                       else_branch,
                       line })
}
