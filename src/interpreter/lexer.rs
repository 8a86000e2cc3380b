use logos::{Lexer, Logos};

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Keywords are recognized case-insensitively and are never produced as
/// identifiers.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Real literal tokens, such as `3.14`, `.5` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_float)]
    Real(f64),
    /// Integer literal tokens: decimal `42`, octal `052`, hexadecimal `0x2A`
    /// or binary `0b101010`.
    #[regex(r"0[xX][0-9a-fA-F]+", |lex| parse_radix(lex, 16))]
    #[regex(r"0[bB][01]+", |lex| parse_radix(lex, 2))]
    Integer(i64),
    /// A run of decimal digits. Never emitted; its callback turns it into
    /// an [`Token::Integer`] or, when too large, a [`Token::Real`].
    #[regex(r"[0-9]+", lex_decimal)]
    Digits,
    /// Identifier tokens; variable names such as `x` or `total`.
    Identifier(String),
    /// A letter followed by letters, digits or `_`. Never emitted;
    /// its callback turns it into a keyword, a label or an identifier.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*", lex_word)]
    Word,
    /// A label definition: an identifier immediately followed by `:`, as in
    /// `top:`. The colon is part of the token.
    Label(String),
    /// `begin`
    Begin,
    /// `end`
    End,
    /// `vector`
    Vector,
    /// `of`
    Of,
    /// `goto`
    Goto,
    /// `read`
    Read,
    /// `write`
    Write,
    /// `skip`
    Skip,
    /// `space`
    Space,
    /// `tab`
    Tab,
    /// `if`
    If,
    /// `then`
    Then,
    /// `else`
    Else,
    /// `loop`
    Loop,
    /// `integer`
    IntegerType,
    /// `real`
    RealType,
    /// `mod`
    Mod,
    /// `:=`
    #[token(":=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Equals,
    /// `<>`
    #[token("<>")]
    NotEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `,`
    #[token(",")]
    Comma,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `{ Comments. }`, possibly spanning lines.
    #[regex(r"\{[^}]*\}", |lex| {
        let newlines     = lex.slice().matches('\n').count();
        lex.extras.line += newlines;
        logos::Skip
    }, allow_greedy = true)]
    Comment,
    /// A `{` comment that runs to the end of input.
    #[regex(r"\{[^}]*", allow_greedy = true)]
    UnterminatedComment,
    /// A trailing `.` program terminator.
    #[token(".", logos::skip)]
    Terminator,
    /// Newlines only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Converts source text into `(Token, line)` pairs.
///
/// Comments, whitespace and the optional trailing `.` are dropped.
///
/// # Errors
/// - `UnterminatedComment` if a `{` comment is never closed.
/// - `InvalidNumber` if an integer literal does not fit in 64 bits.
/// - `UnexpectedToken` for any character that starts no token.
///
/// # Example
/// ```
/// use hopscotch::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("top: x := 0x1F { comment }").unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|(token, _)| token).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Label("top".into()),
///                 Token::Identifier("x".into()),
///                 Token::Assign,
///                 Token::Integer(31)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        match token {
            Ok(Token::UnterminatedComment) => {
                return Err(ParseError::UnterminatedComment { line: lexer.extras.line });
            },
            Ok(tok) => tokens.push((tok, lexer.extras.line)),
            Err(()) => {
                let slice = lexer.slice();
                let line = lexer.extras.line;
                if slice.starts_with(|c: char| c.is_ascii_digit()) {
                    return Err(ParseError::InvalidNumber { literal: slice.to_string(),
                                                           line });
                }
                return Err(ParseError::UnexpectedToken { token: slice.to_string(),
                                                         line });
            },
        }
    }

    Ok(tokens)
}

/// Classifies a word as a keyword, a label definition or an identifier.
///
/// Keywords are matched case-insensitively. A non-keyword word directly
/// followed by `:` becomes a [`Token::Label`] and the colon is consumed,
/// unless the colon starts `:=` or introduces a declared type (`x: integer`),
/// in which case the word stays an identifier.
fn lex_word(lex: &mut Lexer<Token>) -> Token {
    let word = lex.slice();
    if let Some(keyword) = keyword(word) {
        return keyword;
    }

    let name = word.to_string();
    let is_label = lex.remainder()
                      .strip_prefix(':')
                      .is_some_and(|after| !after.starts_with('=') && !starts_with_type(after));
    if is_label {
        lex.bump(1);
        return Token::Label(name);
    }

    Token::Identifier(name)
}

fn keyword(word: &str) -> Option<Token> {
    let token = match word.to_ascii_lowercase().as_str() {
        "begin" => Token::Begin,
        "end" => Token::End,
        "vector" => Token::Vector,
        "of" => Token::Of,
        "goto" => Token::Goto,
        "read" => Token::Read,
        "write" => Token::Write,
        "skip" => Token::Skip,
        "space" => Token::Space,
        "tab" => Token::Tab,
        "if" => Token::If,
        "then" => Token::Then,
        "else" => Token::Else,
        "loop" => Token::Loop,
        "integer" => Token::IntegerType,
        "real" => Token::RealType,
        "mod" => Token::Mod,
        _ => return None,
    };
    Some(token)
}

/// Whether `text` (what follows a `:`) begins with a type keyword.
fn starts_with_type(text: &str) -> bool {
    let text = text.trim_start();
    let end = text.find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
                  .unwrap_or(text.len());
    matches!(text[..end].to_ascii_lowercase().as_str(),
             "integer" | "real" | "vector")
}

/// Parses a floating-point literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_float(lex: &Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses a run of decimal digits.
///
/// A leading `0` followed only by octal digits is read as octal. Decimal
/// values too large for `i64` are kept as reals.
fn lex_decimal(lex: &Lexer<Token>) -> Token {
    let digits = lex.slice();

    if digits.len() > 1
       && digits.starts_with('0')
       && digits.bytes().all(|b| (b'0'..=b'7').contains(&b))
       && let Ok(value) = i64::from_str_radix(&digits[1..], 8)
    {
        return Token::Integer(value);
    }

    match digits.parse::<i64>() {
        Ok(value) => Token::Integer(value),
        Err(_) => digits.parse().map_or(Token::Real(f64::INFINITY), Token::Real),
    }
}

/// Parses a prefixed hexadecimal or binary literal, skipping the `0x`/`0b`.
fn parse_radix(lex: &Lexer<Token>, radix: u32) -> Option<i64> {
    i64::from_str_radix(&lex.slice()[2..], radix).ok()
}
