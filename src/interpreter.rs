/// The evaluator module executes a parsed program.
///
/// The evaluator walks the program with an explicit stack of frames rather
/// than by recursion, which is what lets a `goto` transfer control into or
/// out of any block or loop. It also evaluates expressions and owns the
/// variable environment.
///
/// # Responsibilities
/// - Builds the label table and rejects duplicate labels before running.
/// - Executes statements, loops, blocks and jumps.
/// - Reports runtime errors such as division by zero or undefined labels.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each paired with the line it appears on. Keywords are recognized
/// case-insensitively and `{ ... }` comments are dropped.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Reads decimal, octal, hexadecimal, binary and real literals.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the program tree from tokens.
///
/// The parser is a recursive descent parser over the token stream. It
/// produces the root block, with labels kept as marker statements in the
/// sequence they appear in.
///
/// # Responsibilities
/// - Converts tokens into blocks, statements and expressions.
/// - Validates the grammar, reporting errors with line info.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Values are integers, reals, booleans produced by comparisons, raw text
/// produced by `read`, and vectors.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements numeric promotion, equality and truthiness.
/// - Defines how `write` prints each value.
pub mod value;
