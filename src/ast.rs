/// Represents a numeric literal in the language.
///
/// Literals are produced by the lexer from decimal, octal, hexadecimal and
/// binary integer forms, or from real forms with an optional exponent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

/// The element type named in a declaration (`integer` or `real`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    /// `integer`
    Integer,
    /// `real`
    Real,
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Real => write!(f, "real"),
        }
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Expressions are side-effect free: evaluating one only reads variables.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Element access on a vector variable (e.g. `v[2]`).
    Index {
        /// Name of the vector variable.
        name:  String,
        /// The index expression.
        index: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A unary operation (negation).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (arithmetic or relational).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number of the operator token.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use hopscotch::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::Index { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. } => *line,
        }
    }
}

/// The place a value is stored into: a plain variable or one vector element.
///
/// Used by assignments and `read`.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    /// The variable name.
    pub name:  String,
    /// The element index, for vector targets like `v[i]`.
    pub index: Option<Expr>,
    /// Line number in the source code.
    pub line:  usize,
}

impl Target {
    /// Creates a target naming a whole variable.
    #[must_use]
    pub fn variable(name: &str, line: usize) -> Self {
        Self { name: name.to_string(),
               index: None,
               line }
    }
}

/// Layout directives accepted by `write`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `space`: prints a single space.
    Space,
    /// `tab`: prints a horizontal tab.
    Tab,
    /// `skip`: prints nothing.
    Skip,
}

/// One item of a `write` statement.
#[derive(Debug, Clone, PartialEq)]
pub enum WriteItem {
    /// An expression whose value is printed.
    Expr(Expr),
    /// A layout directive.
    Layout(Layout),
}

/// A bounded sequence of statements (`begin ... end`, or a loop body).
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// The statements in source order.
    pub statements: Vec<Statement>,
    /// Line number of the opening keyword.
    pub line:       usize,
}

/// Represents a statement.
///
/// The parser produces a single [`Statement::Block`]-shaped root ([`Block`])
/// whose body nests further blocks and loops arbitrarily. Labels are markers
/// placed directly before the statement they label in the same sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A nested `begin ... end` block. Falling off its end exits it.
    Block(Block),
    /// An infinite `loop ... end`. Falling off the end of its body restarts
    /// it; only a `goto` can leave it.
    Loop {
        /// The loop body.
        body: Block,
        /// Line number in the source code.
        line: usize,
    },
    /// `if <condition> then <statement> [else <statement>]`.
    If {
        /// The condition expression.
        condition:   Expr,
        /// Statement executed when the condition is truthy.
        then_branch: Box<Self>,
        /// Statement executed otherwise, if present.
        else_branch: Option<Box<Self>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// A declaration of one or more variables of identical type.
    VarDecl {
        /// The declared names.
        names:        Vec<String>,
        /// Whether the names are declared as `vector [size] of <type>`.
        is_vector:    bool,
        /// The vector size expression, when `is_vector` is set.
        size:         Option<Expr>,
        /// The element type.
        element_type: ElementType,
        /// Line number in the source code.
        line:         usize,
    },
    /// `<target> := <expression>`.
    Assign {
        /// Where the value is stored.
        target: Target,
        /// The value expression.
        value:  Expr,
        /// Line number in the source code.
        line:   usize,
    },
    /// `read <target>, ...`.
    Read {
        /// Targets filled in order, one input line each.
        targets: Vec<Target>,
        /// Line number in the source code.
        line:    usize,
    },
    /// `write <item>, ...`.
    Write {
        /// Items printed left to right.
        items: Vec<WriteItem>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `goto <label>`.
    Goto {
        /// The target label name.
        label: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// A label marker. It has no behavior of its own.
    Label {
        /// The label name.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A no-op, produced by a stray separator or a label with nothing after
    /// it.
    Empty {
        /// Line number in the source code.
        line: usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Block(block) => block.line,
            Self::Loop { line, .. }
            | Self::If { line, .. }
            | Self::VarDecl { line, .. }
            | Self::Assign { line, .. }
            | Self::Read { line, .. }
            | Self::Write { line, .. }
            | Self::Goto { line, .. }
            | Self::Label { line, .. }
            | Self::Empty { line } => *line,
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Integer remainder (`mod`)
    Mod,
    /// Equal to (`=`)
    Equal,
    /// Not equal to (`<>`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "mod",
            Equal => "=",
            NotEqual => "<>",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
        };
        write!(f, "{operator}")
    }
}
