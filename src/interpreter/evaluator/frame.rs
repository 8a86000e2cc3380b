use crate::ast::Statement;

/// One open statement sequence on the position stack.
///
/// A frame borrows its statements from the program tree and owns nothing
/// else, so the whole stack can be discarded and rebuilt at any time. The
/// same shape is used for the segments of a label address.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame<'a> {
    /// The statements of the block or loop body.
    pub statements: &'a [Statement],
    /// Index of the statement to execute next.
    pub cursor:     usize,
    /// Whether reaching the end restarts the sequence instead of closing it.
    pub is_loop:    bool,
}

impl<'a> Frame<'a> {
    /// Opens a sequence at its first statement.
    #[must_use]
    pub const fn new(statements: &'a [Statement], is_loop: bool) -> Self {
        Self::at(statements, 0, is_loop)
    }

    /// Opens a sequence positioned at `cursor`.
    #[must_use]
    pub const fn at(statements: &'a [Statement], cursor: usize, is_loop: bool) -> Self {
        Self { statements,
               cursor,
               is_loop }
    }

    /// The statement under the cursor, or `None` once the end is reached.
    #[must_use]
    pub fn current(&self) -> Option<&'a Statement> {
        self.statements.get(self.cursor)
    }

    /// Moves the cursor to the next statement.
    pub const fn advance(&mut self) {
        self.cursor += 1;
    }

    /// Moves the cursor back to the first statement.
    pub const fn restart(&mut self) {
        self.cursor = 0;
    }
}
