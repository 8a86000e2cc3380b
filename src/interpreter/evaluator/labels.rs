use std::collections::{HashMap, hash_map::Entry};

use tracing::debug;

use crate::{
    ast::{Block, Statement},
    error::RuntimeError,
    interpreter::evaluator::{core::EvalResult, frame::Frame},
};

/// Where a label lives: the frames that must be open for execution to
/// resume at it, outermost first.
///
/// The last frame's cursor points at the label marker itself. Every other
/// frame's cursor points at the block, loop or `if` statement that contains
/// the next frame.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelAddress<'a> {
    frames:   Vec<Frame<'a>>,
    /// Line the label is defined on.
    pub line: usize,
}

impl<'a> LabelAddress<'a> {
    /// The frames to install when jumping here.
    #[must_use]
    pub fn frames(&self) -> &[Frame<'a>] {
        &self.frames
    }

    /// Nesting depth of the label; `1` for labels in the program's root block.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}

/// Maps each label name to its address.
///
/// Built once per program by a pre-order walk over the whole tree, so labels
/// inside nested blocks, loops and `if` branches are all reachable from
/// anywhere.
#[derive(Debug, Default)]
pub struct LabelTable<'a> {
    addresses: HashMap<&'a str, LabelAddress<'a>>,
}

impl<'a> LabelTable<'a> {
    /// Collects every label of `program`.
    ///
    /// # Errors
    /// `DuplicateLabel` if a name is defined more than once anywhere in the
    /// program.
    pub fn build(program: &'a Block) -> EvalResult<Self> {
        let mut table = Self::default();
        table.collect_sequence(&program.statements, false, &mut Vec::new())?;

        debug!(labels = table.len(), "built label table");
        Ok(table)
    }

    /// Looks up a label.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&LabelAddress<'a>> {
        self.addresses.get(name)
    }

    /// Looks up the target of a `goto` on `line`.
    ///
    /// # Errors
    /// `UndefinedLabel` if no label called `name` exists.
    pub fn resolve(&self, name: &str, line: usize) -> EvalResult<&LabelAddress<'a>> {
        self.get(name)
            .ok_or_else(|| RuntimeError::UndefinedLabel { name: name.to_string(),
                                                          line })
    }

    /// Number of labels defined in the program.
    #[must_use]
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    /// Whether the program defines no labels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    fn collect_sequence(&mut self,
                        statements: &'a [Statement],
                        is_loop: bool,
                        ancestors: &mut Vec<Frame<'a>>)
                        -> EvalResult<()> {
        for (index, statement) in statements.iter().enumerate() {
            let here = Frame::at(statements, index, is_loop);
            self.collect_statement(statement, here, ancestors)?;
        }

        Ok(())
    }

    fn collect_statement(&mut self,
                         statement: &'a Statement,
                         here: Frame<'a>,
                         ancestors: &mut Vec<Frame<'a>>)
                         -> EvalResult<()> {
        match statement {
            Statement::Label { name, line } => {
                let mut frames = ancestors.clone();
                frames.push(here);
                self.define(name, LabelAddress { frames, line: *line })
            },
            Statement::Block(block) => {
                self.collect_nested(&block.statements, false, here, ancestors)
            },
            Statement::Loop { body, .. } => {
                self.collect_nested(&body.statements, true, here, ancestors)
            },
            // A branch opens its frame while the enclosing cursor still
            // points at the `if`, so branch contents share its position.
            Statement::If { then_branch,
                            else_branch,
                            .. } => {
                self.collect_statement(then_branch, here, ancestors)?;

                if let Some(else_branch) = else_branch {
                    self.collect_statement(else_branch, here, ancestors)?;
                }

                Ok(())
            },
            _ => Ok(()),
        }
    }

    fn collect_nested(&mut self,
                      statements: &'a [Statement],
                      is_loop: bool,
                      here: Frame<'a>,
                      ancestors: &mut Vec<Frame<'a>>)
                      -> EvalResult<()> {
        ancestors.push(here);
        let result = self.collect_sequence(statements, is_loop, ancestors);
        ancestors.pop();
        result
    }

    fn define(&mut self, name: &'a str, address: LabelAddress<'a>) -> EvalResult<()> {
        match self.addresses.entry(name) {
            Entry::Occupied(existing) => {
                Err(RuntimeError::DuplicateLabel { name:       name.to_string(),
                                                   first_line: existing.get().line,
                                                   line:       address.line, })
            },
            Entry::Vacant(slot) => {
                slot.insert(address);
                Ok(())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn root_label_points_at_its_marker() {
        let program = parse("begin write 1; top: write 2 end").unwrap();
        let table = LabelTable::build(&program).unwrap();
        let address = table.get("top").unwrap();

        assert_eq!(address.depth(), 1);
        assert_eq!(address.frames()[0].cursor, 1);
        assert!(matches!(address.frames()[0].current(), Some(Statement::Label { .. })));
    }

    #[test]
    fn nested_label_records_ancestor_positions() {
        let program = parse("begin x: integer; begin write 1; inner: write 2 end end").unwrap();
        let table = LabelTable::build(&program).unwrap();
        let frames = table.get("inner").unwrap().frames();

        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].cursor, 1);
        assert!(matches!(frames[0].current(), Some(Statement::Block(_))));
        assert_eq!(frames[1].cursor, 1);
        assert!(!frames[1].is_loop);
        assert!(matches!(frames[1].statements[2], Statement::Write { .. }));
    }

    #[test]
    fn loop_label_is_marked_as_loop() {
        let program = parse("begin loop write 0; again: write 1 end end").unwrap();
        let table = LabelTable::build(&program).unwrap();
        let frames = table.get("again").unwrap().frames();

        assert!(!frames[0].is_loop);
        assert!(frames[1].is_loop);
        assert_eq!(frames[1].cursor, 1);
    }

    #[test]
    fn label_inside_if_branch_is_found() {
        let program = parse("begin if 1 then begin inside: write 1 end else write 2 end").unwrap();
        let table = LabelTable::build(&program).unwrap();
        let frames = table.get("inside").unwrap().frames();

        assert_eq!(frames.len(), 2);
        assert!(matches!(frames[0].current(), Some(Statement::If { .. })));
        assert_eq!(frames[1].cursor, 0);
    }

    #[test]
    fn duplicate_labels_are_rejected() {
        let program = parse("begin\n a: write 1;\n begin\n  a: write 2\n end\nend").unwrap();

        assert_eq!(LabelTable::build(&program).unwrap_err(),
                   RuntimeError::DuplicateLabel { name:       "a".into(),
                                                  first_line: 2,
                                                  line:       4, });
    }

    #[test]
    fn unknown_label_fails_to_resolve() {
        let program = parse("begin write 1 end").unwrap();
        let table = LabelTable::build(&program).unwrap();

        assert!(table.is_empty());
        assert_eq!(table.resolve("nowhere", 3).unwrap_err(),
                   RuntimeError::UndefinedLabel { name: "nowhere".into(),
                                                  line: 3, });
    }
}
