use std::io::{BufRead, Write};

use crate::{
    ast::{ElementType, Expr, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Engine, EvalResult, Flow, Jump},
            frame::Frame,
        },
        value::core::Value,
    },
    util::num::i64_to_usize_checked,
};

impl<'a, R: BufRead, W: Write> Engine<'a, R, W> {
    /// Executes one statement.
    ///
    /// Simple statements run to completion here. Blocks and loops are not
    /// entered recursively; they are handed back as a new frame for the
    /// engine to push. A `goto` is handed back as a jump request.
    pub(super) fn execute(&mut self, statement: &'a Statement) -> EvalResult<Flow<'a>> {
        match statement {
            Statement::Block(block) => Ok(Flow::Enter(Frame::new(&block.statements, false))),
            Statement::Loop { body, .. } => Ok(Flow::Enter(Frame::new(&body.statements, true))),
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => {
                if self.environment.eval(condition)?.is_truthy() {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(Flow::Next)
                }
            },
            Statement::VarDecl { names,
                                 is_vector,
                                 size,
                                 element_type,
                                 line, } => {
                let initial = self.initial_value(*is_vector, size.as_ref(), *element_type, *line)?;

                for name in names {
                    self.environment.declare(name, initial.clone());
                }

                Ok(Flow::Next)
            },
            Statement::Assign { target, value, .. } => {
                let value = self.environment.eval(value)?;
                self.environment.store(target, value)?;
                Ok(Flow::Next)
            },
            Statement::Read { targets, line } => {
                self.read(targets, *line)?;
                Ok(Flow::Next)
            },
            Statement::Write { items, line } => {
                self.write(items, *line)?;
                Ok(Flow::Next)
            },
            Statement::Goto { label, line } => Ok(Flow::Jump(Jump { label,
                                                                    line: *line })),
            Statement::Label { .. } | Statement::Empty { .. } => Ok(Flow::Next),
        }
    }

    /// The value a declaration binds each of its names to.
    fn initial_value(&self,
                     is_vector: bool,
                     size: Option<&Expr>,
                     element_type: ElementType,
                     line: usize)
                     -> EvalResult<Value> {
        if !is_vector {
            return Ok(Value::zero(element_type));
        }

        let invalid = |details: String| RuntimeError::InvalidVectorSize { details, line };

        let len = match size.map(|size| self.environment.eval(size)).transpose()? {
            Some(Value::Integer(n)) => {
                i64_to_usize_checked(n, invalid(format!("{n} is negative")))?
            },
            Some(other) => {
                return Err(invalid(format!("expected an integer, found {}", other.kind())));
            },
            None => return Err(invalid("missing size".to_string())),
        };

        let mut elements = Vec::new();
        elements.try_reserve_exact(len)
                .map_err(|_| invalid(format!("{len} elements do not fit in memory")))?;
        elements.resize(len, Value::zero(element_type));

        Ok(Value::Vector(elements))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{interpreter::evaluator::core::EngineOptions, parse};

    fn run(source: &str) -> (EvalResult<()>, String) {
        let program = parse(source).unwrap();
        let mut output = Vec::new();
        let result = Engine::new(&program,
                                 std::io::empty(),
                                 &mut output,
                                 EngineOptions { prompt: false }).and_then(|mut engine| {
                                                                     engine.run()
                                                                 });
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn declaration_zero_initializes_every_name() {
        let (result, output) = run("begin a, b: integer; c: real; write a, space, b, space, c end");

        assert_eq!(result, Ok(()));
        assert_eq!(output, "0 0 0.0\n");
    }

    #[test]
    fn vector_declaration_uses_its_size() {
        let (result, output) = run("begin v: vector [3] of real; v[1] := 2; write v end");

        assert_eq!(result, Ok(()));
        assert_eq!(output, "[0.0, 2, 0.0]\n");
    }

    #[test]
    fn negative_vector_size_is_rejected() {
        let (result, _) = run("begin v: vector [0 - 1] of integer end");

        assert!(matches!(result, Err(RuntimeError::InvalidVectorSize { .. })));
    }

    #[test]
    fn real_vector_size_is_rejected() {
        let (result, _) = run("begin v: vector [2.5] of integer end");

        assert!(matches!(result, Err(RuntimeError::InvalidVectorSize { .. })));
    }

    #[test]
    fn oversized_vector_is_rejected() {
        let (result, _) = run("begin v: vector [9223372036854775807] of integer end");

        assert!(matches!(result, Err(RuntimeError::InvalidVectorSize { line: 1, .. })));
    }

    #[test]
    fn if_without_else_falls_through() {
        let (result, output) = run("begin if 0 then write 1; write 2 end");

        assert_eq!(result, Ok(()));
        assert_eq!(output, "2\n");
    }

    #[test]
    fn if_branch_block_runs_then_continues() {
        let (result, output) =
            run("begin if 1 < 2 then begin write 1; write 2 end else write 3; write 4 end");

        assert_eq!(result, Ok(()));
        assert_eq!(output, "1\n2\n4\n");
    }

    #[test]
    fn assignment_to_undeclared_variable_fails() {
        let (result, _) = run("begin y := 1 end");

        assert_eq!(result,
                   Err(RuntimeError::UnknownVariable { name: "y".into(),
                                                       line: 1, }));
    }
}
