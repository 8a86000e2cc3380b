use std::io::{BufRead, Write};

use tracing::{debug, trace};

use crate::{
    ast::Block,
    error::RuntimeError,
    interpreter::evaluator::{environment::Environment, frame::Frame, labels::LabelTable},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Options that change how the engine talks to its input and output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Print `Enter value for <name>: ` before every value `read` consumes.
    pub prompt: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self { prompt: true }
    }
}

/// A `goto` that has been executed but not yet carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jump<'a> {
    /// The target label.
    pub label: &'a str,
    /// Line of the `goto`.
    pub line:  usize,
}

/// What the engine does after executing one statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Flow<'a> {
    /// Move on to the following statement.
    Next,
    /// Open a block or loop body on top of the stack.
    Enter(Frame<'a>),
    /// Replace the whole stack with the address of a label.
    Jump(Jump<'a>),
}

/// Executes a parsed program.
///
/// The engine keeps an explicit stack of [`Frame`]s instead of recursing
/// through the tree, so that a `goto` can land anywhere: carrying out a
/// jump discards the stack and installs the frames recorded for the target
/// label. Variables live in a single [`Environment`] that survives jumps.
///
/// ## Usage
///
/// ```
/// use hopscotch::{
///     interpreter::evaluator::core::{Engine, EngineOptions},
///     parse,
/// };
///
/// let program = parse("begin x: integer; x := 6 * 7; write x end").unwrap();
/// let mut output = Vec::new();
/// let mut engine =
///     Engine::new(&program, std::io::empty(), &mut output, EngineOptions::default()).unwrap();
///
/// engine.run().unwrap();
/// drop(engine);
///
/// assert_eq!(String::from_utf8(output).unwrap(), "42\n");
/// ```
pub struct Engine<'a, R, W> {
    pub(super) labels:       LabelTable<'a>,
    pub(super) stack:        Vec<Frame<'a>>,
    pub(super) environment:  Environment,
    pub(super) pending_jump: Option<Jump<'a>>,
    pub(super) input:        R,
    pub(super) output:       W,
    pub(super) options:      EngineOptions,
    pub(super) line:         usize,
}

impl<'a, R: BufRead, W: Write> Engine<'a, R, W> {
    /// Prepares `program` for execution.
    ///
    /// The label table is built here, so a program with duplicate labels is
    /// rejected before any of its statements run.
    ///
    /// # Errors
    /// `DuplicateLabel` if the program defines a label twice.
    pub fn new(program: &'a Block,
               input: R,
               output: W,
               options: EngineOptions)
               -> EvalResult<Self> {
        let labels = LabelTable::build(program)?;

        Ok(Self { labels,
                  stack: vec![Frame::new(&program.statements, false)],
                  environment: Environment::new(),
                  pending_jump: None,
                  input,
                  output,
                  options,
                  line: program.line })
    }

    /// Runs the program until its root block finishes.
    ///
    /// Output is flushed once execution ends normally.
    pub fn run(&mut self) -> EvalResult<()> {
        debug!(labels = self.labels.len(), "program started");

        while self.step()? {}

        self.output
            .flush()
            .map_err(|e| RuntimeError::io(&e, self.line))?;

        debug!(variables = self.environment.len(), "program finished");
        Ok(())
    }

    /// Performs one unit of work and reports whether the program is still
    /// running.
    ///
    /// A unit is one of: carrying out a pending jump, closing or restarting
    /// the top frame when its cursor has run off the end, or executing the
    /// statement under the cursor.
    pub fn step(&mut self) -> EvalResult<bool> {
        if let Some(jump) = self.pending_jump.take() {
            self.jump_to(jump)?;
            return Ok(true);
        }

        let Some(frame) = self.stack.last_mut() else {
            return Ok(false);
        };

        let cursor = frame.cursor;
        let Some(statement) = frame.current() else {
            if frame.is_loop {
                frame.restart();
            } else {
                self.close_frame();
            }
            return Ok(true);
        };

        self.line = statement.line_number();
        trace!(depth = self.stack.len(), cursor, line = self.line, "step");

        match self.execute(statement)? {
            Flow::Next => self.advance(),
            Flow::Enter(frame) => self.stack.push(frame),
            Flow::Jump(jump) => self.pending_jump = Some(jump),
        }

        Ok(true)
    }

    /// Whether the program has finished.
    #[must_use]
    pub fn is_halted(&self) -> bool {
        self.stack.is_empty() && self.pending_jump.is_none()
    }

    /// The currently open frames, outermost first.
    #[must_use]
    pub fn frames(&self) -> &[Frame<'a>] {
        &self.stack
    }

    /// The variables of the running program.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// The label table built for the program.
    #[must_use]
    pub const fn labels(&self) -> &LabelTable<'a> {
        &self.labels
    }

    fn advance(&mut self) {
        if let Some(frame) = self.stack.last_mut() {
            frame.advance();
        }
    }

    /// Pops a finished block and moves its parent past the statement that
    /// opened it.
    fn close_frame(&mut self) {
        self.stack.pop();
        self.advance();
    }

    fn jump_to(&mut self, jump: Jump<'a>) -> EvalResult<()> {
        let address = self.labels.resolve(jump.label, jump.line)?;

        self.stack.clear();
        self.stack.extend_from_slice(address.frames());

        debug!(label = jump.label,
               depth = self.stack.len(),
               line = jump.line,
               "jump");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{interpreter::value::core::Value, parse};

    fn quiet() -> EngineOptions {
        EngineOptions { prompt: false }
    }

    #[test]
    fn block_closes_and_parent_advances() {
        let program = parse("begin begin write 1 end; write 2 end").unwrap();
        let mut output = Vec::new();
        let mut engine = Engine::new(&program, std::io::empty(), &mut output, quiet()).unwrap();

        // enter the inner block
        engine.step().unwrap();
        assert_eq!(engine.frames().len(), 2);

        // write 1, then close the inner block
        engine.step().unwrap();
        engine.step().unwrap();
        assert_eq!(engine.frames().len(), 1);
        assert_eq!(engine.frames()[0].cursor, 1);

        engine.run().unwrap();
        assert!(engine.is_halted());
        drop(engine);
        assert_eq!(output, b"1\n2\n");
    }

    #[test]
    fn jump_replaces_the_whole_stack() {
        let source = "begin
                        begin
                          begin goto out end
                        end;
                        write 0;
                        out: write 1
                      end";
        let program = parse(source).unwrap();
        let mut output = Vec::new();
        let mut engine = Engine::new(&program, std::io::empty(), &mut output, quiet()).unwrap();

        // two blocks deep, then the goto is executed
        for _ in 0..3 {
            engine.step().unwrap();
        }
        assert_eq!(engine.frames().len(), 3);

        // the jump itself
        engine.step().unwrap();
        assert_eq!(engine.frames().len(), 1);
        assert_eq!(engine.frames()[0].cursor, 2);

        engine.run().unwrap();
        drop(engine);
        assert_eq!(output, b"1\n");
    }

    #[test]
    fn loop_restarts_at_its_first_statement() {
        let source = "begin
                        n: integer;
                        loop
                          n := n + 1;
                          if n = 3 then goto done
                        end;
                        done: write n
                      end";
        let program = parse(source).unwrap();
        let mut output = Vec::new();
        let mut engine = Engine::new(&program, std::io::empty(), &mut output, quiet()).unwrap();

        engine.run().unwrap();

        assert_eq!(engine.environment().get("n", 0), Ok(&Value::Integer(3)));
        drop(engine);
        assert_eq!(output, b"3\n");
    }

    #[test]
    fn duplicate_labels_fail_before_running() {
        let program = parse("begin write 1; a: write 2; a: write 3 end").unwrap();
        let mut output = Vec::new();
        let result = Engine::new(&program, std::io::empty(), &mut output, quiet());

        assert!(matches!(result, Err(RuntimeError::DuplicateLabel { .. })));
        drop(result);
        assert!(output.is_empty());
    }

    #[test]
    fn undefined_label_fails_at_the_jump() {
        let program = parse("begin write 1; goto nowhere end").unwrap();
        let mut output = Vec::new();
        let mut engine = Engine::new(&program, std::io::empty(), &mut output, quiet()).unwrap();

        assert_eq!(engine.run(),
                   Err(RuntimeError::UndefinedLabel { name: "nowhere".into(),
                                                      line: 1, }));
        drop(engine);
        assert_eq!(output, b"1\n");
    }
}
