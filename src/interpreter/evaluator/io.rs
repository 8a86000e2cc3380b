use std::io::{BufRead, Write};

use tracing::trace;

use crate::{
    ast::{Layout, Target, WriteItem},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Engine, EvalResult},
        value::core::Value,
    },
};

impl<R: BufRead, W: Write> Engine<'_, R, W> {
    /// Fills each target with one line of input.
    ///
    /// With prompting enabled, `Enter value for <name>: ` is written and
    /// flushed before every line is read.
    ///
    /// # Errors
    /// - `InputExhausted` if input ends before every target is filled.
    /// - `Io` if reading or prompting fails.
    pub(super) fn read(&mut self, targets: &[Target], line: usize) -> EvalResult<()> {
        for target in targets {
            if self.options.prompt {
                write!(self.output, "Enter value for {}: ", target.name)
                    .map_err(|e| RuntimeError::io(&e, line))?;
                self.output
                    .flush()
                    .map_err(|e| RuntimeError::io(&e, line))?;
            }

            let mut buffer = String::new();
            let bytes = self.input
                            .read_line(&mut buffer)
                            .map_err(|e| RuntimeError::io(&e, line))?;

            if bytes == 0 {
                return Err(RuntimeError::InputExhausted { name: target.name.clone(),
                                                          line });
            }

            let value = Value::from_input(&buffer);
            trace!(name = %target.name, %value, "read");
            self.environment.store(target, value)?;
        }

        Ok(())
    }

    /// Prints the items left to right, then ends the line.
    ///
    /// `space` prints one space, `tab` a tab and `skip` nothing.
    pub(super) fn write(&mut self, items: &[WriteItem], line: usize) -> EvalResult<()> {
        let io_error = |e: std::io::Error| RuntimeError::io(&e, line);

        for item in items {
            match item {
                WriteItem::Expr(expr) => {
                    let value = self.environment.eval(expr)?;
                    write!(self.output, "{value}").map_err(io_error)?;
                },
                WriteItem::Layout(Layout::Space) => write!(self.output, " ").map_err(io_error)?,
                WriteItem::Layout(Layout::Tab) => write!(self.output, "\t").map_err(io_error)?,
                WriteItem::Layout(Layout::Skip) => {},
            }
        }

        writeln!(self.output).map_err(io_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{interpreter::evaluator::core::EngineOptions, parse};

    fn run_with_input(source: &str, input: &str, prompt: bool) -> (EvalResult<()>, String) {
        let program = parse(source).unwrap();
        let mut output = Vec::new();
        let result = Engine::new(&program, input.as_bytes(), &mut output, EngineOptions { prompt })
            .and_then(|mut engine| engine.run());
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn read_prompts_for_each_target() {
        let (result, output) =
            run_with_input("begin a, b: integer; read a, b; write a + b end", "3\n4\n", true);

        assert_eq!(result, Ok(()));
        assert_eq!(output, "Enter value for a: Enter value for b: 7\n");
    }

    #[test]
    fn read_classifies_input() {
        let source = "begin a, b, c: integer; read a, b, c; write a, tab, b, tab, c end";
        let (result, output) = run_with_input(source, "2.5\n-4\nhello\n", false);

        assert_eq!(result, Ok(()));
        assert_eq!(output, "2.5\t-4\thello\n");
    }

    #[test]
    fn read_into_vector_element() {
        let (result, output) =
            run_with_input("begin v: vector [2] of integer; read v[1]; write v end", "9\n", false);

        assert_eq!(result, Ok(()));
        assert_eq!(output, "[0, 9]\n");
    }

    #[test]
    fn read_past_end_of_input() {
        let (result, _) = run_with_input("begin a: integer; read a end", "", false);

        assert_eq!(result,
                   Err(RuntimeError::InputExhausted { name: "a".into(),
                                                      line: 1, }));
    }

    #[test]
    fn skip_prints_nothing() {
        let (result, output) = run_with_input("begin write 1, skip, 2 end", "", false);

        assert_eq!(result, Ok(()));
        assert_eq!(output, "12\n");
    }

    #[test]
    fn empty_write_ends_the_line() {
        let (result, output) = run_with_input("begin write skip end", "", false);

        assert_eq!(result, Ok(()));
        assert_eq!(output, "\n");
    }
}
