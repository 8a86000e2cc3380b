use std::{fs, path::Path};

use hopscotch::{
    EngineOptions,
    error::{Error, ParseError, RuntimeError},
    run_with_io,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

/// Runs `src` with `input` as standard input and returns what it printed.
fn run_program(src: &str, input: &str) -> Result<String, (Error, String)> {
    let mut output = Vec::new();
    let result = run_with_io(src, input.as_bytes(), &mut output, EngineOptions { prompt: false });
    let printed = String::from_utf8(output).expect("output is not UTF-8");

    match result {
        Ok(()) => Ok(printed),
        Err(e) => Err((e, printed)),
    }
}

fn assert_output(src: &str, expected: &str) {
    match run_program(src, "") {
        Ok(output) => assert_eq!(output, expected),
        Err((e, _)) => panic!("Script failed: {e}"),
    }
}

fn runtime_error(src: &str) -> RuntimeError {
    match run_program(src, "") {
        Ok(output) => panic!("Script succeeded but was expected to fail, printing {output:?}"),
        Err((Error::Runtime(e), _)) => e,
        Err((e, _)) => panic!("Expected a runtime error, got {e}"),
    }
}

fn parse_error(src: &str) -> ParseError {
    match run_program(src, "") {
        Err((Error::Parse(e), _)) => e,
        Err((e, _)) => panic!("Expected a parse error, got {e}"),
        Ok(_) => panic!("Script succeeded but was expected to fail"),
    }
}

#[test]
fn sample_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "hop"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected =
            read_sibling(path, "out").unwrap_or_else(|| panic!("{path:?} has no .out file"));
        let input = read_sibling(path, "in").unwrap_or_default();

        count += 1;
        match run_program(&source, &input) {
            Ok(output) => assert_eq!(output, expected, "output of {path:?}"),
            Err((e, output)) => {
                panic!("Program {path:?} failed after printing {output:?}\nError: {e}")
            },
        }
    }

    assert!(count > 0, "No programs found in tests/programs");
}

fn read_sibling(path: &Path, extension: &str) -> Option<String> {
    fs::read_to_string(path.with_extension(extension)).ok()
}

#[test]
fn countdown_with_backward_goto() {
    assert_output("begin x: integer; x := 3; top: write x; x := x - 1; if x > 0 then goto top; end",
                  "3\n2\n1\n");
}

#[test]
fn goto_escapes_an_infinite_loop() {
    assert_output("begin loop write 1; goto done; end; done: write 2; end", "1\n2\n");
}

#[test]
fn goto_into_the_middle_of_a_loop_keeps_loop_semantics() {
    // Jumps past `write 0` on the first pass only; the restarted body runs it.
    let src = "begin
                 n: integer;
                 goto middle;
                 loop
                   write 0;
                   middle: n := n + 1;
                   write n;
                   if n = 3 then goto out
                 end;
                 out: write 9
               end";

    assert_output(src, "1\n0\n2\n0\n3\n9\n");
}

#[test]
fn goto_into_a_nested_block_that_is_not_running() {
    let src = "begin
                 goto inside;
                 write 1;
                 begin
                   write 2;
                   inside: write 3
                 end;
                 write 4
               end";

    assert_output(src, "3\n4\n");
}

#[test]
fn goto_into_an_if_branch_block() {
    let src = "begin
                 goto inner;
                 if 0 then
                   begin
                     write 1;
                     inner: write 2
                   end
                 else write 3;
                 write 4
               end";

    assert_output(src, "2\n4\n");
}

#[test]
fn goto_free_programs_run_in_source_order() {
    let src = "begin
                 write 1;
                 begin
                   write 2;
                   begin write 3 end;
                   write 4
                 end;
                 if 1 then begin write 5; write 6 end;
                 write 7
               end";

    assert_output(src, "1\n2\n3\n4\n5\n6\n7\n");
}

#[test]
fn duplicate_labels_are_rejected_before_any_output() {
    let src = "begin write 1; a: write 2; begin a: write 3 end end";

    match run_program(src, "") {
        Err((Error::Runtime(RuntimeError::DuplicateLabel { name, .. }), output)) => {
            assert_eq!(name, "a");
            assert_eq!(output, "");
        },
        other => panic!("Expected a duplicate label error, got {other:?}"),
    }
}

#[test]
fn undefined_label_reports_the_goto_line() {
    let src = "begin\n write 1;\n goto nowhere\nend";

    assert_eq!(runtime_error(src),
               RuntimeError::UndefinedLabel { name: "nowhere".into(),
                                              line: 3, });
}

#[test]
fn labels_are_chained_and_may_be_empty() {
    let src = "begin
                 n: integer;
                 first: second: n := n + 1;
                 if n < 2 then goto second;
                 write n;
                 goto last;
                 write 0;
                 last:
               end";

    assert_output(src, "2\n");
}

#[test]
fn label_with_space_before_colon() {
    assert_output("begin goto there; write 1; there : write 2 end", "2\n");
}

#[test]
fn arithmetic_rules() {
    assert_output("begin write 5 mod 2 end", "1\n");
    assert_output("begin write 5 / 2 end", "2\n");
    assert_output("begin write 5.0 / 2 end", "2.5\n");
    assert_output("begin write 2 + 3 * 4, space, (2 + 3) * 4 end", "14 20\n");
    assert_output("begin write -7 mod 3, space, - -4 end", "-1 4\n");
    assert_output("begin write 1 + 2.0 end", "3.0\n");
}

#[test]
fn arithmetic_errors() {
    assert_eq!(runtime_error("begin write 5 mod 2.0 end"),
               RuntimeError::ModuloType { line: 1 });
    assert_eq!(runtime_error("begin write 5 / 0 end"),
               RuntimeError::DivisionByZero { line: 1 });
    assert_eq!(runtime_error("begin write 5.0 / 0.0 end"),
               RuntimeError::DivisionByZero { line: 1 });
    assert_eq!(runtime_error("begin write 9223372036854775807 + 1 end"),
               RuntimeError::Overflow { line: 1 });
}

#[test]
fn comparisons_and_conditions() {
    assert_output("begin write 1 < 2, space, 2 = 2.0, space, 3 <> 3 end", "true true false\n");
    assert_output("begin if 0.0 then write 1 else write 2 end", "2\n");
    assert_output("begin if 2 >= 2 then if 1 > 2 then write 1 else write 2 end", "2\n");
}

#[test]
fn unknown_variable_is_a_runtime_error() {
    assert_eq!(runtime_error("begin\n\n write y\nend"),
               RuntimeError::UnknownVariable { name: "y".into(),
                                               line: 3, });
}

#[test]
fn vectors_hold_elements() {
    let src = "begin
                 v: vector [4] of integer;
                 i: integer;
                 loop
                   if i = 4 then goto done;
                   v[i] := i * i;
                   i := i + 1
                 end;
                 done: write v, space, v[3]
               end";

    assert_output(src, "[0, 1, 4, 9] 9\n");
}

#[test]
fn vector_index_out_of_bounds() {
    assert!(matches!(runtime_error("begin v: vector [2] of integer; v[2] := 1 end"),
                     RuntimeError::IndexOutOfBounds { index: 2, len: 2, .. }));
}

#[test]
fn read_stores_numbers_and_text() {
    let src = "begin a, b, c: integer; read a, b; read c; write a + b, tab, c end";

    assert_eq!(run_program(src, "1.5\n2\nabc\n").unwrap(), "3.5\tabc\n");
}

#[test]
fn read_without_input_fails() {
    match run_program("begin a: integer; write 1; read a end", "") {
        Err((Error::Runtime(RuntimeError::InputExhausted { name, .. }), output)) => {
            assert_eq!(name, "a");
            assert_eq!(output, "1\n");
        },
        other => panic!("Expected exhausted input, got {other:?}"),
    }
}

#[test]
fn read_prompts_name_the_variable() {
    let mut output = Vec::new();
    run_with_io("begin n: integer; read n; write n end",
                "5\n".as_bytes(),
                &mut output,
                EngineOptions::default()).unwrap();

    assert_eq!(String::from_utf8(output).unwrap(), "Enter value for n: 5\n");
}

#[test]
fn write_layout_directives() {
    assert_output("begin write 1, space, 2, tab, 3, skip, 4 end", "1 2\t34\n");
}

#[test]
fn integer_literal_forms() {
    assert_output("begin write 017, space, 0x1f, space, 0b101, space, 10 end", "15 31 5 10\n");
    assert_output("begin write 1.5e2, space, .25 end", "150.0 0.25\n");
}

#[test]
fn decimal_literal_too_large_for_integer_becomes_real() {
    assert_output("begin write 99999999999999999999 end", "1e20\n");
    assert_output("begin write 9223372036854775808 > 9223372036854775807 end", "false\n");
}

#[test]
fn reals_never_print_like_integers() {
    assert_output("begin write 1.0e20, space, 2.0 * 3, space, 1e300 * 1e300 end",
                  "1e20 6.0 inf\n");
}

#[test]
fn radix_literal_overflow_is_invalid() {
    assert_eq!(parse_error("begin
 write 0x1ffffffffffffffff
end"),
               ParseError::InvalidNumber { literal: "0x1ffffffffffffffff".into(),
                                           line:    2, });

    let binary = format!("0b{}", "1".repeat(65));
    assert_eq!(parse_error(&format!("begin write {binary} end")),
               ParseError::InvalidNumber { literal: binary,
                                           line:    1, });
}

#[test]
fn unknown_character_is_rejected_with_its_line() {
    assert_eq!(parse_error("begin
 write 1 #
end"),
               ParseError::UnexpectedToken { token: "#".into(),
                                             line:  2, });
}

#[test]
fn keywords_ignore_case_and_comments_are_skipped() {
    assert_output("BEGIN { a\n comment } X: Integer; X := 2; Write X End.", "2\n");
}

#[test]
fn parse_errors_carry_lines() {
    assert_eq!(parse_error("begin\n write 1\n"), ParseError::MissingEnd { line: 1 });
    assert_eq!(parse_error("begin { never closed\n end"),
               ParseError::UnterminatedComment { line: 1 });
    assert!(matches!(parse_error("write 1"), ParseError::ProgramNotBlock { line: 1 }));
    assert!(matches!(parse_error("begin\n x := \nend"), ParseError::Expected { line: 3, .. }));
    assert!(matches!(parse_error("begin write 1 write 2 end"), ParseError::Expected { .. }));
    assert_eq!(parse_error("begin\n\n x := "),
               ParseError::UnexpectedEndOfInput { line: 3 });
    assert_eq!(parse_error("begin\n\n top:"),
               ParseError::UnexpectedEndOfInput { line: 3 });
}

#[test]
fn exit_codes_distinguish_failures() {
    let parse = run_program("begin", "").unwrap_err().0;
    let runtime = run_program("begin write 1 / 0 end", "").unwrap_err().0;

    assert_eq!(parse.exit_code(), 65);
    assert_eq!(runtime.exit_code(), 70);
}
