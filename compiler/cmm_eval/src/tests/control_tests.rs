//! Statements, control flow and error propagation.

use super::{eval, run};
use crate::{evaluate, silent_handler, Value};
use pretty_assertions::assert_eq;

mod statements {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn assignment_returns_value() {
        assert_eq!(eval("x = 5"), Value::Integer(5));
    }

    #[test]
    fn last_statement_wins() {
        assert_eq!(eval("x = 5\nprint x"), Value::Unit);
        assert_eq!(eval("x = 5\nprint x\nx = x * 2"), Value::Integer(10));
    }

    #[test]
    fn empty_program_is_unit() {
        assert_eq!(eval(""), Value::Unit);
    }

    #[test]
    fn reassignment_in_block_is_visible_after() {
        let (value, output) = run("x = 1\nwhile (x < 4) { x = x + 1 }\nprint x");
        assert_eq!(value, Value::Unit);
        assert_eq!(output, "4 ");
    }
}

mod print {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn each_argument_followed_by_space() {
        let (value, output) = run("print 1, 2 + 3, 4");
        assert_eq!(value, Value::Unit);
        assert_eq!(output, "1 5 4 ");
    }

    #[test]
    fn error_argument_stops_before_printing() {
        let (value, output) = run("print 1, missing, 3");
        assert_eq!(
            value,
            Value::Error("Couldn't find identifier: missing".into())
        );
        assert_eq!(output, "1 ");
    }
}

mod conditionals {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn then_branch() {
        assert_eq!(run("if (1) { print 1 } else { print 2 }").1, "1 ");
    }

    #[test]
    fn else_branch() {
        assert_eq!(run("if (0) { print 1 } else { print 2 }").1, "2 ");
    }

    #[test]
    fn false_without_else_is_unit() {
        assert_eq!(run("if (0) { print 1 }"), (Value::Unit, String::new()));
    }

    #[test]
    fn other_integers_take_neither_branch() {
        assert_eq!(run("if (2) { print 1 } else { print 2 }"), (Value::Unit, String::new()));
    }

    #[test]
    fn if_yields_branch_value() {
        assert_eq!(eval("if (1 == 1) { x = 3 }"), Value::Integer(3));
    }
}

mod loops {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn counts_down() {
        let (value, output) = run("n = 3\nwhile (n > 0) { print n\nn = n - 1 }");
        assert_eq!(value, Value::Unit);
        assert_eq!(output, "3 2 1 ");
    }

    #[test]
    fn false_condition_never_runs_body() {
        assert_eq!(run("while (0) { print 1 }"), (Value::Unit, String::new()));
    }

    #[test]
    fn collatz_sample() {
        let source = "val = 104
while (val >= 2) {
  if (val % 2 == 0) { next = val / 2 } else { next = 3 * val + 1 }
  print val, next
  val = next
}";
        let (value, output) = run(source);
        assert_eq!(value, Value::Unit);
        assert_eq!(
            output,
            "104 52 52 26 26 13 13 40 40 20 20 10 10 5 5 16 16 8 8 4 4 2 2 1 "
        );
    }

    #[test]
    fn nested_loops() {
        let source = "i = 0
while (i < 2) {
  j = 0
  while (j < 2) {
    print i * 10 + j
    j = j + 1
  }
  i = i + 1
}";
        assert_eq!(run(source).1, "0 1 10 11 ");
    }
}

mod errors {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unresolved_identifier() {
        assert_eq!(
            eval("(missing)"),
            Value::Error("Couldn't find identifier: missing".into())
        );
    }

    #[test]
    fn error_operand_propagates_unchanged() {
        assert_eq!(
            eval("1 + nope * 2"),
            Value::Error("Couldn't find identifier: nope".into())
        );
    }

    #[test]
    fn failed_assignment_does_not_store() {
        let (value, output) = run("x = 1 / 0\nprint x");
        assert_eq!(value, Value::Error("division by zero".into()));
        assert_eq!(output, "");
    }

    #[test]
    fn error_stops_the_program() {
        let (value, output) = run("print 1\ny = nope\nprint 2");
        assert_eq!(value, Value::Error("Couldn't find identifier: nope".into()));
        assert_eq!(output, "1 ");
    }

    #[test]
    fn error_condition_stops_loop() {
        let (value, output) = run("while (nope) { print 1 }");
        assert!(value.is_error());
        assert_eq!(output, "");
    }

    #[test]
    fn error_in_loop_body_ends_loop() {
        let (value, output) = run("n = 0\nwhile (n < 5) { print n\nn = n / 0 }");
        assert_eq!(value, Value::Error("division by zero".into()));
        assert_eq!(output, "0 ");
    }
}

#[test]
fn evaluation_is_repeatable() {
    let program = cmm_parse::parse("x = 2\nwhile (x < 100) { x = x * x }\nx = x + 1").program;
    let first = evaluate(&program, silent_handler());
    let second = evaluate(&program, silent_handler());
    assert_eq!(first, Value::Integer(257));
    assert_eq!(first, second);
}
