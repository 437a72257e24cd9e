mod common;
use common::*;
use forth::mach::{Runtime, Val};
use pretty_assertions::assert_eq;

#[test]
fn test_sum_and_print() {
    assert_eq!(exec_fresh("1 2 + ."), "3\n");
}

#[test]
fn test_subtract_order() {
    assert_eq!(exec_fresh("10 4 - ."), "6\n");
    assert_eq!(exec_fresh("4 10 - ."), "-6\n");
}

#[test]
fn test_mod_by_zero_is_zero() {
    assert_eq!(exec_fresh("-13 0 mod ."), "0\n");
}

#[test]
fn test_stack_shapes() {
    let mut r = Runtime::default();
    exec(&mut r, "1 2 swap");
    assert_eq!(r.stack(), &ints(&[2, 1])[..]);
    r.clear();
    exec(&mut r, "1 2 over");
    assert_eq!(r.stack(), &ints(&[1, 2, 1])[..]);
    r.clear();
    exec(&mut r, "1 2 tuck");
    assert_eq!(r.stack(), &ints(&[2, 1, 2])[..]);
    r.clear();
    exec(&mut r, "1 2 nip");
    assert_eq!(r.stack(), &ints(&[2])[..]);
}

#[test]
fn test_empty_stack_no_ops() {
    assert_eq!(exec_fresh("dup drop neg . .s"), "[Bottom -> Top] []\n");
}

#[test]
fn test_dot_s_mixed() {
    assert_eq!(
        exec_fresh("1 -2 abc .s"),
        "[Bottom -> Top] [1, -2, abc]\n"
    );
}

#[test]
fn test_names_are_verbatim() {
    let mut r = Runtime::default();
    exec(&mut r, "Hello, w0rld! 99999999999");
    assert_eq!(
        r.stack(),
        &[
            Val::from("Hello,"),
            Val::from("w0rld!"),
            Val::from("99999999999"),
        ][..]
    );
}

#[test]
fn test_lines_run_in_order() {
    let source = "1 .\n2 .\r\n3 .";
    assert_eq!(exec_fresh(source), "1\n2\n3\n");
}
