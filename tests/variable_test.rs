mod common;
use common::*;
use forth::mach::Runtime;
use pretty_assertions::assert_eq;

#[test]
fn test_end_to_end() {
    assert_eq!(exec_fresh("variable x  10 x !  x @  x @  +  ."), "20\n");
}

#[test]
fn test_word_forms() {
    assert_eq!(
        exec_fresh("variable total\n5 total store\ntotal fetch ."),
        "5\n"
    );
}

#[test]
fn test_initial_value_is_zero() {
    assert_eq!(exec_fresh("variable n n @ ."), "0\n");
}

#[test]
fn test_redeclare_does_not_reset() {
    let mut r = Runtime::default();
    assert_eq!(exec(&mut r, "variable x 5 x ! variable x x @ ."), "5\n");
    assert_eq!(r.var("x"), Some(5));
}

#[test]
fn test_undeclared_fetch_only_consumes_name() {
    let mut r = Runtime::default();
    let out = exec(&mut r, "1 2 nope @");
    assert_eq!(out, "?UNDEFINED VARIABLE IN 1 (9..10); nope\n");
    assert_eq!(r.stack(), &ints(&[1, 2])[..]);
}

#[test]
fn test_undeclared_store_consumes_name_and_value() {
    let mut r = Runtime::default();
    let out = exec(&mut r, "1 2 nope !");
    assert_eq!(out, "?UNDEFINED VARIABLE IN 1 (9..10); nope\n");
    assert_eq!(r.stack(), &ints(&[1])[..]);
}

#[test]
fn test_diagnostics_do_not_stop_the_run() {
    let out = exec_fresh("variable\n@\n7 .\nx !\n8 .");
    assert_eq!(
        out,
        "?MISSING IDENTIFIER IN 1 (0..8); expected a name after variable\n\
         ?STACK UNDERFLOW IN 2 (0..1)\n\
         7\n\
         ?STACK UNDERFLOW IN 4 (2..3)\n\
         8\n"
    );
}

#[test]
fn test_variables_survive_between_executes() {
    let mut r = Runtime::default();
    exec(&mut r, "variable x");
    exec(&mut r, "42 x !");
    assert_eq!(exec(&mut r, "x @ ."), "42\n");
}
