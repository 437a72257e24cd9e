use crate::mach::{Event, Runtime, Val};

mod codegen_test;

fn run(runtime: &mut Runtime, source: &str) -> String {
    let mut s = String::new();
    if let Err(error) = runtime.execute(source) {
        s.push_str(&format!("!{}\n", error));
    }
    for event in runtime.events() {
        match event {
            Event::Print(ps) => s.push_str(&ps),
            Event::Diagnostic(error) => s.push_str(&format!("?{}\n", error)),
        }
    }
    s
}

fn stack_of(source: &str) -> Vec<Val> {
    let mut r = Runtime::default();
    let out = run(&mut r, source);
    assert_eq!(out, "", "unexpected output for {:?}", source);
    r.stack().to_vec()
}

fn ints(v: &[i32]) -> Vec<Val> {
    v.iter().map(|n| Val::Integer(*n)).collect()
}
