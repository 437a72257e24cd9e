use forth::mach::{Config, Event, Runtime, Val};

pub fn exec(runtime: &mut Runtime, source: &str) -> String {
    let mut s = String::new();
    let result = runtime.execute(source);
    for event in runtime.events() {
        match event {
            Event::Print(ps) => s.push_str(&ps),
            Event::Diagnostic(error) => s.push_str(&format!("?{}\n", error)),
        }
    }
    if let Err(error) = result {
        s.push_str(&format!("!{}\n", error));
    }
    s
}

#[allow(dead_code)]
pub fn exec_fresh(source: &str) -> String {
    exec(&mut Runtime::default(), source)
}

#[allow(dead_code)]
pub fn recovering() -> Runtime {
    Runtime::new(Config {
        recover: true,
        ..Config::default()
    })
}

#[allow(dead_code)]
pub fn ints(v: &[i32]) -> Vec<Val> {
    v.iter().map(|n| Val::Integer(*n)).collect()
}
