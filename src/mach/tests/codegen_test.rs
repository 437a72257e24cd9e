use crate::mach::{codegen, Config, Listing};

fn compile(source: &str) -> Listing {
    codegen(source, Config::default()).unwrap()
}

fn body(source: &str) -> Vec<String> {
    compile(source)
        .text()
        .iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.starts_with("; line "))
        .collect()
}

#[test]
fn test_literals_and_arithmetic() {
    assert_eq!(
        body("1 2 + 3 *"),
        vec![
            "push dword 1",
            "push dword 2",
            "pop eax",
            "add [esp], eax",
            "push dword 3",
            "pop eax",
            "imul eax, [esp]",
            "mov [esp], eax",
        ]
    );
}

#[test]
fn test_source_lines_are_commented() {
    let listing = compile("1 2\n\n3 \\ three");
    assert_eq!(listing.text()[0], "    ; line 1: 1 2");
    assert_eq!(listing.text()[3], "    ; line 3: 3");
}

#[test]
fn test_variable_gets_one_slot() {
    let listing = compile("variable x variable x 5 x ! x @ .");
    let asm = listing.to_string();
    assert_eq!(asm.matches("resd 1    ; x").count(), 1);
    assert!(!asm.contains("var_1"));
    assert_eq!(
        body("variable x 5 x ! x @ ."),
        vec![
            "push dword 5",
            "push name_0",
            "add esp, 4",
            "pop eax",
            "mov [var_0], eax",
            "push name_0",
            "mov eax, [var_0]",
            "mov [esp], eax",
            "push fmt_int",
            "call printf",
            "add esp, 8",
        ]
    );
}

#[test]
fn test_names_are_data() {
    let listing = compile("hi . hi");
    let asm = listing.to_string();
    assert!(asm.contains("\nname_0 db 104,105,0    ; hi\n"));
    assert!(!asm.contains("name_1"));
    assert_eq!(
        body("hi ."),
        vec!["push name_0", "push fmt_name", "call printf", "add esp, 8"]
    );
}

#[test]
fn test_underflow_compiles_to_nothing() {
    let listing = compile("1 +\n.");
    assert_eq!(listing.errors().len(), 1);
    assert_eq!(listing.errors()[0].to_string(), "STACK UNDERFLOW IN 1 (2..3)");
    assert_eq!(
        body("1 +"),
        vec!["push dword 1", "; ?STACK UNDERFLOW IN 1 (2..3)"]
    );
}

#[test]
fn test_silent_words_on_empty_stack() {
    let listing = compile("dup drop neg .");
    assert!(listing.errors().is_empty());
    assert!(body("dup drop neg .").is_empty());
}

#[test]
fn test_undefined_variable_pops_both() {
    let listing = compile("5 y !");
    assert_eq!(
        listing.errors()[0].to_string(),
        "UNDEFINED VARIABLE IN 1 (4..5); y"
    );
    assert!(listing.text().contains(&"    add esp, 8".to_string()));
}

#[test]
fn test_type_mismatch_is_fatal() {
    let error = codegen("a b swap", Config::default()).unwrap_err();
    assert_eq!(
        error.to_string(),
        "TYPE MISMATCH IN 1 (4..8); expected integer, found b"
    );
}

#[test]
fn test_recover_discards_popped_operands() {
    let config = Config {
        recover: true,
        ..Config::default()
    };
    let listing = codegen("1 x + 2 .", config).unwrap();
    assert_eq!(listing.errors().len(), 1);
    let text: Vec<&str> = listing.text().iter().map(|s| s.trim()).collect();
    assert_eq!(
        &text[3..5],
        &[
            "add esp, 8",
            "; ?TYPE MISMATCH IN 1 (4..5); expected integer, found x"
        ]
    );
}

#[test]
fn test_mod_skips_idiv_for_zero_and_minus_one() {
    assert_eq!(
        body("7 2 mod"),
        vec![
            "push dword 7",
            "push dword 2",
            "pop ebx",
            "pop eax",
            "xor edx, edx",
            "cmp ebx, 0",
            "je mod_1",
            "cmp ebx, -1",
            "je mod_1",
            "cdq",
            "idiv ebx",
            "mod_1:",
            "push edx",
        ]
    );
}

#[test]
fn test_dot_s_is_unrolled_bottom_to_top() {
    let text = body("1 x .s");
    let items: Vec<&str> = text
        .iter()
        .map(|s| s.as_str())
        .filter(|s| s.starts_with("push"))
        .collect();
    assert_eq!(
        items,
        vec![
            "push dword 1",
            "push name_0",
            "push dots_open",
            "push dword [esp+4]",
            "push dots_int",
            "push dots_sep",
            "push dword [esp+0]",
            "push dots_name",
            "push dots_close",
        ]
    );
}

#[test]
fn test_listing_layout() {
    assert_eq!(
        compile("1 .").to_string(),
        "global main\n\
         extern printf\n\
         \n\
         section .text\n\
         main:\n    \
         mov [stack_start], esp\n    \
         ; line 1: 1 .\n    \
         push dword 1\n    \
         push fmt_int\n    \
         call printf\n    \
         add esp, 8\n    \
         mov esp, [stack_start]\n    \
         xor eax, eax\n    \
         ret\n\
         \n\
         section .data\n\
         fmt_int db \"%d\",10,0\n\
         fmt_name db \"%s\",10,0\n\
         dots_int db \"%d\",0\n\
         dots_name db \"%s\",0\n\
         dots_open db \"[Bottom -> Top] [\",0\n\
         dots_sep db \", \",0\n\
         dots_close db \"]\",10,0\n\
         \n\
         section .bss\n\
         stack_start resd 1\n"
    );
}
