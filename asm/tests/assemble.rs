use scasm::{assemble, assemble_str, Error, Lexer};

fn errors(code: &str) -> Vec<Error> {
    assemble_str(code).diags.into_iter().map(|d| d.err).collect()
}

#[test]
fn load_constant() {
    let asm = assemble_str("LDA five\nHLT\nfive: DAT 7\n");
    assert!(asm.is_ok());
    assert_eq!(asm.len, 3);
    let mut expect = [0u8; 16];
    expect[..3].copy_from_slice(&[0x12, 0x00, 0x07]);
    assert_eq!(asm.mem, expect);
}

#[test]
fn deterministic() {
    let code = "\
# count down from three
loop:   LDA n
        JMZ done
        SUB one
        STA n
        JMP loop
done:   HLT
n:      DAT 3
one:    DAT 1
";
    let tokens = Lexer::new(code).parse();
    let first = assemble(&tokens);
    let second = assemble(&tokens);
    assert!(first.is_ok());
    assert_eq!(first.mem, second.mem);
    assert_eq!(
        &first.mem[..8],
        &[0x16, 0x85, 0x67, 0x36, 0x70, 0x00, 0x03, 0x01]
    );
}

#[test]
fn indirect_pointer_table() {
    let asm = assemble_str("LDI ptr\nHLT\nptr: DAT 3\nDAT 9");
    assert!(asm.is_ok());
    assert_eq!(&asm.mem[..4], &[0x22, 0x00, 0x03, 0x09]);
}

#[test]
fn overflow_keeps_first_sixteen_words() {
    let mut code = String::new();
    for val in 0..20 {
        code.push_str(&format!("DAT {}\n", val));
    }
    let asm = assemble_str(&code);
    assert!(asm.is_truncated());
    assert_eq!(asm.len, 16);
    let expect: Vec<u8> = (0..16).collect();
    assert_eq!(asm.mem.to_vec(), expect);
    assert_eq!(errors(&code), vec![Error::OutOfMemory]);
}

#[test]
fn sixteen_words_fit() {
    let code = "HLT\n".repeat(16);
    let asm = assemble_str(&code);
    assert!(asm.is_ok());
    assert_eq!(asm.len, 16);
}

#[test]
fn reports_every_defect() {
    let code = "\
        LDA 99
        JMP missing
        BOGUS
x:      DAT 300
x:      HLT
";
    assert_eq!(
        errors(code),
        vec![
            Error::OperandRange(format!("99")),
            Error::UndefinedLabel(format!("missing")),
            Error::UnknownOperation(format!("BOGUS")),
            Error::DataRange(300),
            Error::RedefinedLabel(format!("x")),
        ]
    );
    let asm = assemble_str(code);
    assert_eq!(asm.len, 4);
    assert_eq!(&asm.mem[..4], &[0x10, 0x70, 0x00, 0x00]);
}

#[test]
fn unreferenced_label_is_benign() {
    assert!(assemble_str("unused: HLT").is_ok());
}

#[test]
fn lowercase_mnemonics() {
    let asm = assemble_str("lda x\nhlt\nx: dat 5");
    assert!(asm.is_ok());
    assert_eq!(&asm.mem[..3], &[0x12, 0x00, 0x05]);
}

#[test]
fn missing_operand_before_label_definition() {
    let asm = assemble_str("      ADD\nloop: HLT\n      JMP loop\n");
    let errs: Vec<Error> = asm.diags.iter().map(|d| d.err.clone()).collect();
    assert_eq!(errs, vec![Error::MissingOperand(arch::op::OpCode::ADD)]);
    assert_eq!(asm.labels.get_addr("loop"), Some(1));
    assert_eq!(&asm.mem[..3], &[0x50, 0x00, 0x71]);
}
