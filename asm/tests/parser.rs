use arch::op::Op;
use lmcasm::error::Error;
use lmcasm::label::Labels;
use lmcasm::parser::{parse, parse_line};

#[test]
fn bare_opcode() {
    let mut labels = Labels::new();
    let inst = parse_line(0, "INP", &mut labels).unwrap().unwrap();
    assert_eq!(inst.op, Op::INP);
    assert!(inst.label.is_none());
    assert!(inst.operand.is_none());
    assert!(labels.is_empty());
}

#[test]
fn opcode_with_operand() {
    let mut labels = Labels::new();
    let inst = parse_line(0, "STA x", &mut labels).unwrap().unwrap();
    assert_eq!(inst.op, Op::STA);
    assert!(inst.label.is_none());
    let operand = inst.operand.unwrap();
    assert_eq!(labels.name(operand), "x");
}

#[test]
fn labelled_opcode() {
    let mut labels = Labels::new();
    let inst = parse_line(0, "done HLT", &mut labels).unwrap().unwrap();
    assert_eq!(inst.op, Op::HLT);
    assert_eq!(labels.name(inst.label.unwrap()), "done");
    assert!(inst.operand.is_none());
}

#[test]
fn labelled_opcode_with_operand() {
    let mut labels = Labels::new();
    let inst = parse_line(0, "loop BRA loop", &mut labels).unwrap().unwrap();
    assert_eq!(inst.op, Op::BRA);
    // Same spelling interns to the same symbol.
    assert_eq!(inst.label, inst.operand);
    assert_eq!(labels.len(), 1);
}

#[test]
fn blank_line_is_no_instruction() {
    let mut labels = Labels::new();
    assert!(parse_line(0, "", &mut labels).unwrap().is_none());
    assert!(parse_line(0, " \t ", &mut labels).unwrap().is_none());
}

#[test]
fn lone_label_is_missing_opcode() {
    let mut labels = Labels::new();
    let err = parse_line(0, "orphan", &mut labels).unwrap_err();
    assert!(matches!(err, Error::MissingOpcode(name) if name == "orphan"));
}

#[test]
fn bad_second_token_is_unknown_mnemonic() {
    let mut labels = Labels::new();
    let err = parse_line(0, "foo bar", &mut labels).unwrap_err();
    assert!(matches!(err, Error::UnknownMnemonic(name) if name == "bar"));
}

#[test]
fn mnemonics_are_case_sensitive() {
    let mut labels = Labels::new();
    // Lowercase is not a mnemonic, so this reads as label + opcode.
    let inst = parse_line(0, "hlt HLT", &mut labels).unwrap().unwrap();
    assert_eq!(labels.name(inst.label.unwrap()), "hlt");
    assert_eq!(inst.op, Op::HLT);
}

#[test]
fn overlong_label_is_rejected() {
    let mut labels = Labels::new();
    let err = parse_line(0, "ninechars ADD x", &mut labels).unwrap_err();
    assert!(matches!(err, Error::NameTooLong(_)));
}

#[test]
fn parse_collects_errors_and_keeps_going() {
    let mut labels = Labels::new();
    let source = "orphan\nINP\nfoo bar\nHLT\n";
    let (program, reports) = parse(source, &mut labels);
    assert_eq!(program.len(), 2);
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].line, 0);
    assert_eq!(reports[1].line, 2);
}

#[test]
fn source_order_is_preserved() {
    let mut labels = Labels::new();
    let (program, reports) = parse("INP\nOUT\nHLT\n", &mut labels);
    assert!(reports.is_empty());
    let ops: Vec<Op> = program.iter().map(|i| i.op).collect();
    assert_eq!(ops, [Op::INP, Op::OUT, Op::HLT]);
    assert_eq!(program[2].line, 2);
}
