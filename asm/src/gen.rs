use arch::op::Op;

use crate::error::{Error, Report};
use crate::label::{Labels, Value};
use crate::parser::Inst;

/// Encoded form of one instruction.
pub enum Encoded {
    /// DAT: the raw data byte.
    Data(u8),
    /// Everything else: opcode byte, operand-address byte (0 when absent).
    Code(u8, u8),
}

/// Encode one instruction against the bound symbol table.
///
/// Forward references are legal, so this is where an unresolved jump
/// target finally surfaces: an operand that never got a code address is an
/// undefined label. A DAT-literal spelling does not count as defined.
pub fn encode(inst: &Inst, labels: &Labels) -> Result<Encoded, Error> {
    if let Op::DAT = inst.op {
        let byte = match inst.operand {
            Some(id) => match labels.value(id) {
                Value::Literal(v) => (v & 0xff) as u8,
                Value::Address(a) => (a & 0xff) as u8,
                Value::Unbound => 0,
            },
            None => 0,
        };
        return Ok(Encoded::Data(byte));
    }

    let operand = match inst.operand {
        Some(id) => match labels.value(id) {
            Value::Address(a) => (a & 0xff) as u8,
            _ => return Err(Error::UndefinedLabel(labels.name(id).to_string())),
        },
        None => 0,
    };
    Ok(Encoded::Code(inst.op.into(), operand))
}

/// Emission pass: encode the whole program in source order. All undefined
/// labels are collected before aborting; on any failure no bytes are
/// returned at all.
pub fn generate(program: &[Inst], labels: &Labels) -> Result<Vec<u8>, Vec<Report>> {
    let mut binary = Vec::new();
    let mut reports = Vec::new();
    for inst in program {
        match encode(inst, labels) {
            Ok(Encoded::Data(byte)) => binary.push(byte),
            Ok(Encoded::Code(op, operand)) => binary.extend([op, operand]),
            Err(err) => reports.push(Report::new(inst.line, err)),
        }
    }
    if reports.is_empty() {
        Ok(binary)
    } else {
        Err(reports)
    }
}
