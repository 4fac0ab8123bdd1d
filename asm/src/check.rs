use arch::op::Operands;

use crate::error::{Error, Report};
use crate::label::{Labels, Value};
use crate::parser::Inst;

/// Semantic pass: one forward walk over the program. Assigns each line its
/// running byte address, binds label definitions, checks operand arity per
/// opcode, and resolves DAT literals into their operand symbol. The walk
/// never stops early; every problem in the run is reported.
pub fn check(program: &[Inst], labels: &mut Labels) -> Vec<Report> {
    let mut reports = Vec::new();
    let mut address: u16 = 0;

    for inst in program {
        if let Some(id) = inst.label {
            match labels.value(id) {
                Value::Unbound => labels.set(id, Value::Address(address), inst.line),
                _ => reports.push(Report::new(
                    inst.line,
                    Error::DuplicateLabel(labels.name(id).to_string()),
                )),
            }
        }

        match inst.op.operands() {
            Operands::None => {
                if inst.operand.is_some() {
                    reports.push(Report::new(
                        inst.line,
                        Error::UnexpectedOperand(inst.op.to_string()),
                    ));
                }
            }
            Operands::Target => {
                if inst.operand.is_none() {
                    reports.push(Report::new(
                        inst.line,
                        Error::MissingOperand(inst.op.to_string()),
                    ));
                }
            }
            Operands::Data => match (inst.label, inst.operand) {
                (Some(_), Some(id)) => {
                    let literal = parse_literal(labels.name(id));
                    match labels.value(id) {
                        Value::Unbound => labels.set(id, Value::Literal(literal), inst.line),
                        // Same spelling always parses to the same value.
                        Value::Literal(_) => {}
                        Value::Address(_) => reports.push(Report::new(
                            inst.line,
                            Error::DuplicateLabel(labels.name(id).to_string()),
                        )),
                    }
                }
                _ => reports.push(Report::new(inst.line, Error::DatMissingLabelOrOperand)),
            },
        }

        address = address.wrapping_add(inst.op.width());
    }

    reports
}

/// Decimal prefix of a spelling, atoi-style: optional sign, then digits up
/// to the first non-digit. No digits means 0.
fn parse_literal(s: &str) -> i64 {
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let mut value: i64 = 0;
    for c in digits.chars() {
        match c.to_digit(10) {
            Some(d) => value = value.wrapping_mul(10).wrapping_add(d as i64),
            None => break,
        }
    }
    value.wrapping_mul(sign)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_parsing() {
        assert_eq!(parse_literal("0"), 0);
        assert_eq!(parse_literal("123"), 123);
        assert_eq!(parse_literal("12ab"), 12);
        assert_eq!(parse_literal("abc"), 0);
        assert_eq!(parse_literal(""), 0);
        assert_eq!(parse_literal("-7"), -7);
        assert_eq!(parse_literal("+5"), 5);
        assert_eq!(parse_literal("-"), 0);
    }
}
