use arch::op::Op;

use crate::error::{Error, Report};
use crate::label::{LabelId, Labels};
use crate::lexer;

/// One assembled source line. Label and operand are interned symbols;
/// either may be absent.
#[derive(Debug, Clone, Copy)]
pub struct Inst {
    /// 0-based source line, kept for diagnostics.
    pub line: usize,
    pub label: Option<LabelId>,
    pub op: Op,
    pub operand: Option<LabelId>,
}

/// Classify one line by token count and whether the first token is a
/// mnemonic. Returns `Ok(None)` for a blank line.
///
/// Accepted shapes:
///   opcode
///   opcode operand
///   label opcode
///   label opcode operand
pub fn parse_line(line: usize, raw: &str, labels: &mut Labels) -> Result<Option<Inst>, Error> {
    let tokens = lexer::tokenize(raw);
    let Some(&first) = tokens.first() else {
        return Ok(None);
    };

    if let Some(op) = Op::parse(first) {
        // No label. A third token, if any, is ignored.
        let operand = match tokens.get(1) {
            Some(t) => Some(labels.intern(t)?),
            None => None,
        };
        return Ok(Some(Inst {
            line,
            label: None,
            op,
            operand,
        }));
    }

    // First token is a label; the mnemonic must follow.
    let label = labels.intern(first)?;
    let Some(&second) = tokens.get(1) else {
        return Err(Error::MissingOpcode(first.to_string()));
    };
    let op = Op::parse(second).ok_or_else(|| Error::UnknownMnemonic(second.to_string()))?;
    let operand = match tokens.get(2) {
        Some(t) => Some(labels.intern(t)?),
        None => None,
    };
    Ok(Some(Inst {
        line,
        label: Some(label),
        op,
        operand,
    }))
}

/// Parse a whole source text. Faulty lines are reported and skipped; the
/// rest of the program is still built so one run surfaces every problem.
pub fn parse(source: &str, labels: &mut Labels) -> (Vec<Inst>, Vec<Report>) {
    let mut program = Vec::new();
    let mut reports = Vec::new();
    for (line, raw) in source.lines().enumerate() {
        match parse_line(line, raw, labels) {
            Ok(Some(inst)) => program.push(inst),
            Ok(None) => {}
            Err(err) => reports.push(Report::new(line, err)),
        }
    }
    (program, reports)
}
