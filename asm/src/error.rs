use thiserror::Error;

use crate::label::{MAX_LABELS, MAX_LABEL_LEN};

#[derive(Error, Debug)]
pub enum Error {
    #[error("label name too long: `{0}` (max {max} bytes)", max = MAX_LABEL_LEN)]
    NameTooLong(String),

    #[error("too many labels (max {max})", max = MAX_LABELS)]
    SymbolTableFull,

    #[error("label with no instruction: `{0}`")]
    MissingOpcode(String),

    #[error("unknown mnemonic: `{0}`")]
    UnknownMnemonic(String),

    #[error("re-defined label: `{0}`")]
    DuplicateLabel(String),

    #[error("`{0}` takes no operand")]
    UnexpectedOperand(String),

    #[error("`{0}` expects an operand")]
    MissingOperand(String),

    #[error("DAT needs both a label and an operand")]
    DatMissingLabelOrOperand,

    #[error("undefined label: `{0}`")]
    UndefinedLabel(String),

    #[error("failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),
}

/// An error pinned to the 0-based source line that produced it.
#[derive(Debug)]
pub struct Report {
    pub line: usize,
    pub err: Error,
}

impl Report {
    pub fn new(line: usize, err: Error) -> Self {
        Report { line, err }
    }
}
