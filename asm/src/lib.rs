//! Two-pass assembler for the Little Man Computer.
//!
//! The pipeline is parse (build the program list and intern labels),
//! check (assign addresses, bind labels, validate operands), generate
//! (resolve operands and emit the byte stream). Errors are collected
//! across the whole run; generation only happens on a clean run.

pub mod check;
pub mod error;
pub mod gen;
pub mod label;
pub mod lexer;
pub mod msg;
pub mod parser;

use error::Report;
use label::Labels;

/// Assemble a whole source text into the flat binary stream.
pub fn assemble(source: &str) -> Result<Vec<u8>, Vec<Report>> {
    let mut labels = Labels::new();
    let (program, mut reports) = parser::parse(source, &mut labels);
    reports.extend(check::check(&program, &mut labels));
    if !reports.is_empty() {
        return Err(reports);
    }
    gen::generate(&program, &labels)
}
