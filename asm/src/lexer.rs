/// Most tokens a line can carry: label, mnemonic, operand.
pub const MAX_TOKENS: usize = 3;

/// Split one source line into at most [`MAX_TOKENS`] tokens, delimited by
/// runs of spaces and tabs. Anything past the third token is ignored.
/// A blank line yields no tokens.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split([' ', '\t'])
        .filter(|t| !t.is_empty())
        .take(MAX_TOKENS)
        .collect()
}
