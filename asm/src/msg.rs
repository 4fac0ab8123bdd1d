use color_print::cprintln;

/// Console diagnostic: severity line, locus, and the offending source line.
#[derive(Debug)]
pub enum Msg {
    Error(String),
    Note(String),
}

impl Msg {
    pub fn print(&self, path: &str, line_idx: usize, raw: &str) {
        match self {
            Msg::Error(msg) => cprintln!("<red,bold>error</>: {}", msg),
            Msg::Note(msg) => cprintln!("<green,bold>note</>: {}", msg),
        }
        let line = line_idx + 1;
        cprintln!("     <blue>--></> <underline>{}:{}</>", path, line);
        cprintln!("      <blue>|</>");
        cprintln!(" <blue>{:>4} |</> {}", line, raw);
        cprintln!("      <blue>|</>");
    }
}
