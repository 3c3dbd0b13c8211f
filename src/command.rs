/// A parsed command line, immutable once built by the parser.
///
/// `argv` is never empty: the parser returns no `Command` at all for blank
/// or comment lines, and rejects redirect-only lines as syntax errors.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    /// Program name followed by its arguments, in order.
    pub argv: Vec<String>,
    /// Path to rebind stdin to, from a `< path` token pair.
    pub input_file: Option<String>,
    /// Path to rebind stdout to, from a `> path` token pair.
    pub output_file: Option<String>,
    /// A single trailing `&` was present on the line.
    pub background: bool,
}

impl Command {
    pub fn program(&self) -> &str {
        &self.argv[0]
    }

    pub fn args(&self) -> &[String] {
        &self.argv[1..]
    }
}
