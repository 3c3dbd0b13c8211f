use crate::command::Command;

/// Parse one input line into a [`Command`].
///
/// Tokens are whitespace-separated. `<` and `>` each take the very next
/// token as a redirect path; a lone `&` in the final position marks the
/// command as background (anywhere else it is an ordinary argument).
///
/// Returns `Ok(None)` for lines with nothing to run: blank lines and
/// comment lines (first non-blank character is `#`).
pub fn parse(line: &str) -> Result<Option<Command>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();

    let mut argv: Vec<String> = Vec::new();
    let mut input_file = None;
    let mut output_file = None;
    let mut background = false;

    let mut i = 0;
    while i < tokens.len() {
        match tokens[i] {
            "<" => {
                i += 1;
                input_file = Some(expect_path(&tokens, i, "<")?);
            }
            ">" => {
                i += 1;
                output_file = Some(expect_path(&tokens, i, ">")?);
            }
            "&" if i == tokens.len() - 1 => background = true,
            token => argv.push(token.to_string()),
        }
        i += 1;
    }

    if argv.is_empty() {
        return Err("syntax error: missing command".to_string());
    }

    Ok(Some(Command {
        argv,
        input_file,
        output_file,
        background,
    }))
}

fn expect_path(tokens: &[&str], i: usize, operator: &str) -> Result<String, String> {
    match tokens.get(i) {
        Some(token) => Ok(token.to_string()),
        None => Err(format!("syntax error: expected filename after '{operator}'")),
    }
}
