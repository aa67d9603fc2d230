use std::io::{BufRead, Write};

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Writes `prompt` without a newline, flushes, and reads one trimmed line.
pub fn prompt_line(
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    prompt: &str,
) -> std::io::Result<String> {
    write!(out, "{}", prompt)?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Parses a 1-based column entry into the 0-based index the server expects.
pub fn parse_column(entry: &str, columns: usize) -> Option<usize> {
    let value: usize = entry.trim().parse().ok()?;
    if (1..=columns).contains(&value) {
        Some(value - 1)
    } else {
        None
    }
}
