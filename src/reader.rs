use anyhow::{Result, Context};
use std::fs;
use std::path::Path;

/// Lines of the target file, in order, without their terminators
pub type FileLines = Vec<String>;

/// Read a file fully into memory, one element per line
///
/// A line ends at `\n`, `\r\n` or a lone `\r`. A file without a
/// trailing terminator yields its last line all the same.
///
/// # Arguments
/// * `file_path` - Path to the file to read
///
/// # Returns
/// * `Result<FileLines>` - The file's lines
pub fn read_lines(file_path: &Path) -> Result<FileLines> {
    let content = fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read file: {:?}", file_path))?;

    let lines = split_lines(&content);

    log::debug!("Read {} lines from {:?}", lines.len(), file_path);
    Ok(lines)
}

/// Split text into lines on any of the `\n`, `\r\n` and `\r` terminators
fn split_lines(content: &str) -> FileLines {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                lines.push(std::mem::take(&mut current));
            }
            '\n' => lines.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }

    // Unterminated last line
    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
