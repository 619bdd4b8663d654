use crate::case::{self, CaseMode};
use anyhow::{Result, Context};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Outcome of rewriting a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteSummary {
    /// Number of lines written
    pub lines: usize,

    /// Number of lines whose text differs after conversion
    pub changed: usize,
}

/// Overwrite a file with its lines converted to the given case
///
/// Every line is written followed by a single `\n`, so the result always
/// ends with a newline and uses `\n` line endings throughout.
///
/// # Arguments
/// * `file_path` - Path of the file to overwrite
/// * `lines` - Lines previously read from the file
/// * `mode` - Case mode applied to each line
///
/// # Returns
/// * `Result<RewriteSummary>` - Counts of written and changed lines
pub fn rewrite_file(file_path: &Path, lines: &[String], mode: &CaseMode) -> Result<RewriteSummary> {
    let file = File::create(file_path)
        .with_context(|| format!("Failed to write file: {:?}", file_path))?;
    let mut writer = BufWriter::new(file);

    let mut changed = 0;
    for line in lines {
        let converted = case::convert_case(line, mode);
        if converted != *line {
            changed += 1;
        }

        writeln!(writer, "{}", converted)
            .with_context(|| format!("Failed to write file: {:?}", file_path))?;
    }

    // BufWriter swallows errors on drop
    writer.flush()
        .with_context(|| format!("Failed to write file: {:?}", file_path))?;

    Ok(RewriteSummary {
        lines: lines.len(),
        changed,
    })
}
