use clap::Parser;
use anyhow::{Result, anyhow};
use std::path::PathBuf;

/// Command line arguments parser
#[derive(Parser, Debug)]
#[command(author, version, about = "Rewrite a text file in all upper- or lowercase, optionally moving it to another directory")]
#[command(name = "recase")]
pub struct Args {
    /// File to convert
    #[arg(allow_hyphen_values = true)]
    pub files: Vec<PathBuf>,

    /// Enable verbose output
    #[arg(long = "verbose")]
    pub verbose: bool,

    /// The single validated target file
    #[arg(skip)]
    pub file: PathBuf,
}

/// Parse command line arguments and validate them
///
/// # Returns
/// * `Result<Args>` - Parsed and validated arguments
pub fn parse() -> Result<Args> {
    let mut args = Args::parse();
    validate_args(&mut args)?;
    Ok(args)
}

/// Validate command line arguments for consistency
///
/// # Arguments
/// * `args` - Command line arguments to validate
///
/// # Returns
/// * `Result<()>` - Ok if valid, Error otherwise
fn validate_args(args: &mut Args) -> Result<()> {
    // Exactly one file per run
    if args.files.len() != 1 {
        return Err(anyhow!("Must provide name of a file as a command line argument."));
    }

    args.file = args.files[0].clone();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_from(argv: &[&str]) -> Result<Args> {
        let mut args = Args::try_parse_from(argv)?;
        validate_args(&mut args)?;
        Ok(args)
    }

    #[test]
    fn test_single_file() {
        let args = parse_from(&["recase", "notes.txt"]).unwrap();
        assert_eq!(args.file, PathBuf::from("notes.txt"));
        assert!(!args.verbose);

        let args = parse_from(&["recase", "--verbose", "dir/notes.txt"]).unwrap();
        assert_eq!(args.file, PathBuf::from("dir/notes.txt"));
        assert!(args.verbose);
    }

    #[test]
    fn test_file_name_starting_with_hyphen() {
        let args = parse_from(&["recase", "-notes.txt"]).unwrap();
        assert_eq!(args.file, PathBuf::from("-notes.txt"));

        let args = parse_from(&["recase", "--verbose", "-notes.txt"]).unwrap();
        assert_eq!(args.file, PathBuf::from("-notes.txt"));
        assert!(args.verbose);
    }

    #[test]
    fn test_wrong_file_count() {
        for argv in [&["recase"][..], &["recase", "a.txt", "b.txt"][..]] {
            let err = parse_from(argv).unwrap_err();
            assert!(err.to_string().contains("Must provide name of a file"));
        }
    }
}
