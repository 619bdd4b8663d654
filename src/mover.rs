use crate::prompt::Relocation;
use anyhow::{Result, Context, anyhow};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Move a file from the relocation's source directory to its target directory
///
/// `file` is resolved against both directories, so `notes.txt` moves
/// `<source>/notes.txt` to `<target>/notes.txt`. An existing file at the
/// destination is never overwritten.
///
/// # Arguments
/// * `file` - File name (or relative path) as given on the command line
/// * `relocation` - Source and target directories
///
/// # Returns
/// * `Result<PathBuf>` - The file's new location
pub fn move_file(file: &Path, relocation: &Relocation) -> Result<PathBuf> {
    let source = relocation.source_dir.join(file);
    let target = relocation.target_dir.join(file);

    if !source.is_file() {
        return Err(anyhow!("Source file does not exist: {}", source.display()));
    }

    // Dangling symlinks count as occupied; rename would replace them
    if fs::symlink_metadata(&target).is_ok() {
        return Err(anyhow!("Target already exists: {}", target.display()));
    }

    if !relocation.target_dir.is_dir() {
        return Err(anyhow!("Target directory does not exist: {}", relocation.target_dir.display()));
    }

    match fs::rename(&source, &target) {
        Ok(()) => {
            log::debug!("Renamed {} -> {}", source.display(), target.display());
        }
        Err(e) if crosses_devices(&e) => {
            log::debug!("Rename failed ({}), falling back to copy and remove", e);
            copy_and_remove(&source, &target)?;
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to rename {} to {}", source.display(), target.display()));
        }
    }

    Ok(target)
}

/// Whether a rename failed only because source and target are on different filesystems
fn crosses_devices(e: &io::Error) -> bool {
    // EXDEV on Unix, ERROR_NOT_SAME_DEVICE on Windows
    let code = if cfg!(windows) { 17 } else { 18 };
    e.raw_os_error() == Some(code)
}

/// Copy `source` to `target`, then remove `source`
///
/// A failed copy removes whatever part of `target` was written, so a retry
/// does not find the destination occupied.
fn copy_and_remove(source: &Path, target: &Path) -> Result<()> {
    if let Err(e) = fs::copy(source, target) {
        let _ = fs::remove_file(target);
        return Err(e).with_context(|| format!("Failed to copy {} to {}", source.display(), target.display()));
    }

    fs::remove_file(source)
        .with_context(|| format!("Failed to remove original file {}", source.display()))?;

    Ok(())
}
