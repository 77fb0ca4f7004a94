//! Image writes: destination folder creation plus atomic overwrite.
//!
//! The body lands in a unique temp file inside the destination folder, then a
//! rename puts it at the final path. An existing file at the destination is
//! replaced silently; a failed write never leaves a partial final file.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Writes `body` as `<folder>/<filename>`, creating `folder` (and any missing
/// parents) first. Returns the final path.
pub fn write_image(folder: &Path, filename: &str, body: &[u8]) -> io::Result<PathBuf> {
    fs::create_dir_all(folder)?;
    let final_path = folder.join(filename);

    let mut temp = tempfile::NamedTempFile::new_in(folder)?;
    temp.write_all(body)?;
    temp.persist(&final_path).map_err(|e| e.error)?;
    Ok(final_path)
}
