//! Atomic output file writes.
//!
//! Rendered documents are first written to a temporary file next to the
//! target and then renamed into place. A run that fails halfway leaves any
//! existing output file untouched.
//!
//! # Atomicity Guarantee
//!
//! On POSIX systems, renames within one filesystem are atomic. The temporary
//! file lives in the target's directory so the rename never crosses
//! filesystems.
//!
//! # Examples
//!
//! ```no_run
//! use linexml_records::{parse, to_xml_string, write_atomic, XmlOptions};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let people = parse(["P|Ada|Lovelace"])?;
//! let xml = to_xml_string(&people, XmlOptions::default())?;
//! write_atomic("people.xml", xml).await?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::Result;

/// Atomically replaces the file at `path` with `contents`.
///
/// A temporary file named `<path>.tmp` (or `<path>.<ext>.tmp`) is written,
/// flushed, and renamed to `path`.
///
/// # Errors
///
/// Returns an I/O error if the temporary file cannot be written or the
/// rename fails. The temporary file is removed whenever the call fails.
pub async fn write_atomic<P, C>(path: P, contents: C) -> Result<()>
where
    P: AsRef<Path>,
    C: AsRef<[u8]>,
{
    let path = path.as_ref();
    let temp_path = make_temp_path(path);

    if let Err(e) = write_to_temp_file(&temp_path, contents.as_ref()).await {
        // Best-effort cleanup of temp file
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(e);
    }

    if let Err(e) = tokio::fs::rename(&temp_path, path).await {
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(e.into());
    }
    tracing::debug!(path = %path.display(), "Wrote output");
    Ok(())
}

/// Creates the temporary path used while writing `path`.
///
/// `.tmp` is appended to the existing extension, or used as the extension
/// when there is none.
fn make_temp_path(path: &Path) -> PathBuf {
    let mut temp_path = path.to_path_buf();
    let new_extension = match path.extension() {
        Some(ext) => {
            let mut new_ext = ext.to_os_string();
            new_ext.push(".tmp");
            new_ext
        }
        None => std::ffi::OsString::from("tmp"),
    };
    temp_path.set_extension(new_extension);
    temp_path
}

async fn write_to_temp_file(temp_path: &Path, contents: &[u8]) -> Result<()> {
    let mut file = File::create(temp_path).await?;
    file.write_all(contents).await?;
    file.flush().await?;
    file.sync_all().await?;
    Ok(())
}
