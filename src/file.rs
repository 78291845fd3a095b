// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter},
    path::{Path, PathBuf},
};

use crate::csv::write_row;
use crate::error::ScrapeError;

/// Create/truncate `path` and write every row in order. The handle is scoped
/// to this function, so it is closed on every exit path. No temp-file dance:
/// an I/O failure leaves whatever the stream got out.
pub fn write_rows(path: &Path, rows: &[Vec<String>], sep: char) -> Result<(), ScrapeError> {
    let io_err = |source| ScrapeError::Io { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent).map_err(io_err)?;
        }
    }

    let file = File::create(path).map_err(io_err)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    for row in rows {
        write_row(&mut out, row, sep).map_err(io_err)?;
    }
    io::Write::flush(&mut out).map_err(io_err)?;

    logf!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// Empty hint → default filename in cwd. Directory hint (trailing separator
/// or existing dir) → create it and drop the default filename inside.
/// Anything else is taken as the file path.
pub fn resolve_out_path(hint: &str, default_filename: &str) -> Result<PathBuf, ScrapeError> {
    if hint.is_empty() {
        return Ok(PathBuf::from(default_filename));
    }
    let p = PathBuf::from(hint);
    if looks_like_dir_hint(&p) || p.is_dir() {
        ensure_directory(&p).map_err(|source| ScrapeError::Io { path: p.clone(), source })?;
        Ok(p.join(default_filename))
    } else {
        Ok(p)
    }
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
