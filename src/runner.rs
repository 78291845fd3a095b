// src/runner.rs
use std::path::PathBuf;

use crate::{
    file,
    params::{DEFAULT_OUT_STEM, Params},
    progress::Progress,
    scrape,
};

/// Summary of what was produced.
pub struct RunSummary {
    pub rows_extracted: usize,
    pub file_written: Option<PathBuf>,
}

impl RunSummary {
    fn empty() -> Self {
        Self { rows_extracted: 0, file_written: None }
    }
}

/// Top-level runner: fetch → extract → preview → write.
///
/// Every failure mode is absorbed here: fetch errors and write errors are
/// reported through `progress` (and the debug log) and degrade to an empty
/// summary / unwritten file. Nothing propagates; the process exits normally
/// whatever happened.
pub fn run(params: &Params, mut progress: Option<&mut dyn Progress>) -> RunSummary {
    let page = match scrape::fetch_and_extract(&params.url) {
        Ok(page) => page,
        Err(e) => {
            loge!("{e}");
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Error fetching URL {}: {e}", params.url));
            }
            return RunSummary::empty();
        }
    };

    if page.table_count == 0 {
        // Not an error: a page without tables is a valid empty result.
        if let Some(p) = progress.as_deref_mut() {
            p.log("No tables found on the page.");
        }
        return RunSummary::empty();
    }

    let rows = page.rows;
    if rows.is_empty() {
        if let Some(p) = progress.as_deref_mut() {
            p.log("Tables found, but no rows extracted.");
        }
        return RunSummary::empty();
    }

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!(
            "Successfully extracted and joined tables from {}\n",
            params.url
        ));
        p.log(&format!("--- Combined table (first {} rows) ---", params.preview));
        for row in rows.iter().take(params.preview) {
            p.preview_row(row);
        }
        if rows.len() > params.preview {
            p.log(&format!("\n... (and {} more rows).", rows.len() - params.preview));
        }
        p.finish(rows.len());
    }

    let out_hint = params
        .out
        .as_deref()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();

    let default_name = format!("{DEFAULT_OUT_STEM}.{}", params.format.ext());
    let written = file::resolve_out_path(&out_hint, &default_name)
        .and_then(|path| file::write_rows(&path, &rows, params.format.sep()).map(|_| path));

    match written {
        Ok(path) => {
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Data successfully written to {}", path.display()));
            }
            RunSummary { rows_extracted: rows.len(), file_written: Some(path) }
        }
        Err(e) => {
            loge!("{e}");
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Error writing output file: {e}"));
            }
            RunSummary { rows_extracted: rows.len(), file_written: None }
        }
    }
}
