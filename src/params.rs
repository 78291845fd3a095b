// src/params.rs
use std::path::PathBuf;
use crate::csv::Delim;

/// Reference page: the LinkedIn industry codes tables.
pub const DEFAULT_URL: &str =
    "https://learn.microsoft.com/en-us/linkedin/shared/references/reference-tables/industry-codes-v2";
pub const DEFAULT_OUT_STEM: &str = "linkedin_industry_codes";
pub const PREVIEW_ROWS: usize = 10;

#[derive(Clone)]
pub struct Params {
    pub url: String,                 // page to scrape
    pub out: Option<PathBuf>,        // output path (file, or dir to drop the default filename into)
    pub format: Delim,
    pub preview: usize,              // rows echoed to console before writing
}

impl Params {
    pub fn new() -> Self {
        Self {
            url: s!(DEFAULT_URL),
            out: None,
            format: Delim::Csv,
            preview: PREVIEW_ROWS,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
