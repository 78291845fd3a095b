// src/scrape/mod.rs
mod tables;

pub use tables::{PageTables, extract, fetch_and_extract};
