// src/scrape/tables.rs

// Table discovery and row extraction.
//
// Naming precedence per table: nearest preceding heading (h1-h6), then the
// table's own <caption>, then "Table <n>". The nearest-heading lookup is a
// single forward pass that tracks the last heading seen, rather than a
// backward scan per table.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::core::{net, sanitize::normalize_ws};
use crate::error::ScrapeError;

static TR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("valid selector"));
static CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("th, td").expect("valid selector"));
static CAPTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("caption").expect("valid selector"));

/// Everything extracted from one page: how many tables were seen, and the
/// flattened labeled rows (table name prepended to each row).
#[derive(Debug)]
pub struct PageTables {
    pub table_count: usize,
    pub rows: Vec<Vec<String>>,
}

/// Fetch one page and flatten all of its tables into labeled rows.
pub fn fetch_and_extract(url: &str) -> Result<PageTables, ScrapeError> {
    let body = net::http_get(url)?;
    Ok(extract(&body))
}

/// Pure extraction from markup. Parsing is lenient; there is no failure path.
pub fn extract(html: &str) -> PageTables {
    let doc = Html::parse_document(html);

    // One pass in document order: remember the text of the last heading seen
    // (even when empty — an empty nearest heading must fall through to the
    // caption, not to some earlier heading), and collect tables as they come.
    let mut last_heading: Option<String> = None;
    let mut tables: Vec<(Option<String>, ElementRef)> = Vec::new();

    for el in doc.root_element().descendants().filter_map(ElementRef::wrap) {
        let tag = el.value().name();
        if is_heading(tag) {
            last_heading = Some(element_text(el));
        } else if tag == "table" {
            tables.push((last_heading.clone(), el));
        }
    }

    let table_count = tables.len();
    let mut rows_out: Vec<Vec<String>> = Vec::new();

    for (i, (heading, table)) in tables.into_iter().enumerate() {
        let name = resolve_name(heading, table, i);

        for tr in table.select(&TR) {
            let mut row: Vec<String> = tr.select(&CELL).map(element_text).collect();
            if row.is_empty() {
                continue; // no cells at all → drop the row
            }
            row.insert(0, name.clone());
            rows_out.push(row);
        }
    }

    PageTables { table_count, rows: rows_out }
}

fn is_heading(tag: &str) -> bool {
    matches!(tag, "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
}

fn element_text(el: ElementRef) -> String {
    normalize_ws(&el.text().collect::<String>())
}

fn resolve_name(heading: Option<String>, table: ElementRef, index: usize) -> String {
    if let Some(h) = heading {
        if !h.is_empty() {
            return h;
        }
    }
    if let Some(caption) = table.select(&CAPTION).next() {
        let text = element_text(caption);
        if !text.is_empty() {
            return text;
        }
    }
    format!("Table {}", index + 1)
}
