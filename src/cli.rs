// src/cli.rs
use std::{env, path::PathBuf};

use crate::csv::Delim;
use crate::params::Params;
use crate::progress::Progress;
use crate::runner;

/// Console progress sink: status lines to stdout, previewed rows in
/// list form like the combined-table dump this tool grew out of.
struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn preview_row(&mut self, row: &[String]) {
        println!("{row:?}");
    }
    fn finish(&mut self, total: usize) {
        println!("Total {total} rows extracted.");
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    if !parse_cli(&mut params)? {
        return Ok(());
    }

    let mut progress = ConsoleProgress;
    let summary = runner::run(&params, Some(&mut progress));
    if summary.rows_extracted == 0 {
        println!("Failed to extract or join any tables, or no tables were found.");
    }
    Ok(())
}

/// Returns Ok(false) when the invocation was handled entirely here (--help).
fn parse_cli(params: &mut Params) -> Result<bool, Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-u" | "--url" => params.url = args.next().ok_or("Missing value for --url")?,
            "-o" | "--out" => params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => Delim::Csv,
                    "tsv" => Delim::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };}
            "--preview" => {
                let v = args.next().ok_or("Missing value for --preview")?;
                params.preview = v.parse()?;}
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                return Ok(false);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(true)
}
