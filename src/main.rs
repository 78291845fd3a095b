// src/main.rs
use tabjoin::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = cli::run() {
        // Bad arguments and the like; pipeline failures are reported inside
        // and never end up here.
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    Ok(())
}
