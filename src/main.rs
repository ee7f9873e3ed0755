use std::path::Path;
use std::process::ExitCode;

use logo_rasterize::{generate_all, ASSETS};

fn main() -> ExitCode {
    let source = Path::new("assets/icon.svg");
    let out_dir = source.parent().unwrap_or_else(|| Path::new("."));

    println!("Generating MSIX logos from {}...", source.display());
    match generate_all(source, out_dir) {
        Ok(()) => {
            println!(
                "Generated {} logo assets in {}",
                ASSETS.len(),
                out_dir.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
