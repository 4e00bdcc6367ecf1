//! schemadoc — render a JSON document schema into an HTML page fragment.
//!
//! Replacement for the browser-side renderer. Supports two modes:
//!
//! - **stdin mode**: `schemadoc < package.json`
//! - **file mode**: `schemadoc package.json -o docs/content.html`
//!
//! The markup is written wholesale, in one pass; embedding it into a page is
//! the host's concern.

mod load;
mod model;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "schemadoc",
    about = "Render a JSON document schema as an HTML fragment"
)]
struct Cli {
    /// Input schema file. If omitted, reads from stdin.
    file: Option<PathBuf>,

    /// Output file. If omitted, writes to stdout.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: html (default), markdown
    #[arg(short = 'f', long, default_value = "html")]
    format: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let doc = match cli.file {
        Some(ref path) => load::from_path(path)?,
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            load::from_str(&input)?
        }
    };

    let renderer = render::create_renderer(&cli.format)?;
    let markup = renderer.render(&doc);

    match cli.output {
        Some(ref path) => fs::write(path, &markup)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{}", markup),
    }

    Ok(())
}
