use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use snaptheme::cli::Args;
use snaptheme::logging;
use snaptheme::pipeline::assemble::generate_theme;
use snaptheme::pipeline::load::load_and_prepare;
use snaptheme::preview::print_preview;
use snaptheme::tui::{self, TuiApp};

fn main() -> Result<()> {
    let args = Args::parse();
    // The TUI owns the terminal; stderr logging would tear it.
    if !args.tui {
        logging::init(args.log_level);
    }

    let request = args.request()?;
    let pixels = load_and_prepare(&args.image)?;

    if args.tui {
        return tui::run(TuiApp::new(pixels, args.image.clone(), request));
    }

    let theme = generate_theme(&pixels, &request);
    let backend = args.format.backend();

    if args.preview {
        print_preview(&mut std::io::stderr(), &theme)?;
    }

    match &args.output {
        Some(path) => {
            backend.write_to(&theme, path)?;
            info!(format = backend.name(), path = %path.display(), "theme written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(backend.serialize(&theme)?.as_bytes())
                .context("failed to write theme to stdout")?;
        }
    }

    Ok(())
}
