use clap::Parser;
use log::{LevelFilter, error, info, warn};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

use moji::core::config;
use moji::core::emoji::SkinTone;
use moji::tui;

#[derive(Parser, Debug)]
#[command(name = "moji", about = "A terminal emoji picker", version)]
struct Args {
    /// Skin tone applied to every tone-capable emoji at startup
    #[arg(short, long, value_enum)]
    tone: Option<SkinTone>,

    /// Hide emoji introduced after this Unicode version (e.g. 12.0)
    #[arg(long)]
    unicode_version: Option<f32>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Log to a file; stdout/stderr belong to the terminal UI.
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    if let Ok(log_file) = File::create("moji.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }
    info!("moji starting");

    let config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load config, using defaults: {}", e);
            eprintln!("Warning: {e} — using defaults");
            config::MojiConfig::default()
        }
    };
    let resolved = config::resolve(&config, args.tone, args.unicode_version);

    match tui::run(resolved) {
        Ok(Some(glyph)) => {
            // The picked emoji goes to stdout so it can be piped.
            println!("{glyph}");
            Ok(())
        }
        Ok(None) => Ok(()),
        Err(e) => {
            error!("picker failed: {}", e);
            Err(e)
        }
    }
}
