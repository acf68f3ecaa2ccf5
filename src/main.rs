use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "runeview", about = "Interactive Unicode code point browser")]
struct Args {
    /// Write a debug log to this file (stderr belongs to the TUI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    if let Some(path) = args.log_file {
        let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
        if let Ok(log_file) = File::create(path) {
            let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
        }
    }

    log::info!("Runeview starting up");

    runeview::tui::run()
}
