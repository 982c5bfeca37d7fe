mod core;
#[cfg(test)]
mod test_support;
mod tui;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use crate::core::config;

#[derive(Parser)]
#[command(name = "lectern", about = "Terminal viewer for the MS-203 Exchange Online course")]
struct Args {
    /// Lesson to open at launch, as "module-slug/lesson-slug"
    location: Option<String>,

    /// Show trainer notes alongside lesson content
    #[arg(short, long)]
    trainer: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to lectern.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("lectern.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Lectern starting up");

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Falling back to default config: {e}");
        Default::default()
    });
    let resolved = config::resolve(&file_config, args.location.as_deref(), args.trainer);

    tui::run(resolved)
}
