// Vidmark CLI binary

use anyhow::Result;
use clap::Parser;

use vidmark_lib::config::OverlayConfig;
use vidmark_lib::overlay::{self, Position};

#[derive(Parser)]
#[command(name = "vidmark")]
#[command(about = "Overlay a watermark image onto a video", long_about = None)]
#[command(version)]
struct Cli {
    /// Watermark position on the frame
    #[arg(
        short,
        long,
        default_value = "bottom-right",
        value_parser = ["top-left", "top-right", "bottom-left", "bottom-right", "center"],
    )]
    position: String,

    /// Target watermark width in pixels (needs --height as well)
    #[arg(short, long)]
    width: Option<u32>,

    /// Target watermark height in pixels (needs --width as well)
    #[arg(long, alias = "ht")]
    height: Option<u32>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Input, watermark, and output filenames are fixed in this version
    let config = OverlayConfig::default();

    println!("Starting watermark for: {}", config.input_video.display());
    println!("Running FFmpeg... (this may take a while)");

    let position = Position::from_name(&cli.position);
    overlay::run_overlay(&config, position, cli.width, cli.height)?;

    println!("Done. Video saved to: {}", config.output_video.display());
    Ok(())
}
