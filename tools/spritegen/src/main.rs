mod convert;

use std::{fs, path::PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use pixelworld_core::Color;
use tracing::{Level, info, warn};
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "spritegen")]
#[command(version, about = "Convert a PNG into a compiled-in pixelworld sprite", long_about = None)]
struct Cli {
    /// PNG to convert
    image: PathBuf,

    /// Sprite name; becomes an upper-case `static`
    name: String,

    /// Output file (defaults to `<name>.rs` in the current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// RGB565 value written for pixels with alpha below 128
    #[arg(long, value_parser = parse_color, default_value = "0xF8FF")]
    transparent: Color,

    /// Log the most used colors before converting
    #[arg(long)]
    preview: bool,

    /// Log level
    #[arg(long, default_value_t = Level::INFO)]
    log_level: Level,
}

fn parse_color(raw: &str) -> Result<Color, String> {
    let digits = raw.trim_start_matches("0x").trim_start_matches("0X");
    u16::from_str_radix(digits, 16)
        .map(Color)
        .map_err(|e| format!("`{raw}` is not a 16-bit hex color: {e}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .compact()
        .finish()
        .init();

    let is_png = cli
        .image
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("png"));
    if !is_png {
        warn!("{} has no .png extension; trying anyway", cli.image.display());
    }

    let img = image::open(&cli.image)
        .with_context(|| format!("failed to open {}", cli.image.display()))?
        .to_rgba8();

    let name = convert::static_name(&cli.name);
    let converted = convert::convert(&img, cli.transparent);
    if converted.width == 0 || converted.height == 0 {
        bail!("{} is empty", cli.image.display());
    }

    let histogram = convert::histogram(&converted);
    if cli.preview {
        info!("most used colors:");
        for (n, (color, count)) in histogram.iter().take(10).enumerate() {
            let (r, g, b) = color.to_rgb888();
            info!("  {:>2}. 0x{:04X} rgb({:3}, {:3}, {:3}) {} px", n + 1, color.0, r, g, b, count);
        }
    }

    let source_name = cli
        .image
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    let source = convert::emit(&name, &source_name, &converted);
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("{}.rs", name.to_ascii_lowercase())));
    fs::write(&output, source).with_context(|| format!("failed to write {}", output.display()))?;

    info!(
        "{} -> {} ({}x{}, {} colors, {} transparent, {} bytes)",
        cli.image.display(),
        output.display(),
        converted.width,
        converted.height,
        histogram.len(),
        converted.transparent,
        converted.cells.len() * 2,
    );
    Ok(())
}

