use anyhow::{Context, Result};
use clap::Parser;
use raster_compositor::{Canvas, Rectangle};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug, Clone)]
#[command(name = "raster-compositor")]
#[command(about = "Layered raster compositor demo", long_about = None)]
struct Cli {
    /// Canvas width in pixels
    #[arg(long, default_value_t = 1000)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 1000)]
    height: u32,

    /// Where to write the rendered frame as a binary PPM
    #[arg(long, default_value = "canvas.ppm")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut canvas = Canvas::new(cli.width, cli.height);
    canvas.add(Box::new(Rectangle::new(200, 200, 600, 600)));
    canvas.draw();

    write_ppm(&canvas, &cli.output)?;
    println!("{}", canvas.telemetry().report()?);

    Ok(())
}

/// Dump the finished frame as binary PPM (P6), the simplest sink that image
/// viewers understand.
fn write_ppm(canvas: &Canvas, path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);

    write!(out, "P6\n{} {}\n255\n", canvas.width(), canvas.height())?;
    out.write_all(&canvas.rgb_buffer())?;
    out.flush()?;

    Ok(())
}
