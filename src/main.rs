use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tandav::platform::{DirectorySink, FixedDisplay};
use tandav::{ExportOutcome, Exporter, PreviewController, Viewport, WallpaperConfig, EXPORT_SCALE};

#[derive(Parser)]
#[command(name = "tandav", version, about = "Render the Shiva Tandav wallpaper")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render one preview frame the way a display of the given size would
    Preview {
        /// Viewport width in logical pixels
        #[arg(long, default_value_t = 1280)]
        viewport_width: u32,
        /// Device pixel ratio
        #[arg(long, default_value_t = 1.0)]
        dpr: f32,
        /// Seed for particle scatter
        #[arg(long)]
        seed: Option<u64>,
        /// Output PNG
        #[arg(long, default_value = "preview.png")]
        out: PathBuf,
    },
    /// Render the high-resolution wallpaper and save it
    Export {
        /// Directory the wallpaper is saved into
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
        /// Multiple of the 1536x3328 canonical frame
        #[arg(long, default_value_t = EXPORT_SCALE)]
        scale: f32,
        /// Seed for particle scatter
        #[arg(long)]
        seed: Option<u64>,
        /// Print the export report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match Cli::parse().command {
        Command::Preview {
            viewport_width,
            dpr,
            seed,
            out,
        } => preview(viewport_width, dpr, seed, out),
        Command::Export {
            out_dir,
            scale,
            seed,
            json,
        } => export(out_dir, scale, seed, json),
    }
}

fn preview(viewport_width: u32, dpr: f32, seed: Option<u64>, out: PathBuf) -> Result<()> {
    let config = WallpaperConfig {
        seed,
        ..Default::default()
    };
    let host = Arc::new(FixedDisplay::new(Viewport {
        width: viewport_width,
        device_pixel_ratio: dpr,
        ..Default::default()
    }));

    let mut rng = config.rng();
    let mut controller = PreviewController::new(config, host);
    controller.mount();
    controller.on_animation_frame(&mut rng);

    let png = match controller.surface().encode_png() {
        Ok(png) => png,
        Err(e) => bail!("viewport {} leaves nothing to preview: {}", viewport_width, e),
    };
    std::fs::write(&out, png).with_context(|| format!("writing {}", out.display()))?;

    let (w, h) = controller.surface().backing_size();
    println!(
        "{} ({}x{} px) -> {}",
        controller.status_line().preview.unwrap_or_default(),
        w,
        h,
        out.display()
    );
    Ok(())
}

fn export(out_dir: PathBuf, scale: f32, seed: Option<u64>, json: bool) -> Result<()> {
    let config = WallpaperConfig {
        export_scale: scale,
        seed,
        ..Default::default()
    };
    let mut rng = config.rng();
    let exporter = Exporter::new(config).context("invalid export settings")?;
    let mut sink = DirectorySink::new(out_dir);

    match exporter.export(&mut sink, &mut rng)? {
        ExportOutcome::Delivered(report) if json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        ExportOutcome::Delivered(report) => {
            println!(
                "{} {}x{} ({} bytes) sha256 {}",
                report.path.display(),
                report.width,
                report.height,
                report.byte_len,
                report.sha256
            );
        }
        ExportOutcome::Skipped(reason) => {
            log::warn!("Export finished without a file: {:?}", reason);
        }
    }
    Ok(())
}
