mod cli;
mod depth_file;
mod png_sink;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use depth_file::load_depth_file;
use env_logger::Env;
use logdepth_compute::{diff_buffer, run_dual_precision};
use png_sink::{write_png_rgba8, PngSink};
use std::fs;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let config = cli.resolve_config()?;
    if cli.print_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    let Some(depth_path) = cli.depth.as_deref() else {
        anyhow::bail!("--depth is required");
    };

    log::info!(
        "probing {} ({}x{}, near {}, far {}, log2 constant {})",
        depth_path.display(),
        config.width,
        config.height,
        config.near,
        config.far,
        config.log2_constant()
    );

    // Nothing is written until the depth file has loaded.
    let depth = load_depth_file(depth_path, config.width, config.height)?;

    let mut sink = PngSink::new(cli.out_double.clone(), cli.out_single.clone());
    let output = run_dual_precision(&depth, &config, &mut sink)?;

    if let Some(path) = &cli.diff {
        let diff = diff_buffer(&output.double, &output.single)?;
        write_png_rgba8(path, &diff)?;
        log::info!("wrote divergence image to {}", path.display());
    }

    if let Some(path) = &cli.report {
        let json = serde_json::to_string_pretty(&output.report)?;
        fs::write(path, json)
            .with_context(|| format!("failed to write report {}", path.display()))?;
        log::info!("wrote divergence report to {}", path.display());
    }

    Ok(())
}
