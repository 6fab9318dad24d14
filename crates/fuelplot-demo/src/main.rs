// File: crates/fuelplot-demo/src/main.rs
// Summary: Demo loads a fillup log (TSV) and renders all four charts to SVGs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fuelplot_core::record::annotate_days_since_fillup;
use fuelplot_core::{parse, ChartConfig, ChartContext, DeriveOptions};
use fuelplot_render_svg::SvgRenderer;

fn main() -> Result<()> {
    let raw = std::env::args().nth(1).unwrap_or_else(|| "data.tsv".to_string());
    let path = Path::new(&raw);
    println!("Using input file: {}", path.display());

    let opts = DeriveOptions::default();
    let mut records = parse::parse_tsv_path(path, &opts)
        .with_context(|| format!("failed to load TSV '{}'", path.display()))?;
    println!("Loaded {} fillups", records.len());

    if records.is_empty() {
        anyhow::bail!("no fillups loaded - check headers/delimiter.");
    }

    annotate_days_since_fillup(&mut records);

    let full = ChartContext::full();
    let half = ChartContext::half_height();
    let renderer = SvgRenderer::new();

    let charts = [
        (ChartConfig::mileage_lines(), full, "mileage"),
        (ChartConfig::average_mpg(), full, "avg_mpg"),
        (ChartConfig::price_per_mile(), full, "price_per_mile"),
        (ChartConfig::fillup_frequency(), half, "fillup_freq"),
    ];

    for (config, ctx, name) in charts {
        let scene = config
            .assemble(&records, &ctx)
            .with_context(|| format!("assembling {name} chart"))?;
        let out = out_name(name);
        renderer
            .render_to_file(&scene, &out)
            .with_context(|| format!("writing {}", out.display()))?;
        println!("Wrote {}", out.display());
    }

    Ok(())
}

/// Output file name like target/out/chart_<name>.svg
fn out_name(name: &str) -> PathBuf {
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("chart_{name}.svg"));
    out
}
