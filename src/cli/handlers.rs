use std::{
    fs::File,
    io::{self, BufWriter, Write},
    time::Instant,
};

use log::{info, warn};

use crate::{
    chart::Chart,
    core::{
        color::AnsiCode,
        config::{Config, parse_delimiter},
        error::PlotError,
        source::open_input,
    },
    load_chart,
    render::Renderer,
};

use super::parse::Cli;

/// Turn parsed arguments into a validated [`Config`].
pub fn config(cli: &Cli) -> Result<Config, PlotError> {
    Ok(Config::builder(cli.kind)
        .title(cli.title.clone())
        .sort_unique(cli.sort_unique)
        .chrom_position(cli.chrom_position)
        .delimiter(parse_delimiter(&cli.delimiter)?)
        .arity(cli.columns)
        .x_label_opt(cli.xlabel.clone())
        .y_label_opt(cli.ylabel.clone())
        .hide_legend(cli.hide_legend)
        .color(AnsiCode::from_name(&cli.color)?)
        .reference_opt(cli.reference.clone())
        .min_contig_size(cli.min_reference_size)
        .size(cli.width, cli.height)
        .build()?)
}

/// Read, aggregate and assemble the chart.
pub fn load(cfg: &Config, cli: &Cli) -> Result<Chart, PlotError> {
    let mut src = open_input(cli.file.as_deref())?;
    let t_ingest = Instant::now();
    let chart = load_chart(cfg, &mut src)?;
    info!(
        "ingest: {} µs   ({} lines)",
        t_ingest.elapsed().as_micros(),
        src.line_no()
    );
    if src.invalid_lines() > 0 {
        warn!("{} lines skipped as invalid UTF-8", src.invalid_lines());
    }
    Ok(chart)
}

/// Draw to the terminal, or as plain text into `--out`.
pub fn plot(cli: &Cli) -> Result<(), PlotError> {
    let cfg = config(cli)?;
    let chart = load(&cfg, cli)?;

    let t_render = Instant::now();
    match &cli.out {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            Renderer::from_config(&cfg, true).render(&chart, &mut out)?;
            out.flush()?;
            info!("wrote {}", path.display());
        }
        None => {
            let mut out = io::stdout().lock();
            Renderer::from_config(&cfg, false).render(&chart, &mut out)?;
            out.flush()?;
        }
    }
    info!("render: {} µs", t_render.elapsed().as_micros());
    Ok(())
}
