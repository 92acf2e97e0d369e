// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Renders the agent skew chart model for a JSON event log dump.
//!
//! # Usage
//!
//! ```bash
//! skew-report log.json
//! skew-report log.json --threshold 5000 --focus Busy --pretty
//! RUST_LOG=debug skew-report log.json --config skew.yaml
//! ```

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use dd_agent_skew::config::{load_config, validate_threshold};
use dd_agent_skew::{ChartModel, InteractionState, Palette, parse_log};

#[derive(Parser, Debug)]
#[command(name = "skew-report")]
#[command(about = "Derive the agent skew chart from an event log")]
#[command(version)]
struct Args {
    /// JSON array of log events
    log: PathBuf,

    /// YAML view config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skew threshold in milliseconds (overrides config and environment)
    #[arg(short, long)]
    threshold: Option<f64>,

    /// Hide the state reference areas
    #[arg(long)]
    hide_reference_area: bool,

    /// Palette key to highlight in the legend and bands
    #[arg(long)]
    focus: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    // RUST_LOG takes precedence, fallback to info. Logs go to stderr so the
    // chart model on stdout stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = load_config(args.config.as_deref()).context("Failed to load view config")?;
    if let Some(threshold) = args.threshold {
        config.skew_threshold_ms = validate_threshold(threshold)?;
    }

    let palette = Palette::default();
    let mut interaction = InteractionState::from_config(&config, &palette);
    if args.hide_reference_area && !interaction.reference_area_hidden() {
        interaction.toggle_reference_area_visibility();
    }
    if let Some(focus) = args.focus.as_deref() {
        if !palette.contains_key(focus) {
            bail!("Unknown palette key: {focus}");
        }
        interaction.set_highlight_focus(Some(focus));
    }

    let contents = std::fs::read_to_string(&args.log)
        .with_context(|| format!("reading {}", args.log.display()))?;
    let log = parse_log(&contents).with_context(|| format!("parsing {}", args.log.display()))?;
    tracing::info!(
        log = %args.log.display(),
        events = log.len(),
        threshold_ms = config.skew_threshold_ms,
        "loaded event log"
    );

    let model = ChartModel::build(&log, &palette, &interaction);
    tracing::info!(
        points = model.points.len(),
        reference_areas = model.reference_areas.len(),
        "chart model ready"
    );

    let mut stdout = std::io::stdout().lock();
    if args.pretty {
        serde_json::to_writer_pretty(&mut stdout, &model)?;
    } else {
        serde_json::to_writer(&mut stdout, &model)?;
    }
    writeln!(stdout).context("Failed to write chart model")?;
    Ok(())
}
