//! signreplay - Replay recorded hand-landmark ticks through the sign pipeline.
//!
//! Input is JSON lines, one tick per line:
//!
//! ```text
//! {"t":0,"hands":[{"handedness":"Right","landmarks":[{"x":0.5,"y":0.6,"z":0.0}, ...]}]}
//! {"t":33,"hands":[]}
//! ```

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use signbridge_gesture::{
    Classifier, DetectionEvent, GestureError, HandRouting, Language, Pipeline, PipelineConfig,
    Tick, Vocabulary,
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Replay recorded hand-landmark ticks and print confirmed signs.
#[derive(Parser, Debug)]
#[command(name = "signreplay")]
#[command(about = "Replay recorded hand-landmark ticks and print confirmed signs")]
struct Args {
    /// Ticks file in JSON lines format ("-" for stdin)
    #[arg(short, long)]
    input: PathBuf,

    /// Pipeline config file (.yaml, .yml or .json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Frames in the stability window
    #[arg(long)]
    window: Option<usize>,

    /// Share of the window a label must hold (0..1)
    #[arg(long)]
    ratio: Option<f32>,

    /// Minimum milliseconds between two detections
    #[arg(long)]
    cooldown_ms: Option<u64>,

    /// Give each hand its own stability filter
    #[arg(long)]
    per_hand: bool,

    /// Allow the same sign to be confirmed twice in a row
    #[arg(long)]
    allow_repeat: bool,

    /// Print Hindi glosses instead of English words
    #[arg(long)]
    hindi: bool,

    /// Print events and summary as JSON lines
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Default, Serialize)]
struct Summary {
    ticks: usize,
    skipped: usize,
    events: usize,
    labels: BTreeMap<&'static str, usize>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_target(false)
            .init();
    }

    let config = load_config(&args)?;
    let vocabulary = Arc::new(Vocabulary::reference());
    let mut pipeline = Pipeline::new(Classifier::new(Arc::clone(&vocabulary)), config)
        .context("invalid pipeline config")?;
    pipeline.start();

    let reader: Box<dyn BufRead> = if args.input.as_os_str() == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = File::open(&args.input)
            .with_context(|| format!("open {}", args.input.display()))?;
        Box::new(BufReader::new(file))
    };

    let language = if args.hindi {
        Language::Hindi
    } else {
        Language::English
    };

    let mut summary = Summary::default();
    for (n, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("read line {}", n + 1))?;
        if line.trim().is_empty() {
            continue;
        }
        let tick: Tick =
            serde_json::from_str(&line).with_context(|| format!("parse line {}", n + 1))?;
        summary.ticks += 1;

        let events = match pipeline.tick(&tick.hands, tick.timestamp_ms) {
            Ok(events) => events,
            Err(e @ GestureError::InvalidInput { .. }) => {
                warn!("line {}: skipping tick: {}", n + 1, e);
                summary.skipped += 1;
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        for event in &events {
            summary.events += 1;
            *summary.labels.entry(event.label.as_str()).or_default() += 1;
            print_event(event, &vocabulary, language, args.json)?;
        }
    }
    pipeline.stop();

    if args.json {
        println!("{}", serde_json::to_string(&serde_json::json!({ "summary": summary }))?);
    } else {
        println!();
        println!(
            "{} ticks, {} skipped, {} signs detected",
            summary.ticks, summary.skipped, summary.events
        );
        for (label, count) in &summary.labels {
            println!("  {:<14} {}", label, count);
        }
    }
    Ok(())
}

fn load_config(args: &Args) -> Result<PipelineConfig> {
    let mut config = match &args.config {
        Some(path) => PipelineConfig::load(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => PipelineConfig::default(),
    };
    if let Some(window) = args.window {
        config.stability.stability_window = window;
    }
    if let Some(ratio) = args.ratio {
        config.stability.agreement_ratio = ratio;
    }
    if let Some(cooldown) = args.cooldown_ms {
        config.stability.cooldown_ms = cooldown;
    }
    if args.per_hand {
        config.routing = HandRouting::PerHand;
    }
    if args.allow_repeat {
        config.stability.allow_repeat = true;
    }
    Ok(config)
}

fn print_event(
    event: &DetectionEvent,
    vocabulary: &Vocabulary,
    language: Language,
    json: bool,
) -> Result<()> {
    let text = vocabulary.translate(event.label, language).unwrap_or("");
    let emergency = event.is_emergency(vocabulary);

    if json {
        let line = serde_json::json!({
            "event": event,
            "text": text,
            "emergency": emergency,
        });
        println!("{}", serde_json::to_string(&line)?);
        return Ok(());
    }

    let hand = event.handedness.map(|h| h.as_str()).unwrap_or("-");
    println!(
        "{:>8}ms  {:<12} {:<14} {:<5} {:>3.0}%{}",
        event.timestamp_ms,
        event.label.as_str(),
        text,
        hand,
        event.ratio * 100.0,
        if emergency { "  [emergency]" } else { "" }
    );
    Ok(())
}
