//! mathquiz CLI — interactive arithmetic quiz on the terminal.

use std::io;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use mathquiz_core::console::LineConsole;
use mathquiz_core::engine::QuizEngine;
use mathquiz_core::generator::QuestionGenerator;
use mathquiz_core::report::QuizReport;
use mathquiz_core::resolver;
use mathquiz_core::settings::{load_settings_from, OutputFormat, QuizSettings};
use mathquiz_core::traits::QuizConsole;

#[derive(Parser)]
#[command(name = "mathquiz", version, about = "Interactive arithmetic quiz")]
struct Cli {
    /// Seed for reproducible questions (overrides settings and MATHQUIZ_SEED)
    #[arg(long)]
    seed: Option<u64>,

    /// Settings file path (no settings file is read unless given)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Report format: text, json
    #[arg(long)]
    format: Option<OutputFormat>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut settings = load_settings_from(cli.config.as_deref())?;
    if let Some(seed) = cli.seed {
        settings.seed = Some(seed);
    }
    if let Some(format) = cli.format {
        settings.format = format;
    }

    init_tracing(&settings);

    let mut console = LineConsole::new(io::stdin().lock(), io::stdout().lock());
    play(&mut console, &settings).context("quiz aborted")
}

fn init_tracing(settings: &QuizSettings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("mathquiz=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn play(console: &mut dyn QuizConsole, settings: &QuizSettings) -> Result<()> {
    console.say("Welcome to the Math Quiz!")?;
    let config = resolver::prompt_config(console)?;

    let generator = match settings.seed {
        Some(seed) => QuestionGenerator::seeded(seed),
        None => QuestionGenerator::from_clock(),
    };

    let run_id = Uuid::new_v4();
    let span = tracing::info_span!("quiz", %run_id);
    let _guard = span.enter();

    let started_at = chrono::Utc::now();
    let start = Instant::now();
    tracing::info!(seed = ?settings.seed, "quiz started");

    let mut engine = QuizEngine::new(config.clone(), generator);
    let statistics = engine.run(console)?;
    let report = QuizReport::new(run_id, started_at, config, statistics, start.elapsed());
    tracing::info!(
        correct = statistics.correct_answers,
        total = statistics.total_questions,
        elapsed_ms = report.elapsed_ms,
        "quiz finished"
    );

    console.say("")?;
    match settings.format {
        OutputFormat::Text => console.say(report.render_text().trim_end())?,
        OutputFormat::Json => console.say(&report.render_json()?)?,
    }

    Ok(())
}
