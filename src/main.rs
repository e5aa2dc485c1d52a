//! Questioning CLI
//!
//! Runs one dialogue over stdin/stdout. Prompts go to stdout; logs and
//! transition events go to stderr.

use questioning_engine::config::{CliConfig, LogFormat, TransitionLogMode};
use questioning_engine::{DialogueEngine, JsonLinesLog, TracingLog, TransitionLog};
use std::io::{self, BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::from_env();
    init_tracing(config.log_format);

    let tracing_log = TracingLog;
    let json_log = JsonLinesLog::new(io::stderr());
    let log: Option<&dyn TransitionLog> = match config.transition_log {
        TransitionLogMode::Tracing => Some(&tracing_log),
        TransitionLogMode::Json => Some(&json_log),
        TransitionLogMode::Off => None,
    };

    let mut engine = DialogueEngine::new();
    if let Some(log) = log {
        engine = engine.with_log(log);
    }

    let mut stdout = io::stdout().lock();
    let mut lines = io::stdin().lock().lines();

    writeln!(stdout, "{}", engine.start())?;
    while !engine.is_finished() {
        write!(stdout, "> ")?;
        stdout.flush()?;
        let line = lines.next().transpose()?;
        writeln!(stdout, "{}", engine.handle_input(line.as_deref()))?;
    }

    tracing::debug!(category = ?engine.category(), "Dialogue finished");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "questioning_engine=warn".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_span_list(false)
                    .with_writer(io::stderr),
            )
            .init(),
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(io::stderr),
            )
            .init(),
    }
}
