use anyhow::Context;
use parley::inputs::ConsoleRecognizer;
use parley::outputs::{CommandSpeech, ConsoleIndicator, ConsoleSpeech, Indicator, SpeechSink};
use parley::{DialogueConfig, Dispatcher};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Setup Logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    // 2. Config
    let config = DialogueConfig::from_env()?;
    tracing::info!("Initializing for language {}...", config.language);

    // 3. Wire sinks and run
    match config.speech_program.clone() {
        Some(program) => {
            let speech = CommandSpeech::new(program, config.language.clone());
            serve(config, speech, ConsoleIndicator::new()).await
        }
        None => {
            let speech = ConsoleSpeech::new(config.language.clone());
            serve(config, speech, ConsoleIndicator::new()).await
        }
    }
}

async fn serve<S: SpeechSink, L: Indicator>(
    config: DialogueConfig,
    speech: S,
    indicator: L,
) -> anyhow::Result<()> {
    let mut dispatcher = Dispatcher::new(config, ConsoleRecognizer::new(), speech, indicator);
    println!("Type what you would say, one line per utterance. Say 'goodbye' to stop.");

    let result = tokio::select! {
        result = dispatcher.run() => result.map_err(anyhow::Error::from),
        _ = tokio::signal::ctrl_c() => {
            tracing::warn!("Interrupted. Dropping session state.");
            Ok(())
        }
    };

    let snapshot = dispatcher.telemetry.snapshot();
    match serde_json::to_string(&snapshot) {
        Ok(json) => tracing::info!("Session {} telemetry: {}", dispatcher.session_id, json),
        Err(e) => tracing::warn!("Failed to encode telemetry: {}", e),
    }

    result
}
