//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here; routing lives in ResponseOrchestrator.
//!
//! With arguments, answers once and prints the reply as JSON:
//! `mindchat "play some relaxing music"`.

use dotenv::dotenv;
use mindchat::adapters::ai::OpenAiAdapter;
use mindchat::adapters::ui::tui::TuiInputPort;
use mindchat::domain::{MediaLibrary, RandomSource};
use mindchat::ports::{GenerationPort, InputPort};
use mindchat::shared::config::AppConfig;
use mindchat::usecases::{ChatService, ResponseOrchestrator};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load_or_default();

    // --- Generation delegate (absent key => rule-based replies only) ---
    let generator: Option<Arc<dyn GenerationPort>> = match cfg.ai_api_key() {
        Some(api_key) => {
            info!(
                model = %cfg.ai_model_or_default(),
                url = %cfg.ai_api_url_or_default(),
                "generation enabled with OpenAI adapter"
            );
            let adapter: Arc<dyn GenerationPort> = Arc::new(
                OpenAiAdapter::new(cfg.ai_api_url_or_default(), api_key, cfg.ai_model_or_default())
                    .with_sampling(cfg.ai_max_tokens_or_default(), cfg.ai_temperature_or_default()),
            );
            Some(adapter)
        }
        None => {
            warn!("MINDCHAT_AI_API_KEY / OPENAI_API_KEY not set, using rule-based replies");
            None
        }
    };

    let rng = cfg
        .rng_seed
        .map(RandomSource::Seeded)
        .unwrap_or(RandomSource::Thread);

    // --- Services ---
    let orchestrator = ResponseOrchestrator::new(generator)
        .with_random_source(rng)
        .with_timeout(cfg.generation_timeout());
    let chat = Arc::new(ChatService::new(orchestrator, MediaLibrary::builtin()));

    // --- One-shot mode ---
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        let message = args.join(" ");
        let reply = chat
            .send_message(&message)
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))?;
        println!("{}", serde_json::to_string_pretty(&reply)?);
        return Ok(());
    }

    // --- Interactive chat ---
    mindchat::adapters::ui::init_ui();
    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(Arc::clone(&chat)));
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
