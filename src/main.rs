use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use taskdash::config::AppConfig;
use taskdash::modules::tasks::adapters::in_memory::InMemoryTaskStore;
use taskdash::modules::tasks::service::TaskService;
use taskdash::modules::time_entries::adapters::in_memory::InMemoryTimeEntryStore;
use taskdash::modules::time_entries::service::TimeEntryService;
use taskdash::shared::infrastructure::identity_gate::static_tokens::StaticTokenGate;
use taskdash::shell::http::router;
use taskdash::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    // In-memory deps for now
    let task_store = Arc::new(InMemoryTaskStore::new());
    let entry_store = Arc::new(InMemoryTimeEntryStore::new());
    let mut gate = StaticTokenGate::new();
    for seeded in config.tokens {
        gate = gate.with_token(seeded.token, seeded.profile);
    }

    let state = AppState {
        identity: Arc::new(gate),
        tasks: Arc::new(TaskService::new(task_store.clone())),
        entries: Arc::new(TimeEntryService::new(task_store, entry_store)),
    };

    let app = router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    tracing::info!("listening on http://{}", config.addr);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
