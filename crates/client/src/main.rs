//! Initiative tracker binary.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. The shared engine via SessionBuilder (roster prompts or test roster)
//! 2. Frontend (UI) - CLI, GUI, etc.
//!
//! The roster is collected before the frontend takes over the terminal.
//!
//! # Examples
//!
//! ```bash
//! # Interactive roster entry
//! cargo run -p initiative-client
//!
//! # Fixed test roster with reproducible initiatives
//! TRACKER_SEED=7 cargo run -p initiative-client -- --test
//! ```

use anyhow::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, etc.)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_bootstrap::{SessionBuilder, SessionConfig, resolve_session_id};
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use initiative_client::Client;

    // 1. Load configuration from environment and flags
    let session_config = SessionConfig::from_env().with_args(std::env::args().skip(1));
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    let session_id = resolve_session_id(session_config.session_id.as_deref());
    let _log_guard = logging::setup_logging(&session_id)?;

    tracing::info!("Starting initiative tracker");
    tracing::info!("Session ID: {}", session_id);

    // 3. Collect the roster and build the engine (before raw mode)
    let setup = SessionBuilder::new(session_config).build()?;
    tracing::info!(
        characters = setup.tracker.borrow().len(),
        test_mode = setup.config.test_mode,
        seed = ?setup.config.seed,
        policy = %setup.tracker.borrow().notify_policy(),
        "Engine built"
    );

    // 4. Build Frontend (independent layer)
    tracing::debug!("Building CLI frontend...");
    let frontend = CliFrontend::new(frontend_config, cli_config);

    // 5. Build and run
    let client = Client::builder()
        .tracker(setup.tracker)
        .frontend(frontend)
        .build()?;

    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
