//! # Attest Desktop Library
//!
//! Core library for the Attest desktop application.
//! This is the main entry point that configures and runs the Tauri app.
//!
//! ## Module Organization
//! ```text
//! attest_desktop_lib/
//! ├── lib.rs          ◄─── You are here (Tauri setup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Catalog loading + read-only wrapper
//! │   ├── session.rs  ◄─── Quiz session state management
//! │   ├── gate.rs     ◄─── Confirmation gate state
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── topic.rs    ◄─── Catalog enumeration commands
//! │   ├── session.rs  ◄─── Screen-flow and answer commands
//! │   ├── confirm.rs  ◄─── Confirmation round-trip commands
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tauri::Manager;
use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{CatalogState, ConfigState, GateState, SessionState};

/// Runs the Tauri application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Read Configuration ───────────────────────────────────────────────► │
/// │     • Defaults overridden by ATTEST_* environment variables             │
/// │                                                                         │
/// │  3. Load & Validate Catalog ──────────────────────────────────────────► │
/// │     • Configured path / app data dir / bundled default                  │
/// │     • Integrity violations abort startup                                │
/// │                                                                         │
/// │  4. Initialize State Objects ─────────────────────────────────────────► │
/// │     • CatalogState: frozen topics                                       │
/// │     • SessionState: welcome screen, zeroed score                        │
/// │     • GateState: closed confirmation gate                               │
/// │     • ConfigState: from step 2                                          │
/// │                                                                         │
/// │  5. Build & Run Tauri App ────────────────────────────────────────────► │
/// │     • Register all commands                                             │
/// │     • Manage state                                                      │
/// │     • Launch window                                                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() {
    // Initialize tracing (logging)
    init_tracing();

    info!("Starting Attest Desktop Application");

    // Build and run the Tauri app
    tauri::Builder::default()
        // Setup hook runs before the app starts
        .setup(|app| {
            let config = ConfigState::from_env();
            info!(
                threshold = config.pass_threshold_percent,
                "Configuration loaded"
            );

            let catalog_state = CatalogState::load(config.catalog_path.as_ref())?;
            info!(
                topics = catalog_state.catalog().count(),
                "Catalog loaded and validated"
            );

            // Register state with Tauri
            app.manage(catalog_state);
            app.manage(SessionState::new());
            app.manage(GateState::new());
            app.manage(config);

            info!("State initialized");
            Ok(())
        })
        // Register all commands
        .invoke_handler(tauri::generate_handler![
            // Topic commands
            commands::topic::list_topics,
            // Session commands
            commands::session::get_session,
            commands::session::enter_topics,
            commands::session::start_quiz,
            commands::session::select_option,
            commands::session::submit_answer,
            commands::session::next_question,
            commands::session::reset_to_topics,
            commands::session::return_to_welcome,
            // Confirmation commands
            commands::confirm::request_confirmation,
            commands::confirm::confirm_pending,
            commands::confirm::cancel_confirmation,
            commands::confirm::get_confirmation,
            // Config commands
            commands::config::get_config,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=attest=trace` - Show trace for attest crates only
/// - Default: INFO level, DEBUG for attest crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,attest=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
