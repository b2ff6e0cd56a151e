//! # State Module
//!
//! Manages application state for the Tauri desktop app.
//!
//! ## Why Multiple State Types? (Option B)
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can construct/inject individual states
//! 3. **Clearer Command Signatures**: Commands declare exactly what state they need
//! 4. **Reduced Contention**: Independent states don't block each other
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Tauri Runtime                              │   │
//! │  │  app.manage(catalog_state);                                     │   │
//! │  │  app.manage(session_state);                                     │   │
//! │  │  app.manage(gate_state);                                        │   │
//! │  │  app.manage(config_state);                                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │      ┌───────────────┬──────┴────────┬─────────────────┐              │
//! │      ▼               ▼               ▼                 ▼              │
//! │  ┌──────────┐  ┌────────────┐  ┌───────────┐  ┌──────────────┐       │
//! │  │ Catalog  │  │ Session    │  │ GateState │  │ ConfigState  │       │
//! │  │ State    │  │ State      │  │           │  │              │       │
//! │  │          │  │ Arc<Mutex< │  │ Arc<Mutex<│  │ org name     │       │
//! │  │ (topics, │  │  Quiz      │  │  Confirm  │  │ threshold    │       │
//! │  │  frozen) │  │  Session>> │  │  Gate>>   │  │ catalog path │       │
//! │  └──────────┘  └────────────┘  └───────────┘  └──────────────┘       │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CatalogState: Read-only after startup (no lock)                     │
//! │  • SessionState: Protected by Arc<Mutex<T>> for exclusive access       │
//! │  • GateState:    Protected by Arc<Mutex<T>> for exclusive access       │
//! │  • ConfigState:  Read-only after initialization                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod catalog;
mod config;
mod gate;
mod session;

pub use catalog::CatalogState;
pub use config::ConfigState;
pub use gate::GateState;
pub use session::SessionState;
