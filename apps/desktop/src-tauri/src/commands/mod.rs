//! # Tauri Commands Module
//!
//! All commands exposed to the WebView frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── topic.rs    ◄─── Topic catalog enumeration
//! ├── session.rs  ◄─── Screen-flow and answer intents
//! ├── confirm.rs  ◄─── Confirmation gate round-trip
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tauri Command Flow                                   │
//! │                                                                         │
//! │  Frontend                                                               │
//! │  ────────                                                               │
//! │  import { invoke } from '@tauri-apps/api/core';                         │
//! │                                                                         │
//! │  const view = await invoke('submit_answer');                            │
//! │         │                                                               │
//! │         │ (IPC via WebView)                                             │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  #[tauri::command]                                                      │
//! │  fn submit_answer(                                                      │
//! │      session: State<'_, SessionState>,  ◄── Injected by Tauri          │
//! │      catalog: State<'_, CatalogState>,  ◄── Injected by Tauri          │
//! │      config: State<'_, ConfigState>,    ◄── Injected by Tauri          │
//! │  ) -> SessionView                                                       │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Frontend receives: SessionView - and redraws from it alone             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every state-changing command returns the full [`session::SessionView`]
//! snapshot, so the frontend never derives state of its own: it renders
//! whatever the last snapshot says. Intents map 1:1 onto the core's
//! operations; the confirmation commands wrap the destructive ones.

pub mod config;
pub mod confirm;
pub mod session;
pub mod topic;
