// ============================================================================
// BAS - BE A SELLER - STUDENT MARKETPLACE FRONTEND (YEW + WASM)
// ============================================================================
// Layers:
// - Models: wire types shared with the backend
// - Services: HTTP only, typed errors
// - State: session token and its storage mirror
// - ViewModels: per-view state and rules, no DOM
// - Hooks / Components: Yew glue and rendering
// ============================================================================

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

use crate::config::CONFIG;

/// Console logger at the configured level.
pub fn init_logging() {
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
}
