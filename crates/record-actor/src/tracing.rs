//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber once per process.
//!
//! - **Filtering** comes from `RUST_LOG`; without it, `info` and above are shown.
//! - **Compact format** with the module path hidden (`with_target(false)`). Actors log an
//!   `entity_type` field instead, so lines stay short.
//!
//! ```bash
//! RUST_LOG=info cargo run      # one line per stored row change
//! RUST_LOG=debug cargo run     # adds every request with its payload
//! ```
//!
//! With `RUST_LOG=debug`, creating a Case that references Agent 1 reads:
//!
//! ```text
//! DEBUG Create entity_type="Case" params=CaseDraft { titulo: "x", .. agente_id: AgentId(1) }
//! DEBUG Get entity_type="Agent" id=1 found=true
//! INFO Created entity_type="Case" id=1 size=1
//! ```
//!
//! The `Get` on the Agent table is the Case table's foreign-key hook at work.

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .compact()
        .init();
}
