//! # margin-calc — Seller-Tooling Margin Backend
//!
//! ```text
//!  ┌─────────────┐  POST /margin                ┌──────────────────────────┐
//!  │  Dashboard  │ ───────────────────────────▶ │ engine::margin           │
//!  │  (Next.js)  │  POST /margin/breakdown      │ ├─ evaluate              │
//!  └─────────────┘  GET  /api/platforms         │ └─ evaluate_breakdown    │
//!                                               ├──────────────────────────┤
//!  ┌─────────────┐  POST /api/trends/profitability                         │
//!  │  Trends UI  │ ───────────────────────────▶ │ engine::profitability    │
//!  └─────────────┘                              └──────────────────────────┘
//!                   GET  /health
//! ```

use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod auth;
mod config;
mod engine;
mod error;
mod models;
mod routes;
mod state;

use config::Config;
use state::build_state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── 1. Load .env ──────────────────────────────────────────────────────────
    dotenvy::dotenv().ok();

    // ── 2. Structured logging ─────────────────────────────────────────────────
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::from_default_env()
                .add_directive("margin_calc=debug".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    info!(r#"

  ╔═══════════════════════════════════════════════════════╗
  ║           MARGIN-CALC — Seller Tooling Backend        ║
  ║  Margin · Breakdown · Keyword Profitability           ║
  ╚═══════════════════════════════════════════════════════╝"#);

    // ── 3. Config + shared state ──────────────────────────────────────────────
    let config = Config::from_env()?;
    let addr = config.bind_addr;
    info!(
        auth_enabled = config.api_key.is_some(),
        shipping     = config.default_shipping_cost,
        packaging    = config.default_packaging_cost,
        "⚙️ config loaded"
    );
    let state = build_state(config);

    // ── 4. Router ─────────────────────────────────────────────────────────────
    let app = routes::router(state);

    // ── 5. Bind & Serve ───────────────────────────────────────────────────────
    info!(?addr, "🚀 margin-calc server starting");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
