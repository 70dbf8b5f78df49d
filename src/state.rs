//! # state
//!
//! AppState — config ที่อ่านตอน startup + ตัวนับการคำนวณสำหรับ `/health`
//!
//! ไม่มี lock: config เป็น read-only, counter เป็น atomic

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::config::Config;

// ─── AppState ─────────────────────────────────────────────────────────────────

/// Top-level shared state injected into every Axum handler.
pub struct AppState {
    pub config: Config,

    // ── Metrics ───────────────────────────────────────────────────────────────
    /// จำนวนการคำนวณที่สำเร็จตั้งแต่ start
    pub calc_count: AtomicU64,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            calc_count: AtomicU64::new(0),
        }
    }

    /// นับการคำนวณที่สำเร็จ 1 ครั้ง
    #[inline]
    pub fn record_calculation(&self) {
        self.calc_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn calculations(&self) -> u64 {
        self.calc_count.load(Ordering::Relaxed)
    }
}

/// Convenience type alias
pub type SharedState = Arc<AppState>;

pub fn build_state(config: Config) -> SharedState {
    Arc::new(AppState::new(config))
}
