//! Runtime knobs for eager operators that downstream code can
//! serialize/deserialize.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Initial capacity reserved by eager operators (reverse, ordering
    /// snapshots, group and join builds).
    pub buffer_capacity_hint: usize,

    /// Seen-list length past which an equality-based set operator emits a
    /// warning (the scan is quadratic).
    pub linear_scan_warn_len: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            buffer_capacity_hint: 16,
            linear_scan_warn_len: 4096,
        }
    }
}

static GLOBAL: Lazy<QueryConfig> = Lazy::new(QueryConfig::from_env);

impl QueryConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `QSEQ_BUFFER_CAPACITY_HINT`: initial buffer capacity
    /// - `QSEQ_LINEAR_SCAN_WARN_LEN`: linear-scan warning threshold
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("QSEQ_BUFFER_CAPACITY_HINT") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.buffer_capacity_hint = v;
            }
        }

        if let Ok(s) = std::env::var("QSEQ_LINEAR_SCAN_WARN_LEN") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.linear_scan_warn_len = v;
            }
        }

        cfg
    }

    /// Parse a JSON config; missing fields take their defaults.
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Process-wide snapshot of `from_env()`, taken on first use.
    pub fn global() -> &'static QueryConfig {
        &GLOBAL
    }

    /// Capacity to reserve for a buffer fed by an iterator with `size_hint`.
    pub fn capacity_for(&self, size_hint: (usize, Option<usize>)) -> usize {
        size_hint.0.max(self.buffer_capacity_hint)
    }
}
