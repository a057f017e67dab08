//! Locale resolution metrics.
//!
//! Counts how requests leave the resolver (resolved, redirected, not found).
//! One instance lives in the server state; `/health` reports it.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Per-server resolution counters.
#[derive(Debug, Default)]
pub struct ResolutionMetrics {
    /// Requests bound to a supported locale
    resolved: AtomicUsize,

    /// Bare-root requests redirected to the default locale
    redirected: AtomicUsize,

    /// Requests rejected because of an unsupported or missing locale segment
    not_found: AtomicUsize,
}

impl ResolutionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_resolved(&self) {
        self.resolved.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_redirect(&self) {
        self.redirected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_not_found(&self) {
        self.not_found.fetch_add(1, Ordering::Relaxed);
    }

    pub fn resolved(&self) -> usize {
        self.resolved.load(Ordering::Relaxed)
    }

    pub fn redirected(&self) -> usize {
        self.redirected.load(Ordering::Relaxed)
    }

    pub fn not_found(&self) -> usize {
        self.not_found.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let resolved = self.resolved();
        let redirected = self.redirected();
        let not_found = self.not_found();
        let total = resolved + redirected + not_found;
        let not_found_rate = if total > 0 {
            (not_found as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            resolved,
            redirected,
            not_found,
            total,
            not_found_rate,
        }
    }
}

/// Snapshot of resolution statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub resolved: usize,
    pub redirected: usize,
    pub not_found: usize,
    pub total: usize,

    /// Share of requests answered with NotFound, as a percentage (0-100)
    pub not_found_rate: f64,
}
