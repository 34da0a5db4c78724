//! Metrics collection and reporting

use std::collections::{BTreeMap, VecDeque};
use std::fmt::Write as _;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use std::time::Duration;
use warden_core::Outcome;

pub const DECISIONS_TOTAL: &str = "decisions_total";
pub const DECISIONS_PERMIT: &str = "decisions_permit";
pub const DECISIONS_DENY: &str = "decisions_deny";
pub const DECISIONS_DEFAULT_DENY: &str = "decisions_default_deny";
pub const CONDITION_ERRORS: &str = "condition_errors";
pub const EVALUATION_DURATION: &str = "evaluation_duration";

/// Counter metric
#[derive(Debug)]
pub struct Counter {
    name: String,
    value: AtomicU64,
}

impl Counter {
    /// Create a new counter
    pub fn new(name: String) -> Self {
        Self {
            name,
            value: AtomicU64::new(0),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Increment the counter
    pub fn inc(&self) {
        self.add(1);
    }

    /// Add a value to the counter
    pub fn add(&self, value: u64) {
        self.value.fetch_add(value, Ordering::Relaxed);
    }

    /// Get the current value
    pub fn get(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }

    /// Reset the counter
    pub fn reset(&self) {
        self.value.store(0, Ordering::Relaxed);
    }
}

/// Most recent samples a [`Histogram`] keeps for percentiles
pub const HISTOGRAM_WINDOW: usize = 1024;

/// Histogram metric for tracking distributions.
///
/// Count and sum cover every observation. Percentiles are computed over the
/// last [`HISTOGRAM_WINDOW`] samples only, so memory stays constant under
/// sustained traffic.
#[derive(Debug)]
pub struct Histogram {
    name: String,
    state: Mutex<HistogramState>,
}

#[derive(Debug)]
struct HistogramState {
    window: VecDeque<f64>,
    capacity: usize,
    count: u64,
    sum: f64,
}

impl Histogram {
    /// Create a new histogram
    pub fn new(name: String) -> Self {
        Self::with_window(name, HISTOGRAM_WINDOW)
    }

    /// Create a histogram that keeps at most `capacity` recent samples
    pub fn with_window(name: String, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            name,
            state: Mutex::new(HistogramState {
                window: VecDeque::with_capacity(capacity),
                capacity,
                count: 0,
                sum: 0.0,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn state(&self) -> MutexGuard<'_, HistogramState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Observe a value
    pub fn observe(&self, value: f64) {
        let mut state = self.state();
        if state.window.len() == state.capacity {
            state.window.pop_front();
        }
        state.window.push_back(value);
        state.count += 1;
        state.sum += value;
    }

    /// Observe a duration, in seconds
    pub fn observe_duration(&self, duration: Duration) {
        self.observe(duration.as_secs_f64());
    }

    /// Number of observations since creation
    pub fn count(&self) -> u64 {
        self.state().count
    }

    /// Sum of all observations since creation
    pub fn sum(&self) -> f64 {
        self.state().sum
    }

    /// Samples currently held for percentiles
    pub fn retained(&self) -> usize {
        self.state().window.len()
    }

    /// Percentile (0-100) over the retained window
    pub fn percentile(&self, p: f64) -> f64 {
        let mut values: Vec<f64> = self.state().window.iter().copied().collect();
        if values.is_empty() {
            return 0.0;
        }

        values.sort_by(|a, b| a.total_cmp(b));
        let index = ((p / 100.0) * (values.len() - 1) as f64).round() as usize;
        values[index.min(values.len() - 1)]
    }
}

/// Metrics collector
#[derive(Debug, Default)]
pub struct MetricsCollector {
    counters: RwLock<BTreeMap<String, Arc<Counter>>>,
    histograms: RwLock<BTreeMap<String, Arc<Histogram>>>,
}

impl MetricsCollector {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Counter registered under `name`, created on first use
    pub fn counter(&self, name: &str) -> Arc<Counter> {
        if let Some(counter) = self
            .counters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
        {
            return counter.clone();
        }
        self.counters
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(Counter::new(name.to_string())))
            .clone()
    }

    /// Histogram registered under `name`, created on first use
    pub fn histogram(&self, name: &str) -> Arc<Histogram> {
        if let Some(histogram) = self
            .histograms
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
        {
            return histogram.clone();
        }
        self.histograms
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(Histogram::new(name.to_string())))
            .clone()
    }

    /// Record the outcome and latency of one evaluation
    pub fn record_decision(&self, outcome: Outcome, default_deny: bool, duration: Duration) {
        self.counter(DECISIONS_TOTAL).inc();
        match outcome {
            Outcome::Permit => self.counter(DECISIONS_PERMIT).inc(),
            Outcome::Deny => self.counter(DECISIONS_DENY).inc(),
        }
        if default_deny {
            self.counter(DECISIONS_DEFAULT_DENY).inc();
        }
        self.histogram(EVALUATION_DURATION).observe_duration(duration);
    }

    /// Record a rule condition that failed and was treated as a non-match
    pub fn record_condition_error(&self) {
        self.counter(CONDITION_ERRORS).inc();
    }

    /// Render every metric as `name value` lines, sorted by name
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for (name, counter) in self
            .counters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
        {
            let _ = writeln!(out, "{} {}", name, counter.get());
        }
        for (name, histogram) in self
            .histograms
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
        {
            let _ = writeln!(out, "{}_count {}", name, histogram.count());
            let _ = writeln!(out, "{}_sum {}", name, histogram.sum());
            let _ = writeln!(out, "{}_p95 {}", name, histogram.percentile(95.0));
        }
        out
    }
}
