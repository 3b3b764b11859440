//! Frame and operation timing.
//!
//! [`FrameMonitor`] tracks whole-frame times for the view loop and warns
//! when a frame blows past the 60 FPS budget. Finer-grained timings come
//! from [`ScopedTimer`] values recorded at scope exit into a process-wide
//! registry keyed by operation name. The `profiling` feature gates the
//! `profile_scope!` instrumentation on the hot paths (gesture arbitration,
//! hit testing, scene composition).

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::time::Instant;
use tracing::warn;

#[cfg(feature = "profiling")]
use tracing::trace;

/// Frame-time budget for 60 FPS, in milliseconds.
pub const FRAME_BUDGET_MS: f64 = 16.67;

/// Rolling window of frame samples behind the averages.
const FRAME_WINDOW: usize = 60;

/// A frame this many times over budget counts as slow.
const SLOW_FACTOR: f64 = 2.0;

/// Rolling window of samples kept per operation.
const OP_WINDOW: usize = 100;

// ============================================================================
// Profiling macro
// ============================================================================

/// Time the enclosing scope under `name` when the `profiling` feature is
/// enabled; compiles to nothing otherwise.
///
/// ```ignore
/// fn nearest_tactic(...) {
///     profile_scope!("hit_test_tactics");
///     // ...
/// }
/// ```
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name; // keep the name expression used in both configurations
    };
}

pub use profile_scope;

// ============================================================================
// Frame monitor
// ============================================================================

/// Rolling frame-time statistics for the view's frame loop.
pub struct FrameMonitor {
    window: VecDeque<f64>,
    /// Start of the frame currently being timed, if any
    in_flight: Option<Instant>,
    slow_frames: u64,
    frames: u64,
}

impl Default for FrameMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameMonitor {
    pub fn new() -> Self {
        Self {
            window: VecDeque::with_capacity(FRAME_WINDOW),
            in_flight: None,
            slow_frames: 0,
            frames: 0,
        }
    }

    /// Start timing a frame.
    pub fn begin_frame(&mut self) {
        self.in_flight = Some(Instant::now());
    }

    /// Finish the frame started by [`begin_frame`](Self::begin_frame) and
    /// return its duration in milliseconds. `None` when no frame is open.
    pub fn end_frame(&mut self) -> Option<f64> {
        let started = self.in_flight.take()?;
        let ms = started.elapsed().as_secs_f64() * 1000.0;

        if self.window.len() == FRAME_WINDOW {
            self.window.pop_front();
        }
        self.window.push_back(ms);
        self.frames += 1;

        if ms > FRAME_BUDGET_MS * SLOW_FACTOR {
            self.slow_frames += 1;
            warn!(
                frame_ms = format!("{:.2}", ms),
                budget_ms = FRAME_BUDGET_MS,
                "frame over budget"
            );
        }

        Some(ms)
    }

    /// Average frame time over the rolling window, in milliseconds.
    pub fn average_frame_time(&self) -> f64 {
        match self.window.len() {
            0 => 0.0,
            n => self.window.iter().sum::<f64>() / n as f64,
        }
    }

    /// Worst frame time in the rolling window, in milliseconds.
    pub fn max_frame_time(&self) -> f64 {
        self.window.iter().fold(0.0f64, |worst, &ms| worst.max(ms))
    }

    /// Frame rate implied by the average frame time.
    pub fn estimated_fps(&self) -> f64 {
        let avg = self.average_frame_time();
        if avg > 0.0 { 1000.0 / avg } else { 0.0 }
    }

    pub fn total_frames(&self) -> u64 {
        self.frames
    }

    pub fn slow_frame_count(&self) -> u64 {
        self.slow_frames
    }

    /// Discard all samples and counters.
    pub fn reset(&mut self) {
        self.window.clear();
        self.in_flight = None;
        self.slow_frames = 0;
        self.frames = 0;
    }
}

// ============================================================================
// Operation statistics
// ============================================================================

/// Timing summary for one named operation.
///
/// The average covers only the rolling window; count, min and max cover
/// every sample ever recorded.
#[derive(Debug, Clone, Default)]
pub struct OperationStats {
    samples: VecDeque<f64>,
    count: u64,
    min: Option<f64>,
    max: f64,
}

impl OperationStats {
    pub fn record(&mut self, ms: f64) {
        if self.samples.len() == OP_WINDOW {
            self.samples.pop_front();
        }
        self.samples.push_back(ms);
        self.count += 1;
        self.min = Some(self.min.map_or(ms, |m| m.min(ms)));
        self.max = self.max.max(ms);
    }

    /// Average over the rolling window, in milliseconds.
    pub fn average(&self) -> f64 {
        match self.samples.len() {
            0 => 0.0,
            n => self.samples.iter().sum::<f64>() / n as f64,
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn min_ms(&self) -> f64 {
        self.min.unwrap_or(0.0)
    }

    pub fn max_ms(&self) -> f64 {
        self.max
    }
}

static REGISTRY: Lazy<Mutex<HashMap<&'static str, OperationStats>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Record one sample for a named operation in the global registry.
pub fn record_operation(name: &'static str, ms: f64) {
    REGISTRY.lock().entry(name).or_default().record(ms);
}

/// Snapshot one operation's statistics from the global registry.
pub fn operation_stats(name: &str) -> Option<OperationStats> {
    REGISTRY.lock().get(name).cloned()
}

/// Drop everything recorded in the global registry.
pub fn reset_operation_stats() {
    REGISTRY.lock().clear();
}

// ============================================================================
// Scoped timer
// ============================================================================

/// Times a region of code and records it under `name` when dropped.
pub struct ScopedTimer {
    name: &'static str,
    started: Instant,
}

impl ScopedTimer {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            started: Instant::now(),
        }
    }

    /// Time elapsed so far, in milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let ms = self.elapsed_ms();
        record_operation(self.name, ms);

        #[cfg(feature = "profiling")]
        if ms > 1.0 {
            trace!(name = self.name, ms = format!("{:.2}", ms), "slow scope");
        }
    }
}

/// Run `f`, returning its result together with the elapsed milliseconds.
#[inline]
pub fn measure<T>(f: impl FnOnce() -> T) -> (T, f64) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed().as_secs_f64() * 1000.0)
}
