//! Observation hooks for pipeline execution.
//!
//! A [`PipelineObserver`] is notified once per stage with a [`StageReport`]
//! carrying the stage name, wall-clock duration, and the number of items the
//! stage produced. The default [`NoopObserver`] discards reports with zero
//! overhead; callers can plug in their own to collect timings or feed a
//! metrics sink.

use std::time::{Duration, Instant};

/// Stage name constants, in execution order.
pub const STAGE_VALIDATE: &str = "validate";
pub const STAGE_ACCUMULATE: &str = "accumulate";
pub const STAGE_RANK: &str = "rank";
pub const STAGE_PROJECT: &str = "project";

/// Summary of one completed pipeline stage.
#[derive(Debug, Clone)]
pub struct StageReport {
    /// Stage name (one of the `STAGE_*` constants).
    pub stage: &'static str,
    /// Wall-clock time spent in the stage.
    pub duration: Duration,
    /// Number of items the stage produced (diagnostics, accumulators,
    /// ranked sellers, or report entries).
    pub items_out: usize,
}

/// Receives a [`StageReport`] after each pipeline stage completes.
pub trait PipelineObserver {
    /// Called once per stage, in execution order.
    fn on_stage(&mut self, report: &StageReport);
}

/// Observer that discards all reports — the default for most callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {
    #[inline]
    fn on_stage(&mut self, _report: &StageReport) {
        // Intentionally empty.
    }
}

/// Stopwatch for timing a single stage.
pub(crate) struct StageClock {
    stage: &'static str,
    started: Instant,
}

impl StageClock {
    pub(crate) fn start(stage: &'static str) -> Self {
        Self {
            stage,
            started: Instant::now(),
        }
    }

    pub(crate) fn finish(self, items_out: usize) -> StageReport {
        StageReport {
            stage: self.stage,
            duration: self.started.elapsed(),
            items_out,
        }
    }
}
