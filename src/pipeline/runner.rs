//! Pipeline runner — orchestrates stage execution.
//!
//! The [`Pipeline`] struct holds the two injected policies plus the config.
//! Calling [`Pipeline::run`] executes the four stages in order — validate,
//! accumulate, rank, project — and returns the report entries in rank order.
//!
//! # Static dispatch
//!
//! `Pipeline` is generic over both policy types, so the compiler
//! monomorphizes each combination into a unique concrete type. The zero-sized
//! defaults ([`DiscountedRevenue`], [`TieredBonus`]) add zero bytes and zero
//! runtime cost.

use crate::accumulate::accumulate;
use crate::errors::{Result, SalesRankError};
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, STAGE_ACCUMULATE, STAGE_PROJECT, STAGE_RANK,
    STAGE_VALIDATE,
};
use crate::pipeline::validation::ValidationEngine;
use crate::policy::{BonusPolicy, DiscountedRevenue, RevenuePolicy, TieredBonus};
use crate::project::{project, ReportEntry};
use crate::rank::rank_sellers;
use crate::types::{SalesInput, SalesRankConfig};

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

// ============================================================================
// Pipeline — policy container and orchestrator
// ============================================================================

/// The report pipeline, composed of two concrete policies and a config.
#[derive(Debug, Clone)]
pub struct Pipeline<R, B> {
    pub revenue: R,
    pub bonus: B,
    pub config: SalesRankConfig,
}

/// Type alias for the default pipeline: discounted revenue + tiered bonus.
pub type StandardPipeline = Pipeline<DiscountedRevenue, TieredBonus>;

impl StandardPipeline {
    /// Build the standard pipeline with both default policies and the
    /// default config (top 10 products per seller).
    pub fn standard() -> Self {
        Pipeline {
            revenue: DiscountedRevenue,
            bonus: TieredBonus,
            config: SalesRankConfig::default(),
        }
    }
}

impl Default for StandardPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

impl<R: RevenuePolicy, B: BonusPolicy> Pipeline<R, B> {
    /// Build a pipeline from custom policies, with the default config.
    pub fn with_policies(revenue: R, bonus: B) -> Self {
        Self {
            revenue,
            bonus,
            config: SalesRankConfig::default(),
        }
    }

    /// Replace the config.
    pub fn with_config(mut self, config: SalesRankConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the pipeline, discarding stage reports.
    pub fn run(&self, input: &SalesInput) -> Result<Vec<ReportEntry>> {
        self.run_with_observer(input, &mut NoopObserver)
    }

    /// Run the pipeline, notifying `observer` after each stage.
    ///
    /// All-or-nothing: validation failures return an error before any
    /// accumulation happens, and no partial result is ever produced.
    pub fn run_with_observer(
        &self,
        input: &SalesInput,
        observer: &mut impl PipelineObserver,
    ) -> Result<Vec<ReportEntry>> {
        self.config.validate()?;

        let report = {
            trace_stage!(STAGE_VALIDATE);
            let clock = StageClock::start(STAGE_VALIDATE);
            let report = ValidationEngine::with_defaults().validate(input);
            observer.on_stage(&clock.finish(report.len()));
            report
        };
        if report.has_errors() {
            return Err(SalesRankError::invalid_input(report.error_summary()));
        }

        let accumulators = {
            trace_stage!(STAGE_ACCUMULATE);
            let clock = StageClock::start(STAGE_ACCUMULATE);
            let accumulators = accumulate(input, &self.revenue);
            observer.on_stage(&clock.finish(accumulators.len()));
            accumulators
        };

        let ranked = {
            trace_stage!(STAGE_RANK);
            let clock = StageClock::start(STAGE_RANK);
            let ranked = rank_sellers(accumulators, &self.bonus);
            observer.on_stage(&clock.finish(ranked.len()));
            ranked
        };

        let entries = {
            trace_stage!(STAGE_PROJECT);
            let clock = StageClock::start(STAGE_PROJECT);
            let entries = project(ranked, self.config.top_products);
            observer.on_stage(&clock.finish(entries.len()));
            entries
        };

        Ok(entries)
    }
}

/// Convenience entry point: run the standard pipeline over `input`.
pub fn generate_report(input: &SalesInput) -> Result<Vec<ReportEntry>> {
    StandardPipeline::standard().run(input)
}
